use super::{Match, Router};

use crate::method::Method;

impl<Req, Res, T> Router<Req, Res, T> {
    pub(super) fn resolve(&self, method: Method, path: &str) -> Match<Req, Res, T> {
        let mut ret = Match::empty();

        for route in &self.routes {
            if !route.accepts(method, self.head_fallback) {
                continue;
            }
            let params = match route.matcher.test(path) {
                Some(p) => p,
                None => continue,
            };

            ret.params.merge(params);
            ret.handlers.extend(route.handlers.iter().cloned());
            if !route.middleware {
                ret.middle_only = false;
            }
        }

        ret
    }
}
