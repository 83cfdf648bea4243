use super::endpoint::Entry;
use super::error::RouterError;
use super::{Route, Router};

use crate::chain::SharedHandler;
use crate::method::Method;
use crate::pattern::{join, Matcher, Pattern};

use std::sync::Arc;

const ROOT: &str = "/";

impl<Req, Res, T> Router<Req, Res, T> {
    pub(super) fn push_route(
        &mut self,
        method: Method,
        pattern: Pattern,
        handlers: Vec<SharedHandler<Req, Res, T>>,
    ) -> Result<(), RouterError> {
        if handlers.is_empty() {
            return Err(RouterError::EmptyHandlers);
        }
        let matcher = Matcher::compile(&pattern, &self.base, false)?;

        tracing::trace!(%method, %pattern, handlers = handlers.len(), "add route");

        self.routes.push(Arc::new(Route {
            method,
            prefix: ROOT.into(),
            pattern,
            matcher,
            handlers,
            middleware: false,
        }));
        Ok(())
    }

    pub(super) fn push_middleware(
        &mut self,
        pattern: Pattern,
        entries: Vec<Entry<Req, Res, T>>,
    ) -> Result<(), RouterError> {
        if entries.is_empty() {
            return Err(RouterError::EmptyHandlers);
        }

        if !pattern.is_literal() && entries.iter().any(Entry::is_router) {
            return Err(RouterError::NonLiteralMount);
        }
        let prefix = pattern.as_str();

        // Build every route before touching `self.routes`, so that a failure
        // leaves the table as it was.
        let matcher = Matcher::compile(&pattern, &self.base, true)?;
        let mut staged: Vec<Arc<Route<Req, Res, T>>> = Vec::new();
        let mut run: Vec<SharedHandler<Req, Res, T>> = Vec::new();

        let flush = |run: &mut Vec<SharedHandler<Req, Res, T>>,
                     staged: &mut Vec<Arc<Route<Req, Res, T>>>| {
            if !run.is_empty() {
                staged.push(Arc::new(Route {
                    method: Method::All,
                    prefix: ROOT.into(),
                    pattern: pattern.clone(),
                    matcher: matcher.clone(),
                    handlers: std::mem::take(run),
                    middleware: true,
                }));
            }
        };

        for entry in entries {
            match entry {
                Entry::Handler(h) => run.push(h),
                Entry::Router(router) => {
                    flush(&mut run, &mut staged);
                    let mount_base = join(&self.base, prefix);
                    let mounted = router.rebase(&mount_base)?;

                    tracing::trace!(
                        base = %mount_base,
                        routes = mounted.routes.len(),
                        "mount router"
                    );

                    staged.extend(mounted.routes.iter().map(|route| {
                        Arc::new(Route {
                            method: route.method,
                            prefix: join(prefix, &route.prefix).into(),
                            pattern: route.pattern.clone(),
                            matcher: route.matcher.clone(),
                            handlers: route.handlers.clone(),
                            middleware: route.middleware,
                        })
                    }));
                }
            }
        }
        flush(&mut run, &mut staged);

        tracing::trace!(%pattern, routes = staged.len(), "add middleware");

        self.routes.extend(staged);
        Ok(())
    }

    /// Copies the route list, recompiling every matcher against `base`.
    pub(super) fn rebase(&self, base: &str) -> Result<Self, RouterError> {
        let mut routes = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            let full_base = join(base, &route.prefix);
            let matcher = Matcher::compile(&route.pattern, &full_base, route.middleware)?;
            routes.push(Arc::new(Route {
                method: route.method,
                prefix: route.prefix.clone(),
                pattern: route.pattern.clone(),
                matcher,
                handlers: route.handlers.clone(),
                middleware: route.middleware,
            }));
        }
        Ok(Self {
            base: base.into(),
            routes,
            head_fallback: self.head_fallback,
        })
    }
}

impl<Req, Res, T> Clone for Router<Req, Res, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            routes: self.routes.clone(),
            head_fallback: self.head_fallback,
        }
    }
}

impl<Req, Res, T> Default for Router<Req, Res, T> {
    fn default() -> Self {
        Self::new()
    }
}
