use super::Router;
use crate::chain::{Handler, SharedHandler};

use std::sync::Arc;

/// An item passed to [`Router::try_use`]: a handler or a router to mount.
pub enum Entry<Req, Res, T> {
    Handler(SharedHandler<Req, Res, T>),
    Router(Router<Req, Res, T>),
}

impl<Req, Res, T> Entry<Req, Res, T> {
    pub fn handler(h: impl Handler<Req, Res, T> + 'static) -> Self {
        Self::Handler(Arc::new(h))
    }

    #[inline]
    pub(super) fn is_router(&self) -> bool {
        match self {
            Self::Handler(_) => false,
            Self::Router(_) => true,
        }
    }
}

impl<Req, Res, T> From<SharedHandler<Req, Res, T>> for Entry<Req, Res, T> {
    fn from(h: SharedHandler<Req, Res, T>) -> Self {
        Self::Handler(h)
    }
}

impl<Req, Res, T> From<Router<Req, Res, T>> for Entry<Req, Res, T> {
    fn from(r: Router<Req, Res, T>) -> Self {
        Self::Router(r)
    }
}

impl<Req, Res, T> From<&Router<Req, Res, T>> for Entry<Req, Res, T> {
    fn from(r: &Router<Req, Res, T>) -> Self {
        Self::Router(r.clone())
    }
}
