mod core;
mod endpoint;
mod error;
mod imp;
mod params;
mod router_impl;
mod router_macro;

pub use self::endpoint::Entry;
pub use self::error::RouterError;
pub use self::params::Params;

use crate::chain::SharedHandler;
use crate::method::Method;
use crate::pattern::{Matcher, Pattern};

use std::sync::Arc;

/// An ordered table of routes.
///
/// Every route whose pattern and method accept a request contributes its
/// handlers, in registration order. See [`Router::find`].
pub struct Router<Req, Res, T> {
    base: Box<str>,
    routes: Vec<Arc<Route<Req, Res, T>>>,
    head_fallback: bool,
}

/// One registered binding.
pub struct Route<Req, Res, T> {
    method: Method,
    prefix: Box<str>,
    pattern: Pattern,
    matcher: Matcher,
    handlers: Vec<SharedHandler<Req, Res, T>>,
    middleware: bool,
}

/// The outcome of [`Router::find`].
pub struct Match<Req, Res, T> {
    pub handlers: Vec<SharedHandler<Req, Res, T>>,
    pub params: Params,
    /// `true` when no terminal route matched, even if middleware did.
    pub middle_only: bool,
}

impl<Req, Res, T> Route<Req, Res, T> {
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The pattern as registered, relative to `prefix`.
    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The mount prefix this route was flattened under, `"/"` if none.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[inline]
    pub fn handlers(&self) -> &[SharedHandler<Req, Res, T>] {
        &self.handlers
    }

    #[inline]
    pub fn is_middleware(&self) -> bool {
        self.middleware
    }

    fn accepts(&self, method: Method, head_fallback: bool) -> bool {
        self.middleware
            || self.method.is_all()
            || self.method == method
            || (head_fallback && method == Method::Head && self.method == Method::Get)
    }
}

impl<Req, Res, T> PartialEq for Route<Req, Res, T> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.middleware == other.middleware
            && self.prefix == other.prefix
            && self.pattern == other.pattern
            && self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|(lhs, rhs)| Arc::ptr_eq(lhs, rhs))
    }
}

impl<Req, Res, T> std::fmt::Debug for Route<Req, Res, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("prefix", &self.prefix)
            .field("pattern", &self.pattern)
            .field("keys", &self.matcher.keys())
            .field("handlers", &self.handlers.len())
            .field("middleware", &self.middleware)
            .finish()
    }
}

impl<Req, Res, T> std::fmt::Debug for Router<Req, Res, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("base", &self.base)
            .field("routes", &self.routes)
            .field("head_fallback", &self.head_fallback)
            .finish()
    }
}

impl<Req, Res, T> Match<Req, Res, T> {
    pub(crate) fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            params: Params::new(),
            middle_only: true,
        }
    }

    /// Whether there is nothing to execute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<Req, Res, T> std::fmt::Debug for Match<Req, Res, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("handlers", &self.handlers.len())
            .field("params", &self.params)
            .field("middle_only", &self.middle_only)
            .finish()
    }
}
