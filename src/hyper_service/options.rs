use super::{Request, Response};
use crate::chain::BoxError;

use std::fmt;
use std::sync::Arc;

use hyper::{Body, StatusCode};

type OnError = dyn Fn(BoxError, &mut Request, &mut Response) -> Option<Response> + Send + Sync;
type OnNoMatch = dyn Fn(&mut Request, &mut Response) -> Option<Response> + Send + Sync;

/// Error and not-found behavior of a [`RouterService`](super::RouterService).
///
/// Both callbacks receive the response the chain was working on. Returning
/// `None` sends that response as modified; returning `Some` replaces it.
#[derive(Clone, Default)]
pub struct HandlerOptions {
    on_error: Option<Arc<OnError>>,
    on_no_match: Option<Arc<OnNoMatch>>,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(BoxError, &mut Request, &mut Response) -> Option<Response> + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn on_no_match<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Request, &mut Response) -> Option<Response> + Send + Sync + 'static,
    {
        self.on_no_match = Some(Arc::new(f));
        self
    }

    pub(super) fn handle_error(
        &self,
        err: BoxError,
        req: &mut Request,
        mut res: Response,
    ) -> Response {
        let ret = match self.on_error {
            Some(ref f) => f(err, req, &mut res),
            None => default_on_error(err, req, &mut res),
        };
        ret.unwrap_or(res)
    }

    pub(super) fn handle_no_match(&self, req: &mut Request, mut res: Response) -> Response {
        let ret = match self.on_no_match {
            Some(ref f) => f(req, &mut res),
            None => default_on_no_match(req, &mut res),
        };
        ret.unwrap_or(res)
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("on_error", &self.on_error.is_some())
            .field("on_no_match", &self.on_no_match.is_some())
            .finish()
    }
}

fn default_on_error(err: BoxError, req: &mut Request, res: &mut Response) -> Option<Response> {
    tracing::error!(
        method = %req.method(),
        path = req.uri().path(),
        error = %err,
        "unhandled error in handler chain"
    );
    *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    *res.body_mut() = Body::from("Internal Server Error");
    None
}

fn default_on_no_match(req: &mut Request, res: &mut Response) -> Option<Response> {
    *res.status_mut() = StatusCode::NOT_FOUND;
    *res.body_mut() = Body::from(format!(
        "Route {} {} not found",
        req.method(),
        req.uri().path()
    ));
    None
}
