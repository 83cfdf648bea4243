use super::options::HandlerOptions;
use super::{Request, Response};
use crate::chain::{execute, BoxFuture, Outcome};
use crate::method::Method;
use crate::router::{Match, Router};

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

/// A router whose handlers work on hyper requests and responses.
pub type RouteTable = Router<Request, Response, Response>;

/// Serves a [`RouteTable`] as a hyper service.
///
/// Resolved params are attached to the request and can be read with
/// [`RequestExt`](super::RequestExt). A chain that resolves to `Some(response)`
/// sends it; otherwise the response handed to the handlers is sent.
#[derive(Debug, Clone)]
pub struct RouterService {
    router: Arc<RouteTable>,
    options: HandlerOptions,
}

impl RouterService {
    pub fn new(router: RouteTable) -> Self {
        Self::with_options(router, HandlerOptions::default())
    }

    pub fn with_options(router: RouteTable, options: HandlerOptions) -> Self {
        Self {
            router: Arc::new(router),
            options,
        }
    }

    pub fn router(&self) -> &RouteTable {
        &self.router
    }

    /// Executes the matching handlers without rendering errors or not-found
    /// responses. Resolves to `Ok(None)` if nothing matched.
    pub async fn run(&self, req: &mut Request, res: &mut Response) -> Outcome<Response> {
        let Match {
            handlers, params, ..
        } = match self.lookup(req) {
            Some(m) => m,
            None => return Ok(None),
        };
        req.extensions_mut().insert(params);
        execute(&handlers, req, res).await
    }

    /// Produces the response for `req`.
    pub async fn handle(&self, mut req: Request) -> Response {
        let res = Response::default();

        let (handlers, params) = match self.lookup(&req) {
            Some(m) if !m.middle_only && !m.is_empty() => (m.handlers, m.params),
            _ => return self.options.handle_no_match(&mut req, res),
        };
        req.extensions_mut().insert(params);

        let mut res = res;
        match execute(&handlers, &mut req, &mut res).await {
            Ok(Some(ret)) => ret,
            Ok(None) => res,
            Err(e) => self.options.handle_error(e, &mut req, res),
        }
    }

    fn lookup(&self, req: &Request) -> Option<Match<Request, Response, Response>> {
        let method = Method::try_from(req.method()).ok()?;
        Some(self.router.find(method, req.uri().path()))
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let this = self.clone();
        Box::pin(async move { Ok(this.handle(req).await) })
    }
}

impl From<RouteTable> for RouterService {
    fn from(router: RouteTable) -> Self {
        Self::new(router)
    }
}

/// Strips the query string from a request target.
pub fn pathname(url: &str) -> &str {
    match url.find('?') {
        Some(i) => &url[..i],
        None => url,
    }
}
