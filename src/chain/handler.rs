use super::{BoxFuture, Next, Outcome};

use std::sync::Arc;

/// A unit of request processing.
///
/// A handler receives the request, the response and the continuation of the
/// chain. Calling [`Next::run`] executes every later handler and resolves to
/// what they produce; returning without calling it ends the chain here.
pub trait Handler<Req, Res, T>: Send + Sync {
    fn call<'a>(
        &'a self,
        req: &'a mut Req,
        res: &'a mut Res,
        next: Next<'a, Req, Res, T>,
    ) -> BoxFuture<'a, Outcome<T>>;
}

pub type SharedHandler<Req, Res, T> = Arc<dyn Handler<Req, Res, T>>;

impl<Req, Res, T> Handler<Req, Res, T> for Box<dyn Handler<Req, Res, T>> {
    fn call<'a>(
        &'a self,
        req: &'a mut Req,
        res: &'a mut Res,
        next: Next<'a, Req, Res, T>,
    ) -> BoxFuture<'a, Outcome<T>> {
        Handler::call(&**self, req, res, next)
    }
}

impl<Req, Res, T> Handler<Req, Res, T> for SharedHandler<Req, Res, T> {
    fn call<'a>(
        &'a self,
        req: &'a mut Req,
        res: &'a mut Res,
        next: Next<'a, Req, Res, T>,
    ) -> BoxFuture<'a, Outcome<T>> {
        Handler::call(&**self, req, res, next)
    }
}

/// A handler backed by a closure. See [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F> {
    f: F,
}

/// Lifts a closure into a [`Handler`].
///
/// ```
/// use nuclear_connect::{handler_fn, BoxFuture, Next, Outcome, Router};
///
/// fn count<'a>(
///     req: &'a mut Vec<u8>,
///     res: &'a mut (),
///     next: Next<'a, Vec<u8>, (), u8>,
/// ) -> BoxFuture<'a, Outcome<u8>> {
///     Box::pin(async move {
///         req.push(1);
///         next.run(req, res).await
///     })
/// }
///
/// let mut router = Router::new();
/// router.with(handler_fn(count));
/// ```
pub fn handler_fn<Req, Res, T, F>(f: F) -> HandlerFn<F>
where
    F: for<'a> Fn(&'a mut Req, &'a mut Res, Next<'a, Req, Res, T>) -> BoxFuture<'a, Outcome<T>>
        + Send
        + Sync,
{
    HandlerFn { f }
}

impl<Req, Res, T, F> Handler<Req, Res, T> for HandlerFn<F>
where
    F: for<'a> Fn(&'a mut Req, &'a mut Res, Next<'a, Req, Res, T>) -> BoxFuture<'a, Outcome<T>>
        + Send
        + Sync,
{
    fn call<'a>(
        &'a self,
        req: &'a mut Req,
        res: &'a mut Res,
        next: Next<'a, Req, Res, T>,
    ) -> BoxFuture<'a, Outcome<T>> {
        (self.f)(req, res, next)
    }
}
