use super::{BoxError, BoxFuture, Handler, Next, Outcome};

use tokio::sync::oneshot;

/// Completion signal handed to a callback-style handler.
///
/// Dropping it without calling either method ends the chain with `Ok(None)`.
#[derive(Debug)]
pub struct Done {
    tx: oneshot::Sender<Option<BoxError>>,
}

impl Done {
    /// Continues with the next handler.
    pub fn next(self) {
        self.complete(None)
    }

    /// Fails the handler with `err`.
    pub fn error(self, err: impl Into<BoxError>) {
        self.complete(Some(err.into()))
    }

    /// Error-first completion: `Some` fails, `None` continues.
    pub fn complete(self, err: Option<BoxError>) {
        let _ = self.tx.send(err);
    }
}

/// A handler adapted from an error-first callback function. See [`callback`].
#[derive(Clone, Copy)]
pub struct Callback<F> {
    f: F,
}

/// Adapts `f(req, res, done)` into a [`Handler`].
///
/// `f` runs when the handler is first polled. It may complete `done` before
/// returning or hand it to another task.
pub fn callback<Req, Res, F>(f: F) -> Callback<F>
where
    F: Fn(&mut Req, &mut Res, Done) + Send + Sync,
{
    Callback { f }
}

impl<Req, Res, T, F> Handler<Req, Res, T> for Callback<F>
where
    Req: Send,
    Res: Send,
    F: Fn(&mut Req, &mut Res, Done) + Send + Sync,
{
    fn call<'a>(
        &'a self,
        req: &'a mut Req,
        res: &'a mut Res,
        next: Next<'a, Req, Res, T>,
    ) -> BoxFuture<'a, Outcome<T>> {
        Box::pin(async move {
            let (tx, rx) = oneshot::channel();
            (self.f)(&mut *req, &mut *res, Done { tx });
            match rx.await {
                Ok(None) => next.run(req, res).await,
                Ok(Some(err)) => Err(err),
                Err(_) => Ok(None),
            }
        })
    }
}
