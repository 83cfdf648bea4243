use super::{BoxFuture, Outcome, SharedHandler};

/// The continuation of a chain.
///
/// `Next` is consumed by [`Next::run`], so each handler can delegate at most
/// once.
pub struct Next<'a, Req, Res, T> {
    rest: &'a [SharedHandler<Req, Res, T>],
}

impl<'a, Req, Res, T> Next<'a, Req, Res, T> {
    pub(crate) fn new(rest: &'a [SharedHandler<Req, Res, T>]) -> Self {
        Self { rest }
    }

    /// Runs the remaining handlers.
    pub fn run<'b>(self, req: &'b mut Req, res: &'b mut Res) -> BoxFuture<'b, Outcome<T>>
    where
        'a: 'b,
    {
        match self.rest.split_first() {
            Some((head, rest)) => head.call(req, res, Next { rest }),
            None => Box::pin(async { Ok(None) }),
        }
    }

    /// Number of handlers this continuation would still run.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

/// Executes `handlers` in order as one onion-style chain.
///
/// Resolves to the value of whichever handler stops the chain, `Ok(None)` for an
/// empty list, or the first failure.
pub fn execute<'a, Req, Res, T>(
    handlers: &'a [SharedHandler<Req, Res, T>],
    req: &'a mut Req,
    res: &'a mut Res,
) -> BoxFuture<'a, Outcome<T>> {
    Next::new(handlers).run(req, res)
}

impl<Req, Res, T> std::fmt::Debug for Next<'_, Req, Res, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.rest.len())
            .finish()
    }
}
