mod callback;
mod handler;
mod next;

pub use self::callback::{callback, Callback, Done};
pub use self::handler::{handler_fn, Handler, HandlerFn, SharedHandler};
pub use self::next::{execute, Next};

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// What a handler, and therefore a whole chain, resolves to.
///
/// `Ok(None)` is the empty result: the chain ran past its last handler, or a
/// handler stopped without producing a value.
pub type Outcome<T> = Result<Option<T>, BoxError>;
