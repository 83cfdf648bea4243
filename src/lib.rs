//! An ordered method router with an onion-style middleware chain.
//!
//! A [`Router`] collects every route matching a request, middleware and
//! terminal handlers alike, and [`execute`] runs them as a single chain in which
//! each handler may delegate to the rest through [`Next`].

#![forbid(unsafe_code)]

mod chain;
mod method;
mod pattern;
mod router;

pub use self::chain::{
    callback, execute, handler_fn, BoxError, BoxFuture, Callback, Done, Handler, HandlerFn, Next,
    Outcome, SharedHandler,
};
pub use self::method::Method;
pub use self::pattern::{join, Matcher, Pattern, WILD};
pub use self::router::{Entry, Match, Params, Route, Router, RouterError};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

pub use regex::Regex;
