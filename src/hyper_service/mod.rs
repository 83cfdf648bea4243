#![forbid(unsafe_code)]

mod options;
mod params;
mod service;

pub use self::options::HandlerOptions;
pub use self::params::RequestExt;
pub use self::service::{pathname, RouteTable, RouterService};

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;
