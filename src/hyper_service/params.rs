use crate::router::Params;

/// Access to the path parameters attached by [`RouterService`](super::RouterService).
pub trait RequestExt {
    fn params(&self) -> Option<&Params>;

    fn param(&self, name: &str) -> Option<&str> {
        self.params()?.get(name)
    }
}

impl<B> RequestExt for hyper::Request<B> {
    fn params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}
