use super::endpoint::Entry;
use super::error::RouterError;
use super::{Match, Route, Router};

use crate::chain::{Handler, SharedHandler};
use crate::method::Method;
use crate::pattern::Pattern;

use std::sync::Arc;

impl<Req, Res, T> Router<Req, Res, T> {
    pub fn new() -> Self {
        Self::with_base("/")
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            base: base.into(),
            routes: Vec::new(),
            head_fallback: false,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &[Arc<Route<Req, Res, T>>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Lets HEAD requests match GET routes as well.
    pub fn set_head_fallback(&mut self, enabled: bool) -> &mut Self {
        self.head_fallback = enabled;
        self
    }

    /// Collects every route accepting `method` and `path`, in table order.
    ///
    /// Params of later routes overwrite earlier ones with the same name.
    /// Middleware routes match `path` by prefix and ignore `method`.
    pub fn find(&self, method: Method, path: &str) -> Match<Req, Res, T> {
        self.resolve(method, path)
    }

    pub fn add(
        &mut self,
        method: Method,
        pattern: impl Into<Pattern>,
        h: impl Handler<Req, Res, T> + 'static,
    ) -> &mut Self {
        let h: SharedHandler<Req, Res, T> = Arc::new(h);
        self.add_all(method, pattern, vec![h])
    }

    /// Binds a sequence of handlers to one route.
    pub fn add_all(
        &mut self,
        method: Method,
        pattern: impl Into<Pattern>,
        handlers: Vec<SharedHandler<Req, Res, T>>,
    ) -> &mut Self {
        let pattern = pattern.into();
        if let Err(e) = self.push_route(method, pattern.clone(), handlers) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_add(
        &mut self,
        method: Method,
        pattern: impl Into<Pattern>,
        handlers: Vec<SharedHandler<Req, Res, T>>,
    ) -> Result<&mut Self, RouterError> {
        self.push_route(method, pattern.into(), handlers)?;
        Ok(self)
    }

    /// Registers `h` as middleware for every path under `pattern`.
    pub fn middleware(
        &mut self,
        pattern: impl Into<Pattern>,
        h: impl Handler<Req, Res, T> + 'static,
    ) -> &mut Self {
        let pattern = pattern.into();
        if let Err(e) = self.push_middleware(pattern.clone(), vec![Entry::handler(h)]) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Registers `h` as middleware for every path.
    pub fn with(&mut self, h: impl Handler<Req, Res, T> + 'static) -> &mut Self {
        self.middleware(Pattern::default(), h)
    }

    /// Registers a mixed list of middleware handlers and routers under
    /// `pattern`.
    ///
    /// Routers are copied and flattened into this table, so changes made to them
    /// afterwards are not seen here. Mounting requires a path pattern.
    pub fn try_use(
        &mut self,
        pattern: impl Into<Pattern>,
        entries: Vec<Entry<Req, Res, T>>,
    ) -> Result<&mut Self, RouterError> {
        self.push_middleware(pattern.into(), entries)?;
        Ok(self)
    }

    pub fn mount(&mut self, prefix: impl Into<Pattern>, router: &Router<Req, Res, T>) -> &mut Self {
        let prefix = prefix.into();
        if let Err(e) = self.push_middleware(prefix.clone(), vec![Entry::from(router)]) {
            panic!("{}: pattern = {:?}", e, prefix);
        }
        self
    }

    pub fn try_mount(
        &mut self,
        prefix: impl Into<Pattern>,
        router: &Router<Req, Res, T>,
    ) -> Result<&mut Self, RouterError> {
        self.push_middleware(prefix.into(), vec![Entry::from(router)])?;
        Ok(self)
    }

    /// Clones the table under a new base, recompiling every route.
    pub fn clone_at(&self, base: &str) -> Self {
        match self.rebase(base) {
            Ok(r) => r,
            Err(e) => panic!("{}: base = {:?}", e, base),
        }
    }

    pub fn try_clone_at(&self, base: &str) -> Result<Self, RouterError> {
        self.rebase(base)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(
            &mut self,
            pattern: impl Into<Pattern>,
            h: impl Handler<Req, Res, T> + 'static,
        ) -> &mut Self {
            self.add(Method::$method, pattern, h)
        }
    };
}

impl<Req, Res, T> Router<Req, Res, T> {
    define_method!(all, All);
    define_method!(get, Get);
    define_method!(head, Head);
    define_method!(post, Post);
    define_method!(put, Put);
    define_method!(patch, Patch);
    define_method!(delete, Delete);
}
