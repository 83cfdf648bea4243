/// Builds a [`Router`](crate::Router) from a list of entries.
///
/// Each entry is `METHOD pattern => handler`, where `METHOD` is one of `GET`,
/// `HEAD`, `POST`, `PUT`, `PATCH`, `DELETE` or `ALL`. `USE pattern => handler`
/// registers middleware and `@ prefix => router` mounts a router.
#[macro_export]
macro_rules! router {
    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};

    {@entry $router:expr, @, $prefix:expr, $sub_router:expr} => {
        $router.mount($prefix, &$sub_router)
    };
    {@entry $router:expr, USE, $pattern:expr, $data:expr} => {
        $router.middleware($pattern, $data)
    };
    {@entry $router:expr, ALL, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::All, $pattern, $data)
    };
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Get, $pattern, $data)
    };
    {@entry $router:expr, HEAD, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Head, $pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Post, $pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Put, $pattern, $data)
    };
    {@entry $router:expr, PATCH, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Patch, $pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.add($crate::Method::Delete, $pattern, $data)
    };
}
