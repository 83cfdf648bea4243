use nuclear_connect::{
    execute, handler_fn, BoxFuture, Entry, Method, Next, Outcome, Regex, Router, RouterError,
    SharedHandler,
};

use std::sync::Arc;

type Log = Vec<&'static str>;
type Table = Router<Log, (), &'static str>;
type Shared = SharedHandler<Log, (), &'static str>;

fn h<F>(f: F) -> Shared
where
    F: for<'a> Fn(&'a mut Log, &'a mut (), Next<'a, Log, (), &'static str>) -> BoxFuture<'a, Outcome<&'static str>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(handler_fn(f))
}

/// Logs `tag` and delegates.
fn mark(tag: &'static str) -> Shared {
    h(move |req, res, next| {
        Box::pin(async move {
            req.push(tag);
            next.run(req, res).await
        })
    })
}

fn noop() -> Shared {
    mark("noop")
}

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(f)
}

/// Runs whatever `find` returns and reports the order of execution.
fn trace(router: &Table, method: Method, path: &str) -> Log {
    let found = router.find(method, path);
    let mut log = Log::new();
    block_on(execute(&found.handlers, &mut log, &mut ())).unwrap();
    log
}

fn keys(router: &Table, idx: usize) -> Option<Vec<String>> {
    router.routes()[idx]
        .matcher()
        .keys()
        .map(|ks| ks.iter().map(|k| k.to_string()).collect())
}

#[test]
fn router_add() {
    let mut router = Table::new();
    let f = noop();
    router.try_add(Method::Get, "/foo/:hello", vec![f.clone()]).unwrap();
    assert_eq!(router.len(), 1);

    let route = &router.routes()[0];
    assert_eq!(route.method(), Method::Get);
    assert!(!route.is_middleware());
    assert_eq!(keys(&router, 0), Some(vec!["hello".to_owned()]));

    let found = router.find(Method::Get, "/foo/bar");
    assert_eq!(found.params.get("hello"), Some("bar"));
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.handlers.len(), 1);
    assert!(Arc::ptr_eq(&found.handlers[0], &f));
    assert!(!found.middle_only);

    router.try_add(Method::Post, "bar", vec![noop()]).unwrap();
    assert_eq!(keys(&router, 1), Some(vec![]));
    assert_eq!(router.find(Method::Post, "/bar").handlers.len(), 1);

    let re = Regex::new(r"^/foo/(?P<hello>\w+)/?$").unwrap();
    router.try_add(Method::Put, re, vec![noop()]).unwrap();
    assert_eq!(keys(&router, 2), None);
    let found = router.find(Method::Put, "/foo/world");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("hello"), Some("world"));
}

#[test]
fn router_add_multiple() {
    let mut router = Table::new();
    router
        .try_add(Method::Patch, "/foo/:hello", vec![noop(), noop()])
        .unwrap()
        .try_add(Method::Put, "/bar", vec![noop(), noop(), noop()])
        .unwrap();

    assert_eq!(router.find(Method::Patch, "/foo/howdy").handlers.len(), 2);
    assert_eq!(router.find(Method::Put, "/bar").handlers.len(), 3);
    assert_eq!(router.find(Method::Get, "/bar").handlers.len(), 0);
}

#[test]
fn router_add_all() {
    let mut router = Table::new();
    router
        .add_all(Method::Get, "/foo", vec![mark("first"), mark("second")])
        .add_all(Method::All, "/foo", vec![mark("any")]);

    assert_eq!(router.len(), 2);
    assert_eq!(router.routes()[0].handlers().len(), 2);
    assert_eq!(
        trace(&router, Method::Get, "/foo"),
        ["first", "second", "any"]
    );
    assert_eq!(trace(&router, Method::Post, "/foo"), ["any"]);
}

#[test]
#[should_panic(expected = "a route needs at least one handler")]
fn router_add_all_empty() {
    let mut router = Table::new();
    router.add_all(Method::Get, "/", vec![]);
}

#[test]
fn router_empty_handlers() {
    let mut router = Table::new();
    assert!(matches!(
        router.try_add(Method::Get, "/", vec![]),
        Err(RouterError::EmptyHandlers)
    ));
    assert!(matches!(
        router.try_use("/", vec![]),
        Err(RouterError::EmptyHandlers)
    ));
    assert!(router.is_empty());
}

#[test]
fn router_middleware() {
    let mut router = Table::new();
    router.middleware("/foo/:hello", noop());

    let route = &router.routes()[0];
    assert_eq!(route.method(), Method::All);
    assert!(route.is_middleware());
    assert_eq!(keys(&router, 0), Some(vec!["hello".to_owned()]));
    assert_eq!(router.find(Method::Delete, "/foo/bar").handlers.len(), 1);
    assert_eq!(router.find(Method::Get, "/foo/bar/baz").handlers.len(), 1);

    router
        .try_use("/", vec![noop().into(), noop().into(), noop().into()])
        .unwrap();
    assert_eq!(router.routes()[1].handlers().len(), 3);
    assert_eq!(router.find(Method::Get, "/").handlers.len(), 3);

    router.middleware("/foo/:world?", noop());
    assert_eq!(keys(&router, 2), Some(vec!["world".to_owned()]));
    let found = router.find(Method::Get, "/foo/hello");
    assert_eq!(found.handlers.len(), 1 + 3 + 1);
    assert_eq!(found.params.get("hello"), Some("hello"));
    assert_eq!(found.params.get("world"), Some("hello"));
    assert!(found.middle_only);
}

#[test]
fn router_all() {
    let mut router = Table::new();
    router.add(Method::All, "/greet/:name", mark("name"));

    for &m in &[Method::Head, Method::Get, Method::Post] {
        let found = router.find(m, "/greet/Bob");
        assert_eq!(found.params.get("name"), Some("Bob"));
        assert_eq!(found.handlers.len(), 1);
        assert!(!found.middle_only);
    }

    router.head("/greet/:person", mark("person"));

    let found = router.find(Method::Head, "/greet/Rick");
    assert_eq!(found.params.get("name"), Some("Rick"));
    assert_eq!(found.params.get("person"), Some("Rick"));
    assert_eq!(trace(&router, Method::Head, "/greet/Rick"), ["name", "person"]);

    assert_eq!(trace(&router, Method::Post, "/greet/Morty"), ["name"]);
}

#[test]
fn router_find_no_match() {
    let router = Table::new();
    let found = router.find(Method::Delete, "/nothing");
    assert!(found.params.is_empty());
    assert!(found.handlers.is_empty());
    assert!(found.middle_only);

    let mut router = Table::new();
    router.get("/foo", noop()).middleware("/bar", noop());
    let found = router.find(Method::Get, "/baz");
    assert!(found.is_empty());
    assert!(found.params.is_empty());
    assert!(found.middle_only);
}

#[test]
fn router_find_multiple() {
    let mut router = Table::new();
    router
        .middleware("/foo", mark("use"))
        .get("/foo", mark("exact"))
        .get("/foo/:title?", mark("title"))
        .get("/foo/*", mark("wild"));

    let found = router.find(Method::Get, "/foo");
    assert_eq!(found.handlers.len(), 3);
    assert!(!found.middle_only);
    assert!(!found.params.contains("title"));
    assert_eq!(trace(&router, Method::Get, "/foo"), ["use", "exact", "title"]);

    let found = router.find(Method::Get, "/foo/bar");
    assert_eq!(found.params.get("title"), Some("bar"));
    assert_eq!(found.params.get("wild"), Some("bar"));
    assert_eq!(trace(&router, Method::Get, "/foo/bar"), ["use", "title", "wild"]);
}

#[test]
fn router_find_order() {
    let mut router = Table::new();
    router
        .all("/foo", mark("all"))
        .get("/foo", mark("get"))
        .head("/foo", mark("head"))
        .get("/", mark("root"));

    assert_eq!(trace(&router, Method::Head, "/foo"), ["all", "head"]);

    router.set_head_fallback(true);
    assert_eq!(trace(&router, Method::Head, "/foo"), ["all", "get", "head"]);
    assert_eq!(trace(&router, Method::Get, "/foo"), ["all", "get"]);
}

#[test]
fn router_find_with_use() {
    let find = |r: &Table, path: &str| r.find(Method::Get, path);

    let mut r1 = Table::new();
    r1.middleware("api", noop());
    let mut r2 = Table::new();
    r2.middleware("api/:version", noop());
    let mut r3 = Table::new();
    r3.middleware("api/:version?", noop());
    let mut r4 = Table::new();
    r4.middleware("movies/:title.mp4", noop());

    assert_eq!(find(&r1, "/api").handlers.len(), 1);
    assert_eq!(find(&r1, "/api/foo").handlers.len(), 1);
    assert_eq!(find(&r1, "/apifoo").handlers.len(), 0);

    assert_eq!(find(&r2, "/api").handlers.len(), 0);
    let found = find(&r2, "/api/v1");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("version"), Some("v1"));
    let found = find(&r2, "/api/v1/users");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("version"), Some("v1"));

    let found = find(&r3, "/api");
    assert_eq!(found.handlers.len(), 1);
    assert!(found.params.is_empty());
    assert_eq!(find(&r3, "/api/v1").params.get("version"), Some("v1"));
    assert_eq!(find(&r3, "/api/v1/users").params.get("version"), Some("v1"));

    assert_eq!(find(&r4, "/movies").handlers.len(), 0);
    assert_eq!(find(&r4, "/movies/narnia").handlers.len(), 0);
    let found = find(&r4, "/movies/narnia.mp4");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("title"), Some("narnia"));
    assert_eq!(find(&r4, "/movies/narnia.mp4/cast").params.get("title"), Some("narnia"));
}

#[test]
fn router_case_insensitive() {
    let mut router = Table::new();
    router.get("/foo/:name", noop());
    let found = router.find(Method::Get, "/FOO/Bar");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("name"), Some("Bar"));
}

#[test]
fn router_base() {
    assert_eq!(Table::new().base(), "/");
    assert_eq!(Table::with_base("/foo").base(), "/foo");

    let mut router = Table::with_base("/api");
    router.get("/users/:id", noop());
    assert_eq!(router.find(Method::Get, "/api/users/7").params.get("id"), Some("7"));
    assert!(router.find(Method::Get, "/users/7").is_empty());
}

#[test]
fn router_clone() {
    let mut router = Table::new();
    router.get("/a", noop()).middleware("/b", noop());

    let mut cloned = router.clone();
    assert_eq!(cloned.routes(), router.routes());
    assert!(!std::ptr::eq(cloned.routes(), router.routes()));

    cloned.get("/c", noop());
    assert_eq!(router.len(), 2);
    assert_eq!(cloned.len(), 3);
    assert!(router.find(Method::Get, "/c").is_empty());

    let moved = router.clone_at("/foo");
    assert_eq!(moved.base(), "/foo");
    assert_eq!(moved.len(), router.len());
    assert_eq!(moved.find(Method::Get, "/foo/a").handlers.len(), 1);
    assert!(moved.find(Method::Get, "/a").is_empty());

    let moved = router.try_clone_at("/v2/:lang").unwrap();
    assert_eq!(
        moved.find(Method::Get, "/v2/en/a").params.get("lang"),
        Some("en")
    );
    assert!(matches!(
        router.try_clone_at("/*"),
        Err(RouterError::MisplacedWildcard)
    ));
}

#[test]
fn router_mount() {
    let mut sub = Table::new();
    sub.get("/baz", mark("baz"));

    let mut router = Table::new();
    router.mount("/bar", &sub);

    assert_eq!(trace(&router, Method::Get, "/bar/baz"), ["baz"]);
    assert!(router.find(Method::Get, "/baz").is_empty());
    assert!(!router.find(Method::Get, "/bar/baz").middle_only);

    sub.get("/qux", mark("qux"));
    assert_eq!(sub.len(), 2);
    assert!(router.find(Method::Get, "/bar/qux").is_empty());
    assert_eq!(router.len(), 1);
}

#[test]
fn router_mount_nested() {
    let mut sub = Table::new();
    sub.get("/baz", mark("baz")).middleware("/", mark("sub"));

    let mut mid = Table::new();
    mid.mount("/bar", &sub);

    let mut router = Table::new();
    router.middleware("/", mark("root")).mount("/foo", &mid);

    assert_eq!(trace(&router, Method::Get, "/foo/bar/baz"), ["root", "baz", "sub"]);
    assert_eq!(trace(&router, Method::Get, "/foo/bar/other"), ["root", "sub"]);
    assert_eq!(trace(&router, Method::Get, "/foo/other"), ["root"]);
    assert_eq!(trace(&router, Method::Get, "/bar/baz"), ["root"]);

    // the intermediate table still resolves under its own prefix
    assert_eq!(trace(&mid, Method::Get, "/bar/baz"), ["baz", "sub"]);
}

#[test]
fn router_mount_mixed_entries() {
    let mut sub = Table::new();
    sub.get("/baz", mark("baz"));

    let mut router = Table::new();
    router
        .try_use(
            "/foo",
            vec![mark("before").into(), Entry::from(&sub), mark("after").into()],
        )
        .unwrap();

    assert_eq!(router.len(), 3);
    assert_eq!(
        trace(&router, Method::Get, "/foo/baz"),
        ["before", "baz", "after"]
    );

    let found = router.find(Method::Get, "/foo/other");
    assert_eq!(found.handlers.len(), 2);
    assert!(found.middle_only);
}

#[test]
fn router_mount_with_params() {
    let mut sub = Table::new();
    sub.get("/posts/:post", noop());

    let mut router = Table::new();
    router.mount("/users/:user", &sub);

    let found = router.find(Method::Get, "/users/ann/posts/42");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("user"), Some("ann"));
    assert_eq!(found.params.parse::<u32>("post"), Some(Ok(42)));
}

#[test]
fn router_mount_regex_route() {
    let mut sub = Table::new();
    sub.get(Regex::new(r"^/(?P<name>[^/]+)\.php$").unwrap(), noop());

    let mut router = Table::new();
    router.mount("/pan", &sub);

    let found = router.find(Method::Get, "/pan/phpinfo.php");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("name"), Some("phpinfo"));
    assert!(router.find(Method::Get, "/phpinfo.php").is_empty());
}

#[test]
fn router_mount_regex_route_optional_prefix() {
    let mut sub = Table::new();
    sub.get(Regex::new(r"^/(?P<name>[^/]+)\.php$").unwrap(), noop());

    let mut router = Table::new();
    router.mount("/api/:v?", &sub);

    let found = router.find(Method::Get, "/api/x.php");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("name"), Some("x"));
    assert_eq!(found.params.get("v"), None);

    let found = router.find(Method::Get, "/api/v1/x.php");
    assert_eq!(found.handlers.len(), 1);
    assert_eq!(found.params.get("v"), Some("v1"));
    assert_eq!(found.params.get("name"), Some("x"));

    assert!(router.find(Method::Get, "/api/v1/v2/x.php").is_empty());
}

#[test]
fn router_mount_non_literal_base() {
    let sub = Table::new();
    let mut router = Table::new();
    router.get("/", noop());

    let ret = router.try_mount(Regex::new("/not/supported").unwrap(), &sub);
    match ret {
        Err(e @ RouterError::NonLiteralMount) => {
            assert_eq!(
                e.to_string(),
                "mounting a router to a non-literal base is not supported"
            );
        }
        other => panic!("unexpected: {:?}", other.map(|r| r.len())),
    }
    assert_eq!(router.len(), 1);

    // a regex is fine for plain middleware
    router
        .try_use(Regex::new("^/re").unwrap(), vec![noop().into()])
        .unwrap();
    assert_eq!(router.len(), 2);
}

#[test]
fn router_middle_only() {
    let mut router = Table::new();
    router
        .all("/this/will/not/match", noop())
        .post("/bar", noop())
        .middleware("/", noop())
        .middleware("/foo", noop());

    assert!(router.find(Method::Get, "/bar").middle_only);
    assert!(!router.find(Method::Post, "/bar").middle_only);
}

#[test]
#[should_panic(expected = "wildcard pattern can only appear at end")]
fn router_misplaced_wildcard() {
    let mut router = Table::new();
    router.get("/a/*/b", noop());
}

#[test]
fn router_macro() {
    let sub: Table = nuclear_connect::router! {
        GET "/info" => mark("info"),
        POST "/info" => mark("post-info"),
    };

    let router: Table = nuclear_connect::router! {
        USE "/" => mark("root"),
        GET "/u/:uid/p/:pid" => mark("user"),
        @ "/v1" => sub,
        ALL "/any" => mark("any")
    };

    assert_eq!(trace(&router, Method::Get, "/u/asd/p/qwe"), ["root", "user"]);
    assert_eq!(trace(&router, Method::Get, "/v1/info"), ["root", "info"]);
    assert_eq!(trace(&router, Method::Post, "/v1/info"), ["root", "post-info"]);
    assert_eq!(trace(&router, Method::Delete, "/any"), ["root", "any"]);
}
