use std::{convert::Infallible, fmt, str::FromStr};

use serde::Deserialize;
use wayfinder::{
    bind,
    dev::SegmentExtractor,
    http::{Method, StatusCode},
    int, long,
    query::{self, QueryDecodeError, QueryParamDecoder},
    rest, root, str,
    test::TestRequest,
    uint, web, Handler, Matched, Response, Router, TrailingSlash, Value,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(body: &'static str) -> impl Handler {
    move |_: Matched| web::ready::<_, Infallible>(body)
}

fn call(router: &Router, method: Method, uri: &str) -> Response {
    router.respond(TestRequest::default().method(method).uri(uri).to_request())
}

fn get(router: &Router, uri: &str) -> Response {
    call(router, Method::GET, uri)
}

#[test]
fn fixed_arity_requires_equal_segment_count() {
    let router = Router::build()
        .route(web::get(root()), text("zero"))
        .route(web::get(root() / "a"), text("one"))
        .route(web::get(root() / "a" / str("b")), text("two"))
        .route(web::get(root() / "a" / str("b") / "c"), text("three"))
        .finish();

    assert_eq!(get(&router, "/").body_str(), Some("zero"));
    assert_eq!(get(&router, "/a").body_str(), Some("one"));
    assert_eq!(get(&router, "/a/x").body_str(), Some("two"));
    assert_eq!(get(&router, "/a/x/c").body_str(), Some("three"));

    assert_eq!(get(&router, "/a/x/d").status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&router, "/a/x/c/d").status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&router, "/b").status(), StatusCode::NOT_FOUND);
}

#[test]
fn remainder_captures_trailing_segments() {
    let router = Router::build()
        .route(web::get(root() / "files" / rest("path")), |m: Matched| {
            web::from_result(m.param::<Vec<String>>("path").map(|segs| segs.join("|")))
        })
        .finish();

    assert_eq!(get(&router, "/files").body_str(), Some(""));
    assert_eq!(get(&router, "/files/a").body_str(), Some("a"));
    assert_eq!(get(&router, "/files/a/b/c.txt").body_str(), Some("a|b|c.txt"));
    assert_eq!(get(&router, "/files/a%2Fb/c").body_str(), Some("a/b|c"));
    assert_eq!(get(&router, "/other/a").status(), StatusCode::NOT_FOUND);

    let router = Router::build()
        .route(web::get("/v/{head}/{tail}*"), |m: Matched| {
            let tail = m.params()["tail"].as_segments().map(<[String]>::len);
            web::ready::<_, Infallible>(format!("{} {:?}", m.params()["head"], tail))
        })
        .finish();

    assert_eq!(get(&router, "/v/1").body_str(), Some("1 Some(0)"));
    assert_eq!(get(&router, "/v/1/2/3").body_str(), Some("1 Some(2)"));
    assert_eq!(get(&router, "/v").status(), StatusCode::NOT_FOUND);
}

#[test]
fn typed_binders() {
    let router = Router::build()
        .route(web::get(root() / "user" / int("id")), |m: Matched| {
            web::from_result(m.param::<i32>("id").map(|id| format!("int {id}")))
        })
        .route(web::get(root() / "order" / long("id")), |m: Matched| {
            web::from_result(m.param::<i64>("id").map(|id| format!("long {id}")))
        })
        .route(web::get(root() / "n" / uint("n")), |m: Matched| {
            web::from_result(m.param::<u64>("n").map(|n| format!("uint {n}")))
        })
        .finish();

    assert_eq!(get(&router, "/user/12").body_str(), Some("int 12"));
    assert_eq!(get(&router, "/user/-3").body_str(), Some("int -3"));
    assert_eq!(get(&router, "/user/abc").status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&router, "/user/4294967296").status(), StatusCode::NOT_FOUND);

    assert_eq!(
        get(&router, "/order/4294967296").body_str(),
        Some("long 4294967296")
    );

    assert_eq!(
        get(&router, "/n/18446744073709551615").body_str(),
        Some("uint 18446744073709551615")
    );
    assert_eq!(get(&router, "/n/-1").status(), StatusCode::NOT_FOUND);
}

#[test]
fn pattern_strings_and_regex_binders() {
    let router = Router::build()
        .route(web::get("/post/{slug:[a-z-]+}"), text("slug"))
        .route(web::get("/post/{id:int}"), text("id"))
        .finish();

    assert_eq!(get(&router, "/post/hello-world").body_str(), Some("slug"));
    assert_eq!(get(&router, "/post/42").body_str(), Some("id"));
    assert_eq!(get(&router, "/post/Hello").status(), StatusCode::NOT_FOUND);
}

struct Even;

impl SegmentExtractor for Even {
    fn try_extract(&self, segment: &str) -> Option<Value> {
        segment
            .parse::<i32>()
            .ok()
            .filter(|n| n % 2 == 0)
            .map(Value::Int)
    }
}

#[test]
fn custom_extractor() {
    let router = Router::build()
        .route(web::get(root() / "n" / bind("n", Even)), text("even"))
        .route(web::get(root() / "n" / str("n")), text("other"))
        .finish();

    assert_eq!(get(&router, "/n/4").body_str(), Some("even"));
    assert_eq!(get(&router, "/n/5").body_str(), Some("other"));
}

#[test]
fn required_and_optional_query() {
    let router = Router::build()
        .route(
            web::get(root() / "items").query(query::required::<u32>("b")),
            |m: Matched| {
                web::from_result(m.query::<u32>("b").map(|b| format!("required {b}")))
            },
        )
        .route(
            web::get(root() / "items").query(query::optional::<u32>("b")),
            |m: Matched| {
                web::from_result(
                    m.query::<Option<u32>>("b")
                        .map(|b| format!("optional {b:?}")),
                )
            },
        )
        .finish();

    assert_eq!(get(&router, "/items?a=1&b=2").body_str(), Some("required 2"));
    assert_eq!(get(&router, "/items?a=1").body_str(), Some("optional None"));
    assert_eq!(get(&router, "/items?b=x").body_str(), Some("optional None"));
    assert_eq!(get(&router, "/items").body_str(), Some("optional None"));
}

#[test]
fn query_only_checked_after_path() {
    let router = Router::build()
        .route(
            web::get(root() / "a").query(query::required::<u32>("n")),
            text("a"),
        )
        .finish();

    assert_eq!(get(&router, "/a?n=1").body_str(), Some("a"));
    assert_eq!(get(&router, "/b?n=1").status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&router, "/a?n=one").status(), StatusCode::NOT_FOUND);
}

#[test]
fn multi_and_flag_query() {
    let router = Router::build()
        .route(
            web::get("/search")
                .query(query::multi::<String>("tag"))
                .query(query::flag("debug")),
            |m: Matched| {
                let tags = m.query::<Vec<String>>("tag").unwrap_or_default();
                let debug = m.query::<bool>("debug").unwrap_or_default();
                web::lazy(move || format!("{} {}", tags.join(","), debug))
            },
        )
        .finish();

    assert_eq!(
        get(&router, "/search?tag=a&tag=b%20c&debug").body_str(),
        Some("a,b c true")
    );
    assert_eq!(get(&router, "/search").body_str(), Some(" false"));
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sort {
    Asc,
    Desc,
}

impl QueryParamDecoder for Sort {
    fn decode(value: &str) -> Result<Self, QueryDecodeError> {
        match value {
            "asc" => Ok(Sort::Asc),
            "desc" => Ok(Sort::Desc),
            _ => Err(QueryDecodeError::new(value, "Sort")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Limit(u16);

impl FromStr for Limit {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Limit)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

wayfinder::query_param!(Limit, "limit");

#[test]
fn custom_query_codecs() {
    let router = Router::build()
        .route(
            web::get("/list")
                .query(query::required::<Sort>("sort"))
                .query(query::optional_param::<Limit>()),
            |m: Matched| {
                let sort = m.query::<Sort>("sort");
                let limit = m.query::<Option<Limit>>("limit");
                web::from_result(
                    sort.and_then(|sort| limit.map(|limit| format!("{sort:?} {limit:?}"))),
                )
            },
        )
        .finish();

    assert_eq!(
        get(&router, "/list?sort=desc&limit=10").body_str(),
        Some("Desc Some(Limit(10))")
    );
    assert_eq!(
        get(&router, "/list?sort=asc&limit=many").body_str(),
        Some("Asc None")
    );
    assert_eq!(
        get(&router, "/list?sort=sideways").status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn earlier_route_wins() {
    let router = Router::build()
        .route(web::get(root() / "user" / int("id")), text("by id"))
        .route(web::get(root() / "user" / str("name")), text("by name"))
        .route(web::get("/user/me"), text("unreachable"))
        .finish();

    assert_eq!(get(&router, "/user/12").body_str(), Some("by id"));
    assert_eq!(get(&router, "/user/me").body_str(), Some("by name"));
}

#[test]
fn method_matching() {
    let router = Router::build()
        .route(web::get("/res"), text("get"))
        .route(web::methods([Method::PUT, Method::PATCH], "/res"), text("write"))
        .route(web::any("/res"), |m: Matched| {
            let method = m.method().clone();
            web::lazy(move || format!("any {method}"))
        })
        .finish();

    assert_eq!(call(&router, Method::GET, "/res").body_str(), Some("get"));
    assert_eq!(call(&router, Method::PATCH, "/res").body_str(), Some("write"));
    assert_eq!(
        call(&router, Method::DELETE, "/res").body_str(),
        Some("any DELETE")
    );
}

#[test]
fn default_handler() {
    init_logger();

    let router = Router::build().route(web::get("/a"), text("a")).finish();

    let res = get(&router, "/nope");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.body().is_empty());

    let router = Router::build()
        .route(web::get("/a"), text("a"))
        .default_handler(|req: wayfinder::Request| {
            let path = req.path().to_owned();
            web::lazy(move || {
                Response::build(StatusCode::NOT_FOUND).json(serde_json::json!({ "missing": path }))
            })
        })
        .finish();

    let res = get(&router, "/nope");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body_str(), Some(r#"{"missing":"/nope"}"#));
}

#[test]
fn trailing_slash_config() {
    let strict = Router::build().route(web::get("/a"), text("a")).finish();
    assert_eq!(get(&strict, "/a/").status(), StatusCode::NOT_FOUND);

    let strict = Router::build().route(web::get("/a/"), text("a/")).finish();
    assert_eq!(get(&strict, "/a/").body_str(), Some("a/"));

    let trim = Router::build()
        .trailing_slash(TrailingSlash::Trim)
        .route(web::get("/a"), text("a"))
        .finish();
    assert_eq!(get(&trim, "/a/").body_str(), Some("a"));
}

#[test]
fn handler_errors_become_responses() {
    init_logger();

    #[derive(Debug, Deserialize)]
    struct Ids {
        #[allow(dead_code)]
        id: u8,
    }

    let router = Router::build()
        .route(web::get("/small/{id}"), |m: Matched| {
            web::from_result(m.load_params::<Ids>().map(|_| "fits"))
        })
        .route(web::get("/missing"), |m: Matched| {
            web::from_result(m.param::<u32>("id").map(|_| "never"))
        })
        .finish();

    assert_eq!(get(&router, "/small/200").body_str(), Some("fits"));

    let res = get(&router, "/small/300");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = get(&router, "/missing");
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.body_str(),
        Some(r#"path parameter "id" is not bound by the route"#)
    );

    let err = router
        .handle(TestRequest::get().uri("/missing").to_request())
        .unwrap_err();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
