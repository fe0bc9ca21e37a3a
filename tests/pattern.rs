use std::collections::HashMap;

use waypoint_router::{normalize_path, RoutePattern, DEFAULT_CAPTURE};

fn compile(source: &str) -> RoutePattern {
    RoutePattern::compile(source, &HashMap::new()).unwrap()
}

#[test]
fn pattern_expression() {
    let p = compile("/user/:username");
    assert_eq!(
        p.expression(),
        format!("^/user/(?P<__p0>{})/?$", DEFAULT_CAPTURE)
    );
    assert_eq!(p.source(), "/user/:username");
    assert_eq!(p.parameter_names().collect::<Vec<_>>(), &["username"]);

    let p = compile("/static/page");
    assert_eq!(p.expression(), "^/static/page/?$");
    assert_eq!(p.parameter_names().count(), 0);
}

#[test]
fn pattern_condition() {
    let mut conditions = HashMap::new();
    conditions.insert("id".to_owned(), "[0-9]+".to_owned());
    let p = RoutePattern::compile("/post/:id/:slug", &conditions).unwrap();

    assert_eq!(
        p.expression(),
        format!("^/post/(?P<__p0>[0-9]+)/(?P<__p1>{})/?$", DEFAULT_CAPTURE)
    );
    assert_eq!(p.parameter_names().collect::<Vec<_>>(), &["id", "slug"]);
}

#[test]
fn pattern_unused_condition() {
    let mut conditions = HashMap::new();
    conditions.insert("other".to_owned(), "[0-9]+".to_owned());
    let p = RoutePattern::compile("/post/:id", &conditions).unwrap();
    assert_eq!(p, compile("/post/:anything"));
}

#[test]
fn pattern_capture_names() {
    let p = compile("/a/:first_name/b:suffix/:x1");
    assert_eq!(
        p.parameter_names().collect::<Vec<_>>(),
        &["first_name", "suffix", "x1"]
    );

    let caps = p.captures("/a/ann/bxyz/9").unwrap();
    assert_eq!(&caps[..], &[("first_name", "ann"), ("suffix", "xyz"), ("x1", "9")]);
}

#[test]
fn pattern_bare_colon_is_literal() {
    let p = compile("/time/:/now");
    assert_eq!(p.parameter_names().count(), 0);
    assert!(p.is_match("/time/:/now"));
}

#[test]
fn pattern_default_capture_class() {
    let p = compile("/x/:v");
    for ok in &["abc", "A-b_c", "1+2", "%20", "MiXeD09"] {
        assert!(p.is_match(&format!("/x/{}", ok)), "{}", ok);
    }
    for bad in &["a.b", "a b", "a/b", "", "ü"] {
        assert!(!p.is_match(&format!("/x/{}", bad)), "{:?}", bad);
    }
}

#[test]
fn pattern_captures_are_raw() {
    let p = compile("/s/:q");
    let caps = p.captures("/s/a%20b").unwrap();
    assert_eq!(&caps[..], &[("q", "a%20b")]);
    assert!(p.captures("/s/").is_none());
}

#[test]
fn pattern_literal_groups() {
    let p = compile("/(en|fr)/:page(/print)?");
    let caps = p.captures("/fr/about/print").unwrap();
    assert_eq!(&caps[..], &[("page", "about")]);
    let caps = p.captures("/en/home").unwrap();
    assert_eq!(&caps[..], &[("page", "home")]);
}

#[test]
fn pattern_condition_fragment() {
    let mut conditions = HashMap::new();
    conditions.insert("pair".to_owned(), "[a-z]+)-([0-9]+".to_owned());
    let p = RoutePattern::compile("/k/:pair", &conditions).unwrap();

    let caps = p.captures("/k/abc-12").unwrap();
    assert_eq!(&caps[..], &[("pair", "abc")]);
}

#[test]
fn pattern_invalid_expression() {
    let mut conditions = HashMap::new();
    conditions.insert("id".to_owned(), "(".to_owned());
    assert!(RoutePattern::compile("/post/:id", &conditions).is_err());

    // literal text is not escaped, so it must be valid syntax too
    assert!(RoutePattern::compile("/broken[", &HashMap::new()).is_err());
}

#[test]
fn normalize() {
    assert_eq!(normalize_path("/foo?bar=1", ""), "/foo");
    assert_eq!(normalize_path("?bar=1", ""), "/");
    assert_eq!(normalize_path("foo", ""), "/foo");
    assert_eq!(normalize_path("", ""), "/");
    assert_eq!(normalize_path("/blog/post/1", "/blog"), "/post/1");
    assert_eq!(normalize_path("/blog/post/1", "/blog/"), "/post/1");
    assert_eq!(normalize_path("/other/blog/", "/blog/"), "/other/blog/");
}
