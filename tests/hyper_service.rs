#![cfg(feature = "hyper-service")]

use std::convert::Infallible as Never;

use hyper::service::Service;
use hyper::{Body, Request, Response};
use waypoint_router::hyper_service::BoxHandler;
use waypoint_router::{Dispatcher, Mapping, Params, Router, RouterService};

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("stranger").to_owned();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn not_found(_: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = hyper::StatusCode::NOT_FOUND;
    Ok(res)
}

fn service() -> RouterService {
    let mut router = Router::new();
    router.map(Mapping::to("/hello/:name", "Hello", "show"));
    router.map(Mapping::to("/unbound", "Nobody", "index"));

    let mut d: Dispatcher<BoxHandler> = Dispatcher::new(router);
    d.route("Hello", "show", hello)
        .route("NotFoundController", "index", not_found);
    d.into_service()
}

async fn body_text(res: Response<Body>) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn hyper_service_routes() {
    let mut svc = service();

    let res = svc.call(get("/hello/world?x=1")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(body_text(res).await, "hello, world!");

    let res = svc.call(get("/hello/J%C3%B6rg")).await.unwrap();
    assert_eq!(body_text(res).await, "hello, Jörg!");
}

#[tokio::test]
async fn hyper_service_not_found() {
    let mut svc = service();

    let res = svc.call(get("/nothing/here")).await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(body_text(res).await, "404 Not Found");
}

#[tokio::test]
async fn hyper_service_unbound_handler() {
    let mut svc = service().clone();

    let err = svc.call(get("/unbound")).await.unwrap_err();
    assert!(err.to_string().contains("Nobody"));
}
