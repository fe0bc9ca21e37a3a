use waypoint_router::hyper_service::BoxHandler;
use waypoint_router::{Dispatcher, Mapping, Params, Router};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    dbg!((req.method(), req.uri().path()));
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = hyper::StatusCode::NOT_FOUND;
    Ok(res)
}

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("world").to_owned();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn user(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let body = params
        .iter()
        .map(|(k, v)| format!("{}: {}\n", k, v))
        .collect::<String>();
    Ok(Response::new(Body::from(body)))
}

#[tokio::main(basic_scheduler)]
async fn main() {
    let mut router = Router::new();
    router
        .map(Mapping::to("/hello/:name", "HelloController", "show"))
        .map(
            Mapping::to("/user/:id", "UserController", "show")
                .condition("id", "[0-9]+")
                .param("source", "demo"),
        );

    let mut dispatcher: Dispatcher<BoxHandler> = Dispatcher::new(router);
    dispatcher
        .route("HelloController", "show", hello)
        .route("UserController", "show", user)
        .route("NotFoundController", "index", not_found);

    let service = dispatcher.into_service();

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("user: http://{}/user/42", addr);
    println!("404: http://{}/user/abc", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
