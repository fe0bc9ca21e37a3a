use crate::dispatch::Dispatcher;
use crate::params::Params;
use crate::router::HandlerId;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, Request, Response};
use tracing::debug;

type BoxError = Box<dyn StdError + Send + Sync>;
type ResponseFuture = Pin<Box<dyn Future<Output = Result<Response<Body>, BoxError>> + Send>>;

/// An async endpoint. Implemented for every
/// `Fn(Request<Body>, Params) -> impl Future<Output = Result<Response<Body>, E>>`.
pub trait Handler {
    fn call(&self, req: Request<Body>, params: Params) -> ResponseFuture;
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl<F, E, Fut> Handler for F
where
    F: Fn(Request<Body>, Params) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Body>, E>> + Send + 'static,
{
    fn call(&self, req: Request<Body>, params: Params) -> ResponseFuture {
        let fut = (self)(req, params);
        Box::pin(async move { fut.await.map_err(|e| Box::new(e) as BoxError) })
    }
}

/// A hyper service routing each request through a shared dispatcher.
///
/// Clones share the same dispatcher, so one instance can be handed to
/// every connection.
#[derive(Clone)]
pub struct RouterService {
    dispatcher: Arc<Dispatcher<BoxHandler>>,
}

impl RouterService {
    pub fn new(dispatcher: Dispatcher<BoxHandler>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<BoxHandler> {
        &self.dispatcher
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        debug!(method = %req.method(), uri = %req.uri(), "incoming request");
        let found = self.dispatcher.lookup(req.uri().path());
        match found {
            Ok((handler, params)) => Handler::call(&**handler, req, params),
            Err(e) => Box::pin(async move { Err::<Response<Body>, BoxError>(Box::new(e)) }),
        }
    }
}

impl Dispatcher<BoxHandler> {
    pub fn route(
        &mut self,
        controller: &str,
        action: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.handle(&HandlerId::new(controller, action), Box::new(h))
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}
