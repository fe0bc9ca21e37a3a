//! Serves a [`Dispatcher`](crate::Dispatcher) over hyper.
//!
//! The request URI's path is routed; the query is ignored. Handlers are
//! async functions taking the request and its route parameters.

mod service;

pub use self::service::{BoxHandler, Handler, RouterService};
