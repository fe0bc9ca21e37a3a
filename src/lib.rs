//! An ordered, pattern-based path router.
//!
//! Routes are declared as patterns such as `/user/:id`, each bound to a
//! `(controller, action)` pair. A path resolves to the first declared route
//! whose pattern matches it; paths matching nothing dispatch to the
//! not-found controller.
//!
//! ```
//! use waypoint_router::{Mapping, Router};
//!
//! let mut router = Router::new();
//! router
//!     .map(Mapping::to("/user/:id", "UserController", "show").condition("id", "[0-9]+"))
//!     .map(Mapping::new("/:controller/:action"));
//!
//! let m = router.resolve("/user/42").unwrap();
//! assert_eq!(m.handler().controller(), "UserController");
//! assert_eq!(m.params().get("id"), Some("42"));
//!
//! let d = router.dispatch("/nothing/matches/this");
//! assert_eq!(d.handler().controller(), "NotFoundController");
//! ```

#![forbid(unsafe_code)]

mod dispatch;
mod params;
mod path;
mod pattern;
mod router;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

pub use self::dispatch::{Action, BoxAction, Controller, DispatchError, Dispatcher};
pub use self::params::Params;
pub use self::path::normalize_path;
pub use self::pattern::{RoutePattern, DEFAULT_CAPTURE};
pub use self::router::{
    Dispatch, HandlerId, Mapping, ResolvedMatch, Route, Router, RouterConfig, RouterError,
};

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{BoxHandler, Handler, RouterService};
