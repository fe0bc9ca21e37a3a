mod error;
mod imp;
mod matched;
mod route;

pub use self::error::RouterError;
pub use self::matched::{Dispatch, ResolvedMatch};
pub use self::route::Mapping;

use crate::params::Params;
use crate::pattern::RoutePattern;

use std::collections::HashMap;
use std::fmt;

/// An ordered set of routes. The first registered route that matches a
/// path wins.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
    config: RouterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Prefix removed from request paths before matching, e.g. `/blog/`.
    pub sub_dir: String,
    /// Used by mappings that name no controller.
    pub default_controller: String,
    /// Used by mappings that name no action, and by the not-found fallback.
    pub default_action: String,
    pub not_found_controller: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sub_dir: String::new(),
            default_controller: "WelcomeController".to_owned(),
            default_action: "index".to_owned(),
            not_found_controller: "NotFoundController".to_owned(),
        }
    }
}

/// Identifies the unit of work a route leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId {
    controller: Box<str>,
    action: Box<str>,
}

impl HandlerId {
    pub fn new(controller: impl Into<Box<str>>, action: impl Into<Box<str>>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    handler: HandlerId,
    static_params: Params,
    conditions: HashMap<String, String>,
}
