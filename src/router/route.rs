use super::{HandlerId, Route, RouterConfig, RouterError};
use crate::params::Params;
use crate::path::decode_component;
use crate::pattern::RoutePattern;

use std::collections::HashMap;

impl Route {
    pub fn new(
        pattern: &str,
        handler: HandlerId,
        static_params: Params,
        conditions: HashMap<String, String>,
    ) -> Result<Self, RouterError> {
        let pattern = RoutePattern::compile(pattern, &conditions)?;
        Ok(Self {
            pattern,
            handler,
            static_params,
            conditions,
        })
    }

    /// Matches `path` and returns the decoded captures overlaid with the
    /// route's static params.
    pub fn test_against(&self, path: &str) -> Option<Params> {
        let captures = self.pattern.captures(path)?;
        let mut params: Params = captures
            .into_iter()
            .map(|(name, raw)| (name, decode_component(raw)))
            .collect();
        params.merge(&self.static_params);
        Some(params)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn source(&self) -> &str {
        self.pattern.source()
    }

    pub fn expression(&self) -> &str {
        self.pattern.expression()
    }

    pub fn handler(&self) -> &HandlerId {
        &self.handler
    }

    pub fn controller(&self) -> &str {
        self.handler.controller()
    }

    pub fn action(&self) -> &str {
        self.handler.action()
    }

    pub fn static_params(&self) -> &Params {
        &self.static_params
    }

    pub fn conditions(&self) -> &HashMap<String, String> {
        &self.conditions
    }
}

/// A route declaration.
///
/// ```
/// use waypoint_router::Mapping;
///
/// let mapping = Mapping::new("/user/:id")
///     .controller("UserController")
///     .action("show")
///     .condition("id", "[0-9]+");
/// # let _ = mapping;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    pattern: String,
    controller: Option<String>,
    action: Option<String>,
    params: Params,
    conditions: HashMap<String, String>,
}

impl Mapping {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn to(pattern: impl Into<String>, controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(pattern).controller(controller).action(action)
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Adds a static parameter, present in every match of this route.
    pub fn param(mut self, name: impl Into<Box<str>>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn params<K, V>(mut self, iter: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.params.extend(iter);
        self
    }

    /// Replaces the default capture expression for `name`.
    pub fn condition(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.conditions.insert(name.into(), expr.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(super) fn build(self, config: &RouterConfig) -> Result<Route, RouterError> {
        let controller = self
            .controller
            .unwrap_or_else(|| config.default_controller.clone());
        let action = self
            .action
            .unwrap_or_else(|| config.default_action.clone());
        Route::new(
            &self.pattern,
            HandlerId::new(controller, action),
            self.params,
            self.conditions,
        )
    }
}

impl From<&str> for Mapping {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
