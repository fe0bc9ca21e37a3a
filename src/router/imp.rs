use super::matched::{Dispatch, ResolvedMatch};
use super::route::Mapping;
use super::{HandlerId, Route, Router, RouterConfig, RouterError};
use crate::path::normalize_path;

use std::borrow::Cow;

use tracing::{debug, trace};

impl Router {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            config,
        }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn set_sub_dir(&mut self, sub_dir: impl Into<String>) -> &mut Self {
        self.config.sub_dir = sub_dir.into();
        self
    }

    pub fn set_default_controller(&mut self, controller: impl Into<String>) -> &mut Self {
        self.config.default_controller = controller.into();
        self
    }

    pub fn set_default_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.config.default_action = action.into();
        self
    }

    pub fn set_not_found_controller(&mut self, controller: impl Into<String>) -> &mut Self {
        self.config.not_found_controller = controller.into();
        self
    }

    /// Declares a route, panicking on conflict or invalid condition.
    pub fn map(&mut self, mapping: impl Into<Mapping>) -> &mut Self {
        let mapping = mapping.into();
        let pattern = mapping.pattern().to_owned();
        if let Err(e) = self.insert_mapping(mapping) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Declares a route.
    ///
    /// Fails if the compiled expression equals that of a registered route,
    /// or if a condition is not a valid expression. The router is left
    /// unchanged on failure.
    pub fn register(&mut self, mapping: impl Into<Mapping>) -> Result<&mut Self, RouterError> {
        self.insert_mapping(mapping.into())?;
        Ok(self)
    }

    pub fn normalize<'p>(&self, path: &'p str) -> Cow<'p, str> {
        normalize_path(path, &self.config.sub_dir)
    }

    /// Finds the first registered route matching `path`.
    ///
    /// `path` is the raw request target; it is normalized first.
    pub fn resolve(&self, path: &str) -> Option<ResolvedMatch<'_>> {
        let path = self.normalize(path);
        let ret = self.routes.iter().find_map(|route| {
            trace!(pattern = route.source(), path = %path, "testing route");
            route
                .test_against(&path)
                .map(|params| ResolvedMatch::new(route, params))
        });
        match &ret {
            Some(m) => debug!(
                path = %path,
                pattern = m.route().source(),
                handler = %m.handler(),
                "route matched"
            ),
            None => debug!(path = %path, routes = self.routes.len(), "no route matched"),
        }
        ret
    }

    /// Resolves `path`, falling back to the not-found controller.
    pub fn dispatch(&self, path: &str) -> Dispatch<'_> {
        match self.resolve(path) {
            Some(m) => Dispatch::matched(m),
            None => Dispatch::fallback(self.not_found_handler()),
        }
    }

    pub fn not_found_handler(&self) -> HandlerId {
        HandlerId::new(
            &*self.config.not_found_controller,
            &*self.config.default_action,
        )
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Router {
    fn insert_mapping(&mut self, mapping: Mapping) -> Result<(), RouterError> {
        let route = mapping.build(&self.config)?;

        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| r.expression() == route.expression())
        {
            return Err(RouterError::Conflict {
                pattern: route.source().to_owned(),
                existing: existing.source().to_owned(),
            });
        }

        debug!(
            pattern = route.source(),
            expression = route.expression(),
            handler = %route.handler(),
            "route registered"
        );
        self.routes.push(route);
        Ok(())
    }
}
