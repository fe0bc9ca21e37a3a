use super::{HandlerId, Route};
use crate::params::Params;

/// The first route that matched a path, with its parameters.
#[derive(Debug, Clone)]
pub struct ResolvedMatch<'r> {
    route: &'r Route,
    params: Params,
}

impl<'r> ResolvedMatch<'r> {
    pub(super) fn new(route: &'r Route, params: Params) -> Self {
        Self { route, params }
    }

    pub fn route(&self) -> &'r Route {
        self.route
    }

    pub fn handler(&self) -> &'r HandlerId {
        self.route.handler()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

/// What to invoke for a path: the matched route's handler, or the
/// not-found handler with no parameters.
#[derive(Debug, Clone)]
pub struct Dispatch<'r> {
    handler: HandlerId,
    params: Params,
    route: Option<&'r Route>,
}

impl<'r> Dispatch<'r> {
    pub(super) fn matched(m: ResolvedMatch<'r>) -> Self {
        Self {
            handler: m.route.handler().clone(),
            params: m.params,
            route: Some(m.route),
        }
    }

    pub(super) fn fallback(handler: HandlerId) -> Self {
        Self {
            handler,
            params: Params::new(),
            route: None,
        }
    }

    pub fn handler(&self) -> &HandlerId {
        &self.handler
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn route(&self) -> Option<&'r Route> {
        self.route
    }

    pub fn is_fallback(&self) -> bool {
        self.route.is_none()
    }

    pub fn into_parts(self) -> (HandlerId, Params) {
        (self.handler, self.params)
    }
}
