//! Binds handler identities to callables.
//!
//! A [`Dispatcher`] pairs a [`Router`] with a table of controllers, each a
//! set of named actions. Looking up a path resolves it through the router
//! (falling back to the not-found controller) and then through the table.

mod action;
mod error;

pub use self::action::{Action, BoxAction};
pub use self::error::DispatchError;

use crate::params::Params;
use crate::router::{HandlerId, Router};

use std::collections::HashMap;

use tracing::debug;

#[derive(Debug)]
pub struct Controller<H> {
    actions: HashMap<Box<str>, H>,
}

impl<H> Controller<H> {
    fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    pub fn action(&mut self, name: &str, handler: H) -> &mut Self {
        self.actions.insert(name.into(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.actions.get(name)
    }
}

#[derive(Debug)]
pub struct Dispatcher<H> {
    router: Router,
    controllers: HashMap<Box<str>, Controller<H>>,
}

impl<H> Dispatcher<H> {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            controllers: HashMap::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn controller(&mut self, name: &str, f: impl FnOnce(&mut Controller<H>)) -> &mut Self {
        f(self.access_controller(name));
        self
    }

    pub fn handle(&mut self, id: &HandlerId, handler: H) -> &mut Self {
        self.access_controller(id.controller())
            .action(id.action(), handler);
        self
    }

    pub fn get(&self, id: &HandlerId) -> Result<&H, DispatchError> {
        let controller = self.controllers.get(id.controller()).ok_or_else(|| {
            DispatchError::ControllerNotFound {
                controller: id.controller().to_owned(),
            }
        })?;
        controller
            .get(id.action())
            .ok_or_else(|| DispatchError::ActionNotFound {
                controller: id.controller().to_owned(),
                action: id.action().to_owned(),
            })
    }

    /// Resolves `path` to a callable and the parameters to call it with.
    pub fn lookup(&self, path: &str) -> Result<(&H, Params), DispatchError> {
        let (id, params) = self.router.dispatch(path).into_parts();
        let handler = self.get(&id)?;
        debug!(path, handler = %id, "dispatching");
        Ok((handler, params))
    }
}

impl<H> Dispatcher<H> {
    fn access_controller(&mut self, name: &str) -> &mut Controller<H> {
        self.controllers
            .entry(name.into())
            .or_insert_with(Controller::new)
    }
}

impl<R> Dispatcher<BoxAction<R>> {
    pub fn route(
        &mut self,
        controller: &str,
        action: &str,
        f: impl Action<R> + Send + Sync + 'static,
    ) -> &mut Self {
        self.handle(&HandlerId::new(controller, action), Box::new(f))
    }

    /// Runs the action `path` resolves to and returns its output.
    pub fn execute(&self, path: &str) -> Result<R, DispatchError> {
        let (action, params) = self.lookup(path)?;
        Ok(action.call(&params))
    }
}
