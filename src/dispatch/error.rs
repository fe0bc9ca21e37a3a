#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("controller {controller:?} does not exist")]
    ControllerNotFound { controller: String },

    #[error("action {action:?} not found in controller {controller:?}")]
    ActionNotFound { controller: String, action: String },
}
