use crate::params::Params;

/// A synchronous unit of work bound to a `(controller, action)` pair.
pub trait Action<R> {
    fn call(&self, params: &Params) -> R;
}

pub type BoxAction<R> = Box<dyn Action<R> + Send + Sync>;

impl<R> Action<R> for BoxAction<R> {
    fn call(&self, params: &Params) -> R {
        Action::call(&**self, params)
    }
}

impl<F, R> Action<R> for F
where
    F: Fn(&Params) -> R,
{
    fn call(&self, params: &Params) -> R {
        (self)(params)
    }
}
