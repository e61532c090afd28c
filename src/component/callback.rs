//! Shared callback handles for caller-supplied actions

use std::fmt;
use std::sync::Arc;

/// A cheaply clonable, thread-safe callback.
///
/// Every action a widget forwards to its caller travels through one of
/// these: retries, dismissals, async button actions. Cloning shares the
/// underlying function.
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args: 'static, Ret: 'static> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// Convenience function for creating a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}
