//! Shared state handles.

use std::sync::Arc;

use parking_lot::RwLock;

/// Shared handle to a mutable value.
///
/// `State<T>` is the seam between the caller-facing API, the resize
/// listener, and the autoplay tick callback: each holds a clone and all
/// observe the same value. Provides `with`, `with_mut`, `get`, and `set`.
///
/// # Examples
///
/// ```
/// use carousel_core::State;
///
/// let count = State::new(0usize);
/// count.with_mut(|c| *c += 1);
/// assert_eq!(count.get(), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Wraps a value in a shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_value() {
        let state = State::new(String::from("a"));
        let alias = state.clone();
        alias.with_mut(|s| s.push('b'));
        assert_eq!(state.get(), "ab");
    }

    #[test]
    fn test_set_replaces() {
        let state = State::new(1);
        state.set(7);
        assert_eq!(state.with(|v| *v), 7);
    }
}
