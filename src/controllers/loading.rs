//! Loading flags with guaranteed release
//!
//! A [`LoadingFlag`] is raised for the duration of a request by holding the
//! [`LoadingGuard`] returned from [`LoadingFlag::begin`]. The guard lowers
//! the flag when it is dropped, which covers every exit path of the action:
//! success, failure, early return and unwinding.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared boolean telling the view that a request is outstanding
///
/// Clones observe the same flag, so a renderer can hold one while the
/// controller runs the request.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    /// Create a lowered flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is outstanding
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwise::controllers::LoadingFlag;
    ///
    /// let flag = LoadingFlag::new();
    /// {
    ///     let _guard = flag.begin();
    ///     assert!(flag.is_set());
    /// }
    /// assert!(!flag.is_set());
    /// ```
    #[must_use = "the flag is lowered as soon as the guard is dropped"]
    pub fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::Release);
        LoadingGuard(Arc::clone(&self.0))
    }
}

/// Keeps a [`LoadingFlag`] raised while alive
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
