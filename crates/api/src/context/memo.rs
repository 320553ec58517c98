//! Request-scoped memoization slot
//!
//! Holds at most one computed value. The first caller runs the computation;
//! concurrent callers wait for that same computation instead of starting their
//! own. A slot lives exactly as long as the request that owns it.

use std::future::Future;

use tokio::sync::OnceCell;

pub struct RequestMemo<T> {
    cell: OnceCell<T>,
}

impl<T> Default for RequestMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestMemo<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Value if already computed
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the memoized value, computing it on first use
    pub async fn get_or_compute<F, Fut>(&self, compute: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(compute).await
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// An error leaves the slot empty; the next caller computes again.
    pub async fn get_or_try_compute<F, Fut, E>(&self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(compute).await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RequestMemo<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestMemo")
            .field("value", &self.cell.get())
            .finish()
    }
}
