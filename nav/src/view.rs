use std::{fmt, future::Future, pin::Pin, sync::Arc};

use tokio::sync::OnceCell;
use types::Result;

type LoadFuture<V> = Pin<Box<dyn Future<Output = Result<V>>>>;
type Loader<V> = Arc<dyn Fn() -> LoadFuture<V> + Send + Sync>;

/// A view that is resolved the first time it is navigated to.
///
/// Clones share the same cache, so a view loaded through one route match is
/// loaded for every holder. A failed load leaves the cache empty; the next
/// `load` runs the loader again.
pub struct LazyView<V> {
    loader: Loader<V>,
    cell: Arc<OnceCell<V>>,
}

impl<V> Clone for LazyView<V> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<V: Clone + 'static> LazyView<V> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V>> + 'static,
    {
        Self {
            loader: Arc::new(move || Box::pin(loader()) as LoadFuture<V>),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// A view that needs no loading.
    pub fn ready(view: V) -> Self
    where
        V: Send + Sync,
    {
        Self::new(move || {
            let view = view.clone();
            async move { Ok(view) }
        })
    }

    pub async fn load(&self) -> Result<V> {
        self.cell
            .get_or_try_init(|| (self.loader)())
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl<V> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.initialized())
            .finish()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
