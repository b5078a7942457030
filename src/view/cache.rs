//! Loaded view module cache.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::view::component::{ComponentRef, LoadError, ViewModule};

/// A thread-safe cache of loaded view modules, keyed by specifier.
///
/// Each specifier gets its own once-cell: concurrent loads of the same module
/// share one factory call, and a failed load leaves the cell empty so the
/// next navigation retries.
#[derive(Debug, Clone, Default)]
pub struct ModuleCache {
    inner: Arc<DashMap<String, Arc<OnceCell<Arc<ViewModule>>>>>,
}

impl ModuleCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached module for `component`, loading it on first use.
    pub async fn load(&self, component: &ComponentRef) -> Result<Arc<ViewModule>, LoadError> {
        // The map guard must not live across the await below.
        let cell = self
            .inner
            .entry(component.specifier().to_string())
            .or_default()
            .clone();

        let module = cell
            .get_or_try_init(|| async move {
                tracing::debug!(specifier = component.specifier(), "Loading view module");
                match component.load().await {
                    Ok(module) => Ok(Arc::new(module)),
                    Err(e) => {
                        tracing::warn!(
                            specifier = component.specifier(),
                            error = %e,
                            "View module failed to load"
                        );
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(module.clone())
    }

    /// Returns true if the module has been loaded successfully.
    pub fn is_loaded(&self, specifier: &str) -> bool {
        self.inner
            .get(specifier)
            .is_some_and(|cell| cell.initialized())
    }

    /// Number of successfully loaded modules.
    pub fn loaded_count(&self) -> usize {
        self.inner.iter().filter(|r| r.value().initialized()).count()
    }
}
