//! Deferred view component references.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error raised when a view module cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("view module `{specifier}` is not available")]
    NotFound { specifier: String },

    #[error("failed to load view module `{specifier}`: {reason}")]
    Failed { specifier: String, reason: String },
}

/// Future returned by a component factory.
pub type LoadFuture = BoxFuture<'static, Result<ViewModule, LoadError>>;

type Factory = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Handle to a loaded view module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModule {
    specifier: String,
    name: String,
}

impl ViewModule {
    /// Create a handle for `specifier`; the name is its last path segment.
    pub fn new(specifier: impl Into<String>) -> Self {
        let specifier: String = specifier.into();
        let name = specifier
            .rsplit('/')
            .next()
            .unwrap_or(specifier.as_str())
            .to_string();
        Self { specifier, name }
    }

    /// Module specifier, e.g. `pages/monitor`.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// Short module name, e.g. `monitor`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A lazily-resolvable reference to a view module.
///
/// Holds the module specifier and a zero-argument factory producing a future
/// of the module. Creating or cloning a reference never runs the factory;
/// only [`ComponentRef::load`] does.
#[derive(Clone)]
pub struct ComponentRef {
    specifier: Arc<str>,
    factory: Factory,
}

impl ComponentRef {
    /// Wrap an async factory.
    pub fn lazy<F, Fut>(specifier: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewModule, LoadError>> + Send + 'static,
    {
        let specifier: String = specifier.into();
        Self {
            specifier: Arc::from(specifier),
            factory: Arc::new(move || factory().boxed()),
        }
    }

    /// Reference to a module bundled with the application.
    ///
    /// Loading yields to the runtime once before handing out the module, so
    /// callers always observe a suspension point.
    pub fn import(specifier: impl Into<String>) -> Self {
        let specifier: String = specifier.into();
        let module_specifier = specifier.clone();
        Self::lazy(specifier, move || {
            let specifier = module_specifier.clone();
            async move {
                tokio::task::yield_now().await;
                Ok(ViewModule::new(specifier))
            }
        })
    }

    /// Reference whose load always fails with [`LoadError::NotFound`].
    pub fn missing(specifier: impl Into<String>) -> Self {
        let specifier: String = specifier.into();
        let module_specifier = specifier.clone();
        Self::lazy(specifier, move || {
            let specifier = module_specifier.clone();
            async move { Err(LoadError::NotFound { specifier }) }
        })
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// Run the factory.
    pub fn load(&self) -> LoadFuture {
        (self.factory)()
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("specifier", &self.specifier)
            .finish_non_exhaustive()
    }
}

// Two references are the same component when they name the same module.
impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.specifier == other.specifier
    }
}

impl Eq for ComponentRef {}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.specifier)
    }
}
