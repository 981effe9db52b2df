//! Startup data initializers.
//!
//! Each [`DataInitializer`] declares an explicit [`order`](DataInitializer::order);
//! [`DataInitializers`] runs the registered ones from lowest to highest order
//! and stops at the first failure. Initializers with equal order run in
//! registration order.

pub mod customers;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use videoshop_core::UsernameError;

use crate::accounts::AccountError;
use crate::customers::CustomerError;

pub use customers::{CustomerSeeder, CustomerSeederBuilder};

/// Errors that can occur while assembling or running initializers.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A required collaborator was not supplied.
    #[error("{0} must not be missing")]
    MissingCollaborator(&'static str),

    /// A username baked into the seed data is invalid.
    #[error("invalid seed username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Account directory failure.
    #[error("account directory error: {0}")]
    Accounts(#[from] AccountError),

    /// Customer store failure.
    #[error("customer store error: {0}")]
    Customers(#[from] CustomerError),
}

/// A run-once routine that populates initial data at startup.
#[async_trait]
pub trait DataInitializer: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Position in the startup sequence. Lower runs first.
    fn order(&self) -> i32 {
        0
    }

    /// Populate the data. Implementations decide themselves whether the data
    /// is already present.
    async fn initialize(&self) -> Result<(), SeedError>;
}

/// An ordered set of data initializers.
#[derive(Default)]
pub struct DataInitializers {
    initializers: Vec<Box<dyn DataInitializer>>,
}

impl DataInitializers {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an initializer.
    #[must_use]
    pub fn with(mut self, initializer: impl DataInitializer + 'static) -> Self {
        self.initializers.push(Box::new(initializer));
        self
    }

    /// Names in the order they will run.
    #[must_use]
    pub fn sequence(&self) -> Vec<&'static str> {
        self.ordered().iter().map(|i| i.name()).collect()
    }

    /// Number of registered initializers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    /// Whether no initializers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }

    /// Run every initializer in order.
    ///
    /// # Errors
    ///
    /// Returns the first initializer error; later initializers do not run.
    pub async fn run_all(&self) -> Result<(), SeedError> {
        for initializer in self.ordered() {
            info!(
                initializer = initializer.name(),
                order = initializer.order(),
                "Running data initializer"
            );
            initializer.initialize().await?;
        }
        Ok(())
    }

    fn ordered(&self) -> Vec<&dyn DataInitializer> {
        let mut ordered: Vec<&dyn DataInitializer> =
            self.initializers.iter().map(|i| &**i).collect();
        ordered.sort_by_key(|i| i.order());
        ordered
    }
}

impl std::fmt::Debug for DataInitializers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataInitializers")
            .field("sequence", &self.sequence())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::db::RepositoryError;

    struct Recording {
        name: &'static str,
        order: i32,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl DataInitializer for Recording {
        fn name(&self) -> &'static str {
            self.name
        }

        fn order(&self) -> i32 {
            self.order
        }

        async fn initialize(&self) -> Result<(), SeedError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                return Err(SeedError::Customers(CustomerError::Repository(
                    RepositoryError::NotFound,
                )));
            }
            Ok(())
        }
    }

    fn recording(
        name: &'static str,
        order: i32,
        fail: bool,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Recording {
        Recording {
            name,
            order,
            fail,
            log: Arc::clone(log),
        }
    }

    #[tokio::test]
    async fn test_runs_in_priority_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let initializers = DataInitializers::new()
            .with(recording("catalog", 20, false, &log))
            .with(recording("customers", 10, false, &log))
            .with(recording("inventory", 20, false, &log))
            .with(recording("settings", -5, false, &log));

        assert_eq!(
            initializers.sequence(),
            vec!["settings", "customers", "catalog", "inventory"]
        );

        initializers.run_all().await.unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["settings", "customers", "catalog", "inventory"]
        );
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let initializers = DataInitializers::new()
            .with(recording("first", 1, false, &log))
            .with(recording("broken", 2, true, &log))
            .with(recording("never", 3, false, &log));

        let err = initializers.run_all().await.unwrap_err();
        assert!(matches!(err, SeedError::Customers(_)));
        assert_eq!(*log.lock().unwrap(), vec!["first", "broken"]);
    }

    #[tokio::test]
    async fn test_empty_set_is_noop() {
        let initializers = DataInitializers::new();
        assert!(initializers.is_empty());
        assert_eq!(initializers.len(), 0);
        initializers.run_all().await.unwrap();
    }
}
