//! Operations context for dependency injection

use romrun_catalog::EmulatorCatalog;
use romrun_config::Config;
use romrun_errors::Error;
use romrun_events::{EventEmitter, EventSender};
use romrun_launch::LaunchSupervisor;
use romrun_platform::{ExecutableLocator, ProcessHost};
use romrun_resolver::EmulatorResolver;
use std::sync::Arc;

/// Operations context providing access to all system components
///
/// Every seam is injected: the catalog is plain data, the locator and the
/// process host are trait objects. Operations built over this context never
/// touch the real environment unless the context was built with the real
/// implementations.
pub struct OpsCtx {
    /// Emulator catalog
    pub catalog: EmulatorCatalog,
    /// Executable search-path probe
    pub locator: Arc<dyn ExecutableLocator>,
    /// Child process host
    pub host: Arc<dyn ProcessHost>,
    /// Event sender for progress reporting
    pub tx: EventSender,
    /// System configuration
    pub config: Config,
}

impl OpsCtx {
    // No public constructor - use OpsContextBuilder instead

    /// Resolver over this context's catalog and locator
    #[must_use]
    pub fn resolver(&self) -> EmulatorResolver {
        EmulatorResolver::new(self.catalog.clone(), Arc::clone(&self.locator))
            .with_events(self.tx.clone())
    }

    /// Launch supervisor over this context's process host
    #[must_use]
    pub fn supervisor(&self) -> LaunchSupervisor {
        LaunchSupervisor::new(Arc::clone(&self.host)).with_events(self.tx.clone())
    }
}

impl EventEmitter for OpsCtx {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }
}

impl std::fmt::Debug for OpsCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpsCtx")
            .field("catalog_entries", &self.catalog.descriptor_count())
            .finish_non_exhaustive()
    }
}

/// Builder for `OpsCtx`
#[derive(Default)]
pub struct OpsContextBuilder {
    catalog: Option<EmulatorCatalog>,
    locator: Option<Arc<dyn ExecutableLocator>>,
    host: Option<Arc<dyn ProcessHost>>,
    tx: Option<EventSender>,
    config: Option<Config>,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set emulator catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: EmulatorCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set executable locator
    #[must_use]
    pub fn with_locator(mut self, locator: Arc<dyn ExecutableLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Set process host
    #[must_use]
    pub fn with_host(mut self, host: Arc<dyn ProcessHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if any required component is missing.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let catalog = self
            .catalog
            .ok_or_else(|| romrun_errors::OpsError::MissingComponent {
                component: "catalog".to_string(),
            })?;

        let locator = self
            .locator
            .ok_or_else(|| romrun_errors::OpsError::MissingComponent {
                component: "locator".to_string(),
            })?;

        let host = self
            .host
            .ok_or_else(|| romrun_errors::OpsError::MissingComponent {
                component: "host".to_string(),
            })?;

        let tx = self
            .tx
            .ok_or_else(|| romrun_errors::OpsError::MissingComponent {
                component: "event_sender".to_string(),
            })?;

        let config = self
            .config
            .ok_or_else(|| romrun_errors::OpsError::MissingComponent {
                component: "config".to_string(),
            })?;

        Ok(OpsCtx {
            catalog,
            locator,
            host,
            tx,
            config,
        })
    }
}
