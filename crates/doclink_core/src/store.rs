//! Owner of the published scan configuration.
//!
//! Hosts keep one [`ConfigStore`] and hand each scan the current snapshot.
//! After the user edits their settings the host calls
//! [`ConfigStore::invalidate`] or [`ConfigStore::reload`]; scans already
//! running keep the snapshot they started with.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use tracing::debug;

use crate::config::{DocLinkSettings, ScanConfig};

/// Supplies the raw settings a snapshot is resolved from.
pub trait SettingsSource: Send + Sync {
    fn settings(&self) -> DocLinkSettings;
}

impl SettingsSource for DocLinkSettings {
    fn settings(&self) -> DocLinkSettings {
        self.clone()
    }
}

impl<F> SettingsSource for F
where
    F: Fn() -> DocLinkSettings + Send + Sync,
{
    fn settings(&self) -> DocLinkSettings {
        self()
    }
}

/// Thread-safe cache of the resolved [`ScanConfig`].
///
/// Reads take no lock: the published `Arc` is swapped atomically. Rebuilds and
/// invalidations serialize on a separate update lock, so a reader sees either
/// the previous or the new snapshot, never a partial one.
pub struct ConfigStore<S> {
    source: S,
    current: ArcSwapOption<ScanConfig>,
    update: Mutex<()>,
}

impl<S: SettingsSource> ConfigStore<S> {
    /// Creates a store. The first snapshot is built on first use.
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: ArcSwapOption::empty(),
            update: Mutex::new(()),
        }
    }

    /// Returns the published snapshot, building it if needed.
    pub fn snapshot(&self) -> Arc<ScanConfig> {
        if let Some(config) = self.current.load_full() {
            return config;
        }

        let _update = self.update.lock();
        // Another caller may have rebuilt while we waited.
        if let Some(config) = self.current.load_full() {
            return config;
        }
        self.rebuild()
    }

    /// Drops the published snapshot. The next [`snapshot`](Self::snapshot)
    /// resolves the settings again.
    pub fn invalidate(&self) {
        let _update = self.update.lock();
        self.current.store(None);
        debug!("Scan configuration invalidated");
    }

    /// Resolves the settings now and publishes the result.
    pub fn reload(&self) -> Arc<ScanConfig> {
        let _update = self.update.lock();
        self.rebuild()
    }

    /// Publishes a snapshot built elsewhere.
    pub fn replace(&self, config: ScanConfig) -> Arc<ScanConfig> {
        let _update = self.update.lock();
        let config = Arc::new(config);
        self.current.store(Some(Arc::clone(&config)));
        config
    }

    /// Whether a snapshot is currently published.
    pub fn is_cached(&self) -> bool {
        self.current.load().is_some()
    }

    // Caller must hold the update lock.
    fn rebuild(&self) -> Arc<ScanConfig> {
        let config = Arc::new(ScanConfig::from_settings(&self.source.settings()));
        self.current.store(Some(Arc::clone(&config)));
        debug!(tags = ?config.tags(), "Scan configuration rebuilt");
        config
    }
}

impl Default for ConfigStore<DocLinkSettings> {
    fn default() -> Self {
        Self::new(DocLinkSettings::default())
    }
}

impl<S> std::fmt::Debug for ConfigStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &*self.current.load())
            .finish_non_exhaustive()
    }
}
