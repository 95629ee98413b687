//! Per-session catalog state and change notification.
//!
//! One presentation session owns one [`CatalogSession`]: the full component
//! list, the current search text, and the subscriber list. All mutation goes
//! through [`CatalogSession::load`] and [`CatalogSession::set_search_text`];
//! derived views come from the pure query functions and are recomputed on
//! every call. Reads are reentrant and lock-free because the single owner is
//! also the single writer.

use std::sync::mpsc::{self, Receiver, Sender};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use gallery_catalog::{
    CatalogSource, Category, ComponentDescriptor, ComponentId, FetchError, grouped_catalog,
};

/// Errors surfaced by [`CatalogSession::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The session already holds a successfully loaded catalog.
    #[error("component catalog is already loaded for this session")]
    AlreadyLoaded,
    /// The data source failed; the previously held list is retained.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Change notifications delivered to session subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A successful load replaced the full list.
    Loaded { count: usize },
    /// The search text changed; derived views must be recomputed.
    SearchTextChanged,
    /// A load attempt failed; the catalog is unavailable until retried.
    LoadFailed,
}

/// Embedder-supplied session settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Search text the session starts with.
    pub initial_search: String,
}

/// State container owning one presentation session's catalog.
///
/// Constructed explicitly around a data source so tests can substitute their
/// own [`CatalogSource`] without any global wiring.
pub struct CatalogSession<S> {
    source: S,
    components: Vec<ComponentDescriptor>,
    search_text: String,
    loaded: bool,
    subscribers: Vec<Sender<CatalogEvent>>,
}

impl<S: CatalogSource> CatalogSession<S> {
    /// Create a session around an explicit data source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, SessionConfig::default())
    }

    /// Create a session with embedder-supplied settings.
    #[must_use]
    pub fn with_config(source: S, config: SessionConfig) -> Self {
        Self {
            source,
            components: Vec::new(),
            search_text: config.initial_search,
            loaded: false,
            subscribers: Vec::new(),
        }
    }

    /// Fetch the catalog and replace the stored list, returning the count.
    ///
    /// The load runs once per session lifecycle: a second call after a
    /// successful load is rejected. A failed fetch leaves the held list
    /// untouched (the empty state when nothing ever loaded), notifies
    /// subscribers that the catalog is unavailable, and may be retried.
    pub async fn load(&mut self) -> Result<usize, LoadError> {
        if self.loaded {
            return Err(LoadError::AlreadyLoaded);
        }
        match self.source.fetch_all().await {
            Ok(components) => {
                let count = components.len();
                self.components = components;
                self.loaded = true;
                info!(count, "component catalog loaded");
                self.notify(CatalogEvent::Loaded { count });
                Ok(count)
            }
            Err(error) => {
                warn!(%error, "component catalog unavailable");
                self.notify(CatalogEvent::LoadFailed);
                Err(error.into())
            }
        }
    }

    /// Replace the search text and notify subscribers.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        debug!(query = %self.search_text, "search text updated");
        self.notify(CatalogEvent::SearchTextChanged);
    }

    /// The current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The full unfiltered catalog in load order.
    #[must_use]
    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// Whether a load has completed successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Resolve a selected identifier to the full descriptor handed to the
    /// detail surface.
    #[must_use]
    pub fn descriptor(&self, id: ComponentId) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|component| component.id == id)
    }

    /// The filtered, sectioned view of the catalog.
    ///
    /// Recomputed from the stored list and search text on every call; there
    /// is no cache to patch. Presenters iterate [`Category::ALL`] for the
    /// section order and skip categories absent from the result.
    #[must_use]
    pub fn grouped(&self) -> IndexMap<Category, Vec<&ComponentDescriptor>> {
        grouped_catalog(&self.components, &self.search_text)
    }

    /// Register a change subscriber.
    ///
    /// Each subscriber gets its own channel. Receivers that have been
    /// dropped are pruned on the next notification.
    pub fn subscribe(&mut self) -> Receiver<CatalogEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    fn notify(&mut self, event: CatalogEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
