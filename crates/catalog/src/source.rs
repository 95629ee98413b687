use std::future::Future;

use crate::{ComponentDescriptor, FetchError};

/// A provider of the full component catalog.
///
/// The built-in catalog is compiled in and resolves immediately, but the
/// fetch is declared as a future so a disk- or network-backed source can
/// slot in without changing callers. Callers may rely on the returned order
/// within a single call, not across versions of the data set, and must
/// serialize their own fetches; sources are not required to support
/// concurrent re-invocation.
pub trait CatalogSource: Send + Sync {
    /// Produce the authoritative ordered list of component descriptors.
    fn fetch_all(
        &self,
    ) -> impl Future<Output = Result<Vec<ComponentDescriptor>, FetchError>> + Send;
}
