use tracing::instrument;
use tvsub_extract::models::SeriesId;

use super::{Resolver, SeriesLookup};
use crate::client::CatalogClient;
use crate::error::{ErrorKind, Result};

impl Resolver {
    /// Returns the catalog identifier of the series called `name`.
    ///
    /// The name is case-folded before searching and caching, so "Foo Show"
    /// and "foo show" share one search request per process.
    ///
    /// Disambiguation is "first result in page order": the search results
    /// are not scored against `name`.
    ///
    /// # Errors
    /// - [`ErrorKind::AmbiguousOrNotFound`] if the search returns nothing.
    /// - [`ErrorKind::Fetch`] if the search page could not be fetched.
    #[instrument(skip(self))]
    pub fn resolve_series(&mut self, name: &str) -> Result<SeriesId> {
        let Self { client, cache } = self;
        cache.get_or_try_insert_with::<SeriesLookup, _>(name.trim().to_lowercase(), |name| search(client, name))
    }
}

fn search(client: &CatalogClient, name: &str) -> Result<SeriesId> {
    let hits = client.search(name)?;
    let Some(first) = hits.first() else {
        exn::bail!(ErrorKind::AmbiguousOrNotFound(name.to_string()));
    };
    tracing::debug!(candidates = hits.len(), chosen = %first.name, id = %first.id, "Picked first search result");
    Ok(first.id)
}
