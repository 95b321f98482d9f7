//! Suggestion engine: best-effort alternatives for poorly graded products.

use std::sync::Arc;

use tracing::{debug, warn};

use es_core::ports::CatalogPort;
use es_core::{CategoryCandidate, CategoryTag, ProductRecord};

/// Fetches and filters alternative products from the catalog's category
/// index.
#[derive(Clone)]
pub struct SuggestionEngine {
    catalog: Arc<dyn CatalogPort>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch alternatives for one compound category tag.
    ///
    /// Best effort: a tag that is not in `namespace:slug` form is a defined
    /// no-op with no network call, and a failed or unparseable fetch degrades
    /// to no alternatives. Neither surfaces to the session; the log events
    /// keep the two cases apart.
    pub async fn find_alternatives(&self, raw_tag: &str) -> Vec<ProductRecord> {
        let Some(tag) = CategoryTag::parse(raw_tag) else {
            debug!(
                tag = %raw_tag,
                "category tag not in namespace:slug form, skipping fetch"
            );
            return Vec::new();
        };
        match self.catalog.products_in_category(tag.slug()).await {
            Ok(candidates) => {
                let fetched = candidates.len();
                // Catalog order is preserved; filtering is the only change.
                let alternatives: Vec<ProductRecord> = candidates
                    .into_iter()
                    .filter(CategoryCandidate::qualifies)
                    .map(CategoryCandidate::into_record)
                    .collect();
                debug!(
                    category = %tag.slug(),
                    fetched,
                    kept = alternatives.len(),
                    "category candidates filtered"
                );
                alternatives
            }
            Err(err) => {
                warn!(
                    category = %tag.slug(),
                    error = %err,
                    "suggestion fetch failed, degrading to no alternatives"
                );
                Vec::new()
            }
        }
    }
}
