//! Catalog port - abstracts the remote product catalog.

use async_trait::async_trait;

use crate::product::{CategoryCandidate, ProductRecord};

/// Remote catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no record for the code.
    #[error("product not found")]
    NotFound,

    /// The network call could not complete or returned unparseable content.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Catalog port - abstracts the remote product catalog.
///
/// Implementations perform exactly one network request per invocation: no
/// retries, no caching. A failure is reported once to the caller, never
/// swallowed.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Resolve the canonical product record for a scanned code.
    async fn product_by_code(&self, code: &str) -> Result<ProductRecord, CatalogError>;

    /// List products indexed under a category slug, in catalog order.
    async fn products_in_category(
        &self,
        slug: &str,
    ) -> Result<Vec<CategoryCandidate>, CatalogError>;
}
