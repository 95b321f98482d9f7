//! HTTP client for the Open Food Facts catalog.

use async_trait::async_trait;
use tracing::{debug, warn};

use es_core::ports::{CatalogError, CatalogPort};
use es_core::{CategoryCandidate, ProductRecord};

use crate::config::CatalogConfig;
use crate::dto::{CategoryEnvelope, CategoryProductDto, ProductEnvelope};

/// Fixed page size of the category-index query.
const CATEGORY_PAGE_SIZE: u32 = 20;

/// Field subset requested from the category index.
const CATEGORY_FIELDS: &str = "product_name,code,ecoscore_grade,image_url";

/// `status` value the product endpoint reports for a found record.
const STATUS_FOUND: i64 = 1;

/// Catalog port implementation over the Open Food Facts HTTP API.
///
/// One network request per invocation, no retries, no caching; the session
/// layer above decides what a failure means.
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl OpenFoodFactsClient {
    /// Build a client with a shared connection pool and the configured
    /// request timeout. Timeout expiry surfaces as a transport failure.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        Ok(Self { http, config })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url, "requesting catalog endpoint");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport(format!(
                "unexpected status {status}"
            )));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| CatalogError::Transport(format!("decode failed: {err}")))
    }
}

#[async_trait]
impl CatalogPort for OpenFoodFactsClient {
    async fn product_by_code(&self, code: &str) -> Result<ProductRecord, CatalogError> {
        let url = format!("{}/api/v0/product/{}.json", self.config.base_url, code);
        let envelope: ProductEnvelope = self.get_json(&url).await?;
        match envelope.product {
            Some(product) if envelope.status == STATUS_FOUND => {
                let record = product.into_record(code.to_string());
                debug!(code, name = %record.name, grade = %record.grade, "product resolved");
                Ok(record)
            }
            _ => {
                warn!(code, status = envelope.status, "catalog has no record for code");
                Err(CatalogError::NotFound)
            }
        }
    }

    async fn products_in_category(
        &self,
        slug: &str,
    ) -> Result<Vec<CategoryCandidate>, CatalogError> {
        let url = format!(
            "{}/category/{}.json?fields={}&page_size={}",
            self.config.base_url,
            urlencoding::encode(slug),
            CATEGORY_FIELDS,
            CATEGORY_PAGE_SIZE,
        );
        let envelope: CategoryEnvelope = self.get_json(&url).await?;
        debug!(slug, count = envelope.products.len(), "category page fetched");
        Ok(envelope
            .products
            .into_iter()
            .map(CategoryProductDto::into_candidate)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_core::EcoGrade;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(CatalogConfig::with_base_url(server.url()))
            .expect("client builds")
    }

    #[tokio::test]
    async fn product_lookup_decodes_fields_and_defaults() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v0/product/0001.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":1,"product":{"product_name":"Soda","ecoscore_grade":"d","categories_tags":["en:drinks"]}}"#,
            )
            .create_async()
            .await;

        let record = client_for(&server)
            .product_by_code("0001")
            .await
            .expect("record resolves");

        mock.assert_async().await;
        assert_eq!(record.code, "0001");
        assert_eq!(record.name, "Soda");
        assert_eq!(record.grade, EcoGrade::D);
        assert_eq!(record.carbon_footprint_100g, None);
        assert_eq!(record.categories, vec!["en:drinks"]);
    }

    #[tokio::test]
    async fn missing_record_maps_to_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v0/product/0002.json")
            .with_status(200)
            .with_body(r#"{"status":0,"status_verbose":"product not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .product_by_code("0002")
            .await
            .expect_err("no record");
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn unparseable_body_maps_to_transport() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v0/product/0001.json")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;

        let err = client_for(&server)
            .product_by_code("0001")
            .await
            .expect_err("decode fails");
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn server_error_maps_to_transport() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v0/product/0001.json")
            .with_status(502)
            .create_async()
            .await;

        let err = client_for(&server)
            .product_by_code("0001")
            .await
            .expect_err("bad gateway");
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn category_query_carries_fixed_fields_and_page_size() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/category/yogurts.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "fields".into(),
                    "product_name,code,ecoscore_grade,image_url".into(),
                ),
                Matcher::UrlEncoded("page_size".into(), "20".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"products":[
                    {"product_name":"Plain Yogurt","code":"0010","ecoscore_grade":"B"},
                    {"product_name":"Choc Yogurt","code":"0011","ecoscore_grade":"D"}
                ]}"#,
            )
            .create_async()
            .await;

        let candidates = client_for(&server)
            .products_in_category("yogurts")
            .await
            .expect("category page");

        mock.assert_async().await;
        // Catalog order is preserved, no re-ranking.
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].code, "0010");
        assert_eq!(candidates[0].grade, EcoGrade::B);
        assert_eq!(candidates[1].code, "0011");
        assert_eq!(candidates[1].grade, EcoGrade::D);
    }

    #[tokio::test]
    async fn category_slug_is_percent_encoded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/category/fizzy%20drinks.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"products":[]}"#)
            .create_async()
            .await;

        let candidates = client_for(&server)
            .products_in_category("fizzy drinks")
            .await
            .expect("empty page");

        mock.assert_async().await;
        assert!(candidates.is_empty());
    }
}
