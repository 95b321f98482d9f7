//! Wire shapes of the catalog endpoints and their mapping into domain types.

use serde::Deserialize;

use es_core::product::UNKNOWN_PRODUCT_NAME;
use es_core::{CategoryCandidate, EcoGrade, ProductRecord};

/// Envelope of `GET /api/v0/product/{code}.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductEnvelope {
    pub status: i64,
    #[serde(default)]
    pub product: Option<ProductDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductDto {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub ecoscore_grade: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub carbon_footprint_100g: Option<i64>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub categories_tags: Option<Vec<String>>,
}

impl ProductDto {
    /// Apply the defaulting rules: absent name becomes the placeholder,
    /// absent grade becomes `Unknown`, the remaining optionals stay absent.
    pub(crate) fn into_record(self, code: String) -> ProductRecord {
        ProductRecord {
            code,
            name: self
                .product_name
                .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
            image_url: self.image_url,
            grade: EcoGrade::parse(self.ecoscore_grade.as_deref()),
            carbon_footprint_100g: self.carbon_footprint_100g,
            packaging: self.packaging,
            categories: self.categories_tags.unwrap_or_default(),
        }
    }
}

/// Envelope of `GET /category/{slug}.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEnvelope {
    #[serde(default)]
    pub products: Vec<CategoryProductDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryProductDto {
    #[serde(default)]
    pub product_name: Option<String>,
    pub code: String,
    #[serde(default)]
    pub ecoscore_grade: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CategoryProductDto {
    /// Keeps the raw optional name; the suggestion filter needs to tell an
    /// unnamed product apart from a placeholder-named one.
    pub(crate) fn into_candidate(self) -> CategoryCandidate {
        CategoryCandidate {
            code: self.code,
            name: self.product_name,
            grade: EcoGrade::parse(self.ecoscore_grade.as_deref()),
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_product_payload_maps_every_field() {
        let envelope: ProductEnvelope = serde_json::from_str(
            r#"{
                "status": 1,
                "product": {
                    "product_name": "Soda",
                    "ecoscore_grade": "d",
                    "image_url": "https://img.example/soda.jpg",
                    "carbon_footprint_100g": 120,
                    "packaging": "Plastic bottle",
                    "categories_tags": ["en:drinks", "en:sodas"]
                }
            }"#,
        )
        .expect("envelope decodes");
        let record = envelope
            .product
            .expect("product present")
            .into_record("0001".to_string());
        assert_eq!(record.code, "0001");
        assert_eq!(record.name, "Soda");
        assert_eq!(record.image_url.as_deref(), Some("https://img.example/soda.jpg"));
        assert_eq!(record.grade, EcoGrade::D);
        assert_eq!(record.carbon_footprint_100g, Some(120));
        assert_eq!(record.packaging.as_deref(), Some("Plastic bottle"));
        assert_eq!(record.categories, vec!["en:drinks", "en:sodas"]);
    }

    #[test]
    fn sparse_product_payload_falls_back_to_defaults() {
        let envelope: ProductEnvelope =
            serde_json::from_str(r#"{"status": 1, "product": {}}"#).expect("envelope decodes");
        let record = envelope
            .product
            .expect("product present")
            .into_record("0001".to_string());
        assert_eq!(record.name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(record.grade, EcoGrade::Unknown);
        assert_eq!(record.image_url, None);
        assert_eq!(record.carbon_footprint_100g, None);
        assert_eq!(record.packaging, None);
        assert!(record.categories.is_empty());
    }

    #[test]
    fn category_entry_keeps_the_raw_name() {
        let envelope: CategoryEnvelope = serde_json::from_str(
            r#"{"products": [{"code": "0002", "ecoscore_grade": "B"}]}"#,
        )
        .expect("envelope decodes");
        let candidate = envelope.products.into_iter().next().expect("one entry");
        let candidate = candidate.into_candidate();
        assert_eq!(candidate.code, "0002");
        assert_eq!(candidate.name, None);
        assert_eq!(candidate.grade, EcoGrade::B);
    }
}
