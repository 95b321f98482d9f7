//! Product domain models.

use serde::{Deserialize, Serialize};

use crate::grade::EcoGrade;

/// Display name used when the catalog reports no name for a product.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

/// One resolved catalog entry, from a product lookup or a category query.
///
/// Constructed fresh from each successful remote response and never mutated;
/// the next scan discards the previous record wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
    pub grade: EcoGrade,
    /// Grams of CO2 per 100 g, absent when the catalog does not report it.
    pub carbon_footprint_100g: Option<i64>,
    pub packaging: Option<String>,
    /// Compound category tags (`namespace:slug`), in catalog order.
    pub categories: Vec<String>,
}

/// Compound category identifier in `namespace:slug` form, e.g. `en:yogurts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTag {
    namespace: String,
    slug: String,
}

impl CategoryTag {
    /// Parse a compound tag.
    ///
    /// Empty segments are dropped before matching, and anything other than
    /// exactly two segments yields `None`. A malformed tag is a defined no-op
    /// for the suggestion path, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':').filter(|part| !part.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(slug), None) => Some(Self {
                namespace: namespace.to_string(),
                slug: slug.to_string(),
            }),
            _ => None,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// One entry of a category-index page, before suggestion filtering.
///
/// Keeps the raw optional name so an unnamed product can be told apart from
/// one actually named like the placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCandidate {
    pub code: String,
    pub name: Option<String>,
    pub grade: EcoGrade,
    pub image_url: Option<String>,
}

impl CategoryCandidate {
    /// Suggestion filtering policy: only candidates with a grade ranked C or
    /// worse and a non-empty name are worth showing. Everything else is
    /// dropped silently as noise.
    pub fn qualifies(&self) -> bool {
        self.grade >= EcoGrade::C && self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            code: self.code,
            name: self.name.unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
            image_url: self.image_url,
            grade: self.grade,
            carbon_footprint_100g: None,
            packaging: None,
            categories: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tag_splits_namespace_and_slug() {
        let tag = CategoryTag::parse("en:yogurts").expect("well-formed tag");
        assert_eq!(tag.namespace(), "en");
        assert_eq!(tag.slug(), "yogurts");
    }

    #[test]
    fn category_tag_rejects_malformed_input() {
        assert_eq!(CategoryTag::parse("badtag"), None);
        assert_eq!(CategoryTag::parse(""), None);
        assert_eq!(CategoryTag::parse("en:"), None);
        assert_eq!(CategoryTag::parse(":yogurts"), None);
        assert_eq!(CategoryTag::parse("en:yogurts:plain"), None);
    }

    #[test]
    fn category_tag_ignores_empty_segments() {
        // Mirrors the splitting behavior the catalog tags were written for:
        // a doubled delimiter still yields two usable segments.
        let tag = CategoryTag::parse("en::yogurts").expect("two non-empty segments");
        assert_eq!(tag.namespace(), "en");
        assert_eq!(tag.slug(), "yogurts");
    }

    fn candidate(name: Option<&str>, grade: EcoGrade) -> CategoryCandidate {
        CategoryCandidate {
            code: "123".to_string(),
            name: name.map(str::to_string),
            grade,
            image_url: None,
        }
    }

    #[test]
    fn qualifies_requires_a_low_grade_and_a_name() {
        assert!(candidate(Some("Plain Yogurt"), EcoGrade::D).qualifies());
        assert!(candidate(Some("Plain Yogurt"), EcoGrade::C).qualifies());
        assert!(candidate(Some("Plain Yogurt"), EcoGrade::Unknown).qualifies());
        assert!(!candidate(Some("Plain Yogurt"), EcoGrade::B).qualifies());
        assert!(!candidate(None, EcoGrade::D).qualifies());
        assert!(!candidate(Some(""), EcoGrade::D).qualifies());
    }

    #[test]
    fn into_record_defaults_the_absent_name() {
        let record = candidate(None, EcoGrade::E).into_record();
        assert_eq!(record.name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(record.grade, EcoGrade::E);
        assert_eq!(record.carbon_footprint_100g, None);
        assert_eq!(record.packaging, None);
        assert!(record.categories.is_empty());
    }
}
