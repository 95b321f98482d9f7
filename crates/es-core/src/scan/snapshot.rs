use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;
use crate::scan::state::ScanState;

/// Immutable read-model of the scan session for the presentation layer.
///
/// Derived from a single [`ScanState`], so the fields can never be observed
/// in a torn combination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub code: Option<String>,
    pub product: Option<ProductRecord>,
    pub suggestions: Vec<ProductRecord>,
    pub loading: bool,
    pub suggestions_pending: bool,
    pub error: Option<String>,
    pub scanned_at: Option<DateTime<Utc>>,
}

impl From<&ScanState> for ScanSnapshot {
    fn from(state: &ScanState) -> Self {
        match state {
            ScanState::Idle => Self::default(),
            ScanState::Loading { code, started_at } => Self {
                code: Some(code.clone()),
                loading: true,
                scanned_at: Some(*started_at),
                ..Self::default()
            },
            ScanState::Resolved {
                code,
                started_at,
                product,
                suggestions,
                suggestions_pending,
            } => Self {
                code: Some(code.clone()),
                product: Some(product.clone()),
                suggestions: suggestions.clone(),
                suggestions_pending: *suggestions_pending,
                scanned_at: Some(*started_at),
                ..Self::default()
            },
            ScanState::Errored {
                code,
                started_at,
                message,
            } => Self {
                code: Some(code.clone()),
                error: Some(message.clone()),
                scanned_at: Some(*started_at),
                ..Self::default()
            },
        }
    }
}
