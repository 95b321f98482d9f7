use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Message shown for any failed lookup. A missing record and a transport
/// failure are deliberately not distinguished to the user.
pub const LOOKUP_FAILED_MESSAGE: &str = "Product not found or data unavailable.";

/// Scan session state. Exactly one session is live at a time; a newly scanned
/// code resets the session regardless of where the previous one got to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScanState {
    Idle,

    /// Product lookup in flight for `code`.
    Loading {
        code: String,
        started_at: DateTime<Utc>,
    },

    /// Lookup succeeded. `suggestions_pending` is true while an alternatives
    /// fetch for this code is still in flight.
    Resolved {
        code: String,
        started_at: DateTime<Utc>,
        product: ProductRecord,
        suggestions: Vec<ProductRecord>,
        suggestions_pending: bool,
    },

    /// Lookup failed. Terminal for this session; the next scan starts fresh.
    Errored {
        code: String,
        started_at: DateTime<Utc>,
        message: String,
    },
}

impl ScanState {
    /// Code the current session was started for, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            ScanState::Idle => None,
            ScanState::Loading { code, .. }
            | ScanState::Resolved { code, .. }
            | ScanState::Errored { code, .. } => Some(code),
        }
    }
}
