use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Inputs to the scan state machine.
///
/// Completion events carry the code their request was issued for, so the
/// machine can discard responses superseded by a newer scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScanEvent {
    /// The capture source decoded a new code.
    CodeScanned { code: String },

    /// Product lookup came back with a record.
    LookupSucceeded {
        code: String,
        product: ProductRecord,
    },

    /// Product lookup failed (missing record or transport failure).
    LookupFailed { code: String },

    /// Alternatives fetch settled; empty when nothing qualified or the fetch
    /// failed open.
    SuggestionsResolved {
        code: String,
        suggestions: Vec<ProductRecord>,
    },
}
