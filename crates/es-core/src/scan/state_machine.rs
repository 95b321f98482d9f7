use chrono::{DateTime, Utc};
use tracing::warn;

use crate::grade::EcoGrade;
use crate::scan::action::ScanAction;
use crate::scan::event::ScanEvent;
use crate::scan::state::{ScanState, LOOKUP_FAILED_MESSAGE};

pub struct ScanStateMachine;

impl ScanStateMachine {
    pub fn transition(state: ScanState, event: ScanEvent) -> (ScanState, Vec<ScanAction>) {
        Self::transition_at(state, event, Utc::now())
    }

    pub(crate) fn transition_at(
        state: ScanState,
        event: ScanEvent,
        now: DateTime<Utc>,
    ) -> (ScanState, Vec<ScanAction>) {
        match (state, event) {
            // ===== New scan =====
            // A fresh code resets the session wholesale, whatever was there:
            // previous product, suggestions, and error are all discarded.
            (_, ScanEvent::CodeScanned { code }) => (
                ScanState::Loading {
                    code: code.clone(),
                    started_at: now,
                },
                vec![ScanAction::FetchProduct { code }],
            ),

            // ===== Lookup completion =====
            (
                ScanState::Loading { code, started_at },
                ScanEvent::LookupSucceeded {
                    code: resolved,
                    product,
                },
            ) if resolved == code => {
                // Alternatives are only worth fetching for a product graded C
                // or worse that carries at least one category tag.
                let category_tag = if product.grade >= EcoGrade::C {
                    product.categories.first().cloned()
                } else {
                    None
                };
                let suggestions_pending = category_tag.is_some();
                let mut actions = Vec::new();
                if let Some(category_tag) = category_tag {
                    actions.push(ScanAction::FetchSuggestions {
                        code: code.clone(),
                        category_tag,
                    });
                }
                actions.push(ScanAction::RearmCapture);
                (
                    ScanState::Resolved {
                        code,
                        started_at,
                        product,
                        suggestions: Vec::new(),
                        suggestions_pending,
                    },
                    actions,
                )
            }
            (
                ScanState::Loading { code, started_at },
                ScanEvent::LookupFailed { code: failed },
            ) if failed == code => (
                ScanState::Errored {
                    code,
                    started_at,
                    message: LOOKUP_FAILED_MESSAGE.to_string(),
                },
                vec![ScanAction::RearmCapture],
            ),

            // ===== Suggestions =====
            (
                ScanState::Resolved {
                    code,
                    started_at,
                    product,
                    suggestions_pending: true,
                    ..
                },
                ScanEvent::SuggestionsResolved {
                    code: fetched,
                    suggestions,
                },
            ) if fetched == code => (
                ScanState::Resolved {
                    code,
                    started_at,
                    product,
                    suggestions,
                    suggestions_pending: false,
                },
                vec![],
            ),

            // Anything else is a response from a superseded session or an
            // event the current state has no use for. Drop it.
            (state, event) => {
                warn!(?event, "scan event ignored in current state");
                (state, vec![])
            }
        }
    }
}
