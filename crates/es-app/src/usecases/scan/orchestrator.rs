//! Scan orchestrator.
//!
//! Coordinates the scan state machine and its side effects.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tokio::sync::{watch, Mutex};
use tracing::{info, info_span, warn, Instrument};

use es_core::ports::{CaptureError, CaptureSourcePort, CatalogPort};
use es_core::scan::{ScanAction, ScanEvent, ScanSnapshot, ScanState, ScanStateMachine};

use super::suggestions::SuggestionEngine;

/// Errors produced by the scan orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum ScanOrchestratorError {
    #[error("capture source failed: {0}")]
    Capture(#[from] CaptureError),
}

/// Orchestrator that drives scan session state and side effects.
///
/// The session has exactly one writer: every mutation funnels through
/// [`dispatch`](Self::dispatch), which runs the state machine under one lock
/// and publishes a consistent snapshot before any follow-up work starts.
/// Lookup and suggestion fetches run as spawned tasks that feed their
/// completion events back through `dispatch`; the state machine drops events
/// tagged with a superseded code, so a stale response never overwrites a
/// newer session. No transport-level cancellation is needed for correctness.
#[derive(Clone)]
pub struct ScanOrchestrator {
    catalog: Arc<dyn CatalogPort>,
    capture: Arc<dyn CaptureSourcePort>,
    engine: SuggestionEngine,
    state: Arc<Mutex<ScanState>>,
    snapshot_tx: watch::Sender<ScanSnapshot>,
}

impl ScanOrchestrator {
    pub fn new(catalog: Arc<dyn CatalogPort>, capture: Arc<dyn CaptureSourcePort>) -> Self {
        let (snapshot_tx, _) = watch::channel(ScanSnapshot::default());
        Self {
            engine: SuggestionEngine::new(Arc::clone(&catalog)),
            catalog,
            capture,
            state: Arc::new(Mutex::new(ScanState::Idle)),
            snapshot_tx,
        }
    }

    /// Current read-model of the session.
    pub async fn snapshot(&self) -> ScanSnapshot {
        ScanSnapshot::from(&*self.state.lock().await)
    }

    /// Subscribe to session snapshots. The receiver always holds the latest
    /// internally consistent view.
    pub fn subscribe(&self) -> watch::Receiver<ScanSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Start a new scan session for an externally supplied code.
    pub async fn scan(&self, code: impl Into<String>) -> ScanState {
        self.dispatch(ScanEvent::CodeScanned { code: code.into() })
            .await
    }

    /// Consume the capture source: arm it and feed every decoded code into a
    /// fresh session until the device closes its channel.
    pub async fn run(&self) -> Result<(), ScanOrchestratorError> {
        let mut codes = self.capture.subscribe().await?;
        self.capture.arm().await?;
        info!("capture source armed, waiting for codes");
        while let Some(code) = codes.recv().await {
            self.dispatch(ScanEvent::CodeScanned { code }).await;
        }
        info!("capture channel closed, scan loop ending");
        Ok(())
    }

    /// Disarm the capture source.
    pub async fn shutdown(&self) -> Result<(), ScanOrchestratorError> {
        self.capture.disarm().await?;
        Ok(())
    }

    /// Single serialization point for session mutation.
    ///
    /// Boxed so the completion tasks spawned by `execute_actions` can re-enter
    /// it.
    fn dispatch(&self, event: ScanEvent) -> BoxFuture<'_, ScanState> {
        let span = info_span!("usecase.scan_orchestrator.dispatch", event = ?event);
        async move {
            let (next, actions) = {
                let mut guard = self.state.lock().await;
                let current = guard.clone();
                let (next, actions) = ScanStateMachine::transition(current, event);
                *guard = next.clone();
                (next, actions)
            };
            // Readers observe the committed state before any side effect runs.
            let _ = self.snapshot_tx.send(ScanSnapshot::from(&next));
            self.execute_actions(actions);
            next
        }
        .instrument(span)
        .boxed()
    }

    fn execute_actions(&self, actions: Vec<ScanAction>) {
        for action in actions {
            match action {
                ScanAction::FetchProduct { code } => {
                    let this = self.clone();
                    tokio::spawn(async move {
                        let event = match this.catalog.product_by_code(&code).await {
                            Ok(product) => {
                                info!(
                                    code = %code,
                                    name = %product.name,
                                    grade = %product.grade,
                                    "product lookup succeeded"
                                );
                                ScanEvent::LookupSucceeded {
                                    code: code.clone(),
                                    product,
                                }
                            }
                            Err(err) => {
                                warn!(code = %code, error = %err, "product lookup failed");
                                ScanEvent::LookupFailed { code: code.clone() }
                            }
                        };
                        this.dispatch(event).await;
                    });
                }
                ScanAction::FetchSuggestions { code, category_tag } => {
                    let this = self.clone();
                    tokio::spawn(async move {
                        let suggestions = this.engine.find_alternatives(&category_tag).await;
                        this.dispatch(ScanEvent::SuggestionsResolved { code, suggestions })
                            .await;
                    });
                }
                ScanAction::RearmCapture => {
                    let this = self.clone();
                    tokio::spawn(async move {
                        if let Err(err) = this.capture.arm().await {
                            warn!(error = %err, "failed to re-arm capture source");
                        }
                    });
                }
            }
        }
    }
}
