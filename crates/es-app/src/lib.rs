//! # es-app
//!
//! ecoscan application orchestration layer.
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod usecases;

pub use usecases::scan::{ScanOrchestrator, ScanOrchestratorError, SuggestionEngine};
