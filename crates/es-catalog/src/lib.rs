//! # es-catalog
//!
//! Open Food Facts adapter implementing the ecoscan catalog port over HTTP.

mod client;
mod config;
mod dto;

pub use client::OpenFoodFactsClient;
pub use config::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
