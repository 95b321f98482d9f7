//! Capture source port - abstracts the barcode-reading device.

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Capture device failures.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("capture channel closed")]
    ChannelClosed,
}

/// Capture source port - abstracts the barcode-reading device.
///
/// The device delivers at most one decoded code per armed session and must be
/// re-armed before it will deliver another. This keeps a single physical scan
/// burst from starting overlapping sessions.
///
/// # Behavior
/// - `arm()` should be idempotent.
/// - `disarm()` should be idempotent.
#[async_trait]
pub trait CaptureSourcePort: Send + Sync {
    /// Allow the device to deliver the next decoded code.
    async fn arm(&self) -> Result<(), CaptureError>;

    /// Stop delivering codes until armed again.
    async fn disarm(&self) -> Result<(), CaptureError>;

    /// Subscribe to decoded codes.
    ///
    /// Returns a receiver that yields one decoded code string per armed
    /// session.
    async fn subscribe(&self) -> Result<mpsc::Receiver<String>, CaptureError>;
}
