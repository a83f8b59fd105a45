//! Injectable response-latency simulation.
//!
//! The facade awaits the simulator before touching any session state, so a
//! caller that abandons the future mid-wait leaves the engine exactly as it
//! was. The default is no delay; callers fronting a UI can inject a fixed
//! pause to keep perceived responsiveness realistic.

use std::time::Duration;

use async_trait::async_trait;

/// Simulated processing delay awaited at the start of every turn.
#[async_trait]
pub trait ResponseLatency: Send + Sync {
    async fn simulate(&self);
}

/// No delay at all. The default, and what tests want.
pub struct NoLatency;

#[async_trait]
impl ResponseLatency for NoLatency {
    async fn simulate(&self) {}
}

/// A fixed pause backed by the tokio timer.
pub struct FixedLatency(pub Duration);

#[async_trait]
impl ResponseLatency for FixedLatency {
    async fn simulate(&self) {
        tokio::time::sleep(self.0).await;
    }
}
