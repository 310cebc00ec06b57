use std::time::Duration;

use crate::FormFields;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Submission failed")]
    Rejected,

    #[error("{0}")]
    Unavailable(String),
}

/// Delivery boundary of the contact form.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError>;
}

/// Stand-in for a real endpoint: waits `latency`, then succeeds with
/// probability `success_rate`.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    latency: Duration,
    success_rate: f64,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, DEFAULT_SUCCESS_RATE)
    }
}

impl SimulatedTransport {
    pub fn new(latency: Duration, success_rate: f64) -> Self {
        Self {
            latency,
            success_rate: if success_rate.is_nan() {
                0.0
            } else {
                success_rate.clamp(0.0, 1.0)
            },
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

#[async_trait::async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError> {
        tracing::debug!(
            latency_ms = u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX),
            email = %fields.email,
            "simulating contact form delivery"
        );

        tokio::time::sleep(self.latency).await;

        if rand::random_bool(self.success_rate) {
            Ok(())
        } else {
            Err(TransportError::Rejected)
        }
    }
}
