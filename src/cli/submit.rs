use folio_contact::{
    ContactForm, Error, Field, FormEvent, FormFields, MemoryView, SimulatedTransport,
    SubmissionOutcome,
};
use std::{sync::Arc, time::Duration};
use strum::VariantArray;

use crate::config::Config;

/// Overrides applied on top of `contact` config
#[derive(Debug, Clone, Default)]
pub struct SubmitOverrides {
    pub latency_ms: Option<u64>,
    pub success_rate: Option<f64>,
}

/// Types `fields` into a headless contact form and presses submit.
///
/// Returns true when the message was delivered.
#[tracing::instrument(skip_all)]
pub async fn submit(
    config: &Config,
    fields: FormFields,
    overrides: SubmitOverrides,
) -> anyhow::Result<bool> {
    let latency = overrides
        .latency_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.contact.submit_latency());
    let success_rate = overrides
        .success_rate
        .unwrap_or(config.contact.success_rate);
    if !(0.0..=1.0).contains(&success_rate) {
        anyhow::bail!("success rate must be between 0 and 1, got {success_rate}");
    }

    let view = Arc::new(MemoryView::default());
    let form = ContactForm::bind(
        view.clone(),
        SimulatedTransport::new(latency, success_rate),
        config.contact.options(),
    );

    for field in Field::VARIANTS {
        form.handle(FormEvent::input(*field, fields.get(*field))).await?;
    }
    form.handle(FormEvent::Blur { field: Field::Email }).await?;

    tracing::info!(
        latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        success_rate,
        "submitting contact form"
    );

    let delivered = match form.handle(FormEvent::Submit).await {
        Ok(Some(SubmissionOutcome::Success)) => true,
        Ok(Some(SubmissionOutcome::Failure(reason))) => {
            tracing::warn!("delivery failed: {reason}");
            false
        }
        Ok(None) => false,
        Err(Error::Validation(result)) => {
            tracing::info!(errors = ?result.errors, "contact form is invalid");
            false
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(banner) = view.banner() {
        println!("[{}] {}", banner.kind, banner.text);
    }

    Ok(delivered)
}
