use folio_contact::{DEFAULT_BUSY_LABEL, DEFAULT_BUTTON_LABEL, Error, FormView, SubmissionOutcome};
use std::sync::Arc;

mod helpers;

use helpers::GatedTransport;

#[tokio::test(start_paused = true)]
async fn test_button_is_busy_while_in_flight() -> anyhow::Result<()> {
    let transport = GatedTransport::default();
    let release = transport.release.clone();
    let (view, form) = helpers::bind(transport);
    let form = Arc::new(form);
    helpers::fill(form.as_ref(), &helpers::jane());

    let pending = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    while !form.is_busy() {
        tokio::task::yield_now().await;
    }

    assert_eq!(view.button_label(), DEFAULT_BUSY_LABEL);
    assert!(view.is_button_disabled());
    assert!(matches!(form.submit().await, Err(Error::Busy)));

    release.notify_one();
    let outcome = pending.await??;

    assert_eq!(outcome, SubmissionOutcome::Success);
    assert_eq!(view.button_label(), DEFAULT_BUTTON_LABEL);
    assert!(!view.is_button_disabled());
    assert!(!form.is_busy());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_busy_state_released_on_failure() -> anyhow::Result<()> {
    let transport = GatedTransport {
        fail: true,
        ..Default::default()
    };
    let release = transport.release.clone();
    let (view, form) = helpers::bind(transport);
    let form = Arc::new(form);
    helpers::fill(form.as_ref(), &helpers::jane());

    let pending = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    while !form.is_busy() {
        tokio::task::yield_now().await;
    }
    release.notify_one();

    assert_eq!(
        pending.await??,
        SubmissionOutcome::Failure("gate closed".to_owned())
    );
    assert_eq!(view.button_label(), DEFAULT_BUTTON_LABEL);
    assert!(!view.is_button_disabled());
    assert_eq!(form.fields(), helpers::jane());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_busy_state_released_when_submission_dropped() -> anyhow::Result<()> {
    let (view, form) = helpers::bind(GatedTransport::default());
    helpers::fill(&form, &helpers::jane());

    let dropped = tokio::time::timeout(std::time::Duration::from_secs(1), form.submit()).await;

    assert!(dropped.is_err());
    assert!(!form.is_busy());
    assert_eq!(view.button_label(), DEFAULT_BUTTON_LABEL);
    assert!(!view.is_button_disabled());

    Ok(())
}
