use folio_contact::{
    ContactForm, Field, FormFields, FormView, MemoryView, Options, Transport, TransportError,
};
use std::{collections::VecDeque, sync::Arc};
use strum::VariantArray;
use tokio::sync::{Mutex, Notify};

/// Replays a fixed list of outcomes, then keeps succeeding.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<bool>>,
    sent: Mutex<Vec<FormFields>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self::with_outcomes([false])
    }

    pub fn with_outcomes(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            sent: Mutex::default(),
        }
    }

    pub async fn sent(&self) -> Vec<FormFields> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError> {
        self.sent.lock().await.push(fields.clone());

        match self.outcomes.lock().await.pop_front() {
            Some(false) => Err(TransportError::Rejected),
            _ => Ok(()),
        }
    }
}

/// Holds every delivery until `release` is notified.
#[derive(Debug, Default)]
pub struct GatedTransport {
    pub release: Arc<Notify>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl Transport for GatedTransport {
    async fn send(&self, _fields: &FormFields) -> Result<(), TransportError> {
        self.release.notified().await;

        if self.fail {
            Err(TransportError::Unavailable("gate closed".to_owned()))
        } else {
            Ok(())
        }
    }
}

#[allow(dead_code)]
pub fn bind<T: Transport>(transport: T) -> (Arc<MemoryView>, ContactForm<MemoryView, T>) {
    bind_with(transport, Options::default())
}

pub fn bind_with<T: Transport>(
    transport: T,
    options: Options,
) -> (Arc<MemoryView>, ContactForm<MemoryView, T>) {
    let view = Arc::new(MemoryView::default());
    let form = ContactForm::bind(view.clone(), transport, options);

    (view, form)
}

#[allow(dead_code)]
pub fn fill<V: FormView, T: Transport>(form: &ContactForm<V, T>, fields: &FormFields) {
    for field in Field::VARIANTS {
        form.on_input(*field, fields.get(*field));
    }
}

#[allow(dead_code)]
pub fn jane() -> FormFields {
    FormFields::new("Jane", "Doe", "jane@doe.com", "hello")
}
