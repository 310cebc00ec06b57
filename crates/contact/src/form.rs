use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use strum::VariantArray;

use crate::{
    Error, Field, FormEvent, FormFields, Result, ValidationResult,
    banner::{Banners, DEFAULT_BANNER_TTL},
    transport::Transport,
    validate::{self, INVALID_EMAIL_MESSAGE},
    view::{FieldStyle, FormView},
};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";
pub const DEFAULT_BUSY_LABEL: &str = "Sending...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

#[derive(Clone, Debug)]
pub struct Options {
    pub busy_label: String,
    pub banner_ttl: Duration,
    /// Show every collected error instead of only the first one.
    pub show_all_errors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            busy_label: DEFAULT_BUSY_LABEL.to_owned(),
            banner_ttl: DEFAULT_BANNER_TTL,
            show_all_errors: false,
        }
    }
}

/// Contact form controller bound to one view and one transport.
#[derive(Debug)]
pub struct ContactForm<V: FormView, T: Transport> {
    view: Arc<V>,
    transport: T,
    banners: Banners<V>,
    busy: AtomicBool,
    options: Options,
}

impl<V: FormView, T: Transport> ContactForm<V, T> {
    /// Marks every control as required and gives it its form name.
    pub fn bind(view: Arc<V>, transport: T, options: Options) -> Self {
        for field in Field::VARIANTS {
            view.bind_field(*field, field.name(), true);
        }

        Self {
            banners: Banners::new(view.clone(), options.banner_ttl),
            view,
            transport,
            busy: AtomicBool::new(false),
            options,
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::default();
        for field in Field::VARIANTS {
            fields.set(*field, self.view.value(*field));
        }

        fields
    }

    pub async fn handle(&self, event: FormEvent) -> Result<Option<SubmissionOutcome>> {
        match event {
            FormEvent::Input { field, value } => {
                self.on_input(field, &value);
                Ok(None)
            }
            FormEvent::Blur { field: Field::Email } => {
                self.check_email();
                Ok(None)
            }
            FormEvent::Blur { .. } => Ok(None),
            FormEvent::Submit => self.submit().await.map(Some),
        }
    }

    /// Writes the value and drops the field's error style.
    pub fn on_input(&self, field: Field, value: &str) {
        self.view.set_value(field, value);
        self.view.set_style(field, FieldStyle::Normal);
    }

    /// Email blur check. Only a non-empty malformed address is flagged.
    pub fn check_email(&self) -> bool {
        let value = self.view.value(Field::Email);
        let is_valid = validate::validate_email(&value);

        if !is_valid && !value.is_empty() {
            self.view.set_style(Field::Email, FieldStyle::Invalid);
            self.banners.error(INVALID_EMAIL_MESSAGE);
        } else {
            self.view.set_style(Field::Email, FieldStyle::Normal);
        }

        is_valid
    }

    /// Validates the current values, styles the failing fields and surfaces
    /// the collected errors.
    pub fn validate_form(&self) -> ValidationResult {
        let result = validate::validate(&self.fields());

        for field in Field::VARIANTS {
            if result.is_invalid(*field) {
                self.view.set_style(*field, FieldStyle::Invalid);
            } else if *field == Field::Email {
                self.view.set_style(*field, FieldStyle::Normal);
            }
        }

        if self.options.show_all_errors && !result.errors.is_empty() {
            self.banners.error(result.errors.join("\n"));
        } else if let Some(message) = result.first_error() {
            self.banners.error(message);
        }

        result
    }

    #[tracing::instrument(skip_all)]
    pub async fn submit(&self) -> Result<SubmissionOutcome> {
        if self.is_busy() {
            tracing::debug!("submit ignored while busy");
            return Err(Error::Busy);
        }

        let result = self.validate_form();
        if !result.is_valid() {
            tracing::info!(errors = result.errors.len(), "contact form rejected");
            return Err(Error::Validation(result));
        }

        let Some(_busy) =
            BusyGuard::acquire(&self.busy, self.view.as_ref(), &self.options.busy_label)
        else {
            return Err(Error::Busy);
        };

        let fields = self.fields();
        match self.transport.send(&fields).await {
            Ok(()) => {
                tracing::info!("contact form sent");
                self.banners.success(SUCCESS_MESSAGE);
                self.view.reset();
                for field in Field::VARIANTS {
                    self.view.set_style(*field, FieldStyle::Normal);
                }

                Ok(SubmissionOutcome::Success)
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form delivery failed");
                self.banners.error(FAILURE_MESSAGE);

                Ok(SubmissionOutcome::Failure(err.to_string()))
            }
        }
    }
}

/// Holds the busy state of the submit button; dropping it restores the
/// original label and re-enables the button.
struct BusyGuard<'a, V: FormView> {
    flag: &'a AtomicBool,
    view: &'a V,
    label: String,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn acquire(flag: &'a AtomicBool, view: &'a V, busy_label: &str) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let label = view.button_label();
        view.set_button_label(busy_label);
        view.set_button_disabled(true);

        Some(Self { flag, view, label })
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_button_label(&self.label);
        self.view.set_button_disabled(false);
        self.flag.store(false, Ordering::Release);
    }
}
