use crate::Field;

/// Page events the contact form listens to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Blur { field: Field },
    Submit,
}

impl FormEvent {
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }
}
