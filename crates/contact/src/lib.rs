//! Contact form controller: field validation, a busy/idle submit button,
//! pluggable delivery and self-dismissing banners over an abstract view.

mod banner;
mod error;
mod event;
mod field;
mod form;
mod memory;
mod transport;
mod validate;
mod view;

pub use banner::*;
pub use error::*;
pub use event::*;
pub use field::*;
pub use form::*;
pub use memory::*;
pub use transport::*;
pub use validate::{
    EMAIL_REQUIRED_MESSAGE, INVALID_EMAIL_MESSAGE, ValidationResult, validate, validate_email,
};
pub use view::*;
