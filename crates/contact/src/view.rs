use strum::{Display, VariantArray};

use crate::Field;

pub const BORDER_COLOR_NORMAL: &str = "#4f4f4f";
pub const BORDER_COLOR_INVALID: &str = "#e74c3c";
pub const BOX_SHADOW_INVALID: &str = "0 0 5px rgba(231, 76, 60, 0.3)";

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStyle {
    #[default]
    Normal,
    Invalid,
}

impl FieldStyle {
    pub fn border_color(&self) -> &'static str {
        match self {
            FieldStyle::Normal => BORDER_COLOR_NORMAL,
            FieldStyle::Invalid => BORDER_COLOR_INVALID,
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            FieldStyle::Normal => "none",
            FieldStyle::Invalid => BOX_SHADOW_INVALID,
        }
    }
}

#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "error")]
    Error,
}

impl BannerKind {
    /// CSS classes of the rendered banner element.
    pub fn class_name(&self) -> &'static str {
        match self {
            BannerKind::Success => "form-message success-message",
            BannerKind::Error => "form-message error-message",
        }
    }
}

pub type BannerId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub text: String,
}

/// The rendered contact section as seen by the controller.
///
/// Methods take `&self` so a view can be shared between the controller and
/// the banner dismissal tasks; implementations handle their own locking.
pub trait FormView: Send + Sync + 'static {
    fn value(&self, field: Field) -> String;

    fn set_value(&self, field: Field, value: &str);

    /// Sets the control's `name` attribute and `required` flag.
    fn bind_field(&self, field: Field, name: &str, required: bool);

    fn set_style(&self, field: Field, style: FieldStyle);

    fn button_label(&self) -> String;

    fn set_button_label(&self, label: &str);

    fn set_button_disabled(&self, disabled: bool);

    /// Inserts the banner right before the submit button.
    fn insert_banner(&self, banner: Banner);

    /// Returns false when no banner with this id is present.
    fn remove_banner(&self, id: BannerId) -> bool;

    fn remove_banners(&self);

    fn reset(&self) {
        for field in Field::VARIANTS {
            self.set_value(*field, "");
        }
    }
}
