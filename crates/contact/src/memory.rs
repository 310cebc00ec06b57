use parking_lot::Mutex;
use std::collections::HashMap;
use strum::VariantArray;

use crate::{
    Field,
    view::{Banner, BannerId, FieldStyle, FormView},
};

pub const DEFAULT_BUTTON_LABEL: &str = "Send Message";

#[derive(Default, Clone, Debug)]
struct Control {
    value: String,
    name: Option<String>,
    required: bool,
    style: FieldStyle,
}

#[derive(Clone, Debug)]
struct Button {
    label: String,
    disabled: bool,
}

#[derive(Debug)]
struct Document {
    controls: HashMap<Field, Control>,
    button: Button,
    banners: Vec<Banner>,
}

/// Headless contact section: four controls, a submit button and the banner
/// slot in front of it.
#[derive(Debug)]
pub struct MemoryView {
    document: Mutex<Document>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new(DEFAULT_BUTTON_LABEL)
    }
}

impl MemoryView {
    pub fn new(button_label: impl Into<String>) -> Self {
        let controls = Field::VARIANTS
            .iter()
            .map(|field| (*field, Control::default()))
            .collect();

        Self {
            document: Mutex::new(Document {
                controls,
                button: Button {
                    label: button_label.into(),
                    disabled: false,
                },
                banners: vec![],
            }),
        }
    }

    pub fn field_style(&self, field: Field) -> FieldStyle {
        self.with_control(field, |c| c.style)
    }

    pub fn field_name(&self, field: Field) -> Option<String> {
        self.with_control(field, |c| c.name.clone())
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.with_control(field, |c| c.required)
    }

    pub fn is_button_disabled(&self) -> bool {
        self.document.lock().button.disabled
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.document.lock().banners.clone()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.document.lock().banners.last().cloned()
    }

    fn with_control<R>(&self, field: Field, f: impl FnOnce(&Control) -> R) -> R {
        let document = self.document.lock();
        match document.controls.get(&field) {
            Some(control) => f(control),
            None => f(&Control::default()),
        }
    }

    fn with_control_mut(&self, field: Field, f: impl FnOnce(&mut Control)) {
        let mut document = self.document.lock();
        f(document.controls.entry(field).or_default());
    }
}

impl FormView for MemoryView {
    fn value(&self, field: Field) -> String {
        self.with_control(field, |c| c.value.clone())
    }

    fn set_value(&self, field: Field, value: &str) {
        self.with_control_mut(field, |c| c.value = value.to_owned());
    }

    fn bind_field(&self, field: Field, name: &str, required: bool) {
        self.with_control_mut(field, |c| {
            c.name = Some(name.to_owned());
            c.required = required;
        });
    }

    fn set_style(&self, field: Field, style: FieldStyle) {
        self.with_control_mut(field, |c| c.style = style);
    }

    fn button_label(&self) -> String {
        self.document.lock().button.label.clone()
    }

    fn set_button_label(&self, label: &str) {
        self.document.lock().button.label = label.to_owned();
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.document.lock().button.disabled = disabled;
    }

    fn insert_banner(&self, banner: Banner) {
        self.document.lock().banners.push(banner);
    }

    fn remove_banner(&self, id: BannerId) -> bool {
        let mut document = self.document.lock();
        let before = document.banners.len();
        document.banners.retain(|b| b.id != id);

        document.banners.len() != before
    }

    fn remove_banners(&self) {
        self.document.lock().banners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BannerKind;

    #[test]
    fn starts_empty_and_enabled() {
        let view = MemoryView::default();

        assert_eq!(view.button_label(), DEFAULT_BUTTON_LABEL);
        assert!(!view.is_button_disabled());
        assert!(view.banners().is_empty());
        for field in Field::VARIANTS {
            assert_eq!(view.value(*field), "");
            assert_eq!(view.field_style(*field), FieldStyle::Normal);
            assert!(!view.is_required(*field));
        }
    }

    #[test]
    fn reset_clears_values_only() {
        let view = MemoryView::default();
        view.set_value(Field::Message, "hello");
        view.set_style(Field::Message, FieldStyle::Invalid);

        view.reset();

        assert_eq!(view.value(Field::Message), "");
        assert_eq!(view.field_style(Field::Message), FieldStyle::Invalid);
    }

    #[test]
    fn remove_banner_by_id() {
        let view = MemoryView::default();
        view.insert_banner(Banner {
            id: 7,
            kind: BannerKind::Error,
            text: "oops".to_owned(),
        });

        assert!(!view.remove_banner(8));
        assert_eq!(view.banners().len(), 1);
        assert!(view.remove_banner(7));
        assert!(view.banners().is_empty());
    }
}
