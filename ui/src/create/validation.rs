//! Pre-submit checks for the create form.

use thiserror::Error;

use crate::core::color::submission_color;
use crate::core::platform::FieldOverride;

use super::form::{ColorField, FormState};
use super::types::QrType;

pub const NAME_FIELD_ID: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid color format for {}. Please use a valid hex color (e.g., #000000).", .labels.join(", "))]
    InvalidColors {
        labels: Vec<&'static str>,
        focus: &'static str,
    },
    #[error("Please fill in the following required fields: {}", .labels.join(", "))]
    MissingRequired {
        labels: Vec<&'static str>,
        focus: &'static str,
    },
}

impl ValidationError {
    /// DOM id of the field that should receive focus.
    pub fn focus_target(&self) -> &'static str {
        match self {
            ValidationError::InvalidColors { focus, .. }
            | ValidationError::MissingRequired { focus, .. } => focus,
        }
    }

    /// Missing fields are also scrolled into view.
    pub fn scrolls(&self) -> bool {
        matches!(self, ValidationError::MissingRequired { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub hidden: bool,
    pub filled: bool,
}

/// The required/hidden/filled state of every checked input. The view renders
/// each input's `required` attribute from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: Vec<RegisteredField>,
}

impl FieldRegistry {
    pub fn from_form(form: &FormState) -> Self {
        let mut fields = vec![RegisteredField {
            id: NAME_FIELD_ID,
            label: "QR Code Name",
            required: true,
            hidden: false,
            filled: !form.name.trim().is_empty(),
        }];

        for ty in QrType::ALL {
            for spec in ty.fields() {
                fields.push(RegisteredField {
                    id: spec.id,
                    label: spec.label,
                    required: spec.required,
                    hidden: ty != form.qr_type,
                    filled: !form.content(spec.name).trim().is_empty(),
                });
            }
        }

        Self { fields }
    }

    /// Pick up the current panel and input values. `required` flags are left alone.
    pub fn sync(&mut self, form: &FormState) {
        let fresh = Self::from_form(form);
        for (field, current) in self.fields.iter_mut().zip(fresh.fields) {
            field.hidden = current.hidden;
            field.filled = current.filled;
        }
    }

    /// Whether the input renders with the `required` attribute.
    pub fn is_required(&self, id: &str) -> bool {
        self.fields.iter().any(|field| field.id == id && field.required)
    }

    /// Lift `required` from hidden fields until the guard is dropped.
    pub fn exempt_hidden(&mut self) -> RequiredExemption<'_> {
        let mut lifted = Vec::new();
        for (idx, field) in self.fields.iter_mut().enumerate() {
            if field.hidden && field.required {
                field.required = false;
                lifted.push(idx);
            }
        }
        RequiredExemption {
            registry: self,
            lifted,
        }
    }

    fn missing(&self) -> Vec<&RegisteredField> {
        self.fields
            .iter()
            .filter(|field| field.required && !field.filled)
            .collect()
    }
}

/// Restores the `required` flags it lifted when dropped.
pub struct RequiredExemption<'a> {
    registry: &'a mut FieldRegistry,
    lifted: Vec<usize>,
}

impl RequiredExemption<'_> {
    pub fn lifted(&self) -> usize {
        self.lifted.len()
    }

    pub fn missing(&self) -> Vec<&RegisteredField> {
        self.registry.missing()
    }
}

impl Drop for RequiredExemption<'_> {
    fn drop(&mut self) {
        for &idx in &self.lifted {
            if let Some(field) = self.registry.fields.get_mut(idx) {
                field.required = true;
            }
        }
    }
}

/// Check colors, then visible required fields.
///
/// On success returns the values to write into the form before the native
/// submit: cleaned colors plus the `using_gradient`/`using_custom_eyes` markers.
pub fn validate_submission(
    form: &FormState,
    registry: &mut FieldRegistry,
) -> Result<Vec<FieldOverride>, ValidationError> {
    let mut overrides = Vec::new();
    let mut bad_colors = Vec::new();

    for field in ColorField::ALL {
        let raw = form.color(field);
        if raw.trim().is_empty() {
            continue;
        }
        match submission_color(raw) {
            Some(cleaned) => overrides.push(FieldOverride {
                id: field.id().into(),
                name: field.id().into(),
                value: cleaned,
            }),
            None => bad_colors.push(field),
        }
    }

    if let Some(first) = bad_colors.first() {
        return Err(ValidationError::InvalidColors {
            focus: first.id(),
            labels: bad_colors.iter().map(|field| field.label()).collect(),
        });
    }

    {
        let exemption = registry.exempt_hidden();
        let missing = exemption.missing();
        if let Some(first) = missing.first() {
            return Err(ValidationError::MissingRequired {
                focus: first.id,
                labels: missing.iter().map(|field| field.label).collect(),
            });
        }
    }

    overrides.push(marker("using_gradient", form.is_gradient()));
    if form.custom_eyes {
        overrides.push(marker("using_custom_eyes", true));
    }
    Ok(overrides)
}

fn marker(id: &str, on: bool) -> FieldOverride {
    FieldOverride {
        id: id.into(),
        name: id.into(),
        value: if on { "true" } else { "false" }.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exemption_restores_flags_on_drop() {
        let form = FormState::default();
        let mut registry = FieldRegistry::from_form(&form);
        assert!(registry.is_required("ssid"));
        {
            let exemption = registry.exempt_hidden();
            assert!(exemption.lifted() > 0);
            assert!(exemption
                .missing()
                .iter()
                .all(|field| !field.hidden));
        }
        assert!(registry.is_required("ssid"));
    }

    #[test]
    fn sync_tracks_panels_without_touching_required() {
        let mut form = FormState::default();
        let mut registry = FieldRegistry::from_form(&form);
        form.qr_type = QrType::Wifi;
        form.set_content("ssid", "Cafe");
        registry.sync(&form);

        let ssid = registry.fields.iter().find(|field| field.id == "ssid");
        assert!(ssid.is_some_and(|field| !field.hidden && field.filled && field.required));
        let url = registry.fields.iter().find(|field| field.id == "url");
        assert!(url.is_some_and(|field| field.hidden && field.required));
    }

    #[test]
    fn error_messages_list_labels() {
        let err = ValidationError::MissingRequired {
            labels: vec!["QR Code Name", "Website URL"],
            focus: "name",
        };
        assert_eq!(
            err.to_string(),
            "Please fill in the following required fields: QR Code Name, Website URL"
        );
        assert!(err.scrolls());
    }
}
