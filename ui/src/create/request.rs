//! Multipart body for the preview endpoint.

use crate::core::color::normalize_color;

use super::form::{ColorField, FormState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    File {
        filename: String,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(value) => Some(value),
            Part::File { .. } => None,
        }
    }
}

/// Ordered multipart fields. `set` replaces an existing entry in place,
/// the way `FormData.set` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewRequest {
    parts: Vec<(String, Part)>,
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl PreviewRequest {
    pub fn from_form(form: &FormState) -> Self {
        let mut request = Self::default();

        request.set_text("qr_type", form.qr_type.slug());
        request.set_text("name", &form.name);
        if form.is_dynamic {
            request.set_text("is_dynamic", "true");
        }
        for (name, value) in form.content_entries() {
            request.set_text(name, value);
        }
        request.set_text("template", form.template.value());
        request.set_text("shape", form.shape.value());
        for field in ColorField::BASE {
            let raw = form.color(field);
            if raw.trim().is_empty() {
                request.set_text(field.id(), raw);
            } else {
                request.set_text(field.id(), normalize_color(raw));
            }
        }
        request.set_text("inner_eye_style", form.inner_eye_style.value());
        request.set_text("outer_eye_style", form.outer_eye_style.value());
        request.set_text("export_type", form.export_type.value());
        request.set_text("frame_type", form.frame_type.value());
        request.set_text("frame_text", &form.frame_text);
        request.set_text("module_size", form.module_size.to_string());
        request.set_text("quiet_zone", form.quiet_zone.to_string());
        request.set_text("error_correction", form.error_correction.value());

        if let Some(logo) = &form.logo {
            request.set(
                "logo",
                Part::File {
                    filename: logo.name.clone(),
                    mime: logo.mime,
                    bytes: logo.bytes.clone(),
                },
            );
            request.set_text("logo_size_percentage", form.logo_size_percentage.to_string());
            request.set_text("round_logo", bool_str(form.round_logo));
        }

        request.set_text("custom_eyes", bool_str(form.custom_eyes));
        if form.custom_eyes {
            request.set_text("using_custom_eyes", "true");
        }

        if form.is_gradient() {
            for (field, key) in [
                (ColorField::GradientStart, "gradient_start"),
                (ColorField::GradientEnd, "gradient_end"),
            ] {
                let raw = form.color(field);
                if !raw.trim().is_empty() {
                    request.set_text(key, normalize_color(raw));
                }
            }
            request.set_text("using_gradient", "true");
        } else {
            request.set_text("export_type", "png");
            request.set_text("using_gradient", "false");
        }

        request
    }

    pub fn set(&mut self, name: &str, part: Part) {
        match self.parts.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = part,
            None => self.parts.push((name.to_string(), part)),
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, Part::Text(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Part> {
        self.parts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, part)| part)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Part::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn parts(&self) -> impl Iterator<Item = (&str, &Part)> {
        self.parts.iter().map(|(key, part)| (key.as_str(), part))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
