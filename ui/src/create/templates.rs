//! Predefined style bundles applied to the form in one step.

use tracing::info;

use crate::core::color::normalize_color;

use super::form::{ColorField, EyeStyle, ExportType, FormState, FrameType, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
    Modern,
    Corporate,
    Playful,
    Minimal,
    HighContrast,
    #[default]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Shape(Shape),
    Color(ColorField, &'static str),
    ExportType(ExportType),
    CustomEyes(bool),
    InnerEyeStyle(EyeStyle),
    OuterEyeStyle(EyeStyle),
    FrameType(FrameType),
    ModuleSize(u32),
    QuietZone(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub id: TemplateId,
    pub name: &'static str,
    pub blurb: &'static str,
    pub assignments: &'static [Assignment],
}

use Assignment as A;

pub const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: TemplateId::Modern,
        name: "Modern",
        blurb: "Rounded modules with circular blue eyes.",
        assignments: &[
            A::Shape(Shape::Rounded),
            A::Color(ColorField::Foreground, "#2c5282"),
            A::Color(ColorField::Background, "#FFFFFF"),
            A::ExportType(ExportType::Png),
            A::CustomEyes(true),
            A::InnerEyeStyle(EyeStyle::Circle),
            A::OuterEyeStyle(EyeStyle::Rounded),
            A::Color(ColorField::InnerEye, "#2c5282"),
            A::Color(ColorField::OuterEye, "#2c5282"),
        ],
    },
    TemplateDefinition {
        id: TemplateId::Corporate,
        name: "Corporate",
        blurb: "Square modules in deep navy inside a square frame.",
        assignments: &[
            A::Shape(Shape::Square),
            A::Color(ColorField::Foreground, "#1a365d"),
            A::Color(ColorField::Background, "#FFFFFF"),
            A::ExportType(ExportType::Png),
            A::FrameType(FrameType::Square),
            A::CustomEyes(false),
        ],
    },
    TemplateDefinition {
        id: TemplateId::Playful,
        name: "Playful",
        blurb: "Dotted modules with a blue gradient.",
        assignments: &[
            A::Shape(Shape::Circle),
            A::ExportType(ExportType::Gradient),
            A::Color(ColorField::GradientStart, "#3182ce"),
            A::Color(ColorField::GradientEnd, "#90cdf4"),
            A::Color(ColorField::Background, "#FFFFFF"),
            A::CustomEyes(true),
            A::InnerEyeStyle(EyeStyle::Circle),
            A::OuterEyeStyle(EyeStyle::Circle),
            A::Color(ColorField::InnerEye, "#3182ce"),
            A::Color(ColorField::OuterEye, "#3182ce"),
        ],
    },
    TemplateDefinition {
        id: TemplateId::Minimal,
        name: "Minimal",
        blurb: "Plain square modules in slate gray.",
        assignments: &[
            A::Shape(Shape::Square),
            A::Color(ColorField::Foreground, "#2d3748"),
            A::Color(ColorField::Background, "#FFFFFF"),
            A::ExportType(ExportType::Png),
            A::CustomEyes(false),
        ],
    },
    TemplateDefinition {
        id: TemplateId::HighContrast,
        name: "High Contrast",
        blurb: "Black on white with larger modules for easy scanning.",
        assignments: &[
            A::Shape(Shape::Square),
            A::Color(ColorField::Foreground, "#000000"),
            A::Color(ColorField::Background, "#FFFFFF"),
            A::ExportType(ExportType::Png),
            A::ModuleSize(12),
            A::QuietZone(4),
            A::CustomEyes(false),
        ],
    },
    TemplateDefinition {
        id: TemplateId::Custom,
        name: "Custom",
        blurb: "Start from scratch in the Custom tab.",
        assignments: &[],
    },
];

impl TemplateId {
    pub fn definition(self) -> &'static TemplateDefinition {
        TEMPLATES
            .iter()
            .find(|template| template.id == self)
            .unwrap_or(&TEMPLATES[TEMPLATES.len() - 1])
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn value(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Corporate => "corporate",
            TemplateId::Playful => "playful",
            TemplateId::Minimal => "minimal",
            TemplateId::HighContrast => "high_contrast",
            TemplateId::Custom => "custom",
        }
    }

    pub fn is_custom(self) -> bool {
        self == TemplateId::Custom
    }
}

/// Overwrite the form with the template's assignments.
///
/// A template that leaves gradient mode or switches custom eyes off also
/// clears those fields, so nothing from a previous template leaks through.
pub fn apply_template(form: &mut FormState, id: TemplateId) {
    form.template = id;
    if id.is_custom() {
        return;
    }

    let definition = id.definition();
    for assignment in definition.assignments {
        match *assignment {
            A::Shape(shape) => form.shape = shape,
            A::Color(field, value) => form.set_color(field, normalize_color(value)),
            A::ExportType(export_type) => form.export_type = export_type,
            A::CustomEyes(on) => form.custom_eyes = on,
            A::InnerEyeStyle(style) => form.inner_eye_style = style,
            A::OuterEyeStyle(style) => form.outer_eye_style = style,
            A::FrameType(frame) => form.frame_type = frame,
            A::ModuleSize(size) => form.module_size = size,
            A::QuietZone(zone) => form.quiet_zone = zone,
        }
    }

    if !form.is_gradient() {
        form.clear_gradient();
    }
    if !form.custom_eyes {
        form.clear_eyes();
    }

    info!(template = id.value(), "applied template");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_a_definition() {
        for id in [
            TemplateId::Modern,
            TemplateId::Corporate,
            TemplateId::Playful,
            TemplateId::Minimal,
            TemplateId::HighContrast,
            TemplateId::Custom,
        ] {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn corporate_after_playful_drops_gradient_and_eyes() {
        let mut form = FormState::default();
        apply_template(&mut form, TemplateId::Playful);
        assert!(form.is_gradient());
        assert_eq!(form.gradient_start_color, "#3182CE");
        assert!(form.custom_eyes);

        apply_template(&mut form, TemplateId::Corporate);
        assert!(!form.custom_eyes);
        assert!(!form.is_gradient());
        assert!(form.gradient_start_color.is_empty());
        assert!(form.gradient_end_color.is_empty());
        assert!(form.inner_eye_color.is_empty());
        assert_eq!(form.frame_type, FrameType::Square);
        assert_eq!(form.color, "#1A365D");
    }

    #[test]
    fn custom_overwrites_nothing() {
        let mut form = FormState::default();
        form.color = "#123456".into();
        apply_template(&mut form, TemplateId::Custom);
        assert_eq!(form.color, "#123456");
        assert_eq!(form.template, TemplateId::Custom);
    }

    #[test]
    fn high_contrast_enlarges_modules() {
        let mut form = FormState::default();
        apply_template(&mut form, TemplateId::HighContrast);
        assert_eq!(form.module_size, 12);
        assert_eq!(form.quiet_zone, 4);
    }
}
