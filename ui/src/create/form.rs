//! In-memory mirror of the create form.

use std::collections::BTreeMap;

use crate::core::color::{self, normalize_color};

use super::logo::LogoFile;
use super::templates::TemplateId;
use super::types::QrType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Square,
    Rounded,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Rounded, Shape::Circle];

    pub fn value(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Rounded => "rounded",
            Shape::Circle => "circle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shape::Square => "Square",
            Shape::Rounded => "Rounded",
            Shape::Circle => "Dots",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeStyle {
    #[default]
    Square,
    Rounded,
    Circle,
}

impl EyeStyle {
    pub const ALL: [EyeStyle; 3] = [EyeStyle::Square, EyeStyle::Rounded, EyeStyle::Circle];

    pub fn value(self) -> &'static str {
        match self {
            EyeStyle::Square => "square",
            EyeStyle::Rounded => "rounded",
            EyeStyle::Circle => "circle",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameType {
    #[default]
    None,
    Square,
    Rounded,
    Circle,
    ScanMe,
    Branded,
}

impl FrameType {
    pub const ALL: [FrameType; 6] = [
        FrameType::None,
        FrameType::Square,
        FrameType::Rounded,
        FrameType::Circle,
        FrameType::ScanMe,
        FrameType::Branded,
    ];

    /// Wire value; an empty string means no frame.
    pub fn value(self) -> &'static str {
        match self {
            FrameType::None => "",
            FrameType::Square => "square",
            FrameType::Rounded => "rounded",
            FrameType::Circle => "circle",
            FrameType::ScanMe => "scan_me",
            FrameType::Branded => "branded",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrameType::None => "None",
            FrameType::Square => "Square",
            FrameType::Rounded => "Rounded",
            FrameType::Circle => "Circle",
            FrameType::ScanMe => "Scan Me",
            FrameType::Branded => "Branded",
        }
    }

    pub fn shows_text(self) -> bool {
        matches!(self, FrameType::ScanMe | FrameType::Branded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportType {
    #[default]
    Png,
    Svg,
    Gradient,
}

impl ExportType {
    pub const ALL: [ExportType; 3] = [ExportType::Png, ExportType::Svg, ExportType::Gradient];

    pub fn value(self) -> &'static str {
        match self {
            ExportType::Png => "png",
            ExportType::Svg => "svg",
            ExportType::Gradient => "gradient",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportType::Png => "PNG (solid color)",
            ExportType::Svg => "SVG (vector)",
            ExportType::Gradient => "Gradient",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::Low,
        ErrorCorrection::Medium,
        ErrorCorrection::Quartile,
        ErrorCorrection::High,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ErrorCorrection::Low => "L",
            ErrorCorrection::Medium => "M",
            ErrorCorrection::Quartile => "Q",
            ErrorCorrection::High => "H",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorCorrection::Low => "Low (7%)",
            ErrorCorrection::Medium => "Medium (15%)",
            ErrorCorrection::Quartile => "Quartile (25%)",
            ErrorCorrection::High => "High (30%)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

/// The six color inputs. Their ids all end in `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    Foreground,
    Background,
    InnerEye,
    OuterEye,
    GradientStart,
    GradientEnd,
}

impl ColorField {
    pub const ALL: [ColorField; 6] = [
        ColorField::Foreground,
        ColorField::Background,
        ColorField::InnerEye,
        ColorField::OuterEye,
        ColorField::GradientStart,
        ColorField::GradientEnd,
    ];

    /// Colors sent as-is (after normalization) with every preview.
    pub const BASE: [ColorField; 4] = [
        ColorField::Foreground,
        ColorField::Background,
        ColorField::InnerEye,
        ColorField::OuterEye,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ColorField::Foreground => "color",
            ColorField::Background => "background_color",
            ColorField::InnerEye => "inner_eye_color",
            ColorField::OuterEye => "outer_eye_color",
            ColorField::GradientStart => "gradient_start_color",
            ColorField::GradientEnd => "gradient_end_color",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorField::Foreground => "QR Code Color",
            ColorField::Background => "Background Color",
            ColorField::InnerEye => "Inner Eye Color",
            ColorField::OuterEye => "Outer Eye Color",
            ColorField::GradientStart => "Gradient Start Color",
            ColorField::GradientEnd => "Gradient End Color",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub qr_type: QrType,
    pub name: String,
    pub is_dynamic: bool,
    content: BTreeMap<&'static str, String>,
    pub template: TemplateId,
    pub shape: Shape,
    pub color: String,
    pub background_color: String,
    pub custom_eyes: bool,
    pub inner_eye_style: EyeStyle,
    pub outer_eye_style: EyeStyle,
    pub inner_eye_color: String,
    pub outer_eye_color: String,
    pub export_type: ExportType,
    pub gradient_start_color: String,
    pub gradient_end_color: String,
    pub frame_type: FrameType,
    pub frame_text: String,
    pub module_size: u32,
    pub quiet_zone: u32,
    pub error_correction: ErrorCorrection,
    pub logo: Option<LogoFile>,
    pub logo_size_percentage: u32,
    pub round_logo: bool,
}

impl Default for FormState {
    fn default() -> Self {
        let content = QrType::ALL
            .into_iter()
            .flat_map(|ty| ty.fields().iter())
            .map(|spec| (spec.name, String::new()))
            .collect();

        Self {
            qr_type: QrType::default(),
            name: String::new(),
            is_dynamic: false,
            content,
            template: TemplateId::Custom,
            shape: Shape::default(),
            color: "#000000".into(),
            background_color: "#FFFFFF".into(),
            custom_eyes: false,
            inner_eye_style: EyeStyle::default(),
            outer_eye_style: EyeStyle::default(),
            inner_eye_color: "#000000".into(),
            outer_eye_color: "#000000".into(),
            export_type: ExportType::default(),
            gradient_start_color: "#2C5282".into(),
            gradient_end_color: "#90CDF4".into(),
            frame_type: FrameType::default(),
            frame_text: "Scan Me".into(),
            module_size: 10,
            quiet_zone: 4,
            error_correction: ErrorCorrection::default(),
            logo: None,
            logo_size_percentage: 25,
            round_logo: false,
        }
    }
}

impl FormState {
    pub fn content(&self, name: &str) -> &str {
        self.content.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Update a content field. Unknown names are ignored.
    pub fn set_content(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.content.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Content fields across every panel, in panel order.
    pub fn content_entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        QrType::ALL
            .into_iter()
            .flat_map(|ty| ty.fields().iter())
            .map(|spec| (spec.name, self.content(spec.name)))
    }

    pub fn color(&self, field: ColorField) -> &str {
        match field {
            ColorField::Foreground => &self.color,
            ColorField::Background => &self.background_color,
            ColorField::InnerEye => &self.inner_eye_color,
            ColorField::OuterEye => &self.outer_eye_color,
            ColorField::GradientStart => &self.gradient_start_color,
            ColorField::GradientEnd => &self.gradient_end_color,
        }
    }

    pub fn set_color(&mut self, field: ColorField, value: impl Into<String>) {
        let slot = match field {
            ColorField::Foreground => &mut self.color,
            ColorField::Background => &mut self.background_color,
            ColorField::InnerEye => &mut self.inner_eye_color,
            ColorField::OuterEye => &mut self.outer_eye_color,
            ColorField::GradientStart => &mut self.gradient_start_color,
            ColorField::GradientEnd => &mut self.gradient_end_color,
        };
        *slot = value.into();
    }

    pub fn is_gradient(&self) -> bool {
        self.export_type == ExportType::Gradient
    }

    pub fn set_custom_eyes(&mut self, on: bool) {
        self.custom_eyes = on;
        if on {
            let seed = normalize_color(&self.color);
            for field in [ColorField::InnerEye, ColorField::OuterEye] {
                if self.color(field).trim().is_empty() {
                    self.set_color(field, seed.clone());
                }
            }
        }
    }

    pub fn set_export_type(&mut self, export_type: ExportType) {
        self.export_type = export_type;
        if export_type == ExportType::Gradient {
            let seed = normalize_color(&self.color);
            if self.gradient_start_color.trim().is_empty() {
                self.gradient_start_color = seed.clone();
            }
            if self.gradient_end_color.trim().is_empty() {
                self.gradient_end_color = color::lighten_color(&seed, 50.0).to_uppercase();
            }
        }
    }

    /// Drop both gradient endpoints.
    pub fn clear_gradient(&mut self) {
        self.gradient_start_color.clear();
        self.gradient_end_color.clear();
    }

    /// Reset eye styling to its untouched state.
    pub fn clear_eyes(&mut self) {
        self.inner_eye_style = EyeStyle::default();
        self.outer_eye_style = EyeStyle::default();
        self.inner_eye_color.clear();
        self.outer_eye_color.clear();
    }
}

/// Which preview refresh an edit asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    Immediate,
    Debounced,
}

/// A single edit to a styling or metadata control.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEdit {
    Name(String),
    Dynamic(bool),
    Shape(Shape),
    Color(ColorField, String),
    CustomEyes(bool),
    InnerEyeStyle(EyeStyle),
    OuterEyeStyle(EyeStyle),
    ExportType(ExportType),
    FrameType(FrameType),
    FrameText(String),
    ModuleSize(u32),
    QuietZone(u32),
    ErrorCorrection(ErrorCorrection),
    LogoSize(u32),
    RoundLogo(bool),
}

impl StyleEdit {
    pub fn apply(self, form: &mut FormState) {
        match self {
            StyleEdit::Name(name) => form.name = name,
            StyleEdit::Dynamic(on) => form.is_dynamic = on,
            StyleEdit::Shape(shape) => form.shape = shape,
            StyleEdit::Color(field, value) => form.set_color(field, value),
            StyleEdit::CustomEyes(on) => form.set_custom_eyes(on),
            StyleEdit::InnerEyeStyle(style) => form.inner_eye_style = style,
            StyleEdit::OuterEyeStyle(style) => form.outer_eye_style = style,
            StyleEdit::ExportType(export_type) => form.set_export_type(export_type),
            StyleEdit::FrameType(frame) => form.frame_type = frame,
            StyleEdit::FrameText(text) => form.frame_text = text,
            StyleEdit::ModuleSize(size) => form.module_size = size.clamp(5, 20),
            StyleEdit::QuietZone(zone) => form.quiet_zone = zone.min(10),
            StyleEdit::ErrorCorrection(level) => form.error_correction = level,
            StyleEdit::LogoSize(percent) => form.logo_size_percentage = percent.clamp(10, 40),
            StyleEdit::RoundLogo(on) => form.round_logo = on,
        }
    }

    /// Typed and dragged values wait for the user to pause; discrete picks do not.
    pub fn refresh_mode(&self) -> RefreshMode {
        match self {
            StyleEdit::Name(_)
            | StyleEdit::Color(..)
            | StyleEdit::FrameText(_)
            | StyleEdit::ModuleSize(_)
            | StyleEdit::QuietZone(_)
            | StyleEdit::LogoSize(_) => RefreshMode::Debounced,
            _ => RefreshMode::Immediate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_defaults() {
        let form = FormState::default();
        assert_eq!(form.module_size, 10);
        assert_eq!(form.quiet_zone, 4);
        assert_eq!(form.logo_size_percentage, 25);
        assert_eq!(form.error_correction.value(), "H");
        assert_eq!(form.export_type.value(), "png");
        assert_eq!(form.frame_type.value(), "");
    }

    #[test]
    fn unknown_content_fields_are_ignored() {
        let mut form = FormState::default();
        assert!(form.set_content("url", "https://example.com"));
        assert!(!form.set_content("nope", "x"));
        assert_eq!(form.content("url"), "https://example.com");
        assert_eq!(form.content("nope"), "");
    }

    #[test]
    fn enabling_gradient_seeds_empty_endpoints() {
        let mut form = FormState::default();
        form.color = "#336699".into();
        form.clear_gradient();
        StyleEdit::ExportType(ExportType::Gradient).apply(&mut form);
        assert_eq!(form.gradient_start_color, "#336699");
        assert_eq!(form.gradient_end_color, "#99B3CC");
    }

    #[test]
    fn enabling_custom_eyes_keeps_existing_colors() {
        let mut form = FormState::default();
        form.inner_eye_color = "#FF0000".into();
        form.outer_eye_color.clear();
        StyleEdit::CustomEyes(true).apply(&mut form);
        assert_eq!(form.inner_eye_color, "#FF0000");
        assert_eq!(form.outer_eye_color, "#000000");
    }

    #[test]
    fn sliders_are_clamped_and_debounced() {
        let mut form = FormState::default();
        StyleEdit::ModuleSize(99).apply(&mut form);
        assert_eq!(form.module_size, 20);
        assert_eq!(StyleEdit::ModuleSize(1).refresh_mode(), RefreshMode::Debounced);
        assert_eq!(StyleEdit::Shape(Shape::Circle).refresh_mode(), RefreshMode::Immediate);
    }
}
