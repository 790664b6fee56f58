use ui::create::form::{ColorField, ExportType, FormState};
use ui::create::request::PreviewRequest;
use ui::create::templates::{apply_template, TemplateId};
use ui::create::types::QrType;
use ui::create::validation::{validate_submission, FieldRegistry, ValidationError};

fn filled_link_form() -> FormState {
    let mut form = FormState::default();
    form.name = "Poster".into();
    form.set_content("url", "https://example.com");
    form
}

#[test]
fn solid_request_never_carries_gradient_fields() {
    let mut form = filled_link_form();
    form.set_export_type(ExportType::Svg);
    form.set_color(ColorField::GradientStart, "#ff0000");

    let request = PreviewRequest::from_form(&form);
    assert_eq!(request.text("export_type"), Some("png"));
    assert_eq!(request.text("using_gradient"), Some("false"));
    assert!(!request.contains("gradient_start"));
    assert!(!request.contains("gradient_end"));
}

#[test]
fn gradient_request_normalizes_endpoints() {
    let mut form = filled_link_form();
    form.set_export_type(ExportType::Gradient);
    form.set_color(ColorField::GradientStart, " f0a ");
    form.set_color(ColorField::GradientEnd, "#123abc");

    let request = PreviewRequest::from_form(&form);
    assert_eq!(request.text("using_gradient"), Some("true"));
    assert_eq!(request.text("gradient_start"), Some("#FF00AA"));
    assert_eq!(request.text("gradient_end"), Some("#123ABC"));
}

#[test]
fn custom_eyes_flag_is_always_sent() {
    let mut form = filled_link_form();
    let request = PreviewRequest::from_form(&form);
    assert_eq!(request.text("custom_eyes"), Some("false"));
    assert!(!request.contains("using_custom_eyes"));

    form.set_custom_eyes(true);
    let request = PreviewRequest::from_form(&form);
    assert_eq!(request.text("custom_eyes"), Some("true"));
    assert_eq!(request.text("using_custom_eyes"), Some("true"));
    assert_eq!(request.text("inner_eye_color"), Some("#000000"));
}

#[test]
fn corporate_after_playful_is_solid_with_plain_eyes() {
    let mut form = filled_link_form();
    apply_template(&mut form, TemplateId::Playful);
    apply_template(&mut form, TemplateId::Corporate);

    assert!(!form.custom_eyes);
    let request = PreviewRequest::from_form(&form);
    assert_eq!(request.text("using_gradient"), Some("false"));
    assert!(!request.contains("gradient_start"));
    assert!(!request.contains("using_custom_eyes"));
}

#[test]
fn valid_form_yields_markers_and_cleaned_colors() {
    let mut form = filled_link_form();
    form.set_color(ColorField::Background, " fff ");

    let mut registry = FieldRegistry::from_form(&form);
    let overrides = validate_submission(&form, &mut registry).unwrap_or_default();

    let value_of = |name: &str| {
        overrides
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.clone())
    };
    assert_eq!(value_of("background_color").as_deref(), Some("#fff"));
    assert_eq!(value_of("using_gradient").as_deref(), Some("false"));
    assert_eq!(value_of("using_custom_eyes"), None);
}

#[test]
fn hidden_required_fields_are_exempt_and_restored() {
    let mut form = FormState::default();
    form.name = "Guest wifi".into();
    form.qr_type = QrType::Wifi;
    form.set_content("ssid", "Cafe");

    let mut registry = FieldRegistry::from_form(&form);
    assert!(validate_submission(&form, &mut registry).is_ok());
    // Link's URL stays required once the check is over.
    assert!(registry.is_required("url"));
}

#[test]
fn every_invalid_color_is_reported() {
    let mut form = filled_link_form();
    form.set_color(ColorField::Foreground, "#12");
    form.set_color(ColorField::OuterEye, "blue");

    let mut registry = FieldRegistry::from_form(&form);
    match validate_submission(&form, &mut registry) {
        Err(ValidationError::InvalidColors { labels, focus }) => {
            assert_eq!(labels, vec!["QR Code Color", "Outer Eye Color"]);
            assert_eq!(focus, "color");
        }
        other => panic!("expected invalid colors, got {other:?}"),
    }
}
