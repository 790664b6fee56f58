//! QR content types and the input fields each one owns.

use serde::{Deserialize, Serialize};

use crate::core::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrType {
    #[default]
    Link,
    Email,
    Text,
    Call,
    Sms,
    Whatsapp,
    Vcard,
    Event,
    Wifi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Email,
    Tel,
    TextArea,
    DateTime,
    Password,
    Select(&'static [&'static str]),
}

/// One input inside a type panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        id: name,
        name,
        label,
        kind,
        required,
    }
}

pub const WIFI_PASSWORD_ID: &str = "wifi-password";
pub const WIFI_ENCRYPTIONS: &[&str] = &["WPA", "WEP", "nopass"];

const LINK_FIELDS: &[FieldSpec] = &[field("url", "Website URL", FieldKind::Url, true)];

const EMAIL_FIELDS: &[FieldSpec] = &[
    field("email", "Email Address", FieldKind::Email, true),
    field("email_subject", "Subject", FieldKind::Text, false),
    field("email_body", "Message", FieldKind::TextArea, false),
];

const TEXT_FIELDS: &[FieldSpec] = &[field("text", "Text Content", FieldKind::TextArea, true)];

const CALL_FIELDS: &[FieldSpec] = &[field("phone", "Phone Number", FieldKind::Tel, true)];

const SMS_FIELDS: &[FieldSpec] = &[
    field("sms_phone", "Phone Number", FieldKind::Tel, true),
    field("sms_message", "Message", FieldKind::TextArea, false),
];

const WHATSAPP_FIELDS: &[FieldSpec] = &[
    field("whatsapp_phone", "WhatsApp Number", FieldKind::Tel, true),
    field("whatsapp_message", "Message", FieldKind::TextArea, false),
];

const VCARD_FIELDS: &[FieldSpec] = &[
    field("vcard_name", "Full Name", FieldKind::Text, true),
    field("vcard_phone", "Phone", FieldKind::Tel, false),
    field("vcard_email", "Email", FieldKind::Email, false),
    field("vcard_company", "Company", FieldKind::Text, false),
    field("vcard_title", "Job Title", FieldKind::Text, false),
    field("vcard_address", "Address", FieldKind::TextArea, false),
    field("vcard_website", "Website", FieldKind::Url, false),
];

const EVENT_FIELDS: &[FieldSpec] = &[
    field("event_title", "Event Title", FieldKind::Text, true),
    field("event_location", "Location", FieldKind::Text, false),
    field("event_start", "Start Date & Time", FieldKind::DateTime, true),
    field("event_end", "End Date & Time", FieldKind::DateTime, false),
    field("event_description", "Description", FieldKind::TextArea, false),
    field("event_organizer", "Organizer", FieldKind::Text, false),
];

const WIFI_FIELDS: &[FieldSpec] = &[
    field("ssid", "Network Name (SSID)", FieldKind::Text, true),
    FieldSpec {
        id: WIFI_PASSWORD_ID,
        name: "password",
        label: "Password",
        kind: FieldKind::Password,
        required: false,
    },
    field("encryption", "Encryption", FieldKind::Select(WIFI_ENCRYPTIONS), false),
];

impl QrType {
    pub const ALL: [QrType; 9] = [
        QrType::Link,
        QrType::Email,
        QrType::Text,
        QrType::Call,
        QrType::Sms,
        QrType::Whatsapp,
        QrType::Vcard,
        QrType::Event,
        QrType::Wifi,
    ];

    /// Wire value of the `qr_type` field.
    pub fn slug(self) -> &'static str {
        match self {
            QrType::Link => "link",
            QrType::Email => "email",
            QrType::Text => "text",
            QrType::Call => "call",
            QrType::Sms => "sms",
            QrType::Whatsapp => "whatsapp",
            QrType::Vcard => "vcard",
            QrType::Event => "event",
            QrType::Wifi => "wifi",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.slug() == slug)
    }

    /// Label used in change-history lines, e.g. `Whatsapp`.
    pub fn label(self) -> String {
        format::capitalize(self.slug())
    }

    pub fn icon(self) -> &'static str {
        match self {
            QrType::Link => "🔗",
            QrType::Email => "✉️",
            QrType::Text => "📝",
            QrType::Call => "📞",
            QrType::Sms => "💬",
            QrType::Whatsapp => "🟢",
            QrType::Vcard => "👤",
            QrType::Event => "📅",
            QrType::Wifi => "📶",
        }
    }

    pub fn panel_id(self) -> String {
        format!("{}-content", self.slug())
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            QrType::Link => LINK_FIELDS,
            QrType::Email => EMAIL_FIELDS,
            QrType::Text => TEXT_FIELDS,
            QrType::Call => CALL_FIELDS,
            QrType::Sms => SMS_FIELDS,
            QrType::Whatsapp => WHATSAPP_FIELDS,
            QrType::Vcard => VCARD_FIELDS,
            QrType::Event => EVENT_FIELDS,
            QrType::Wifi => WIFI_FIELDS,
        }
    }

    /// DOM id of the panel's first input; receives focus after a switch.
    pub fn first_field(self) -> &'static str {
        self.fields()[0].id
    }

    pub fn owner_of(field_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.fields().iter().any(|spec| spec.name == field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn field_names_are_unique_across_panels() {
        let mut seen = HashSet::new();
        for ty in QrType::ALL {
            for spec in ty.fields() {
                assert!(seen.insert(spec.name), "duplicate field {}", spec.name);
            }
        }
    }

    #[test]
    fn every_panel_has_a_required_first_field() {
        for ty in QrType::ALL {
            assert!(ty.fields()[0].required, "{} panel", ty.slug());
        }
    }

    #[test]
    fn labels_capitalize_slug() {
        assert_eq!(QrType::Whatsapp.label(), "Whatsapp");
        assert_eq!(QrType::Link.label(), "Link");
        assert_eq!(QrType::from_slug("vcard"), Some(QrType::Vcard));
        assert_eq!(QrType::from_slug("fax"), None);
        assert_eq!(QrType::owner_of("ssid"), Some(QrType::Wifi));
    }
}
