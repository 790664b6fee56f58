use dioxus::prelude::*;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn css_modifier(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Info => "toast--info",
            ToastLevel::Warning => "toast--warning",
            ToastLevel::Error => "toast--error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✕",
        }
    }
}

/// Toast headings. Localized at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTitle {
    PreviewUpdated,
    PreviewError,
    CannotDownload,
    DownloadComplete,
    DownloadFailed,
    TemplateChanged,
    CustomTemplate,
    ValidationError,
    InvalidFileType,
    LogoAdded,
    LogoRemoved,
    LogoUnreadable,
    SubmitFailed,
}

impl ToastTitle {
    pub fn localized(self) -> String {
        match self {
            ToastTitle::PreviewUpdated => t!("toast-preview-updated"),
            ToastTitle::PreviewError => t!("toast-preview-error"),
            ToastTitle::CannotDownload => t!("toast-cannot-download"),
            ToastTitle::DownloadComplete => t!("toast-download-complete"),
            ToastTitle::DownloadFailed => t!("toast-download-failed"),
            ToastTitle::TemplateChanged => t!("toast-template-changed"),
            ToastTitle::CustomTemplate => t!("toast-custom-template"),
            ToastTitle::ValidationError => t!("toast-validation-error"),
            ToastTitle::InvalidFileType => t!("toast-invalid-file-type"),
            ToastTitle::LogoAdded => t!("toast-logo-added"),
            ToastTitle::LogoRemoved => t!("toast-logo-removed"),
            ToastTitle::LogoUnreadable => t!("toast-logo-unreadable"),
            ToastTitle::SubmitFailed => t!("toast-submit-failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: ToastTitle,
    pub message: String,
}

/// Visible toasts, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, level: ToastLevel, title: ToastTitle, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(
            0,
            Toast {
                id,
                level,
                title,
                message: message.into(),
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn newest(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[component]
pub fn ToastViewport(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-viewport", role: "status", aria_live: "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: "toast {toast.level.css_modifier()}",
                    span { class: "toast__icon", "{toast.level.icon()}" }
                    div { class: "toast__body",
                        strong { class: "toast__title", {toast.title.localized()} }
                        p { class: "toast__message", "{toast.message}" }
                    }
                    button {
                        r#type: "button",
                        class: "toast__close",
                        aria_label: "Close",
                        onclick: move |_| on_dismiss.call(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
