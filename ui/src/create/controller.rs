//! Event-driven state machine behind the create form.
//!
//! The view turns DOM callbacks into [`QrEvent`]s and executes the returned
//! [`Effect`]s (timers, fetches, DOM calls). Effects that complete report back
//! with another event, so every mutation happens inside [`QrFormController::handle`].

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::components::toast::{ToastLevel, ToastStack, ToastTitle};
use crate::core::config::AppConfig;
use crate::core::platform::FieldOverride;
use crate::core::timing;

use super::form::{FormState, RefreshMode, StyleEdit};
use super::history::ChangeHistory;
use super::logo::{LogoError, LogoFile, LOGO_INPUT_ID};
use super::preview::{PreviewError, PreviewResponse, PreviewTracker, Resolution};
use super::request::PreviewRequest;
use super::templates::{apply_template, TemplateId};
use super::types::QrType;
use super::validation::{validate_submission, FieldRegistry, ValidationError};

pub const FORM_ID: &str = "create-qr-form";
pub const TYPE_FADE_OUT_MS: u64 = 300;
pub const TYPE_FADE_IN_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Templates,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Eyes,
    Frame,
    Logo,
    Advanced,
}

/// The one type panel on screen and whether it has faded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPhase {
    pub shown: QrType,
    pub opaque: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QrEvent {
    Mounted,
    SelectType(QrType),
    PanelFadedOut { target: QrType },
    PanelFadeIn { target: QrType },
    SelectTemplate(TemplateId),
    SelectTab(Tab),
    EditContent { name: &'static str, value: String },
    EditStyle(StyleEdit),
    DebounceElapsed { token: u64 },
    RefreshPreview { reason: Option<String> },
    ManualRefresh,
    PreviewFinished {
        generation: u64,
        outcome: Result<PreviewResponse, PreviewError>,
    },
    LogoSelected { name: String, bytes: Vec<u8> },
    LogoReadFailed { name: String },
    RemoveLogo,
    DownloadPreview,
    DownloadFinished(Result<Option<String>, String>),
    Submit,
    SubmitRejected(String),
    ToggleModal(bool),
    TogglePassword,
    ToggleSection(Section),
    DismissToast(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Feed `event` back after `delay_ms`.
    After { delay_ms: u64, event: Box<QrEvent> },
    Fetch { generation: u64, request: PreviewRequest },
    Focus { id: &'static str, scroll: bool },
    ClearFileInput { id: &'static str },
    Download { filename: String, data_url: String },
    SubmitForm { form_id: &'static str, fields: Vec<FieldOverride> },
}

fn after(delay_ms: u64, event: QrEvent) -> Effect {
    Effect::After {
        delay_ms,
        event: Box::new(event),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrFormController {
    config: AppConfig,
    form: FormState,
    history: ChangeHistory,
    preview: PreviewTracker,
    toasts: ToastStack,
    tab: Tab,
    panel: PanelPhase,
    required: FieldRegistry,
    dirty: bool,
    submitting: bool,
    debounce_token: u64,
    modal_open: bool,
    password_visible: bool,
    open_sections: BTreeSet<Section>,
}

impl Default for QrFormController {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl QrFormController {
    pub fn new(config: AppConfig) -> Self {
        let form = FormState::default();
        Self {
            history: ChangeHistory::with_capacity(config.history_capacity),
            panel: PanelPhase {
                shown: form.qr_type,
                opaque: true,
            },
            required: FieldRegistry::from_form(&form),
            config,
            form,
            preview: PreviewTracker::default(),
            toasts: ToastStack::default(),
            tab: Tab::default(),
            dirty: false,
            submitting: false,
            debounce_token: 0,
            modal_open: false,
            password_visible: false,
            open_sections: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn history(&self) -> &ChangeHistory {
        &self.history
    }

    pub fn preview(&self) -> &PreviewTracker {
        &self.preview
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn panel(&self) -> PanelPhase {
        self.panel
    }

    pub fn required_fields(&self) -> &FieldRegistry {
        &self.required
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn section_open(&self, section: Section) -> bool {
        self.open_sections.contains(&section)
    }

    pub fn handle(&mut self, event: QrEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            QrEvent::Mounted => {
                effects.push(after(
                    self.config.initial_preview_delay_ms,
                    QrEvent::RefreshPreview { reason: None },
                ));
            }
            QrEvent::SelectType(ty) => {
                if ty == self.form.qr_type {
                    return effects;
                }
                self.form.qr_type = ty;
                self.dirty = true;
                self.panel.opaque = false;
                effects.push(after(TYPE_FADE_OUT_MS, QrEvent::PanelFadedOut { target: ty }));
                self.refresh(Some(format!("Changed QR type to {}", ty.label())), &mut effects);
            }
            QrEvent::PanelFadedOut { target } => {
                // A later switch owns the panel now.
                if target != self.form.qr_type {
                    return effects;
                }
                self.panel = PanelPhase {
                    shown: target,
                    opaque: false,
                };
                effects.push(after(TYPE_FADE_IN_MS, QrEvent::PanelFadeIn { target }));
                effects.push(Effect::Focus {
                    id: target.first_field(),
                    scroll: false,
                });
            }
            QrEvent::PanelFadeIn { target } => {
                if self.panel.shown == target && target == self.form.qr_type {
                    self.panel.opaque = true;
                }
            }
            QrEvent::SelectTemplate(id) => {
                apply_template(&mut self.form, id);
                self.dirty = true;
                let name = id.name();
                if id.is_custom() {
                    self.tab = Tab::Custom;
                    self.toast(
                        ToastLevel::Info,
                        ToastTitle::CustomTemplate,
                        "Switched to custom design mode",
                        &mut effects,
                    );
                } else {
                    self.toast(
                        ToastLevel::Success,
                        ToastTitle::TemplateChanged,
                        format!("'{name}' template applied"),
                        &mut effects,
                    );
                }
                self.refresh(Some(format!("Applied '{name}' template")), &mut effects);
            }
            QrEvent::SelectTab(tab) => self.tab = tab,
            QrEvent::EditContent { name, value } => {
                if self.form.set_content(name, value) {
                    self.dirty = true;
                    self.debounce(&mut effects);
                }
            }
            QrEvent::EditStyle(edit) => {
                let mode = edit.refresh_mode();
                edit.apply(&mut self.form);
                self.dirty = true;
                match mode {
                    RefreshMode::Immediate => self.refresh(None, &mut effects),
                    RefreshMode::Debounced => self.debounce(&mut effects),
                }
            }
            QrEvent::DebounceElapsed { token } => {
                if token == self.debounce_token {
                    self.refresh(None, &mut effects);
                }
            }
            QrEvent::RefreshPreview { reason } => self.refresh(reason, &mut effects),
            QrEvent::ManualRefresh => {
                self.refresh(Some("Manually refreshed preview".into()), &mut effects);
                self.toast(
                    ToastLevel::Info,
                    ToastTitle::PreviewUpdated,
                    "QR code preview refreshed",
                    &mut effects,
                );
            }
            QrEvent::PreviewFinished {
                generation,
                outcome,
            } => match self.preview.resolve(generation, outcome) {
                Resolution::Stale => {}
                Resolution::Updated { reasons } => {
                    for reason in reasons {
                        self.history.push(reason);
                    }
                }
                Resolution::Failed(_) => self.toast(
                    ToastLevel::Error,
                    ToastTitle::PreviewError,
                    "Could not generate preview. Try different settings or refresh the page.",
                    &mut effects,
                ),
            },
            QrEvent::LogoSelected { name, bytes } => match LogoFile::accept(name, bytes) {
                Ok(logo) => {
                    let name = logo.name.clone();
                    self.form.logo = Some(logo);
                    self.dirty = true;
                    self.refresh(Some(format!("Added logo: {name}")), &mut effects);
                    self.toast(
                        ToastLevel::Success,
                        ToastTitle::LogoAdded,
                        format!("Logo uploaded successfully: {name}"),
                        &mut effects,
                    );
                }
                Err(err) => self.reject_logo(err, &mut effects),
            },
            QrEvent::LogoReadFailed { name } => {
                self.reject_logo(LogoError::Unreadable { name }, &mut effects)
            }
            QrEvent::RemoveLogo => {
                self.form.logo = None;
                self.dirty = true;
                effects.push(Effect::ClearFileInput { id: LOGO_INPUT_ID });
                self.refresh(Some("Removed logo".into()), &mut effects);
                self.toast(
                    ToastLevel::Info,
                    ToastTitle::LogoRemoved,
                    "Logo has been removed",
                    &mut effects,
                );
            }
            QrEvent::DownloadPreview => match self.preview.image() {
                Some(data_url) => effects.push(Effect::Download {
                    filename: format!("qr-preview-{}.png", timing::unix_millis()),
                    data_url: data_url.to_string(),
                }),
                None => self.toast(
                    ToastLevel::Warning,
                    ToastTitle::CannotDownload,
                    "Please generate a QR code first",
                    &mut effects,
                ),
            },
            QrEvent::DownloadFinished(result) => match result {
                Ok(Some(path)) => self.toast(
                    ToastLevel::Success,
                    ToastTitle::DownloadComplete,
                    format!("QR code preview saved to {path}"),
                    &mut effects,
                ),
                Ok(None) => self.toast(
                    ToastLevel::Success,
                    ToastTitle::DownloadComplete,
                    "QR code preview downloaded",
                    &mut effects,
                ),
                Err(err) => self.toast(
                    ToastLevel::Error,
                    ToastTitle::DownloadFailed,
                    err,
                    &mut effects,
                ),
            },
            QrEvent::Submit => self.submit(&mut effects),
            QrEvent::SubmitRejected(message) => {
                self.submitting = false;
                self.dirty = true;
                warn!("native submission failed: {message}");
                self.toast(
                    ToastLevel::Error,
                    ToastTitle::SubmitFailed,
                    message,
                    &mut effects,
                );
            }
            QrEvent::ToggleModal(open) => self.modal_open = open,
            QrEvent::TogglePassword => self.password_visible = !self.password_visible,
            QrEvent::ToggleSection(section) => {
                if !self.open_sections.remove(&section) {
                    self.open_sections.insert(section);
                }
            }
            QrEvent::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
        }

        effects
    }

    fn refresh(&mut self, reason: Option<String>, effects: &mut Vec<Effect>) {
        let generation = self.preview.issue(reason);
        effects.push(Effect::Fetch {
            generation,
            request: PreviewRequest::from_form(&self.form),
        });
    }

    fn debounce(&mut self, effects: &mut Vec<Effect>) {
        self.debounce_token += 1;
        effects.push(after(
            self.config.debounce_ms,
            QrEvent::DebounceElapsed {
                token: self.debounce_token,
            },
        ));
    }

    fn toast(
        &mut self,
        level: ToastLevel,
        title: ToastTitle,
        message: impl Into<String>,
        effects: &mut Vec<Effect>,
    ) {
        let id = self.toasts.push(level, title, message);
        effects.push(after(self.config.toast_timeout_ms, QrEvent::DismissToast(id)));
    }

    fn reject_logo(&mut self, err: LogoError, effects: &mut Vec<Effect>) {
        warn!("rejected logo: {err}");
        self.form.logo = None;
        effects.push(Effect::ClearFileInput { id: LOGO_INPUT_ID });
        let (title, message) = match &err {
            LogoError::UnsupportedType { .. } => (
                ToastTitle::InvalidFileType,
                "Please upload a JPEG, PNG, or GIF image.".to_string(),
            ),
            LogoError::Empty { .. } | LogoError::Unreadable { .. } => (
                ToastTitle::LogoUnreadable,
                format!("{err}. Please choose another image."),
            ),
        };
        self.toast(ToastLevel::Error, title, message, effects);
    }

    fn submit(&mut self, effects: &mut Vec<Effect>) {
        if self.submitting {
            return;
        }

        self.required.sync(&self.form);
        match validate_submission(&self.form, &mut self.required) {
            Ok(fields) => {
                info!(qr_type = self.form.qr_type.slug(), "submitting create form");
                self.submitting = true;
                self.dirty = false;
                effects.push(Effect::SubmitForm {
                    form_id: FORM_ID,
                    fields,
                });
            }
            Err(err) => {
                info!("create form blocked: {err}");
                match &err {
                    ValidationError::InvalidColors { labels, .. } => {
                        for label in labels {
                            self.toast(
                                ToastLevel::Error,
                                ToastTitle::ValidationError,
                                format!(
                                    "Invalid color format for {label}. Please use a valid hex color (e.g., #000000)."
                                ),
                                effects,
                            );
                        }
                    }
                    ValidationError::MissingRequired { .. } => self.toast(
                        ToastLevel::Error,
                        ToastTitle::ValidationError,
                        err.to_string(),
                        effects,
                    ),
                }
                effects.push(Effect::Focus {
                    id: err.focus_target(),
                    scroll: err.scrolls(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetches(effects: &[Effect]) -> Vec<u64> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Fetch { generation, .. } => Some(*generation),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn selecting_active_type_is_a_no_op() {
        let mut controller = QrFormController::default();
        assert!(controller.handle(QrEvent::SelectType(QrType::Link)).is_empty());
        assert!(!controller.is_dirty());
    }

    #[test]
    fn type_switch_fades_then_focuses() {
        let mut controller = QrFormController::default();
        let effects = controller.handle(QrEvent::SelectType(QrType::Wifi));
        assert_eq!(fetches(&effects).len(), 1);
        assert!(effects.contains(&after(
            TYPE_FADE_OUT_MS,
            QrEvent::PanelFadedOut {
                target: QrType::Wifi
            }
        )));
        assert_eq!(controller.panel().shown, QrType::Link);

        let effects = controller.handle(QrEvent::PanelFadedOut {
            target: QrType::Wifi,
        });
        assert_eq!(
            controller.panel(),
            PanelPhase {
                shown: QrType::Wifi,
                opaque: false
            }
        );
        assert!(effects.contains(&Effect::Focus {
            id: "ssid",
            scroll: false
        }));

        controller.handle(QrEvent::PanelFadeIn {
            target: QrType::Wifi,
        });
        assert!(controller.panel().opaque);
    }

    #[test]
    fn superseded_fade_is_ignored() {
        let mut controller = QrFormController::default();
        controller.handle(QrEvent::SelectType(QrType::Email));
        controller.handle(QrEvent::SelectType(QrType::Sms));
        assert!(controller
            .handle(QrEvent::PanelFadedOut {
                target: QrType::Email
            })
            .is_empty());
        assert_eq!(controller.panel().shown, QrType::Link);
    }

    #[test]
    fn only_latest_debounce_refreshes() {
        let mut controller = QrFormController::default();
        controller.handle(QrEvent::EditContent {
            name: "url",
            value: "https://a".into(),
        });
        controller.handle(QrEvent::EditContent {
            name: "url",
            value: "https://ab".into(),
        });
        assert!(fetches(&controller.handle(QrEvent::DebounceElapsed { token: 1 })).is_empty());
        assert_eq!(
            fetches(&controller.handle(QrEvent::DebounceElapsed { token: 2 })).len(),
            1
        );
    }

    #[test]
    fn custom_template_switches_tab() {
        let mut controller = QrFormController::default();
        controller.handle(QrEvent::SelectTemplate(TemplateId::Custom));
        assert_eq!(controller.tab(), Tab::Custom);
    }

    #[test]
    fn sections_toggle() {
        let mut controller = QrFormController::default();
        controller.handle(QrEvent::ToggleSection(Section::Frame));
        assert!(controller.section_open(Section::Frame));
        controller.handle(QrEvent::ToggleSection(Section::Frame));
        assert!(!controller.section_open(Section::Frame));
    }
}
