//! Drives the create form controller through whole user flows with an
//! in-memory preview transport standing in for the HTTP endpoint.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture};

use ui::components::toast::{ToastLevel, ToastTitle};
use ui::create::form::{ColorField, ExportType, StyleEdit};
use ui::create::preview::{PreviewError, PreviewResponse, PreviewTransport};
use ui::create::request::{Part, PreviewRequest};
use ui::create::templates::TemplateId;
use ui::create::types::QrType;
use ui::create::{Effect, QrEvent, QrFormController};

#[derive(Clone, Default)]
struct RecordingTransport {
    requests: Rc<RefCell<Vec<PreviewRequest>>>,
    fail: bool,
}

impl PreviewTransport for RecordingTransport {
    fn send(
        &self,
        _url: &str,
        request: PreviewRequest,
    ) -> LocalBoxFuture<'static, Result<PreviewResponse, PreviewError>> {
        self.requests.borrow_mut().push(request);
        let outcome = if self.fail {
            Err(PreviewError::Status(500))
        } else {
            Ok(PreviewResponse::png(vec![0x89, b'P', b'N', b'G']))
        };
        async move { outcome }.boxed_local()
    }
}

/// Runs events to quiescence. Timers fire immediately, except toast
/// dismissal which is left pending so tests can inspect the stack.
struct Harness {
    controller: QrFormController,
    transport: RecordingTransport,
    side_effects: Vec<Effect>,
}

impl Harness {
    fn new() -> Self {
        Self::with_transport(RecordingTransport::default())
    }

    fn with_transport(transport: RecordingTransport) -> Self {
        Self {
            controller: QrFormController::default(),
            transport,
            side_effects: Vec::new(),
        }
    }

    fn send(&mut self, event: QrEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in self.controller.handle(event) {
                match effect {
                    Effect::After { event, .. } => {
                        if !matches!(*event, QrEvent::DismissToast(_)) {
                            queue.push_back(*event);
                        }
                    }
                    Effect::Fetch {
                        generation,
                        request,
                    } => {
                        let outcome = block_on(self.transport.send("/preview-qr", request));
                        queue.push_back(QrEvent::PreviewFinished {
                            generation,
                            outcome,
                        });
                    }
                    other => self.side_effects.push(other),
                }
            }
        }
    }

    fn last_request(&self) -> PreviewRequest {
        self.transport
            .requests
            .borrow()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn history(&self) -> Vec<String> {
        self.controller
            .history()
            .entries()
            .map(|entry| entry.text.clone())
            .collect()
    }

    fn newest_toast(&self) -> Option<(ToastLevel, ToastTitle, String)> {
        self.controller
            .toasts()
            .newest()
            .map(|toast| (toast.level, toast.title, toast.message.clone()))
    }
}

#[test]
fn mounting_generates_initial_preview_without_history() {
    let mut harness = Harness::new();
    harness.send(QrEvent::Mounted);

    assert_eq!(harness.transport.requests.borrow().len(), 1);
    assert!(harness
        .controller
        .preview()
        .image()
        .is_some_and(|src| src.starts_with("data:image/png;base64,")));
    assert!(harness.history().is_empty());
}

#[test]
fn switching_type_sends_new_type_and_records_history() {
    let mut harness = Harness::new();
    harness.send(QrEvent::SelectType(QrType::Email));

    let request = harness.last_request();
    assert_eq!(request.text("qr_type"), Some("email"));
    assert_eq!(harness.history(), vec!["Changed QR type to Email".to_string()]);
    assert!(harness.controller.panel().opaque);
    assert_eq!(harness.controller.panel().shown, QrType::Email);
    assert!(harness.side_effects.contains(&Effect::Focus {
        id: "email",
        scroll: false
    }));
}

#[test]
fn out_of_order_responses_keep_the_newest_preview() {
    let mut controller = QrFormController::default();

    let first = controller.handle(QrEvent::SelectType(QrType::Text));
    let second = controller.handle(QrEvent::ManualRefresh);
    let generation = |effects: &[Effect]| {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::Fetch { generation, .. } => Some(*generation),
                _ => None,
            })
            .unwrap_or_default()
    };
    let (older, newer) = (generation(&first), generation(&second));
    assert!(newer > older);

    let fresh = PreviewResponse::png(vec![2, 2, 2]);
    controller.handle(QrEvent::PreviewFinished {
        generation: newer,
        outcome: Ok(fresh.clone()),
    });
    controller.handle(QrEvent::PreviewFinished {
        generation: older,
        outcome: Ok(PreviewResponse::png(vec![1])),
    });

    assert_eq!(controller.preview().image(), Some(fresh.data_url().as_str()));
    let history: Vec<_> = controller.history().entries().map(|e| e.text.clone()).collect();
    assert_eq!(
        history,
        vec![
            "Manually refreshed preview".to_string(),
            "Changed QR type to Text".to_string(),
        ]
    );
}

#[test]
fn failed_preview_raises_error_toast() {
    let mut harness = Harness::with_transport(RecordingTransport {
        fail: true,
        ..Default::default()
    });
    harness.send(QrEvent::ManualRefresh);

    assert!(harness.controller.preview().image().is_none());
    assert!(harness.history().is_empty());
    let (level, title, _) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!(level, ToastLevel::Error);
    assert_eq!(title, ToastTitle::PreviewError);
}

#[test]
fn typing_is_debounced_into_one_preview() {
    let mut controller = QrFormController::default();
    let mut timers = Vec::new();
    for value in ["h", "ht", "http"] {
        timers.extend(controller.handle(QrEvent::EditContent {
            name: "url",
            value: value.into(),
        }));
    }

    let fetches: usize = timers
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::After { event, .. } => Some(controller.handle(*event)),
            _ => None,
        })
        .map(|effects| {
            effects
                .iter()
                .filter(|effect| matches!(effect, Effect::Fetch { .. }))
                .count()
        })
        .sum();
    assert_eq!(fetches, 1);
}

#[test]
fn gradient_export_sends_gradient_fields() {
    let mut harness = Harness::new();
    harness.send(QrEvent::EditStyle(StyleEdit::ExportType(ExportType::Gradient)));

    let request = harness.last_request();
    assert_eq!(request.text("export_type"), Some("gradient"));
    assert_eq!(request.text("using_gradient"), Some("true"));
    assert_eq!(request.text("gradient_start"), Some("#2C5282"));
    assert_eq!(request.text("gradient_end"), Some("#90CDF4"));
}

#[test]
fn gradient_after_solid_template_is_seeded_from_main_color() {
    let mut harness = Harness::new();
    harness.send(QrEvent::SelectTemplate(TemplateId::HighContrast));
    assert_eq!(harness.controller.form().gradient_start_color, "");

    harness.send(QrEvent::EditStyle(StyleEdit::ExportType(ExportType::Gradient)));
    let request = harness.last_request();
    assert_eq!(request.text("gradient_start"), Some("#000000"));
    assert_eq!(request.text("gradient_end"), Some("#808080"));
}

#[test]
fn template_then_submit_carries_template_styles() {
    let mut harness = Harness::new();
    harness.send(QrEvent::SelectTemplate(TemplateId::Corporate));
    harness.send(QrEvent::EditStyle(StyleEdit::Name("Office door".into())));
    harness.send(QrEvent::EditContent {
        name: "url",
        value: "https://example.com".into(),
    });

    assert!(harness
        .history()
        .contains(&"Applied 'Corporate' template".to_string()));
    assert_eq!(harness.last_request().text("template"), Some("corporate"));

    harness.send(QrEvent::Submit);
    assert!(harness.controller.is_submitting());
    let submitted = harness.side_effects.iter().any(|effect| {
        matches!(effect, Effect::SubmitForm { fields, .. }
            if fields.iter().any(|f| f.name == "using_gradient"))
    });
    assert!(submitted);
}

#[test]
fn submit_is_blocked_until_required_fields_are_filled() {
    let mut harness = Harness::new();
    harness.send(QrEvent::Submit);

    assert!(!harness.controller.is_submitting());
    assert!(harness.side_effects.contains(&Effect::Focus {
        id: "name",
        scroll: true
    }));
    let (_, title, message) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!(title, ToastTitle::ValidationError);
    assert_eq!(
        message,
        "Please fill in the following required fields: QR Code Name, Website URL"
    );
}

#[test]
fn hidden_panels_do_not_block_submission() {
    let mut harness = Harness::new();
    harness.send(QrEvent::EditStyle(StyleEdit::Name("Menu".into())));
    harness.send(QrEvent::SelectType(QrType::Text));
    harness.send(QrEvent::EditContent {
        name: "text",
        value: "Soup of the day".into(),
    });

    assert!(harness.controller.is_dirty());

    harness.send(QrEvent::Submit);
    assert!(harness.controller.is_submitting());
    assert!(!harness.controller.is_dirty());
    // The hidden Website URL input keeps its `required` attribute.
    assert!(harness.controller.required_fields().is_required("url"));

    // A second submit while the first is in flight is ignored.
    let before = harness.side_effects.len();
    harness.send(QrEvent::Submit);
    assert_eq!(harness.side_effects.len(), before);

    harness.send(QrEvent::SubmitRejected("form element missing".into()));
    assert!(!harness.controller.is_submitting());
    assert!(harness.controller.is_dirty());
}

#[test]
fn invalid_color_blocks_submission_and_focuses_field() {
    let mut harness = Harness::new();
    harness.send(QrEvent::EditStyle(StyleEdit::Name("Flyer".into())));
    harness.send(QrEvent::EditContent {
        name: "url",
        value: "https://example.com".into(),
    });
    harness.send(QrEvent::EditStyle(StyleEdit::Color(
        ColorField::Foreground,
        "#12345".into(),
    )));

    harness.send(QrEvent::Submit);
    assert!(!harness.controller.is_submitting());
    assert!(harness.side_effects.contains(&Effect::Focus {
        id: "color",
        scroll: false
    }));
    let (_, _, message) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert!(message.contains("QR Code Color"));
}

#[test]
fn logo_upload_and_removal() {
    let mut harness = Harness::new();
    harness.send(QrEvent::LogoSelected {
        name: "brand.png".into(),
        bytes: vec![1, 2, 3],
    });

    let request = harness.last_request();
    assert!(matches!(
        request.get("logo"),
        Some(Part::File { filename, mime, .. }) if filename == "brand.png" && *mime == "image/png"
    ));
    assert_eq!(request.text("logo_size_percentage"), Some("25"));
    assert!(harness.history().contains(&"Added logo: brand.png".to_string()));

    harness.send(QrEvent::RemoveLogo);
    assert!(!harness.last_request().contains("logo"));
    assert!(harness
        .side_effects
        .contains(&Effect::ClearFileInput { id: "logo" }));
}

#[test]
fn unsupported_logo_is_rejected() {
    let mut harness = Harness::new();
    harness.send(QrEvent::LogoSelected {
        name: "notes.txt".into(),
        bytes: b"hello".to_vec(),
    });

    assert!(harness.controller.form().logo.is_none());
    assert!(harness.transport.requests.borrow().is_empty());
    let (_, title, _) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!(title, ToastTitle::InvalidFileType);
}

#[test]
fn empty_logo_is_rejected_without_a_preview() {
    let mut harness = Harness::new();
    harness.send(QrEvent::LogoSelected {
        name: "brand.png".into(),
        bytes: Vec::new(),
    });

    assert!(harness.controller.form().logo.is_none());
    assert!(harness.transport.requests.borrow().is_empty());
    assert!(harness
        .side_effects
        .contains(&Effect::ClearFileInput { id: "logo" }));
    let (level, title, _) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!((level, title), (ToastLevel::Error, ToastTitle::LogoUnreadable));
}

#[test]
fn unreadable_logo_clears_the_previous_one() {
    let mut harness = Harness::new();
    harness.send(QrEvent::LogoSelected {
        name: "brand.png".into(),
        bytes: vec![1, 2, 3],
    });
    assert!(harness.controller.form().logo.is_some());

    harness.send(QrEvent::LogoReadFailed {
        name: "other.png".into(),
    });
    assert!(harness.controller.form().logo.is_none());
    let (_, title, message) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!(title, ToastTitle::LogoUnreadable);
    assert!(message.contains("other.png"));
}

#[test]
fn download_requires_a_preview() {
    let mut harness = Harness::new();
    harness.send(QrEvent::DownloadPreview);
    let (level, title, _) = harness.newest_toast().unwrap_or((
        ToastLevel::Info,
        ToastTitle::PreviewUpdated,
        String::new(),
    ));
    assert_eq!((level, title), (ToastLevel::Warning, ToastTitle::CannotDownload));

    harness.send(QrEvent::Mounted);
    harness.send(QrEvent::DownloadPreview);
    assert!(harness.side_effects.iter().any(|effect| matches!(
        effect,
        Effect::Download { filename, data_url }
            if filename.starts_with("qr-preview-") && filename.ends_with(".png")
                && data_url.starts_with("data:image/png")
    )));
}

#[test]
fn toasts_schedule_their_own_dismissal() {
    let mut controller = QrFormController::default();
    let effects = controller.handle(QrEvent::DownloadPreview);
    let dismiss = effects.iter().find_map(|effect| match effect {
        Effect::After { delay_ms, event } => match **event {
            QrEvent::DismissToast(id) => Some((*delay_ms, id)),
            _ => None,
        },
        _ => None,
    });

    let (delay_ms, id) = dismiss.unwrap_or((0, 0));
    assert_eq!(delay_ms, 5_000);
    controller.handle(QrEvent::DismissToast(id));
    assert!(controller.toasts().is_empty());
}
