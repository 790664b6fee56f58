use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::toast::ToastViewport;
use crate::core::color::{self, normalize_color, submission_color, DEFAULT_COLOR};
use crate::core::config::AppConfig;
use crate::core::{platform, timing};
use crate::t;

use super::controller::{Effect, QrEvent, QrFormController, Section, Tab, FORM_ID};
use super::form::{
    ColorField, ErrorCorrection, EyeStyle, ExportType, FormState, FrameType, Shape, StyleEdit,
};
use super::logo::{ACCEPTED_TYPES, LOGO_INPUT_ID};
use super::preview::{HttpTransport, PreviewTransport};
use super::templates::{TemplateId, TEMPLATES};
use super::types::{FieldKind, FieldSpec, QrType, WIFI_PASSWORD_ID};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<QrEvent>>>>;

#[component]
pub fn CreateQrView() -> Element {
    let config = use_hook(|| try_consume_context::<AppConfig>().unwrap_or_else(AppConfig::load));
    let controller = use_signal({
        let config = config.clone();
        move || QrFormController::new(config)
    });
    let transport = use_hook(|| Rc::new(HttpTransport) as Rc<dyn PreviewTransport>);
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        let preview_url = config.preview_url();

        use_coroutine(move |mut rx: UnboundedReceiver<QrEvent>| {
            let sender_slot = sender_slot.clone();
            let transport = transport.clone();
            let preview_url = preview_url.clone();
            let mut controller_signal = controller;

            async move {
                while let Some(event) = rx.next().await {
                    let effects = controller_signal.with_mut(|state| state.handle(event));
                    run_effects(effects, &sender_slot, &transport, &preview_url);
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());
    use_hook(move || coroutine.send(QrEvent::Mounted));

    let state = controller();
    let form = state.form().clone();
    let submitting = state.is_submitting();
    let toasts: Vec<_> = state.toasts().iter().cloned().collect();

    rsx! {
        div { class: "create-qr",
            ToastViewport {
                toasts,
                on_dismiss: move |id| coroutine.send(QrEvent::DismissToast(id)),
            }

            form {
                id: FORM_ID,
                class: "create-qr__form",
                action: "{config.submit_url()}",
                method: "post",
                enctype: "multipart/form-data",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    coroutine.send(QrEvent::Submit);
                },

                div { class: "create-qr__main",
                    {details_section(&form, coroutine)}
                    {type_picker(&form, coroutine)}
                    {type_panels(&state, coroutine)}
                    {design_tabs(&state, coroutine)}

                    input { r#type: "hidden", id: "template", name: "template", value: "{form.template.value()}" }

                    div { class: "create-qr__actions",
                        if state.is_dirty() && !submitting {
                            span { class: "create-qr__unsaved", {t!("create-unsaved")} }
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: submitting,
                            aria_busy: "{submitting}",
                            if submitting {
                                span { class: "spinner", aria_hidden: "true" }
                                {t!("create-submitting")}
                            } else {
                                {t!("create-submit")}
                            }
                        }
                    }
                }

                {preview_panel(&state, coroutine)}
            }

            if state.modal_open() {
                {guidance_modal(coroutine)}
            }
        }
    }
}

fn run_effects(
    effects: Vec<Effect>,
    sender_slot: &SenderSlot,
    transport: &Rc<dyn PreviewTransport>,
    preview_url: &str,
) {
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        return;
    };

    for effect in effects {
        match effect {
            Effect::After { delay_ms, event } => {
                let sender = sender.clone();
                platform::spawn_future(async move {
                    timing::sleep_ms(delay_ms).await;
                    let _ = sender.unbounded_send(*event);
                });
            }
            Effect::Fetch {
                generation,
                request,
            } => {
                let sender = sender.clone();
                let pending = transport.send(preview_url, request);
                platform::spawn_future(async move {
                    let outcome = pending.await;
                    let _ = sender.unbounded_send(QrEvent::PreviewFinished {
                        generation,
                        outcome,
                    });
                });
            }
            Effect::Focus { id, scroll } => {
                // Yield once so a panel shown by this event is rendered first.
                platform::spawn_future(async move {
                    timing::sleep_ms(0).await;
                    platform::focus_element(id, scroll);
                });
            }
            Effect::ClearFileInput { id } => platform::clear_file_input(id),
            Effect::Download { filename, data_url } => {
                let result = platform::download_data_url(&filename, &data_url);
                let _ = sender.unbounded_send(QrEvent::DownloadFinished(result));
            }
            Effect::SubmitForm { form_id, fields } => {
                if let Err(message) = platform::submit_form(form_id, &fields) {
                    let _ = sender.unbounded_send(QrEvent::SubmitRejected(message));
                }
            }
        }
    }
}

fn is_activation_key(evt: &KeyboardEvent) -> bool {
    let key = evt.key().to_string().to_lowercase();
    key == "enter" || key == " " || key == "space" || key == "spacebar"
}

fn details_section(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    rsx! {
        section { class: "create-card",
            h2 { class: "create-card__title", {t!("create-section-details")} }
            div { class: "field",
                label { r#for: "name", "QR Code Name *" }
                input {
                    r#type: "text",
                    id: "name",
                    name: "name",
                    required: true,
                    placeholder: "My QR code",
                    value: "{form.name}",
                    oninput: move |evt| co.send(QrEvent::EditStyle(StyleEdit::Name(evt.value()))),
                }
            }
            label { class: "field field--inline",
                input {
                    r#type: "checkbox",
                    id: "is_dynamic",
                    name: "is_dynamic",
                    value: "true",
                    checked: form.is_dynamic,
                    onchange: move |evt| co.send(QrEvent::EditStyle(StyleEdit::Dynamic(evt.checked()))),
                }
                span { {t!("create-dynamic-label")} }
            }
        }
    }
}

fn type_picker(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    let active = form.qr_type;
    rsx! {
        section { class: "create-card",
            h2 { class: "create-card__title", {t!("create-section-type")} }
            div { class: "qr-type-grid", role: "radiogroup",
                for ty in QrType::ALL {
                    div {
                        key: "{ty.slug()}",
                        class: if ty == active { "qr-type-option active" } else { "qr-type-option" },
                        role: "radio",
                        tabindex: 0,
                        aria_checked: "{ty == active}",
                        "data-type": ty.slug(),
                        onclick: move |_| co.send(QrEvent::SelectType(ty)),
                        onkeydown: move |evt| {
                            if is_activation_key(&evt) {
                                evt.prevent_default();
                                co.send(QrEvent::SelectType(ty));
                            }
                        },
                        input {
                            r#type: "radio",
                            class: "visually-hidden",
                            name: "qr_type",
                            value: ty.slug(),
                            checked: ty == active,
                            tabindex: -1,
                        }
                        span { class: "qr-type-option__icon", "{ty.icon()}" }
                        span { class: "qr-type-option__label", "{ty.label()}" }
                    }
                }
            }
        }
    }
}

fn type_panels(state: &QrFormController, co: Coroutine<QrEvent>) -> Element {
    let panel = state.panel();
    let form = state.form();
    let password_visible = state.password_visible();
    let required = state.required_fields();

    rsx! {
        section { class: "create-card",
            for ty in QrType::ALL {
                div {
                    key: "{ty.panel_id()}",
                    id: "{ty.panel_id()}",
                    class: if ty == panel.shown { "qr-type-content" } else { "qr-type-content hidden" },
                    style: if ty == panel.shown && panel.opaque { "opacity: 1" } else { "opacity: 0" },
                    for spec in ty.fields() {
                        {content_field(spec, form.content(spec.name).to_string(), required.is_required(spec.id), password_visible, co)}
                    }
                }
            }
        }
    }
}

fn content_field(
    spec: &'static FieldSpec,
    value: String,
    required: bool,
    password_visible: bool,
    co: Coroutine<QrEvent>,
) -> Element {
    let name = spec.name;
    let label = if required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };
    let on_edit = move |evt: FormEvent| {
        co.send(QrEvent::EditContent {
            name,
            value: evt.value(),
        })
    };

    let control = match spec.kind {
        FieldKind::TextArea => rsx! {
            textarea { id: spec.id, name, rows: 3, required, value: "{value}", oninput: on_edit }
        },
        FieldKind::Select(options) => rsx! {
            select { id: spec.id, name, onchange: on_edit,
                for choice in options.iter().copied() {
                    option { value: choice, selected: choice == value, "{choice}" }
                }
            }
        },
        FieldKind::Password => rsx! {
            div { class: "input-group",
                input {
                    r#type: if password_visible { "text" } else { "password" },
                    id: WIFI_PASSWORD_ID,
                    name,
                    value: "{value}",
                    oninput: on_edit,
                }
                button {
                    r#type: "button",
                    id: "toggleWifiPassword",
                    class: "input-group__addon",
                    aria_label: "Toggle password visibility",
                    onclick: move |_| co.send(QrEvent::TogglePassword),
                    if password_visible { "🙈" } else { "👁" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Url => "url",
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                FieldKind::DateTime => "datetime-local",
                _ => "text",
            };
            rsx! {
                input { r#type: input_type, id: spec.id, name, required, value: "{value}", oninput: on_edit }
            }
        }
    };

    rsx! {
        div { class: "field",
            label { r#for: spec.id, "{label}" }
            {control}
        }
    }
}

fn design_tabs(state: &QrFormController, co: Coroutine<QrEvent>) -> Element {
    let tab = state.tab();
    rsx! {
        section { class: "create-card",
            div { class: "tabs", role: "tablist",
                button {
                    r#type: "button",
                    id: "templates-tab",
                    role: "tab",
                    class: if tab == Tab::Templates { "tabs__tab active" } else { "tabs__tab" },
                    aria_selected: "{tab == Tab::Templates}",
                    onclick: move |_| co.send(QrEvent::SelectTab(Tab::Templates)),
                    {t!("create-tab-templates")}
                }
                button {
                    r#type: "button",
                    id: "custom-tab",
                    role: "tab",
                    class: if tab == Tab::Custom { "tabs__tab active" } else { "tabs__tab" },
                    aria_selected: "{tab == Tab::Custom}",
                    onclick: move |_| co.send(QrEvent::SelectTab(Tab::Custom)),
                    {t!("create-tab-custom")}
                }
            }
            div { class: "tab-pane", hidden: tab != Tab::Templates, {templates_pane(state.form(), co)} }
            div { class: "tab-pane", hidden: tab != Tab::Custom, {custom_pane(state, co)} }
        }
    }
}

fn templates_pane(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    let selected = form.template;
    rsx! {
        div { class: "template-pane__header",
            p { {t!("create-templates-intro")} }
            button {
                r#type: "button",
                id: "templateHelpBtn",
                class: "button button--ghost",
                onclick: move |_| co.send(QrEvent::ToggleModal(true)),
                {t!("create-template-help")}
            }
        }
        div { class: "template-grid",
            for template in TEMPLATES.iter() {
                div {
                    key: "{template.id.value()}",
                    class: if template.id == selected { "template-card selected" } else { "template-card" },
                    role: "button",
                    tabindex: 0,
                    aria_pressed: "{template.id == selected}",
                    "data-template": template.id.value(),
                    onclick: move |_| co.send(QrEvent::SelectTemplate(template.id)),
                    onkeydown: move |evt| {
                        if is_activation_key(&evt) {
                            evt.prevent_default();
                            co.send(QrEvent::SelectTemplate(template.id));
                        }
                    },
                    h3 { "{template.name}" }
                    p { "{template.blurb}" }
                }
            }
        }
    }
}

fn custom_pane(state: &QrFormController, co: Coroutine<QrEvent>) -> Element {
    let form = state.form();
    let gradient_from = swatch(&form.gradient_start_color);
    let gradient_to = swatch(&form.gradient_end_color);
    rsx! {
        fieldset { class: "field",
            legend { {t!("create-shape")} }
            div { class: "choice-row",
                for shape in Shape::ALL {
                    label { key: "{shape.value()}", class: "choice",
                        input {
                            r#type: "radio",
                            id: "shape-{shape.value()}",
                            name: "shape",
                            value: shape.value(),
                            checked: form.shape == shape,
                            onchange: move |_| co.send(QrEvent::EditStyle(StyleEdit::Shape(shape))),
                        }
                        span { "{shape.label()}" }
                    }
                }
            }
        }

        div { class: "color-grid",
            {color_input(ColorField::Foreground, form, co)}
            {color_input(ColorField::Background, form, co)}
        }

        div { class: "field",
            label { r#for: "export_type", {t!("create-export-type")} }
            select {
                id: "export_type",
                name: "export_type",
                onchange: move |evt| {
                    if let Some(export_type) = ExportType::from_value(&evt.value()) {
                        co.send(QrEvent::EditStyle(StyleEdit::ExportType(export_type)));
                    }
                },
                for export_type in ExportType::ALL {
                    option { value: export_type.value(), selected: form.export_type == export_type, "{export_type.label()}" }
                }
            }
        }
        div { id: "gradient-options", class: "color-grid", hidden: !form.is_gradient(),
            {color_input(ColorField::GradientStart, form, co)}
            {color_input(ColorField::GradientEnd, form, co)}
            div {
                class: "gradient-preview",
                style: "background: linear-gradient(90deg, {gradient_from}, {gradient_to})",
            }
        }

        {accordion(state, Section::Eyes, t!("create-section-eyes"), co, eyes_body(form, co))}
        {accordion(state, Section::Frame, t!("create-section-frame"), co, frame_body(form, co))}
        {accordion(state, Section::Logo, t!("create-section-logo"), co, logo_body(form, co))}
        {accordion(state, Section::Advanced, t!("create-section-advanced"), co, advanced_body(form, co))}
    }
}

fn accordion(
    state: &QrFormController,
    section: Section,
    title: String,
    co: Coroutine<QrEvent>,
    body: Element,
) -> Element {
    let open = state.section_open(section);
    rsx! {
        div { class: "accordion",
            button {
                r#type: "button",
                class: "accordion-header",
                aria_expanded: "{open}",
                onclick: move |_| co.send(QrEvent::ToggleSection(section)),
                span { "{title}" }
                span { class: if open { "accordion-chevron accordion-chevron--open" } else { "accordion-chevron" }, "▾" }
            }
            div { class: "accordion-content", hidden: !open, {body} }
        }
    }
}

fn eyes_body(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    rsx! {
        label { class: "field field--inline",
            input {
                r#type: "checkbox",
                id: "custom_eyes",
                name: "custom_eyes",
                value: "true",
                checked: form.custom_eyes,
                onchange: move |evt| co.send(QrEvent::EditStyle(StyleEdit::CustomEyes(evt.checked()))),
            }
            span { {t!("create-custom-eyes")} }
        }
        div { id: "eye-customization-options", hidden: !form.custom_eyes,
            div { class: "color-grid",
                {eye_style_select("inner_eye_style", "Inner Eye Style", form.inner_eye_style, co, StyleEdit::InnerEyeStyle)}
                {eye_style_select("outer_eye_style", "Outer Eye Style", form.outer_eye_style, co, StyleEdit::OuterEyeStyle)}
                {color_input(ColorField::InnerEye, form, co)}
                {color_input(ColorField::OuterEye, form, co)}
            }
        }
    }
}

fn eye_style_select(
    id: &'static str,
    label: &'static str,
    current: EyeStyle,
    co: Coroutine<QrEvent>,
    edit: fn(EyeStyle) -> StyleEdit,
) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: id, "{label}" }
            select {
                id,
                name: id,
                onchange: move |evt| {
                    if let Some(style) = EyeStyle::from_value(&evt.value()) {
                        co.send(QrEvent::EditStyle(edit(style)));
                    }
                },
                for style in EyeStyle::ALL {
                    option { value: style.value(), selected: style == current, "{style.value()}" }
                }
            }
        }
    }
}

fn frame_body(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    rsx! {
        div { class: "choice-row",
            for frame in FrameType::ALL {
                label { key: "{frame.label()}", class: "choice",
                    input {
                        r#type: "radio",
                        id: if frame == FrameType::None { "frame-none".to_string() } else { format!("frame-{}", frame.value()) },
                        name: "frame_type",
                        value: frame.value(),
                        checked: form.frame_type == frame,
                        onchange: move |_| co.send(QrEvent::EditStyle(StyleEdit::FrameType(frame))),
                    }
                    span { "{frame.label()}" }
                }
            }
        }
        div { id: "frame-text-container", class: "field", hidden: !form.frame_type.shows_text(),
            label { r#for: "frame_text", {t!("create-frame-text")} }
            input {
                r#type: "text",
                id: "frame_text",
                name: "frame_text",
                maxlength: 30,
                value: "{form.frame_text}",
                oninput: move |evt| co.send(QrEvent::EditStyle(StyleEdit::FrameText(evt.value()))),
            }
        }
    }
}

fn logo_body(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    let has_logo = form.logo.is_some();
    let logo_name = form.logo.as_ref().map(|logo| logo.name.clone()).unwrap_or_default();
    rsx! {
        div { class: "field",
            label { r#for: LOGO_INPUT_ID, {t!("create-logo-upload")} }
            input {
                r#type: "file",
                id: LOGO_INPUT_ID,
                name: "logo",
                accept: ACCEPTED_TYPES.join(","),
                onchange: move |evt: FormEvent| async move {
                    let Some(engine) = evt.files() else { return };
                    let Some(name) = engine.files().into_iter().next() else { return };
                    let display = name.rsplit(['/', '\\']).next().unwrap_or(&name).to_string();
                    match engine.read_file(&name).await {
                        Some(bytes) => co.send(QrEvent::LogoSelected { name: display, bytes }),
                        None => co.send(QrEvent::LogoReadFailed { name: display }),
                    }
                },
            }
        }
        div { id: "logo-options", hidden: !has_logo,
            p { class: "field__hint", "{logo_name}" }
            {slider("logo_size_percentage", "Logo Size (%)", form.logo_size_percentage, 10, 40, co, StyleEdit::LogoSize)}
            label { class: "field field--inline",
                input {
                    r#type: "checkbox",
                    id: "round_logo",
                    name: "round_logo",
                    value: "true",
                    checked: form.round_logo,
                    onchange: move |evt| co.send(QrEvent::EditStyle(StyleEdit::RoundLogo(evt.checked()))),
                }
                span { {t!("create-round-logo")} }
            }
            button {
                r#type: "button",
                id: "removeLogo",
                class: "button button--ghost",
                onclick: move |_| co.send(QrEvent::RemoveLogo),
                {t!("create-remove-logo")}
            }
        }
    }
}

fn advanced_body(form: &FormState, co: Coroutine<QrEvent>) -> Element {
    rsx! {
        {slider("module_size", "Module Size", form.module_size, 5, 20, co, StyleEdit::ModuleSize)}
        {slider("quiet_zone", "Quiet Zone", form.quiet_zone, 0, 10, co, StyleEdit::QuietZone)}
        div { class: "field",
            label { r#for: "error_correction", {t!("create-error-correction")} }
            select {
                id: "error_correction",
                name: "error_correction",
                onchange: move |evt| {
                    if let Some(level) = ErrorCorrection::from_value(&evt.value()) {
                        co.send(QrEvent::EditStyle(StyleEdit::ErrorCorrection(level)));
                    }
                },
                for level in ErrorCorrection::ALL {
                    option { value: level.value(), selected: form.error_correction == level, "{level.label()}" }
                }
            }
        }
    }
}

fn slider(
    id: &'static str,
    label: &'static str,
    value: u32,
    min: u32,
    max: u32,
    co: Coroutine<QrEvent>,
    edit: fn(u32) -> StyleEdit,
) -> Element {
    rsx! {
        div { class: "field field--slider",
            label { r#for: id,
                "{label} "
                span { id: "{id}-value", class: "field__value", "{value}" }
            }
            input {
                r#type: "range",
                id,
                name: id,
                min: "{min}",
                max: "{max}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<u32>() {
                        co.send(QrEvent::EditStyle(edit(parsed)));
                    }
                },
            }
        }
    }
}

/// Display color for a possibly half-typed value. Submission re-checks it.
fn swatch(raw: &str) -> String {
    match submission_color(raw) {
        Some(_) => normalize_color(raw),
        None => DEFAULT_COLOR.to_string(),
    }
}

fn color_input(field: ColorField, form: &FormState, co: Coroutine<QrEvent>) -> Element {
    let raw = form.color(field).to_string();
    let shown = swatch(&raw);
    let accent = color::lighten_color(&shown, 80.0);
    let id = field.id();

    rsx! {
        div { class: "field field--color",
            label { r#for: id, "{field.label()}" }
            div { class: "color-input", style: "border-color: {accent}",
                input {
                    r#type: "color",
                    class: "color-input__picker",
                    "aria-label": "{field.label()} picker",
                    value: "{shown.to_lowercase()}",
                    oninput: move |evt| co.send(QrEvent::EditStyle(StyleEdit::Color(field, evt.value()))),
                }
                input {
                    r#type: "text",
                    id,
                    name: id,
                    class: "color-input__text",
                    value: "{raw}",
                    oninput: move |evt| co.send(QrEvent::EditStyle(StyleEdit::Color(field, evt.value()))),
                }
                span { id: "{id}-preview", class: "color-input__swatch", style: "background-color: {shown}" }
            }
        }
    }
}

fn preview_panel(state: &QrFormController, co: Coroutine<QrEvent>) -> Element {
    let image = state.preview().image().map(str::to_string);
    let loading = state.preview().is_loading();
    let history: Vec<(String, String)> = state
        .history()
        .entries()
        .map(|entry| (entry.text.clone(), entry.time.clone()))
        .collect();

    rsx! {
        aside { class: "create-qr__preview",
            div { class: "create-card qr-preview",
                h2 { class: "create-card__title", {t!("create-preview-title")} }
                div { class: "qr-preview__frame",
                    if let Some(src) = image {
                        img { id: "qr-preview-image", src: "{src}", alt: "QR code preview" }
                    } else {
                        div { class: "qr-preview__placeholder", {t!("create-preview-placeholder")} }
                    }
                    if loading {
                        div { class: "preview-loading",
                            div { class: "spinner" }
                            p { {t!("create-preview-loading")} }
                        }
                    }
                }
                div { class: "qr-preview__actions",
                    button {
                        r#type: "button",
                        id: "refreshPreviewBtn",
                        class: "button button--ghost",
                        onclick: move |_| co.send(QrEvent::ManualRefresh),
                        {t!("create-refresh")}
                    }
                    button {
                        r#type: "button",
                        id: "downloadPreviewBtn",
                        class: "button button--ghost",
                        onclick: move |_| co.send(QrEvent::DownloadPreview),
                        {t!("create-download")}
                    }
                }
            }
            div { class: "create-card",
                h3 { class: "create-card__title", {t!("create-history-title")} }
                div { id: "changeHistoryList", class: "history",
                    if history.is_empty() {
                        p { class: "history__empty", {t!("create-history-empty")} }
                    }
                    for (idx, (text, time)) in history.into_iter().enumerate() {
                        div { key: "{idx}-{time}", class: "history__item",
                            span { class: "history__text", "{text}" }
                            span { class: "history__time", "{time}" }
                        }
                    }
                }
            }
        }
    }
}

fn guidance_modal(co: Coroutine<QrEvent>) -> Element {
    rsx! {
        div {
            id: "templateGuidanceModal",
            class: "modal-backdrop",
            onclick: move |_| co.send(QrEvent::ToggleModal(false)),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal__header",
                    h3 { {t!("create-modal-title")} }
                    button {
                        r#type: "button",
                        id: "closeModalBtn",
                        class: "modal__close",
                        aria_label: "Close",
                        onclick: move |_| co.send(QrEvent::ToggleModal(false)),
                        "×"
                    }
                }
                ul { class: "modal__body",
                    for template in TEMPLATES.iter().filter(|template| template.id != TemplateId::Custom) {
                        li { key: "{template.id.value()}",
                            strong { "{template.name}: " }
                            "{template.blurb}"
                        }
                    }
                    li { {t!("create-modal-custom")} }
                }
                div { class: "modal__footer",
                    button {
                        r#type: "button",
                        id: "closeModalBtnBottom",
                        class: "button button--primary",
                        onclick: move |_| co.send(QrEvent::ToggleModal(false)),
                        {t!("create-modal-close")}
                    }
                }
            }
        }
    }
}
