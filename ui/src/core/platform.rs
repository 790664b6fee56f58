//! Platform glue: task spawning, DOM access and page-provided globals.
//!
//! The browser build talks to the live document through `web-sys`. Native
//! builds keep the same signatures so views and controllers compile and test
//! unchanged; DOM-only operations degrade to no-ops there.

use std::future::Future;

/// A form field value written straight into the DOM just before a native submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Spawn a detached UI task.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}

/// Read a JSON-compatible global the server rendered into the page.
///
/// `None` means the global is absent (or null); `Some(Err(_))` means it exists
/// but could not be serialized.
#[cfg(target_arch = "wasm32")]
pub fn read_page_global(name: &str) -> Option<Result<serde_json::Value, String>> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let text = match js_sys::JSON::stringify(&value) {
        Ok(text) => String::from(text),
        Err(_) => return Some(Err(format!("`{name}` is not serializable"))),
    };
    Some(serde_json::from_str(&text).map_err(|err| err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_page_global(_name: &str) -> Option<Result<serde_json::Value, String>> {
    None
}

/// Focus an element by id, optionally scrolling it to the viewport center.
pub fn focus_element(id: &str, scroll: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            tracing::debug!(id, "focus target not found");
            return;
        };

        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            html.focus().ok();
        }
        if scroll {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, scroll);
    }
}

/// Reset a file input so the same file can be chosen again.
pub fn clear_file_input(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Write `fields` into the form (creating hidden inputs where missing) and
/// hand the form to the browser's native submission.
pub fn submit_form(form_id: &str, fields: &[FieldOverride]) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{HtmlFormElement, HtmlInputElement};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let form: HtmlFormElement = document
            .get_element_by_id(form_id)
            .ok_or("Form not found")?
            .dyn_into()
            .map_err(|_| "Form cast failed")?;

        for field in fields {
            let input = match document
                .get_element_by_id(&field.id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                Some(existing) => existing,
                None => {
                    let created: HtmlInputElement = document
                        .create_element("input")
                        .map_err(|_| "Unable to create input")?
                        .dyn_into()
                        .map_err(|_| "Input cast failed")?;
                    created.set_type("hidden");
                    created.set_id(&field.id);
                    created.set_name(&field.name);
                    form.append_child(&created)
                        .map_err(|_| "Unable to attach hidden field")?;
                    created
                }
            };
            input.set_value(&field.value);
        }

        form.submit().map_err(|_| "Form submission blocked".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(
            form_id,
            fields = fields.len(),
            "native form submission is only available in the browser"
        );
        Ok(())
    }
}

/// Save a `data:` URL to disk (native) or trigger a browser download.
///
/// Returns the written path on native targets.
pub fn download_data_url(filename: &str, data_url: &str) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlAnchorElement;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(data_url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use base64::Engine as _;
        use std::fs;

        let (_, encoded) = data_url
            .split_once(";base64,")
            .ok_or("Malformed data URL")?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|err| err.to_string())?;

        let dirs = directories::ProjectDirs::from("com", "QrStudio", "QrStudio")
            .ok_or("Unable to determine download directory")?;
        let dir = dirs.data_dir().join("previews");
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        fs::write(&path, bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}
