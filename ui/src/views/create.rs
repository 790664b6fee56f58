use dioxus::prelude::*;

use crate::create::CreateQrView;

#[component]
pub fn Create() -> Element {
    // Re-render immediately when the locale changes elsewhere.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-create",
            h1 { {crate::t!("page-create-title")} }
            p { {crate::t!("page-create-intro")} }
            CreateQrView {}
        }
    }
}
