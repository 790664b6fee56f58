use dioxus::prelude::*;

use crate::analytics::{AnalyticsDashboard, AnalyticsFeed, ChartSlot};

#[component]
pub fn Analytics() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Page globals are written once by the server; read them on first render only.
    let feed = use_hook(AnalyticsFeed::from_page);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-analytics",
            h1 { {crate::t!("page-analytics-title")} }
            p { {crate::t!("page-analytics-intro")} }
            AnalyticsDashboard { feed, layout: ChartSlot::ALL.to_vec() }
        }
    }
}
