//! Scan analytics dashboard: page-provided datasets rendered as SVG charts.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, error};

use crate::core::platform;

pub mod datasets;
pub mod geometry;

mod charts;
pub use charts::{AnalyticsDashboard, ChartCard};

use datasets::{ChartError, ChartModel};

pub mod palette {
    pub const PRIMARY: &str = "#8b5cf6";
    pub const SECONDARY: &str = "#0ea5e9";
    pub const TERTIARY: &str = "#f97316";
    pub const QUATERNARY: &str = "#10b981";
    pub const TEAL: &str = "#0f766e";
    pub const GRAY: &str = "#cbd5e1";

    pub const DEVICE: &[&str] = &[SECONDARY, PRIMARY, TERTIARY, GRAY];
    pub const OS: &[&str] = &[PRIMARY, SECONDARY, QUATERNARY, TERTIARY, TEAL, GRAY];
}

/// Page-level flag that gates every chart.
pub const AVAILABILITY_FLAG: &str = "hasAnalyticsData";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartSlot {
    Timeline,
    Device,
    Os,
    Hourly,
    Location,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 5] = [
        ChartSlot::Timeline,
        ChartSlot::Device,
        ChartSlot::Os,
        ChartSlot::Hourly,
        ChartSlot::Location,
    ];

    /// DOM id of the chart container.
    pub fn element_id(self) -> &'static str {
        match self {
            ChartSlot::Timeline => "timelineChart",
            ChartSlot::Device => "deviceChart",
            ChartSlot::Os => "osChart",
            ChartSlot::Hourly => "hourlyChart",
            ChartSlot::Location => "locationChart",
        }
    }

    /// Name of the page global carrying this slot's dataset.
    pub fn global_name(self) -> &'static str {
        match self {
            ChartSlot::Timeline => "scanDatesData",
            ChartSlot::Device => "deviceData",
            ChartSlot::Os => "osData",
            ChartSlot::Hourly => "hourlyData",
            ChartSlot::Location => "locationData",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            ChartSlot::Device => "device",
            ChartSlot::Os => "os",
            ChartSlot::Location => "location",
            ChartSlot::Timeline | ChartSlot::Hourly => "",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ChartSlot::Timeline => "timeline",
            ChartSlot::Device => "device",
            ChartSlot::Os => "os",
            ChartSlot::Hourly => "hourly",
            ChartSlot::Location => "location",
        }
    }

    /// Build this slot's chart from its raw dataset.
    pub fn build(self, raw: &Value) -> Result<ChartModel, ChartError> {
        match self {
            ChartSlot::Timeline => datasets::timeline_from_value(raw).map(ChartModel::Line),
            ChartSlot::Device => {
                let rows = datasets::breakdown_from_value(raw, self.slug(), self.label_key())?;
                Ok(ChartModel::Doughnut(datasets::slices(rows, palette::DEVICE)))
            }
            ChartSlot::Os => {
                let rows = datasets::breakdown_from_value(raw, self.slug(), self.label_key())?;
                Ok(ChartModel::Doughnut(datasets::slices(rows, palette::OS)))
            }
            ChartSlot::Hourly => datasets::hourly_from_value(raw)
                .map(|counts| ChartModel::Bar(datasets::hourly_series(counts))),
            ChartSlot::Location => {
                let rows = datasets::breakdown_from_value(raw, self.slug(), self.label_key())?;
                Ok(ChartModel::Bar(datasets::location_series(rows)))
            }
        }
    }
}

/// What a slot ends up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    /// Dataset absent: nothing is rendered.
    Skipped,
    Ready(ChartModel),
    /// Inline "could not load" placeholder.
    Failed(ChartError),
}

/// Datasets as loaded once at page start. Read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsFeed {
    available: bool,
    datasets: BTreeMap<ChartSlot, Result<Value, String>>,
}

impl AnalyticsFeed {
    /// Read the availability flag and every dataset global from the page.
    pub fn from_page() -> Self {
        let available = matches!(
            platform::read_page_global(AVAILABILITY_FLAG),
            Some(Ok(flag)) if is_truthy(&flag)
        );

        let mut datasets = BTreeMap::new();
        if available {
            for slot in ChartSlot::ALL {
                if let Some(raw) = platform::read_page_global(slot.global_name()) {
                    datasets.insert(slot, raw);
                }
            }
        }
        debug!(available, slots = datasets.len(), "analytics feed loaded");
        Self {
            available,
            datasets,
        }
    }

    /// Same shape as the page globals, gathered into a single JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let root: serde_json::Map<String, Value> = serde_json::from_str(text)?;
        let available = root.get(AVAILABILITY_FLAG).is_some_and(is_truthy);

        let datasets = ChartSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                root.get(slot.global_name())
                    .filter(|value| !value.is_null())
                    .map(|value| (slot, Ok(value.clone())))
            })
            .collect();

        Ok(Self {
            available,
            datasets,
        })
    }

    pub fn with_dataset(mut self, slot: ChartSlot, value: Value) -> Self {
        self.available = true;
        self.datasets.insert(slot, Ok(value));
        self
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn has_dataset(&self, slot: ChartSlot) -> bool {
        self.datasets.contains_key(&slot)
    }

    /// Build one slot. Failures are logged and stay confined to the slot.
    pub fn slot_state(&self, slot: ChartSlot) -> SlotState {
        if !self.available {
            return SlotState::Skipped;
        }
        let Some(raw) = self.datasets.get(&slot) else {
            return SlotState::Skipped;
        };

        let built = match raw {
            Ok(value) => slot.build(value),
            Err(reason) => Err(ChartError::Decode {
                slot: slot.slug(),
                reason: reason.clone(),
            }),
        };

        match built {
            Ok(model) => SlotState::Ready(model),
            Err(err) => {
                error!(chart = slot.element_id(), "error initializing chart: {err}");
                SlotState::Failed(err)
            }
        }
    }
}

/// Page scripts set the availability flag loosely, so it is read the way a
/// browser `if` would read it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn availability_flag_follows_page_truthiness() {
        for flag in ["true", "1", "\"true\"", "\"yes\"", "{}"] {
            let page = format!(r#"{{"hasAnalyticsData": {flag}}}"#);
            assert!(AnalyticsFeed::from_json(&page).unwrap().is_available(), "{flag}");
        }
        for flag in ["false", "0", "\"\"", "null"] {
            let page = format!(r#"{{"hasAnalyticsData": {flag}}}"#);
            assert!(!AnalyticsFeed::from_json(&page).unwrap().is_available(), "{flag}");
        }
    }

    #[test]
    fn unavailable_feed_skips_everything() {
        let feed = AnalyticsFeed::from_json(r#"{"deviceData": []}"#).unwrap();
        assert!(!feed.is_available());
        assert_eq!(feed.slot_state(ChartSlot::Device), SlotState::Skipped);
    }

    #[test]
    fn one_broken_slot_does_not_affect_others() {
        let feed = AnalyticsFeed::default()
            .with_dataset(ChartSlot::Hourly, json!([1, 2]))
            .with_dataset(ChartSlot::Device, json!([{"device": "Mobile", "scans": 2}]));

        assert_eq!(
            feed.slot_state(ChartSlot::Hourly),
            SlotState::Failed(ChartError::HourlyLength(2))
        );
        assert!(matches!(
            feed.slot_state(ChartSlot::Device),
            SlotState::Ready(ChartModel::Doughnut(_))
        ));
        assert_eq!(feed.slot_state(ChartSlot::Os), SlotState::Skipped);
    }
}
