use dioxus::prelude::*;

use crate::{core::format, t};

use super::averages::{compute_averages, DAYS};
use super::model::DeviceRecord;
use super::selection::Selection;
use super::tiles::StatsTiles;

/// What the detail panel shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailModel {
    /// No aggregate record, or a leaf whose record couldn't be found.
    Failure,
    Overview {
        totals: DeviceRecord,
        averages: Option<DeviceRecord>,
    },
    Device {
        date: String,
        device: String,
        record: DeviceRecord,
    },
}

impl DetailModel {
    pub fn from_selection(selection: &Selection) -> Self {
        let Some(display) = selection.display() else {
            return Self::Failure;
        };
        let Some(content) = display.content.clone() else {
            return Self::Failure;
        };

        if content.is_aggregate() {
            Self::Overview {
                averages: compute_averages(&content),
                totals: content,
            }
        } else {
            Self::Device {
                date: display.date.clone().unwrap_or_default(),
                device: display
                    .device
                    .clone()
                    .or_else(|| content.name().map(str::to_string))
                    .unwrap_or_default(),
                record: content,
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

#[component]
pub fn StatsDetail(model: DetailModel) -> Element {
    rsx! {
        div { class: "stats-main",
            match model {
                DetailModel::Failure => rsx! {
                    p { class: "text-center", {t!("stats-failure")} }
                },
                DetailModel::Overview { totals, averages } => render_overview(totals, averages),
                DetailModel::Device { date, device, record } => render_device(date, device, record),
            }
        }
    }
}

fn render_overview(totals: DeviceRecord, averages: Option<DeviceRecord>) -> Element {
    rsx! {
        h2 { class: "text-center stats-main__title--flush", {t!("stats-summary")} }
        StatsTiles { record: totals, format_all: false, class: "stats-overview" }

        if let Some(averages) = averages {
            {render_averages(averages)}
        }
    }
}

fn render_averages(averages: DeviceRecord) -> Element {
    let days = averages.metric(DAYS).map(format::format_raw).unwrap_or_default();

    rsx! {
        h2 { class: "text-center stats-main__title--spaced", {t!("stats-averages")} }
        p { class: "text-center text-muted stats-main__meta",
            {t!("stats-averages-days", days = days)}
        }
        StatsTiles { record: averages, format_all: true }
    }
}

fn render_device(date: String, device: String, record: DeviceRecord) -> Element {
    rsx! {
        h2 { class: "text-center", {t!("stats-daily")} }
        p { class: "text-center text-muted stats-main__meta",
            {t!("stats-date", date = date)}
            br {}
            {t!("stats-device", device = device)}
        }
        StatsTiles { record, format_all: false }
    }
}
