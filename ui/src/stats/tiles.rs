use dioxus::prelude::*;

use crate::{
    core::format::{self, NumberStyle},
    i18n, t,
};

use super::model::{
    DeviceRecord, DISTANCE_ON_BIKE, DISTANCE_ON_FOOT, METERS_OF_HEIGHT, NUMBER_OF_DAYS,
};

const BIKE_ICON: Asset = asset!("/assets/icons/bike.svg");
const SHOE_ICON: Asset = asset!("/assets/icons/shoe.svg");
const MOUNTAIN_ICON: Asset = asset!("/assets/icons/mountain.svg");
const CALENDAR_ICON: Asset = asset!("/assets/icons/calendar.svg");

pub type Transform = fn(f64, NumberStyle) -> String;

/// One entry of the static tile table. `label` is a Fluent message ID.
pub struct TileDescriptor {
    pub name: &'static str,
    pub icon: Asset,
    pub label: &'static str,
    pub transform: Option<Transform>,
}

pub const TILES: &[TileDescriptor] = &[
    TileDescriptor {
        name: DISTANCE_ON_BIKE,
        icon: BIKE_ICON,
        label: "tile-distance-bike",
        transform: Some(meters_as_km),
    },
    TileDescriptor {
        name: DISTANCE_ON_FOOT,
        icon: SHOE_ICON,
        label: "tile-distance-foot",
        transform: Some(meters_as_km),
    },
    TileDescriptor {
        name: METERS_OF_HEIGHT,
        icon: MOUNTAIN_ICON,
        label: "tile-meters-height",
        transform: Some(two_decimals),
    },
    TileDescriptor {
        name: NUMBER_OF_DAYS,
        icon: CALENDAR_ICON,
        label: "tile-number-days",
        transform: None,
    },
];

fn meters_as_km(value: f64, style: NumberStyle) -> String {
    format::format_number_with(value / 1000.0, style)
}

fn two_decimals(value: f64, style: NumberStyle) -> String {
    format::format_number_with(value, style)
}

/// A descriptor paired with the display value for one record.
#[derive(Clone)]
pub struct Tile {
    pub descriptor: &'static TileDescriptor,
    pub value: String,
}

/// Project the fields present on `record` into tiles, in descriptor order.
///
/// A descriptor transform always wins. Without one, `format_all` decides
/// between the uniform formatter and the raw value.
pub fn project_tiles(
    record: &DeviceRecord,
    descriptors: &'static [TileDescriptor],
    format_all: bool,
    style: NumberStyle,
) -> Vec<Tile> {
    descriptors
        .iter()
        .filter_map(|descriptor| {
            let raw = record.metric(descriptor.name)?;
            let value = match (descriptor.transform, format_all) {
                (Some(transform), _) => transform(raw, style),
                (None, true) => format::format_number_with(raw, style),
                (None, false) => format::format_raw(raw),
            };
            Some(Tile { descriptor, value })
        })
        .collect()
}

#[component]
pub fn StatsTiles(
    record: DeviceRecord,
    format_all: bool,
    #[props(default)] class: String,
) -> Element {
    let tiles = project_tiles(&record, TILES, format_all, i18n::number_style());

    rsx! {
        div { class: "stats-container {class}",
            for tile in tiles.into_iter() {
                {render_tile(tile)}
            }
        }
    }
}

fn render_tile(tile: Tile) -> Element {
    let Tile { descriptor, value } = tile;
    let label = i18n::tr(descriptor.label);
    let alt = t!("tile-icon-alt", label = label.clone());

    rsx! {
        div { key: "{descriptor.name}", class: "stats-item",
            span { class: "icon",
                img { src: descriptor.icon, alt: "{alt}" }
            }
            span { class: "value", "{value}" }
            span { class: "label", "{label}" }
        }
    }
}
