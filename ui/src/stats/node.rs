//! Tree node identifiers.
//!
//! Internally a node is either the overview or a `(date, device)` leaf. At the
//! rendering boundary the identifier travels as a string: `""` for the
//! overview and `"<date>_<device>"` for a leaf. Dates never contain the
//! separator (enforced when the map is loaded), so decoding splits on the
//! first occurrence and device names are free to contain `_`.

use std::fmt;

pub const SEPARATOR: char = '_';

/// Wire value of the overview node.
pub const OVERVIEW_SENTINEL: &str = "";

/// DOM id of the overview button; decodes to [`NodeId::Overview`] as well.
pub const OVERVIEW_DOM_ID: &str = "overview";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum NodeId {
    #[default]
    Overview,
    Leaf { date: String, device: String },
}

impl NodeId {
    pub fn leaf<D: Into<String>, N: Into<String>>(date: D, device: N) -> Self {
        Self::Leaf {
            date: date.into(),
            device: device.into(),
        }
    }

    /// Decode a clicked identifier. Total: anything without a separator that is
    /// not an overview marker becomes a leaf with an empty device name, which
    /// simply finds no record.
    pub fn parse(raw: &str) -> Self {
        if raw == OVERVIEW_SENTINEL || raw == OVERVIEW_DOM_ID {
            return Self::Overview;
        }
        match raw.split_once(SEPARATOR) {
            Some((date, device)) => Self::leaf(date, device),
            None => Self::leaf(raw, ""),
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            Self::Overview => OVERVIEW_SENTINEL.to_string(),
            Self::Leaf { date, device } => format!("{date}{SEPARATOR}{device}"),
        }
    }

    /// Value for the `id` attribute of the node's button.
    pub fn dom_id(&self) -> String {
        match self {
            Self::Overview => OVERVIEW_DOM_ID.to_string(),
            Self::Leaf { .. } => self.to_wire(),
        }
    }

    pub fn is_overview(&self) -> bool {
        matches!(self, Self::Overview)
    }

    /// Group highlight: the active identifier starts with the group's date
    /// (prefix containment, not equality).
    pub fn highlights_group(&self, date: &str) -> bool {
        !date.is_empty() && self.to_wire().starts_with(date)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
