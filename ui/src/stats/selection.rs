//! Selection state for the stats browser.
//!
//! [`Selection`] owns the active node and what the detail panel shows. The
//! statistics map is shared read-only; every transition replaces the state
//! wholesale, so clicking the active node again is a no-op in effect.

use std::rc::Rc;

use super::averages::compute_averages;
use super::model::{DeviceRecord, StatsMap};
use super::node::NodeId;

/// Content of the detail panel. `date`/`device` are set for leaf selections;
/// `content` is `None` when the leaf's record couldn't be found.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub date: Option<String>,
    pub device: Option<String>,
    pub content: Option<DeviceRecord>,
}

impl DisplayState {
    fn overview(totals: DeviceRecord) -> Self {
        Self {
            date: None,
            device: None,
            content: Some(totals),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    stats: Rc<StatsMap>,
    active: NodeId,
    display: Option<DisplayState>,
}

impl Selection {
    /// Starts on the overview. Without an aggregate record there is nothing to
    /// display.
    pub fn new(stats: Rc<StatsMap>) -> Self {
        let display = stats.totals().cloned().map(DisplayState::overview);
        Self {
            stats,
            active: NodeId::Overview,
            display,
        }
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    /// Whether this selection was built over the same map instance.
    pub fn shares_stats(&self, stats: &Rc<StatsMap>) -> bool {
        Rc::ptr_eq(&self.stats, stats)
    }

    pub fn active(&self) -> &NodeId {
        &self.active
    }

    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    /// Entry point for tree clicks carrying a wire identifier.
    pub fn handle_node_click(&mut self, raw: &str) {
        match NodeId::parse(raw) {
            NodeId::Overview => self.select_overview(),
            NodeId::Leaf { date, device } => self.select_leaf(date, device),
        }
    }

    pub fn select_overview(&mut self) {
        tracing::debug!("selecting overview");
        self.active = NodeId::Overview;
        self.display = self.stats.totals().cloned().map(DisplayState::overview);
    }

    pub fn select_leaf(&mut self, date: String, device: String) {
        let content = self.stats.find_device(&date, &device).cloned();
        if content.is_none() {
            tracing::debug!(%date, %device, "no record for selected leaf");
        } else {
            tracing::debug!(%date, %device, "selecting leaf");
        }

        self.active = NodeId::leaf(date.clone(), device.clone());
        self.display = Some(DisplayState {
            date: Some(date),
            device: Some(device),
            content,
        });
    }

    pub fn is_overview_active(&self) -> bool {
        self.active.is_overview()
    }

    pub fn is_leaf_active(&self, leaf: &NodeId) -> bool {
        !leaf.is_overview() && &self.active == leaf
    }

    pub fn is_group_active(&self, date: &str) -> bool {
        self.active.highlights_group(date)
    }

    /// Per-day averages while the aggregate record is on display.
    pub fn averages(&self) -> Option<DeviceRecord> {
        self.display
            .as_ref()
            .and_then(|display| display.content.as_ref())
            .and_then(compute_averages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::model::{DISTANCE_ON_BIKE, NUMBER_OF_DAYS};
    use serde_json::json;

    fn stats() -> Rc<StatsMap> {
        let doc = json!({
            "2024-01-01": [
                { "AssetName": "DeviceA", "DistanceOnBike": 1200 },
                { "AssetName": "DeviceB", "DistanceOnFoot": 800 }
            ],
            "2024-01-02": [{ "AssetName": "DeviceA", "MetersOfHeight": 40 }],
            "_totals": { "NumberOfDays": 5, "DistanceOnBike": 1000 }
        });
        Rc::new(serde_json::from_value(doc).unwrap())
    }

    #[test]
    fn starts_on_overview_with_totals() {
        let stats = stats();
        let selection = Selection::new(stats.clone());

        assert_eq!(selection.active(), &NodeId::Overview);
        let display = selection.display().unwrap();
        assert_eq!(display.content.as_ref(), stats.totals());
        assert_eq!(display.date, None);
        assert_eq!(display.device, None);
    }

    #[test]
    fn no_totals_means_nothing_to_display() {
        let stats: StatsMap = serde_json::from_value(json!({ "2024-01-01": [] })).unwrap();
        let mut selection = Selection::new(Rc::new(stats));
        assert!(selection.display().is_none());

        selection.handle_node_click("overview");
        assert!(selection.display().is_none());
        assert!(selection.is_overview_active());
    }

    #[test]
    fn leaf_click_looks_up_the_record() {
        let mut selection = Selection::new(stats());
        selection.handle_node_click("2024-01-01_DeviceA");

        assert_eq!(selection.active().to_wire(), "2024-01-01_DeviceA");
        let display = selection.display().unwrap();
        assert_eq!(display.date.as_deref(), Some("2024-01-01"));
        assert_eq!(display.device.as_deref(), Some("DeviceA"));
        let content = display.content.as_ref().unwrap();
        assert_eq!(content.metric(DISTANCE_ON_BIKE), Some(1200.0));
        assert!(selection.averages().is_none());
    }

    #[test]
    fn unknown_leaf_leaves_content_empty() {
        let mut selection = Selection::new(stats());

        selection.handle_node_click("2024-01-01_GhostDevice");
        assert_eq!(selection.display().unwrap().content, None);

        selection.handle_node_click("1999-12-31_DeviceA");
        assert_eq!(selection.display().unwrap().content, None);
        assert_eq!(selection.display().unwrap().date.as_deref(), Some("1999-12-31"));
    }

    #[test]
    fn clicks_are_idempotent() {
        let mut selection = Selection::new(stats());
        selection.handle_node_click("2024-01-02_DeviceA");
        let first = selection.clone();
        selection.handle_node_click("2024-01-02_DeviceA");
        assert_eq!(selection, first);
    }

    #[test]
    fn overview_click_restores_totals_and_averages() {
        let mut selection = Selection::new(stats());
        selection.handle_node_click("2024-01-02_DeviceA");
        selection.handle_node_click("");

        assert!(selection.is_overview_active());
        let averages = selection.averages().unwrap();
        assert_eq!(averages.metric("Days"), Some(5.0));
        assert_eq!(averages.metric(DISTANCE_ON_BIKE), Some(200.0));
        assert_eq!(
            selection.display().unwrap().content.as_ref().and_then(|c| c.metric(NUMBER_OF_DAYS)),
            Some(5.0)
        );
    }

    #[test]
    fn active_path_checks() {
        let mut selection = Selection::new(stats());
        assert!(selection.is_overview_active());
        assert!(!selection.is_group_active("2024-01-01"));

        selection.handle_node_click("2024-01-01_DeviceA");
        assert!(!selection.is_overview_active());
        assert!(selection.is_group_active("2024-01-01"));
        assert!(!selection.is_group_active("2024-01-02"));
        assert!(selection.is_leaf_active(&NodeId::leaf("2024-01-01", "DeviceA")));
        assert!(!selection.is_leaf_active(&NodeId::leaf("2024-01-01", "DeviceB")));
        assert!(!selection.is_leaf_active(&NodeId::leaf("2024-01-02", "DeviceA")));
    }
}
