//! Statistics map and per-device records.
//!
//! The source document is a JSON object keyed by date. Each date holds a list
//! of device records; the reserved `_totals` key holds a single aggregate
//! record summarising every date:
//!
//! ```json
//! {
//!   "2024-01-01": [{ "AssetName": "Bike-01", "DistanceOnBike": 12000 }],
//!   "_totals": { "NumberOfDays": 1, "DistanceOnBike": 12000 }
//! }
//! ```
//!
//! Key order is kept exactly as written in the document.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::node::SEPARATOR;

/// Reserved key of the aggregate record.
pub const TOTALS_KEY: &str = "_totals";

pub const DISTANCE_ON_BIKE: &str = "DistanceOnBike";
pub const DISTANCE_ON_FOOT: &str = "DistanceOnFoot";
pub const METERS_OF_HEIGHT: &str = "MetersOfHeight";
pub const NUMBER_OF_DAYS: &str = "NumberOfDays";

/// A flat bag of metrics. Device records carry a non-empty `AssetName`; the
/// aggregate record does not. Fields that are neither numbers nor `null` are
/// dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(rename = "AssetName", default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(flatten, deserialize_with = "numeric_fields")]
    pub metrics: BTreeMap<String, Option<f64>>,
}

fn numeric_fields<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, Option<f64>>, D::Error> {
    let fields = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| match value {
            serde_json::Value::Null => Some((name, None)),
            serde_json::Value::Number(number) => Some((name, number.as_f64())),
            _ => None,
        })
        .collect())
}

impl DeviceRecord {
    pub fn aggregate() -> Self {
        Self::default()
    }

    pub fn device<T: Into<String>>(name: T) -> Self {
        Self {
            asset_name: Some(name.into()),
            metrics: BTreeMap::new(),
        }
    }

    /// Builder-style metric setter, mostly used when assembling fixtures.
    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.set_metric(name, value);
        self
    }

    pub fn set_metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), Some(value));
    }

    /// Present means the key exists and is not `null`; zero counts as present.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied().flatten()
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metric(name).is_some()
    }

    /// The identifying device name; an empty `AssetName` counts as none.
    pub fn name(&self) -> Option<&str> {
        self.asset_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_aggregate(&self) -> bool {
        self.name().is_none()
    }
}

/// One date group in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: String,
    pub records: Vec<DeviceRecord>,
}

/// Date-keyed statistics plus the optional aggregate record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsMap {
    days: Vec<DayEntry>,
    totals: Option<DeviceRecord>,
}

impl StatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a date group, or replace the records of an existing one in
    /// place. Dates must be non-empty and free of the node separator so leaf
    /// identifiers decode unambiguously.
    pub fn push_day<T: Into<String>>(
        &mut self,
        date: T,
        records: Vec<DeviceRecord>,
    ) -> Result<(), crate::core::storage::StatsError> {
        let date = date.into();
        validate_date(&date).map_err(crate::core::storage::StatsError::InvalidDate)?;
        self.upsert_day(date, records);
        Ok(())
    }

    fn upsert_day(&mut self, date: String, records: Vec<DeviceRecord>) {
        match self.days.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => entry.records = records,
            None => self.days.push(DayEntry { date, records }),
        }
    }

    pub fn set_totals(&mut self, totals: DeviceRecord) {
        self.totals = Some(totals);
    }

    pub fn totals(&self) -> Option<&DeviceRecord> {
        self.totals.as_ref()
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn day(&self, date: &str) -> Option<&[DeviceRecord]> {
        self.days
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.records.as_slice())
    }

    /// Case-sensitive exact lookup of a device record within a date.
    pub fn find_device(&self, date: &str, device: &str) -> Option<&DeviceRecord> {
        self.day(date)?
            .iter()
            .find(|record| record.name() == Some(device))
    }
}

fn validate_date(date: &str) -> Result<(), String> {
    if date.is_empty() || date.contains(SEPARATOR) {
        Err(date.to_string())
    } else {
        Ok(())
    }
}

impl Serialize for StatsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.days.len() + usize::from(self.totals.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for entry in &self.days {
            map.serialize_entry(&entry.date, &entry.records)?;
        }
        if let Some(totals) = &self.totals {
            map.serialize_entry(TOTALS_KEY, totals)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatsMapVisitor)
    }
}

struct StatsMapVisitor;

impl<'de> Visitor<'de> for StatsMapVisitor {
    type Value = StatsMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of dates to device record lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StatsMap, A::Error> {
        let mut stats = StatsMap::new();
        while let Some(key) = access.next_key::<String>()? {
            if key == TOTALS_KEY {
                stats.totals = Some(access.next_value()?);
                continue;
            }
            validate_date(&key).map_err(|date| {
                de::Error::custom(format!(
                    "invalid date key {date:?}: must be non-empty and not contain '{SEPARATOR}'"
                ))
            })?;
            let records: Vec<DeviceRecord> = access.next_value()?;
            // A repeated date keeps its first position and its last value.
            stats.upsert_day(key, records);
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_document_order_and_separates_totals() {
        let doc = r#"{
            "2024-03-02": [{ "AssetName": "B", "DistanceOnBike": 10 }],
            "_totals": { "NumberOfDays": 2 },
            "2024-01-01": [{ "AssetName": "A" }]
        }"#;
        let stats: StatsMap = serde_json::from_str(doc).unwrap();

        let dates: Vec<_> = stats.days().iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-02", "2024-01-01"]);
        assert_eq!(stats.totals().and_then(|t| t.metric(NUMBER_OF_DAYS)), Some(2.0));
    }

    #[test]
    fn null_metric_is_absent_but_zero_is_present() {
        let record: DeviceRecord =
            serde_json::from_value(json!({ "AssetName": "A", "MetersOfHeight": null, "DistanceOnFoot": 0 }))
                .unwrap();
        assert!(!record.has_metric(METERS_OF_HEIGHT));
        assert_eq!(record.metric(DISTANCE_ON_FOOT), Some(0.0));
        assert!(!record.is_aggregate());
    }

    #[test]
    fn non_numeric_fields_are_ignored() {
        let doc = r#"{
            "2024-01-01": [
                { "AssetName": "DeviceA", "AssetType": "bike", "Tags": ["x"], "DistanceOnBike": 1200 }
            ]
        }"#;
        let stats: StatsMap = serde_json::from_str(doc).unwrap();
        let record = stats.find_device("2024-01-01", "DeviceA").unwrap();

        assert_eq!(record.metric(DISTANCE_ON_BIKE), Some(1200.0));
        assert!(!record.metrics.contains_key("AssetType"));
        assert!(!record.metrics.contains_key("Tags"));
    }

    #[test]
    fn repeated_date_keeps_first_position_and_last_records() {
        let doc = r#"{
            "2024-01-01": [{ "AssetName": "Old" }],
            "2024-01-02": [{ "AssetName": "B" }],
            "2024-01-01": [{ "AssetName": "New" }]
        }"#;
        let stats: StatsMap = serde_json::from_str(doc).unwrap();

        let dates: Vec<_> = stats.days().iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02"]);
        assert!(stats.find_device("2024-01-01", "New").is_some());
        assert!(stats.find_device("2024-01-01", "Old").is_none());
    }

    #[test]
    fn empty_asset_name_is_the_aggregate() {
        let record: DeviceRecord =
            serde_json::from_value(json!({ "AssetName": "", "NumberOfDays": 3 })).unwrap();
        assert!(record.is_aggregate());
        assert_eq!(record.name(), None);
    }

    #[test]
    fn rejects_date_keys_containing_separator() {
        let err = serde_json::from_value::<StatsMap>(json!({ "2024_01_01": [] })).unwrap_err();
        assert!(err.to_string().contains("invalid date key"));

        let mut stats = StatsMap::new();
        assert!(stats.push_day("", Vec::new()).is_err());
        assert!(stats.push_day("2024-01-01", Vec::new()).is_ok());
    }

    #[test]
    fn find_device_is_case_sensitive() {
        let mut stats = StatsMap::new();
        stats
            .push_day("2024-01-01", vec![DeviceRecord::device("DeviceA")])
            .unwrap();

        assert!(stats.find_device("2024-01-01", "DeviceA").is_some());
        assert!(stats.find_device("2024-01-01", "devicea").is_none());
        assert!(stats.find_device("2024-01-02", "DeviceA").is_none());
    }

    #[test]
    fn serializes_back_in_order() {
        let mut stats = StatsMap::new();
        stats
            .push_day("2024-01-02", vec![DeviceRecord::device("X").with_metric(DISTANCE_ON_BIKE, 5.0)])
            .unwrap();
        stats.set_totals(DeviceRecord::aggregate().with_metric(NUMBER_OF_DAYS, 1.0));

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            json!({
                "2024-01-02": [{ "AssetName": "X", "DistanceOnBike": 5.0 }],
                "_totals": { "NumberOfDays": 1.0 }
            })
        );
    }
}
