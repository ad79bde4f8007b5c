//! Per-day averages for the overview.

use super::model::{
    DeviceRecord, DISTANCE_ON_BIKE, DISTANCE_ON_FOOT, METERS_OF_HEIGHT, NUMBER_OF_DAYS,
};

/// Day count label carried on the averages record.
pub const DAYS: &str = "Days";

pub const AVERAGED_METRICS: [&str; 3] = [DISTANCE_ON_BIKE, DISTANCE_ON_FOOT, METERS_OF_HEIGHT];

/// Averages exist only for the aggregate record spanning more than one day.
/// Metrics missing on the aggregate are left out rather than zero-filled.
pub fn compute_averages(content: &DeviceRecord) -> Option<DeviceRecord> {
    if !content.is_aggregate() {
        return None;
    }
    let days = content.metric(NUMBER_OF_DAYS).filter(|days| *days > 1.0)?;

    let mut averages = DeviceRecord::aggregate().with_metric(DAYS, days);
    for name in AVERAGED_METRICS {
        if let Some(total) = content.metric(name) {
            averages.set_metric(name, total / days);
        }
    }
    Some(averages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_has_no_averages() {
        let totals = DeviceRecord::aggregate()
            .with_metric(NUMBER_OF_DAYS, 1.0)
            .with_metric(DISTANCE_ON_BIKE, 500.0);
        assert!(compute_averages(&totals).is_none());
    }

    #[test]
    fn divides_present_metrics_only() {
        let totals = DeviceRecord::aggregate()
            .with_metric(NUMBER_OF_DAYS, 4.0)
            .with_metric(DISTANCE_ON_BIKE, 4000.0)
            .with_metric(METERS_OF_HEIGHT, 800.0);

        let averages = compute_averages(&totals).unwrap();
        let expected = DeviceRecord::aggregate()
            .with_metric(DAYS, 4.0)
            .with_metric(DISTANCE_ON_BIKE, 1000.0)
            .with_metric(METERS_OF_HEIGHT, 200.0);
        assert_eq!(averages, expected);
        assert!(!averages.has_metric(DISTANCE_ON_FOOT));
    }

    #[test]
    fn device_records_and_missing_day_count_are_skipped() {
        let device = DeviceRecord::device("DeviceA")
            .with_metric(NUMBER_OF_DAYS, 3.0)
            .with_metric(DISTANCE_ON_BIKE, 300.0);
        assert!(compute_averages(&device).is_none());

        let no_days = DeviceRecord::aggregate().with_metric(DISTANCE_ON_BIKE, 300.0);
        assert!(compute_averages(&no_days).is_none());
    }
}
