//! Data-quality checks over the literal tables.
//!
//! The canonical tables were transcribed by hand and carry a few quirks; the
//! scan surfaces them in the startup log instead of silently shipping them.
//! Nothing is corrected; the tables are the contract, quirks included.

use crate::models::StatusSeverity;
use crate::services::classify;

/// One oddity found in a literal table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIssue {
    /// Which table the row lives in (e.g. "stations", "admin schedule")
    pub table: &'static str,
    pub detail: String,
}

/// Scan every base table for rows worth a second look.
pub fn scan() -> Vec<DatasetIssue> {
    let mut issues = Vec::new();

    // Stored intensity vs. the class derived from passengers/capacity.
    for station in super::stations::station_loads() {
        let derived = classify::load_intensity(station.passengers, station.capacity);
        if derived != station.intensity {
            issues.push(DatasetIssue {
                table: "stations",
                detail: format!(
                    "{}: stored intensity {:?} but {}/{} derives {:?}",
                    station.name, station.intensity, station.passengers, station.capacity, derived
                ),
            });
        }
    }

    // Passenger curves claiming more riders than capacity.
    for (table, samples) in [
        ("admin passengers", super::admin::passenger_samples()),
        ("operations passengers", super::operations::passenger_samples()),
    ] {
        for sample in samples {
            if let Some(capacity) = sample.capacity {
                if sample.observed > capacity || sample.predicted > capacity {
                    issues.push(DatasetIssue {
                        table,
                        detail: format!(
                            "{}: {} observed / {} predicted exceed capacity {}",
                            sample.time_label, sample.observed, sample.predicted, capacity
                        ),
                    });
                }
            }
        }
    }

    // Delays and disruptions baked into the canonical schedules.
    for (table, schedule) in [
        ("admin schedule", super::admin::train_schedule()),
        ("operations schedule", super::operations::train_schedule()),
        ("simulation schedule", super::simulation::train_schedule()),
        ("festival schedule", super::festival::train_schedule()),
    ] {
        for train in schedule {
            let minutes = train.status.delay_minutes();
            if minutes > 0 {
                issues.push(DatasetIssue {
                    table,
                    detail: format!("{} ships delayed {}min in the base table", train.id, minutes),
                });
            }
            if classify::status_severity(&train.status.to_string()) == StatusSeverity::Critical {
                issues.push(DatasetIssue {
                    table,
                    detail: format!("{} carries an unclassifiable status label", train.id),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_the_known_quirks_and_nothing_else() {
        let issues = scan();

        // Two station rows disagree with the derived thresholds.
        let stations: Vec<_> = issues.iter().filter(|i| i.table == "stations").collect();
        assert_eq!(stations.len(), 2);
        assert!(stations[0].detail.starts_with("Town Hall"));
        assert!(stations[1].detail.starts_with("Maharajas"));

        // T003 is delayed in both normal schedules.
        let delayed: Vec<_> = issues
            .iter()
            .filter(|i| i.detail.contains("delayed"))
            .collect();
        assert_eq!(delayed.len(), 2);
        assert!(delayed.iter().all(|i| i.detail.starts_with("T003")));

        // No curve exceeds capacity and every status label classifies.
        assert_eq!(issues.len(), 4);
    }
}
