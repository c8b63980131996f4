//! Display classification helpers.
//!
//! Pure functions mapping raw dashboard numbers and labels to the classes
//! the views color by. No state, no failure modes.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{LoadIntensity, StatusSeverity};

/// Classify a free-text status label by substring, first match wins:
/// "On Time"/"Early" are nominal, "Delayed" is a warning, anything else is
/// critical.
///
/// [`crate::models::TrainStatus::severity`] agrees with this for every label
/// the typed status can produce; this function exists for labels that arrive
/// as plain text.
pub fn status_severity(label: &str) -> StatusSeverity {
    if label.contains("On Time") || label.contains("Early") {
        StatusSeverity::Nominal
    } else if label.contains("Delayed") {
        StatusSeverity::Warning
    } else {
        StatusSeverity::Critical
    }
}

/// Crowding class for a passengers/capacity ratio.
///
/// The thresholds (50% / 71% / 86%) are the contract the station table was
/// built against.
pub fn load_intensity(passengers: u32, capacity: u32) -> LoadIntensity {
    let ratio = passengers as f64 / capacity as f64;
    if ratio < 0.50 {
        LoadIntensity::Low
    } else if ratio < 0.71 {
        LoadIntensity::Medium
    } else if ratio < 0.86 {
        LoadIntensity::High
    } else {
        // Also the landing spot for capacity 0 (ratio is inf or NaN).
        LoadIntensity::Critical
    }
}

/// Load as a rounded percentage for display.
pub fn load_percentage(passengers: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    ((passengers as f64 / capacity as f64) * 100.0).round() as u32
}

/// Qualitative rating of an energy-savings percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

pub fn efficiency_rating(savings_pct: f64) -> EfficiencyRating {
    if savings_pct >= 20.0 {
        EfficiencyRating::Excellent
    } else if savings_pct >= 15.0 {
        EfficiencyRating::Good
    } else if savings_pct >= 10.0 {
        EfficiencyRating::Fair
    } else {
        EfficiencyRating::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainStatus;

    #[test]
    fn severity_by_label() {
        assert_eq!(status_severity("On Time"), StatusSeverity::Nominal);
        assert_eq!(status_severity("Early 1min"), StatusSeverity::Nominal);
        assert_eq!(status_severity("Delayed 3min"), StatusSeverity::Warning);
        // Unseen labels fall through to the default branch
        assert_eq!(status_severity("Derailed"), StatusSeverity::Critical);
        assert_eq!(status_severity(""), StatusSeverity::Critical);
    }

    #[test]
    fn typed_status_agrees_with_label_classification() {
        for status in [
            TrainStatus::OnTime,
            TrainStatus::Delayed { minutes: 2 },
            TrainStatus::Delayed { minutes: 3 },
            TrainStatus::Early { minutes: 1 },
        ] {
            assert_eq!(status.severity(), status_severity(&status.to_string()));
        }
    }

    #[test]
    fn intensity_of_known_station_loads() {
        // 680/750 = 0.9067
        assert_eq!(load_intensity(680, 750), LoadIntensity::Critical);
        // 280/450 = 0.622
        assert_eq!(load_intensity(280, 450), LoadIntensity::Medium);
    }

    #[test]
    fn intensity_thresholds() {
        assert_eq!(load_intensity(49, 100), LoadIntensity::Low);
        assert_eq!(load_intensity(50, 100), LoadIntensity::Medium);
        assert_eq!(load_intensity(70, 100), LoadIntensity::Medium);
        assert_eq!(load_intensity(71, 100), LoadIntensity::High);
        assert_eq!(load_intensity(85, 100), LoadIntensity::High);
        assert_eq!(load_intensity(86, 100), LoadIntensity::Critical);
        // Degenerate capacities land in the top class rather than panicking
        assert_eq!(load_intensity(10, 0), LoadIntensity::Critical);
        assert_eq!(load_intensity(0, 0), LoadIntensity::Critical);
    }

    #[test]
    fn load_percentage_rounds() {
        assert_eq!(load_percentage(680, 750), 91);
        assert_eq!(load_percentage(280, 450), 62);
        assert_eq!(load_percentage(0, 0), 0);
    }

    #[test]
    fn efficiency_rating_bands() {
        assert_eq!(efficiency_rating(22.3), EfficiencyRating::Excellent);
        assert_eq!(efficiency_rating(20.0), EfficiencyRating::Excellent);
        assert_eq!(efficiency_rating(18.5), EfficiencyRating::Good);
        assert_eq!(efficiency_rating(15.0), EfficiencyRating::Good);
        assert_eq!(efficiency_rating(12.0), EfficiencyRating::Fair);
        assert_eq!(efficiency_rating(9.9), EfficiencyRating::Poor);
    }
}
