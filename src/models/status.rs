use serde::{Serialize, Serializer};

/// Punctuality of a scheduled train.
///
/// The display string ("On Time", "Delayed 3min", "Early 1min") and the
/// severity class are both derived from the tag, so the two can never
/// disagree the way free-text labels can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    OnTime,
    Delayed { minutes: u8 },
    Early { minutes: u8 },
}

/// Severity class used to color a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusSeverity {
    /// Running on time or ahead of schedule
    Nominal,
    /// Running behind schedule
    Warning,
    /// Anything else (unrecognized or disrupted)
    Critical,
}

impl TrainStatus {
    pub fn severity(&self) -> StatusSeverity {
        match self {
            TrainStatus::OnTime | TrainStatus::Early { .. } => StatusSeverity::Nominal,
            TrainStatus::Delayed { .. } => StatusSeverity::Warning,
        }
    }

    /// Delay in minutes (0 unless delayed).
    pub fn delay_minutes(&self) -> u8 {
        match self {
            TrainStatus::Delayed { minutes } => *minutes,
            _ => 0,
        }
    }
}

impl std::fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainStatus::OnTime => write!(f, "On Time"),
            TrainStatus::Delayed { minutes } => write!(f, "Delayed {minutes}min"),
            TrainStatus::Early { minutes } => write!(f, "Early {minutes}min"),
        }
    }
}

// Serialized as its display string so API consumers get the label the
// views render.
impl Serialize for TrainStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels() {
        assert_eq!(TrainStatus::OnTime.to_string(), "On Time");
        assert_eq!(TrainStatus::Delayed { minutes: 3 }.to_string(), "Delayed 3min");
        assert_eq!(TrainStatus::Early { minutes: 1 }.to_string(), "Early 1min");
    }

    #[test]
    fn severity_from_tag() {
        assert_eq!(TrainStatus::OnTime.severity(), StatusSeverity::Nominal);
        assert_eq!(
            TrainStatus::Early { minutes: 2 }.severity(),
            StatusSeverity::Nominal
        );
        assert_eq!(
            TrainStatus::Delayed { minutes: 2 }.severity(),
            StatusSeverity::Warning
        );
    }

    #[test]
    fn delay_minutes_from_tag() {
        assert_eq!(TrainStatus::OnTime.delay_minutes(), 0);
        assert_eq!(TrainStatus::Delayed { minutes: 5 }.delay_minutes(), 5);
        assert_eq!(TrainStatus::Early { minutes: 1 }.delay_minutes(), 0);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&TrainStatus::Delayed { minutes: 2 }).unwrap();
        assert_eq!(json, "\"Delayed 2min\"");
    }
}
