pub mod status;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use status::{StatusSeverity, TrainStatus};

/// Which dataset family the admin dashboard is currently showing.
///
/// Exactly one mode is active at a time. The operations dashboard has no
/// mode concept and always renders normal-mode data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    #[default]
    Normal,
    Simulation,
    Festival,
}

/// One point of the hourly passenger curve ("5 AM" through "10 PM").
///
/// `observed` and `predicted` are independent counts with no enforced
/// relationship to `capacity`; the simulation and festival tables carry
/// neither a capacity nor an efficiency column.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PassengerSample {
    pub time_label: String,
    pub observed: u32,
    pub predicted: u32,
    pub capacity: Option<u32>,
    pub efficiency_pct: Option<f64>,
}

/// A scheduled train run shown on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrainScheduleEntry {
    /// Run identifier (e.g. "T001", "F004")
    pub id: String,
    pub route: String,
    /// Departure time, "HH:MM"
    pub departure: String,
    /// Arrival time, "HH:MM"
    pub arrival: String,
    #[schema(value_type = String)]
    pub status: TrainStatus,
    pub passengers: u32,
    pub capacity: u32,
    pub efficiency_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

/// A notification shown in the alerts panel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AlertEntry {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    /// Human-readable age, e.g. "2 min ago"
    pub relative_time: String,
    pub priority: AlertPriority,
    /// Admin alerts carry a category, operations alerts a station
    pub category: Option<String>,
    pub station: Option<String>,
}

/// Monthly operating cost comparison (admin dashboard only).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CostSample {
    pub month: String,
    pub traditional_cost: i32,
    pub optimized_cost: i32,
    pub savings: i32,
}

/// Two-part energy usage split; the parts always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct EnergySplit {
    pub saved_pct: u8,
    pub standard_pct: u8,
}

/// Headline KPIs for the operations dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OperationsMetrics {
    pub active_trains: u32,
    pub on_time_performance: f64,
    pub current_passengers: u32,
    pub energy_efficiency: f64,
    pub average_delay_minutes: f64,
    pub system_status: String,
}

/// Headline KPIs for the admin dashboard.
///
/// The optional tail exists only in the normal-mode table: the simulation
/// and festival tables replace the whole record and carry no values for
/// those fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminMetrics {
    pub total_trains: u32,
    pub on_time_performance: f64,
    pub energy_savings: f64,
    pub passenger_satisfaction: f64,
    pub average_delay_minutes: f64,
    pub system_efficiency: f64,
    pub total_users: Option<u32>,
    pub system_uptime: Option<f64>,
    pub data_processed_tb: Option<f64>,
    pub cost_savings: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Crowding class for a station or train load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadIntensity {
    Low,
    Medium,
    High,
    Critical,
}

/// One row of the station density heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StationLoad {
    pub name: String,
    pub passengers: u32,
    pub capacity: u32,
    pub trend: Trend,
    pub intensity: LoadIntensity,
}

/// Everything the operations dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OperationsBundle {
    pub passenger_samples: Vec<PassengerSample>,
    pub train_schedule: Vec<TrainScheduleEntry>,
    pub alerts: Vec<AlertEntry>,
    pub metrics: OperationsMetrics,
}

/// Everything the admin dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminBundle {
    pub passenger_samples: Vec<PassengerSample>,
    pub train_schedule: Vec<TrainScheduleEntry>,
    pub alerts: Vec<AlertEntry>,
    pub metrics: AdminMetrics,
    pub energy_breakdown: EnergySplit,
    pub cost_samples: Vec<CostSample>,
}
