//! Normal-mode tables for the admin dashboard.

use crate::models::{
    AdminBundle, AdminMetrics, AlertEntry, AlertKind, AlertPriority, CostSample, EnergySplit,
    PassengerSample, TrainScheduleEntry, TrainStatus,
};

fn sample(
    time_label: &str,
    observed: u32,
    predicted: u32,
    capacity: u32,
    efficiency_pct: f64,
) -> PassengerSample {
    PassengerSample {
        time_label: time_label.to_string(),
        observed,
        predicted,
        capacity: Some(capacity),
        efficiency_pct: Some(efficiency_pct),
    }
}

fn train(
    id: &str,
    route: &str,
    departure: &str,
    arrival: &str,
    status: TrainStatus,
    passengers: u32,
    capacity: u32,
    efficiency_pct: f64,
) -> TrainScheduleEntry {
    TrainScheduleEntry {
        id: id.to_string(),
        route: route.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        status,
        passengers,
        capacity,
        efficiency_pct: Some(efficiency_pct),
    }
}

pub fn passenger_samples() -> Vec<PassengerSample> {
    vec![
        sample("5 AM", 120, 130, 200, 60.0),
        sample("6 AM", 200, 210, 300, 67.0),
        sample("7 AM", 350, 340, 400, 88.0),
        sample("8 AM", 600, 580, 700, 86.0),
        sample("9 AM", 450, 470, 500, 90.0),
        sample("10 AM", 280, 290, 350, 80.0),
        sample("11 AM", 220, 230, 300, 73.0),
        sample("12 PM", 380, 370, 450, 84.0),
        sample("1 PM", 320, 330, 400, 80.0),
        sample("2 PM", 290, 300, 350, 83.0),
        sample("3 PM", 340, 350, 400, 85.0),
        sample("4 PM", 420, 410, 500, 84.0),
        sample("5 PM", 550, 540, 650, 85.0),
        sample("6 PM", 680, 670, 750, 91.0),
        sample("7 PM", 520, 530, 600, 87.0),
        sample("8 PM", 380, 390, 450, 84.0),
        sample("9 PM", 250, 260, 300, 83.0),
        sample("10 PM", 180, 190, 250, 72.0),
    ]
}

pub fn train_schedule() -> Vec<TrainScheduleEntry> {
    vec![
        train("T001", "Aluva → Pettah", "06:15", "06:45", TrainStatus::OnTime, 245, 300, 82.0),
        train("T002", "Pettah → Aluva", "06:20", "06:50", TrainStatus::OnTime, 180, 300, 60.0),
        train(
            "T003",
            "Aluva → Pettah",
            "06:25",
            "06:55",
            TrainStatus::Delayed { minutes: 3 },
            220,
            300,
            73.0,
        ),
        train("T004", "Pettah → Aluva", "06:30", "07:00", TrainStatus::OnTime, 195, 300, 65.0),
        train("T005", "Aluva → Pettah", "06:35", "07:05", TrainStatus::OnTime, 160, 300, 53.0),
    ]
}

pub fn alerts() -> Vec<AlertEntry> {
    let alert = |id, kind, message: &str, relative_time: &str, priority, category: &str| AlertEntry {
        id,
        kind,
        message: message.to_string(),
        relative_time: relative_time.to_string(),
        priority,
        category: Some(category.to_string()),
        station: None,
    };
    vec![
        alert(
            1,
            AlertKind::Warning,
            "Peak load expected at Ernakulam South at 6 PM",
            "2 min ago",
            AlertPriority::High,
            "Operations",
        ),
        alert(
            2,
            AlertKind::Info,
            "System backup completed successfully",
            "15 min ago",
            AlertPriority::Medium,
            "System",
        ),
        alert(
            3,
            AlertKind::Success,
            "Energy efficiency improved by 12% this week",
            "1 hour ago",
            AlertPriority::Low,
            "Performance",
        ),
        alert(
            4,
            AlertKind::Warning,
            "Database maintenance required next week",
            "2 hours ago",
            AlertPriority::High,
            "Maintenance",
        ),
    ]
}

pub fn metrics() -> AdminMetrics {
    AdminMetrics {
        total_trains: 24,
        on_time_performance: 94.2,
        energy_savings: 18.5,
        passenger_satisfaction: 4.6,
        average_delay_minutes: 2.3,
        system_efficiency: 91.8,
        total_users: Some(156),
        system_uptime: Some(99.7),
        data_processed_tb: Some(2.4),
        cost_savings: Some(23.5),
    }
}

pub fn energy_breakdown() -> EnergySplit {
    EnergySplit {
        saved_pct: 18,
        standard_pct: 82,
    }
}

pub fn cost_samples() -> Vec<CostSample> {
    let cost = |month: &str, traditional_cost, optimized_cost, savings| CostSample {
        month: month.to_string(),
        traditional_cost,
        optimized_cost,
        savings,
    };
    vec![
        cost("Jan", 2400, 1800, 600),
        cost("Feb", 2200, 1600, 600),
        cost("Mar", 2600, 1900, 700),
        cost("Apr", 2300, 1700, 600),
        cost("May", 2500, 1850, 650),
        cost("Jun", 2700, 2000, 700),
    ]
}

/// The complete normal-mode bundle the admin dashboard mounts with.
pub fn bundle() -> AdminBundle {
    AdminBundle {
        passenger_samples: passenger_samples(),
        train_schedule: train_schedule(),
        alerts: alerts(),
        metrics: metrics(),
        energy_breakdown: energy_breakdown(),
        cost_samples: cost_samples(),
    }
}
