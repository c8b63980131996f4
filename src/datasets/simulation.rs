//! Simulation-mode tables: an AI-optimized timetable presented as a fixed
//! dataset. Selecting the mode swaps these in verbatim; nothing is computed.

use crate::models::{
    AdminMetrics, AlertEntry, AlertKind, AlertPriority, PassengerSample, TrainScheduleEntry,
    TrainStatus,
};

fn sample(time_label: &str, observed: u32, predicted: u32) -> PassengerSample {
    PassengerSample {
        time_label: time_label.to_string(),
        observed,
        predicted,
        capacity: None,
        efficiency_pct: None,
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
) -> TrainScheduleEntry {
    TrainScheduleEntry {
        id: id.to_string(),
        route: route.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        status,
        passengers,
        capacity,
        efficiency_pct: None,
    }
}

pub fn passenger_samples() -> Vec<PassengerSample> {
    vec![
        sample("5 AM", 80, 85),
        sample("6 AM", 180, 175),
        sample("7 AM", 420, 410),
        sample("8 AM", 750, 740),
        sample("9 AM", 580, 590),
        sample("10 AM", 320, 330),
        sample("11 AM", 280, 275),
        sample("12 PM", 450, 460),
        sample("1 PM", 380, 375),
        sample("2 PM", 340, 350),
        sample("3 PM", 390, 385),
        sample("4 PM", 520, 530),
        sample("5 PM", 680, 670),
        sample("6 PM", 820, 810),
        sample("7 PM", 650, 660),
        sample("8 PM", 480, 490),
        sample("9 PM", 320, 315),
        sample("10 PM", 220, 230),
    ]
}

pub fn train_schedule() -> Vec<TrainScheduleEntry> {
    vec![
        train("T001", "Central → Airport", "06:10", "06:40", TrainStatus::OnTime, 280, 300),
        train("T002", "North → South", "06:15", "07:05", TrainStatus::OnTime, 220, 250),
        train("T003", "East → West", "06:18", "06:48", TrainStatus::OnTime, 260, 280),
        train(
            "T004",
            "Airport → Central",
            "06:22",
            "06:52",
            TrainStatus::Early { minutes: 2 },
            240,
            300,
        ),
        train("T005", "South → North", "06:25", "07:15", TrainStatus::OnTime, 200, 250),
        train("T006", "West → East", "06:28", "06:58", TrainStatus::OnTime, 190, 280),
        train("T007", "Central → North", "06:32", "07:02", TrainStatus::OnTime, 210, 250),
    ]
}

pub fn alerts() -> Vec<AlertEntry> {
    let alert = |id, kind, message: &str, relative_time: &str, priority| AlertEntry {
        id,
        kind,
        message: message.to_string(),
        relative_time: relative_time.to_string(),
        priority,
        category: None,
        station: None,
    };
    vec![
        alert(
            1,
            AlertKind::Info,
            "AI Simulation: Increased frequency during peak hours",
            "Just now",
            AlertPriority::Medium,
        ),
        alert(
            2,
            AlertKind::Success,
            "Simulation shows 15% improvement in passenger flow",
            "1 min ago",
            AlertPriority::Low,
        ),
        alert(
            3,
            AlertKind::Warning,
            "Predicted congestion at Central Station at 8:30 AM",
            "2 min ago",
            AlertPriority::High,
        ),
        alert(
            4,
            AlertKind::Info,
            "AI recommends 3 additional trains for morning rush",
            "3 min ago",
            AlertPriority::Medium,
        ),
    ]
}

pub fn metrics() -> AdminMetrics {
    AdminMetrics {
        total_trains: 28,
        on_time_performance: 96.8,
        energy_savings: 22.3,
        passenger_satisfaction: 4.8,
        average_delay_minutes: 1.8,
        system_efficiency: 94.2,
        total_users: None,
        system_uptime: None,
        data_processed_tb: None,
        cost_savings: None,
    }
}
