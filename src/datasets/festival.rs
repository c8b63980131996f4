//! Festival-mode tables: the special-event timetable with extra runs to the
//! festival grounds and a heavier evening passenger curve.

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
    passengers: u32,
    capacity: u32,
) -> TrainScheduleEntry {
    TrainScheduleEntry {
        id: id.to_string(),
        route: route.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        // Every festival run is on time in the canonical table.
        status: TrainStatus::OnTime,
        passengers,
        capacity,
        efficiency_pct: None,
    }
}

pub fn passenger_samples() -> Vec<PassengerSample> {
    vec![
        sample("5 AM", 150, 160),
        sample("6 AM", 280, 290),
        sample("7 AM", 480, 470),
        sample("8 AM", 720, 710),
        sample("9 AM", 620, 630),
        sample("10 AM", 450, 460),
        sample("11 AM", 380, 375),
        sample("12 PM", 520, 530),
        sample("1 PM", 480, 475),
        sample("2 PM", 420, 430),
        sample("3 PM", 580, 570),
        sample("4 PM", 720, 730),
        sample("5 PM", 950, 940),
        sample("6 PM", 1200, 1180),
        sample("7 PM", 1100, 1120),
        sample("8 PM", 980, 990),
        sample("9 PM", 850, 860),
        sample("10 PM", 680, 690),
    ]
}

pub fn train_schedule() -> Vec<TrainScheduleEntry> {
    vec![
        train("F001", "Central → Temple District", "05:00", "05:45", 290, 300),
        train("F002", "Airport → Festival Grounds", "05:15", "06:00", 280, 300),
        train("T001", "Central → Airport", "05:30", "06:00", 270, 300),
        train("F003", "North → Festival Grounds", "05:45", "06:30", 240, 250),
        train("T002", "North → South", "06:00", "06:50", 230, 250),
        train("F004", "Festival Special Express", "06:15", "06:45", 295, 300),
        train("F005", "Temple District → Central", "06:30", "07:15", 285, 300),
        train("F006", "Festival Grounds → Airport", "06:45", "07:30", 275, 300),
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
            AlertKind::Warning,
            "Diwali Special: 20% more trains from 5 PM to 10 PM",
            "Just now",
            AlertPriority::High,
        ),
        alert(
            2,
            AlertKind::Info,
            "Festival Mode Active: Additional security deployed",
            "5 min ago",
            AlertPriority::Medium,
        ),
        alert(
            3,
            AlertKind::Success,
            "Special festival routes operational",
            "10 min ago",
            AlertPriority::Low,
        ),
        alert(
            4,
            AlertKind::Warning,
            "Expected crowd surge at Temple District stations",
            "15 min ago",
            AlertPriority::High,
        ),
    ]
}

pub fn metrics() -> AdminMetrics {
    AdminMetrics {
        total_trains: 32,
        on_time_performance: 92.5,
        energy_savings: 16.8,
        passenger_satisfaction: 4.4,
        average_delay_minutes: 3.2,
        system_efficiency: 89.6,
        total_users: None,
        system_uptime: None,
        data_processed_tb: None,
        cost_savings: None,
    }
}
