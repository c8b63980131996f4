//! Tables for the operations dashboard, which has no mode concept.

use crate::models::{
    AlertEntry, AlertKind, AlertPriority, OperationsBundle, OperationsMetrics, PassengerSample,
    TrainScheduleEntry, TrainStatus,
};

fn sample(time_label: &str, observed: u32, predicted: u32, capacity: u32) -> PassengerSample {
    PassengerSample {
        time_label: time_label.to_string(),
        observed,
        predicted,
        capacity: Some(capacity),
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
        sample("5 AM", 120, 130, 200),
        sample("6 AM", 200, 210, 300),
        sample("7 AM", 350, 340, 400),
        sample("8 AM", 600, 580, 700),
        sample("9 AM", 450, 470, 500),
        sample("10 AM", 280, 290, 350),
        sample("11 AM", 220, 230, 300),
        sample("12 PM", 380, 370, 450),
        sample("1 PM", 320, 330, 400),
        sample("2 PM", 290, 300, 350),
        sample("3 PM", 340, 350, 400),
        sample("4 PM", 420, 410, 500),
        sample("5 PM", 550, 540, 650),
        sample("6 PM", 680, 670, 750),
        sample("7 PM", 520, 530, 600),
        sample("8 PM", 380, 390, 450),
        sample("9 PM", 250, 260, 300),
        sample("10 PM", 180, 190, 250),
    ]
}

pub fn train_schedule() -> Vec<TrainScheduleEntry> {
    vec![
        train("T001", "Aluva → Pettah", "06:15", "06:45", TrainStatus::OnTime, 245, 300),
        train("T002", "Pettah → Aluva", "06:20", "06:50", TrainStatus::OnTime, 180, 300),
        train(
            "T003",
            "Aluva → Pettah",
            "06:25",
            "06:55",
            TrainStatus::Delayed { minutes: 3 },
            220,
            300,
        ),
        train("T004", "Pettah → Aluva", "06:30", "07:00", TrainStatus::OnTime, 195, 300),
        train("T005", "Aluva → Pettah", "06:35", "07:05", TrainStatus::OnTime, 160, 300),
    ]
}

pub fn alerts() -> Vec<AlertEntry> {
    let alert = |id, kind, message: &str, relative_time: &str, priority, station: &str| AlertEntry {
        id,
        kind,
        message: message.to_string(),
        relative_time: relative_time.to_string(),
        priority,
        category: None,
        station: Some(station.to_string()),
    };
    vec![
        alert(
            1,
            AlertKind::Warning,
            "Peak load expected at Ernakulam South at 6 PM",
            "2 min ago",
            AlertPriority::High,
            "Ernakulam South",
        ),
        alert(
            2,
            AlertKind::Info,
            "Train T003 delayed by 3 minutes due to passenger boarding",
            "5 min ago",
            AlertPriority::Medium,
            "Kaloor",
        ),
        alert(
            3,
            AlertKind::Success,
            "All trains running smoothly on Blue Line",
            "10 min ago",
            AlertPriority::Low,
            "System Wide",
        ),
        alert(
            4,
            AlertKind::Warning,
            "High passenger density at MG Road station",
            "15 min ago",
            AlertPriority::High,
            "MG Road",
        ),
    ]
}

pub fn metrics() -> OperationsMetrics {
    OperationsMetrics {
        active_trains: 18,
        on_time_performance: 94.2,
        current_passengers: 2840,
        energy_efficiency: 87.5,
        average_delay_minutes: 2.3,
        system_status: "Operational".to_string(),
    }
}

/// The complete bundle the operations dashboard mounts with.
pub fn bundle() -> OperationsBundle {
    OperationsBundle {
        passenger_samples: passenger_samples(),
        train_schedule: train_schedule(),
        alerts: alerts(),
        metrics: metrics(),
    }
}
