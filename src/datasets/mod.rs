//! Canonical literal tables backing every dashboard mode.
//!
//! Each function rebuilds its table from scratch on every call: datasets are
//! replaced wholesale on mode switches and refreshes, never patched in
//! place, so nothing here hands out shared state.

pub mod admin;
pub mod festival;
pub mod issues;
pub mod operations;
pub mod simulation;
pub mod stations;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainStatus;

    #[test]
    fn admin_normal_headline_metrics() {
        let metrics = admin::metrics();
        assert_eq!(metrics.total_trains, 24);
        assert_eq!(metrics.on_time_performance, 94.2);
        assert_eq!(metrics.total_users, Some(156));
        assert_eq!(metrics.cost_savings, Some(23.5));
    }

    #[test]
    fn operations_headline_metrics() {
        let metrics = operations::metrics();
        assert_eq!(metrics.active_trains, 18);
        assert_eq!(metrics.current_passengers, 2840);
        assert_eq!(metrics.system_status, "Operational");
    }

    #[test]
    fn passenger_curves_span_the_service_day() {
        for samples in [
            admin::passenger_samples(),
            operations::passenger_samples(),
            simulation::passenger_samples(),
            festival::passenger_samples(),
        ] {
            assert_eq!(samples.len(), 18);
            assert_eq!(samples.first().unwrap().time_label, "5 AM");
            assert_eq!(samples.last().unwrap().time_label, "10 PM");
        }
    }

    #[test]
    fn simulation_and_festival_tables_have_no_capacity_column() {
        assert!(simulation::passenger_samples()
            .iter()
            .all(|s| s.capacity.is_none() && s.efficiency_pct.is_none()));
        assert!(festival::passenger_samples()
            .iter()
            .all(|s| s.capacity.is_none() && s.efficiency_pct.is_none()));
    }

    #[test]
    fn festival_schedule_contains_special_express() {
        let schedule = festival::train_schedule();
        assert_eq!(schedule.len(), 8);
        let f004 = schedule.iter().find(|t| t.id == "F004").unwrap();
        assert_eq!(f004.route, "Festival Special Express");
        assert_eq!(f004.passengers, 295);
        assert_eq!(f004.capacity, 300);
        assert_eq!(f004.status, TrainStatus::OnTime);
    }

    #[test]
    fn simulation_schedule_keeps_one_early_run() {
        let schedule = simulation::train_schedule();
        assert_eq!(schedule.len(), 7);
        let t004 = schedule.iter().find(|t| t.id == "T004").unwrap();
        assert_eq!(t004.status, TrainStatus::Early { minutes: 2 });
    }

    #[test]
    fn energy_split_sums_to_one_hundred() {
        let split = admin::energy_breakdown();
        assert_eq!(split.saved_pct, 18);
        assert_eq!(split.saved_pct + split.standard_pct, 100);
    }

    #[test]
    fn cost_table_covers_first_half_year() {
        let costs = admin::cost_samples();
        assert_eq!(costs.len(), 6);
        assert_eq!(costs[0].month, "Jan");
        assert_eq!(costs[0].traditional_cost, 2400);
        assert_eq!(costs[5].savings, 700);
    }

    #[test]
    fn station_table_has_all_line_one_stations() {
        let stations = stations::station_loads();
        assert_eq!(stations.len(), 22);
        assert_eq!(stations[0].name, "Aluva");
        assert_eq!(stations[21].name, "Pettah");
    }
}
