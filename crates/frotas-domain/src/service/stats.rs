//! Yard statistics
//!
//! Headline counts plus the advanced metrics from the dashboard:
//! dispatches today, mean loading time, productivity per bay and ramp
//! occupancy.

use chrono::{DateTime, Local, Utc};
use frotas_types::{Movement, MovementAction, Vehicle, VehicleStatus, YardSettings};
use serde::Serialize;

/// Computed dashboard statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct YardStats {
    pub total: usize,
    pub in_yard: usize,
    pub on_ramp: usize,
    pub dispatched: usize,
    pub loaded: usize,
    pub free_ramps: u32,

    /// Dispatches whose log entry falls on the current local day
    pub dispatched_today: usize,

    /// Mean of recorded loading durations, zero when none recorded
    pub mean_loading_minutes: i64,

    /// Dispatches today divided by bay count, one decimal
    pub productivity_per_bay: f64,

    /// Occupied ramps as a rounded percentage of the grid
    pub occupancy_percent: u32,

    pub movements_today: usize,
}

impl YardStats {
    pub fn compute(
        vehicles: &[Vehicle],
        movements: &[Movement],
        settings: &YardSettings,
        now: DateTime<Utc>,
    ) -> Self {
        let today = now.with_timezone(&Local).date_naive();
        let is_today =
            |ts: DateTime<Utc>| ts.with_timezone(&Local).date_naive() == today;

        let in_yard = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Yard)
            .count();
        let on_ramp = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Ramp)
            .count();
        let dispatched = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Dispatched)
            .count();
        let loaded = vehicles.iter().filter(|v| v.loaded).count();

        let total_ramps = settings.total_ramps();
        let free_ramps = total_ramps.saturating_sub(on_ramp as u32);

        let movements_today = movements.iter().filter(|m| is_today(m.timestamp)).count();
        let dispatched_today = movements
            .iter()
            .filter(|m| m.action == MovementAction::Dispatched && is_today(m.timestamp))
            .count();

        let durations: Vec<i64> = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Dispatched)
            .filter_map(|v| v.loading_minutes)
            .collect();
        let mean_loading_minutes = if durations.is_empty() {
            0
        } else {
            let sum: i64 = durations.iter().sum();
            (sum as f64 / durations.len() as f64).round() as i64
        };

        let productivity_per_bay = if settings.total_bays > 0 {
            (dispatched_today as f64 / settings.total_bays as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        let occupancy_percent = if total_ramps > 0 {
            (on_ramp as f64 / total_ramps as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total: vehicles.len(),
            in_yard,
            on_ramp,
            dispatched,
            loaded,
            free_ramps,
            dispatched_today,
            mean_loading_minutes,
            productivity_per_bay,
            occupancy_percent,
            movements_today,
        }
    }
}

/// Whether a vehicle has sat unmoved past the alert threshold
pub fn is_overdue(vehicle: &Vehicle, settings: &YardSettings, now: DateTime<Utc>) -> bool {
    (now - vehicle.last_moved_at).num_minutes() > settings.alert_minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use frotas_types::Priority;

    fn vehicle(status: VehicleStatus, loaded: bool, loading_minutes: Option<i64>) -> Vehicle {
        let mut v = Vehicle::new("ABC-1234", Priority::Normal, Utc::now());
        v.status = status;
        v.loaded = loaded;
        v.loading_minutes = loading_minutes;
        v
    }

    #[test]
    fn test_counts_and_occupancy() {
        let vehicles = vec![
            vehicle(VehicleStatus::Yard, false, None),
            vehicle(VehicleStatus::Ramp, true, None),
            vehicle(VehicleStatus::Ramp, false, None),
            vehicle(VehicleStatus::Dispatched, true, Some(30)),
        ];
        let settings = YardSettings::default();
        let stats = YardStats::compute(&vehicles, &[], &settings, Utc::now());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.in_yard, 1);
        assert_eq!(stats.on_ramp, 2);
        assert_eq!(stats.dispatched, 1);
        assert_eq!(stats.loaded, 2);
        assert_eq!(stats.free_ramps, 14);
        // 2 of 16 ramps
        assert_eq!(stats.occupancy_percent, 13);
    }

    #[test]
    fn test_mean_loading_minutes() {
        let vehicles = vec![
            vehicle(VehicleStatus::Dispatched, true, Some(30)),
            vehicle(VehicleStatus::Dispatched, true, Some(61)),
            vehicle(VehicleStatus::Dispatched, true, None),
        ];
        let settings = YardSettings::default();
        let stats = YardStats::compute(&vehicles, &[], &settings, Utc::now());
        assert_eq!(stats.mean_loading_minutes, 46);
    }

    #[test]
    fn test_dispatched_today_drives_productivity() {
        let now = Utc::now();
        let v = vehicle(VehicleStatus::Dispatched, true, Some(10));
        let movements = vec![
            Movement::for_vehicle(&v, MovementAction::Dispatched, "hoje", now),
            Movement::for_vehicle(
                &v,
                MovementAction::Dispatched,
                "semana passada",
                now - Duration::days(7),
            ),
        ];
        let settings = YardSettings::default();
        let stats = YardStats::compute(&[v.clone()], &movements, &settings, now);

        assert_eq!(stats.dispatched_today, 1);
        assert_eq!(stats.movements_today, 1);
        assert!((stats.productivity_per_bay - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_overdue_threshold() {
        let settings = YardSettings::default();
        let now = Utc::now();
        let mut v = vehicle(VehicleStatus::Yard, false, None);

        v.last_moved_at = now - Duration::minutes(119);
        assert!(!is_overdue(&v, &settings, now));

        v.last_moved_at = now - Duration::minutes(121);
        assert!(is_overdue(&v, &settings, now));
    }
}
