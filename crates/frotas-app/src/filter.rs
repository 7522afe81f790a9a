//! Fleet list filtering (search + status/priority/bay)

use frotas_types::{Priority, Vehicle, VehicleStatus};

/// Active filters over the vehicle list
#[derive(Debug, Clone, Default)]
pub struct FleetFilter {
    /// Case-insensitive plate substring
    pub search: String,
    pub status: Option<VehicleStatus>,
    pub priority: Option<Priority>,
    pub bay: Option<u32>,
}

impl FleetFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.status.is_some()
            || self.priority.is_some()
            || self.bay.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let search = self.search.trim();
        if !search.is_empty()
            && !vehicle
                .plate
                .to_uppercase()
                .contains(&search.to_uppercase())
        {
            return false;
        }
        if let Some(status) = self.status {
            if vehicle.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if vehicle.priority != priority {
                return false;
            }
        }
        if let Some(bay) = self.bay {
            if vehicle.bay != Some(bay) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fleet() -> Vec<Vehicle> {
        let now = Utc::now();
        let mut a = Vehicle::new("ABC-1234", Priority::High, now);
        a.status = VehicleStatus::Ramp;
        a.ramp = Some(5);
        a.bay = Some(2);
        let b = Vehicle::new("DEF-5678", Priority::Low, now);
        vec![a, b]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let vehicles = fleet();
        let filter = FleetFilter {
            search: "abc".into(),
            ..Default::default()
        };
        let hits = filter.apply(&vehicles);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].plate, "ABC-1234");
    }

    #[test]
    fn test_combined_filters() {
        let vehicles = fleet();
        let filter = FleetFilter {
            status: Some(VehicleStatus::Ramp),
            bay: Some(2),
            ..Default::default()
        };
        assert_eq!(filter.apply(&vehicles).len(), 1);

        let filter = FleetFilter {
            status: Some(VehicleStatus::Ramp),
            priority: Some(Priority::Low),
            ..Default::default()
        };
        assert!(filter.apply(&vehicles).is_empty());
    }

    #[test]
    fn test_clear_deactivates() {
        let mut filter = FleetFilter {
            search: "x".into(),
            bay: Some(1),
            ..Default::default()
        };
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&fleet()).len(), 2);
    }
}
