//! Core record types for the yard dashboard
//!
//! Serde renames keep the on-disk JSON compatible with the Portuguese
//! field values used by the legacy dashboard exports.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where a vehicle currently is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Holding area for unassigned vehicles (pátio)
    #[default]
    #[serde(rename = "patio")]
    Yard,
    /// Parked at a loading ramp
    #[serde(rename = "rampa")]
    Ramp,
    /// Departed after loading; no transition out of this state
    #[serde(rename = "despachada")]
    Dispatched,
}

impl VehicleStatus {
    /// Portuguese display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Yard => "pátio",
            VehicleStatus::Ramp => "rampa",
            VehicleStatus::Dispatched => "despachada",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Loading priority for yard queue ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "alta")]
    High,
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "baixa")]
    Low,
}

impl Priority {
    /// Sort weight, higher loads first
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Normal => 2,
            Priority::Low => 1,
        }
    }

    /// Portuguese display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "alta",
            Priority::Normal => "normal",
            Priority::Low => "baixa",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A tracked fleet vehicle
///
/// `ramp`/`bay` are populated only while the status is [`VehicleStatus::Ramp`];
/// `dispatch_ramp`/`dispatch_bay` only once dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier (uuid v4)
    pub id: String,

    /// Normalized license plate (e.g. "ABC-1234" or "ABC1D23")
    pub plate: String,

    pub status: VehicleStatus,

    /// Ramp currently occupied
    #[serde(default)]
    pub ramp: Option<u32>,

    /// Bay of the occupied ramp
    #[serde(default)]
    pub bay: Option<u32>,

    /// Loading complete flag, meaningful only while on a ramp
    #[serde(default)]
    pub loaded: bool,

    /// Ramp the vehicle departed from
    #[serde(default)]
    pub dispatch_ramp: Option<u32>,

    /// Bay the vehicle departed from
    #[serde(default)]
    pub dispatch_bay: Option<u32>,

    #[serde(default)]
    pub priority: Priority,

    pub created_at: DateTime<Utc>,

    /// Updated on every status transition
    pub last_moved_at: DateTime<Utc>,

    /// Minutes spent loading, recorded at dispatch
    #[serde(default)]
    pub loading_minutes: Option<i64>,
}

impl Vehicle {
    /// Create a new vehicle in the yard
    pub fn new(plate: impl Into<String>, priority: Priority, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plate: plate.into(),
            status: VehicleStatus::Yard,
            ramp: None,
            bay: None,
            loaded: false,
            dispatch_ramp: None,
            dispatch_bay: None,
            priority,
            created_at: now,
            last_moved_at: now,
            loading_minutes: None,
        }
    }
}

/// Explicit block flag for a ramp
///
/// Exists only once the ramp has been blocked at least once; a missing
/// record means unblocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampBlock {
    pub ramp: u32,
    pub bay: u32,
    pub blocked: bool,
}

/// Action recorded in the movement log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementAction {
    #[serde(rename = "criada")]
    Created,
    #[serde(rename = "alocada")]
    Assigned,
    #[serde(rename = "removida")]
    Returned,
    #[serde(rename = "carregada")]
    Loaded,
    #[serde(rename = "despachada")]
    Dispatched,
    #[serde(rename = "bloqueio")]
    Blocked,
    #[serde(rename = "desbloqueio")]
    Unblocked,
}

impl MovementAction {
    /// Portuguese display label
    pub fn label(&self) -> &'static str {
        match self {
            MovementAction::Created => "criada",
            MovementAction::Assigned => "alocada",
            MovementAction::Returned => "removida",
            MovementAction::Loaded => "carregada",
            MovementAction::Dispatched => "despachada",
            MovementAction::Blocked => "bloqueio",
            MovementAction::Unblocked => "desbloqueio",
        }
    }
}

impl std::fmt::Display for MovementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Append-only movement log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    pub id: String,

    /// Empty for ramp block/unblock entries
    #[serde(default)]
    pub vehicle_id: String,

    /// Plate at the time of the action
    #[serde(default)]
    pub plate: String,

    pub action: MovementAction,

    /// Free-text description shown in the history view
    pub details: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub ramp: Option<u32>,

    #[serde(default)]
    pub bay: Option<u32>,
}

impl Movement {
    /// Entry for a vehicle action
    pub fn for_vehicle(
        vehicle: &Vehicle,
        action: MovementAction,
        details: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id: vehicle.id.clone(),
            plate: vehicle.plate.clone(),
            action,
            details: details.into(),
            timestamp: now,
            ramp: vehicle.ramp,
            bay: vehicle.bay,
        }
    }

    /// Entry for a ramp block/unblock, not tied to any vehicle
    pub fn for_ramp(
        ramp: u32,
        bay: u32,
        action: MovementAction,
        details: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id: String::new(),
            plate: String::new(),
            action,
            details: details.into(),
            timestamp: now,
            ramp: Some(ramp),
            bay: Some(bay),
        }
    }
}

/// Yard-wide settings, persisted with the rest of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YardSettings {
    /// Number of bays (vãos)
    #[serde(default = "default_total_bays")]
    pub total_bays: u32,

    /// Ramps per bay
    #[serde(default = "default_ramps_per_bay")]
    pub ramps_per_bay: u32,

    /// Minutes without movement before a vehicle is flagged
    #[serde(default = "default_alert_minutes")]
    pub alert_minutes: i64,

    #[serde(default)]
    pub dark_mode: bool,
}

fn default_total_bays() -> u32 {
    4
}

fn default_ramps_per_bay() -> u32 {
    4
}

fn default_alert_minutes() -> i64 {
    120
}

impl Default for YardSettings {
    fn default() -> Self {
        Self {
            total_bays: default_total_bays(),
            ramps_per_bay: default_ramps_per_bay(),
            alert_minutes: default_alert_minutes(),
            dark_mode: false,
        }
    }
}

impl YardSettings {
    /// Total ramp count across all bays
    pub fn total_ramps(&self) -> u32 {
        self.total_bays * self.ramps_per_bay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_uses_portuguese_values() {
        let json = serde_json::to_string(&VehicleStatus::Dispatched).unwrap();
        assert_eq!(json, "\"despachada\"");
        let back: VehicleStatus = serde_json::from_str("\"patio\"").unwrap();
        assert_eq!(back, VehicleStatus::Yard);
    }

    #[test]
    fn test_priority_ordering_weight() {
        assert!(Priority::High.weight() > Priority::Normal.weight());
        assert!(Priority::Normal.weight() > Priority::Low.weight());
    }

    #[test]
    fn test_default_settings_match_legacy() {
        let settings = YardSettings::default();
        assert_eq!(settings.total_bays, 4);
        assert_eq!(settings.ramps_per_bay, 4);
        assert_eq!(settings.alert_minutes, 120);
        assert_eq!(settings.total_ramps(), 16);
        assert!(!settings.dark_mode);
    }
}
