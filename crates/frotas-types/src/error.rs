//! Error types for frotas-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Rejected state transitions.
///
/// Assignment and blocking legality is enforced here, at the mutation
/// layer, rather than by filtering options in the UI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Placa não pode estar vazia")]
    EmptyPlate,

    #[error("Formato inválido. Use ABC-1234 ou ABC1D23")]
    InvalidPlate(String),

    #[error("Frota com placa {0} já cadastrada")]
    DuplicatePlate(String),

    #[error("Frota não encontrada: {0}")]
    VehicleNotFound(String),

    #[error("Frota {0} não está no pátio")]
    NotInYard(String),

    #[error("Frota {0} não está em uma rampa")]
    NotOnRamp(String),

    #[error("Frota {0} não está carregada")]
    NotLoaded(String),

    #[error("Rampa {ramp} não existe (1..={total})")]
    RampOutOfRange { ramp: u32, total: u32 },

    #[error("Rampa {ramp} (Vão {bay}) já está ocupada")]
    RampOccupied { ramp: u32, bay: u32 },

    #[error("Rampa {ramp} (Vão {bay}) está bloqueada")]
    RampBlocked { ramp: u32, bay: u32 },

    #[error("Rampa {ramp} não está bloqueada")]
    RampNotBlocked { ramp: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Transition(#[from] TransitionError),
}

pub type Result<T> = std::result::Result<T, Error>;
