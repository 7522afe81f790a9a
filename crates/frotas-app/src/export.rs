//! CSV report export
//!
//! One row per vehicle, matching the legacy dashboard report columns.

use chrono::{DateTime, Local, Utc};
use frotas_domain::elapsed_since;
use frotas_types::{Result, Vehicle};
use std::path::Path;

/// Default report file name for the current date
pub fn default_report_name() -> String {
    format!("relatorio-frotas-{}.csv", Local::now().format("%Y-%m-%d"))
}

/// Write the fleet report to `path`
pub fn export_report(vehicles: &[Vehicle], path: &Path) -> Result<()> {
    export_report_at(vehicles, path, Utc::now())
}

fn export_report_at(vehicles: &[Vehicle], path: &Path, now: DateTime<Utc>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "Placa",
        "Status",
        "Prioridade",
        "Tempo Decorrido",
        "Rampa",
        "Vão",
        "Carregada",
        "Criado Em",
    ])?;

    for vehicle in vehicles {
        writer.write_record(&[
            vehicle.plate.clone(),
            vehicle.status.label().to_string(),
            vehicle.priority.label().to_string(),
            elapsed_since(vehicle.last_moved_at, now),
            vehicle.ramp.map(|r| r.to_string()).unwrap_or_default(),
            vehicle.bay.map(|b| b.to_string()).unwrap_or_default(),
            if vehicle.loaded { "Sim" } else { "Não" }.to_string(),
            vehicle
                .created_at
                .with_timezone(&Local)
                .format("%d/%m/%Y %H:%M")
                .to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use frotas_types::{Priority, VehicleStatus};
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_header_and_rows() {
        let now = Utc::now();
        let mut vehicle = Vehicle::new("ABC-1234", Priority::High, now);
        vehicle.status = VehicleStatus::Ramp;
        vehicle.ramp = Some(5);
        vehicle.bay = Some(2);
        vehicle.loaded = true;

        let dir = tempdir().unwrap();
        let path = dir.path().join("relatorio.csv");
        export_report_at(&[vehicle], &path, now).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Placa,Status,Prioridade,Tempo Decorrido,Rampa,Vão,Carregada,Criado Em"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("ABC-1234,rampa,alta,0m,5,2,Sim,"));
    }

    #[test]
    fn test_default_report_name_carries_date() {
        let name = default_report_name();
        assert!(name.starts_with("relatorio-frotas-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_export_empty_fields_for_yard_vehicle() {
        let now = Utc::now();
        let vehicle = Vehicle::new("ABC1D23", Priority::Normal, now);

        let dir = tempdir().unwrap();
        let path = dir.path().join("relatorio.csv");
        export_report_at(&[vehicle], &path, now).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with("ABC1D23,pátio,normal,0m,,,Não,"));
    }
}
