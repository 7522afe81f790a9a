//! Output formatting module

use chrono::{Local, Utc};
use frotas_domain::{elapsed_since, format_minutes, ramps_of_bay, YardStats};
use frotas_store::YardStore;
use frotas_types::{Movement, OutputFormat, Result, Vehicle};
use serde::Serialize;

/// One slot on the board, for JSON output
#[derive(Debug, Serialize)]
struct RampSlot {
    ramp: u32,
    bay: u32,
    blocked: bool,
    plate: Option<String>,
    loaded: bool,
}

pub fn output_board(output_format: OutputFormat, store: &YardStore) -> Result<()> {
    let settings = store.settings();

    if output_format == OutputFormat::Json {
        let slots: Vec<RampSlot> = (1..=settings.total_ramps())
            .map(|ramp| {
                let occupant = store.vehicle_at(ramp);
                RampSlot {
                    ramp,
                    bay: frotas_domain::bay_of_ramp(ramp, settings.ramps_per_bay),
                    blocked: store.is_blocked(ramp),
                    plate: occupant.map(|v| v.plate.clone()),
                    loaded: occupant.map(|v| v.loaded).unwrap_or(false),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("\nVãos e Rampas");
    println!("=============");
    for bay in 1..=settings.total_bays {
        println!("\nVão {}", bay);
        for ramp in ramps_of_bay(bay, settings.ramps_per_bay) {
            let state = if let Some(v) = store.vehicle_at(ramp) {
                if v.loaded {
                    format!("{} (carregada)", v.plate)
                } else {
                    v.plate.clone()
                }
            } else if store.is_blocked(ramp) {
                "bloqueada".to_string()
            } else {
                "livre".to_string()
            };
            println!("  Rampa {:>2}: {}", ramp, state);
        }
    }
    println!();

    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("Nenhuma frota encontrada");
        return Ok(());
    }

    let now = Utc::now();
    println!(
        "{:<10} {:<11} {:<11} {:>8} {:>6} {:>4} {:<9}",
        "PLACA", "STATUS", "PRIORIDADE", "TEMPO", "RAMPA", "VÃO", "CARREGADA"
    );
    for v in vehicles {
        println!(
            "{:<10} {:<11} {:<11} {:>8} {:>6} {:>4} {:<9}",
            v.plate,
            v.status.label(),
            v.priority.label(),
            elapsed_since(v.last_moved_at, now),
            v.ramp.map(|r| r.to_string()).unwrap_or_else(|| "-".into()),
            v.bay.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
            if v.loaded { "sim" } else { "não" },
        );
    }

    Ok(())
}

pub fn output_history(output_format: OutputFormat, movements: &[&Movement]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&movements)?);
        return Ok(());
    }

    if movements.is_empty() {
        println!("Nenhuma movimentação registrada");
        return Ok(());
    }

    for m in movements {
        let when = m.timestamp.with_timezone(&Local).format("%d/%m/%Y %H:%M");
        if m.plate.is_empty() {
            println!("{}  {:<12} {}", when, m.action.label(), m.details);
        } else {
            println!("{}  {:<12} {:<10} {}", when, m.action.label(), m.plate, m.details);
        }
    }

    Ok(())
}

pub fn output_stats(output_format: OutputFormat, stats: &YardStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("\nEstatísticas do Pátio");
    println!("=====================");
    println!("Total de frotas:      {}", stats.total);
    println!("No pátio:             {}", stats.in_yard);
    println!("Em rampas:            {}", stats.on_ramp);
    println!("Despachadas:          {}", stats.dispatched);
    println!("Carregadas:           {}", stats.loaded);
    println!("Rampas livres:        {}", stats.free_ramps);
    println!();
    println!("Despachadas hoje:     {}", stats.dispatched_today);
    println!(
        "Tempo médio:          {}",
        format_minutes(stats.mean_loading_minutes)
    );
    println!("Produtividade/vão:    {:.1}", stats.productivity_per_bay);
    println!("Ocupação:             {}%", stats.occupancy_percent);
    println!("Movimentações hoje:   {}", stats.movements_today);

    Ok(())
}
