//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_board, output_history, output_stats, output_vehicles};
use frotas_app::repository::open_yard_store;
use frotas_app::{default_report_name, export_report, Config, FleetFilter};
use frotas_store::YardStore;
use frotas_types::{OutputFormat, Priority, Result, YardSettings};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    let mut store = open_yard_store(&config)?;

    match &cli.command {
        Commands::Add { plate, priority } => cmd_add(&mut store, plate, *priority),

        Commands::Assign { plate, ramp } => cmd_assign(&mut store, plate, *ramp),

        Commands::Return { plate } => cmd_return(&mut store, plate),

        Commands::Load { plate } => cmd_load(&mut store, plate),

        Commands::Dispatch { plate } => cmd_dispatch(&mut store, plate),

        Commands::Block { ramp } => cmd_block(&mut store, *ramp, true),

        Commands::Unblock { ramp } => cmd_block(&mut store, *ramp, false),

        Commands::Board => output_board(output_format, &store),

        Commands::List {
            status,
            priority,
            bay,
            search,
        } => {
            let filter = FleetFilter {
                search: search.clone().unwrap_or_default(),
                status: *status,
                priority: *priority,
                bay: *bay,
            };
            let vehicles = filter.apply(store.vehicles());
            output_vehicles(output_format, &vehicles)
        }

        Commands::History { limit } => {
            let movements: Vec<_> = store.movements().into_iter().take(*limit).collect();
            output_history(output_format, &movements)
        }

        Commands::Stats => output_stats(output_format, &store.stats()),

        Commands::Export { output } => cmd_export(&store, output.clone()),

        Commands::Config {
            show,
            set_bays,
            set_ramps_per_bay,
            set_alert,
            set_output,
            reset,
        } => cmd_config(
            &mut store,
            &mut config,
            *show,
            *set_bays,
            *set_ramps_per_bay,
            *set_alert,
            *set_output,
            *reset,
        ),
    }
}

fn cmd_add(store: &mut YardStore, plate: &str, priority: Priority) -> Result<()> {
    let vehicle = store.add_vehicle(plate, priority)?;
    println!(
        "Frota {} adicionada ao pátio (prioridade {})",
        vehicle.plate, vehicle.priority
    );
    Ok(())
}

fn cmd_assign(store: &mut YardStore, plate: &str, ramp: u32) -> Result<()> {
    let vehicle = store.assign(plate, ramp)?;
    println!(
        "Frota {} alocada na Rampa {}, Vão {}",
        vehicle.plate,
        vehicle.ramp.unwrap_or(0),
        vehicle.bay.unwrap_or(0)
    );
    Ok(())
}

fn cmd_return(store: &mut YardStore, plate: &str) -> Result<()> {
    let vehicle = store.return_to_yard(plate)?;
    println!("Frota {} retornou ao pátio", vehicle.plate);
    Ok(())
}

fn cmd_load(store: &mut YardStore, plate: &str) -> Result<()> {
    let loaded = store.toggle_loaded(plate)?;
    if loaded {
        println!("Frota marcada como carregada");
    } else {
        println!("Carregamento removido");
    }
    Ok(())
}

fn cmd_dispatch(store: &mut YardStore, plate: &str) -> Result<()> {
    let vehicle = store.dispatch(plate)?;
    println!(
        "Frota {} despachada da Rampa {}, Vão {} ({}m de carregamento)",
        vehicle.plate,
        vehicle.dispatch_ramp.unwrap_or(0),
        vehicle.dispatch_bay.unwrap_or(0),
        vehicle.loading_minutes.unwrap_or(0)
    );
    Ok(())
}

fn cmd_block(store: &mut YardStore, ramp: u32, blocked: bool) -> Result<()> {
    store.set_ramp_blocked(ramp, blocked)?;
    if blocked {
        println!("Rampa {} bloqueada", ramp);
    } else {
        println!("Rampa {} desbloqueada", ramp);
    }
    Ok(())
}

fn cmd_export(store: &YardStore, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(default_report_name()));
    export_report(store.vehicles(), &path)?;
    println!("Relatório exportado: {}", path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    store: &mut YardStore,
    config: &mut Config,
    show: bool,
    set_bays: Option<u32>,
    set_ramps_per_bay: Option<u32>,
    set_alert: Option<i64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        store.update_settings(YardSettings::default())?;
        *config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut settings_changed = false;
    let mut settings = store.settings().clone();

    if let Some(bays) = set_bays {
        settings.total_bays = bays;
        settings_changed = true;
    }
    if let Some(ramps) = set_ramps_per_bay {
        settings.ramps_per_bay = ramps;
        settings_changed = true;
    }
    if let Some(alert) = set_alert {
        settings.alert_minutes = alert;
        settings_changed = true;
    }
    if settings_changed {
        store.update_settings(settings)?;
        println!("Yard settings updated");
    }

    if let Some(format) = set_output {
        config.output_format = format;
        config.save()?;
        println!("Output format set to {}", format);
    }

    if show || (!settings_changed && set_output.is_none()) {
        println!("{}", config);
        let settings = store.settings();
        println!("Yard settings");
        println!("=============");
        println!("Total bays:     {}", settings.total_bays);
        println!("Ramps per bay:  {}", settings.ramps_per_bay);
        println!("Alert minutes:  {}", settings.alert_minutes);
        println!("Dark mode:      {}", settings.dark_mode);
    }

    Ok(())
}
