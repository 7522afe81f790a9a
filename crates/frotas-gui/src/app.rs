//! Main application structure with tab navigation

use eframe::egui::{self, Key};
use frotas_app::repository::open_yard_store;
use frotas_app::{default_report_name, export_report, Config};
use frotas_store::YardStore;

use crate::board_panel::BoardPanel;
use crate::history_panel::HistoryPanel;
use crate::settings_panel::SettingsPanel;
use crate::stats_panel::StatsPanel;
use crate::yard_panel::YardPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Board,
    Yard,
    History,
    Stats,
    Settings,
}

impl Tab {
    /// Portuguese label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Board => "Rampas",
            Tab::Yard => "Pátio",
            Tab::History => "Histórico",
            Tab::Stats => "Estatísticas",
            Tab::Settings => "Configurações",
        }
    }
}

/// Main application state
pub struct FrotasApp {
    /// Currently selected tab
    current_tab: Tab,
    board_panel: BoardPanel,
    yard_panel: YardPanel,
    history_panel: HistoryPanel,
    stats_panel: StatsPanel,
    settings_panel: SettingsPanel,
    /// Application configuration
    config: Config,
    /// Persistent yard store shared by all panels
    store: YardStore,
    /// Dark mode as last applied to the egui context
    applied_dark: Option<bool>,
}

impl FrotasApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Faster tooltips and animations for dashboard use
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        // Load configuration
        let config = Config::load().unwrap_or_default();

        // Open the store, falling back to a temp directory
        let store = open_yard_store(&config).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("frotas-checker-fallback");
            YardStore::open(fallback_dir).expect("Failed to create fallback store")
        });

        let settings_panel = SettingsPanel::new(store.settings());

        Self {
            current_tab: Tab::default(),
            board_panel: BoardPanel::new(),
            yard_panel: YardPanel::new(),
            history_panel: HistoryPanel::new(),
            stats_panel: StatsPanel::new(),
            settings_panel,
            config,
            store,
            applied_dark: None,
        }
    }

    /// Apply dark/light visuals when the persisted flag changes
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let dark = self.store.settings().dark_mode;
        if self.applied_dark != Some(dark) {
            ctx.set_visuals(if dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.applied_dark = Some(dark);
        }
    }

    /// Global keyboard shortcuts, suppressed while typing in a field
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (add, search, export, dark) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                cmd && i.key_pressed(Key::N),
                cmd && i.key_pressed(Key::F),
                cmd && i.key_pressed(Key::E),
                cmd && i.key_pressed(Key::D),
            )
        });

        if add {
            self.current_tab = Tab::Yard;
            self.yard_panel.request_add_focus();
        }
        if search {
            self.current_tab = Tab::Yard;
            self.yard_panel.request_search_focus();
        }
        if export {
            let message = export_with_dialog(&self.store);
            self.settings_panel.set_status(message);
            self.current_tab = Tab::Settings;
        }
        if dark {
            let mut settings = self.store.settings().clone();
            settings.dark_mode = !settings.dark_mode;
            if let Err(e) = self.store.update_settings(settings) {
                eprintln!("Failed to persist dark mode: {}", e);
            }
        }
    }
}

impl eframe::App for FrotasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Gestão de Frotas");
                ui.separator();
                for tab in [Tab::Board, Tab::Yard, Tab::History, Tab::Stats, Tab::Settings] {
                    ui.selectable_value(&mut self.current_tab, tab, tab.label());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Board => self.board_panel.ui(ui, &mut self.store),
            Tab::Yard => self.yard_panel.ui(ui, &mut self.store),
            Tab::History => self.history_panel.ui(ui, &self.store),
            Tab::Stats => self.stats_panel.ui(ui, &self.store),
            Tab::Settings => {
                self.settings_panel
                    .ui(ui, &mut self.store, &mut self.config)
            }
        });
    }
}

/// Export the fleet report via a save dialog; returns a status message
pub fn export_with_dialog(store: &YardStore) -> Option<(String, bool)> {
    let path = rfd::FileDialog::new()
        .set_file_name(default_report_name())
        .add_filter("CSV", &["csv"])
        .save_file()?;

    match export_report(store.vehicles(), &path) {
        Ok(()) => Some((format!("Relatório exportado: {}", path.display()), false)),
        Err(e) => Some((format!("Falha ao exportar: {}", e), true)),
    }
}
