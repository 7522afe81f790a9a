//! Statistics panel

use eframe::egui::{self, RichText, Ui};
use frotas_domain::format_minutes;
use frotas_store::YardStore;

pub struct StatsPanel;

impl StatsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &YardStore) {
        ui.heading("Estatísticas");
        ui.add_space(10.0);

        let stats = store.stats();

        egui::Grid::new("stats_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                stat_row(ui, "Total de frotas", stats.total.to_string());
                stat_row(ui, "No pátio", stats.in_yard.to_string());
                stat_row(ui, "Em rampas", stats.on_ramp.to_string());
                stat_row(ui, "Despachadas", stats.dispatched.to_string());
                stat_row(ui, "Carregadas", stats.loaded.to_string());
                stat_row(ui, "Rampas livres", stats.free_ramps.to_string());
            });

        ui.add_space(16.0);
        ui.label(RichText::new("Hoje").strong());
        ui.add_space(4.0);

        egui::Grid::new("stats_today_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                stat_row(ui, "Despachadas hoje", stats.dispatched_today.to_string());
                stat_row(
                    ui,
                    "Tempo médio de carregamento",
                    format_minutes(stats.mean_loading_minutes),
                );
                stat_row(
                    ui,
                    "Produtividade por vão",
                    format!("{:.1}", stats.productivity_per_bay),
                );
                stat_row(ui, "Ocupação", format!("{}%", stats.occupancy_percent));
                stat_row(
                    ui,
                    "Movimentações hoje",
                    stats.movements_today.to_string(),
                );
            });
    }
}

fn stat_row(ui: &mut Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(RichText::new(value).strong());
    ui.end_row();
}
