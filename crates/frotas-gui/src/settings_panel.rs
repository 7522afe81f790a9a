//! Settings panel: yard layout, alert threshold, theme and CSV export

use eframe::egui::{self, Color32, RichText, Ui};
use frotas_app::Config;
use frotas_store::YardStore;
use frotas_types::YardSettings;

pub struct SettingsPanel {
    /// Edited copy of the persisted settings
    draft: YardSettings,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl SettingsPanel {
    pub fn new(settings: &YardSettings) -> Self {
        Self {
            draft: settings.clone(),
            status_message: None,
        }
    }

    /// Show a status message, e.g. from the Ctrl+E export shortcut
    pub fn set_status(&mut self, message: Option<(String, bool)>) {
        if message.is_some() {
            self.status_message = message;
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &mut YardStore, config: &mut Config) {
        ui.heading("Configurações");
        ui.add_space(10.0);

        ui.label(RichText::new("Layout do pátio").strong());
        ui.add_space(4.0);

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label("Total de vãos:");
                ui.add(egui::DragValue::new(&mut self.draft.total_bays).range(1..=20));
                ui.end_row();

                ui.label("Rampas por vão:");
                ui.add(egui::DragValue::new(&mut self.draft.ramps_per_bay).range(1..=20));
                ui.end_row();

                ui.label("Alerta de permanência (min):");
                ui.add(
                    egui::DragValue::new(&mut self.draft.alert_minutes)
                        .range(1..=24 * 60)
                        .speed(5),
                );
                ui.end_row();
            });

        ui.add_space(6.0);

        // Applied immediately, like the Ctrl+D shortcut
        let mut dark = store.settings().dark_mode;
        if ui.checkbox(&mut dark, "Modo escuro").changed() {
            let mut settings = store.settings().clone();
            settings.dark_mode = dark;
            if let Err(e) = store.update_settings(settings) {
                self.status_message = Some((format!("Falha ao salvar: {}", e), true));
            }
        }

        ui.add_space(10.0);
        if ui.button("Salvar configurações").clicked() {
            let mut settings = self.draft.clone();
            settings.dark_mode = store.settings().dark_mode;
            self.status_message = match store.update_settings(settings) {
                Ok(()) => Some(("Configurações salvas".to_string(), false)),
                Err(e) => Some((format!("Falha ao salvar: {}", e), true)),
            };
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new("Relatórios").strong());
        ui.add_space(4.0);
        if ui.button("Exportar CSV (Ctrl+E)").clicked() {
            self.set_status(crate::app::export_with_dialog(store));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new("Aplicação").strong());
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "Diretório de dados: {}",
                config
                    .store_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "(indisponível)".to_string())
            ))
            .small()
            .weak(),
        );

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    }
}
