//! Movement history panel

use chrono::Utc;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use frotas_domain::elapsed_since;
use frotas_store::YardStore;
use frotas_types::MovementAction;

pub struct HistoryPanel {
    /// Show only entries for a plate substring
    search: String,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            search: String::new(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &YardStore) {
        ui.heading("Histórico de Movimentações");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Placa:");
            ui.add(
                egui::TextEdit::singleline(&mut self.search)
                    .hint_text("todas")
                    .desired_width(120.0),
            );
        });
        ui.add_space(10.0);

        let now = Utc::now();
        let search = self.search.trim().to_uppercase();
        let movements: Vec<_> = store
            .movements()
            .into_iter()
            .filter(|m| search.is_empty() || m.plate.to_uppercase().contains(&search))
            .collect();

        if movements.is_empty() {
            ui.label("Nenhuma movimentação registrada");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for movement in movements {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(movement.action.label().to_uppercase())
                            .color(action_color(movement.action))
                            .strong(),
                    );
                    if !movement.plate.is_empty() {
                        ui.label(RichText::new(&movement.plate).strong());
                    }
                    ui.label(&movement.details);
                });
                ui.label(
                    RichText::new(format!(
                        "{} atrás",
                        elapsed_since(movement.timestamp, now)
                    ))
                    .small()
                    .weak(),
                );
                ui.separator();
            }
        });
    }
}

fn action_color(action: MovementAction) -> Color32 {
    match action {
        MovementAction::Created => Color32::from_rgb(80, 140, 220),
        MovementAction::Assigned => Color32::from_rgb(220, 140, 50),
        MovementAction::Returned => Color32::from_rgb(200, 180, 60),
        MovementAction::Loaded => Color32::from_rgb(150, 90, 200),
        MovementAction::Dispatched => Color32::from_rgb(80, 180, 100),
        MovementAction::Blocked => Color32::LIGHT_RED,
        MovementAction::Unblocked => Color32::from_rgb(80, 180, 100),
    }
}
