//! Bay/ramp board panel
//!
//! One card per ramp: free, blocked, or occupied with loaded toggle and
//! dispatch/return actions.

use eframe::egui::{self, Color32, RichText, Ui};
use frotas_domain::ramps_of_bay;
use frotas_store::YardStore;

/// Deferred click, applied after the grid is rendered
enum BoardAction {
    ToggleLoaded(String),
    Dispatch(String),
    Return(String),
    Block(u32),
    Unblock(u32),
}

/// Snapshot of one ramp for rendering
struct RampView {
    ramp: u32,
    blocked: bool,
    occupant: Option<(String, bool)>,
}

pub struct BoardPanel {
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl BoardPanel {
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &mut YardStore) {
        ui.heading("Vãos e Rampas");
        ui.add_space(10.0);

        let settings = store.settings().clone();
        let mut action: Option<BoardAction> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for bay in 1..=settings.total_bays {
                ui.label(RichText::new(format!("Vão {}", bay)).strong());
                ui.add_space(4.0);

                ui.horizontal_wrapped(|ui| {
                    for ramp in ramps_of_bay(bay, settings.ramps_per_bay) {
                        let view = RampView {
                            ramp,
                            blocked: store.is_blocked(ramp),
                            occupant: store
                                .vehicle_at(ramp)
                                .map(|v| (v.plate.clone(), v.loaded)),
                        };
                        if let Some(a) = render_ramp_card(ui, &view) {
                            action = Some(a);
                        }
                    }
                });

                ui.add_space(10.0);
                ui.separator();
            }
        });

        if let Some(action) = action {
            let result = match action {
                BoardAction::ToggleLoaded(plate) => store.toggle_loaded(&plate).map(|_| ()),
                BoardAction::Dispatch(plate) => store.dispatch(&plate).map(|_| ()),
                BoardAction::Return(plate) => store.return_to_yard(&plate).map(|_| ()),
                BoardAction::Block(ramp) => store.set_ramp_blocked(ramp, true),
                BoardAction::Unblock(ramp) => store.set_ramp_blocked(ramp, false),
            };
            self.status_message = match result {
                Ok(()) => None,
                Err(e) => Some((e.to_string(), true)),
            };
        }

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

/// Render one ramp card, returning the clicked action if any
fn render_ramp_card(ui: &mut Ui, view: &RampView) -> Option<BoardAction> {
    let mut action = None;

    let fill = if view.occupant.is_some() {
        ui.visuals().faint_bg_color
    } else if view.blocked {
        ui.visuals().extreme_bg_color
    } else {
        ui.visuals().panel_fill
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(8.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_min_width(120.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(format!("Rampa {}", view.ramp)).small());

                match &view.occupant {
                    Some((plate, loaded)) => {
                        let color = if *loaded {
                            Color32::from_rgb(150, 90, 200)
                        } else {
                            Color32::from_rgb(220, 140, 50)
                        };
                        ui.label(RichText::new(plate).color(color).strong());

                        let mut loaded_flag = *loaded;
                        if ui.checkbox(&mut loaded_flag, "Carregada").changed() {
                            action = Some(BoardAction::ToggleLoaded(plate.clone()));
                        }

                        if *loaded {
                            if ui.small_button("Despachar").clicked() {
                                action = Some(BoardAction::Dispatch(plate.clone()));
                            }
                        } else if ui.small_button("Retornar").clicked() {
                            action = Some(BoardAction::Return(plate.clone()));
                        }
                    }
                    None if view.blocked => {
                        ui.label(RichText::new("Bloqueada").color(Color32::LIGHT_RED));
                        if ui.small_button("Desbloquear").clicked() {
                            action = Some(BoardAction::Unblock(view.ramp));
                        }
                    }
                    None => {
                        ui.label(RichText::new("Livre").color(Color32::LIGHT_GREEN));
                        if ui.small_button("Bloquear").clicked() {
                            action = Some(BoardAction::Block(view.ramp));
                        }
                    }
                }
            });
        });

    action
}
