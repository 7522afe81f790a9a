//! Yard panel: add form, filters and the assignment queue

use chrono::Utc;
use eframe::egui::{self, Color32, RichText, Ui};
use frotas_app::FleetFilter;
use frotas_domain::{elapsed_since, is_overdue};
use frotas_store::YardStore;
use frotas_types::{Priority, VehicleStatus};

/// Deferred mutation from the rendered list
enum YardAction {
    Add { plate: String, priority: Priority },
    Assign { plate: String, ramp: u32 },
}

pub struct YardPanel {
    /// New vehicle form fields
    new_plate: String,
    new_priority: Priority,
    /// List filters
    filter: FleetFilter,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
    /// Focus requests from keyboard shortcuts
    focus_add: bool,
    focus_search: bool,
}

impl YardPanel {
    pub fn new() -> Self {
        Self {
            new_plate: String::new(),
            new_priority: Priority::Normal,
            filter: FleetFilter::default(),
            status_message: None,
            focus_add: false,
            focus_search: false,
        }
    }

    /// Focus the add-plate field on the next frame (Ctrl+N)
    pub fn request_add_focus(&mut self) {
        self.focus_add = true;
    }

    /// Focus the search field on the next frame (Ctrl+F)
    pub fn request_search_focus(&mut self) {
        self.focus_search = true;
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &mut YardStore) {
        let mut action: Option<YardAction> = None;

        ui.heading("Pátio");
        ui.add_space(10.0);

        self.render_add_form(ui, &mut action);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.render_filters(ui, store);

        ui.add_space(10.0);

        self.render_queue(ui, store, &mut action);

        if let Some(action) = action {
            self.apply(store, action);
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

    fn render_add_form(&mut self, ui: &mut Ui, action: &mut Option<YardAction>) {
        ui.label(RichText::new("Adicionar frota").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.new_plate)
                    .hint_text("ABC-1234 ou ABC1D23")
                    .desired_width(140.0),
            );
            if self.focus_add {
                response.request_focus();
                self.focus_add = false;
            }

            egui::ComboBox::from_id_salt("new_priority")
                .selected_text(self.new_priority.label())
                .show_ui(ui, |ui| {
                    for priority in [Priority::High, Priority::Normal, Priority::Low] {
                        ui.selectable_value(&mut self.new_priority, priority, priority.label());
                    }
                });

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Adicionar").clicked() || submitted {
                *action = Some(YardAction::Add {
                    plate: self.new_plate.clone(),
                    priority: self.new_priority,
                });
            }
        });
    }

    fn render_filters(&mut self, ui: &mut Ui, store: &YardStore) {
        ui.label(RichText::new("Filtros e pesquisa").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.filter.search)
                    .hint_text("Pesquisar por placa...")
                    .desired_width(160.0),
            );
            if self.focus_search {
                response.request_focus();
                self.focus_search = false;
            }

            egui::ComboBox::from_id_salt("filter_status")
                .selected_text(
                    self.filter
                        .status
                        .map(|s| s.label())
                        .unwrap_or("Todos os status"),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.status, None, "Todos os status");
                    for status in [
                        VehicleStatus::Yard,
                        VehicleStatus::Ramp,
                        VehicleStatus::Dispatched,
                    ] {
                        ui.selectable_value(&mut self.filter.status, Some(status), status.label());
                    }
                });

            egui::ComboBox::from_id_salt("filter_priority")
                .selected_text(
                    self.filter
                        .priority
                        .map(|p| p.label())
                        .unwrap_or("Todas as prioridades"),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.priority, None, "Todas as prioridades");
                    for priority in [Priority::High, Priority::Normal, Priority::Low] {
                        ui.selectable_value(
                            &mut self.filter.priority,
                            Some(priority),
                            priority.label(),
                        );
                    }
                });

            egui::ComboBox::from_id_salt("filter_bay")
                .selected_text(
                    self.filter
                        .bay
                        .map(|b| format!("Vão {}", b))
                        .unwrap_or_else(|| "Todos os vãos".to_string()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.bay, None, "Todos os vãos");
                    for bay in 1..=store.settings().total_bays {
                        ui.selectable_value(
                            &mut self.filter.bay,
                            Some(bay),
                            format!("Vão {}", bay),
                        );
                    }
                });

            if self.filter.is_active() && ui.button("Limpar filtros").clicked() {
                self.filter.clear();
            }
        });
    }

    fn render_queue(&mut self, ui: &mut Ui, store: &YardStore, action: &mut Option<YardAction>) {
        let now = Utc::now();
        let settings = store.settings().clone();
        let free_ramps = store.free_ramps();

        // Yard queue first (priority order), then everything else
        let mut rows: Vec<_> = store.yard_queue();
        rows.extend(
            store
                .vehicles()
                .iter()
                .filter(|v| v.status != VehicleStatus::Yard),
        );
        let rows: Vec<_> = rows.into_iter().filter(|v| self.filter.matches(v)).collect();

        if rows.is_empty() {
            ui.label("Nenhuma frota no pátio");
            return;
        }

        egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
            egui::Grid::new("yard_queue_grid")
                .num_columns(6)
                .spacing([12.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Placa").strong());
                    ui.label(RichText::new("Status").strong());
                    ui.label(RichText::new("Prioridade").strong());
                    ui.label(RichText::new("Tempo").strong());
                    ui.label(RichText::new("Rampa").strong());
                    ui.label(RichText::new("Ação").strong());
                    ui.end_row();

                    for vehicle in &rows {
                        let overdue = vehicle.status != VehicleStatus::Dispatched
                            && is_overdue(vehicle, &settings, now);

                        let plate = if overdue {
                            RichText::new(format!("⚠ {}", vehicle.plate))
                                .color(Color32::YELLOW)
                        } else {
                            RichText::new(&vehicle.plate)
                        };
                        ui.label(plate);
                        ui.label(vehicle.status.label());
                        ui.label(vehicle.priority.label());
                        ui.label(elapsed_since(vehicle.last_moved_at, now));
                        ui.label(
                            vehicle
                                .ramp
                                .map(|r| r.to_string())
                                .unwrap_or_else(|| "-".into()),
                        );

                        if vehicle.status == VehicleStatus::Yard {
                            egui::ComboBox::from_id_salt(("assign", &vehicle.plate))
                                .selected_text("Alocar")
                                .show_ui(ui, |ui| {
                                    for &ramp in &free_ramps {
                                        let bay = frotas_domain::bay_of_ramp(
                                            ramp,
                                            settings.ramps_per_bay,
                                        );
                                        if ui
                                            .selectable_label(
                                                false,
                                                format!("Rampa {} (V{})", ramp, bay),
                                            )
                                            .clicked()
                                        {
                                            *action = Some(YardAction::Assign {
                                                plate: vehicle.plate.clone(),
                                                ramp,
                                            });
                                        }
                                    }
                                });
                        } else {
                            ui.label("-");
                        }
                        ui.end_row();
                    }
                });
        });
    }

    fn apply(&mut self, store: &mut YardStore, action: YardAction) {
        self.status_message = match action {
            YardAction::Add { plate, priority } => match store.add_vehicle(&plate, priority) {
                Ok(vehicle) => {
                    self.new_plate.clear();
                    Some((
                        format!("Frota {} adicionada ao pátio", vehicle.plate),
                        false,
                    ))
                }
                Err(e) => Some((e.to_string(), true)),
            },
            YardAction::Assign { plate, ramp } => match store.assign(&plate, ramp) {
                Ok(vehicle) => Some((
                    format!(
                        "Frota {} alocada na Rampa {}, Vão {}",
                        vehicle.plate,
                        vehicle.ramp.unwrap_or(0),
                        vehicle.bay.unwrap_or(0)
                    ),
                    false,
                )),
                Err(e) => Some((e.to_string(), true)),
            },
        };
    }
}
