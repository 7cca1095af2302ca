use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};
use ps_app::{Session, flow_text, power_text, pressure_text, psi_text};
use ps_catalog::PumpModel;

const PRODUCT_BLURB: &str = "PDS diaphragm metering pumps deliver precise, \
pulsation-damped chemical dosing from 0.065 to 52 L/min at discharge \
pressures up to 10 bar. Enter your duty point to find the smallest model \
that covers it.";

pub struct PumpSelectApp {
    session: Session,
    notice: Option<String>,
}

impl PumpSelectApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Session::new(),
            notice: None,
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Invalid input")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new("⚠").color(Color32::RED).size(24.0));
                ui.label(message);
                ui.label("Please enter valid numbers and search again.");
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.notice = None;
                }
            });
    }

    fn show_requirements_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Requirements");
        ui.label("Enter the pump performance you need");
        ui.add_space(8.0);

        ui.label("Required flow rate (L/min)");
        ui.text_edit_singleline(&mut self.session.flow_text);
        ui.add_space(4.0);

        ui.label("Required discharge pressure (bar)");
        ui.text_edit_singleline(&mut self.session.pressure_text);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Search").clicked() {
                if let Err(e) = self.session.submit() {
                    self.notice = Some(e.to_string());
                }
            }
            if ui.button("Reset").clicked() {
                self.session.reset();
            }
        });

        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new("Product range").strong());
        ui.label(PRODUCT_BLURB);
        ui.add_space(8.0);
        show_catalog_table(ui);
    }

    fn show_results_panel(&mut self, ui: &mut egui::Ui) {
        let Some(ranking) = self.session.outcome() else {
            ui.heading("Model selection");
            ui.label("Enter your requirements and press Search.");
            return;
        };

        if ranking.is_empty() {
            ui.heading("Model selection");
            ui.colored_label(
                Color32::from_rgb(200, 80, 0),
                "No model meets both requirements. Try a lower flow rate or pressure.",
            );
            return;
        }

        let match_count = ranking.len();
        // Shortlist entries are 'static, so no borrow of the session survives
        let shortlist: Vec<&'static PumpModel> = ranking.shortlist().to_vec();

        ui.heading(format!("{} matching model(s)", match_count));
        if match_count > shortlist.len() {
            ui.label(format!("Showing the {} best fits", shortlist.len()));
        }
        ui.add_space(8.0);

        for (i, m) in shortlist.iter().enumerate() {
            let selected = self.session.selected_index() == Some(i);
            let mut text = format!(
                "{}  —  max {} , {}",
                m.model,
                flow_text(m.max_flow_lpm),
                pressure_text(m.max_pressure_bar)
            );
            if i == 0 {
                text.push_str("   [best fit]");
            }
            if ui.selectable_label(selected, text).clicked() {
                let _ = self.session.select_entry(i);
            }
        }

        ui.add_space(12.0);
        if let Some(m) = self.session.selected_model() {
            show_detail_card(ui, m);
        }
    }
}

fn show_detail_card(ui: &mut egui::Ui, m: &PumpModel) {
    ui.separator();
    ui.heading(format!("{} specifications", m.model));
    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Max flow rate");
            ui.label(flow_text(m.max_flow_lpm));
            ui.end_row();

            ui.label("Max pressure");
            ui.label(format!(
                "{} ({})",
                pressure_text(m.max_pressure_bar),
                psi_text(m.max_pressure_bar)
            ));
            ui.end_row();

            ui.label("Motor power");
            ui.label(power_text(m.motor_power_kw));
            ui.end_row();
        });
}

fn show_catalog_table(ui: &mut egui::Ui) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Model");
            });
            header.col(|ui| {
                ui.strong("L/min");
            });
            header.col(|ui| {
                ui.strong("bar");
            });
            header.col(|ui| {
                ui.strong("kW");
            });
        })
        .body(|mut body| {
            for m in ps_catalog::all() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(m.model);
                    });
                    row.col(|ui| {
                        ui.label(m.max_flow_lpm.to_string());
                    });
                    row.col(|ui| {
                        ui.label(m.max_pressure_bar.to_string());
                    });
                    row.col(|ui| {
                        ui.label(m.motor_power_kw.to_string());
                    });
                });
            }
        });
}

impl eframe::App for PumpSelectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_notice(ctx);
        let notice_open = self.notice.is_some();

        egui::SidePanel::left("requirements_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                // The invalid-input notice is blocking: the form stays
                // visible but inert until the user acknowledges it.
                ui.add_enabled_ui(!notice_open, |ui| {
                    self.show_requirements_panel(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!notice_open, |ui| {
                self.show_results_panel(ui);
            });
        });
    }
}
