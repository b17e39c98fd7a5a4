use crate::application::screen::PredictionScreen;
use crate::domain::clinical::{
    Categorical, ChestPain, ExerciseAngina, FastingBloodSugar, MajorVessels, NumericField,
    RestEcg, SexChoice, StSlope, Thalassemia,
};
use crate::domain::errors::ErrorKind;
use crate::domain::prediction::DiagnosisClass;
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::time::Duration;

impl eframe::App for PredictionScreen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Apply finished requests (UI thread only) ---
        self.update();
        if self.display.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // --- 2. Header ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Heart Disease Risk Check");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.display.is_waiting() {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} request(s) pending",
                                self.display.in_flight
                            ))
                            .color(DesignSystem::TEXT_SECONDARY)
                            .small(),
                        );
                    } else if let Some(at) = self.display.updated_at {
                        ui.label(
                            egui::RichText::new(format!(
                                "Last reply {} UTC",
                                at.format("%H:%M:%S")
                            ))
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                        );
                    }
                });
            });
        });

        // --- 3. Form + results ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Card::new().title("PATIENT MEASUREMENTS").show(ui, |ui| {
                        self.numeric_inputs(ui);
                    });
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    Card::new().title("CLINICAL FINDINGS").show(ui, |ui| {
                        self.categorical_inputs(ui);
                    });
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    ui.horizontal(|ui| {
                        let predict = egui::Button::new(
                            egui::RichText::new("Predict").strong().size(16.0),
                        )
                        .fill(DesignSystem::ACCENT_PRIMARY);
                        if ui.add(predict).clicked() {
                            self.on_predict();
                        }
                        if ui.button("Clear").clicked() {
                            self.reset_form();
                        }
                    });
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    self.result_panel(ui);
                });
            });
    }
}

impl PredictionScreen {
    fn numeric_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("numeric_inputs")
            .num_columns(2)
            .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
            .show(ui, |ui| {
                for field in NumericField::ALL {
                    ui.label(field.caption());
                    ui.add(
                        egui::TextEdit::singleline(self.form.numeric_mut(field))
                            .hint_text(field.bounds_text())
                            .desired_width(160.0),
                    );
                    ui.end_row();
                }

                ui.label("Sex");
                ui.horizontal(|ui| {
                    for choice in SexChoice::ALL {
                        ui.radio_value(&mut self.form.sex, Some(choice), choice.label());
                    }
                });
                ui.end_row();
            });
    }

    fn categorical_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("categorical_inputs")
            .num_columns(2)
            .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
            .show(ui, |ui| {
                categorical_row::<ChestPain>(ui, &mut self.form.cp);
                categorical_row::<FastingBloodSugar>(ui, &mut self.form.fbs);
                categorical_row::<RestEcg>(ui, &mut self.form.restecg);
                categorical_row::<ExerciseAngina>(ui, &mut self.form.exang);
                categorical_row::<StSlope>(ui, &mut self.form.slope);
                categorical_row::<MajorVessels>(ui, &mut self.form.ca);
                categorical_row::<Thalassemia>(ui, &mut self.form.thal);
            });
    }

    fn result_panel(&self, ui: &mut egui::Ui) {
        let accent = match self.display.class {
            Some(DiagnosisClass::HeartDisease) => Some(DesignSystem::DANGER),
            Some(DiagnosisClass::NoHeartDisease) => Some(DesignSystem::SUCCESS),
            None => None,
        };

        Card::new().title("RESULT").accent(accent).show(ui, |ui| {
            if !self.display.result_text.is_empty() {
                ui.label(
                    egui::RichText::new(&self.display.result_text)
                        .size(18.0)
                        .strong()
                        .color(accent.unwrap_or(DesignSystem::TEXT_PRIMARY)),
                );
            }
            if !self.display.probability_text.is_empty() {
                ui.label(
                    egui::RichText::new(&self.display.probability_text)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            }
            if !self.display.error_text.is_empty() {
                let color = match self.display.error_kind {
                    Some(ErrorKind::Validation) => DesignSystem::WARNING,
                    _ => DesignSystem::DANGER,
                };
                ui.label(egui::RichText::new(&self.display.error_text).color(color));
            }
        });
    }
}

fn categorical_row<T: Categorical + PartialEq>(ui: &mut egui::Ui, value: &mut T) {
    ui.label(T::CAPTION);
    egui::ComboBox::from_id_salt(T::FIELD)
        .selected_text(value.label())
        .width(220.0)
        .show_ui(ui, |ui| {
            for option in T::OPTIONS {
                ui.selectable_value(value, *option, option.label());
            }
        });
    ui.end_row();
}
