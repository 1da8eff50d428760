use eframe::egui;
use egui::{Align, Id, Key, Layout, Modal, RichText, Ui};
use egui_extras::{Column, DatePickerButton, TableBuilder};

use crate::draft::{DraftUpdate, FormError};
use crate::models::WorkoutType;
use crate::workout_log::WorkoutLog;

const DURATION_INPUT: &str = "workout_duration";
const CALORIES_INPUT: &str = "workout_calories";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModalAction {
    None,
    Cancel,
    Submit,
}

/// Keyboard focus at the start of the modal frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FocusTarget {
    Nothing,
    TextInput,
    /// Buttons, the type selector, the date picker and its popup.
    Control,
}

/// A clicked control wins. Otherwise Enter submits unless a control held
/// focus, and Escape or a backdrop click cancels.
fn resolve_modal_action(
    clicked: ModalAction,
    enter_pressed: bool,
    focus: FocusTarget,
    dismissed: bool,
) -> ModalAction {
    if clicked != ModalAction::None {
        clicked
    } else if enter_pressed && focus != FocusTarget::Control {
        ModalAction::Submit
    } else if dismissed {
        ModalAction::Cancel
    } else {
        ModalAction::None
    }
}

pub struct Dashboard {
    log: WorkoutLog,
    form_error: Option<FormError>,
}

impl Dashboard {
    pub fn new(log: WorkoutLog) -> Self {
        Dashboard {
            log,
            form_error: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            self.show_stats(ui);
            ui.add_space(24.0);
            self.show_recent_workouts(ui);
        });

        if self.log.is_modal_open() {
            self.show_add_workout_modal(ctx);
        }
    }

    fn show_stats(&self, ui: &mut Ui) {
        let total_workouts = self.log.total_workouts().to_string();
        let this_week = self.log.this_week_label();
        let total_calories = self.log.total_calories().to_string();

        ui.columns(3, |cols| {
            stat_card(&mut cols[0], "Total Workouts", &total_workouts);
            stat_card(&mut cols[1], "This Week", this_week);
            stat_card(&mut cols[2], "Total Calories", &total_calories);
        });
    }

    fn show_recent_workouts(&mut self, ui: &mut Ui) {
        egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Recent Workouts").heading().strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("+ Add Workout").clicked() {
                        self.form_error = None;
                        self.log.open_modal();
                    }
                });
            });
            ui.add_space(12.0);

            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(160.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::remainder())
                .header(24.0, |mut header| {
                    for title in ["Date", "Type", "Duration (min)", "Calories"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for workout in self.log.workouts() {
                        body.row(24.0, |mut row| {
                            row.col(|ui| {
                                ui.label(workout.date_label());
                            });
                            row.col(|ui| {
                                ui.label(workout.workout_type.label());
                            });
                            row.col(|ui| {
                                ui.label(workout.duration.to_string());
                            });
                            row.col(|ui| {
                                ui.label(workout.calories.to_string());
                            });
                        });
                    }
                });
        });
    }

    fn show_add_workout_modal(&mut self, ctx: &egui::Context) {
        let focus = match ctx.memory(|m| m.focused()) {
            None => FocusTarget::Nothing,
            Some(id) if id == Id::new(DURATION_INPUT) || id == Id::new(CALORIES_INPUT) => {
                FocusTarget::TextInput
            }
            Some(_) => FocusTarget::Control,
        };
        let enter_pressed = ctx.input(|i| i.key_pressed(Key::Enter));
        let mut clicked = ModalAction::None;

        let response = Modal::new(Id::new("add_workout_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Add New Workout").heading().strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("x").clicked() {
                        clicked = ModalAction::Cancel;
                    }
                });
            });
            ui.separator();

            self.show_form_fields(ui);

            if let Some(err) = &self.form_error {
                ui.add_space(6.0);
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
            }

            ui.add_space(12.0);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Add Workout").clicked() {
                    clicked = ModalAction::Submit;
                }
                if ui.button("Cancel").clicked() {
                    clicked = ModalAction::Cancel;
                }
            });
        });

        let action = resolve_modal_action(clicked, enter_pressed, focus, response.should_close());
        self.apply_modal_action(action);
    }

    fn apply_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::Cancel => {
                self.form_error = None;
                self.log.close_modal();
            }
            ModalAction::Submit => {
                self.form_error = self.log.submit().err();
            }
            ModalAction::None => {}
        }
    }

    fn show_form_fields(&mut self, ui: &mut Ui) {
        let draft = self.log.draft().clone();

        egui::Grid::new("add_workout_form")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label("Date");
                let mut date = draft.date;
                ui.add(DatePickerButton::new(&mut date).id_salt("workout_date"));
                if date != draft.date {
                    self.log.update_draft(DraftUpdate::Date(date));
                }
                ui.end_row();

                ui.label("Workout Type");
                let mut selected = draft.workout_type;
                egui::ComboBox::from_id_salt("workout_type")
                    .selected_text(selected.map_or("Select a type", |t| t.label()))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut selected, None, "Select a type");
                        for t in WorkoutType::ALL {
                            ui.selectable_value(&mut selected, Some(t), t.label());
                        }
                    });
                if selected != draft.workout_type {
                    self.log.update_draft(DraftUpdate::Type(selected));
                }
                ui.end_row();

                ui.label("Duration (minutes)");
                let mut duration = draft.duration.raw().to_owned();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut duration)
                            .id(Id::new(DURATION_INPUT))
                            .hint_text("min 1"),
                    )
                    .changed()
                {
                    self.log.update_draft(DraftUpdate::Duration(duration));
                }
                ui.end_row();

                ui.label("Calories Burned");
                let mut calories = draft.calories.raw().to_owned();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut calories)
                            .id(Id::new(CALORIES_INPUT))
                            .hint_text("min 0"),
                    )
                    .changed()
                {
                    self.log.update_draft(DraftUpdate::Calories(calories));
                }
                ui.end_row();
            });
    }
}

fn stat_card(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().color(ui.visuals().hyperlink_color));
        ui.add_space(6.0);
        ui.label(RichText::new(value).size(30.0).strong());
    });
}
