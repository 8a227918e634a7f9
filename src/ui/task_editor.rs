use egui::{RichText, Ui};

use crate::model::derive::SegmentInput;
use crate::model::TaskList;
use crate::ui::theme;

/// Structural requests from the task editor; at most one per frame (they
/// all come from single button clicks).
pub enum EditorAction {
    None,
    MoveUp(usize),
    MoveDown(usize),
    InsertAbove(usize),
    InsertBelow(usize),
    Rename(usize, String),
    SetSegmentCount(usize, usize),
}

/// Render the per-task editors: reorder/insert controls, the name field,
/// the segment count, and one date + duration row per segment.
///
/// Field edits mutate `inputs` in place; anything that changes the task
/// list's shape is returned as an [`EditorAction`] so the caller can apply
/// it and regenerate the editable view.
pub fn show_task_editor(
    tasks: &TaskList,
    inputs: &mut [Vec<SegmentInput>],
    ui: &mut Ui,
) -> EditorAction {
    let mut action = EditorAction::None;

    for i in 0..tasks.len() {
        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Move Up", egui_phosphor::regular::ARROW_UP))
                .clicked()
            {
                action = EditorAction::MoveUp(i);
            }
            if ui
                .button(format!("{} Move Down", egui_phosphor::regular::ARROW_DOWN))
                .clicked()
            {
                action = EditorAction::MoveDown(i);
            }
            if ui
                .button(format!("{} Add Above", egui_phosphor::regular::ARROW_LINE_UP))
                .clicked()
            {
                action = EditorAction::InsertAbove(i);
            }
            if ui
                .button(format!("{} Add Below", egui_phosphor::regular::ARROW_LINE_DOWN))
                .clicked()
            {
                action = EditorAction::InsertBelow(i);
            }
        });

        let mut name = tasks.name(i).to_string();
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Task {} name", i + 1)).font(theme::font_label()));
            if ui.text_edit_singleline(&mut name).changed() {
                action = EditorAction::Rename(i, name.clone());
            }
        });

        let segments = match inputs.get_mut(i) {
            Some(s) => s,
            None => continue,
        };

        let mut count = segments.len().max(1);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Segments for '{}'", name)).font(theme::font_label()),
            );
            if ui
                .add(egui::DragValue::new(&mut count).range(1..=100))
                .changed()
                && count != segments.len()
            {
                action = EditorAction::SetSegmentCount(i, count);
            }
        });

        for (j, segment) in segments.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("Segment {}", j + 1))
                        .font(theme::font_small())
                        .strong(),
                );
                ui.add(
                    egui_extras::DatePickerButton::new(&mut segment.start_date)
                        .id_salt(&format!("start_date_{}_{}", i, j)),
                );
                ui.label(RichText::new("Duration (months)").font(theme::font_small()));
                ui.add(
                    egui::DragValue::new(&mut segment.duration_months)
                        .speed(0.1)
                        .range(0.1..=600.0),
                );
            });
        }
    }

    action
}
