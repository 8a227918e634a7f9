use egui::RichText;

use crate::io;
use crate::model::derive::{collect_rows, derive_defaults, rebuild_inputs, SegmentInput};
use crate::model::{Project, TaskList};
use crate::ui;
use crate::ui::task_editor::EditorAction;
use crate::ui::theme;

/// Main application state: the project, the editable view derived from it,
/// and the user-facing status line.
pub struct GanttApp {
    pub project: Project,
    /// Editable start/duration fields, one inner vec per task in list order.
    pub inputs: Vec<Vec<SegmentInput>>,
    pub status_message: String,
    pub chart_visible: bool,
}

impl Default for GanttApp {
    fn default() -> Self {
        let project = Project::default();
        let inputs = rebuild_inputs(project.tasks.names(), &project.rows);
        Self {
            project,
            inputs,
            status_message: "Ready".to_string(),
            chart_visible: false,
        }
    }
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::default()
    }

    // --- File operations ---

    pub fn import_csv(&mut self) {
        // Guard: loading replaces the whole project, so confirm first.
        if !self.project.rows.is_empty() {
            let confirm = rfd::MessageDialog::new()
                .set_title("Load project CSVs")
                .set_description("This will replace the current project. Continue?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if confirm != rfd::MessageDialogResult::Yes {
                return;
            }
        }

        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_files()
        {
            let result = io::csv_import::import_files(&paths);
            self.apply_import(result);
        }
    }

    /// Apply an import outcome: replace the project wholesale on success,
    /// reset to the initial defaults on failure. Never partially applied.
    pub fn apply_import(&mut self, result: Result<io::csv_import::CsvImport, String>) {
        match result {
            Ok(import) => {
                let count = import.rows.len();
                self.project.tasks = TaskList::from_rows(&import.rows);
                self.project.rows = import.rows;
                if let Some(title) = import.title {
                    self.project.title = title;
                }
                self.inputs = rebuild_inputs(self.project.tasks.names(), &self.project.rows);
                self.chart_visible = false;
                self.status_message = format!(
                    "Loaded {} segments across {} tasks",
                    count,
                    self.project.tasks.len()
                );
            }
            Err(e) => {
                self.reset_project();
                self.status_message = format!("Error loading file: {}", e);
            }
        }
    }

    pub fn reset_project(&mut self) {
        self.project = Project::default();
        self.inputs = rebuild_inputs(self.project.tasks.names(), &self.project.rows);
        self.chart_visible = false;
    }

    pub fn export_csv(&mut self) {
        if self.project.rows.is_empty() {
            self.status_message = "Nothing to download — add at least one segment".to_string();
            return;
        }

        let default_name = self.project.export_file_name();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match io::csv_export::export_csv(&self.project.sorted_rows(), &path) {
                Ok(count) => {
                    self.status_message =
                        format!("Wrote {} segments to {}", count, path.display());
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    // --- Chart generation ---

    /// Guard in front of the renderer: an empty row model warns and aborts
    /// instead of drawing.
    pub fn request_chart(&mut self) {
        if self.project.rows.is_empty() {
            self.chart_visible = false;
            self.status_message = "Please add at least one task segment.".to_string();
        } else {
            self.chart_visible = true;
            self.status_message =
                format!("Chart generated ({} segments)", self.project.rows.len());
        }
    }

    // --- Task list operations ---

    /// Grow or shrink the task list; removed tasks drop out of the edit
    /// buffer along with their segments.
    pub fn set_task_count(&mut self, n: usize) {
        self.project.rows = collect_rows(self.project.tasks.names(), &self.inputs);
        self.project.tasks.set_count(n);
        self.inputs = rebuild_inputs(self.project.tasks.names(), &self.project.rows);
    }

    /// Apply a structural request from the task editor and regenerate the
    /// editable view. Edits are first folded into the rows so they survive
    /// the regeneration; a rename deliberately skips regeneration, because
    /// the rows still carry the old name and only newly collected rows pick
    /// the new one up.
    pub fn apply_editor_action(&mut self, action: EditorAction) {
        match &action {
            EditorAction::None => return,
            EditorAction::Rename(i, name) => {
                self.project.tasks.rename(*i, name.clone());
                return;
            }
            _ => {}
        }

        self.project.rows = collect_rows(self.project.tasks.names(), &self.inputs);
        match action {
            EditorAction::MoveUp(i) => self.project.tasks.move_up(i),
            EditorAction::MoveDown(i) => self.project.tasks.move_down(i),
            EditorAction::InsertAbove(i) => self.project.tasks.insert_above(i),
            EditorAction::InsertBelow(i) => self.project.tasks.insert_below(i),
            EditorAction::SetSegmentCount(i, n) => {
                if i < self.project.tasks.len() {
                    self.inputs[i] =
                        derive_defaults(self.project.tasks.name(i), n, &self.project.rows);
                }
                return;
            }
            EditorAction::None | EditorAction::Rename(..) => return,
        }
        self.inputs = rebuild_inputs(self.project.tasks.names(), &self.project.rows);
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx, self.project.theme);

        // Left panel: project management
        egui::SidePanel::left("project_panel")
            .default_width(theme::SIDE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::sidebar::show_sidebar(self, ui);
            });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new(&self.status_message).font(theme::font_small()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "Tasks: {} · Segments: {}",
                                self.project.tasks.len(),
                                self.project.rows.len()
                            ))
                            .font(theme::font_small())
                            .weak(),
                        );
                    });
                });
            });

        // Central panel: configuration, task editors, chart
        let mut editor_action = EditorAction::None;
        let mut new_task_count: Option<usize> = None;
        let mut generate = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Chart title").font(theme::font_label()));
                        ui.text_edit_singleline(&mut self.project.title);
                    });

                    ui.horizontal(|ui| {
                        egui::ComboBox::from_id_salt("single_color_combo")
                            .selected_text(self.project.bar_color.label())
                            .show_ui(ui, |ui| {
                                for swatch in crate::model::style::BarColor::ALL {
                                    ui.selectable_value(
                                        &mut self.project.bar_color,
                                        swatch,
                                        swatch.label(),
                                    );
                                }
                            });
                        egui::ComboBox::from_id_salt("continuous_scale_combo")
                            .selected_text(self.project.color_scale.label())
                            .show_ui(ui, |ui| {
                                for scale in crate::model::style::ColorScale::ALL {
                                    ui.selectable_value(
                                        &mut self.project.color_scale,
                                        scale,
                                        scale.label(),
                                    );
                                }
                            });
                        ui.checkbox(
                            &mut self.project.use_single_color,
                            "Use single color for all tasks",
                        );
                    });

                    ui.separator();
                    ui.label(
                        RichText::new("Task Details")
                            .font(theme::font_heading())
                            .strong(),
                    );

                    let mut task_count = self.project.tasks.len();
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("How many main tasks?").font(theme::font_label()),
                        );
                        if ui
                            .add(egui::DragValue::new(&mut task_count).range(1..=100))
                            .changed()
                            && task_count != self.project.tasks.len()
                        {
                            new_task_count = Some(task_count);
                        }
                    });

                    editor_action = ui::task_editor::show_task_editor(
                        &self.project.tasks,
                        &mut self.inputs,
                        ui,
                    );

                    // Edited fields become the current row model each pass.
                    self.project.rows =
                        collect_rows(self.project.tasks.names(), &self.inputs);

                    ui.separator();
                    if ui
                        .button(format!(
                            "{}  Generate Gantt Chart",
                            egui_phosphor::regular::CHART_BAR_HORIZONTAL
                        ))
                        .clicked()
                    {
                        generate = true;
                    }

                    if self.chart_visible {
                        ui.add_space(8.0);
                        ui::chart::show_chart(ui, &self.project);
                    }
                });
        });

        if let Some(n) = new_task_count {
            self.set_task_count(n);
        }
        self.apply_editor_action(editor_action);
        if generate {
            self.request_chart();
        }
    }
}
