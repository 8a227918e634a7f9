use egui::{RichText, Ui};

use crate::app::GanttApp;
use crate::model::style::ChartTheme;
use crate::ui::theme;

/// Render the project-management side panel: CSV upload/download and the
/// chart theme choice.
pub fn show_sidebar(app: &mut GanttApp, ui: &mut Ui) {
    ui.add_space(6.0);
    ui.label(
        RichText::new("Project Management")
            .font(theme::font_heading())
            .strong(),
    );
    ui.add_space(4.0);

    if ui
        .button(format!(
            "{}  Upload saved project CSVs…",
            egui_phosphor::regular::UPLOAD_SIMPLE
        ))
        .clicked()
    {
        app.import_csv();
    }
    if ui
        .button(format!(
            "{}  Download Project Data (CSV)",
            egui_phosphor::regular::DOWNLOAD_SIMPLE
        ))
        .clicked()
    {
        app.export_csv();
    }

    ui.add_space(6.0);
    ui.separator();

    ui.label(RichText::new("Chart Theme").font(theme::font_label()).strong());
    for theme_option in ChartTheme::ALL {
        ui.radio_value(&mut app.project.theme, theme_option, theme_option.label());
    }
}
