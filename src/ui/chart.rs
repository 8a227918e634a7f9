use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use egui::{Align2, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::model::segment::SegmentRow;
use crate::model::Project;
use crate::ui::theme;

const ROW_HEIGHT: f32 = 28.0;
const ROW_GAP: f32 = 6.0;
const LABEL_COL_WIDTH: f32 = 130.0;
const TITLE_HEIGHT: f32 = 36.0;
const AXIS_HEIGHT: f32 = 44.0;
const LEGEND_WIDTH: f32 = 64.0;
const BAR_INSET: f32 = 3.0;
const BAR_ROUNDING: f32 = 3.0;

/// Render the timeline figure for the current project.
///
/// The caller guarantees a non-empty row model; with nothing to draw this is
/// a no-op. Rows are sorted by `(start, task, segment)` and grouped into one
/// lane per task, first task of the list at the top.
pub fn show_chart(ui: &mut Ui, project: &Project) {
    let rows = project.sorted_rows();
    if rows.is_empty() {
        return;
    }

    let lanes = lane_order(project, &rows);
    let (t_min, t_max) = time_range(&rows);

    let height =
        TITLE_HEIGHT + lanes.len() as f32 * (ROW_HEIGHT + ROW_GAP) + AXIS_HEIGHT;
    let width = ui.available_width().max(480.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let canvas = response.rect;

    let chart_theme = project.theme;
    painter.rect_filled(canvas, 0.0, chart_theme.frame_bg());

    let legend_space = if project.use_single_color {
        12.0
    } else {
        LEGEND_WIDTH
    };
    let plot = Rect::from_min_max(
        Pos2::new(canvas.left() + LABEL_COL_WIDTH, canvas.top() + TITLE_HEIGHT),
        Pos2::new(canvas.right() - legend_space, canvas.bottom() - AXIS_HEIGHT),
    );
    painter.rect_filled(plot, 0.0, chart_theme.plot_bg());

    let span_seconds = (t_max - t_min).num_seconds().max(1) as f32;
    let x_of = |t: NaiveDateTime| -> f32 {
        let offset = (t - t_min).num_seconds() as f32 / span_seconds;
        plot.left() + offset * plot.width()
    };

    // Title
    painter.text(
        Pos2::new(canvas.center().x, canvas.top() + TITLE_HEIGHT * 0.5),
        Align2::CENTER_CENTER,
        &project.title,
        theme::font_heading(),
        chart_theme.text(),
    );

    // Vertical month grid with tick labels
    let mut tick = first_of_month(t_min.date());
    while tick <= t_max.date() {
        let t = tick.and_time(chrono::NaiveTime::MIN);
        if t >= t_min {
            let x = x_of(t);
            painter.line_segment(
                [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
                Stroke::new(1.0, chart_theme.grid()),
            );
            painter.text(
                Pos2::new(x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                tick.format("%b %Y").to_string(),
                theme::font_small(),
                chart_theme.text(),
            );
        }
        tick = next_month(tick);
    }

    // Horizontal lane grid and category labels
    for (lane, name) in lanes.iter().enumerate() {
        let y_top = plot.top() + lane as f32 * (ROW_HEIGHT + ROW_GAP);
        let y_mid = y_top + (ROW_HEIGHT + ROW_GAP) * 0.5;
        painter.line_segment(
            [
                Pos2::new(plot.left(), y_top + ROW_HEIGHT + ROW_GAP),
                Pos2::new(plot.right(), y_top + ROW_HEIGHT + ROW_GAP),
            ],
            Stroke::new(0.5, chart_theme.grid()),
        );
        painter.text(
            Pos2::new(plot.left() - 8.0, y_mid),
            Align2::RIGHT_CENTER,
            name,
            theme::font_label(),
            chart_theme.text(),
        );
    }

    // Axis titles
    painter.text(
        Pos2::new(plot.center().x, canvas.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "Timeline",
        theme::font_label(),
        chart_theme.text(),
    );
    painter.text(
        Pos2::new(canvas.left() + 8.0, plot.top() - 6.0),
        Align2::LEFT_BOTTOM,
        "Task",
        theme::font_label(),
        chart_theme.text(),
    );

    // Duration range for the continuous scale
    let (d_min, d_max) = rows.iter().fold((f64::MAX, f64::MIN), |(lo, hi), r| {
        (lo.min(r.duration_months), hi.max(r.duration_months))
    });

    // Bars
    for (idx, row) in rows.iter().enumerate() {
        let Some(lane) = lanes.iter().position(|n| n == &row.task) else {
            continue;
        };
        let y_top = plot.top() + lane as f32 * (ROW_HEIGHT + ROW_GAP) + ROW_GAP * 0.5;
        let bar = Rect::from_min_max(
            Pos2::new(x_of(row.start), y_top + BAR_INSET),
            Pos2::new(x_of(row.end).max(x_of(row.start) + 2.0), y_top + ROW_HEIGHT - BAR_INSET),
        );

        let color = if project.use_single_color {
            project.bar_color.color()
        } else {
            let t = if d_max > d_min {
                ((row.duration_months - d_min) / (d_max - d_min)) as f32
            } else {
                0.5
            };
            project.color_scale.sample(t)
        };
        painter.rect_filled(bar, Rounding::same(BAR_ROUNDING), color);

        let hover = ui.interact(
            bar,
            ui.make_persistent_id(("segment-bar", idx)),
            Sense::hover(),
        );
        hover.on_hover_text(format!(
            "{} — segment {}\n{} → {}\n{:.1} months",
            row.task,
            row.segment,
            row.start.format("%Y-%m-%d"),
            row.end.format("%Y-%m-%d"),
            row.duration_months
        ));
    }

    if !project.use_single_color {
        draw_legend(&painter, canvas, plot, project, d_min, d_max);
    }
}

/// Category lanes: task-list order first (top of the chart), then any row
/// task the list no longer knows about, in row order.
fn lane_order(project: &Project, rows: &[SegmentRow]) -> Vec<String> {
    let mut lanes: Vec<String> = project
        .tasks
        .names()
        .iter()
        .filter(|name| rows.iter().any(|r| &r.task == *name))
        .cloned()
        .collect();
    for row in rows {
        if !lanes.contains(&row.task) {
            lanes.push(row.task.clone());
        }
    }
    lanes
}

fn time_range(rows: &[SegmentRow]) -> (NaiveDateTime, NaiveDateTime) {
    let mut t_min = rows[0].start;
    let mut t_max = rows[0].end;
    for row in rows {
        t_min = t_min.min(row.start);
        t_max = t_max.max(row.end);
    }
    if t_max <= t_min {
        t_max = t_min + Duration::days(1);
    }
    (t_min, t_max)
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

fn next_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(d + Duration::days(31))
}

/// Vertical color bar for continuous mode: a gradient strip beside the plot,
/// labeled with the duration range, high durations at the top.
fn draw_legend(
    painter: &egui::Painter,
    canvas: Rect,
    plot: Rect,
    project: &Project,
    d_min: f64,
    d_max: f64,
) {
    let strip = Rect::from_min_max(
        Pos2::new(canvas.right() - LEGEND_WIDTH + 16.0, plot.top() + 8.0),
        Pos2::new(canvas.right() - LEGEND_WIDTH + 32.0, plot.bottom() - 8.0),
    );
    let steps = 32;
    for i in 0..steps {
        let frac = i as f32 / steps as f32;
        let seg = Rect::from_min_max(
            Pos2::new(strip.left(), strip.top() + frac * strip.height()),
            Pos2::new(
                strip.right(),
                strip.top() + (i + 1) as f32 / steps as f32 * strip.height(),
            ),
        );
        painter.rect_filled(seg, 0.0, project.color_scale.sample(1.0 - frac));
    }
    painter.rect_stroke(strip, 0.0, Stroke::new(1.0, project.theme.grid()));
    painter.text(
        Pos2::new(strip.center().x, strip.top() - 4.0),
        Align2::CENTER_BOTTOM,
        format!("{:.1}", d_max),
        theme::font_small(),
        project.theme.text(),
    );
    painter.text(
        Pos2::new(strip.center().x, strip.bottom() + 4.0),
        Align2::CENTER_TOP,
        format!("{:.1}", d_min),
        theme::font_small(),
        project.theme.text(),
    );
}
