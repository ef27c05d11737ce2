// src/render/interactive.rs

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::PlotStyle;
use crate::error::PlotError;
use crate::render::figure::{GroupFigure, PanelSeries};

const LEGEND_STYLE: &str = "legend";

/// グループの図をウィンドウに表示し、閉じられるまで待つ
pub fn show_group(figure: &GroupFigure, style: &PlotStyle) -> Result<(), PlotError> {
    let (width, height) = style.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(figure.group.title())
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    let window = GroupWindow {
        figure: figure.clone(),
        style: style.clone(),
    };
    eframe::run_native(
        figure.group.title(),
        options,
        Box::new(move |cc| {
            apply_fonts(&cc.egui_ctx, &window.style);
            Ok(Box::new(window))
        }),
    )
    .map_err(|e| PlotError::backend(figure.group, e))
}

struct GroupWindow {
    figure: GroupFigure,
    style: PlotStyle,
}

impl eframe::App for GroupWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.style.group_titles {
                ui.heading(self.figure.group.title());
            }

            let spacing = ui.spacing().item_spacing;
            let available = ui.available_size();
            let cell = egui::vec2(
                (available.x - spacing.x) / 2.0,
                (available.y - spacing.y) / 2.0,
            );

            egui::Grid::new("panels").spacing(spacing).show(ui, |ui| {
                for row in 0..2 {
                    for col in 0..2 {
                        let panel = self
                            .figure
                            .panels
                            .iter()
                            .find(|p| p.row == row && p.col == col);
                        match panel {
                            Some(panel) => panel_plot(ui, panel, &self.style, cell),
                            None => {
                                ui.allocate_space(cell);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
        });
    }
}

fn panel_plot(ui: &mut egui::Ui, panel: &PanelSeries, style: &PlotStyle, size: egui::Vec2) {
    let [r, g, b] = style.line_color;
    let points: PlotPoints = panel.finite_points().map(|(x, y)| [x, y]).collect();
    let line = Line::new(points)
        .color(egui::Color32::from_rgb(r, g, b))
        .width(style.line_width as f32)
        .name(&panel.y_label);

    let x = panel.x_range();
    let y = panel.y_range();
    let mut plot = Plot::new(&panel.y_label)
        .width(size.x)
        .height(size.y)
        .x_axis_label(panel.x_label)
        .y_axis_label(panel.y_label.as_str())
        .include_x(x.start)
        .include_x(x.end)
        .include_y(y.start)
        .include_y(y.end)
        .show_grid(false);
    if style.legend {
        plot = plot.legend(Legend::default().text_style(egui::TextStyle::Name(LEGEND_STYLE.into())));
    }
    plot.show(ui, |plot_ui| plot_ui.line(line));
}

/// 文字サイズ (pt) をウィンドウのスタイルに反映する
fn apply_fonts(ctx: &egui::Context, style: &PlotStyle) {
    let mut egui_style = (*ctx.style()).clone();
    for (text_style, font_id) in egui_style.text_styles.iter_mut() {
        let points = match text_style {
            egui::TextStyle::Heading => style.fonts.title,
            egui::TextStyle::Small => style.fonts.ticks,
            _ => style.fonts.axes,
        };
        font_id.size = style.font_px(points) as f32;
    }
    egui_style.text_styles.insert(
        egui::TextStyle::Name(LEGEND_STYLE.into()),
        egui::FontId::proportional(style.font_px(style.fonts.legend) as f32),
    );
    ctx.set_style(egui_style);
}
