// src/render/persist.rs

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::debug;

use crate::config::PlotStyle;
use crate::error::PlotError;
use crate::render::figure::{GroupFigure, PanelSeries};
use crate::render::fonts;

/// 保存形式（拡張子で決まる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<ImageFormat, PlotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            other => Err(PlotError::Config(format!(
                "拡張子 `{}` には対応していません（svg または png）: {}",
                other,
                path.display()
            ))),
        }
    }
}

/// グループの図を画像ファイルに保存する
///
/// 一時ファイルに描画してから名前を変更するため、失敗したグループのファイルは残らない。
///
/// # 引数
/// - `figure`: 描画する図
/// - `style`: 描画スタイル
/// - `dir`: 保存先ディレクトリ（無ければ作成する）
/// - `template`: ファイル名テンプレート（`{group}` をグループ名に置換）
///
/// # 戻り値
/// - 保存したファイルのパス
pub fn save_group(
    figure: &GroupFigure,
    style: &PlotStyle,
    dir: &Path,
    template: &str,
) -> Result<PathBuf, PlotError> {
    let group = figure.group;
    let path = dir.join(template.replace("{group}", group.key()));
    let format = ImageFormat::from_path(&path)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PlotError::backend(group, e))?;
    }

    let partial = partial_path(&path);
    let size = style.canvas_size();
    debug!(path = %partial.display(), width = size.0, height = size.1, "描画を開始します");

    let drawn = match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(&partial, size).into_drawing_area();
            draw_group(root, figure, style)
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(&partial, size).into_drawing_area();
            draw_group(root, figure, style)
        }
    };

    let finished = drawn.and_then(|_| {
        fs::rename(&partial, &path).map_err(|e| PlotError::backend(group, e))
    });
    match finished {
        Ok(()) => Ok(path),
        Err(e) => {
            let _ = fs::remove_file(&partial);
            Err(e)
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("figure");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("svg");
    path.with_file_name(format!("{}.partial.{}", stem, ext))
}

/// 2x2 のパネルを描画する
pub fn draw_group<DB>(
    root: DrawingArea<DB, Shift>,
    figure: &GroupFigure,
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
{
    let group = figure.group;
    fonts::ensure_registered().map_err(|e| PlotError::backend(group, e))?;
    root.fill(&WHITE).map_err(|e| PlotError::backend(group, e))?;

    let area = if style.group_titles {
        root.titled(group.title(), font(style.font_px(style.fonts.title)))
            .map_err(|e| PlotError::backend(group, e))?
    } else {
        root.clone()
    };

    let cells = area.split_evenly((2, 2));
    for panel in &figure.panels {
        let cell = cell_at(&cells, panel)?;
        draw_panel(cell, panel, style).map_err(|e| PlotError::backend(group, e))?;
    }

    root.present().map_err(|e| PlotError::backend(group, e))?;
    Ok(())
}

/// パネル位置に対応する区画（2x2 の外なら `RenderError`）
fn cell_at<'c, T>(cells: &'c [T], panel: &PanelSeries) -> Result<&'c T, PlotError> {
    let cell = if panel.row < 2 && panel.col < 2 {
        cells.get(panel.row * 2 + panel.col)
    } else {
        None
    };
    cell.ok_or_else(|| PlotError::Render {
        column: panel.y_label.clone(),
        message: format!("パネル位置 ({}, {}) が 2x2 の範囲外です", panel.row, panel.col),
    })
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelSeries,
    style: &PlotStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    let axes_px = style.font_px(style.fonts.axes);
    let ticks_px = style.font_px(style.fonts.ticks);
    let label_area = ((axes_px + ticks_px) * 1.6).ceil() as u32;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(label_area)
        .y_label_area_size(label_area + ticks_px.ceil() as u32 * 2)
        .build_cartesian_2d(panel.x_range(), panel.y_range())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label.as_str())
        .axis_desc_style(font(axes_px))
        .label_style(font(ticks_px))
        .draw()?;

    let [r, g, b] = style.line_color;
    let line_style = ShapeStyle {
        color: RGBColor(r, g, b).to_rgba(),
        filled: false,
        stroke_width: style.line_width,
    };

    {
        let series = chart.draw_series(LineSeries::new(panel.finite_points(), line_style))?;
        if style.legend {
            series
                .label(panel.y_label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        }
    }

    if style.legend {
        chart
            .configure_series_labels()
            .label_font(font(style.font_px(style.fonts.legend)))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }
    Ok(())
}

fn font(px: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal)
}
