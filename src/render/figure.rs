// src/render/figure.rs

use std::ops::Range;

use crate::data::{Column, ColumnViews};
use crate::error::PlotError;
use crate::render::layout::{ChartGroup, PanelSpec, TIME_LABEL};

/// 描画用に切り出した1パネル分の系列
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSeries {
    pub row: usize,
    pub col: usize,
    pub x_label: &'static str,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

impl PanelSeries {
    pub fn x_range(&self) -> Range<f64> {
        axis_range(self.points.iter().map(|p| p.0))
    }

    pub fn y_range(&self) -> Range<f64> {
        axis_range(self.points.iter().map(|p| p.1))
    }

    /// 描画可能な（有限値の）点
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// 1グループ（2x2）の図
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFigure {
    pub group: ChartGroup,
    pub panels: Vec<PanelSeries>,
}

#[cfg(test)]
impl GroupFigure {
    /// y ラベルでパネルを探す
    pub fn panel(&self, y_label: &str) -> Option<&PanelSeries> {
        self.panels.iter().find(|p| p.y_label == y_label)
    }
}

/// 列ビューからグループの図を組み立てる
///
/// # 引数
/// - `views`: 名前付き列ビュー
/// - `group`: 対象グループ
///
/// # 戻り値
/// - 4パネル分の系列。列が無い、または時刻列と長さが異なる場合は `RenderError`
pub fn build_group(views: &ColumnViews<'_>, group: ChartGroup) -> Result<GroupFigure, PlotError> {
    let panels = group
        .panels()
        .map(|spec| build_panel(views, spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GroupFigure { group, panels })
}

fn build_panel(views: &ColumnViews<'_>, spec: &PanelSpec) -> Result<PanelSeries, PlotError> {
    let time = require(views, Column::Time)?;
    let x = require(views, spec.x)?;
    let y = require(views, spec.y)?;

    for (column, values) in [(spec.x, x), (spec.y, y)] {
        if values.len() != time.len() {
            return Err(PlotError::Render {
                column: column.name().to_string(),
                message: format!(
                    "長さ {} が time の長さ {} と一致しません",
                    values.len(),
                    time.len()
                ),
            });
        }
    }

    Ok(PanelSeries {
        row: spec.row,
        col: spec.col,
        x_label: TIME_LABEL,
        y_label: spec.y_label(),
        points: x.iter().copied().zip(y.iter().copied()).collect(),
    })
}

fn require<'a>(views: &ColumnViews<'a>, column: Column) -> Result<&'a [f64], PlotError> {
    views.get(column).ok_or_else(|| PlotError::Render {
        column: column.name().to_string(),
        message: "列ビューがありません".to_string(),
    })
}

/// 軸の表示範囲（前後に 5% の余白）
///
/// 有限値が無い場合は `0.0..1.0`、一定値の場合は値の前後に幅を取る。
pub fn axis_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else if min != 0.0 {
        min.abs() * 0.05
    } else {
        0.05
    };
    (min - pad)..(max + pad)
}
