// src/render/renderer.rs

use std::path::PathBuf;

use tracing::info;

use crate::config::PlotStyle;
use crate::data::ColumnViews;
use crate::error::PlotError;
use crate::render::figure::{build_group, GroupFigure};
use crate::render::layout::ChartGroup;
use crate::render::persist::save_group;

/// 出力先
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    /// グループごとにウィンドウを開き、閉じられるまで待つ
    Interactive,
    /// `dir` にグループごとの画像を保存する（`template` の `{group}` を置換）
    Persisted { dir: PathBuf, template: String },
}

/// パネル描画器
#[derive(Debug, Clone)]
pub struct PanelRenderer {
    style: PlotStyle,
    target: OutputTarget,
}

impl PanelRenderer {
    pub fn new(style: PlotStyle, target: OutputTarget) -> Self {
        PanelRenderer { style, target }
    }

    /// 全グループの図を組み立てる（描画前に全列を検証する）
    pub fn figures(&self, views: &ColumnViews<'_>) -> Result<Vec<GroupFigure>, PlotError> {
        ChartGroup::ALL
            .iter()
            .map(|group| build_group(views, *group))
            .collect()
    }

    /// 1グループを表示または保存する
    ///
    /// # 戻り値
    /// - 保存した場合はファイルのパス、表示の場合は `None`（ウィンドウが閉じられてから戻る）
    pub fn present(&self, figure: &GroupFigure) -> Result<Option<PathBuf>, PlotError> {
        match &self.target {
            OutputTarget::Interactive => {
                info!(group = figure.group.title(), "ウィンドウを表示します");
                show_group(figure, &self.style)?;
                Ok(None)
            }
            OutputTarget::Persisted { dir, template } => {
                let path = save_group(figure, &self.style, dir, template)?;
                info!(group = figure.group.title(), path = %path.display(), "画像を保存しました");
                Ok(Some(path))
            }
        }
    }

    /// 全グループを A→B→C の順に描画する
    ///
    /// # 戻り値
    /// - 保存したファイルのパス（対話表示では空）
    pub fn render(&self, views: &ColumnViews<'_>) -> Result<Vec<PathBuf>, PlotError> {
        let figures = self.figures(views)?;
        let mut written = Vec::new();
        for figure in &figures {
            if let Some(path) = self.present(figure)? {
                written.push(path);
            }
        }
        Ok(written)
    }
}

#[cfg(feature = "gui")]
fn show_group(figure: &GroupFigure, style: &PlotStyle) -> Result<(), PlotError> {
    crate::render::interactive::show_group(figure, style)
}

#[cfg(not(feature = "gui"))]
fn show_group(_figure: &GroupFigure, _style: &PlotStyle) -> Result<(), PlotError> {
    Err(PlotError::Config(
        "interactive モードは gui 機能なしでビルドされています。persisted を使用してください"
            .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_trajectory;
    use crate::data::Column;
    use std::fs;
    use std::path::Path;

    const INPUT: &str = "t\tx\ty\tz\tvx\tvy\tvz\tM\tvt\tke\tpe\tte\tp\n\
        0.0\t0\t0\t0\t0\t100\t0\t0.3\t50\t500\t0\t500\t10\n\
        1.0\t0\t95\t0\t0\t90\t0\t0.27\t50\t400\t95\t495\t9\n";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trajplot-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn persisted(dir: &Path, template: &str) -> PanelRenderer {
        PanelRenderer::new(
            PlotStyle::default(),
            OutputTarget::Persisted {
                dir: dir.to_path_buf(),
                template: template.to_string(),
            },
        )
    }

    #[test]
    fn test_render_writes_three_groups_in_order() {
        let dir = scratch_dir("order").join("nested");
        let table = parse_trajectory(INPUT.as_bytes()).unwrap();
        let views = ColumnViews::from_table(&table);

        let written = persisted(&dir, "{group}.svg").render(&views).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["kinematics.svg", "velocity.svg", "energetics.svg"]);
        for path in &written {
            assert!(path.exists());
        }

        let energetics = fs::read_to_string(&written[2]).unwrap();
        assert!(energetics.contains("Total Energy (J)"));
        assert!(energetics.contains("Time (s)"));
        let kinematics = fs::read_to_string(&written[0]).unwrap();
        assert!(kinematics.contains("Mach Number"));

        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn test_empty_table_renders_empty_groups() {
        let dir = scratch_dir("empty");
        let table = parse_trajectory(b"header only\n").unwrap();
        let views = ColumnViews::from_table(&table);

        let written = persisted(&dir, "run_{group}.svg").render(&views).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_views_produce_no_files() {
        let dir = scratch_dir("invalid");
        let table = parse_trajectory(INPUT.as_bytes()).unwrap();
        let mut views = ColumnViews::from_table(&table);
        let short = [1.0];
        views.insert(Column::Momentum, &short);

        match persisted(&dir, "{group}.svg").render(&views) {
            Err(PlotError::Render { column, .. }) => assert_eq!(column, "momentum"),
            other => panic!("Expected PlotError::Render, got {:?}", other),
        }
        assert!(!dir.exists());
    }

    #[test]
    fn test_unknown_extension_is_config_error() {
        let dir = scratch_dir("extension");
        let table = parse_trajectory(INPUT.as_bytes()).unwrap();
        let views = ColumnViews::from_table(&table);

        match persisted(&dir, "{group}.pdf").render(&views) {
            Err(PlotError::Config(message)) => assert!(message.contains("pdf")),
            other => panic!("Expected PlotError::Config, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
