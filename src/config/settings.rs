// src/config/settings.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::PlotError;
use crate::render::renderer::OutputTarget;

/// 既定の出力ファイル名テンプレート（`{group}` をグループ名に置換）
pub const DEFAULT_FILE_TEMPLATE: &str = "{group}.svg";

/// キャンバス1辺の上限 (px)
pub const MAX_CANVAS_PX: u32 = 10_000;

/// 出力モード
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// ウィンドウに表示し、閉じられるまで待つ
    #[default]
    Interactive,
    /// 画像ファイルに保存する
    Persisted,
}

/// 描画設定全体
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlotSettings {
    pub input_path: Option<PathBuf>,  // 軌道ファイルのパス（必須）
    pub output_mode: OutputMode,      // 出力モード
    pub output_dir: Option<PathBuf>,  // 保存先ディレクトリ（persisted 時は必須）
    pub file_template: String,        // 保存ファイル名テンプレート
    pub style: PlotStyle,             // 描画スタイル
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            input_path: None,
            output_mode: OutputMode::Interactive,
            output_dir: None,
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
            style: PlotStyle::default(),
        }
    }
}

impl PlotSettings {
    /// 出力先の決定
    ///
    /// # 戻り値
    /// - 出力モードに応じた出力先。スタイルが不正な場合と、persisted で `output_dir` が無い場合はエラー
    pub fn output_target(&self) -> Result<OutputTarget, PlotError> {
        self.style.validate()?;
        match self.output_mode {
            OutputMode::Interactive => Ok(OutputTarget::Interactive),
            OutputMode::Persisted => {
                let dir = self.output_dir.clone().ok_or_else(|| {
                    PlotError::Config("persisted モードには output_dir が必要です".to_string())
                })?;
                if !self.file_template.contains("{group}") {
                    return Err(PlotError::Config(format!(
                        "file_template `{}` に {{group}} が含まれていません",
                        self.file_template
                    )));
                }
                Ok(OutputTarget::Persisted {
                    dir,
                    template: self.file_template.clone(),
                })
            }
        }
    }

    /// 入力ファイルのパス
    pub fn input_path(&self) -> Result<&PathBuf, PlotError> {
        self.input_path
            .as_ref()
            .ok_or_else(|| PlotError::Config("input_path が指定されていません".to_string()))
    }
}

/// 描画スタイル（描画器の生成時に渡す）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlotStyle {
    pub figsize: [f64; 2],     // 図の大きさ (inch)
    pub dpi: f64,              // 解像度 (dot/inch)
    pub line_width: u32,       // 線の太さ (px)
    pub line_color: [u8; 3],   // 線の色 (RGB)
    pub group_titles: bool,    // グループ名を図の上部に表示するか
    pub legend: bool,          // 各パネルに凡例を表示するか
    pub fonts: FontSizes,      // 文字サイズ (pt)
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            figsize: [12.0, 10.0],
            dpi: 100.0,
            line_width: 2,
            line_color: [0, 0, 0],
            group_titles: false,
            legend: false,
            fonts: FontSizes::default(),
        }
    }
}

impl PlotStyle {
    /// 寸法と文字サイズの検証
    ///
    /// # 戻り値
    /// - 非有限値・0 以下の値、または 1 辺が `MAX_CANVAS_PX` を超えるキャンバスは `ConfigError`
    pub fn validate(&self) -> Result<(), PlotError> {
        let sizes = [
            ("figsize[0]", self.figsize[0]),
            ("figsize[1]", self.figsize[1]),
            ("dpi", self.dpi),
            ("fonts.axes", self.fonts.axes),
            ("fonts.ticks", self.fonts.ticks),
            ("fonts.title", self.fonts.title),
            ("fonts.legend", self.fonts.legend),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::Config(format!(
                    "style.{} は正の有限値である必要があります: {}",
                    name, value
                )));
            }
        }

        let limit = f64::from(MAX_CANVAS_PX);
        let (width, height) = (self.figsize[0] * self.dpi, self.figsize[1] * self.dpi);
        if width.round() > limit || height.round() > limit {
            return Err(PlotError::Config(format!(
                "キャンバス {:.0}x{:.0} px が上限 {} px を超えています（figsize と dpi を見直してください）",
                width, height, MAX_CANVAS_PX
            )));
        }
        Ok(())
    }

    /// キャンバスの大きさ (px, 1 辺 `MAX_CANVAS_PX` まで)
    pub fn canvas_size(&self) -> (u32, u32) {
        let side = |inches: f64| {
            let px = (inches * self.dpi).round();
            if px.is_nan() {
                1
            } else {
                px.clamp(1.0, f64::from(MAX_CANVAS_PX)) as u32
            }
        };
        (side(self.figsize[0]), side(self.figsize[1]))
    }

    /// pt を px に換算する
    pub fn font_px(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

/// 文字サイズ (pt)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FontSizes {
    pub axes: f64,   // 軸ラベル
    pub ticks: f64,  // 目盛りラベル
    pub title: f64,  // グループ名
    pub legend: f64, // 凡例
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            axes: 12.0,
            ticks: 12.0,
            title: 12.0,
            legend: 12.0,
        }
    }
}
