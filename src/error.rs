// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::render::layout::ChartGroup;

/// 読み込みから描画までの全エラー（いずれも致命的で、処理はその場で中断する）
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("NotFoundError: 入力ファイルを読み込めません: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DataFormatError: {line} 行目: {message}")]
    DataFormat { line: usize, message: String },

    #[error("RenderError: 列 `{column}`: {message}")]
    Render { column: String, message: String },

    #[error("ConfigError: {0}")]
    Config(String),

    #[error("BackendError: {} の描画に失敗しました: {}", .group.title(), .message)]
    Backend { group: ChartGroup, message: String },
}

impl PlotError {
    /// エラー種別名（ログ出力用）
    pub fn kind(&self) -> &'static str {
        match self {
            PlotError::NotFound { .. } => "NotFoundError",
            PlotError::DataFormat { .. } => "DataFormatError",
            PlotError::Render { .. } => "RenderError",
            PlotError::Config(_) => "ConfigError",
            PlotError::Backend { .. } => "BackendError",
        }
    }

    pub(crate) fn backend<E: std::fmt::Display>(group: ChartGroup, err: E) -> Self {
        PlotError::Backend {
            group,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_message_contains_line() {
        let err = PlotError::DataFormat {
            line: 3,
            message: "フィールド数が 12 です（13 が必要）".to_string(),
        };
        assert_eq!(err.kind(), "DataFormatError");
        assert!(err.to_string().contains("3 行目"));
    }

    #[test]
    fn test_render_message_contains_column() {
        let err = PlotError::Render {
            column: "k_t".to_string(),
            message: "列がありません".to_string(),
        };
        assert_eq!(err.kind(), "RenderError");
        assert!(err.to_string().contains("k_t"));
    }
}
