// src/data/loader.rs

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::data::column::{Column, COLUMN_COUNT};
use crate::data::table::TrajectoryTable;
use crate::error::PlotError;

/// 区切り文字（タブ）
const DELIMITER: char = '\t';

/// 軌道ファイルの読み込み
///
/// # 引数
/// - `path`: シミュレータが出力したタブ区切りファイルのパス
///
/// # 戻り値
/// - 軌道テーブル
pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<TrajectoryTable, PlotError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PlotError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_trajectory(&bytes)?;
    if table.is_empty() {
        warn!(path = %path.display(), "軌道データにデータ行がありません。空のグラフを描画します");
    } else if let Some((start, end)) = table.time_span() {
        info!(
            path = %path.display(),
            rows = table.row_count(),
            "軌道データを読み込みました（t = {} .. {} s）",
            start,
            end
        );
    }
    Ok(table)
}

/// ファイル内容の解析
///
/// 1行目はヘッダーとして内容を見ずに読み飛ばす。空行は無視する。
/// エラーの行番号はファイル上の行番号（1始まり、ヘッダーが1行目）。
pub fn parse_trajectory(bytes: &[u8]) -> Result<TrajectoryTable, PlotError> {
    // ヘッダー行は構造上必須
    if bytes.is_empty() {
        return Err(PlotError::DataFormat {
            line: 1,
            message: "ヘッダー行がありません".to_string(),
        });
    }

    let mut lines = bytes.split(|b| *b == b'\n');
    if let Some(header) = lines.next() {
        debug!(bytes = header.len(), "ヘッダー行を読み飛ばしました");
    }

    let mut rows = Vec::new();
    for (offset, raw) in lines.enumerate() {
        let line = offset + 2;
        let text = std::str::from_utf8(raw).map_err(|e| PlotError::DataFormat {
            line,
            message: format!("UTF-8 として解釈できません: {}", e),
        })?;
        if text.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(text, line)?);
    }

    Ok(TrajectoryTable::from_rows(rows))
}

/// データ行の解析
fn parse_row(text: &str, line: usize) -> Result<[f64; COLUMN_COUNT], PlotError> {
    let fields: Vec<&str> = text.split(DELIMITER).collect();
    if fields.len() != COLUMN_COUNT {
        return Err(PlotError::DataFormat {
            line,
            message: format!(
                "フィールド数が {} です（{} が必要）",
                fields.len(),
                COLUMN_COUNT
            ),
        });
    }

    let mut row = [0.0; COLUMN_COUNT];
    for ((value, field), column) in row.iter_mut().zip(fields.iter()).zip(Column::ALL) {
        let token = field.trim();
        *value = token.parse::<f64>().map_err(|_| PlotError::DataFormat {
            line,
            message: format!(
                "列 {} ({}) の値 `{}` は数値ではありません",
                column.index(),
                column.name(),
                token
            ),
        })?;
    }
    Ok(row)
}
