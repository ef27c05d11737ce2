// src/data/table.rs

use crate::data::column::{Column, COLUMN_COUNT};

/// 軌道テーブル（1行 = 1タイムステップ、13列固定）
///
/// 列ごとに値を保持し、読み込み後は変更されない。
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    columns: [Vec<f64>; COLUMN_COUNT],
}

impl TrajectoryTable {
    /// 行の並びからテーブルを組み立てる
    pub(crate) fn from_rows(rows: Vec<[f64; COLUMN_COUNT]>) -> Self {
        let mut columns: [Vec<f64>; COLUMN_COUNT] =
            std::array::from_fn(|_| Vec::with_capacity(rows.len()));
        for row in &rows {
            for (column, value) in columns.iter_mut().zip(row.iter()) {
                column.push(*value);
            }
        }
        TrajectoryTable { columns }
    }

    pub fn row_count(&self) -> usize {
        self.columns[Column::Time.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// 列ビュー（テーブルの値をそのまま参照する）
    pub fn column(&self, column: Column) -> &[f64] {
        &self.columns[column.index()]
    }

    /// 位置指定で1行を取り出す
    #[cfg(test)]
    pub fn row(&self, index: usize) -> Option<[f64; COLUMN_COUNT]> {
        if index >= self.row_count() {
            return None;
        }
        Some(std::array::from_fn(|c| self.columns[c][index]))
    }

    /// 先頭と末尾の時刻
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let time = self.column(Column::Time);
        Some((*time.first()?, *time.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<[f64; COLUMN_COUNT]> {
        vec![
            std::array::from_fn(|c| c as f64),
            std::array::from_fn(|c| 100.0 + c as f64),
        ]
    }

    #[test]
    fn test_column_view_matches_rows() {
        let rows = sample_rows();
        let table = TrajectoryTable::from_rows(rows.clone());

        assert_eq!(table.row_count(), 2);
        for column in Column::ALL {
            let view = table.column(column);
            assert_eq!(view.len(), 2);
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(view[i], row[column.index()]);
            }
        }
        assert_eq!(table.row(1), Some(rows[1]));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn test_time_span() {
        let table = TrajectoryTable::from_rows(sample_rows());
        assert_eq!(table.time_span(), Some((0.0, 100.0)));

        let empty = TrajectoryTable::from_rows(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.time_span(), None);
    }
}
