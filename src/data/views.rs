// src/data/views.rs

use std::collections::BTreeMap;

use crate::data::column::Column;
use crate::data::table::TrajectoryTable;

/// 名前付き列ビューの集合。描画側はこれだけを受け取る
#[derive(Debug, Clone, Default)]
pub struct ColumnViews<'a> {
    views: BTreeMap<Column, &'a [f64]>,
}

impl<'a> ColumnViews<'a> {
    #[cfg(test)]
    pub fn new() -> Self {
        ColumnViews {
            views: BTreeMap::new(),
        }
    }

    /// テーブルの全13列のビューを作る
    pub fn from_table(table: &'a TrajectoryTable) -> Self {
        let views = Column::ALL
            .iter()
            .map(|column| (*column, table.column(*column)))
            .collect();
        ColumnViews { views }
    }

    /// 列ビューを差し替える（検証の確認用）
    #[cfg(test)]
    pub fn insert(&mut self, column: Column, values: &'a [f64]) {
        self.views.insert(column, values);
    }

    pub fn get(&self, column: Column) -> Option<&'a [f64]> {
        self.views.get(&column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::column::COLUMN_COUNT;

    #[test]
    fn test_views_borrow_table_storage() {
        let table = TrajectoryTable::from_rows(vec![std::array::from_fn::<f64, COLUMN_COUNT, _>(
            |c| c as f64 * 2.0,
        )]);
        let views = ColumnViews::from_table(&table);

        for column in Column::ALL {
            let view = views.get(column).unwrap();
            assert!(std::ptr::eq(view, table.column(column)));
        }
    }

    #[test]
    fn test_partial_views() {
        let time = [0.0, 1.0];
        let mut views = ColumnViews::new();
        views.insert(Column::Time, &time);

        assert_eq!(views.get(Column::Time), Some(&time[..]));
        assert_eq!(views.get(Column::PosX), None);
    }
}
