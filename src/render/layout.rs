// src/render/layout.rs

use crate::data::Column;

/// 横軸ラベル（全パネル共通）
pub const TIME_LABEL: &str = "Time (s)";

/// 図のグループ（描画順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartGroup {
    Kinematics,
    Velocity,
    Energetics,
}

impl ChartGroup {
    pub const ALL: [ChartGroup; 3] = [
        ChartGroup::Kinematics,
        ChartGroup::Velocity,
        ChartGroup::Energetics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartGroup::Kinematics => "Kinematics",
            ChartGroup::Velocity => "Velocity",
            ChartGroup::Energetics => "Energetics",
        }
    }

    /// 出力ファイル名に使うキー
    pub fn key(self) -> &'static str {
        match self {
            ChartGroup::Kinematics => "kinematics",
            ChartGroup::Velocity => "velocity",
            ChartGroup::Energetics => "energetics",
        }
    }

    /// このグループのパネル定義
    pub fn panels(self) -> impl Iterator<Item = &'static PanelSpec> {
        PANELS.iter().filter(move |p| p.group == self)
    }
}

/// パネル1枚の定義
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    pub group: ChartGroup,
    pub row: usize,
    pub col: usize,
    pub x: Column,
    pub y: Column,
    /// 縦軸の量の名前（単位は列から付ける）
    pub quantity: &'static str,
}

impl PanelSpec {
    /// 縦軸ラベル。単位のある列は `量 (単位)` とする
    pub fn y_label(&self) -> String {
        match self.y.unit() {
            Some(unit) => format!("{} ({})", self.quantity, unit),
            None => self.quantity.to_string(),
        }
    }
}

const fn panel(
    group: ChartGroup,
    row: usize,
    col: usize,
    y: Column,
    quantity: &'static str,
) -> PanelSpec {
    PanelSpec {
        group,
        row,
        col,
        x: Column::Time,
        y,
        quantity,
    }
}

/// 全12パネル（各グループ 2x2）
pub static PANELS: [PanelSpec; 12] = [
    panel(ChartGroup::Kinematics, 0, 0, Column::PosX, "PositionX"),
    panel(ChartGroup::Kinematics, 0, 1, Column::PosY, "PositionY"),
    panel(ChartGroup::Kinematics, 1, 0, Column::PosZ, "PositionZ"),
    panel(ChartGroup::Kinematics, 1, 1, Column::MachNumber, "Mach Number"),
    panel(ChartGroup::Velocity, 0, 0, Column::VelX, "VelocityX"),
    panel(ChartGroup::Velocity, 0, 1, Column::VelY, "VelocityY"),
    panel(ChartGroup::Velocity, 1, 0, Column::VelZ, "VelocityZ"),
    panel(ChartGroup::Velocity, 1, 1, Column::TerminalVelocity, "Terminal Velocity"),
    panel(ChartGroup::Energetics, 0, 0, Column::KineticEnergy, "Kinetic Energy"),
    panel(ChartGroup::Energetics, 0, 1, Column::PotentialEnergy, "Potential Energy"),
    panel(ChartGroup::Energetics, 1, 0, Column::TotalEnergy, "Total Energy"),
    panel(ChartGroup::Energetics, 1, 1, Column::Momentum, "Momentum"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_group_fills_a_two_by_two_grid() {
        for group in ChartGroup::ALL {
            let cells: HashSet<(usize, usize)> = group.panels().map(|p| (p.row, p.col)).collect();
            assert_eq!(cells.len(), 4);
            assert!(cells.iter().all(|(r, c)| *r < 2 && *c < 2));
        }
    }

    #[test]
    fn test_every_non_time_column_is_plotted_once() {
        let plotted: Vec<Column> = PANELS.iter().map(|p| p.y).collect();
        for column in Column::ALL.iter().skip(1) {
            assert_eq!(plotted.iter().filter(|c| *c == column).count(), 1);
        }
        assert!(PANELS.iter().all(|p| p.x == Column::Time));
    }

    #[test]
    fn test_labels_carry_units() {
        let labels: Vec<String> = PANELS.iter().map(|p| p.y_label()).collect();
        assert_eq!(labels[0], "PositionX (m)");
        assert_eq!(labels[3], "Mach Number");
        assert_eq!(labels[7], "Terminal Velocity (m/s)");
        assert_eq!(labels[10], "Total Energy (J)");
        assert_eq!(labels[11], "Momentum (kg·m/s)");
    }
}
