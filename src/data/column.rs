// src/data/column.rs

/// 軌道テーブルの列数（固定）
pub const COLUMN_COUNT: usize = 13;

/// 軌道テーブルの列。列の意味はヘッダーではなく位置で決まる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Time,
    PosX,
    PosY,
    PosZ,
    VelX,
    VelY,
    VelZ,
    MachNumber,
    TerminalVelocity,
    KineticEnergy,
    PotentialEnergy,
    TotalEnergy,
    Momentum,
}

impl Column {
    /// ファイル上の並び順
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Time,
        Column::PosX,
        Column::PosY,
        Column::PosZ,
        Column::VelX,
        Column::VelY,
        Column::VelZ,
        Column::MachNumber,
        Column::TerminalVelocity,
        Column::KineticEnergy,
        Column::PotentialEnergy,
        Column::TotalEnergy,
        Column::Momentum,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 列名
    pub fn name(self) -> &'static str {
        match self {
            Column::Time => "time",
            Column::PosX => "posX",
            Column::PosY => "posY",
            Column::PosZ => "posZ",
            Column::VelX => "vX",
            Column::VelY => "vY",
            Column::VelZ => "vZ",
            Column::MachNumber => "machNumber",
            Column::TerminalVelocity => "terminalVelocity",
            Column::KineticEnergy => "k_e",
            Column::PotentialEnergy => "k_p",
            Column::TotalEnergy => "k_t",
            Column::Momentum => "momentum",
        }
    }

    /// 物理単位（無次元量は `None`）
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Column::Time => Some("s"),
            Column::PosX | Column::PosY | Column::PosZ => Some("m"),
            Column::VelX | Column::VelY | Column::VelZ | Column::TerminalVelocity => Some("m/s"),
            Column::MachNumber => None,
            Column::KineticEnergy | Column::PotentialEnergy | Column::TotalEnergy => Some("J"),
            Column::Momentum => Some("kg·m/s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_names_and_units() {
        assert_eq!(Column::Time.name(), "time");
        assert_eq!(Column::Time.unit(), Some("s"));
        assert_eq!(Column::TotalEnergy.name(), "k_t");
        assert_eq!(Column::Momentum.unit(), Some("kg·m/s"));
        assert_eq!(Column::MachNumber.unit(), None);
    }
}
