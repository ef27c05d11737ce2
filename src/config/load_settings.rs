// src/config/load_settings.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;

use crate::config::settings::PlotSettings;
use crate::error::PlotError;

/// 描画設定の読み込み
pub fn load_plot_settings<P: AsRef<Path>>(path: P) -> Result<PlotSettings, PlotError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PlotError::Config(format!("設定ファイル {} を開けません: {}", path.display(), e))
    })?;
    let settings: PlotSettings = from_reader(file).map_err(|e| {
        PlotError::Config(format!("設定ファイル {} を解析できません: {}", path.display(), e))
    })?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::OutputMode;

    #[test]
    fn test_load_shipped_settings() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/plot_settings.yaml");
        let settings = load_plot_settings(path).unwrap();

        assert!(settings.input_path.is_some());
        assert_eq!(settings.output_mode, OutputMode::Interactive);
        assert_eq!(settings.style.figsize, [12.0, 10.0]);
        assert_eq!(settings.style.fonts.axes, 12.0);
    }

    #[test]
    fn test_missing_settings_file() {
        match load_plot_settings("config/no_such_file.yaml") {
            Err(PlotError::Config(message)) => assert!(message.contains("no_such_file")),
            other => panic!("Expected PlotError::Config, got {:?}", other),
        }
    }
}
