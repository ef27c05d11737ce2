// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{load_plot_settings, OutputMode, PlotSettings};
use data::{load_trajectory, ColumnViews};
use error::PlotError;
use render::PanelRenderer;

mod config;
mod data;
mod error;
mod render;

/// 弾道シミュレーション結果の描画
#[derive(Parser, Debug)]
#[command(name = "trajplot")]
#[command(about = "Plot projectile trajectory simulation output as 2x2 chart groups")]
#[command(version)]
struct Args {
    /// 設定ファイル (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 入力ファイル（タブ区切り）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 画像の保存先（指定すると persisted モード）
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// 出力ファイル名テンプレート（`{group}` をグループ名に置換）
    #[arg(long)]
    template: Option<String>,

    /// 画像として保存する
    #[arg(long, conflicts_with = "interactive")]
    persist: bool,

    /// ウィンドウに表示する
    #[arg(long)]
    interactive: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PlotError> {
    // 設定の読み込み
    let settings = resolve_settings(args)?;
    let target = settings.output_target()?;

    // 軌道データの読み込み
    let table = load_trajectory(settings.input_path()?)?;
    let views = ColumnViews::from_table(&table);

    // 描画
    let renderer = PanelRenderer::new(settings.style.clone(), target);
    let written = renderer.render(&views)?;
    info!(files = written.len(), "描画が完了しました");
    Ok(())
}

/// 設定ファイルとコマンドライン引数を合わせる（引数が優先）
fn resolve_settings(args: &Args) -> Result<PlotSettings, PlotError> {
    let mut settings = match &args.config {
        Some(path) => load_plot_settings(path)?,
        None => PlotSettings::default(),
    };

    if let Some(input) = &args.input {
        settings.input_path = Some(input.clone());
    }
    if let Some(dir) = &args.output_dir {
        settings.output_dir = Some(dir.clone());
        settings.output_mode = OutputMode::Persisted;
    }
    if let Some(template) = &args.template {
        settings.file_template = template.clone();
    }
    if args.persist {
        settings.output_mode = OutputMode::Persisted;
    }
    if args.interactive {
        settings.output_mode = OutputMode::Interactive;
    }
    Ok(settings)
}
