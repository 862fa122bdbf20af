//! 中古車リスティング CSV のバッチスコアリング
//!
//! CSV を読み込んで特徴量化し、ランダム初期化したパーセプトロンで全件を並列採点して
//! 件数・経過時間・先頭数件の予測を表示する。

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use vehicle_score_core::{Perceptron, ScoringConfig, ScoringSummary, dataset, run_batch};

#[derive(Parser, Debug)]
#[command(name = "vehicle-score")]
#[command(author, version, about = "Batch-score used-vehicle listings with a fixed random perceptron")]
struct Cli {
    /// 設定ファイル（TOML, `[scoring]` テーブル）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 入力 CSV（`-` で標準入力、gzip は自動で展開）[default: vehicles.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// ワーカースレッド数 [default: 8]
    #[arg(short, long)]
    workers: Option<usize>,

    /// 重み初期化のシード（未指定時はランダム）
    #[arg(long)]
    seed: Option<u64>,

    /// 表示する予測の件数 [default: 5]
    #[arg(long)]
    preview: Option<usize>,
}

impl Cli {
    /// デフォルト → 設定ファイル → CLI 引数の順に上書きした設定
    fn resolve_config(&self) -> Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(workers) = self.workers {
            config.worker_count = workers;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(preview) = self.preview {
            config.preview_count = preview;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let workers = config.workers()?;

    log::info!("Reading {}", config.input_path.display());
    let data = dataset::load_path(&config.input_path)
        .with_context(|| format!("failed to load {}", config.input_path.display()))?;
    log::info!(
        "categories: region={} manufacturer={} condition={}",
        data.encoder.region_table().len(),
        data.encoder.manufacturer_table().len(),
        data.encoder.condition_table().len()
    );

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("model seed={seed}");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let model = Perceptron::new(data.dimension(), &mut rng);

    let start = Instant::now();
    let scores = run_batch(&model, &data.features, workers);
    let elapsed = start.elapsed();

    let summary = ScoringSummary::new(&data.targets, &scores, elapsed, config.preview_count);
    print!("{summary}");

    Ok(())
}
