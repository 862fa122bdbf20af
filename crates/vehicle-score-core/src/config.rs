//! 実行設定
//!
//! デフォルト値 → TOML ファイル（`[scoring]` テーブル）→ CLI 引数の順で上書きする。
//! CLI 側のマージは `vehicle-score-cli` が行う。

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// 入力ファイルのデフォルトパス
pub const DEFAULT_INPUT_PATH: &str = "vehicles.csv";
/// デフォルトのワーカースレッド数
pub const DEFAULT_WORKER_COUNT: usize = 8;
/// サマリに表示する予測の件数
pub const DEFAULT_PREVIEW_COUNT: usize = 5;

/// スコアリング設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// 入力 CSV のパス（`-` で標準入力、gzip は自動で展開）
    pub input_path: PathBuf,
    /// バッチ推論のワーカースレッド数（1 以上）
    pub worker_count: usize,
    /// 重み初期化のシード（`None` の場合は実行ごとに変わる）
    pub seed: Option<u64>,
    /// サマリに表示する予測の件数
    pub preview_count: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            worker_count: DEFAULT_WORKER_COUNT,
            seed: None,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

/// TOML ファイルの最上位
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    scoring: ScoringConfig,
}

impl ScoringConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        file.scoring.validate()?;
        Ok(file.scoring)
    }

    /// 値の範囲チェック
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.workers().map(drop)
    }

    /// 検証済みのワーカー数
    pub fn workers(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.worker_count)
            .ok_or_else(|| ConfigError::Invalid("worker_count must be >= 1".into()))
    }
}
