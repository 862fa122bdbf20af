//! # vehicle-score-core
//!
//! 中古車リスティングの CSV を数値特徴量ベクトルへ変換し、
//! 固定重みの単層パーセプトロンでバッチスコアリングするライブラリ。
//!
//! ## 構成
//!
//! - [`dataset`] - カテゴリ値の符号化（出現順で 0 から採番）と CSV の読み込み
//! - [`model`] - 線形結合 + シグモイドのパーセプトロン
//! - [`inference`] - ブロック分割によるスレッド並列バッチ推論
//! - [`config`] - 実行設定（デフォルト値 / TOML）
//! - [`report`] - コンソール向けサマリの整形
//!
//! ## 使い方
//!
//! ```no_run
//! use std::num::NonZeroUsize;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vehicle_score_core::{Perceptron, dataset, inference};
//!
//! let data = dataset::load_path("vehicles.csv")?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let model = Perceptron::new(data.dimension(), &mut rng);
//! let scores = inference::run_batch(&model, &data.features, NonZeroUsize::new(8).unwrap());
//! assert_eq!(scores.len(), data.len());
//! # Ok::<(), vehicle_score_core::LoadError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod model;
pub mod report;

pub use config::ScoringConfig;
pub use dataset::{CategoryTable, Dataset, FEATURE_DIMENSION, FeatureEncoder, LoadStats};
pub use error::{ConfigError, LoadError};
pub use inference::{BlockPartition, run_batch, score_sequential};
pub use model::Perceptron;
pub use report::ScoringSummary;
