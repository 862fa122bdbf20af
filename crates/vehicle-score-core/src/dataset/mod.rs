//! 入力データセット
//!
//! CSV の読み込みと、カテゴリ列を含む行の数値特徴量ベクトルへの変換。

pub mod encoder;
pub mod io;
pub mod loader;
pub mod schema;

pub use encoder::{CategoryTable, EncodedRow, FEATURE_DIMENSION, FeatureEncoder};
pub use io::InputSource;
pub use loader::{Dataset, LoadStats, load_path, load_reader};
pub use schema::{Column, ColumnIndex};
