//! データセットの読み込み
//!
//! ヘッダで列位置を解決し、各行を [`FeatureEncoder`] で符号化して
//! 特徴量行列と目標値ベクトルを組み立てる。

use std::io::Read;
use std::path::Path;

use csv::ByteRecord;

use super::encoder::{FEATURE_DIMENSION, FeatureEncoder};
use super::io::{InputSource, delimited_reader};
use super::schema::ColumnIndex;
use crate::error::LoadError;

/// 読み込み統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// ヘッダを除いて読んだ行数
    pub rows_read: usize,
    /// 数値欄の欠落・不正で棄却した行数
    pub rows_rejected: usize,
}

impl LoadStats {
    pub fn rows_accepted(&self) -> usize {
        self.rows_read - self.rows_rejected
    }
}

/// 読み込み済みデータセット
///
/// `features[i]` と `targets[i]` が 1 対 1 に対応する。
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
    /// 読み込み終了時点のカテゴリ表
    pub encoder: FeatureEncoder,
    pub stats: LoadStats,
}

impl Dataset {
    /// サンプル数
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// 空かどうか（[`load_reader`] が返すデータセットは常に非空）
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// 特徴量の次元数
    pub fn dimension(&self) -> usize {
        FEATURE_DIMENSION
    }
}

/// パスから読み込む（`-` は標準入力、gzip は展開）
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let input = InputSource::from_path(path);
    let reader = input.open().map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loading {input}");
    load_reader(reader)
}

/// 任意の `Read` から読み込む
///
/// 読み込み途中の I/O エラーは [`LoadError::Read`]、
/// 有効なデータ行が 1 行も残らなければ [`LoadError::Empty`]。
/// UTF-8 として不正なバイトは行を落とさず U+FFFD に置き換えて扱う。
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = delimited_reader(source);

    let header = reader.byte_headers()?.clone();
    if header.is_empty() {
        return Err(LoadError::Empty);
    }
    let index = ColumnIndex::from_header(&header)?;

    let mut encoder = FeatureEncoder::new();
    let mut features = Vec::new();
    let mut targets = Vec::new();
    let mut stats = LoadStats::default();

    let mut row = ByteRecord::new();
    while reader.read_byte_record(&mut row)? {
        stats.rows_read += 1;
        match encoder.encode(&row, &index) {
            Some(encoded) => {
                debug_assert_eq!(encoded.features.len(), FEATURE_DIMENSION);
                features.push(encoded.features);
                targets.push(encoded.target);
            }
            None => stats.rows_rejected += 1,
        }
    }

    if features.is_empty() {
        return Err(LoadError::Empty);
    }

    log::info!(
        "Loaded {} rows ({} read, {} rejected)",
        features.len(),
        stats.rows_read,
        stats.rows_rejected
    );

    Ok(Dataset {
        features,
        targets,
        encoder,
        stats,
    })
}
