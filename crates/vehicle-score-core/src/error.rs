//! エラー型
//!
//! 読み込み段階と設定段階の致命的エラーのみを表す。
//! 行単位の不正（数値欄の欠落・パース失敗）はエラーにせず、ローダ内でスキップする。

use std::path::PathBuf;

/// データセット読み込みのエラー
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// 入力を開けない
    #[error("cannot open input {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 読み込み途中の I/O エラー
    #[error("failed to read input: {0}")]
    Read(#[from] csv::Error),

    /// ヘッダに必須列が無い
    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    /// 有効なデータ行が 1 行も無い（入力次元が決まらない）
    #[error("input contains no usable data rows")]
    Empty,
}

/// 設定のエラー
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// 値の範囲外
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let err = LoadError::MissingColumn("odometer");
        assert_eq!(err.to_string(), "required column `odometer` is missing from the header");
    }

    #[test]
    fn open_error_includes_path() {
        let err = LoadError::Open {
            path: PathBuf::from("nowhere/vehicles.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("nowhere/vehicles.csv"), "{msg}");
    }
}
