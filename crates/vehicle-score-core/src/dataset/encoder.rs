//! カテゴリ値の符号化と特徴量ベクトル化
//!
//! 1 行を `[region, year, manufacturer, condition, odometer]` の固定順の
//! `f64` ベクトルへ変換する。カテゴリ列は列ごとの [`CategoryTable`] で
//! 「読み込み全体で最初に現れた順に 0 から」採番する。

use std::collections::HashMap;

use csv::ByteRecord;

use super::schema::{Column, ColumnIndex};

/// 特徴量ベクトルの次元数
pub const FEATURE_DIMENSION: usize = 5;

/// カテゴリ値 → 整数コードの表
///
/// コードは `0..len()` で欠番・重複なし。表は増えるだけで、既存コードの振り直しはしない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    codes: HashMap<String, u32>,
    /// コード順の値（`values[code] == value`）
    values: Vec<String>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値のコードを返す。未登録なら現在の表サイズを新しいコードとして登録する。
    pub fn code_or_insert(&mut self, value: &str) -> u32 {
        if let Some(&code) = self.codes.get(value) {
            return code;
        }
        let code = self.values.len() as u32;
        self.codes.insert(value.to_owned(), code);
        self.values.push(value.to_owned());
        code
    }

    /// 登録済みの値のコード
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// コードに対応する値
    pub fn value(&self, code: u32) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(code, value)` をコード順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.values.iter().enumerate().map(|(code, v)| (code as u32, v.as_str()))
    }
}

/// 符号化済みの 1 行
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRow {
    /// 長さ [`FEATURE_DIMENSION`] の特徴量
    pub features: Vec<f64>,
    /// 目標値（価格）
    pub target: f64,
}

/// 行 → 特徴量ベクトルの変換器
///
/// 読み込み全体で 1 つのインスタンスを使い回す。カテゴリ表は行をまたいで蓄積される。
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    region: CategoryTable,
    manufacturer: CategoryTable,
    condition: CategoryTable,
}

impl FeatureEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 行を符号化する。
    ///
    /// price / year / odometer のいずれかが空、または数値として読めない場合は `None`
    /// （行の棄却）。棄却判定はカテゴリ表の参照より先に行うため、棄却された行は
    /// どのカテゴリ表にも影響しない。
    pub fn encode(&mut self, row: &ByteRecord, index: &ColumnIndex) -> Option<EncodedRow> {
        let price = parse_number(&index.field(row, Column::Price))?;
        let year = parse_number(&index.field(row, Column::Year))?;
        let odometer = parse_number(&index.field(row, Column::Odometer))?;

        let region = self.region.code_or_insert(&index.field(row, Column::Region));
        let manufacturer =
            self.manufacturer.code_or_insert(&index.field(row, Column::Manufacturer));
        let condition = self.condition.code_or_insert(&index.field(row, Column::Condition));

        Some(EncodedRow {
            features: vec![
                f64::from(region),
                year,
                f64::from(manufacturer),
                f64::from(condition),
                odometer,
            ],
            target: price,
        })
    }

    pub fn region_table(&self) -> &CategoryTable {
        &self.region
    }

    pub fn manufacturer_table(&self) -> &CategoryTable {
        &self.manufacturer
    }

    pub fn condition_table(&self) -> &CategoryTable {
        &self.condition
    }
}

/// 10 進浮動小数点としてパース。空文字列・末尾の空白は失敗扱い。
fn parse_number(field: &str) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    field.parse().ok()
}
