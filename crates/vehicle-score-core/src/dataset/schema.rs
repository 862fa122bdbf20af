//! 入力列の定義とヘッダ解決
//!
//! 行はバイト列のまま受け取り、フィールドは先頭の空白だけを落としてから解釈する。
//! 末尾の空白は値の一部として残る（`"10 "` は数値として読めない）。

use std::borrow::Cow;

use csv::ByteRecord;

use crate::error::LoadError;

/// 必須列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Region,
    Price,
    Year,
    Manufacturer,
    Condition,
    Odometer,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Region,
        Column::Price,
        Column::Year,
        Column::Manufacturer,
        Column::Condition,
        Column::Odometer,
    ];

    /// ヘッダ上の列名（大文字小文字を区別し完全一致）
    pub const fn name(self) -> &'static str {
        match self {
            Column::Region => "region",
            Column::Price => "price",
            Column::Year => "year",
            Column::Manufacturer => "manufacturer",
            Column::Condition => "condition",
            Column::Odometer => "odometer",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// 列名 → 行内位置の対応（ヘッダから 1 回だけ作る）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; Column::ALL.len()],
}

impl ColumnIndex {
    /// ヘッダ行から必須列の位置を解決する。余分な列は無視。
    ///
    /// 同名の列が複数ある場合は後ろの列が勝つ。
    pub fn from_header(header: &ByteRecord) -> Result<Self, LoadError> {
        let mut positions = [usize::MAX; Column::ALL.len()];
        for (pos, name) in header.iter().enumerate() {
            let name = name.trim_ascii_start();
            if let Some(col) = Column::ALL.iter().find(|c| c.name().as_bytes() == name) {
                positions[col.slot()] = pos;
            }
        }
        for col in Column::ALL {
            if positions[col.slot()] == usize::MAX {
                return Err(LoadError::MissingColumn(col.name()));
            }
        }
        Ok(Self { positions })
    }

    /// 列の位置
    #[inline]
    pub fn position(&self, col: Column) -> usize {
        self.positions[col.slot()]
    }

    /// 行から列の値を取り出す。行が短い場合は空文字列。
    ///
    /// 先頭の空白を除き、UTF-8 として不正なバイトは U+FFFD に置き換える。
    #[inline]
    pub fn field<'r>(&self, row: &'r ByteRecord, col: Column) -> Cow<'r, str> {
        let raw = row.get(self.position(col)).unwrap_or(b"");
        String::from_utf8_lossy(raw.trim_ascii_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(fields: &[&str]) -> ByteRecord {
        ByteRecord::from(fields.to_vec())
    }

    #[test]
    fn resolves_positions_in_any_order_with_extra_columns() {
        let h = header(&[
            "id", "odometer", "region", "url", "price", "year", "condition", "manufacturer",
        ]);
        let index = ColumnIndex::from_header(&h).unwrap();
        assert_eq!(index.position(Column::Region), 2);
        assert_eq!(index.position(Column::Price), 4);
        assert_eq!(index.position(Column::Year), 5);
        assert_eq!(index.position(Column::Manufacturer), 7);
        assert_eq!(index.position(Column::Condition), 6);
        assert_eq!(index.position(Column::Odometer), 1);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let h = header(&["region", "price", "year", "manufacturer", "condition"]);
        let err = ColumnIndex::from_header(&h).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("odometer")));
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let h = header(&["Region", "price", "year", "manufacturer", "condition", "odometer"]);
        let err = ColumnIndex::from_header(&h).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("region")));
    }

    #[test]
    fn short_row_yields_empty_field() {
        let h = header(&["region", "price", "year", "manufacturer", "condition", "odometer"]);
        let index = ColumnIndex::from_header(&h).unwrap();
        let row = ByteRecord::from(vec!["A", "1000"]);
        assert_eq!(index.field(&row, Column::Region), "A");
        assert_eq!(index.field(&row, Column::Odometer), "");
    }

    #[test]
    fn only_leading_whitespace_is_dropped() {
        let h = header(&[" region", " price", "year", "manufacturer", "condition", "odometer"]);
        let index = ColumnIndex::from_header(&h).unwrap();
        let row = ByteRecord::from(vec!["  A ", " 10 ", "2001", "X", "good", "7"]);
        assert_eq!(index.field(&row, Column::Region), "A ");
        assert_eq!(index.field(&row, Column::Price), "10 ");
    }

    #[test]
    fn trailing_whitespace_in_header_does_not_match() {
        let h = header(&["region ", "price", "year", "manufacturer", "condition", "odometer"]);
        let err = ColumnIndex::from_header(&h).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("region")));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let h = header(&["region", "price", "year", "manufacturer", "condition", "odometer"]);
        let index = ColumnIndex::from_header(&h).unwrap();
        let mut row = ByteRecord::new();
        for field in [&b"A"[..], b"1", b"2000", b"citro\xebn", b"good", b"5"] {
            row.push_field(field);
        }
        assert_eq!(index.field(&row, Column::Manufacturer), "citro\u{FFFD}n");
    }
}
