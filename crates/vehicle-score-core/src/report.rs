//! コンソール向けサマリ

use std::fmt;
use std::time::Duration;

/// バッチ推論結果のサマリ
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSummary {
    /// 処理したレコード数
    pub records: usize,
    /// バッチ推論呼び出しの経過時間
    pub elapsed: Duration,
    /// 先頭から `preview_count` 件の `(目標値, スコア)`
    pub previews: Vec<(f64, f64)>,
}

impl ScoringSummary {
    pub fn new(targets: &[f64], scores: &[f64], elapsed: Duration, preview_count: usize) -> Self {
        debug_assert_eq!(targets.len(), scores.len());
        let previews = targets
            .iter()
            .zip(scores)
            .take(preview_count)
            .map(|(&t, &s)| (t, s))
            .collect();
        Self {
            records: scores.len(),
            elapsed,
            previews,
        }
    }

    /// `Real: $<target> | Predicho: <score>` 形式の行
    pub fn preview_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.previews
            .iter()
            .map(|(target, score)| format!("Real: ${target:.2} | Predicho: {score:.2}"))
    }
}

impl fmt::Display for ScoringSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed {} records in {:?}", self.records, self.elapsed)?;
        for line in self.preview_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
