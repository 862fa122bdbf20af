//! バッチの静的ブロック分割
//!
//! `N` 件を `workers` 個の連続ブロックに分ける。ブロック長は `ceil(N / workers)` で、
//! 最後のブロックは `N` で切り詰める。`workers > N` のときや端数で余ったブロックは
//! 空範囲になる（処理なし、エラーではない）。

use std::num::NonZeroUsize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPartition {
    len: usize,
    workers: NonZeroUsize,
    block_size: usize,
}

impl BlockPartition {
    pub fn new(len: usize, workers: NonZeroUsize) -> Self {
        Self {
            len,
            workers,
            block_size: len.div_ceil(workers.get()),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// ワーカー `w` の担当範囲 `[w*block, min((w+1)*block, N))`
    pub fn range(&self, worker: usize) -> Range<usize> {
        debug_assert!(worker < self.workers.get());
        let start = worker.saturating_mul(self.block_size).min(self.len);
        let end = worker.saturating_add(1).saturating_mul(self.block_size).min(self.len);
        start..end
    }

    /// 全ワーカーの担当範囲（空範囲を含む）をワーカー番号順に返す
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.workers.get()).map(move |w| self.range(w))
    }

    /// 実際に処理を持つワーカー数
    pub fn active_workers(&self) -> usize {
        self.ranges().filter(|r| !r.is_empty()).count()
    }
}
