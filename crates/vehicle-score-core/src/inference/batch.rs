//! 並列バッチ推論
//!
//! 呼び出しごとに `workers` 本のスコープ付きスレッドを起動し、各スレッドは
//! [`BlockPartition`] で割り当てられた連続範囲だけを採点して、出力バッファの
//! 対応する部分スライスに書き込む。出力バッファは事前に確保し、`split_at_mut` で
//! 互いに素な `&mut` に分けて渡すため、ロックもアトミックも使わない。
//! 全スレッドの join が終わるまで戻らないので、途中結果が外に見えることはない。

use std::num::NonZeroUsize;

use super::partition::BlockPartition;
use crate::model::Perceptron;

/// `inputs` 全件を並列に採点し、入力と同じ順序のスコアを返す。
///
/// 結果は `workers` の値によらず [`score_sequential`] と完全に一致する。
///
/// # Panics
///
/// 入力ベクトルの次元がモデルと一致しない場合（ワーカー内の panic は join 時に伝播する）。
pub fn run_batch<V>(model: &Perceptron, inputs: &[V], workers: NonZeroUsize) -> Vec<f64>
where
    V: AsRef<[f64]> + Sync,
{
    let partition = BlockPartition::new(inputs.len(), workers);
    let mut outputs = vec![0.0; inputs.len()];

    log::debug!(
        "run_batch: {} inputs, {} workers, block_size={}, active={}",
        partition.len(),
        partition.workers(),
        partition.block_size(),
        partition.active_workers()
    );

    std::thread::scope(|scope| {
        let mut rest: &mut [f64] = &mut outputs;
        for range in partition.ranges() {
            // 空範囲のワーカーは何もしない
            if range.is_empty() {
                continue;
            }
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            let block_inputs = &inputs[range];

            scope.spawn(move || {
                for (out, input) in block.iter_mut().zip(block_inputs) {
                    *out = model.predict(input.as_ref());
                }
            });
        }
    });

    outputs
}

/// 単一スレッドでの採点（並列版の基準実装）
pub fn score_sequential<V: AsRef<[f64]>>(model: &Perceptron, inputs: &[V]) -> Vec<f64> {
    inputs.iter().map(|input| model.predict(input.as_ref())).collect()
}
