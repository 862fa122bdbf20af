//! バッチ推論エンジン

pub mod batch;
pub mod partition;

pub use batch::{run_batch, score_sequential};
pub use partition::BlockPartition;
