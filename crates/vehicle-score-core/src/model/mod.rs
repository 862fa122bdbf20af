//! スコアリングモデル

pub mod perceptron;

pub use perceptron::{Perceptron, sigmoid};
