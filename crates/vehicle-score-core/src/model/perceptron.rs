//! 単層パーセプトロン
//!
//! `sigmoid(Σ w[i]·x[i] + b)` を計算するだけの固定重みモデル。学習は行わない。

use rand::Rng;

/// ロジスティックシグモイド `1 / (1 + e^-x)`
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// 重みとバイアスを保持するモデル（構築後は不変）
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
}

impl Perceptron {
    /// 各重みとバイアスを [-1, 1] の一様分布から独立に引いて初期化する。
    ///
    /// 乱数を消費するのはここだけ。同じシードの `rng` からは同じモデルができる。
    pub fn new<R: Rng>(input_dimension: usize, rng: &mut R) -> Self {
        let weights: Vec<f64> =
            (0..input_dimension).map(|_| rng.random_range(-1.0..=1.0)).collect();
        let bias: f64 = rng.random_range(-1.0..=1.0);
        Self { weights, bias }
    }

    /// 重みを直接指定して作る
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// 入力次元
    pub fn input_dimension(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// 1 ベクトルのスコア（0〜1）
    ///
    /// # Panics
    ///
    /// `input.len()` が入力次元と一致しない場合（呼び出し側の契約違反）。
    #[inline]
    pub fn predict(&self, input: &[f64]) -> f64 {
        assert_eq!(
            input.len(),
            self.weights.len(),
            "input dimension mismatch: expected {}, got {}",
            self.weights.len(),
            input.len()
        );
        let sum: f64 = input.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        sigmoid(sum + self.bias)
    }
}
