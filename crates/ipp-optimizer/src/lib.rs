//! # IPP Optimizer
//!
//! 單變數有界數值最小化（粗掃描 + 黃金分割搜尋）

pub mod scalar;

// Re-export 主要類型
pub use scalar::minimize_scalar;

use serde::{Deserialize, Serialize};

/// 優化器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// 搜尋下界（訂購量至少為 1）
    pub lower_bound: f64,

    /// 初始猜測值
    pub initial_guess: f64,

    /// 收斂容忍值（搜尋區間寬度）
    pub tolerance: f64,

    /// 迭代預算，超出即回報未收斂
    pub max_iterations: u32,

    /// 粗掃描的網格點數
    pub scan_points: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            lower_bound: 1.0,
            initial_guess: 100.0,
            tolerance: 1e-4,
            max_iterations: 200,
            scan_points: 64,
        }
    }
}

impl OptimizerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置初始猜測值
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    /// 建構器模式：設置收斂容忍值
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// 建構器模式：設置迭代預算
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// 建構器模式：設置粗掃描網格點數
    pub fn with_scan_points(mut self, scan_points: u32) -> Self {
        self.scan_points = scan_points.max(2);
        self
    }
}

/// 優化結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationOutcome {
    /// 最小化目標函數的自變數值
    pub argmin: f64,

    /// 最小化後的目標函數值
    pub value: f64,

    /// 黃金分割階段實際使用的迭代次數
    pub iterations: u32,
}
