//! # IPP Calculation Engine
//!
//! 庫存策略計算引擎：策略公式、需求推導、狀態分類與批次管線

pub mod classifier;
pub mod formulas;
pub mod optimize;
pub mod profile;
pub mod runner;

// Re-export 主要類型
pub use formulas::CostParams;
pub use profile::DemandProfile;
pub use runner::PolicyRunner;

use serde::Serialize;

use ipp_core::{PolicyError, PolicyResult};

/// 批次計算結果
///
/// 成功計算的產品與失敗清單並存：單一記錄失敗不會使整個批次
/// 變成不透明的錯誤。
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// 每個產品的策略結果（保持輸入順序）
    pub results: Vec<PolicyResult>,

    /// 批次平均銷售效率（所有成功算出效率的記錄之平均；
    /// 若沒有任何記錄成功則為 None）
    pub average_efficiency: Option<f64>,

    /// 過量庫存判定門檻（平均效率 × 門檻比例）
    pub efficiency_threshold: Option<f64>,

    /// 失敗記錄清單（含產品名稱與失敗原因）
    pub failures: Vec<RecordFailure>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl BatchOutcome {
    /// 批次是否完全成功
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// 失敗產品名稱清單
    pub fn failed_products(&self) -> Vec<&str> {
        self.failures
            .iter()
            .map(|f| f.product_name.as_str())
            .collect()
    }
}

/// 單一記錄的失敗回報
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFailure {
    /// 產品名稱
    pub product_name: String,

    /// 失敗所在的管線階段
    pub stage: FailureStage,

    /// 失敗原因
    pub error: PolicyError,
}

impl RecordFailure {
    pub fn new(product_name: impl Into<String>, error: PolicyError) -> Self {
        let stage = FailureStage::from_error(&error);
        Self {
            product_name: product_name.into(),
            stage,
            error,
        }
    }
}

/// 管線階段（標示失敗發生處）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureStage {
    /// 第一階段：銷售效率計算
    Efficiency,

    /// 第二階段：策略公式計算
    Calculation,

    /// 第二階段：訂購量成本優化
    Optimization,
}

impl FailureStage {
    fn from_error(error: &PolicyError) -> Self {
        match error {
            PolicyError::ZeroInventory => FailureStage::Efficiency,
            PolicyError::NotConverged { .. } => FailureStage::Optimization,
            _ => FailureStage::Calculation,
        }
    }
}
