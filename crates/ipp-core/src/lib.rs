//! # IPP Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod product;
pub mod policy;

// Re-export 主要類型
pub use config::PolicyConfig;
pub use policy::{InventoryStatus, PolicyResult};
pub use product::ProductRecord;

/// 庫存策略計算錯誤
#[derive(Debug, Clone, PartialEq, serde::Serialize, thiserror::Error)]
pub enum PolicyError {
    /// 公式參數為負，超出定義域（如負數開平方根）
    #[error("定義域錯誤: {parameter} 不可為負（實際值 {value}）")]
    NegativeParameter { parameter: &'static str, value: f64 },

    /// 公式參數必須為正（如除數、單位持有成本）
    #[error("定義域錯誤: {parameter} 必須為正（實際值 {value}）")]
    NonPositiveParameter { parameter: &'static str, value: f64 },

    /// 參數不是有限數值（NaN 或無窮大）
    #[error("定義域錯誤: {parameter} 不是有限數值")]
    NonFiniteParameter { parameter: &'static str },

    /// 現有庫存為零，銷售效率除以零
    #[error("除以零: 現有庫存為零，無法計算銷售效率")]
    ZeroInventory,

    /// 優化器在迭代預算內未收斂
    #[error("優化未收斂: {iterations} 次迭代後搜尋區間寬度仍為 {width}")]
    NotConverged { iterations: u32, width: f64 },

    /// 批次輸入為空
    #[error("批次輸入為空，沒有任何產品記錄")]
    EmptyBatch,
}

pub type Result<T> = std::result::Result<T, PolicyError>;
