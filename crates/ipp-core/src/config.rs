//! 策略參數配置

use serde::{Deserialize, Serialize};

/// 庫存策略計算參數
///
/// 預設值沿用原始模型的固定常數；門檻比例等啟發式參數
/// 開放為可配置項。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// 服務水準 z 分數（預設 1.96，約 97.5% 服務水準）
    pub z_score: f64,

    /// 每次訂購的固定訂購成本
    pub ordering_cost_per_order: f64,

    /// 每件缺貨成本
    pub stockout_cost_per_unit: f64,

    /// 持有成本比率（單價 × 比率 = 每件持有成本）
    pub holding_cost_rate: f64,

    /// 需求變異數比率（月均銷量 × 比率 = 需求變異數）
    pub demand_variance_ratio: f64,

    /// 過量庫存判定門檻比例（批次平均效率 × 比例 = 門檻）
    pub efficiency_threshold_ratio: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            z_score: 1.96,
            ordering_cost_per_order: 50.0,
            stockout_cost_per_unit: 10.0,
            holding_cost_rate: 0.05,
            demand_variance_ratio: 0.5,
            efficiency_threshold_ratio: 0.5,
        }
    }
}

impl PolicyConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置 z 分數
    pub fn with_z_score(mut self, z_score: f64) -> Self {
        self.z_score = z_score;
        self
    }

    /// 建構器模式：設置訂購成本
    pub fn with_ordering_cost(mut self, cost: f64) -> Self {
        self.ordering_cost_per_order = cost;
        self
    }

    /// 建構器模式：設置缺貨成本
    pub fn with_stockout_cost(mut self, cost: f64) -> Self {
        self.stockout_cost_per_unit = cost;
        self
    }

    /// 建構器模式：設置持有成本比率
    pub fn with_holding_cost_rate(mut self, rate: f64) -> Self {
        self.holding_cost_rate = rate;
        self
    }

    /// 建構器模式：設置需求變異數比率
    pub fn with_demand_variance_ratio(mut self, ratio: f64) -> Self {
        self.demand_variance_ratio = ratio;
        self
    }

    /// 建構器模式：設置效率門檻比例
    pub fn with_efficiency_threshold_ratio(mut self, ratio: f64) -> Self {
        self.efficiency_threshold_ratio = ratio;
        self
    }
}
