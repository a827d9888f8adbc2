//! 需求輪廓推導
//!
//! 把原始產品記錄換算成策略公式所需的需求與成本數字。

use serde::Serialize;

use ipp_core::{PolicyConfig, PolicyError, ProductRecord, Result};

/// 每年月數
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 每年天數
pub const DAYS_PER_YEAR: f64 = 365.0;

/// 由產品記錄推導出的需求輪廓
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandProfile {
    /// 年需求量（總售出件數 × 12）
    pub annual_demand: f64,

    /// 日需求量（年需求量 / 365）
    pub daily_demand: f64,

    /// 需求變異數（月均銷量 × 變異數比率）
    pub demand_variance: f64,

    /// 每件持有成本（單價 × 持有成本比率）
    pub holding_cost_per_unit: f64,
}

impl DemandProfile {
    /// 從產品記錄與配置推導需求輪廓
    pub fn from_record(record: &ProductRecord, config: &PolicyConfig) -> Self {
        let annual_demand = record.total_items_sold * MONTHS_PER_YEAR;
        Self {
            annual_demand,
            daily_demand: annual_demand / DAYS_PER_YEAR,
            demand_variance: record.avg_items_sold_per_month * config.demand_variance_ratio,
            holding_cost_per_unit: record.original_price_per_unit * config.holding_cost_rate,
        }
    }
}

/// 銷售效率：月銷售率 / 現有庫存
///
/// 庫存為零時回報 [`PolicyError::ZeroInventory`]，不會回傳無窮大。
pub fn sales_efficiency(record: &ProductRecord) -> Result<f64> {
    if record.inventory_qty == 0.0 {
        return Err(PolicyError::ZeroInventory);
    }
    Ok(record.avg_items_sold_per_month / record.inventory_qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_record() -> ProductRecord {
        ProductRecord::new("WIDGET-001", 120.0, 10.0, 200.0, 7.0, 20.0)
    }

    #[test]
    fn test_profile_reference_values() {
        let profile = DemandProfile::from_record(&scenario_record(), &PolicyConfig::default());

        assert_eq!(profile.annual_demand, 1440.0);
        assert!((profile.daily_demand - 3.9452).abs() < 1e-3);
        assert_eq!(profile.demand_variance, 5.0);
        assert_eq!(profile.holding_cost_per_unit, 1.0);
    }

    #[test]
    fn test_sales_efficiency() {
        let efficiency = sales_efficiency(&scenario_record()).unwrap();
        assert!((efficiency - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_zero_inventory_is_division_by_zero_error() {
        let mut record = scenario_record();
        record.inventory_qty = 0.0;

        assert_eq!(sales_efficiency(&record), Err(PolicyError::ZeroInventory));
    }
}
