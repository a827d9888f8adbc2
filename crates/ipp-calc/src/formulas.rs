//! 庫存策略公式
//!
//! 純函數，無副作用；所有輸入在此做定義域檢查。

use serde::{Deserialize, Serialize};

use ipp_core::{PolicyError, Result};

/// 安全庫存
///
/// 公式：`z_score * sqrt(lead_time_days * demand_variance)`
pub fn safety_stock(demand_variance: f64, lead_time_days: f64, z_score: f64) -> Result<f64> {
    if demand_variance < 0.0 {
        return Err(PolicyError::NegativeParameter {
            parameter: "demand_variance",
            value: demand_variance,
        });
    }
    if lead_time_days < 0.0 {
        return Err(PolicyError::NegativeParameter {
            parameter: "lead_time_days",
            value: lead_time_days,
        });
    }

    Ok(z_score * (lead_time_days * demand_variance).sqrt())
}

/// 經濟訂購量（EOQ）
///
/// 公式：`sqrt(2 * annual_demand * ordering_cost / holding_cost_per_unit)`
pub fn eoq(annual_demand: f64, ordering_cost: f64, holding_cost_per_unit: f64) -> Result<f64> {
    if annual_demand < 0.0 {
        return Err(PolicyError::NegativeParameter {
            parameter: "annual_demand",
            value: annual_demand,
        });
    }
    if ordering_cost < 0.0 {
        return Err(PolicyError::NegativeParameter {
            parameter: "ordering_cost",
            value: ordering_cost,
        });
    }
    if holding_cost_per_unit <= 0.0 {
        return Err(PolicyError::NonPositiveParameter {
            parameter: "holding_cost_per_unit",
            value: holding_cost_per_unit,
        });
    }

    Ok((2.0 * annual_demand * ordering_cost / holding_cost_per_unit).sqrt())
}

/// 再訂購點（ROP）
///
/// 公式：`daily_demand * lead_time_days + safety_stock`
pub fn reorder_point(daily_demand: f64, lead_time_days: f64, safety_stock: f64) -> Result<f64> {
    let non_negative: [(&'static str, f64); 3] = [
        ("daily_demand", daily_demand),
        ("lead_time_days", lead_time_days),
        ("safety_stock", safety_stock),
    ];
    for (parameter, value) in non_negative {
        if value < 0.0 {
            return Err(PolicyError::NegativeParameter { parameter, value });
        }
    }

    Ok(daily_demand * lead_time_days + safety_stock)
}

/// 總庫存成本的固定參數（訂購量是決策變數，不在此列）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    /// 年需求量
    pub annual_demand: f64,

    /// 每件持有成本
    pub holding_cost_per_unit: f64,

    /// 每次訂購成本
    pub ordering_cost_per_order: f64,

    /// 每件缺貨成本
    pub stockout_cost_per_unit: f64,

    /// 前置時間（天）
    pub lead_time_days: f64,

    /// 安全庫存
    pub safety_stock: f64,
}

impl CostParams {
    /// 驗證所有參數在定義域內
    pub fn validate(&self) -> Result<()> {
        let non_negative: [(&'static str, f64); 4] = [
            ("annual_demand", self.annual_demand),
            ("ordering_cost_per_order", self.ordering_cost_per_order),
            ("stockout_cost_per_unit", self.stockout_cost_per_unit),
            ("safety_stock", self.safety_stock),
        ];
        for (parameter, value) in non_negative {
            if value < 0.0 {
                return Err(PolicyError::NegativeParameter { parameter, value });
            }
        }
        if self.holding_cost_per_unit <= 0.0 {
            return Err(PolicyError::NonPositiveParameter {
                parameter: "holding_cost_per_unit",
                value: self.holding_cost_per_unit,
            });
        }
        if self.lead_time_days < 0.0 {
            return Err(PolicyError::NegativeParameter {
                parameter: "lead_time_days",
                value: self.lead_time_days,
            });
        }
        Ok(())
    }
}

/// 總庫存成本：持有成本 + 訂購成本 + 缺貨成本
///
/// 缺貨項沿用上游模型，直接以年需求量與單次訂購量相減
/// （`max(0, annual_demand - order_qty)`），刻意不改為逐週期缺貨量。
pub fn total_inventory_cost(order_qty: f64, params: &CostParams) -> Result<f64> {
    if order_qty <= 0.0 {
        return Err(PolicyError::NonPositiveParameter {
            parameter: "order_qty",
            value: order_qty,
        });
    }
    params.validate()?;

    Ok(total_cost_raw(order_qty, params))
}

/// 無檢查版本，供優化器在已驗證的參數上反覆求值
pub(crate) fn total_cost_raw(order_qty: f64, params: &CostParams) -> f64 {
    let average_inventory = order_qty / 2.0 + params.safety_stock;
    let holding_total = average_inventory * params.holding_cost_per_unit;
    let ordering_total = params.annual_demand / order_qty * params.ordering_cost_per_order;
    let stockout_occurrences = (params.annual_demand - order_qty).max(0.0);
    let stockout_total = stockout_occurrences * params.stockout_cost_per_unit;

    holding_total + ordering_total + stockout_total
}
