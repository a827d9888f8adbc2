//! 訂購量成本優化
//!
//! 把總庫存成本接上有界標量最小化器，求成本最小的訂購量。

use ipp_optimizer::{minimize_scalar, OptimizationOutcome, OptimizerConfig};

use ipp_core::Result;

use crate::formulas::{self, CostParams};

/// 求成本最小的訂購量（`order_qty >= 1`）
///
/// 搜尋上界取 `2 × max(年需求量, 無約束 EOQ, 初始猜測值)`：
/// 超過 max(年需求量, EOQ) 之後持有與訂購兩項成本都不再下降，
/// 全域最小值必定落在括弧內。
pub fn optimal_order_quantity(
    params: &CostParams,
    config: &OptimizerConfig,
) -> Result<OptimizationOutcome> {
    params.validate()?;

    let unconstrained_eoq = formulas::eoq(
        params.annual_demand,
        params.ordering_cost_per_order,
        params.holding_cost_per_unit,
    )?;

    let upper_bound = 2.0
        * params
            .annual_demand
            .max(unconstrained_eoq)
            .max(config.initial_guess);

    minimize_scalar(
        |order_qty| formulas::total_cost_raw(order_qty, params),
        upper_bound,
        config,
    )
}
