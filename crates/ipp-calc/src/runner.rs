//! 批次管線
//!
//! 兩段式管線：第一段逐筆算銷售效率並求批次平均，第二段在固定的
//! 門檻下對每個產品獨立計算策略參數與狀態。第二段各產品之間沒有
//! 共享可變狀態，以 rayon 並行處理。

use rayon::prelude::*;

use ipp_core::{
    PolicyConfig, PolicyError, PolicyResult, ProductRecord, Result,
};
use ipp_optimizer::OptimizerConfig;

use crate::classifier;
use crate::formulas::{self, CostParams};
use crate::optimize;
use crate::profile::{self, DemandProfile};
use crate::{BatchOutcome, FailureStage, RecordFailure};

/// 批次策略計算器
///
/// 錯誤處理策略為 skip-and-report：單筆記錄失敗不會中止批次，
/// 失敗記錄連同原因列入 [`BatchOutcome::failures`]，其餘產品照常輸出。
/// 第一段就失敗的記錄不納入平均效率，也不出現在結果表中。
#[derive(Debug, Clone, Default)]
pub struct PolicyRunner {
    /// 策略參數
    policy: PolicyConfig,

    /// 優化器配置
    optimizer: OptimizerConfig,
}

impl PolicyRunner {
    /// 創建使用預設配置的計算器
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置策略參數
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// 建構器模式：設置優化器配置
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// 執行完整批次計算
    ///
    /// 輸入為空時回報 [`PolicyError::EmptyBatch`]；所有記錄都在第一段
    /// 失敗時回傳空結果表與完整失敗清單（`average_efficiency` 為 None），
    /// 而不是整批失敗。
    pub fn run(&self, records: &[ProductRecord]) -> Result<BatchOutcome> {
        if records.is_empty() {
            return Err(PolicyError::EmptyBatch);
        }

        tracing::info!("開始批次計算：{} 筆產品記錄", records.len());
        let start_time = std::time::Instant::now();

        // 第一段：逐筆驗證並計算銷售效率
        let mut scored: Vec<(&ProductRecord, f64)> = Vec::with_capacity(records.len());
        let mut failures: Vec<RecordFailure> = Vec::new();

        for record in records {
            let efficiency = record
                .validate()
                .and_then(|_| profile::sales_efficiency(record));

            match efficiency {
                Ok(value) => scored.push((record, value)),
                Err(error) => {
                    tracing::debug!("產品 {} 第一段失敗: {}", record.product_name, error);
                    failures.push(RecordFailure {
                        product_name: record.product_name.clone(),
                        stage: FailureStage::Efficiency,
                        error,
                    });
                }
            }
        }

        if scored.is_empty() {
            tracing::warn!("批次中沒有任何記錄成功算出銷售效率");
            return Ok(BatchOutcome {
                results: Vec::new(),
                average_efficiency: None,
                efficiency_threshold: None,
                failures,
                calculation_time_ms: Some(start_time.elapsed().as_millis()),
            });
        }

        // 批次統計只來自成功算出效率的記錄
        let average_efficiency =
            scored.iter().map(|(_, value)| value).sum::<f64>() / scored.len() as f64;
        let efficiency_threshold = average_efficiency * self.policy.efficiency_threshold_ratio;
        tracing::debug!(
            "平均銷售效率 {:.4}，過量判定門檻 {:.4}",
            average_efficiency,
            efficiency_threshold
        );

        // 第二段：各產品獨立計算，並行處理且保持輸入順序
        let outcomes: Vec<(usize, std::result::Result<PolicyResult, PolicyError>)> = scored
            .par_iter()
            .enumerate()
            .map(|(index, (record, efficiency))| {
                (
                    index,
                    self.score_record(record, *efficiency, efficiency_threshold),
                )
            })
            .collect();

        let mut results = Vec::with_capacity(scored.len());
        for (index, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(error) => {
                    let product_name = &scored[index].0.product_name;
                    tracing::debug!("產品 {} 第二段失敗: {}", product_name, error);
                    failures.push(RecordFailure::new(product_name.clone(), error));
                }
            }
        }

        let elapsed = start_time.elapsed();
        tracing::info!(
            "批次計算完成：成功 {} 筆，失敗 {} 筆，耗時 {:?}",
            results.len(),
            failures.len(),
            elapsed
        );

        Ok(BatchOutcome {
            results,
            average_efficiency: Some(average_efficiency),
            efficiency_threshold: Some(efficiency_threshold),
            failures,
            calculation_time_ms: Some(elapsed.as_millis()),
        })
    }

    /// 單一產品的第二段計算：公式 → 優化 → 分類
    fn score_record(
        &self,
        record: &ProductRecord,
        sales_efficiency: f64,
        efficiency_threshold: f64,
    ) -> Result<PolicyResult> {
        let profile = DemandProfile::from_record(record, &self.policy);

        let safety_stock = formulas::safety_stock(
            profile.demand_variance,
            record.lead_time_days,
            self.policy.z_score,
        )?;

        let eoq = formulas::eoq(
            profile.annual_demand,
            self.policy.ordering_cost_per_order,
            profile.holding_cost_per_unit,
        )?;

        let reorder_point =
            formulas::reorder_point(profile.daily_demand, record.lead_time_days, safety_stock)?;

        let cost_params = CostParams {
            annual_demand: profile.annual_demand,
            holding_cost_per_unit: profile.holding_cost_per_unit,
            ordering_cost_per_order: self.policy.ordering_cost_per_order,
            stockout_cost_per_unit: self.policy.stockout_cost_per_unit,
            lead_time_days: record.lead_time_days,
            safety_stock,
        };
        let optimized = optimize::optimal_order_quantity(&cost_params, &self.optimizer)?;

        let inventory_status = classifier::classify(
            record.inventory_qty,
            eoq,
            sales_efficiency,
            efficiency_threshold,
            reorder_point,
        );

        Ok(PolicyResult {
            product_name: record.product_name.clone(),
            eoq,
            reorder_point,
            safety_stock,
            optimized_order_qty: optimized.argmin,
            sales_efficiency,
            inventory_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipp_core::InventoryStatus;

    fn scenario_record() -> ProductRecord {
        ProductRecord::new("WIDGET-001", 120.0, 10.0, 200.0, 7.0, 20.0)
    }

    #[test]
    fn test_end_to_end_scenario() {
        let outcome = PolicyRunner::new().run(&[scenario_record()]).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.results.len(), 1);

        let result = &outcome.results[0];
        assert_eq!(result.product_name, "WIDGET-001");
        assert!((result.safety_stock - 11.5955).abs() < 1e-3);
        assert!((result.eoq - 379.4733).abs() < 1e-3);
        assert!((result.reorder_point - 39.2120).abs() < 1e-3);
        assert!((result.sales_efficiency - 0.05).abs() < 1e-12);
        // 缺貨成本主導，優化落在年需求量的折點
        assert!((result.optimized_order_qty - 1440.0).abs() < 1.0);
        // 200 < EOQ 且 200 >= ROP
        assert_eq!(result.inventory_status, InventoryStatus::Optimal);

        assert!((outcome.average_efficiency.unwrap() - 0.05).abs() < 1e-12);
        assert!((outcome.efficiency_threshold.unwrap() - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_zero_inventory_reported_and_excluded_from_mean() {
        let zero_inventory = ProductRecord::new("GADGET-002", 60.0, 5.0, 0.0, 3.0, 15.0);
        let outcome = PolicyRunner::new()
            .run(&[scenario_record(), zero_inventory])
            .unwrap();

        // 失敗記錄不汙染批次平均
        assert!((outcome.average_efficiency.unwrap() - 0.05).abs() < 1e-12);

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.failures.len(), 1);

        let failure = &outcome.failures[0];
        assert_eq!(failure.product_name, "GADGET-002");
        assert_eq!(failure.stage, FailureStage::Efficiency);
        assert_eq!(failure.error, PolicyError::ZeroInventory);
        assert_eq!(outcome.failed_products(), vec!["GADGET-002"]);
    }

    #[test]
    fn test_input_order_preserved() {
        let records = vec![
            ProductRecord::new("C", 120.0, 10.0, 200.0, 7.0, 20.0),
            ProductRecord::new("A", 90.0, 8.0, 150.0, 5.0, 30.0),
            ProductRecord::new("B", 200.0, 15.0, 400.0, 10.0, 12.0),
        ];
        let outcome = PolicyRunner::new().run(&records).unwrap();

        let names: Vec<_> = outcome
            .results
            .iter()
            .map(|r| r.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(
            PolicyRunner::new().run(&[]).unwrap_err(),
            PolicyError::EmptyBatch
        );
    }

    #[test]
    fn test_all_records_failing_is_not_opaque() {
        let records = vec![
            ProductRecord::new("X", 60.0, 5.0, 0.0, 3.0, 15.0),
            ProductRecord::new("Y", -1.0, 5.0, 10.0, 3.0, 15.0),
        ];
        let outcome = PolicyRunner::new().run(&records).unwrap();

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.average_efficiency, None);
        assert_eq!(outcome.efficiency_threshold, None);
        assert_eq!(outcome.failures.len(), 2);
    }

    #[test]
    fn test_understock_classification() {
        // 庫存 20 低於再訂購點 ≈ 39.2
        let record = ProductRecord::new("LOW-001", 120.0, 10.0, 20.0, 7.0, 20.0);
        let outcome = PolicyRunner::new().run(&[record]).unwrap();

        assert_eq!(
            outcome.results[0].inventory_status,
            InventoryStatus::Understock
        );
    }

    #[test]
    fn test_overstock_requires_low_efficiency_against_batch() {
        // SLOW-001 效率 0.02，批次平均被 FAST-002 拉高 → Overstock
        let slow = ProductRecord::new("SLOW-001", 120.0, 10.0, 500.0, 7.0, 20.0);
        let fast = ProductRecord::new("FAST-002", 120.0, 10.0, 10.0, 7.0, 20.0);
        let outcome = PolicyRunner::new().run(&[slow.clone(), fast]).unwrap();

        assert_eq!(
            outcome.results[0].inventory_status,
            InventoryStatus::Overstock
        );

        // 單獨計算時門檻只有自身效率的一半 → 改判 ExcessButSellingWell
        let outcome = PolicyRunner::new().run(&[slow]).unwrap();
        assert_eq!(
            outcome.results[0].inventory_status,
            InventoryStatus::ExcessButSellingWell
        );
    }
}
