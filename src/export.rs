//! 結果匯出
//!
//! 把結果表序列化給外部呈現層（表格 / 圖表）。欄位名稱即合約，
//! 下游以 `product_name` 分組、以 `inventory_status` 計數。

use std::io::Write;

use ipp_calc::BatchOutcome;
use ipp_core::{InventoryStatus, PolicyResult};

/// 以 CSV 寫出結果表（一列一個產品，保持批次順序）
pub fn write_results_csv<W: Write>(writer: W, results: &[PolicyResult]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// 把完整批次結果（含失敗清單與批次統計）序列化為 JSON
pub fn batch_to_json(outcome: &BatchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

/// 庫存狀態分佈（狀態 → 件數），供狀態圓餅圖使用
///
/// 只回傳實際出現的狀態，順序固定為狀態枚舉的宣告順序。
pub fn status_distribution(results: &[PolicyResult]) -> Vec<(InventoryStatus, usize)> {
    const ALL_STATUSES: [InventoryStatus; 4] = [
        InventoryStatus::Overstock,
        InventoryStatus::ExcessButSellingWell,
        InventoryStatus::Understock,
        InventoryStatus::Optimal,
    ];

    ALL_STATUSES
        .into_iter()
        .filter_map(|status| {
            let count = results
                .iter()
                .filter(|r| r.inventory_status == status)
                .count();
            (count > 0).then_some((status, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<PolicyResult> {
        vec![
            PolicyResult {
                product_name: "WIDGET-001".to_string(),
                eoq: 379.47,
                reorder_point: 39.21,
                safety_stock: 11.60,
                optimized_order_qty: 1440.0,
                sales_efficiency: 0.05,
                inventory_status: InventoryStatus::Optimal,
            },
            PolicyResult {
                product_name: "GADGET-002".to_string(),
                eoq: 120.0,
                reorder_point: 15.0,
                safety_stock: 4.0,
                optimized_order_qty: 720.0,
                sales_efficiency: 0.02,
                inventory_status: InventoryStatus::Optimal,
            },
        ]
    }

    #[test]
    fn test_csv_export_headers_and_rows() {
        let mut buffer = Vec::new();
        write_results_csv(&mut buffer, &sample_results()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "product_name,eoq,reorder_point,safety_stock,optimized_order_qty,sales_efficiency,inventory_status"
        );
        assert!(lines.next().unwrap().starts_with("WIDGET-001,"));
        assert!(lines.next().unwrap().starts_with("GADGET-002,"));
    }

    #[test]
    fn test_status_distribution_counts() {
        let mut results = sample_results();
        results[1].inventory_status = InventoryStatus::Understock;

        let distribution = status_distribution(&results);
        assert_eq!(
            distribution,
            vec![
                (InventoryStatus::Understock, 1),
                (InventoryStatus::Optimal, 1),
            ]
        );
    }
}
