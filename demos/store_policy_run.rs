//! 庫存策略批次計算示例

use ipp::{export, PolicyRunner, ProductRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 庫存策略批次計算示例 ===\n");

    let records = vec![
        ProductRecord::new("WIDGET-001", 120.0, 10.0, 200.0, 7.0, 20.0),
        ProductRecord::new("SLOW-MOVER-002", 30.0, 2.0, 800.0, 14.0, 45.0),
        ProductRecord::new("FAST-MOVER-003", 300.0, 25.0, 60.0, 5.0, 8.0),
        ProductRecord::new("EMPTY-SHELF-009", 50.0, 4.0, 0.0, 7.0, 10.0),
    ];

    let outcome = PolicyRunner::new().run(&records)?;

    println!("策略結果:");
    for result in &outcome.results {
        println!(
            "  - {}: EOQ {:.1}, ROP {:.1}, 安全庫存 {:.1}, 優化訂購量 {:.1} → {}",
            result.product_name,
            result.eoq,
            result.reorder_point,
            result.safety_stock,
            result.optimized_order_qty,
            result.inventory_status
        );
    }

    if let Some(average) = outcome.average_efficiency {
        println!("\n批次平均銷售效率: {average:.4}");
    }

    println!("\n庫存狀態分佈:");
    for (status, count) in export::status_distribution(&outcome.results) {
        println!("  - {status}: {count}");
    }

    if !outcome.failures.is_empty() {
        println!("\n失敗記錄:");
        for failure in &outcome.failures {
            println!("  - {}: {}", failure.product_name, failure.error);
        }
    }

    Ok(())
}
