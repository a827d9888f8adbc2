//! 庫存狀態分類
//!
//! 分支不是互斥構造，比對順序即語意：先判過量，再判不足，其餘為合理。

use ipp_core::InventoryStatus;

/// 判定單一產品的庫存狀態（全函數，永遠恰好回傳一個標籤）
///
/// 規則（first match wins）：
/// 1. 庫存嚴格大於 EOQ：效率低於門檻 → `Overstock`，否則 → `ExcessButSellingWell`
/// 2. 庫存嚴格小於再訂購點 → `Understock`
/// 3. 其餘 → `Optimal`
///
/// 邊界採嚴格比較：`current_inventory == eoq` 與
/// `current_inventory == reorder_point` 都落入 `Optimal`。
pub fn classify(
    current_inventory: f64,
    eoq: f64,
    sales_efficiency: f64,
    efficiency_threshold: f64,
    reorder_point: f64,
) -> InventoryStatus {
    if current_inventory > eoq {
        if sales_efficiency < efficiency_threshold {
            InventoryStatus::Overstock
        } else {
            InventoryStatus::ExcessButSellingWell
        }
    } else if current_inventory < reorder_point {
        InventoryStatus::Understock
    } else {
        InventoryStatus::Optimal
    }
}
