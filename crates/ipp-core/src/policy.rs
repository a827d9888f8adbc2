//! 策略計算結果模型

use serde::{Deserialize, Serialize};

/// 庫存狀態分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryStatus {
    /// 過量庫存且銷售效率偏低
    Overstock,

    /// 庫存超過 EOQ 但銷售效率良好
    ExcessButSellingWell,

    /// 庫存低於再訂購點
    Understock,

    /// 庫存在合理區間
    Optimal,
}

impl InventoryStatus {
    /// 報表用的人類可讀標籤（沿用上游儀表板的字串）
    pub fn label(&self) -> &'static str {
        match self {
            InventoryStatus::Overstock => "Overstock",
            InventoryStatus::ExcessButSellingWell => "Excess Stock (but selling well)",
            InventoryStatus::Understock => "Understock",
            InventoryStatus::Optimal => "Optimal",
        }
    }
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 單一產品的庫存策略計算結果
///
/// 欄位名稱與型別是與下游呈現層（表格 / 圖表）的合約，必須保持穩定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResult {
    /// 產品名稱（複製自輸入記錄）
    pub product_name: String,

    /// 經濟訂購量
    pub eoq: f64,

    /// 再訂購點
    pub reorder_point: f64,

    /// 安全庫存
    pub safety_stock: f64,

    /// 成本最小化後的訂購量
    pub optimized_order_qty: f64,

    /// 銷售效率（月銷售率 / 現有庫存）
    pub sales_efficiency: f64,

    /// 庫存狀態分類
    pub inventory_status: InventoryStatus,
}
