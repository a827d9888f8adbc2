//! 產品記錄模型

use serde::{Deserialize, Serialize};

use crate::{PolicyError, Result};

/// 產品歷史銷售 / 庫存記錄（批次輸入，一個產品一筆）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// 產品名稱（批次內唯一）
    pub product_name: String,

    /// 月銷售量基準（總售出件數）
    pub total_items_sold: f64,

    /// 平均每月售出件數
    pub avg_items_sold_per_month: f64,

    /// 現有庫存量
    pub inventory_qty: f64,

    /// 補貨前置時間（天）
    pub lead_time_days: f64,

    /// 原始單價（用於推導持有成本）
    pub original_price_per_unit: f64,
}

impl ProductRecord {
    /// 創建新的產品記錄
    pub fn new(
        product_name: impl Into<String>,
        total_items_sold: f64,
        avg_items_sold_per_month: f64,
        inventory_qty: f64,
        lead_time_days: f64,
        original_price_per_unit: f64,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            total_items_sold,
            avg_items_sold_per_month,
            inventory_qty,
            lead_time_days,
            original_price_per_unit,
        }
    }

    /// 驗證記錄是否在各公式的定義域內
    ///
    /// - 銷量與庫存不可為負
    /// - 前置時間與單價必須為正
    /// - 所有數值必須為有限數值
    ///
    /// 注意：`inventory_qty == 0` 是合法輸入，但在計算銷售效率時
    /// 會以 [`PolicyError::ZeroInventory`] 回報。
    pub fn validate(&self) -> Result<()> {
        let finite_checks: [(&'static str, f64); 5] = [
            ("total_items_sold", self.total_items_sold),
            ("avg_items_sold_per_month", self.avg_items_sold_per_month),
            ("inventory_qty", self.inventory_qty),
            ("lead_time_days", self.lead_time_days),
            ("original_price_per_unit", self.original_price_per_unit),
        ];

        for (parameter, value) in finite_checks {
            if !value.is_finite() {
                return Err(PolicyError::NonFiniteParameter { parameter });
            }
        }

        let non_negative: [(&'static str, f64); 3] = [
            ("total_items_sold", self.total_items_sold),
            ("avg_items_sold_per_month", self.avg_items_sold_per_month),
            ("inventory_qty", self.inventory_qty),
        ];

        for (parameter, value) in non_negative {
            if value < 0.0 {
                return Err(PolicyError::NegativeParameter { parameter, value });
            }
        }

        let strictly_positive: [(&'static str, f64); 2] = [
            ("lead_time_days", self.lead_time_days),
            ("original_price_per_unit", self.original_price_per_unit),
        ];

        for (parameter, value) in strictly_positive {
            if value <= 0.0 {
                return Err(PolicyError::NonPositiveParameter { parameter, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProductRecord {
        ProductRecord::new("WIDGET-001", 120.0, 10.0, 200.0, 7.0, 20.0)
    }

    #[test]
    fn test_valid_record() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_zero_inventory_is_valid_input() {
        // 庫存為零在驗證階段合法，錯誤在效率計算時才回報
        let mut record = sample_record();
        record.inventory_qty = 0.0;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_negative_sales_rejected() {
        let mut record = sample_record();
        record.total_items_sold = -1.0;
        assert_eq!(
            record.validate(),
            Err(PolicyError::NegativeParameter {
                parameter: "total_items_sold",
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_non_positive_lead_time_rejected() {
        let mut record = sample_record();
        record.lead_time_days = 0.0;
        assert!(matches!(
            record.validate(),
            Err(PolicyError::NonPositiveParameter {
                parameter: "lead_time_days",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let mut record = sample_record();
        record.original_price_per_unit = f64::NAN;
        assert_eq!(
            record.validate(),
            Err(PolicyError::NonFiniteParameter {
                parameter: "original_price_per_unit",
            })
        );
    }

    #[test]
    fn test_csv_field_names() {
        // 欄位名稱是與外部資料來源的合約，不可更動
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();
        for field in [
            "product_name",
            "total_items_sold",
            "avg_items_sold_per_month",
            "inventory_qty",
            "lead_time_days",
            "original_price_per_unit",
        ] {
            assert!(json.get(field).is_some(), "缺少欄位 {field}");
        }
    }
}
