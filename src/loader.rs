//! 產品記錄載入
//!
//! 型別化的 CSV 載入介面：欄位名稱對應 [`ProductRecord`] 的欄位，
//! 載入時逐筆驗證並檢查產品名稱唯一性。資料來源永遠不會被當成
//! 程式碼執行。

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use ipp_core::{PolicyError, ProductRecord};

/// 資料載入錯誤
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// CSV 讀取或欄位對應失敗
    #[error("CSV 解析失敗: {0}")]
    Csv(#[from] csv::Error),

    /// 單筆記錄驗證失敗（附帶產品名稱）
    #[error("產品 {product_name} 記錄驗證失敗: {source}")]
    InvalidRecord {
        product_name: String,
        source: PolicyError,
    },

    /// 批次內產品名稱重複
    #[error("產品名稱重複: {0}")]
    DuplicateProduct(String),
}

/// 從任意 reader 載入產品記錄（需含標題列）
pub fn read_product_records<R: Read>(reader: R) -> Result<Vec<ProductRecord>, LoaderError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for row in csv_reader.deserialize() {
        let record: ProductRecord = row?;

        record
            .validate()
            .map_err(|source| LoaderError::InvalidRecord {
                product_name: record.product_name.clone(),
                source,
            })?;

        if !seen_names.insert(record.product_name.clone()) {
            return Err(LoaderError::DuplicateProduct(record.product_name));
        }

        records.push(record);
    }

    tracing::debug!("載入 {} 筆產品記錄", records.len());
    Ok(records)
}

/// 從 CSV 檔案載入產品記錄
pub fn read_products_from_path(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, LoaderError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_product_records(file)
}
