//! # IPP (Inventory Policy Planning)
//!
//! 從歷史銷售 / 庫存記錄計算每個產品的庫存策略參數
//! （安全庫存、再訂購點、經濟訂購量、成本最小化訂購量），
//! 並分類庫存狀態供報表層使用。
//!
//! ```
//! use ipp::{PolicyRunner, ProductRecord};
//!
//! let records = vec![
//!     ProductRecord::new("WIDGET-001", 120.0, 10.0, 200.0, 7.0, 20.0),
//!     ProductRecord::new("GADGET-002", 60.0, 5.0, 40.0, 3.0, 15.0),
//! ];
//!
//! let outcome = PolicyRunner::new().run(&records)?;
//! assert_eq!(outcome.results.len(), 2);
//! # Ok::<(), ipp::PolicyError>(())
//! ```

pub mod export;
pub mod loader;

// Re-export 引擎主要類型
pub use ipp_calc::{BatchOutcome, CostParams, FailureStage, PolicyRunner, RecordFailure};
pub use ipp_core::{
    InventoryStatus, PolicyConfig, PolicyError, PolicyResult, ProductRecord, Result,
};
pub use ipp_optimizer::{OptimizationOutcome, OptimizerConfig};
