//! 有界單變數最小化
//!
//! 目標函數可能有折點（不可微分處），因此採用不依賴導數的兩階段法：
//! 先以均勻網格粗掃描定位最佳網格單元，再在該單元內做黃金分割搜尋。

use ipp_core::{PolicyError, Result};

use crate::{OptimizationOutcome, OptimizerConfig};

/// 黃金比例倒數 (sqrt(5) - 1) / 2
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// 在 `[config.lower_bound, upper_bound]` 內最小化目標函數
///
/// 網格掃描以嚴格小於比較保留第一個最小點，結果對相同輸入是確定性的。
/// 黃金分割階段超出 `max_iterations` 仍未把區間縮到 `tolerance` 時，
/// 回報 [`PolicyError::NotConverged`]，不會默默回傳猜測值。
pub fn minimize_scalar<F>(
    objective: F,
    upper_bound: f64,
    config: &OptimizerConfig,
) -> Result<OptimizationOutcome>
where
    F: Fn(f64) -> f64,
{
    let lower = config.lower_bound;

    // 區間退化時唯一可行點就是下界
    if upper_bound <= lower {
        return Ok(OptimizationOutcome {
            argmin: lower,
            value: objective(lower),
            iterations: 0,
        });
    }

    // 粗掃描候選點：均勻網格加上初始猜測值（夾回區間內）
    let n = config.scan_points.max(2) as usize;
    let step = (upper_bound - lower) / n as f64;
    let mut candidates: Vec<f64> = (0..=n).map(|i| lower + step * i as f64).collect();
    candidates.push(config.initial_guess.clamp(lower, upper_bound));
    candidates.sort_by(f64::total_cmp);

    let mut best_index = 0;
    let mut best_value = objective(candidates[0]);
    for (index, &x) in candidates.iter().enumerate().skip(1) {
        let value = objective(x);
        if value < best_value {
            best_value = value;
            best_index = index;
        }
    }

    // 以最佳候選點的左右鄰點作為黃金分割的括弧區間
    let mut a = candidates[best_index.saturating_sub(1)];
    let mut b = candidates[(best_index + 1).min(candidates.len() - 1)];

    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut value_c = objective(c);
    let mut value_d = objective(d);
    let mut iterations = 0u32;

    while (b - a) > config.tolerance {
        if iterations >= config.max_iterations {
            return Err(PolicyError::NotConverged {
                iterations,
                width: b - a,
            });
        }

        if value_c < value_d {
            b = d;
            d = c;
            value_d = value_c;
            c = b - INV_PHI * (b - a);
            value_c = objective(c);
        } else {
            a = c;
            c = d;
            value_c = value_d;
            d = a + INV_PHI * (b - a);
            value_d = objective(d);
        }

        iterations += 1;
    }

    let argmin = 0.5 * (a + b);
    tracing::debug!(
        "黃金分割收斂: argmin={:.6}, 區間寬度={:.2e}, 迭代 {} 次",
        argmin,
        b - a,
        iterations
    );

    Ok(OptimizationOutcome {
        argmin,
        value: objective(argmin),
        iterations,
    })
}
