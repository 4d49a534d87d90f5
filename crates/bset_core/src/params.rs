//! Filter sizing for a target false-positive rate.
//!
//!   m = ceil(-n * ln(p) / ln(2)^2)
//!   k = ceil(-log2(p))

use std::f64::consts::LN_2;

/// Optimal bit count for `expected_items` at rate `fp_rate`. At least 1.
pub fn optimal_bits(expected_items: u64, fp_rate: f64) -> u64 {
    let n = expected_items as f64;
    let bits = (-n * fp_rate.ln() / (LN_2 * LN_2)).ceil();
    (bits as u64).max(1)
}

/// Optimal hash count for rate `fp_rate`. At least 1.
pub fn optimal_hashes(fp_rate: f64) -> u32 {
    let k = (-fp_rate.log2()).ceil();
    (k as u32).max(1)
}

/// Expected false-positive rate at the given load: (1 - e^(-k*n/m))^k.
pub fn projected_fp_rate(m_bits: u64, k: u32, items: u64) -> f64 {
    if m_bits == 0 {
        return 1.0;
    }
    let exponent = -f64::from(k) * (items as f64) / (m_bits as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
