// src/services/engine.rs
use chrono::Utc;

use crate::models::{CalculationInput, CalculationResult, CompoundDetail, TimeUnit};

/// Compute simple and compound interest for the given input.
///
/// Pure and synchronous: no I/O, no side effects beyond reading the clock
/// for the result timestamp. Returns `None` when principal, rate or time
/// is absent or non-positive; there is no separate error signal, the
/// caller treats "no result" as "not ready".
pub fn compute(input: &CalculationInput) -> Option<CalculationResult> {
    let principal = input.principal.filter(|p| *p > 0.0)?;
    let rate = input.rate.filter(|r| *r > 0.0)?;
    let time = input.time.filter(|t| *t > 0.0)?;

    let time_in_years = match input.time_unit {
        TimeUnit::Years => time,
        TimeUnit::Months => time / 12.0,
    };
    let rate_decimal = rate / 100.0;

    let simple_interest = principal * rate_decimal * time_in_years;
    let total_simple = principal + simple_interest;

    // frequency * years can be fractional, so powf rather than powi
    let compound_detail = if input.compound_frequency > 0 {
        let n = input.compound_frequency as f64;
        let total = principal * (1.0 + rate_decimal / n).powf(n * time_in_years);
        CompoundDetail {
            interest: total - principal,
            total,
        }
    } else {
        CompoundDetail {
            interest: 0.0,
            total: total_simple,
        }
    };

    Some(CalculationResult {
        principal,
        rate,
        time,
        time_unit: input.time_unit,
        compound_frequency: input.compound_frequency,
        simple_interest,
        total_simple,
        compound_detail,
        timestamp: Utc::now().timestamp_millis(),
    })
}
