// src/services/report.rs
use chrono::{TimeZone, Utc};

use crate::models::CalculationResult;

/// Human-readable label for a compounding frequency.
pub fn frequency_label(frequency: u32) -> &'static str {
    match frequency {
        0 => "Simple",
        1 => "Annually",
        4 => "Quarterly",
        12 => "Monthly",
        _ => "N/A",
    }
}

/// Format an amount as Indian Rupees with Indian digit grouping and two
/// fraction digits, e.g. `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

// Indian grouping: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

/// Render a completed calculation as a plain-text report.
pub fn render(result: &CalculationResult) -> String {
    let generated = match Utc.timestamp_millis_opt(result.timestamp).single() {
        Some(dt) => dt.format("%d %b %Y, %H:%M:%S UTC").to_string(),
        None => result.timestamp.to_string(),
    };

    format!(
        "Interest Calculation Report\n\
         Generated: {generated}\n\
         \n\
         Principal:          {principal}\n\
         Annual Rate:        {rate}%\n\
         Time Period:        {time} {unit}\n\
         Compounding:        {label}\n\
         \n\
         Simple Interest:    {simple_interest}\n\
         Total (Simple):     {total_simple}\n\
         Compound Interest:  {compound_interest}\n\
         Total (Compound):   {total_compound}\n",
        generated = generated,
        principal = format_inr(result.principal),
        rate = result.rate,
        time = result.time,
        unit = result.time_unit.label(),
        label = frequency_label(result.compound_frequency),
        simple_interest = format_inr(result.simple_interest),
        total_simple = format_inr(result.total_simple),
        compound_interest = format_inr(result.compound_detail.interest),
        total_compound = format_inr(result.compound_detail.total),
    )
}
