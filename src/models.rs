// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Unit of the `time` input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Months,
}

impl TimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
        }
    }
}

/// One calculation request, as collected from the input form.
///
/// `principal`, `rate` and `time` are optional on purpose: an empty or
/// non-numeric form value must arrive as absence, never as zero, so the
/// engine can tell "not filled in" apart from an explicit 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    #[serde(default, deserialize_with = "lenient_number")]
    pub principal: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub time: Option<f64>,
    pub time_unit: TimeUnit,
    /// Compoundings per year. 0 means simple interest only.
    #[serde(default)]
    pub compound_frequency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundDetail {
    pub interest: f64,
    pub total: f64,
}

/// A completed calculation. Immutable once constructed; `timestamp`
/// (millis since epoch) doubles as the record's identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
    pub time_unit: TimeUnit,
    pub compound_frequency: u32,
    pub simple_interest: f64,
    pub total_simple: f64,
    pub compound_detail: CompoundDetail,
    pub timestamp: i64,
}

/// Accepts a JSON number, a numeric string, or anything else (mapped to
/// absence). Form fields post strings, and a blank field must not turn
/// into 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_numeric_fields_arrive_as_absent() {
        let input: CalculationInput = serde_json::from_value(json!({
            "principal": "abc",
            "rate": "",
            "timeUnit": "years"
        }))
        .unwrap();
        assert_eq!(input.principal, None);
        assert_eq!(input.rate, None);
        assert_eq!(input.time, None);
        assert_eq!(input.compound_frequency, 0);
    }

    #[test]
    fn numeric_strings_parse() {
        let input: CalculationInput = serde_json::from_value(json!({
            "principal": "10000",
            "rate": 5,
            "time": " 10 ",
            "timeUnit": "months",
            "compoundFrequency": 4
        }))
        .unwrap();
        assert_eq!(input.principal, Some(10000.0));
        assert_eq!(input.rate, Some(5.0));
        assert_eq!(input.time, Some(10.0));
        assert_eq!(input.time_unit, TimeUnit::Months);
        assert_eq!(input.compound_frequency, 4);
    }

    #[test]
    fn result_round_trips_with_camel_case_fields() {
        let result = CalculationResult {
            principal: 1000.0,
            rate: 12.0,
            time: 6.0,
            time_unit: TimeUnit::Months,
            compound_frequency: 0,
            simple_interest: 60.0,
            total_simple: 1060.0,
            compound_detail: CompoundDetail {
                interest: 0.0,
                total: 1060.0,
            },
            timestamp: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["timeUnit"], "months");
        assert_eq!(value["compoundFrequency"], 0);
        assert_eq!(value["compoundDetail"]["total"], 1060.0);
        let back: CalculationResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
