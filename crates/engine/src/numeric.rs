use serde_json::Value;

/// Coerces a raw score value to a finite number.
///
/// Accepts JSON numbers and non-empty numeric strings (surrounding
/// whitespace ignored). Everything else, including NaN and infinities,
/// coerces to `None`.
pub fn to_finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

fn all_present(values: &[Option<f64>]) -> Option<Vec<f64>> {
    if values.is_empty() {
        return None;
    }
    values.iter().copied().collect()
}

/// Strict mean: `None` if the list is empty or any element is missing.
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present = all_present(values)?;
    Some(present.iter().sum::<f64>() / present.len() as f64)
}

/// Strict sum: `None` if the list is empty or any element is missing.
pub fn sum_of_all(values: &[Option<f64>]) -> Option<f64> {
    let present = all_present(values)?;
    Some(present.iter().sum())
}

/// Strict minimum: `None` if the list is empty or any element is missing.
pub fn min_of_all(values: &[Option<f64>]) -> Option<f64> {
    all_present(values)?.into_iter().reduce(f64::min)
}

/// Strict maximum: `None` if the list is empty or any element is missing.
pub fn max_of_all(values: &[Option<f64>]) -> Option<f64> {
    all_present(values)?.into_iter().reduce(f64::max)
}

/// Tolerant maximum: ignores missing elements and takes the max of the
/// rest. `None` only when nothing remains.
pub fn max_of(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::max)
}

/// Sum of the two best out of exactly four attempts. Requires all four
/// to be present; anything else yields `None`.
pub fn sum_top2_of_four(values: &[Option<f64>]) -> Option<f64> {
    if values.len() != 4 {
        return None;
    }
    let mut present = all_present(values)?;
    present.sort_by(|a, b| b.total_cmp(a));
    Some(present[0] + present[1])
}

/// `numerator / denominator`, guarded against missing operands and a
/// zero denominator.
pub fn safe_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// `(strong - weak) / strong * 100`, guarded against missing operands
/// and a zero strong value.
pub fn safe_asymmetry_pct(strong: Option<f64>, weak: Option<f64>) -> Option<f64> {
    match (strong, weak) {
        (Some(s), Some(w)) if s != 0.0 => Some((s - w) / s * 100.0),
        _ => None,
    }
}

/// `(current - previous) / previous * 100`, guarded against missing
/// operands and a zero previous value.
pub fn percent_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(c), Some(p)) if p != 0.0 => Some((c - p) / p * 100.0),
        _ => None,
    }
}

/// `current - previous`, `None` when either side is missing.
pub fn delta(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(c), Some(p)) => Some(c - p),
        _ => None,
    }
}
