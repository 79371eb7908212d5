//! USD strings for the text report. Missing values render as zero.

pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => render(v, 0),
        _ => "$0".to_string(),
    }
}

pub fn currency_cents(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => render(v, 2),
        _ => "$0.00".to_string(),
    }
}

fn render(value: f64, decimals: i32) -> String {
    // `{:.N}` breaks ties to even; the dashboard rounds them away from zero.
    let scale = 10f64.powi(decimals);
    let rounded = (value.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", decimals as usize, rounded);
    let (whole, frac) = match fixed.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac {
        Some(frac) => format!("{sign}${grouped}.{frac}"),
        None => format!("{sign}${grouped}"),
    }
}
