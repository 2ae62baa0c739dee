use super::OutputData;
use crate::analyzer::PageCounts;

pub struct CostOutput {
    cost_bw: f64,
    cost_color: f64,
}

impl CostOutput {
    pub fn new(cost_bw: f64, cost_color: f64) -> Self {
        Self {
            cost_bw,
            cost_color,
        }
    }

    pub fn total(&self, counts: &PageCounts) -> f64 {
        self.cost_bw * counts.bw_pages as f64 + self.cost_color * counts.color_pages as f64
    }

    pub fn generate(&self, counts: &PageCounts) -> OutputData {
        let line = format!(
            "Total cost ({} B/W @ {}/page and {} color @ {}/page): {}",
            counts.bw_pages,
            format_amount(self.cost_bw),
            counts.color_pages,
            format_amount(self.cost_color),
            format_amount(self.total(counts)),
        );

        OutputData {
            title: "Cost Calculation".to_string(),
            lines: vec![line],
        }
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats like C's `%g`: six significant digits, trailing zeros trimmed,
/// exponent form below 1e-4 and from 1e6 up.
fn format_amount(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
