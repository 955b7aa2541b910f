use crate::config;

/// Mirrors a number input: anything that does not parse as a finite number is zero.
pub fn parse_numeric(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

pub fn projected_roi(current_roi_percent: f64) -> f64 {
    current_roi_percent * config::ROI_MULTIPLIER
}

pub fn format_projection(current_roi_percent: f64) -> String {
    let projected = projected_roi(current_roi_percent);
    // -0.0 would otherwise render as "-0.00"
    let projected = if projected == 0.0 { 0.0 } else { projected };
    format!("{:.2}", projected)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiInputs {
    pub monthly_budget: f64,
    pub current_roi_percent: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            monthly_budget: config::DEFAULT_MONTHLY_BUDGET,
            current_roi_percent: config::DEFAULT_CURRENT_ROI,
        }
    }
}

impl RoiInputs {
    pub fn projection(&self) -> String {
        format_projection(self.current_roi_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_project_270() {
        let inputs = RoiInputs::default();
        assert_eq!(inputs.monthly_budget, 1000.0);
        assert_eq!(inputs.projection(), "270.00");
    }

    #[test]
    fn zero_and_negative_inputs() {
        assert_eq!(format_projection(0.0), "0.00");
        assert_eq!(format_projection(-0.0), "0.00");
        assert_eq!(format_projection(-10.0), "-18.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_projection(33.333), "60.00");
        assert_eq!(format_projection(1.0), "1.80");
        assert_eq!(format_projection(12.5), "22.50");
    }

    #[test]
    fn invalid_input_coerces_to_zero() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("abc"), 0.0);
        assert_eq!(parse_numeric("NaN"), 0.0);
        assert_eq!(parse_numeric("inf"), 0.0);
        assert_eq!(parse_numeric(" 150 "), 150.0);
        assert_eq!(parse_numeric("2.5e2"), 250.0);
    }

    #[test]
    fn budget_does_not_affect_projection() {
        let a = RoiInputs { monthly_budget: 1.0, current_roi_percent: 150.0 };
        let b = RoiInputs { monthly_budget: 99999.0, current_roi_percent: 150.0 };
        assert_eq!(a.projection(), b.projection());
    }
}
