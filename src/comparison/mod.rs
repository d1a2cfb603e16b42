//! Attribute Comparators
//!
//! Each comparator takes two entities and phrases the result in the first
//! person from the `own` side, addressing the `other` side as "you".
//! Percentages are always relative to the other side's measurement.

pub mod weight;
pub mod height;
pub mod diet;

pub use weight::compare_weight;
pub use height::compare_height;
pub use diet::{compare_diet, DietRemark};

/// Result of comparing one measurement against another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureComparison {
    /// Own value is below the other; percent of the other's value
    Less { percent: i64 },

    /// Own value is above the other; percent of the other's value
    Greater { percent: i64 },

    Equal,
}

/// Compare `own` against `other`, expressing the gap as a whole percentage of `other`.
pub fn compare_measure(own: f64, other: f64) -> MeasureComparison {
    let diff = other - own;

    if diff > 0.0 {
        MeasureComparison::Less {
            percent: percent_of(diff, other),
        }
    } else if diff < 0.0 {
        MeasureComparison::Greater {
            percent: percent_of(-diff, other),
        }
    } else {
        MeasureComparison::Equal
    }
}

/// `gap` is never negative, so `round` (half away from zero) rounds half up here.
fn percent_of(gap: f64, reference: f64) -> i64 {
    (100.0 * gap / reference).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less() {
        assert_eq!(compare_measure(50.0, 200.0), MeasureComparison::Less { percent: 75 });
    }

    #[test]
    fn test_greater_uses_other_as_denominator() {
        // Gap of 150 over the other side's 50, not over own 200
        assert_eq!(compare_measure(200.0, 50.0), MeasureComparison::Greater { percent: 300 });
    }

    #[test]
    fn test_equal() {
        assert_eq!(compare_measure(12.5, 12.5), MeasureComparison::Equal);
    }

    #[test]
    fn test_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(compare_measure(7.0, 8.0), MeasureComparison::Less { percent: 13 });
        // 1/3 = 33.3%
        assert_eq!(compare_measure(2.0, 3.0), MeasureComparison::Less { percent: 33 });
    }
}
