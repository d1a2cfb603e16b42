//! Height comparison, displayed in feet.

use crate::comparison::{compare_measure, MeasureComparison};
use crate::entities::Entity;

const INCHES_PER_FOOT: f64 = 12.0;

/// Compare heights. Own height is shown in feet; the percentage is
/// computed on inches relative to the other side.
pub fn compare_height<A, B>(own: &A, other: &B) -> String
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    let feet = feet_display(own.height() / INCHES_PER_FOOT);

    match compare_measure(own.height(), other.height()) {
        MeasureComparison::Less { percent } => {
            format!("I am {} ft tall, {}% smaller than you.", feet, percent)
        }
        MeasureComparison::Greater { percent } => {
            format!("I am {} ft tall, {}% taller than you.", feet, percent)
        }
        MeasureComparison::Equal => "We are the exact same height!".to_string(),
    }
}

/// Two decimals, exact ties rounded up.
///
/// `{:.2}` rounds ties to even. A value sits exactly on a third-decimal 5 only
/// when it is an odd multiple of 1/8, which scaling by 8 and 4 detects exactly.
fn feet_display(feet: f64) -> String {
    let eighths = feet * 8.0;
    let is_tie = eighths.fract() == 0.0 && (feet * 4.0).fract() != 0.0;

    if is_tie {
        format!("{:.2}", (feet * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", feet)
    }
}
