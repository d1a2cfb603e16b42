//! Weight comparison in pounds.

use crate::comparison::{compare_measure, MeasureComparison};
use crate::entities::Entity;

/// Compare weights, e.g. "I weigh 13000 lbs, 10733% heavier than you."
pub fn compare_weight<A, B>(own: &A, other: &B) -> String
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    match compare_measure(own.weight(), other.weight()) {
        MeasureComparison::Less { percent } => {
            format!("I weigh {} lbs, {}% lighter than you.", own.weight(), percent)
        }
        MeasureComparison::Greater { percent } => {
            format!("I weigh {} lbs, {}% heavier than you.", own.weight(), percent)
        }
        MeasureComparison::Equal => "We have the exact same weight!".to_string(),
    }
}
