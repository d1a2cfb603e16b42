//! Diet comparison remarks.

use crate::entities::Entity;

/// Remark made by the `own` side about the other side's diet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietRemark {
    /// Own eats meat, other is a herbivore
    QuestionsHerbivore,
    /// Own is a herbivore, other eats meat
    ScoldsMeatEater,
    /// Own is not a carnivore, other is
    SuggestsVegetables,
    /// Own is a carnivore, other is not
    MocksVegetables,
    SameFood,
}

impl DietRemark {
    /// Pick the remark for a pair of entities.
    ///
    /// Checks run in a fixed order and the first match wins. The order is not
    /// a complete case analysis (omnivore pairs fall through), and must stay as is.
    pub fn between<A, B>(own: &A, other: &B) -> Self
    where
        A: Entity + ?Sized,
        B: Entity + ?Sized,
    {
        let own_diet = own.diet();
        let other_diet = other.diet();

        if !own_diet.is_herbivore() && other_diet.is_herbivore() {
            DietRemark::QuestionsHerbivore
        } else if own_diet.is_herbivore() && !other_diet.is_herbivore() {
            DietRemark::ScoldsMeatEater
        } else if !own_diet.is_carnivore() && other_diet.is_carnivore() {
            DietRemark::SuggestsVegetables
        } else if own_diet.is_carnivore() && !other_diet.is_carnivore() {
            DietRemark::MocksVegetables
        } else {
            DietRemark::SameFood
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            DietRemark::QuestionsHerbivore => "You don't eat meat?",
            DietRemark::ScoldsMeatEater => "I'm a herbivore, you shouldn't eat meat!",
            DietRemark::SuggestsVegetables => "Try some vegetables sometime!",
            DietRemark::MocksVegetables => "Why waste your appetite on vegetables?",
            DietRemark::SameFood => "We like the same food!",
        }
    }
}

pub fn compare_diet<A, B>(own: &A, other: &B) -> String
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    DietRemark::between(own, other).display_text().to_string()
}
