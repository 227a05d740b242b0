//! Cosmetic food kinds. Which fruit is on the board never affects scoring.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fruit {
    Dango,
    BirthdayCake,
    Blueberries,
    Broccoli,
    Corn,
    Cupcake,
    Doughnut,
    Garlic,
    Grapes,
    Hamburger,
    IceCream,
    KiwiFruit,
    LeafyGreen,
    MeatOnBone,
    Melon,
    Olive,
    Onion,
    Pizza,
    RedApple,
}

impl Fruit {
    pub const ALL: [Fruit; 19] = [
        Fruit::Dango,
        Fruit::BirthdayCake,
        Fruit::Blueberries,
        Fruit::Broccoli,
        Fruit::Corn,
        Fruit::Cupcake,
        Fruit::Doughnut,
        Fruit::Garlic,
        Fruit::Grapes,
        Fruit::Hamburger,
        Fruit::IceCream,
        Fruit::KiwiFruit,
        Fruit::LeafyGreen,
        Fruit::MeatOnBone,
        Fruit::Melon,
        Fruit::Olive,
        Fruit::Onion,
        Fruit::Pizza,
        Fruit::RedApple,
    ];

    /// Pick a fruit uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fruit::Dango => "Dango",
            Fruit::BirthdayCake => "Birthday Cake",
            Fruit::Blueberries => "Blueberries",
            Fruit::Broccoli => "Broccoli",
            Fruit::Corn => "Corn",
            Fruit::Cupcake => "Cupcake",
            Fruit::Doughnut => "Doughnut",
            Fruit::Garlic => "Garlic",
            Fruit::Grapes => "Grapes",
            Fruit::Hamburger => "Hamburger",
            Fruit::IceCream => "Ice Cream",
            Fruit::KiwiFruit => "Kiwi",
            Fruit::LeafyGreen => "Leafy Green",
            Fruit::MeatOnBone => "Meat on Bone",
            Fruit::Melon => "Melon",
            Fruit::Olive => "Olive",
            Fruit::Onion => "Onion",
            Fruit::Pizza => "Pizza",
            Fruit::RedApple => "Red Apple",
        }
    }

    /// Single-cell terminal glyph
    pub fn glyph(&self) -> char {
        match self {
            Fruit::Dango => '8',
            Fruit::BirthdayCake => '#',
            Fruit::Blueberries => '%',
            Fruit::Broccoli => '&',
            Fruit::Corn => '!',
            Fruit::Cupcake => 'u',
            Fruit::Doughnut => 'o',
            Fruit::Garlic => 'g',
            Fruit::Grapes => '@',
            Fruit::Hamburger => '=',
            Fruit::IceCream => 'v',
            Fruit::KiwiFruit => 'k',
            Fruit::LeafyGreen => '*',
            Fruit::MeatOnBone => 'm',
            Fruit::Melon => 'O',
            Fruit::Olive => '0',
            Fruit::Onion => 'n',
            Fruit::Pizza => 'A',
            Fruit::RedApple => '●',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_glyphs_are_distinct() {
        let names: HashSet<_> = Fruit::ALL.iter().map(|f| f.name()).collect();
        let glyphs: HashSet<_> = Fruit::ALL.iter().map(|f| f.glyph()).collect();
        assert_eq!(names.len(), Fruit::ALL.len());
        assert_eq!(glyphs.len(), Fruit::ALL.len());
    }

    #[test]
    fn test_random_covers_several_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..500).map(|_| Fruit::random(&mut rng)).collect();
        assert!(seen.len() > 10);
    }
}
