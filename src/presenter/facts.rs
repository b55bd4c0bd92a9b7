use rand::seq::SliceRandom;

pub const SPACE_FACTS: &[&str] = &[
    "Jupiter is so massive it accounts for about 70% of all planetary mass in our solar system.",
    "Neutron stars can spin hundreds of times per second.",
    "Interstellar space holds roughly one atom per cubic centimeter.",
    "A day on Venus is longer than its year because it rotates so slowly.",
    "The Milky Way and Andromeda are on course to merge in about 4 to 5 billion years.",
    "Saturn is less dense than liquid water.",
    "The James Webb Space Telescope observes mostly in infrared to see through cosmic dust.",
    "There are more trees on Earth than stars in the Milky Way, but far fewer than stars in the observable universe.",
];

/// A random "Did you know?" line for the banner.
pub fn random_fact() -> String {
    let fact = SPACE_FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default();
    format!("Did you know? {}", fact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fact_comes_from_list() {
        for _ in 0..20 {
            let line = random_fact();
            let fact = line.strip_prefix("Did you know? ").unwrap();
            assert!(SPACE_FACTS.contains(&fact));
        }
    }
}
