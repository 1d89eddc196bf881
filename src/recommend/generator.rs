//! Randomized candidate generation.
//!
//! Each attempt draws one item per required category (when the wardrobe has
//! any) and, with `optional_probability`, one item per optional category.
//! Attempts that end with fewer than two items are dropped. A required category
//! with no items is simply absent; the scorer penalizes that.

use rand::Rng;

use crate::config::DEFAULT_OPTIONAL_PROBABILITY;
use crate::preferences::Preferences;
use crate::wardrobe::{Category, CategoryGroups, WardrobeItem};

/// Smallest outfit worth scoring.
pub const MIN_CANDIDATE_ITEMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    pub attempts: usize,
    pub optional_probability: f64,
}

impl GeneratorParams {
    /// Optional-category chance in [0, 1]; non-finite values use the default.
    pub fn probability(&self) -> f64 {
        let p = self.optional_probability;
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            DEFAULT_OPTIONAL_PROBABILITY
        }
    }
}

pub fn generate_candidates<'a, R: Rng + ?Sized>(
    groups: &CategoryGroups<'a>,
    prefs: &Preferences,
    params: GeneratorParams,
    rng: &mut R,
) -> Vec<Vec<&'a WardrobeItem>> {
    let rule = prefs.event_type.rule();
    let p = params.probability();

    let mut out = Vec::with_capacity(params.attempts);
    for _ in 0..params.attempts {
        let mut combo = Vec::with_capacity(rule.required.len() + rule.optional.len());

        for &category in rule.required {
            if let Some(item) = pick(groups, category, rng) {
                combo.push(item);
            }
        }
        for &category in rule.optional {
            if has_items(groups, category) && rng.random_bool(p) {
                if let Some(item) = pick(groups, category, rng) {
                    combo.push(item);
                }
            }
        }

        if combo.len() >= MIN_CANDIDATE_ITEMS {
            out.push(combo);
        }
    }
    out
}

fn has_items(groups: &CategoryGroups<'_>, category: Category) -> bool {
    groups.get(&category).is_some_and(|v| !v.is_empty())
}

/// Uniform pick from one category.
fn pick<'a, R: Rng + ?Sized>(
    groups: &CategoryGroups<'a>,
    category: Category,
    rng: &mut R,
) -> Option<&'a WardrobeItem> {
    let bucket = groups.get(&category)?;
    if bucket.is_empty() {
        return None;
    }
    Some(bucket[rng.random_range(0..bucket.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{EventType, Mood};
    use crate::wardrobe::group_by_category;
    use rand::{rngs::StdRng, SeedableRng};

    const PARAMS: GeneratorParams = GeneratorParams {
        attempts: 5,
        optional_probability: 0.5,
    };

    fn wardrobe() -> Vec<WardrobeItem> {
        vec![
            WardrobeItem::new("t1", "White Shirt", Category::Tops),
            WardrobeItem::new("t2", "Grey Tee", Category::Tops),
            WardrobeItem::new("b1", "Black Jeans", Category::Bottoms),
            WardrobeItem::new("s1", "Black Boots", Category::Shoes),
            WardrobeItem::new("a1", "Silver Watch", Category::Accessories),
        ]
    }

    #[test]
    fn required_categories_always_drawn_when_available() {
        let items = wardrobe();
        let groups = group_by_category(&items);
        let prefs = Preferences::new(EventType::Work, Mood::Confident);
        let mut rng = StdRng::seed_from_u64(7);

        let combos = generate_candidates(&groups, &prefs, PARAMS, &mut rng);
        assert_eq!(combos.len(), 5);
        for c in &combos {
            assert_eq!(c[0].category, Category::Tops);
            assert_eq!(c[1].category, Category::Bottoms);
            assert!(c.len() <= 5);
        }
    }

    #[test]
    fn probability_bounds_control_optional_pieces() {
        let items = wardrobe();
        let groups = group_by_category(&items);
        let prefs = Preferences::new(EventType::Work, Mood::Classic);
        let mut rng = StdRng::seed_from_u64(1);

        let never = GeneratorParams {
            optional_probability: 0.0,
            ..PARAMS
        };
        for c in generate_candidates(&groups, &prefs, never, &mut rng) {
            assert_eq!(c.len(), 2);
        }

        let always = GeneratorParams {
            optional_probability: 3.0,
            ..PARAMS
        };
        for c in generate_candidates(&groups, &prefs, always, &mut rng) {
            // Outerwear is optional for Work but absent from the wardrobe.
            assert_eq!(c.len(), 4);
        }
    }

    #[test]
    fn non_finite_probability_falls_back_to_default() {
        let items = wardrobe();
        let groups = group_by_category(&items);
        let prefs = Preferences::new(EventType::Work, Mood::Confident);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = GeneratorParams {
                optional_probability: bad,
                ..PARAMS
            };
            assert_eq!(params.probability(), DEFAULT_OPTIONAL_PROBABILITY);
            let mut rng = StdRng::seed_from_u64(5);
            let combos = generate_candidates(&groups, &prefs, params, &mut rng);
            assert_eq!(combos.len(), 5);
        }
    }

    #[test]
    fn single_item_attempts_are_dropped() {
        let items = vec![WardrobeItem::new("t1", "Tee", Category::Tops)];
        let groups = group_by_category(&items);
        let prefs = Preferences::new(EventType::Casual, Mood::Relaxed);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_candidates(&groups, &prefs, PARAMS, &mut rng).is_empty());
    }

    #[test]
    fn empty_wardrobe_yields_nothing() {
        let groups = group_by_category(&[]);
        let prefs = Preferences::new(EventType::Party, Mood::Bold);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_candidates(&groups, &prefs, PARAMS, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_candidates() {
        let items = wardrobe();
        let groups = group_by_category(&items);
        let prefs = Preferences::new(EventType::Casual, Mood::Relaxed);
        let ids = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_candidates(&groups, &prefs, PARAMS, &mut rng)
                .into_iter()
                .map(|c| c.iter().map(|i| i.id.clone()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(42), ids(42));
    }
}
