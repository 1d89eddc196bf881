//! Human-readable reasoning and style notes for a candidate.

use rand::Rng;
use std::collections::BTreeSet;

use crate::preferences::Preferences;
use crate::rules::styling_tip;
use crate::wardrobe::{Category, WardrobeItem};

pub const MAX_STYLE_NOTES: usize = 3;
/// Up to this many distinct colors reads as cohesive.
const COHESIVE_MAX_COLORS: usize = 2;
/// Above this many distinct colors we suggest trimming the palette.
const BUSY_MIN_COLORS: usize = 3;

const TEMPLATE_COUNT: usize = 4;

/// One sentence from the fixed template pool, chosen with `rng`.
pub fn reasoning<R: Rng + ?Sized>(
    items: &[&WardrobeItem],
    prefs: &Preferences,
    rng: &mut R,
) -> String {
    let event = prefs.event_type.as_str().to_lowercase();
    let mood = prefs.mood.as_str().to_lowercase();

    match rng.random_range(0..TEMPLATE_COUNT) {
        0 => {
            let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
            format!(
                "This outfit combines {} perfectly for a {event} occasion.",
                categories.join(", ")
            )
        }
        1 => match items.first() {
            Some(focal) => format!(
                "The {mood} mood is reflected in the choice of {} as the focal point.",
                focal.name
            ),
            None => format!("The selected items work harmoniously together to create a {mood} look."),
        },
        2 => format!("This combination balances style and comfort for your {event} event."),
        _ => format!("The selected items work harmoniously together to create a {mood} look."),
    }
}

/// Up to three notes: styling tip, mood tip, accessory nudge, color check.
pub fn style_notes(items: &[&WardrobeItem], prefs: &Preferences) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(tip) = styling_tip(prefs.event_type, prefs.mood) {
        notes.push(tip.to_string());
    }

    let keywords = prefs.mood.style().keywords;
    if !keywords.is_empty() {
        let focus = keywords.iter().take(2).copied().collect::<Vec<_>>().join(" and ");
        notes.push(format!(
            "For a {} look, focus on {focus} elements.",
            prefs.mood.as_str().to_lowercase()
        ));
    }

    if !items.iter().any(|i| i.category == Category::Accessories) {
        notes.push("Consider adding accessories to complete the look.".to_string());
    }

    let colors: BTreeSet<String> = items.iter().filter_map(|i| i.primary_color()).collect();
    if colors.len() <= COHESIVE_MAX_COLORS {
        notes.push("The color palette is cohesive and balanced.".to_string());
    } else if colors.len() > BUSY_MIN_COLORS {
        notes.push("Try limiting to 2-3 main colors for a more polished look.".to_string());
    }

    notes.truncate(MAX_STYLE_NOTES);
    notes
}
