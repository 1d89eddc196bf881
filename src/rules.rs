//! Constant rule tables: event category rules, mood vocabularies, styling tips
//! and missing-piece suggestions.
//!
//! Everything here is `'static` and read-only, so concurrent callers share it
//! without locking.

use crate::preferences::{EventType, Mood};
use crate::wardrobe::Category;

use Category::*;

/// Category rule for one event type.
#[derive(Debug)]
pub struct EventRule {
    pub required: &'static [Category],
    pub optional: &'static [Category],
    /// Advisory style keywords that clash with the occasion. Not scored.
    pub excludes: &'static [&'static str],
}

/// Vocabulary for one mood. `keywords` reward, `avoid` penalize.
#[derive(Debug)]
pub struct MoodStyle {
    pub keywords: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

static WORK: EventRule = EventRule {
    required: &[Tops, Bottoms],
    optional: &[Outerwear, Shoes, Accessories],
    excludes: &["casual wear", "athletic wear"],
};
static CASUAL: EventRule = EventRule {
    required: &[Tops],
    optional: &[Bottoms, Outerwear, Shoes, Accessories],
    excludes: &["formal wear"],
};
static DATE_NIGHT: EventRule = EventRule {
    required: &[Tops, Bottoms],
    optional: &[Dresses, Outerwear, Shoes, Accessories],
    excludes: &["athletic wear", "loungewear"],
};
static PARTY: EventRule = EventRule {
    required: &[Tops],
    optional: &[Bottoms, Dresses, Outerwear, Shoes, Accessories],
    excludes: &["work wear", "athletic wear"],
};
static FORMAL: EventRule = EventRule {
    required: &[Tops, Bottoms],
    optional: &[Dresses, Outerwear, Shoes, Accessories],
    excludes: &["casual wear", "athletic wear"],
};
static EXERCISE: EventRule = EventRule {
    required: &[Tops, Bottoms],
    optional: &[Outerwear, Shoes],
    excludes: &["formal wear", "delicate fabrics"],
};

impl EventType {
    pub fn rule(self) -> &'static EventRule {
        match self {
            EventType::Work => &WORK,
            EventType::Casual => &CASUAL,
            EventType::DateNight => &DATE_NIGHT,
            EventType::Party => &PARTY,
            EventType::Formal => &FORMAL,
            EventType::Exercise => &EXERCISE,
        }
    }

    /// Categories a complete look for this event should contain.
    pub fn essential_pieces(self) -> &'static [Category] {
        match self {
            EventType::Work => &[Tops, Bottoms, Shoes],
            EventType::Formal => &[Tops, Bottoms, Shoes, Outerwear],
            EventType::Casual => &[Tops, Bottoms],
            EventType::DateNight | EventType::Party => &[Tops, Bottoms, Shoes, Accessories],
            EventType::Exercise => &[Tops, Bottoms],
        }
    }
}

static CONFIDENT: MoodStyle = MoodStyle {
    keywords: &["bold", "structured", "statement", "sharp", "commanding"],
    colors: &["black", "red", "navy", "white"],
    avoid: &["oversized", "muted", "casual"],
};
static COMFORTABLE: MoodStyle = MoodStyle {
    keywords: &["soft", "relaxed", "cozy", "loose", "breathable"],
    colors: &["neutral", "earth tones", "pastels"],
    avoid: &["tight", "restrictive", "formal"],
};
static TRENDY: MoodStyle = MoodStyle {
    keywords: &["current", "fashionable", "stylish", "contemporary", "chic"],
    colors: &["seasonal", "on-trend", "modern"],
    avoid: &["outdated", "basic", "old-fashioned"],
};
static CLASSIC: MoodStyle = MoodStyle {
    keywords: &["timeless", "elegant", "refined", "sophisticated", "traditional"],
    colors: &["neutral", "black", "white", "navy", "beige"],
    avoid: &["trendy", "flashy", "experimental"],
};
static BOLD: MoodStyle = MoodStyle {
    keywords: &["vibrant", "daring", "eye-catching", "unique", "adventurous"],
    colors: &["bright", "contrasting", "neon", "metallic"],
    avoid: &["subtle", "muted", "conservative"],
};
static RELAXED: MoodStyle = MoodStyle {
    keywords: &["easygoing", "casual", "comfortable", "laid-back", "effortless"],
    colors: &["soft", "muted", "neutral"],
    avoid: &["formal", "structured", "complicated"],
};
static ELEGANT: MoodStyle = MoodStyle {
    keywords: &["graceful", "polished", "silk", "tailored", "satin"],
    colors: &["black", "ivory", "champagne", "navy"],
    avoid: &["distressed", "sloppy", "athletic"],
};
static PLAYFUL: MoodStyle = MoodStyle {
    keywords: &["fun", "colorful", "quirky", "printed", "whimsical"],
    colors: &["bright", "pastel", "multicolor"],
    avoid: &["stiff", "somber", "plain"],
};
static MINIMALIST: MoodStyle = MoodStyle {
    keywords: &["simple", "clean", "sleek", "monochrome", "essential"],
    colors: &["neutral", "black", "white", "gray"],
    avoid: &["busy", "flashy", "embellished"],
};

impl Mood {
    pub fn style(self) -> &'static MoodStyle {
        match self {
            Mood::Confident => &CONFIDENT,
            Mood::Comfortable => &COMFORTABLE,
            Mood::Trendy => &TRENDY,
            Mood::Classic => &CLASSIC,
            Mood::Bold => &BOLD,
            Mood::Relaxed => &RELAXED,
            Mood::Elegant => &ELEGANT,
            Mood::Playful => &PLAYFUL,
            Mood::Minimalist => &MINIMALIST,
        }
    }
}

/// `(event, mood) → tip`. First match wins.
pub static STYLING_RULES: &[(EventType, Mood, &str)] = &[
    (
        EventType::Work,
        Mood::Confident,
        "Layer a structured blazer for authority and add a statement accessory",
    ),
    (
        EventType::DateNight,
        Mood::Bold,
        "Choose one statement piece as your focal point and keep other items complementary",
    ),
    (
        EventType::Casual,
        Mood::Comfortable,
        "Opt for soft fabrics and relaxed fits that allow for easy movement",
    ),
    (
        EventType::Party,
        Mood::Trendy,
        "Mix textures and add eye-catching accessories to elevate your look",
    ),
    (
        EventType::Formal,
        Mood::Classic,
        "Stick to neutral colors and timeless silhouettes for an elegant appearance",
    ),
];

pub fn styling_tip(event: EventType, mood: Mood) -> Option<&'static str> {
    STYLING_RULES
        .iter()
        .find(|(e, m, _)| *e == event && *m == mood)
        .map(|(_, _, tip)| *tip)
}

/// `(name, description)` for a piece worth buying. `None` when the table has no
/// entry for the category at all; callers fall back to a generic phrasing.
pub fn piece_suggestion(
    category: Category,
    event: EventType,
) -> Option<(&'static str, &'static str)> {
    use EventType::*;
    let hit = match (category, event) {
        (Tops, Work) => ("Professional Blouse", "A crisp white or neutral colored blouse"),
        (Tops, Formal) => ("Dress Shirt", "Elegant button-down shirt"),
        (Tops, Casual) => ("Comfortable T-Shirt", "Soft cotton tee in your favorite color"),
        (Tops, DateNight) => ("Stylish Top", "Flattering blouse or nice sweater"),
        (Tops, Party) => ("Statement Top", "Eye-catching blouse or party shirt"),
        (Tops, Exercise) => ("Performance Tee", "Breathable, moisture-wicking top"),
        (Bottoms, Work) => ("Dress Pants", "Professional trousers or pencil skirt"),
        (Bottoms, Formal) => ("Formal Trousers", "Well-tailored dress pants"),
        (Bottoms, Casual) => ("Comfortable Jeans", "Well-fitting denim or casual pants"),
        (Bottoms, DateNight) => ("Stylish Bottoms", "Flattering jeans or dress pants"),
        (Bottoms, Party) => ("Party Bottoms", "Trendy pants or skirt"),
        (Bottoms, Exercise) => ("Training Leggings", "Stretchy leggings or athletic shorts"),
        (Shoes, Work) => ("Professional Shoes", "Comfortable dress shoes or heels"),
        (Shoes, Formal) => ("Dress Shoes", "Elegant formal footwear"),
        (Shoes, Casual) => ("Casual Sneakers", "Comfortable everyday shoes"),
        (Shoes, DateNight) => ("Nice Shoes", "Stylish shoes that complete the look"),
        (Shoes, Party) => ("Party Shoes", "Fun, stylish footwear"),
        (Shoes, Exercise) => ("Training Shoes", "Supportive athletic sneakers"),
        (Accessories, _) => ("Accessories", "Jewelry, bag, or scarf to complete the look"),
        (Outerwear, _) => ("Jacket", "A blazer or coat for the occasion"),
        (Dresses, _) => return None,
    };
    Some(hit)
}
