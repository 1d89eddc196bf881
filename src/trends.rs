//! Static seasonal style trends.

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::wardrobe::Season;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalTrends {
    pub season: Season,
    pub trends: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub styles: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Season {
    /// Meteorological season for a 1-based month (northern hemisphere).
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn current() -> Season {
        Season::from_month(Local::now().month())
    }
}

/// Trends for `season`; `AllSeason` resolves to the current season.
pub fn trends_for(season: Season) -> SeasonalTrends {
    let season = match season {
        Season::AllSeason => Season::current(),
        s => s,
    };
    match season {
        Season::Spring => SeasonalTrends {
            season,
            trends: &["pastels", "florals", "light layers", "trench coats"],
            colors: &["sage green", "lavender", "soft pink", "cream"],
            styles: &["romantic", "casual", "bohemian"],
            tips: &[
                "Layer light pieces",
                "Incorporate fresh colors",
                "Add floral prints",
            ],
        },
        Season::Summer => SeasonalTrends {
            season,
            trends: &["bright colors", "breathable fabrics", "minimalist", "sandals"],
            colors: &["coral", "turquoise", "yellow", "white"],
            styles: &["minimalist", "casual", "trendy"],
            tips: &[
                "Choose breathable fabrics",
                "Embrace minimal styling",
                "Protect from sun",
            ],
        },
        Season::Fall => SeasonalTrends {
            season,
            trends: &["earth tones", "layering", "boots", "sweaters"],
            colors: &["burgundy", "mustard", "brown", "olive"],
            styles: &["classic", "edgy", "layered"],
            tips: &[
                "Master the art of layering",
                "Invest in quality outerwear",
                "Add warm accessories",
            ],
        },
        Season::Winter | Season::AllSeason => SeasonalTrends {
            season: Season::Winter,
            trends: &["dark colors", "cozy textures", "outerwear", "accessories"],
            colors: &["navy", "black", "gray", "burgundy"],
            styles: &["formal", "cozy", "structured"],
            tips: &[
                "Focus on warmth",
                "Add texture with knits",
                "Don't forget accessories",
            ],
        },
    }
}
