//! Occasion and mood preferences.
//!
//! External callers send free strings; `PreferencesInput::validate` is the one
//! place they become closed enums. Unknown labels fail here instead of
//! silently producing an empty recommendation list further down.

use crate::error::{EngineError, EngineResult};
use crate::wardrobe::Season;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Work,
    Casual,
    #[serde(rename = "Date Night")]
    DateNight,
    Party,
    Formal,
    #[serde(alias = "Workout")]
    Exercise,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Work,
        EventType::Casual,
        EventType::DateNight,
        EventType::Party,
        EventType::Formal,
        EventType::Exercise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Work => "Work",
            EventType::Casual => "Casual",
            EventType::DateNight => "Date Night",
            EventType::Party => "Party",
            EventType::Formal => "Formal",
            EventType::Exercise => "Exercise",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        let found = match key.as_str() {
            "work" => Some(EventType::Work),
            "casual" => Some(EventType::Casual),
            "date night" | "date" => Some(EventType::DateNight),
            "party" => Some(EventType::Party),
            "formal" => Some(EventType::Formal),
            "exercise" | "workout" => Some(EventType::Exercise),
            _ => None,
        };
        found.ok_or_else(|| EngineError::UnknownEventType {
            value: s.trim().to_string(),
            suggestion: closest_label(&key, EventType::ALL.iter().map(|e| e.as_str())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Confident,
    Comfortable,
    Trendy,
    Classic,
    Bold,
    Relaxed,
    Elegant,
    Playful,
    Minimalist,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Mood::Confident,
        Mood::Comfortable,
        Mood::Trendy,
        Mood::Classic,
        Mood::Bold,
        Mood::Relaxed,
        Mood::Elegant,
        Mood::Playful,
        Mood::Minimalist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Confident => "Confident",
            Mood::Comfortable => "Comfortable",
            Mood::Trendy => "Trendy",
            Mood::Classic => "Classic",
            Mood::Bold => "Bold",
            Mood::Relaxed => "Relaxed",
            Mood::Elegant => "Elegant",
            Mood::Playful => "Playful",
            Mood::Minimalist => "Minimalist",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| EngineError::UnknownMood {
                value: s.trim().to_string(),
                suggestion: closest_label(&key, Mood::ALL.iter().map(|m| m.as_str())),
            })
    }
}

impl FromStr for Season {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            "all season" | "all-season" | "all" => Ok(Season::AllSeason),
            _ => Err(EngineError::UnknownSeason {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Validated preferences consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub event_type: EventType,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_preference: Option<String>,
}

impl Preferences {
    pub fn new(event_type: EventType, mood: Mood) -> Self {
        Self {
            event_type,
            mood,
            season: None,
            color_preference: None,
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }
}

/// Preferences as they arrive from the outside world.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesInput {
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub color_preference: Option<String>,
}

impl PreferencesInput {
    pub fn validate(&self) -> EngineResult<Preferences> {
        let event_type: EventType = required(&self.event_type, "eventType")?.parse()?;
        let mood: Mood = required(&self.mood, "mood")?.parse()?;
        let season = match non_blank(&self.season) {
            Some(s) => Some(s.parse::<Season>()?),
            None => None,
        };
        Ok(Preferences {
            event_type,
            mood,
            season,
            color_preference: non_blank(&self.color_preference).map(str::to_string),
        })
    }
}

impl TryFrom<PreferencesInput> for Preferences {
    type Error = EngineError;

    fn try_from(input: PreferencesInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

/// Optional per-user signals used by the richer server-side scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSignals {
    #[serde(default)]
    pub preferred_styles: Vec<String>,
    #[serde(default)]
    pub favorite_colors: Vec<String>,
    /// Reward items that have been worn before.
    #[serde(default = "default_true")]
    pub usage_history: bool,
}

fn default_true() -> bool {
    true
}

impl ExtendedSignals {
    pub fn prefers_style(&self, style: &str) -> bool {
        self.preferred_styles
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(style.trim()))
    }

    pub fn likes_color(&self, color: &str) -> bool {
        self.favorite_colors
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(color.trim()))
    }
}

// --- internals ---

fn required<'a>(field: &'a Option<String>, name: &'static str) -> EngineResult<&'a str> {
    non_blank(field).ok_or(EngineError::MissingField(name))
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Lowercase, `_`/`-` to space, whitespace condensed.
fn normalize_label(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn closest_label<'a>(key: &str, labels: impl Iterator<Item = &'a str>) -> Option<String> {
    labels
        .map(|label| (strsim::jaro_winkler(key, &label.to_lowercase()), label))
        .filter(|(sim, _)| *sim >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, label)| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(event: Option<&str>, mood: Option<&str>) -> PreferencesInput {
        PreferencesInput {
            event_type: event.map(Into::into),
            mood: mood.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn parses_labels_case_insensitively_with_aliases() {
        assert_eq!("date night".parse::<EventType>(), Ok(EventType::DateNight));
        assert_eq!("Date_Night".parse::<EventType>(), Ok(EventType::DateNight));
        assert_eq!("Workout".parse::<EventType>(), Ok(EventType::Exercise));
        assert_eq!("  WORK ".parse::<EventType>(), Ok(EventType::Work));
        assert_eq!("minimalist".parse::<Mood>(), Ok(Mood::Minimalist));
        assert_eq!("Autumn".parse::<Season>(), Ok(Season::Fall));
        assert_eq!("all-season".parse::<Season>(), Ok(Season::AllSeason));
    }

    #[test]
    fn unknown_labels_fail_with_hint() {
        match "Wrok".parse::<EventType>() {
            Err(EngineError::UnknownEventType { value, suggestion }) => {
                assert_eq!(value, "Wrok");
                assert_eq!(suggestion.as_deref(), Some("Work"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        match "Confidant".parse::<Mood>() {
            Err(EngineError::UnknownMood { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Confident"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        match "brunch".parse::<EventType>() {
            Err(EngineError::UnknownEventType { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_required_fields_are_contract_violations() {
        assert_eq!(
            input(None, Some("Bold")).validate(),
            Err(EngineError::MissingField("eventType"))
        );
        assert_eq!(
            input(Some("Work"), Some("   ")).validate(),
            Err(EngineError::MissingField("mood"))
        );
    }

    #[test]
    fn validate_builds_typed_preferences() {
        let mut raw = input(Some("Party"), Some("Trendy"));
        raw.season = Some("Summer".into());
        raw.color_preference = Some(" ".into());
        let prefs = Preferences::try_from(raw).unwrap();
        assert_eq!(prefs.event_type, EventType::Party);
        assert_eq!(prefs.mood, Mood::Trendy);
        assert_eq!(prefs.season, Some(Season::Summer));
        assert!(prefs.color_preference.is_none());
    }

    #[test]
    fn serialized_labels_match_rule_tables() {
        let prefs = Preferences::new(EventType::DateNight, Mood::Bold);
        let v = serde_json::to_value(&prefs).unwrap();
        assert_eq!(v["eventType"], serde_json::json!("Date Night"));
        assert_eq!(v["mood"], serde_json::json!("Bold"));
        assert!(v.get("season").is_none());

        let v = serde_json::to_value(prefs.with_season(Season::AllSeason)).unwrap();
        assert_eq!(v["season"], serde_json::json!("all-season"));
    }

    #[test]
    fn extended_signal_lookups_ignore_case() {
        let signals = ExtendedSignals {
            preferred_styles: vec!["Classic".into()],
            favorite_colors: vec!["navy".into()],
            usage_history: true,
        };
        assert!(signals.prefers_style("classic"));
        assert!(signals.likes_color(" NAVY"));
        assert!(!signals.likes_color("red"));
    }
}
