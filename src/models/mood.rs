use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eight moods a user can record.
///
/// Variants are declared in catalog order, which is also the order the mood
/// grid is presented in and the tie-break order for frequency views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoodType {
    Focus,
    Excitement,
    Calm,
    Joy,
    Fatigue,
    Anxiety,
    Sadness,
    Anger,
}

impl MoodType {
    /// Every mood in catalog order.
    pub const ALL: [MoodType; 8] = [
        MoodType::Focus,
        MoodType::Excitement,
        MoodType::Calm,
        MoodType::Joy,
        MoodType::Fatigue,
        MoodType::Anxiety,
        MoodType::Sadness,
        MoodType::Anger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "FOCUS",
            Self::Excitement => "EXCITEMENT",
            Self::Calm => "CALM",
            Self::Joy => "JOY",
            Self::Fatigue => "FATIGUE",
            Self::Anxiety => "ANXIETY",
            Self::Sadness => "SADNESS",
            Self::Anger => "ANGER",
        }
    }

    /// Position in the catalog.
    pub fn catalog_index(&self) -> usize {
        *self as usize
    }

    pub fn definition(&self) -> &'static MoodDefinition {
        &MOODS[self.catalog_index()]
    }

    pub fn label(&self, language: Language) -> &'static str {
        self.definition().label(language)
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}' (expected one of: focus, excitement, calm, joy, fatigue, anxiety, sadness, anger)")]
pub struct UnknownMood(pub String);

impl FromStr for MoodType {
    type Err = UnknownMood;

    /// Accepts the persisted identifier or the English label in any case,
    /// so both `FOCUS` and `excited` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MoodType::ALL
            .into_iter()
            .find(|mood| {
                mood.as_str().eq_ignore_ascii_case(needle)
                    || mood.definition().label_en.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Display language for labels and user-facing text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    /// Picks English for locale strings such as `en_US.UTF-8`, Japanese
    /// for anything else.
    pub fn detect(locale: Option<&str>) -> Self {
        match locale {
            Some(tag) if tag.trim().to_ascii_lowercase().starts_with("en") => Self::En,
            _ => Self::Ja,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            other => Err(format!("unsupported language '{}' (expected ja or en)", other)),
        }
    }
}

/// Display and semantic attributes of a mood.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodDefinition {
    pub id: MoodType,
    /// Japanese label.
    pub label: &'static str,
    pub label_en: &'static str,
    /// Japanese description.
    pub description: &'static str,
    pub description_en: &'static str,
    /// Chart color as `#rrggbb`.
    pub color_hex: &'static str,
}

impl MoodDefinition {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Ja => self.label,
            Language::En => self.label_en,
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::Ja => self.description,
            Language::En => self.description_en,
        }
    }

    /// The color as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color_hex.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

/// The mood catalog, indexed by [`MoodType::catalog_index`].
pub static MOODS: [MoodDefinition; 8] = [
    MoodDefinition {
        id: MoodType::Focus,
        label: "集中",
        label_en: "Focus",
        description: "深い集中と没頭",
        description_en: "Deep concentration & flow",
        color_hex: "#3b82f6",
    },
    MoodDefinition {
        id: MoodType::Excitement,
        label: "高揚",
        label_en: "Excited",
        description: "エネルギーと期待感",
        description_en: "High energy & anticipation",
        color_hex: "#f59e0b",
    },
    MoodDefinition {
        id: MoodType::Calm,
        label: "平穏",
        label_en: "Calm",
        description: "安らぎとバランス",
        description_en: "Peace & balance",
        color_hex: "#10b981",
    },
    MoodDefinition {
        id: MoodType::Joy,
        label: "喜び",
        label_en: "Joy",
        description: "幸福感と楽しみ",
        description_en: "Happiness & delight",
        color_hex: "#ec4899",
    },
    MoodDefinition {
        id: MoodType::Fatigue,
        label: "疲労",
        label_en: "Fatigue",
        description: "エネルギー不足、疲れ",
        description_en: "Low energy & tiredness",
        color_hex: "#64748b",
    },
    MoodDefinition {
        id: MoodType::Anxiety,
        label: "不安",
        label_en: "Anxiety",
        description: "緊張や心配",
        description_en: "Tension & worry",
        color_hex: "#7c3aed",
    },
    MoodDefinition {
        id: MoodType::Sadness,
        label: "悲しみ",
        label_en: "Sadness",
        description: "憂鬱や悲嘆",
        description_en: "Grief & melancholy",
        color_hex: "#334155",
    },
    MoodDefinition {
        id: MoodType::Anger,
        label: "怒り",
        label_en: "Anger",
        description: "不満やイライラ",
        description_en: "Frustration & irritation",
        color_hex: "#dc2626",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_mood() {
        for mood in MoodType::ALL {
            assert_eq!(mood.definition().id, mood);
        }
    }

    #[test]
    fn parses_identifier_and_english_label() {
        assert_eq!("focus".parse::<MoodType>().unwrap(), MoodType::Focus);
        assert_eq!("EXCITEMENT".parse::<MoodType>().unwrap(), MoodType::Excitement);
        assert_eq!("Excited".parse::<MoodType>().unwrap(), MoodType::Excitement);
        assert!("bored".parse::<MoodType>().is_err());
    }

    #[test]
    fn serializes_as_upper_case_identifier() {
        let json = serde_json::to_string(&MoodType::Fatigue).unwrap();
        assert_eq!(json, "\"FATIGUE\"");
    }

    #[test]
    fn detects_language_from_locale() {
        assert_eq!(Language::detect(Some("en_US.UTF-8")), Language::En);
        assert_eq!(Language::detect(Some("ja_JP.UTF-8")), Language::Ja);
        assert_eq!(Language::detect(Some("fr_FR")), Language::Ja);
        assert_eq!(Language::detect(None), Language::Ja);
    }

    #[test]
    fn rgb_decodes_hex_color() {
        assert_eq!(MoodType::Focus.definition().rgb(), (0x3b, 0x82, 0xf6));
        assert_eq!(MoodType::Anger.definition().rgb(), (0xdc, 0x26, 0x26));
    }
}
