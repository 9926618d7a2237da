use serde::{Deserialize, Serialize};

/// Matchmaker profile as authored by the user
///
/// Every field except `interests` is optional: the client submits whatever
/// the user filled in, and the scoring engine treats absent, empty-string
/// and empty-list fields uniformly as "no data, skip this factor".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Sign label with its trailing glyph, e.g. "Aries ♈"
    #[serde(default)]
    pub zodiac: Option<String>,
    /// 4-letter personality code, e.g. "INFP"
    #[serde(default)]
    pub mbti: Option<String>,
    #[serde(rename = "selfIntro", alias = "self_intro", default)]
    pub self_intro: Option<String>,
    #[serde(rename = "lookingFor", alias = "looking_for", default)]
    pub looking_for: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
}

impl Profile {
    /// Helper to get age as a number, defaulting to 18
    pub fn age_years(&self) -> u8 {
        self.age.unwrap_or(18)
    }

    /// Lower-cased self-intro text, empty string when absent
    pub fn intro_text(&self) -> String {
        self.self_intro.as_deref().unwrap_or("").to_lowercase()
    }

    /// Lower-cased looking-for text, empty string when absent
    pub fn looking_text(&self) -> String {
        self.looking_for.as_deref().unwrap_or("").to_lowercase()
    }

    /// Normalized city label (trimmed, lower-cased); None when absent or blank
    pub fn city_label(&self) -> Option<String> {
        let city = self.city.as_deref()?.trim().to_lowercase();
        if city.is_empty() {
            None
        } else {
            Some(city)
        }
    }
}

/// Result of scoring one profile pair
///
/// Derived value with no identity: the engine computes it fresh on every
/// call and callers cache it if recomputation matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub summary: String,
    pub reasons: Vec<String>,
}

impl CompatibilityResult {
    /// Sentinel returned when either profile is missing: "not yet
    /// computable", not an error
    pub fn pending() -> Self {
        Self {
            score: 0,
            summary: "Calculating...".to_string(),
            reasons: Vec::new(),
        }
    }
}

/// One ranked candidate in a rank response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    pub score: u8,
    pub summary: String,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_defaults_to_18() {
        let profile = Profile::default();
        assert_eq!(profile.age_years(), 18);

        let profile = Profile {
            age: Some(21),
            ..Profile::default()
        };
        assert_eq!(profile.age_years(), 21);
    }

    #[test]
    fn test_city_label_normalization() {
        let profile = Profile {
            city: Some("  Melaka Campus ".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.city_label(), Some("melaka campus".to_string()));

        let blank = Profile {
            city: Some("   ".to_string()),
            ..Profile::default()
        };
        assert_eq!(blank.city_label(), None);
        assert_eq!(Profile::default().city_label(), None);
    }

    #[test]
    fn test_pending_sentinel() {
        let pending = CompatibilityResult::pending();
        assert_eq!(pending.score, 0);
        assert_eq!(pending.summary, "Calculating...");
        assert!(pending.reasons.is_empty());
    }

    #[test]
    fn test_profile_accepts_snake_case_aliases() {
        let profile: Profile = serde_json::from_str(
            r#"{"self_intro": "chill gamer", "looking_for": "study buddy"}"#,
        )
        .unwrap();
        assert_eq!(profile.intro_text(), "chill gamer");
        assert_eq!(profile.looking_text(), "study buddy");
    }
}
