use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Profile;

/// Request to score one profile pair
///
/// Either side may be null while the client is still loading a profile;
/// the engine answers with its "Calculating..." sentinel in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    #[serde(rename = "profileA", alias = "profile_a", default)]
    pub profile_a: Option<Profile>,
    #[serde(rename = "profileB", alias = "profile_b", default)]
    pub profile_b: Option<Profile>,
}

/// Request to rank a candidate list against a subject profile
///
/// `limit` is optional; the server applies its configured default when the
/// client omits it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    pub profile: Profile,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_limit_deserializes_to_none() {
        let request: RankCandidatesRequest =
            serde_json::from_str(r#"{"profile": {}}"#).unwrap();
        assert_eq!(request.limit, None);
        assert!(request.candidates.is_empty());
    }

    #[test]
    fn test_score_request_tolerates_null_profiles() {
        let request: ScorePairRequest =
            serde_json::from_str(r#"{"profileA": null, "profileB": {"age": 20}}"#).unwrap();
        assert!(request.profile_a.is_none());
        assert_eq!(request.profile_b.unwrap().age, Some(20));
    }
}
