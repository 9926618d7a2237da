use crate::core::compatibility::calculate_compatibility;
use crate::models::{Profile, ScoredCandidate};

/// Result of ranking a candidate list
#[derive(Debug)]
pub struct RankResult {
    pub candidates: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranks matchmaker candidates against one subject profile
///
/// Thin orchestrator over the compatibility engine: score every candidate,
/// sort by score, truncate. Holds no state and performs no I/O; callers
/// hand in the candidate list they fetched.
#[derive(Debug, Clone, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Score and rank candidates for a subject profile
    ///
    /// Candidates carrying the subject's own id are excluded. Sorting is
    /// stable, so equal scores keep their submitted order.
    pub fn rank(
        &self,
        subject: &Profile,
        candidates: Vec<Profile>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| {
                match (&subject.id, &candidate.id) {
                    (Some(subject_id), Some(candidate_id)) => subject_id != candidate_id,
                    _ => true,
                }
            })
            .map(|candidate| {
                let result = calculate_compatibility(Some(subject), Some(&candidate));
                ScoredCandidate {
                    id: candidate.id,
                    nickname: candidate.nickname,
                    score: result.score,
                    summary: result.summary,
                    reasons: result.reasons,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);

        RankResult {
            candidates: scored,
            total_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, interests: &[&str]) -> Profile {
        Profile {
            id: Some(id.to_string()),
            nickname: Some(format!("Anon {}", id)),
            interests: interests.iter().map(|i| i.to_string()).collect(),
            ..Profile::default()
        }
    }

    fn subject() -> Profile {
        candidate("me", &["gaming", "music", "coffee", "art"])
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranker = Ranker::new();

        let candidates = vec![
            candidate("low", &["chess"]),
            candidate("high", &["gaming", "music", "coffee", "art"]),
            candidate("mid", &["gaming", "music"]),
        ];

        let result = ranker.rank(&subject(), candidates, 10);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<_> = result
            .candidates
            .iter()
            .map(|c| c.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_excludes_self() {
        let ranker = Ranker::new();
        let me = subject();

        let candidates = vec![me.clone(), candidate("other", &["gaming"])];
        let result = ranker.rank(&me, candidates, 10);

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].id.as_deref(), Some("other"));
        // total_candidates counts the submitted list, not the survivors
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_rank_respects_limit() {
        let ranker = Ranker::new();

        let candidates: Vec<Profile> = (0..20)
            .map(|i| candidate(&i.to_string(), &["gaming"]))
            .collect();

        let result = ranker.rank(&subject(), candidates, 5);

        assert_eq!(result.candidates.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_equal_scores_keep_submitted_order() {
        let ranker = Ranker::new();

        let candidates = vec![
            candidate("first", &["gaming"]),
            candidate("second", &["music"]),
        ];

        let result = ranker.rank(&subject(), candidates, 10);

        assert_eq!(result.candidates[0].id.as_deref(), Some("first"));
        assert_eq!(result.candidates[1].id.as_deref(), Some("second"));
    }

    #[test]
    fn test_rank_with_empty_candidates() {
        let result = Ranker::new().rank(&subject(), vec![], 10);
        assert!(result.candidates.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
