//! Skill-overlap scorer: the heuristic that stands in for the generative
//! match call when it is unavailable or answers with something unparseable.
//!
//! Algorithm:
//! 1. A job skill is matched when some applicant skill is a case-insensitive
//!    substring of it, or it is a case-insensitive substring of the applicant
//!    skill ("React" ~ "React.js" both ways).
//! 2. Unmatched job skills, first 3 in job order, are reported as missing.
//! 3. score = matched / max(job skills, 1) × 100, plus a jitter in [-10, 10],
//!    clamped to [40, 90] and rounded.
//!
//! No I/O, no shared state, never fails. Experience and summary text are
//! accepted but do not affect this path.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const MIN_FALLBACK_SCORE: u32 = 40;
pub const MAX_FALLBACK_SCORE: u32 = 90;
pub const MAX_JITTER: f64 = 10.0;
pub const MAX_MISSING_SKILLS: usize = 3;

pub const REASON_STRONG_ALIGNMENT: &str = "Strong skill alignment";
pub const REASON_SOME_OVERLAP: &str = "Some skill overlap";
pub const REASON_EXPERIENCE: &str = "Experience level matches requirements";
pub const REASON_CULTURE: &str = "Good cultural fit potential";

/// Everything the scorers look at for one (job, applicant) pair.
///
/// Missing arrays deserialize as empty, which is how malformed skill lists are
/// coerced before they reach the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInput {
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub job_requirements: Vec<String>,
    #[serde(default)]
    pub applicant_skills: Vec<String>,
    #[serde(default)]
    pub applicant_experience_text: String,
    #[serde(default)]
    pub applicant_summary_text: String,
}

/// Outcome of scoring one pair.
///
/// `matched_skills` and `missing_skills` are disjoint sub-sequences of the
/// job's skills; `missing_skills` holds at most three entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Jitter sources
// ────────────────────────────────────────────────────────────────────────────

/// Source of the bounded perturbation added to the ratio score.
pub trait Jitter {
    /// An offset in `[-MAX_JITTER, MAX_JITTER]`.
    fn offset(&mut self) -> f64;
}

/// Zero offset: the score is the clamped ratio.
pub struct NoJitter;

impl Jitter for NoJitter {
    fn offset(&mut self) -> f64 {
        0.0
    }
}

/// Uniform offset drawn from any `rand` generator.
pub struct RngJitter<R>(pub R);

impl<R: Rng> Jitter for RngJitter<R> {
    fn offset(&mut self) -> f64 {
        self.0.random_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// Offset seeded from a stable key, so the same key always yields the same
/// offset.
pub fn seeded_jitter(key: impl Hash) -> RngJitter<StdRng> {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    RngJitter(StdRng::seed_from_u64(hasher.finish()))
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Bidirectional case-insensitive substring test. Both sides lower-cased.
fn labels_overlap(job_skill: &str, applicant_skill: &str) -> bool {
    applicant_skill.contains(job_skill) || job_skill.contains(applicant_skill)
}

pub fn score_skill_overlap(input: &MatchInput, jitter: &mut impl Jitter) -> MatchResult {
    let applicant_lower: Vec<String> = input
        .applicant_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in &input.job_skills {
        let skill_lower = skill.to_lowercase();
        if applicant_lower
            .iter()
            .any(|a| labels_overlap(&skill_lower, a))
        {
            matched_skills.push(skill.clone());
        } else if missing_skills.len() < MAX_MISSING_SKILLS {
            missing_skills.push(skill.clone());
        }
    }

    let denominator = input.job_skills.len().max(1) as f64;
    let ratio = matched_skills.len() as f64 / denominator * 100.0;
    let score = (ratio + jitter.offset())
        .clamp(MIN_FALLBACK_SCORE as f64, MAX_FALLBACK_SCORE as f64)
        .round() as u32;

    let headline = if matched_skills.is_empty() {
        REASON_SOME_OVERLAP
    } else {
        REASON_STRONG_ALIGNMENT
    };

    MatchResult {
        score,
        matched_skills,
        missing_skills,
        reasons: vec![
            headline.to_string(),
            REASON_EXPERIENCE.to_string(),
            REASON_CULTURE.to_string(),
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn input(job: &[&str], applicant: &[&str]) -> MatchInput {
        MatchInput {
            job_skills: job.iter().map(|s| s.to_string()).collect(),
            applicant_skills: applicant.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Always returns the same offset.
    struct FixedJitter(f64);

    impl Jitter for FixedJitter {
        fn offset(&mut self) -> f64 {
            self.0
        }
    }

    fn assert_partition(input: &MatchInput, result: &MatchResult) {
        for skill in result.matched_skills.iter().chain(&result.missing_skills) {
            assert!(input.job_skills.contains(skill), "{skill} not a job skill");
        }
        for skill in &result.missing_skills {
            assert!(!result.matched_skills.contains(skill), "{skill} in both sets");
        }
        assert!(result.missing_skills.len() <= MAX_MISSING_SKILLS);
    }

    #[test]
    fn test_case_insensitive_match_with_missing_in_job_order() {
        let input = input(&["React", "Node.js", "Python"], &["react", "typescript"]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert_eq!(result.matched_skills, vec!["React"]);
        assert_eq!(result.missing_skills, vec!["Node.js", "Python"]);
        assert_eq!(result.reasons[0], REASON_STRONG_ALIGNMENT);
        // 1/3 of 100 = 33.3 → clamped up to the floor
        assert_eq!(result.score, 40);
        assert_partition(&input, &result);
    }

    #[test]
    fn test_empty_job_skills_floor_denominator() {
        let input = input(&[], &["React"]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.score, MIN_FALLBACK_SCORE);
    }

    #[test]
    fn test_empty_applicant_skills_reports_some_overlap() {
        let input = input(&["AWS"], &[]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["AWS"]);
        assert_eq!(result.reasons[0], REASON_SOME_OVERLAP);
    }

    #[test]
    fn test_substring_match_is_bidirectional() {
        let result = score_skill_overlap(&input(&["React.js"], &["React"]), &mut NoJitter);
        assert_eq!(result.matched_skills, vec!["React.js"]);

        let result = score_skill_overlap(&input(&["React"], &["react.js"]), &mut NoJitter);
        assert_eq!(result.matched_skills, vec!["React"]);
    }

    #[test]
    fn test_full_coverage_matches_every_job_skill() {
        let input = input(&["Rust", "SQL", "Docker"], &["rust", "PostgreSQL", "docker compose"]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert_eq!(result.matched_skills.len(), input.job_skills.len());
        assert!(result.missing_skills.is_empty());
        // 100% → clamped down to the ceiling
        assert_eq!(result.score, MAX_FALLBACK_SCORE);
    }

    #[test]
    fn test_missing_skills_truncated_to_three() {
        let input = input(&["Go", "Kafka", "Redis", "gRPC", "Terraform"], &["python"]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert_eq!(result.missing_skills, vec!["Go", "Kafka", "Redis"]);
        assert_partition(&input, &result);
    }

    #[test]
    fn test_duplicate_job_skills_count_independently() {
        let input = input(&["SQL", "SQL", "Java", "Java", "Java", "Java"], &["sql"]);
        let result = score_skill_overlap(&input, &mut NoJitter);

        assert_eq!(result.matched_skills, vec!["SQL", "SQL"]);
        assert_eq!(result.missing_skills, vec!["Java", "Java", "Java"]);
    }

    #[test]
    fn test_ratio_inside_band_is_not_clamped() {
        // 2 of 3 → 66.67 → 67
        let input = input(&["React", "CSS", "Go"], &["react", "css"]);
        let result = score_skill_overlap(&input, &mut NoJitter);
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_jitter_is_added_before_clamp_and_round() {
        let input = input(&["React", "CSS", "Go", "Rust"], &["react", "css"]);
        let result = score_skill_overlap(&input, &mut FixedJitter(7.4));
        assert_eq!(result.score, 57);

        let result = score_skill_overlap(&input, &mut FixedJitter(-10.0));
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_reasons_are_three_fixed_entries() {
        let result = score_skill_overlap(&input(&["React"], &["React"]), &mut NoJitter);
        assert_eq!(
            result.reasons,
            vec![REASON_STRONG_ALIGNMENT, REASON_EXPERIENCE, REASON_CULTURE]
        );
    }

    #[test]
    fn test_free_text_does_not_change_the_result() {
        let plain = input(&["React", "Go"], &["react"]);
        let mut verbose = plain.clone();
        verbose.applicant_experience_text = "Ten years of Go in production".to_string();
        verbose.applicant_summary_text = "Go expert".to_string();

        assert_eq!(
            score_skill_overlap(&plain, &mut NoJitter),
            score_skill_overlap(&verbose, &mut NoJitter)
        );
    }

    #[test]
    fn test_random_jitter_stays_in_band() {
        let cases = [
            input(&[], &[]),
            input(&["AWS"], &[]),
            input(&["React", "Node.js", "Python"], &["react", "typescript"]),
            input(&["A", "B"], &["a", "b"]),
        ];
        let mut jitter = RngJitter(rand::rng());
        for case in &cases {
            for _ in 0..200 {
                let result = score_skill_overlap(case, &mut jitter);
                assert!((MIN_FALLBACK_SCORE..=MAX_FALLBACK_SCORE).contains(&result.score));
                assert_partition(case, &result);
            }
        }
    }

    #[test]
    fn test_rng_jitter_bounds() {
        let mut jitter = RngJitter(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let offset = jitter.offset();
            assert!((-MAX_JITTER..=MAX_JITTER).contains(&offset));
        }
    }

    #[test]
    fn test_seeded_jitter_is_stable_per_key() {
        let input = input(&["React", "CSS", "Go", "Rust"], &["react", "css"]);
        let first = score_skill_overlap(&input, &mut seeded_jitter(("job-1", "user-1")));
        let second = score_skill_overlap(&input, &mut seeded_jitter(("job-1", "user-1")));
        assert_eq!(first.score, second.score);
    }
}
