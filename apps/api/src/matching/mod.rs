// Job/applicant match scoring.
// The skill-overlap heuristic is the pure core; the generative scorer and the
// fallback chain sit on top of it behind the MatchScorer trait.

pub mod handlers;
pub mod prompts;
pub mod ranking;
pub mod scorer;
pub mod skill_overlap;
