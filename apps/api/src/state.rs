use std::sync::Arc;

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::llm_client::TextGenerator;
use crate::matching::scorer::{MatchScorer, SkillOverlapScorer};
use crate::notifications::center::NotificationCenter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Gemini client, or `DisabledGenerator` when no key is configured.
    pub generator: Arc<dyn TextGenerator>,
    /// Ranking chain. Default: generative first, skill overlap on failure.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Heuristic used directly by the single-pair scoring endpoint.
    pub skill_scorer: SkillOverlapScorer,
    pub catalog: JobCatalog,
    pub notifications: NotificationCenter,
}

#[cfg(test)]
impl AppState {
    /// Fixture-seeded state around the given generator.
    pub fn for_tests(generator: Arc<dyn TextGenerator>) -> Self {
        use crate::fixtures::{sample_jobs, sample_notifications};
        use crate::matching::scorer::{FallbackMatchScorer, GenerativeMatchScorer, JitterPolicy};

        let skill_scorer = SkillOverlapScorer::new(JitterPolicy::Off);
        Self {
            config: Config::default(),
            match_scorer: Arc::new(FallbackMatchScorer::new(
                Arc::new(GenerativeMatchScorer::new(generator.clone())),
                skill_scorer,
            )),
            generator,
            skill_scorer,
            catalog: JobCatalog::new(sample_jobs()),
            notifications: NotificationCenter::new(sample_notifications()),
        }
    }
}
