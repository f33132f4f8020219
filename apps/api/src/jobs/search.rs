//! Job search filters applied to the in-memory catalog.

use serde::Deserialize;

use crate::models::job::{JobListing, JobType, RemotePolicy};

pub const DEFAULT_SALARY_MIN: u32 = 0;
pub const DEFAULT_SALARY_MAX: u32 = 200_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Matched against title, company name and description.
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub remote: Option<RemotePolicy>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl SearchFilters {
    pub fn matches(&self, job: &JobListing) -> bool {
        let keywords = self
            .keywords
            .as_deref()
            .map(|k| k.trim().to_lowercase())
            .unwrap_or_default();
        let matches_keywords = keywords.is_empty()
            || contains_ci(&job.title, &keywords)
            || contains_ci(&job.company.name, &keywords)
            || contains_ci(&job.description, &keywords);

        let location = self
            .location
            .as_deref()
            .map(|l| l.trim().to_lowercase())
            .unwrap_or_default();
        let matches_location = location.is_empty() || contains_ci(&job.location, &location);

        let matches_type = self.job_type.map_or(true, |t| job.job_type == t);
        let matches_remote = self.remote.map_or(true, |r| job.remote == r);

        // The whole advertised range must sit inside the requested window.
        let salary_min = self.salary_min.unwrap_or(DEFAULT_SALARY_MIN);
        let salary_max = self.salary_max.unwrap_or(DEFAULT_SALARY_MAX);
        let matches_salary = job.salary.min >= salary_min && job.salary.max <= salary_max;

        matches_keywords && matches_location && matches_type && matches_remote && matches_salary
    }
}

pub fn filter_jobs(jobs: Vec<JobListing>, filters: &SearchFilters) -> Vec<JobListing> {
    jobs.into_iter().filter(|j| filters.matches(j)).collect()
}

/// `$120k - $160k`
pub fn format_salary(min: u32, max: u32) -> String {
    format!("${}k - ${}k", to_thousands(min), to_thousands(max))
}

fn to_thousands(amount: u32) -> u32 {
    (amount as f64 / 1000.0).round() as u32
}
