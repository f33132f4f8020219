// Job catalog: in-memory listings seeded from fixtures, plus search filters.

pub mod catalog;
pub mod handlers;
pub mod search;
