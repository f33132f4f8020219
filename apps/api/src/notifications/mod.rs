// In-memory notification center and its HTTP surface.

pub mod center;
pub mod handlers;
