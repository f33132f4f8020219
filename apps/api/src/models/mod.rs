pub mod applicant;
pub mod job;
pub mod notification;
