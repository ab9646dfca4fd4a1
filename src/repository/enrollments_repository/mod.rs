mod dto;
mod enrollments_repository;
mod enrollments_repository_impl;
mod entity;

pub use dto::Enrollment;
pub use enrollments_repository::*;
pub use enrollments_repository_impl::*;
