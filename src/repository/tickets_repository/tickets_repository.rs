use super::Ticket;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds ticket bought within the enrollment
    ///
    /// ### Errors
    /// - [repository::Error::InvalidDocument] when stored status is unknown
    ///
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: ObjectId,
    ) -> Result<Option<Ticket>, repository::Error>;
}
