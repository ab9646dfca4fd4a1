use super::Booking;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    ///
    /// Inserts new booking of the room for the user.
    /// `updated_at` is set to `created_at`.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation]
    /// when user already has a booking
    ///
    async fn insert(
        &self,
        user_id: Uuid,
        room_id: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error>;

    ///
    /// Finds booking that belongs to the user
    ///
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Booking>, repository::Error>;

    ///
    /// Counts bookings that reference the room
    ///
    async fn count_by_room_id(&self, room_id: ObjectId) -> Result<u64, repository::Error>;

    ///
    /// Moves booking to another room.
    ///
    /// ### Returns
    /// booking after the update
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when booking does not exist
    ///
    async fn update_room_id(
        &self,
        id: ObjectId,
        room_id: ObjectId,
        updated_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error>;
}
