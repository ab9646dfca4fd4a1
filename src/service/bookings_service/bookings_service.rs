use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsService: Send + Sync {
    ///
    /// Find booking that belongs to the user
    ///
    /// ### Errors
    /// - [Error::BookingNotExist] when user has no booking
    ///
    async fn get_booking(&self, user_id: Uuid) -> Result<output::Booking, Error>;

    ///
    /// Book a room for the user
    ///
    /// ### Returns
    /// created booking
    ///
    /// ### Errors
    /// - [Error::RoomNotExist] when room does not exist
    /// - [Error::EnrollmentNotExist] when user is not enrolled
    /// - [Error::TicketNotExist] when user has not bought a ticket
    /// - [Error::TicketNotPaid] when ticket is not paid
    /// - [Error::TicketWithoutHotel] when
    ///     - ticket type does not include hotel
    ///     - ticket type is remote
    /// - [Error::RoomFull] when room capacity is reached
    /// - [Error::BookingAlreadyExists] when user already has a booking
    ///
    async fn create_booking(
        &self,
        user_id: Uuid,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error>;

    ///
    /// Move user's booking to another room
    ///
    /// ### Returns
    /// updated booking
    ///
    /// ### Errors
    /// - [Error::RoomNotExist] when room does not exist
    /// - [Error::BookingNotExist] when
    ///     - user has no booking
    ///     - booking_id is not the id of user's booking
    /// - [Error::RoomFull] when room capacity is reached
    ///
    async fn change_booking(
        &self,
        user_id: Uuid,
        booking_id: ObjectId,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error>;
}
