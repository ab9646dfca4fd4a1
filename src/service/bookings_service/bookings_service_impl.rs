use super::BookingsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{
        self, BookingsRepository, EnrollmentsRepository, Room, RoomsRepository, TicketStatus,
        TicketsRepository,
    },
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct BookingsServiceImpl {
    bookings_repository: Arc<dyn BookingsRepository>,
    rooms_repository: Arc<dyn RoomsRepository>,
    enrollments_repository: Arc<dyn EnrollmentsRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl BookingsServiceImpl {
    pub fn new(
        bookings_repository: Arc<dyn BookingsRepository>,
        rooms_repository: Arc<dyn RoomsRepository>,
        enrollments_repository: Arc<dyn EnrollmentsRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            bookings_repository,
            rooms_repository,
            enrollments_repository,
            tickets_repository,
        }
    }

    async fn find_room(&self, room_id: ObjectId) -> Result<Room, Error> {
        self.rooms_repository
            .find(room_id)
            .await?
            .ok_or(Error::RoomNotExist)
    }

    ///
    /// User needs a paid, in person ticket that includes hotel
    ///
    async fn validate_ticket_includes_hotel(&self, user_id: Uuid) -> Result<(), Error> {
        let enrollment = self
            .enrollments_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::EnrollmentNotExist)?;

        let ticket = self
            .tickets_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(Error::TicketNotExist)?;
        tracing::debug!(ticket_id = %ticket.id, status = ticket.status.as_ref(), "found ticket");

        if ticket.status != TicketStatus::Paid {
            return Err(Error::TicketNotPaid);
        }

        if !ticket.ticket_type.includes_hotel || ticket.ticket_type.is_remote {
            return Err(Error::TicketWithoutHotel);
        }

        Ok(())
    }

    ///
    /// Occupancy is evaluated once, there is no lock between
    /// this check and the following write
    ///
    async fn validate_room_vacancy(&self, room: &Room) -> Result<(), Error> {
        let occupancy = self.bookings_repository.count_by_room_id(room.id).await?;
        tracing::debug!(room_id = %room.id, occupancy, capacity = room.capacity, "room occupancy");

        if occupancy >= u64::from(room.capacity) {
            return Err(Error::RoomFull);
        }

        Ok(())
    }
}

#[async_trait]
impl BookingsService for BookingsServiceImpl {
    async fn get_booking(&self, user_id: Uuid) -> Result<output::Booking, Error> {
        tracing::info!("finding booking");

        let booking = self
            .bookings_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::BookingNotExist)?;

        tracing::info!(id = %booking.id, "found booking");

        Ok(booking.into())
    }

    async fn create_booking(
        &self,
        user_id: Uuid,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error> {
        tracing::info!("creating booking");
        tracing::trace!(?booking_room);

        let input::BookingRoom { room_id } = booking_room;

        let room = self.find_room(room_id).await?;
        self.validate_ticket_includes_hotel(user_id).await?;
        self.validate_room_vacancy(&room).await?;

        let booking = self
            .bookings_repository
            .insert(user_id, room_id, OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::BookingAlreadyExists,
                err => Error::Database(err),
            })?;

        tracing::info!(id = %booking.id, "created booking");

        Ok(booking.into())
    }

    async fn change_booking(
        &self,
        user_id: Uuid,
        booking_id: ObjectId,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error> {
        tracing::info!(%booking_id, "changing booking room");
        tracing::trace!(?booking_room);

        let input::BookingRoom { room_id } = booking_room;

        let room = self.find_room(room_id).await?;

        let booking = self
            .bookings_repository
            .find_by_user_id(user_id)
            .await?
            .filter(|booking| booking.id == booking_id)
            .ok_or(Error::BookingNotExist)?;

        self.validate_room_vacancy(&room).await?;

        let booking = self
            .bookings_repository
            .update_room_id(booking.id, room_id, OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::BookingNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("changed booking room");

        Ok(booking.into())
    }
}
