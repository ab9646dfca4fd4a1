use super::BookingId;
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: Uuid,
    pub room_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Booking> for Booking {
    fn from(value: repository::Booking) -> Self {
        Self {
            id: value.id.to_hex(),
            user_id: value.user_id,
            room_id: value.room_id.to_hex(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<Booking> for BookingId {
    fn from(value: Booking) -> Self {
        Self {
            booking_id: value.id,
        }
    }
}
