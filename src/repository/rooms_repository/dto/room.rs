use crate::repository::rooms_repository::entity::RoomFindEntity;
use bson::{oid::ObjectId, Bson};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: ObjectId,
    /// Maximum number of simultaneous bookings
    pub capacity: u32,
    pub hotel_id: ObjectId,
}

impl From<RoomFindEntity> for Room {
    fn from(value: RoomFindEntity) -> Self {
        Self {
            id: value._id,
            capacity: capacity_from_bson(&value.capacity),
            hotel_id: value.hotel_id,
        }
    }
}

///
/// Capacity that is negative, fractional, out of `u32` range
/// or not a number at all makes the room impossible to book
///
fn capacity_from_bson(capacity: &Bson) -> u32 {
    match *capacity {
        Bson::Int32(capacity) => u32::try_from(capacity).unwrap_or(0),
        Bson::Int64(capacity) => u32::try_from(capacity).unwrap_or(0),
        Bson::Double(capacity)
            if capacity.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&capacity) =>
        {
            capacity as u32
        }
        _ => {
            tracing::warn!(%capacity, "unusable room capacity");
            0
        }
    }
}
