use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookingFindEntity {
    pub _id: ObjectId,
    pub user_id: Uuid,
    pub room_id: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
