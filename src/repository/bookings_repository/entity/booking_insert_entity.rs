use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct BookingInsertEntity {
    pub user_id: Uuid,
    pub room_id: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
