use bson::{oid::ObjectId, Bson};
use serde::Deserialize;

///
/// `capacity` may be stored as int32, int64 or double
///
#[derive(Deserialize)]
pub struct RoomFindEntity {
    pub _id: ObjectId,
    pub capacity: Bson,
    pub hotel_id: ObjectId,
}
