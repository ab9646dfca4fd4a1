use bson::{oid::ObjectId, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EnrollmentFindEntity {
    pub _id: ObjectId,
    pub user_id: Uuid,
}
