use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,
    pub enrollment_id: ObjectId,
    pub status: String,
    pub ticket_type: TicketTypeFindEntity,
}

#[derive(Deserialize)]
pub struct TicketTypeFindEntity {
    pub includes_hotel: bool,
    pub is_remote: bool,
}
