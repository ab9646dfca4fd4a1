use super::{TicketStatus, TicketType};
use crate::repository::{self, tickets_repository::entity::TicketFindEntity};
use bson::oid::ObjectId;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: ObjectId,
    pub enrollment_id: ObjectId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl TryFrom<TicketFindEntity> for Ticket {
    type Error = repository::Error;

    fn try_from(value: TicketFindEntity) -> Result<Self, Self::Error> {
        let status = TicketStatus::from_str(&value.status)
            .map_err(|_| repository::Error::InvalidDocument("unknown ticket status"))?;

        Ok(Self {
            id: value._id,
            enrollment_id: value.enrollment_id,
            status,
            ticket_type: value.ticket_type.into(),
        })
    }
}
