use crate::repository::tickets_repository::entity::TicketTypeFindEntity;

#[derive(Debug, Clone, PartialEq)]
pub struct TicketType {
    pub includes_hotel: bool,
    pub is_remote: bool,
}

impl From<TicketTypeFindEntity> for TicketType {
    fn from(value: TicketTypeFindEntity) -> Self {
        Self {
            includes_hotel: value.includes_hotel,
            is_remote: value.is_remote,
        }
    }
}
