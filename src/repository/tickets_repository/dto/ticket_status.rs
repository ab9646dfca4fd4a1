use strum::{AsRefStr, EnumString};

///
/// Payment state of a ticket, stored as its uppercase name
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}
