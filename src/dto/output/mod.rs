mod booking;
mod booking_id;

pub use booking::*;
pub use booking_id::*;
