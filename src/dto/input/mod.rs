mod booking_room;

pub use booking_room::*;
