mod room_find_entity;

pub use room_find_entity::*;
