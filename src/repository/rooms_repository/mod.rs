mod dto;
mod entity;
mod rooms_repository;
mod rooms_repository_impl;

pub use dto::Room;
pub use rooms_repository::*;
pub use rooms_repository_impl::*;
