use super::Room;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsRepository: Send + Sync {
    async fn find(&self, id: ObjectId) -> Result<Option<Room>, repository::Error>;
}
