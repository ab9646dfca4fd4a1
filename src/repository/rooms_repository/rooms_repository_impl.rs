use super::{entity::RoomFindEntity, Room, RoomsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::Database;

const ROOMS: &str = "rooms";

///
/// Read-only access to rooms managed by the hotel module
///
pub struct RoomsRepositoryImpl {
    database: Database,
}

impl RoomsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl RoomsRepository for RoomsRepositoryImpl {
    async fn find(&self, id: ObjectId) -> Result<Option<Room>, repository::Error> {
        let room = self
            .database
            .collection::<RoomFindEntity>(ROOMS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Room::from);

        Ok(room)
    }
}
