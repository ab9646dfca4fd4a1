use super::{
    entity::{BookingFindEntity, BookingInsertEntity},
    Booking, BookingsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::{
    error::ErrorKind,
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const BOOKINGS: &str = "bookings";
const INDEX_NAME_UNIQUE_USER_ID: &str = "unique_booking_user_id";
const INDEX_NAME_ROOM_ID: &str = "index_booking_room_id";

pub struct BookingsRepositoryImpl {
    database: Database,
}

impl BookingsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = BOOKINGS, "creating collection");
        database.create_collection(BOOKINGS).await?;

        let collection = database.collection::<Document>(BOOKINGS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_USER_ID.to_string()) {
            Self::create_index(&collection, INDEX_NAME_UNIQUE_USER_ID, "user_id", true).await?;
        }
        if !index_names.contains(&INDEX_NAME_ROOM_ID.to_string()) {
            Self::create_index(&collection, INDEX_NAME_ROOM_ID, "room_id", false).await?;
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &'static str,
        key: &'static str,
        unique: bool,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! { key: 1 })
            .options(
                IndexOptions::builder()
                    .name(name.to_string())
                    .unique(unique)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;
        tracing::debug!(collection = BOOKINGS, index = name, "created index");

        Ok(())
    }
}

#[async_trait]
impl BookingsRepository for BookingsRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        room_id: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = BookingInsertEntity {
            user_id: user_id.into(),
            room_id,
            created_at,
            updated_at: created_at,
        };

        let insert_result = self
            .database
            .collection::<BookingInsertEntity>(BOOKINGS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert_error)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(Booking::from(BookingFindEntity {
            _id: id,
            user_id: insert_entity.user_id,
            room_id: insert_entity.room_id,
            created_at: insert_entity.created_at,
            updated_at: insert_entity.updated_at,
        }))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Booking>, repository::Error> {
        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one(doc! {
                "user_id": bson::Uuid::from(user_id),
            })
            .await?
            .map(Booking::from);

        Ok(booking)
    }

    async fn count_by_room_id(&self, room_id: ObjectId) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(BOOKINGS)
            .count_documents(doc! {
                "room_id": room_id,
            })
            .await?;

        Ok(count)
    }

    async fn update_room_id(
        &self,
        id: ObjectId,
        room_id: ObjectId,
        updated_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "room_id": room_id,
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .with_options(options)
            .await?
            .ok_or(Error::NoDocumentUpdated)?;

        Ok(booking.into())
    }
}
