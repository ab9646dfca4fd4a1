use super::{entity::TicketFindEntity, Ticket, TicketsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::Database;

const TICKETS: &str = "tickets";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: ObjectId,
    ) -> Result<Option<Ticket>, repository::Error> {
        self.database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "enrollment_id": enrollment_id,
            })
            .await?
            .map(Ticket::try_from)
            .transpose()
    }
}
