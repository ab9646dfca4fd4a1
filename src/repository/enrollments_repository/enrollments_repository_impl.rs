use super::{entity::EnrollmentFindEntity, Enrollment, EnrollmentsRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use mongodb::Database;
use uuid::Uuid;

const ENROLLMENTS: &str = "enrollments";

pub struct EnrollmentsRepositoryImpl {
    database: Database,
}

impl EnrollmentsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl EnrollmentsRepository for EnrollmentsRepositoryImpl {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Enrollment>, repository::Error> {
        let enrollment = self
            .database
            .collection::<EnrollmentFindEntity>(ENROLLMENTS)
            .find_one(doc! {
                "user_id": bson::Uuid::from(user_id),
            })
            .await?
            .map(Enrollment::from);

        Ok(enrollment)
    }
}
