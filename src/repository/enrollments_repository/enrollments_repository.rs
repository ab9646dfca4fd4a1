use super::Enrollment;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentsRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<Option<Enrollment>, repository::Error>;
}
