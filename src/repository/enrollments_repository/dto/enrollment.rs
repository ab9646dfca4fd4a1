use crate::repository::enrollments_repository::entity::EnrollmentFindEntity;
use bson::oid::ObjectId;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: ObjectId,
    pub user_id: Uuid,
}

impl From<EnrollmentFindEntity> for Enrollment {
    fn from(value: EnrollmentFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id.into(),
        }
    }
}
