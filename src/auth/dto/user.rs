use uuid::Uuid;

///
/// Authenticated user, retrieved from the JWT
/// and stored in request extensions.
///
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
