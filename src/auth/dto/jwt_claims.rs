use serde::Deserialize;
use uuid::Uuid;

///
/// Claims required from every token.
/// `exp` is checked by [jsonwebtoken] during decoding.
///
#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
}
