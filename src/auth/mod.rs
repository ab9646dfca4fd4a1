mod dto;
mod middleware;
pub mod util;

pub use dto::User;
pub use middleware::JwtAuthLayer;
