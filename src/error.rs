use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("booking not exist")]
    BookingNotExist,

    #[error("room not exist")]
    RoomNotExist,

    #[error("user is not enrolled")]
    EnrollmentNotExist,

    #[error("user does not have a ticket")]
    TicketNotExist,

    #[error("ticket not paid")]
    TicketNotPaid,

    #[error("ticket does not include hotel")]
    TicketWithoutHotel,

    #[error("room capacity full")]
    RoomFull,

    #[error("user already has a booking")]
    BookingAlreadyExists,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

///
/// Category of [Error] deciding how it's presented to the client
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    /// Business rule violation
    Forbidden,
    Conflict,
    Validation,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BookingNotExist | Error::RoomNotExist => ErrorKind::NotFound,
            Error::EnrollmentNotExist
            | Error::TicketNotExist
            | Error::TicketNotPaid
            | Error::TicketWithoutHotel
            | Error::RoomFull => ErrorKind::Forbidden,
            Error::BookingAlreadyExists => ErrorKind::Conflict,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Database(_) => ErrorKind::Internal,
        }
    }
}

impl From<ErrorKind> for StatusCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            ErrorKind::Internal => tracing::error!(err = %self),
            _ => tracing::warn!(err = %self),
        }

        StatusCode::from(kind).into_response()
    }
}
