use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output},
    error::Error,
    service::bookings_service::BookingsService,
};
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/booking", get(get_booking).post(create_booking))
        .route("/booking/:booking_id", put(change_booking))
        .route_layer(application_middleware.auth.clone())
}

async fn get_booking(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::Booking>, Error> {
    let booking = bookings_service.get_booking(user.id).await?;

    Ok(Json(booking))
}

async fn create_booking(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Json(booking_room): Json<input::BookingRoom>,
) -> Result<Json<output::BookingId>, Error> {
    let booking = bookings_service
        .create_booking(user.id, booking_room)
        .await?;

    Ok(Json(booking.into()))
}

async fn change_booking(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Path(booking_id): Path<String>,
    Json(booking_room): Json<input::BookingRoom>,
) -> Result<Json<output::BookingId>, Error> {
    let booking_id = ObjectId::parse_str(booking_id)
        .map_err(|_| Error::Validation("invalid booking id"))?;

    let booking = bookings_service
        .change_booking(user.id, booking_id, booking_room)
        .await?;

    Ok(Json(booking.into()))
}
