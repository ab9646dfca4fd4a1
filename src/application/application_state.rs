use super::ApplicationEnv;
use crate::{
    repository::{
        BookingsRepositoryImpl, EnrollmentsRepositoryImpl, RoomsRepositoryImpl,
        TicketsRepositoryImpl,
    },
    service::bookings_service::{BookingsService, BookingsServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub bookings_service: Arc<dyn BookingsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let bookings_repository = BookingsRepositoryImpl::new(db.clone()).await?;
    let bookings_repository = Arc::new(bookings_repository);
    let rooms_repository = Arc::new(RoomsRepositoryImpl::new(db.clone()));
    let enrollments_repository = Arc::new(EnrollmentsRepositoryImpl::new(db.clone()));
    let tickets_repository = Arc::new(TicketsRepositoryImpl::new(db));

    tracing::info!("creating services");
    let bookings_service = BookingsServiceImpl::new(
        bookings_repository,
        rooms_repository,
        enrollments_repository,
        tickets_repository,
    );
    let bookings_service = Arc::new(bookings_service);

    Ok((
        ApplicationState { bookings_service },
        ApplicationStateToClose { db_client },
    ))
}
