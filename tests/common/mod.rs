#![allow(dead_code)]

use bson::{doc, oid::ObjectId, Document};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use mongodb::{Client, Database};
use serde_json::json;
use std::{str::FromStr, sync::Once};
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("HOTEL_BOOKING_BIND_ADDRESS").unwrap()
}

pub fn booking_url() -> String {
    format!("http://{}/booking", address())
}

pub fn create_jwt(user_id: Uuid) -> String {
    let jwt_algorithms = std::env::var("HOTEL_BOOKING_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("HOTEL_BOOKING_JWT_TEST_ENCODE_KEY").unwrap();

    let algorithm = jwt_algorithms.split(',').next().unwrap().trim();
    let algorithm = Algorithm::from_str(algorithm).unwrap();
    let key = match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            EncodingKey::from_secret(jwt_key.as_bytes())
        }
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(jwt_key.as_bytes()).unwrap(),
        Algorithm::EdDSA => EncodingKey::from_ed_pem(jwt_key.as_bytes()).unwrap(),
        _ => EncodingKey::from_rsa_pem(jwt_key.as_bytes()).unwrap(),
    };

    let claims = json!({
        "sub": user_id,
        "exp": 253402210800_i64,
    });

    jsonwebtoken::encode(&Header::new(algorithm), &claims, &key).unwrap()
}

pub async fn database() -> Database {
    let connection_string = std::env::var("HOTEL_BOOKING_DB_CONNECTION_STRING").unwrap();
    let db_name = std::env::var("HOTEL_BOOKING_DB_NAME").unwrap();

    let client = Client::with_uri_str(connection_string).await.unwrap();

    client.database(&db_name)
}

pub async fn insert_room(db: &Database, capacity: i32) -> ObjectId {
    let id = ObjectId::new();
    db.collection::<Document>("rooms")
        .insert_one(doc! {
            "_id": id,
            "name": "test room",
            "capacity": capacity,
            "hotel_id": ObjectId::new(),
        })
        .await
        .unwrap();

    id
}

///
/// Creates enrolled user with a ticket
///
pub async fn insert_user_with_ticket(
    db: &Database,
    status: &str,
    includes_hotel: bool,
    is_remote: bool,
) -> Uuid {
    let user_id = Uuid::new_v4();
    let enrollment_id = ObjectId::new();

    db.collection::<Document>("enrollments")
        .insert_one(doc! {
            "_id": enrollment_id,
            "user_id": bson::Uuid::from(user_id),
        })
        .await
        .unwrap();

    db.collection::<Document>("tickets")
        .insert_one(doc! {
            "enrollment_id": enrollment_id,
            "status": status,
            "ticket_type": {
                "name": "test ticket type",
                "includes_hotel": includes_hotel,
                "is_remote": is_remote,
            },
        })
        .await
        .unwrap();

    user_id
}

pub async fn insert_user_with_paid_hotel_ticket(db: &Database) -> Uuid {
    insert_user_with_ticket(db, "PAID", true, false).await
}
