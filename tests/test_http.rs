mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use serial_test::parallel;
use uuid::Uuid;

async fn post_booking(client: &Client, user_id: Uuid, room_id: ObjectId) -> reqwest::Response {
    client
        .post(booking_url())
        .bearer_auth(create_jwt(user_id))
        .json(&json!({ "roomId": room_id.to_hex() }))
        .send()
        .await
        .unwrap()
}

async fn put_booking(
    client: &Client,
    user_id: Uuid,
    booking_id: &str,
    room_id: ObjectId,
) -> reqwest::Response {
    client
        .put(format!("{}/{}", booking_url(), booking_id))
        .bearer_auth(create_jwt(user_id))
        .json(&json!({ "roomId": room_id.to_hex() }))
        .send()
        .await
        .unwrap()
}

async fn booking_id(response: reqwest::Response) -> String {
    let body = response.json::<Value>().await.unwrap();
    body.get("bookingId").unwrap().as_str().unwrap().to_string()
}

// GET

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn get_booking_user_without_booking() {
    init_env();

    let db = database().await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;

    let response = Client::new()
        .get(booking_url())
        .bearer_auth(create_jwt(user_id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn get_booking_after_creating_it() {
    init_env();

    // booking created with POST should be returned by GET

    let client = Client::new();
    let db = database().await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let room_id = insert_room(&db, 3).await;

    let response = post_booking(&client, user_id, room_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created_booking_id = booking_id(response).await;

    let response = client
        .get(booking_url())
        .bearer_auth(create_jwt(user_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["id"], Value::from(created_booking_id));
    assert_eq!(body["roomId"], Value::from(room_id.to_hex()));
    assert_eq!(body["userId"], Value::from(user_id.to_string()));
}

// POST

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_room_not_exist() {
    init_env();

    let db = database().await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;

    let response = post_booking(&Client::new(), user_id, ObjectId::new()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_ticket_not_paid() {
    init_env();

    let db = database().await;
    let user_id = insert_user_with_ticket(&db, "RESERVED", true, false).await;
    let room_id = insert_room(&db, 3).await;

    let response = post_booking(&Client::new(), user_id, room_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_remote_ticket() {
    init_env();

    let db = database().await;
    let user_id = insert_user_with_ticket(&db, "PAID", true, true).await;
    let room_id = insert_room(&db, 3).await;

    let response = post_booking(&Client::new(), user_id, room_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_user_not_enrolled() {
    init_env();

    let db = database().await;
    let room_id = insert_room(&db, 3).await;

    let response = post_booking(&Client::new(), Uuid::new_v4(), room_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_room_full() {
    init_env();

    // room with capacity 1 accepts only the first booking

    let client = Client::new();
    let db = database().await;
    let room_id = insert_room(&db, 1).await;
    let first_user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let second_user_id = insert_user_with_paid_hotel_ticket(&db).await;

    let response = post_booking(&client, first_user_id, room_id).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_booking(&client, second_user_id, room_id).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn post_booking_twice() {
    init_env();

    let client = Client::new();
    let db = database().await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let room_id = insert_room(&db, 3).await;

    let response = post_booking(&client, user_id, room_id).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_booking(&client, user_id, room_id).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// PUT

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn put_booking_user_without_booking() {
    init_env();

    let db = database().await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let room_id = insert_room(&db, 3).await;

    let response = put_booking(
        &Client::new(),
        user_id,
        &ObjectId::new().to_hex(),
        room_id,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn put_booking_room_full() {
    init_env();

    let client = Client::new();
    let db = database().await;
    let room_id = insert_room(&db, 2).await;
    let full_room_id = insert_room(&db, 1).await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let other_user_id = insert_user_with_paid_hotel_ticket(&db).await;

    let response = post_booking(&client, user_id, room_id).await;
    let user_booking_id = booking_id(response).await;
    let response = post_booking(&client, other_user_id, full_room_id).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_booking(&client, user_id, &user_booking_id, full_room_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running application"]
async fn put_booking_frees_previous_room() {
    init_env();

    // after changing rooms the previous room can be booked by someone else

    let client = Client::new();
    let db = database().await;
    let first_room_id = insert_room(&db, 1).await;
    let second_room_id = insert_room(&db, 1).await;
    let user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let other_user_id = insert_user_with_paid_hotel_ticket(&db).await;

    let response = post_booking(&client, user_id, first_room_id).await;
    let user_booking_id = booking_id(response).await;

    let response = put_booking(&client, user_id, &user_booking_id, second_room_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(booking_id(response).await, user_booking_id);

    let response = post_booking(&client, other_user_id, first_room_id).await;
    assert_eq!(response.status(), StatusCode::OK);

    let third_user_id = insert_user_with_paid_hotel_ticket(&db).await;
    let response = post_booking(&client, third_user_id, second_room_id).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
