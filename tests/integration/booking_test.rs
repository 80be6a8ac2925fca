//! Integration tests for facility bookings.

use http::StatusCode;

use crate::helpers;

async fn book(
    app: &helpers::TestApp,
    token: &str,
    facility: &str,
) -> String {
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "facility": facility,
                "date": "2026-09-15",
                "from_time": "18:00",
                "to_time": "20:00",
            })),
            Some(token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["status"], "pending");
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_and_list_own_bookings() {
    let app = helpers::TestApp::new().await;
    let (user_id, token) = app.resident("booker").await;

    let booking_id = book(&app, &token, "Clubhouse").await;

    let response = app.request("GET", "/api/bookings", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let bookings = response.data().as_array().unwrap();
    let mine = bookings
        .iter()
        .find(|b| b["id"] == booking_id.as_str())
        .expect("Created booking not in own list");
    assert_eq!(mine["user_id"], user_id.to_string());
    assert_eq!(mine["facility"], "Clubhouse");
}

#[tokio::test]
async fn test_own_list_excludes_other_users() {
    let app = helpers::TestApp::new().await;
    let (_, token_a) = app.resident("booker-a").await;
    let (_, token_b) = app.resident("booker-b").await;

    let booking_a = book(&app, &token_a, "Tennis Court").await;

    let response = app
        .request("GET", "/api/bookings", None, Some(&token_b))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .data()
            .as_array()
            .unwrap()
            .iter()
            .all(|b| b["id"] != booking_a.as_str())
    );
}

#[tokio::test]
async fn test_admin_list_all_requires_admin() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("nosy").await;

    let response = app
        .request("GET", "/api/bookings/all", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_approve_and_filter() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("approvee").await;
    let (_, admin_token) = app.admin("approver").await;

    let booking_id = book(&app, &resident_token, "Banquet Hall").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/bookings/{booking_id}/status"),
            Some(serde_json::json!({ "status": "approved" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "approved");

    let response = app
        .request(
            "GET",
            "/api/bookings/all?status=approved",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.data().as_array().unwrap();
    assert!(list.iter().any(|b| b["id"] == booking_id.as_str()));
    assert!(list.iter().all(|b| b["status"] == "approved"));
}

#[tokio::test]
async fn test_resident_cannot_set_status() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("selfserve").await;
    let booking_id = book(&app, &token, "Gym").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/bookings/{booking_id}/status"),
            Some(serde_json::json!({ "status": "approved" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cancel_pending_booking() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("canceller").await;
    let booking_id = book(&app, &token, "Pool Deck").await;

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "cancelled");
}

#[tokio::test]
async fn test_cannot_cancel_rejected_booking() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("rejectee").await;
    let (_, admin_token) = app.admin("rejecter").await;
    let booking_id = book(&app, &resident_token, "Clubhouse").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/bookings/{booking_id}/status"),
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&resident_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_deletes_booking_record() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("deletee").await;
    let (_, admin_token) = app.admin("deleter").await;
    let booking_id = book(&app, &resident_token, "Gym").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&resident_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // The record is gone, not just cancelled.
    let response = app
        .request("GET", "/api/bookings", None, Some(&resident_token))
        .await;
    assert!(
        response
            .data()
            .as_array()
            .unwrap()
            .iter()
            .all(|b| b["id"] != booking_id.as_str())
    );

    let response = app
        .request(
            "DELETE",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cannot_cancel_other_users_booking() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("owner").await;
    let (_, other_token) = app.resident("other").await;
    let booking_id = book(&app, &owner_token, "Tennis Court").await;

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
