//! Integration tests for the resident directory.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_directory_visible_to_residents() {
    let app = helpers::TestApp::new().await;
    let (resident_id, resident_token) = app.resident("dir-resident").await;
    let (admin_id, _) = app.admin("dir-admin").await;

    let response = app.request("GET", "/api/residents", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/residents", None, Some(&resident_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.data().as_array().unwrap();
    assert!(list.iter().any(|u| u["id"] == resident_id.to_string()));
    // The directory lists residents only, and never carries credentials.
    assert!(list.iter().all(|u| u["id"] != admin_id.to_string()));
    assert!(list.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_any_resident_can_view_profiles() {
    let app = helpers::TestApp::new().await;
    let (owner_id, owner_token) = app.resident("profile-owner").await;
    let (_, other_token) = app.resident("profile-other").await;

    let path = format!("/api/residents/{owner_id}");

    let response = app.request("GET", &path, None, Some(&owner_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], owner_id.to_string());

    // Directory entries are readable by any authenticated user.
    let response = app.request("GET", &path, None, Some(&other_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("password_hash").is_none());

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = helpers::TestApp::new().await;
    let (id, token) = app.resident("updater").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/residents/{id}"),
            Some(serde_json::json!({
                "name": "Renamed Resident",
                "block": "C",
                "flat": "702",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["name"], "Renamed Resident");
    assert_eq!(response.data()["block"], "C");
    assert_eq!(response.data()["flat"], "702");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = helpers::TestApp::new().await;
    let (id, token) = app.resident("partial").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/residents/{id}"),
            Some(serde_json::json!({ "flat": "909" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["flat"], "909");
    // Untouched fields are preserved, not blanked.
    assert_eq!(response.data()["name"], "partial");
    assert_eq!(response.data()["block"], "A");
}

#[tokio::test]
async fn test_cannot_update_other_profile() {
    let app = helpers::TestApp::new().await;
    let (target_id, _) = app.resident("update-target").await;
    let (_, other_token) = app.resident("update-other").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/residents/{target_id}"),
            Some(serde_json::json!({ "name": "Hijacked" })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_update_any_profile() {
    let app = helpers::TestApp::new().await;
    let (target_id, _) = app.resident("admin-target").await;
    let (_, admin_token) = app.admin("admin-updater").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/residents/{target_id}"),
            Some(serde_json::json!({ "block": "F" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["block"], "F");
}
