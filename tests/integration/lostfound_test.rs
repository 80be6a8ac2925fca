//! Integration tests for the lost-and-found board.

use http::StatusCode;

use crate::helpers;

// Smallest valid PNG header; enough for a content-type sniff test.
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

async fn post_item(app: &helpers::TestApp, token: &str, item_type: &str, title: &str) -> String {
    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", item_type),
                ("title", title),
                ("description", "Left near the gate"),
                ("location", "Main gate"),
                ("date", "2026-08-20"),
                ("contact", "call the lobby"),
            ],
            None,
            Some(token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_without_image() {
    let app = helpers::TestApp::new().await;
    let (user_id, token) = app.resident("finder").await;

    let item_id = post_item(&app, &token, "found", "Blue umbrella").await;

    let response = app
        .request("GET", &format!("/api/lostfound/{item_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["item_type"], "found");
    assert_eq!(response.data()["status"], "open");
    assert_eq!(response.data()["user_id"], user_id.to_string());
    assert!(response.data()["image_path"].is_null());
}

#[tokio::test]
async fn test_create_with_image() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("photographer").await;

    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "lost"),
                ("title", "Black wallet"),
                ("location", "Parking level 2"),
                ("date", "2026-08-21"),
                ("contact", "flat B-404"),
            ],
            Some(("image", "wallet.png", "image/png", PNG_BYTES)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let image_path = response.data()["image_path"].as_str().unwrap();
    assert!(image_path.starts_with("/uploads/lostfound/"));
    assert!(image_path.ends_with(".png"));
}

#[tokio::test]
async fn test_location_and_contact_are_required() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("terse-poster").await;

    // No contact.
    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "lost"),
                ("title", "Scarf"),
                ("location", "Garden"),
                ("date", "2026-08-22"),
            ],
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // No location.
    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "lost"),
                ("title", "Scarf"),
                ("date", "2026-08-22"),
                ("contact", "flat A-303"),
            ],
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejects_non_image_upload() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("uploader").await;

    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "lost"),
                ("title", "Keys"),
                ("location", "Lift lobby"),
                ("date", "2026-08-21"),
                ("contact", "flat C-101"),
            ],
            Some(("image", "notes.txt", "text/plain", b"not an image")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filter_by_type() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("lister").await;

    let lost_id = post_item(&app, &token, "lost", "Lost cat").await;
    let found_id = post_item(&app, &token, "found", "Found dog").await;

    let response = app
        .request("GET", "/api/lostfound?type=lost", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.data().as_array().unwrap();
    assert!(list.iter().any(|i| i["id"] == lost_id.as_str()));
    assert!(list.iter().all(|i| i["id"] != found_id.as_str()));
    assert!(list.iter().all(|i| i["item_type"] == "lost"));
}

#[tokio::test]
async fn test_owner_resolves_item() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("resolver").await;
    let item_id = post_item(&app, &token, "lost", "Headphones").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/lostfound/{item_id}/resolve"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "resolved");

    // Resolving again is a no-go; resolved is terminal.
    let response = app
        .request(
            "PATCH",
            &format!("/api/lostfound/{item_id}/resolve"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_stranger_cannot_resolve_or_delete() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("item-owner").await;
    let (_, stranger_token) = app.resident("stranger").await;
    let item_id = post_item(&app, &owner_token, "found", "Sunglasses").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/lostfound/{item_id}/resolve"),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_cannot_delete_own_item() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("attached-owner").await;
    let item_id = post_item(&app, &owner_token, "lost", "Bicycle").await;

    // Deletion is a moderation action; owners mark items resolved instead.
    let response = app
        .request(
            "DELETE",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", &format!("/api/lostfound/{item_id}"), None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_survives_missing_image_file() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("vanished").await;
    let (_, admin_token) = app.admin("janitor").await;

    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "found"),
                ("title", "Gloves"),
                ("location", "Gym"),
                ("date", "2026-08-23"),
                ("contact", "flat E-505"),
            ],
            Some(("image", "gloves.png", "image/png", PNG_BYTES)),
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let item_id = response.data()["id"].as_str().unwrap().to_string();
    let image_path = response.data()["image_path"].as_str().unwrap().to_string();

    // Pull the stored file out from under the server.
    let relative = image_path.strip_prefix("/uploads/").unwrap();
    let on_disk = std::path::Path::new(&app.config.storage.upload_root).join(relative);
    assert!(on_disk.exists(), "stored image missing at {on_disk:?}");
    std::fs::remove_file(&on_disk).expect("Failed to remove stored image");

    // Metadata deletion is authoritative; the lost file does not block it.
    let response = app
        .request(
            "DELETE",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request(
            "GET",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_can_delete_any_item() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("moderated").await;
    let (_, admin_token) = app.admin("moderator").await;
    let item_id = post_item(&app, &owner_token, "lost", "Spam post").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/lostfound/{item_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
