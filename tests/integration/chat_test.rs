//! Integration tests for per-item lost-and-found chats.

use http::StatusCode;

use crate::helpers;

async fn post_item(app: &helpers::TestApp, token: &str) -> String {
    let response = app
        .request_multipart(
            "/api/lostfound",
            &[
                ("type", "found"),
                ("title", "Found a watch"),
                ("location", "Clubhouse"),
                ("date", "2026-08-25"),
                ("contact", "flat D-102"),
            ],
            None,
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_contact_creates_chat_with_both_participants() {
    let app = helpers::TestApp::new().await;
    let (owner_id, owner_token) = app.resident("watch-owner").await;
    let (claimant_id, claimant_token) = app.resident("claimant").await;
    let item_id = post_item(&app, &owner_token).await;

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&claimant_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let participants = response.data()["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 2);
    for id in [owner_id, claimant_id] {
        assert!(participants.contains(&serde_json::json!(id.to_string())));
    }
}

#[tokio::test]
async fn test_owner_has_no_chat_until_contacted() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("lonely-owner").await;
    let (_, claimant_token) = app.resident("eventual-claimant").await;
    let item_id = post_item(&app, &owner_token).await;

    // Opening your own item's chat before anyone reached out finds nothing.
    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.request(
        "POST",
        &format!("/api/lostfound/{item_id}/chat"),
        None,
        Some(&claimant_token),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_third_party_locked_out() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("chat-owner").await;
    let (_, first_token) = app.resident("first-claimant").await;
    let (_, third_token) = app.resident("third-wheel").await;
    let item_id = post_item(&app, &owner_token).await;

    // First claimant fixes the participant pair.
    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&first_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let chat_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&third_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/chats/{chat_id}/messages"),
            Some(serde_json::json!({ "content": "let me in" })),
            Some(&third_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", &format!("/api/chats/{chat_id}"), None, Some(&third_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_message_exchange() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("msg-owner").await;
    let (claimant_id, claimant_token) = app.resident("msg-claimant").await;
    let item_id = post_item(&app, &owner_token).await;

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&claimant_token),
        )
        .await;
    let chat_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chats/{chat_id}/messages"),
            Some(serde_json::json!({ "content": "I think that's my watch" })),
            Some(&claimant_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["sender_id"], claimant_id.to_string());

    let response = app
        .request(
            "POST",
            &format!("/api/chats/{chat_id}/messages"),
            Some(serde_json::json!({ "content": "Describe the strap?" })),
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request("GET", &format!("/api/chats/{chat_id}"), None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let messages = response.data()["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    // Oldest first.
    assert_eq!(messages[0]["content"], "I think that's my watch");
    assert_eq!(messages[1]["content"], "Describe the strap?");
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("empty-owner").await;
    let (_, claimant_token) = app.resident("empty-claimant").await;
    let item_id = post_item(&app, &owner_token).await;

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&claimant_token),
        )
        .await;
    let chat_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chats/{chat_id}/messages"),
            Some(serde_json::json!({ "content": "" })),
            Some(&claimant_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_my_chats() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("list-owner").await;
    let (_, claimant_token) = app.resident("list-claimant").await;
    let item_id = post_item(&app, &owner_token).await;

    let response = app
        .request(
            "POST",
            &format!("/api/lostfound/{item_id}/chat"),
            None,
            Some(&claimant_token),
        )
        .await;
    let chat_id = response.data()["id"].as_str().unwrap().to_string();

    for token in [&owner_token, &claimant_token] {
        let response = app.request("GET", "/api/chats", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(
            response
                .data()
                .as_array()
                .unwrap()
                .iter()
                .any(|c| c["id"] == chat_id.as_str())
        );
    }
}
