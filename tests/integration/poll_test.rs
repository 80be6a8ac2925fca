//! Integration tests for notice polls and voting.

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::Value;

use crate::helpers;

struct PollFixture {
    poll_id: String,
    option_ids: Vec<String>,
}

async fn create_poll(app: &helpers::TestApp, admin_token: &str, hours_from_now: i64) -> PollFixture {
    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({ "title": "Poll notice" })),
            Some(admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let notice_id = response.data()["id"].as_str().unwrap().to_string();

    let end_date = Utc::now() + Duration::hours(hours_from_now);
    let response = app
        .request(
            "POST",
            &format!("/api/notices/{notice_id}/poll"),
            Some(serde_json::json!({
                "question": "Repaint the lobby?",
                "end_date": end_date.to_rfc3339(),
                "options": ["Yes", "No"],
            })),
            Some(admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let data = response.data();
    PollFixture {
        poll_id: data["id"].as_str().unwrap().to_string(),
        option_ids: data["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_str().unwrap().to_string())
            .collect(),
    }
}

fn votes_for<'a>(data: &'a Value, option_id: &str) -> &'a Vec<Value> {
    data["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == option_id)
        .expect("Option missing from poll view")["votes"]
        .as_array()
        .unwrap()
}

#[tokio::test]
async fn test_resident_cannot_create_poll() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("poll-admin").await;
    let (_, resident_token) = app.resident("poll-resident").await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({ "title": "No poll here" })),
            Some(&admin_token),
        )
        .await;
    let notice_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/notices/{notice_id}/poll"),
            Some(serde_json::json!({
                "question": "Can I?",
                "end_date": (Utc::now() + Duration::hours(1)).to_rfc3339(),
                "options": ["Yes", "No"],
            })),
            Some(&resident_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_poll_needs_two_options() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("one-option").await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({ "title": "Degenerate poll" })),
            Some(&admin_token),
        )
        .await;
    let notice_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/notices/{notice_id}/poll"),
            Some(serde_json::json!({
                "question": "Agree?",
                "end_date": (Utc::now() + Duration::hours(1)).to_rfc3339(),
                "options": ["Yes"],
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_second_poll_on_notice_conflicts() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("double-poll").await;

    let fixture = create_poll(&app, &admin_token, 24).await;

    let notice_id: String = sqlx::query_scalar("SELECT notice_id::text FROM polls WHERE id = $1::uuid")
        .bind(&fixture.poll_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Poll row missing");

    let response = app
        .request(
            "POST",
            &format!("/api/notices/{notice_id}/poll"),
            Some(serde_json::json!({
                "question": "Again?",
                "end_date": (Utc::now() + Duration::hours(1)).to_rfc3339(),
                "options": ["Yes", "No"],
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_vote_once_then_conflict() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("vote-admin").await;
    let (voter_id, voter_token) = app.resident("voter").await;
    let fixture = create_poll(&app, &admin_token, 24).await;

    let response = app
        .request(
            "POST",
            &format!("/api/polls/{}/vote", fixture.poll_id),
            Some(serde_json::json!({ "option_id": fixture.option_ids[0] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(
        votes_for(response.data(), &fixture.option_ids[0])
            .contains(&Value::String(voter_id.to_string()))
    );

    // A second first-vote is rejected, even for a different option.
    let response = app
        .request(
            "POST",
            &format!("/api/polls/{}/vote", fixture.poll_id),
            Some(serde_json::json!({ "option_id": fixture.option_ids[1] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_change_vote_moves_single_vote() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("change-admin").await;
    let (voter_id, voter_token) = app.resident("changer").await;
    let fixture = create_poll(&app, &admin_token, 24).await;

    app.request(
        "POST",
        &format!("/api/polls/{}/vote", fixture.poll_id),
        Some(serde_json::json!({ "option_id": fixture.option_ids[0] })),
        Some(&voter_token),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/polls/{}/vote", fixture.poll_id),
            Some(serde_json::json!({ "option_id": fixture.option_ids[1] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let voter = Value::String(voter_id.to_string());
    assert!(!votes_for(response.data(), &fixture.option_ids[0]).contains(&voter));
    assert!(votes_for(response.data(), &fixture.option_ids[1]).contains(&voter));
}

#[tokio::test]
async fn test_change_vote_works_as_first_vote() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("upsert-admin").await;
    let (voter_id, voter_token) = app.resident("upserter").await;
    let fixture = create_poll(&app, &admin_token, 24).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/polls/{}/vote", fixture.poll_id),
            Some(serde_json::json!({ "option_id": fixture.option_ids[0] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        votes_for(response.data(), &fixture.option_ids[0])
            .contains(&Value::String(voter_id.to_string()))
    );
}

#[tokio::test]
async fn test_vote_on_closed_poll() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("closed-admin").await;
    let (_, voter_token) = app.resident("late-voter").await;
    let fixture = create_poll(&app, &admin_token, 24).await;

    // Close the poll by moving its end date into the past.
    sqlx::query("UPDATE polls SET end_date = NOW() - INTERVAL '1 hour' WHERE id = $1::uuid")
        .bind(&fixture.poll_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to close poll");

    let response = app
        .request(
            "POST",
            &format!("/api/polls/{}/vote", fixture.poll_id),
            Some(serde_json::json!({ "option_id": fixture.option_ids[0] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Poll has closed");
}

#[tokio::test]
async fn test_vote_with_foreign_option() {
    let app = helpers::TestApp::new().await;
    let (_, admin_token) = app.admin("foreign-admin").await;
    let (_, voter_token) = app.resident("foreign-voter").await;
    let fixture_a = create_poll(&app, &admin_token, 24).await;
    let fixture_b = create_poll(&app, &admin_token, 24).await;

    let response = app
        .request(
            "POST",
            &format!("/api/polls/{}/vote", fixture_a.poll_id),
            Some(serde_json::json!({ "option_id": fixture_b.option_ids[0] })),
            Some(&voter_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
