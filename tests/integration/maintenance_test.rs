//! Integration tests for maintenance requests and complaints.

use http::StatusCode;

use crate::helpers;

async fn file_request(app: &helpers::TestApp, token: &str, request_type: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/maintenance",
            Some(serde_json::json!({
                "title": "Leaking tap",
                "description": "Kitchen tap drips constantly",
                "request_type": request_type,
                "category": "plumbing",
                "priority": "medium",
                "location": "B-204",
            })),
            Some(token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["status"], "pending");
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_file_and_list_own_requests() {
    let app = helpers::TestApp::new().await;
    let (user_id, token) = app.resident("filer").await;

    let request_id = file_request(&app, &token, "maintenance").await;

    let response = app
        .request("GET", "/api/maintenance", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let mine = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == request_id.as_str())
        .expect("Filed request missing from own list")
        .clone();
    assert_eq!(mine["user_id"], user_id.to_string());
}

#[tokio::test]
async fn test_get_respects_ownership() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.resident("req-owner").await;
    let (_, other_token) = app.resident("req-other").await;
    let (_, admin_token) = app.admin("req-admin").await;
    let request_id = file_request(&app, &owner_token, "complaint").await;

    let path = format!("/api/maintenance/{request_id}");

    let response = app.request("GET", &path, None, Some(&owner_token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&admin_token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&other_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_progresses_request_to_resolved() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("progress-filer").await;
    let (admin_id, admin_token) = app.admin("progress-admin").await;
    let request_id = file_request(&app, &resident_token, "maintenance").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/maintenance/{request_id}/status"),
            Some(serde_json::json!({
                "status": "in_progress",
                "assigned_to": admin_id.to_string(),
                "admin_comments": "Plumber scheduled",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "in_progress");
    assert!(response.data()["resolved_at"].is_null());

    let response = app
        .request(
            "PATCH",
            &format!("/api/maintenance/{request_id}/status"),
            Some(serde_json::json!({ "status": "resolved" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "resolved");
    // Resolution timestamp is stamped exactly once, at the transition.
    assert!(response.data()["resolved_at"].is_string());
}

#[tokio::test]
async fn test_invalid_transition_rejected() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("badmove-filer").await;
    let (_, admin_token) = app.admin("badmove-admin").await;
    let request_id = file_request(&app, &resident_token, "maintenance").await;

    // Straight to resolved is allowed, but reopening is not.
    let response = app
        .request(
            "PATCH",
            &format!("/api/maintenance/{request_id}/status"),
            Some(serde_json::json!({ "status": "resolved" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PATCH",
            &format!("/api/maintenance/{request_id}/status"),
            Some(serde_json::json!({ "status": "in_progress" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_owner_cancels_pending_request() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.resident("cancel-filer").await;
    let request_id = file_request(&app, &token, "complaint").await;

    let response = app
        .request(
            "POST",
            &format!("/api/maintenance/{request_id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "cancelled");

    // A cancelled request cannot be cancelled again.
    let response = app
        .request(
            "POST",
            &format!("/api/maintenance/{request_id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_list_filters() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("filter-filer").await;
    let (_, admin_token) = app.admin("filter-admin").await;

    let maintenance_id = file_request(&app, &resident_token, "maintenance").await;
    let complaint_id = file_request(&app, &resident_token, "complaint").await;

    let response = app
        .request(
            "GET",
            "/api/maintenance/all?type=complaint&status=pending",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let list = response.data().as_array().unwrap();
    assert!(list.iter().any(|r| r["id"] == complaint_id.as_str()));
    assert!(list.iter().all(|r| r["id"] != maintenance_id.as_str()));
}

#[tokio::test]
async fn test_admin_list_date_range() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("range-filer").await;
    let (_, admin_token) = app.admin("range-admin").await;

    let request_id = file_request(&app, &resident_token, "maintenance").await;
    let today = chrono::Utc::now().date_naive();

    let response = app
        .request(
            "GET",
            &format!("/api/maintenance/all?start_date={today}&end_date={today}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(
        response
            .data()
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["id"] == request_id.as_str())
    );

    let tomorrow = today + chrono::Days::new(1);
    let response = app
        .request(
            "GET",
            &format!("/api/maintenance/all?start_date={tomorrow}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .data()
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["id"] != request_id.as_str())
    );
}

#[tokio::test]
async fn test_monthly_report() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("report-filer").await;
    let (_, admin_token) = app.admin("report-admin").await;

    let request_id = file_request(&app, &resident_token, "maintenance").await;
    app.request(
        "PATCH",
        &format!("/api/maintenance/{request_id}/status"),
        Some(serde_json::json!({ "status": "resolved" })),
        Some(&admin_token),
    )
    .await;

    let now = chrono::Utc::now();
    let response = app
        .request(
            "GET",
            &format!(
                "/api/reports/maintenance/monthly?year={}&month={}",
                now.format("%Y"),
                now.format("%-m"),
            ),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let row = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|r| {
            r["request_type"] == "maintenance"
                && r["category"] == "plumbing"
                && r["status"] == "resolved"
        })
        .expect("Resolved plumbing row missing from report")
        .clone();
    assert!(row["count"].as_i64().unwrap() >= 1);
    assert!(row["avg_resolution_hours"].as_f64().is_some());
}

#[tokio::test]
async fn test_report_requires_admin_and_valid_month() {
    let app = helpers::TestApp::new().await;
    let (_, resident_token) = app.resident("report-resident").await;
    let (_, admin_token) = app.admin("report-validator").await;

    let response = app
        .request(
            "GET",
            "/api/reports/maintenance/monthly?year=2026&month=3",
            None,
            Some(&resident_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "GET",
            "/api/reports/maintenance/monthly?year=2026&month=13",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
