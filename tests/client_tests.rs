//! Integration tests for the PagerTree API client.
//!
//! A wiremock server stands in for the PagerTree API.

use pagertree_cli::actions::utils::{fetch_account_users, MemberRole};
use pagertree_cli::configuration::Configuration;
use pagertree_cli::error_utils::classify_error;
use pagertree_cli::exit_codes::PagertreeExitCode;
use pagertree_cli::fields::FieldMap;
use pagertree_cli::format::{DetailView, ListView};
use pagertree_cli::model::{AlertCreateRequest, ListQuery};
use pagertree_cli::pagertree::{ApiError, PagerTreeClient};
use pagertree_cli::resolution_utils::resolve_alert_id;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PagerTreeClient {
    let configuration = Configuration::new("test-key", server.uri()).unwrap();
    PagerTreeClient::new(&configuration).unwrap()
}

/// Base URL of a local port that nothing listens on
fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

fn account_user(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "user": {
            "name": name,
            "emails": [{"email": format!("{id}@example.com"), "primary": true}],
            "phones": []
        }
    })
}

#[tokio::test]
async fn test_create_then_show_round_trip() {
    let mock_server = MockServer::start().await;
    let alert = json!({
        "id": "01ABC",
        "title": "Disk full",
        "status": "open",
        "urgency": "medium"
    });

    Mock::given(method("POST"))
        .and(path("/alerts"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(json!({"title": "Disk full", "urgency": "medium"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(alert.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alerts/01ABC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alert))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .create_alert(&AlertCreateRequest::new("Disk full"))
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let shown = client.show_alert(id).await.unwrap();
    let view = DetailView::new(
        &FieldMap::new()
            .field("title", "Title")
            .field("description", "Description"),
        &shown,
    );
    assert_eq!(view.rows[0].value, "Disk full");
    assert_eq!(view.rows[1].value, "N/A");
}

#[tokio::test]
async fn test_list_reports_next_page() {
    let mock_server = MockServer::start().await;
    let items: Vec<Value> = (1..=10)
        .map(|n| json!({"tiny_id": n, "title": format!("Alert {n}"), "status": "open"}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": items,
            "total_count": 25,
            "has_more": true
        })))
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .list_alerts(&ListQuery::page(10, 0))
        .await
        .unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page.total, 25);
    assert!(page.has_more);
    assert_eq!(page.next_offset(), Some(10));

    let columns = FieldMap::new().field("tiny_id", "ID").field("title", "Title");
    let view = ListView {
        page: &page,
        columns: &columns,
        kind: "alert",
    };
    assert_eq!(view.summary(), "Showing 10 of 25 alerts (offset: 0, limit: 10)");
    assert_eq!(
        view.next_page_hint().as_deref(),
        Some("More alerts available. Use --offset 10 to see next page.")
    );
}

#[tokio::test]
async fn test_list_tolerates_missing_envelope_keys() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broadcasts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .list_broadcasts(&ListQuery::default())
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_member_lookup_skips_failed_users() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account_users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_user("u1", "Ada")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account_users/u2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["not found"]})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account_users/u3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_user("u3", "Grace")))
        .mount(&mock_server)
        .await;

    let ids = vec!["u1".to_string(), "u2".to_string(), "u3".to_string()];
    let lookup = fetch_account_users(&client_for(&mock_server), &ids, MemberRole::Member).await;

    let names: Vec<&str> = lookup
        .rows
        .iter()
        .map(|user| user["user"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
    assert_eq!(lookup.failures.len(), 1);
    assert_eq!(lookup.failures[0].id, "u2");
    assert!(lookup.failures[0]
        .to_string()
        .starts_with("Could not fetch details for member u2:"));
}

#[tokio::test]
async fn test_validation_error_details_reach_the_diagnostic() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/alerts"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"errors": ["title is required"]})),
        )
        .mount(&mock_server)
        .await;

    let error = client_for(&mock_server)
        .create_alert(&AlertCreateRequest::new("x"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(422));
    let diagnostic = classify_error(&error, "creating alert");
    assert_eq!(
        diagnostic,
        "Error creating alert: 422 - Unprocessable Entity: title is required"
    );
    assert_ne!(PagertreeExitCode::for_api_error(&error).code(), 0);
}

#[tokio::test]
async fn test_blank_title_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let error = client_for(&mock_server)
        .create_alert(&AlertCreateRequest::new("  "))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_unknown_alias_stops_after_the_lookup() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("thirdparty_id", "X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "total_count": 0,
            "has_more": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = resolve_alert_id(&client, None, Some(&"X".to_string()), None)
        .await
        .unwrap_err();

    match error {
        ApiError::NotFound(message) => assert_eq!(message, "no alert found with alias \"X\""),
        other => panic!("expected NotFound, got {other:?}"),
    }
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_alias_lookup_takes_first_match() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("thirdparty_id", "db-disk"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "01FIRST"}, {"id": "01SECOND"}],
            "total_count": 2,
            "has_more": true
        })))
        .mount(&mock_server)
        .await;

    let id = resolve_alert_id(
        &client_for(&mock_server),
        None,
        Some(&"db-disk".to_string()),
        None,
    )
    .await
    .unwrap();
    assert_eq!(id, "01FIRST");
}

#[tokio::test]
async fn test_transition_with_empty_body_is_confirmed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/alerts/01ABC/resolve"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server).resolve_alert("01ABC").await.unwrap();
    assert_eq!(body, json!({"id": "01ABC"}));
}

#[tokio::test]
async fn test_current_oncall_returns_layers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/t1/current_oncall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"layer": 1, "attendees": [{"attendee_id": "u1"}]}
        ])))
        .mount(&mock_server)
        .await;

    let layers = client_for(&mock_server).team_current_oncall("t1").await.unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0]["layer"], json!(1));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let configuration = Configuration::new("test-key", unreachable_base_url()).unwrap();
    let client = PagerTreeClient::new(&configuration).unwrap();

    let error = client.show_alert("01ABC").await.unwrap_err();

    assert!(matches!(error, ApiError::Transport(_)), "got {error:?}");
    assert_eq!(error.status(), None);
    assert!(classify_error(&error, "showing alert")
        .starts_with("Error showing alert: HTTP transport error: "));
    assert_eq!(PagertreeExitCode::for_api_error(&error).code(), 101);
}
