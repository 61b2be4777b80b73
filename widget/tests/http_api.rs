//! `HttpApi` against a mocked activities server.

use serde_json::json;
use widget::{ActivitiesApi, ApiError, HttpApi, SignupReply};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Raw so the key order on the wire is exactly this, not alphabetical.
const ACTIVITIES_BODY: &str = r#"{
    "Zumba": {
        "description": "Dance your way to fitness",
        "schedule": "Mondays, 4:00 PM - 5:00 PM",
        "max_participants": 20,
        "participants": []
    },
    "Chess Club": {
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    },
    "Art Club": {
        "description": "Explore your creativity",
        "schedule": "Thursdays, 3:30 PM - 5:00 PM",
        "max_participants": 15,
        "participants": []
    }
}"#;

/// An address nothing listens on. Pooled mock servers stay bound after drop,
/// so a released ephemeral port is used instead.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn fetches_activities_in_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(ACTIVITIES_BODY, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpApi::new(server.uri());
    let activities = api.activities().await.unwrap();

    let names: Vec<_> = activities.keys().map(String::as_str).collect();
    assert_eq!(names, ["Zumba", "Chess Club", "Art Club"]);
    assert_eq!(activities["Chess Club"].spots_left(), 10);
}

#[tokio::test]
async fn activities_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = HttpApi::new(server.uri()).activities().await.unwrap_err();

    assert!(matches!(err, ApiError::Status(503)), "got {:?}", err);
}

#[tokio::test]
async fn activities_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let err = HttpApi::new(server.uri()).activities().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn signup_encodes_activity_and_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .and(query_param("email", "new+1@mergington.edu"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Signed up!" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reply = HttpApi::new(server.uri())
        .signup("Chess Club", "new+1@mergington.edu")
        .await
        .unwrap();

    match reply {
        SignupReply::Accepted(response) => assert_eq!(response.message, "Signed up!"),
        other => panic!("expected acceptance, got {:?}", other),
    }
}

#[tokio::test]
async fn signup_rejection_carries_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Activity full" })),
        )
        .mount(&server)
        .await;

    let reply = HttpApi::new(server.uri())
        .signup("Chess Club", "a@mergington.edu")
        .await
        .unwrap();

    assert_eq!(
        reply,
        SignupReply::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        }
    );
}

#[tokio::test]
async fn signup_rejection_with_structured_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["query", "email"], "msg": "field required" }]
        })))
        .mount(&server)
        .await;

    let reply = HttpApi::new(server.uri())
        .signup("Chess Club", "")
        .await
        .unwrap();

    assert_eq!(
        reply,
        SignupReply::Rejected {
            status: 422,
            detail: None,
        }
    );
}

#[tokio::test]
async fn signup_unreachable_server() {
    let err = HttpApi::new(closed_port_uri())
        .signup("Chess Club", "a@mergington.edu")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
}
