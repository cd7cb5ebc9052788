use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use folio_contact::{ContactForm, DeliveryError, FormState, HttpTransport, Phase, Transport};

#[derive(Clone)]
struct Endpoint {
    status: StatusCode,
    received: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

async fn receive(
    State(endpoint): State<Endpoint>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    endpoint.received.lock().unwrap().push((content_type, body));

    endpoint.status
}

async fn spawn_endpoint(status: StatusCode) -> anyhow::Result<(String, Endpoint)> {
    let endpoint = Endpoint {
        status,
        received: Arc::new(Mutex::new(vec![])),
    };

    let app = Router::new()
        .route("/api/contact", post(receive))
        .with_state(endpoint.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });

    Ok((format!("http://{addr}/api/contact"), endpoint))
}

#[tokio::test]
async fn test_posts_json_payload() -> anyhow::Result<()> {
    let (url, endpoint) = spawn_endpoint(StatusCode::OK).await?;
    let transport = HttpTransport::new(url);

    transport
        .deliver(&FormState::new("Jane", "jane@example.com", "Hello"))
        .await?;

    let received = endpoint.received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0, "application/json");
    assert_eq!(
        received[0].1,
        serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hello",
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_any_success_status_is_accepted() -> anyhow::Result<()> {
    let (url, _endpoint) = spawn_endpoint(StatusCode::ACCEPTED).await?;
    let mut form = ContactForm::from(FormState::new("Jane", "jane@example.com", "Hello"));

    form.submit(&HttpTransport::new(url)).await;

    assert_eq!(form.phase(), Phase::Success);
    assert_eq!(form.state(), &FormState::default());

    Ok(())
}

#[tokio::test]
async fn test_error_status_is_rejected() -> anyhow::Result<()> {
    let (url, endpoint) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await?;
    let transport = HttpTransport::new(url);

    let err = transport
        .deliver(&FormState::new("Jane", "jane@example.com", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Rejected { status: 500 }));
    assert_eq!(endpoint.received.lock().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint() -> anyhow::Result<()> {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let mut form = ContactForm::from(FormState::new("Jane", "jane@example.com", "Hello"));
    let transport = HttpTransport::new(format!("http://{addr}/api/contact"));

    let err = transport.deliver(form.state()).await.unwrap_err();
    assert!(matches!(err, DeliveryError::Unreachable(_)));

    form.submit(&transport).await;
    assert_eq!(form.phase(), Phase::Error);
    assert_eq!(form.state().name, "Jane");

    Ok(())
}
