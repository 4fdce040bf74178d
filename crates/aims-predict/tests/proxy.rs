use aims_predict::PredictionMap;
use aims_predict::error::CallFailure;
use aims_predict::proxy::PredictionProxy;
use aims_predict::target::PredictionTarget;
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

/// Nothing listens on port 1 on a test host; connections are refused.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn answers() -> PredictionMap {
    match json!({
        "facialMuscles": 2,
        "tongue": 4,
        "globalRating": 3,
        "monthsAhead": 3
    }) {
        Value::Object(map) => map,
        _ => panic!("literal is an object"),
    }
}

fn as_map(value: Value) -> PredictionMap {
    value.as_object().cloned().expect("object")
}

/// Proxy that ignores any HTTP_PROXY in the test environment.
fn direct(base: impl Into<String>) -> PredictionProxy {
    let config = ureq::Agent::config_builder().proxy(None).build();
    PredictionProxy::with_agent(ureq::Agent::new_with_config(config), base)
}

async fn serve_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn call(proxy: PredictionProxy, target: PredictionTarget) -> PredictionMap {
    tokio::task::spawn_blocking(move || proxy.predict(target, &answers()))
        .await
        .unwrap()
}

#[test]
fn unreachable_current_returns_exact_fallback() {
    let proxy = direct(UNREACHABLE);
    let result = proxy.current_prediction(&answers());
    assert_eq!(
        Value::Object(result),
        json!({
            "assessment": "Unavailable",
            "severityScore": "N/A",
            "suggestions": ["Prediction service is currently unreachable."]
        })
    );
}

#[test]
fn unreachable_future_returns_exact_fallback() {
    let proxy = direct(UNREACHABLE);
    let result = proxy.future_prediction(&answers());
    assert_eq!(
        Value::Object(result),
        json!({
            "error": "Prediction service unreachable",
            "trend": "N/A",
            "suggestions": ["Unable to fetch AI predictions. Try again later."]
        })
    );
}

#[test]
fn unreachable_is_a_transport_failure() {
    let proxy = direct(UNREACHABLE);
    let err = proxy
        .try_predict(PredictionTarget::Current, &answers())
        .unwrap_err();
    assert!(matches!(err, CallFailure::Transport(_)), "got {err:?}");
}

#[test]
fn endpoints_join_base_url() {
    let proxy = PredictionProxy::new("http://ml.internal:5001/");
    assert_eq!(proxy.base_url(), "http://ml.internal:5001");
    assert_eq!(
        proxy.endpoint(PredictionTarget::Current),
        "http://ml.internal:5001/predict"
    );
    assert_eq!(
        proxy.endpoint(PredictionTarget::Future),
        "http://ml.internal:5001/predict-future"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn success_body_passes_through_unchanged() {
    let base = serve_stub(Router::new().route(
        "/predict",
        post(|| async { Json(json!({"assessment": "Mild", "severityScore": 3})) }),
    ))
    .await;

    let result = call(direct(base), PredictionTarget::Current).await;
    assert_eq!(result, as_map(json!({"assessment": "Mild", "severityScore": 3})));
}

#[tokio::test(flavor = "multi_thread")]
async fn request_body_is_forwarded_as_json() {
    let base = serve_stub(Router::new().route(
        "/predict-future",
        post(|Json(body): Json<Value>| async move { Json(body) }),
    ))
    .await;

    let result = call(direct(base), PredictionTarget::Future).await;
    assert_eq!(result, answers());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_yields_fallback() {
    let base = serve_stub(Router::new().route(
        "/predict-future",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "model not loaded"})),
            )
        }),
    ))
    .await;

    let result = call(direct(base), PredictionTarget::Future).await;
    assert_eq!(result, PredictionTarget::Future.fallback());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_reported() {
    let base = serve_stub(Router::new().route(
        "/predict",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let proxy = direct(base);
    let err = tokio::task::spawn_blocking(move || {
        proxy.try_predict(PredictionTarget::Current, &answers())
    })
    .await
    .unwrap()
    .unwrap_err();
    assert!(matches!(err, CallFailure::Status(503)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unparseable_body_yields_fallback() {
    let base = serve_stub(
        Router::new().route("/predict", post(|| async { "<html>oops</html>" })),
    )
    .await;

    let result = call(direct(base), PredictionTarget::Current).await;
    assert_eq!(result, PredictionTarget::Current.fallback());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_object_body_is_a_decode_failure() {
    let base = serve_stub(
        Router::new().route("/predict", post(|| async { Json(json!([1, 2, 3])) })),
    )
    .await;

    let proxy = direct(base);
    let err = tokio::task::spawn_blocking(move || {
        proxy.try_predict(PredictionTarget::Current, &answers())
    })
    .await
    .unwrap()
    .unwrap_err();
    assert!(matches!(err, CallFailure::Decode(_)), "got {err:?}");
}
