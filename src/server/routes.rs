use crate::errors::PayoffError;
use crate::state::AppState;
use crate::trade::Trade;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

/// GET /api/health -- liveness probe
pub async fn get_health(
    State(state): State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "max_grid_points": state.config.max_grid_points,
    }))
}

/// POST /api/payoff -- payoff curve for the posted trade (pure computation, no IO)
pub async fn post_payoff(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let trade: Trade = serde_json::from_slice(&body).map_err(|e| {
        let e = PayoffError::from(e);
        tracing::warn!(error = %e, "payoff request body rejected");
        error_response(&e)
    })?;

    match state.generator.generate_curve(&trade) {
        Ok(curve) => Ok(Json(serde_json::json!({
            "position": curve.position,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "points": curve.points,
        }))),
        Err(e) => {
            tracing::warn!(error = %e, legs = trade.legs.len(), "payoff request rejected");
            Err(error_response(&e))
        }
    }
}

fn error_response(e: &PayoffError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match e {
        PayoffError::Parse(_) => StatusCode::BAD_REQUEST,
        _ if e.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": e.to_string() })))
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::server::router;
    use crate::state::AppState;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn send(config: AppConfig, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let app = router(AppState::new(config));
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/payoff")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let (status, body) = send(AppConfig::default(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["max_grid_points"], 1_000_000);
    }

    #[tokio::test]
    async fn test_payoff_for_stock_trade() {
        let request = post_json(r#"{"legs":[{"openPrice":50.0,"quantity":10,"side":"buy"}]}"#);
        let (status, body) = send(AppConfig::default(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["position"], "stock");
        let points = body["points"].as_array().unwrap();
        assert_eq!(points.len(), 2501);
        assert_eq!(points[0]["header"], "37.50");
        assert_eq!(points[0]["label"], "-$125.00");
    }

    #[tokio::test]
    async fn test_payoff_for_option_trade() {
        let request = post_json(concat!(
            r#"{"legs":[{"strike":100.0,"openPrice":5.0,"quantity":1,"#,
            r#""side":"buy","putCall":"call"}]}"#,
        ));
        let (status, body) = send(AppConfig::default(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["position"], "options");
        assert!(body["generated_at"].is_string());
        assert_eq!(body["points"][0]["x"], 91.0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = post_json(r#"{"legs":[{"side":"hold"}]}"#);
        let (status, body) = send(AppConfig::default(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("parse error"));

        let (status, _) = send(AppConfig::default(), post_json("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_overflowing_strikes_are_unprocessable() {
        let request = post_json(concat!(
            r#"{"legs":["#,
            r#"{"strike":0.0,"openPrice":1.0,"quantity":1,"side":"buy","putCall":"call"},"#,
            r#"{"strike":1e20,"openPrice":1.0,"quantity":1,"side":"sell","putCall":"call"}"#,
            r#"]}"#,
        ));
        let (status, body) = send(AppConfig::default(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("too large"));
    }

    #[tokio::test]
    async fn test_empty_trade_is_unprocessable() {
        let (status, body) = send(AppConfig::default(), post_json(r#"{"legs":[]}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("no legs"));
    }

    #[tokio::test]
    async fn test_grid_limit_is_unprocessable() {
        let config = AppConfig {
            max_grid_points: 5,
            ..AppConfig::default()
        };
        let request = post_json(r#"{"legs":[{"openPrice":50.0,"quantity":10,"side":"sell"}]}"#);
        let (status, body) = send(config, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("too large"));
    }
}
