// Router-level tests driving the HTTP surface in-process

#[cfg(test)]
mod tests {
    use crate::{create_app, ApiConfig, AppState};
    use agrilink_market::{maharashtra_snapshot, FileMarketData, MarketSnapshot, StaticMarketData};
    use agrilink_types::{City, DistanceTable, PriceTable};
    use agrilink_optimizer::TransportOptimizer;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn app() -> Router {
        create_app(AppState::new())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_cities_in_registry_order() {
        let (status, body) = send(app(), Method::GET, "/api/cities", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["cities"],
            json!(["Pune", "Mumbai", "Nashik", "Solapur", "Kolhapur", "Aurangabad"])
        );
    }

    #[tokio::test]
    async fn test_city_locations_include_coordinates() {
        let (status, body) = send(app(), Method::GET, "/api/cities/locations", None).await;
        assert_eq!(status, StatusCode::OK);

        let pune = &body["cities"][0];
        assert_eq!(pune["id"], "Pune");
        assert!(pune["coordinate"]["latitude"].as_f64().is_some());
    }

    #[tokio::test]
    async fn test_list_commodities() {
        let (status, body) = send(app(), Method::GET, "/api/commodities", None).await;
        assert_eq!(status, StatusCode::OK);

        let commodities = body["commodities"].as_array().unwrap();
        assert_eq!(commodities.len(), 6);
        assert!(commodities.contains(&json!("Rice")));
    }

    #[tokio::test]
    async fn test_optimize_transport_sell_locally() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Rice", "crop_weight_kg": 100.0})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let result = &body["optimization_result"];
        assert_eq!(result["current_city"], "Pune");
        assert_eq!(result["best_city"], "Pune");
        assert_eq!(result["recommend_transport"], false);
        assert!((result["best_net_profit"].as_f64().unwrap() - 4200.0).abs() < 1e-6);

        let mumbai = &result["city_details"]["Mumbai"];
        assert_eq!(mumbai["price_per_kg"], 45.0);
        assert!((mumbai["transport_cost"].as_f64().unwrap() - 300.0).abs() < 1e-6);

        assert_eq!(body["ranking"].as_array().unwrap().len(), 6);
        assert_eq!(body["ranking"][0]["rank"], 1);
        assert_eq!(
            body["recommendation"],
            "Sell your Rice (100 kg) locally in Pune for maximum profit."
        );
    }

    #[tokio::test]
    async fn test_optimize_transport_recommends_move() {
        let mut data = StaticMarketData::new();
        data.set_price("Onion", "Nashik", 40.0).unwrap();
        let state = AppState::with_optimizer(TransportOptimizer::with_market(Arc::new(data)));

        let (status, body) = send(
            create_app(state),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Onion", "crop_weight_kg": 200.0})),
        )
        .await;

        // Nashik: 40 * 200 - 210 * 0.02 * 200 = 7160 vs Pune 6000
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimization_result"]["best_city"], "Nashik");
        assert_eq!(body["optimization_result"]["recommend_transport"], true);
        assert!((body["transport_gain"].as_f64().unwrap() - 1160.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_invalid_quantity_is_bad_request() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Rice", "crop_weight_kg": 0.0})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_quantity");
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Delhi", "crop": "Rice", "crop_weight_kg": 10.0})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_origin_city");
        assert_eq!(body["message"], "Unknown origin city: Delhi");
    }

    #[tokio::test]
    async fn test_unknown_commodity_is_not_found() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Saffron", "crop_weight_kg": 10.0})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_commodity");
    }

    #[tokio::test]
    async fn test_missing_price_is_unprocessable() {
        let mut snapshot = maharashtra_snapshot();
        snapshot.prices.remove(&"Rice".into(), &"Kolhapur".into());
        let data = StaticMarketData::with_snapshot(snapshot).unwrap();
        let state = AppState::with_optimizer(TransportOptimizer::with_market(Arc::new(data)));

        let (status, body) = send(
            create_app(state),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Rice", "crop_weight_kg": 10.0})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "missing_price");
        assert_eq!(body["message"], "Missing price for Rice in Kolhapur");
    }

    #[tokio::test]
    async fn test_missing_field_uses_error_body() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_body");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_body_uses_error_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/optimize-transport")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_body");
    }

    #[tokio::test]
    async fn test_ranking_agrees_with_origin_tie_win() {
        // Mumbai precedes the origin in the registry and ties it at 4200
        let snapshot = MarketSnapshot::new(
            vec![City::new("Mumbai"), City::new("Pune")],
            PriceTable::new()
                .with_price("Rice", "Mumbai", 45.0)
                .with_price("Rice", "Pune", 42.0),
            DistanceTable::new().with_distance("Pune", "Mumbai", 150.0),
            0.02,
            vec![],
        );
        let data = StaticMarketData::with_snapshot(snapshot).unwrap();
        let state = AppState::with_optimizer(TransportOptimizer::with_market(Arc::new(data)));

        let (status, body) = send(
            create_app(state),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Rice", "crop_weight_kg": 100.0})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimization_result"]["best_city"], "Pune");
        assert_eq!(body["ranking"][0]["city"], "Pune");
        assert_eq!(body["ranking"][0]["rank"], 1);
        assert_eq!(body["ranking"][1]["city"], "Mumbai");
    }

    #[tokio::test]
    async fn test_file_backed_config_with_rate_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.json");
        FileMarketData::write(&path, &maharashtra_snapshot()).unwrap();

        let config = ApiConfig {
            market_data_path: Some(path),
            transport_rate: Some(0.0),
            ..ApiConfig::default()
        };
        let state = AppState::with_optimizer(config.build_optimizer().unwrap());

        let (status, body) = send(
            create_app(state),
            Method::POST,
            "/api/optimize-transport",
            Some(json!({"current_city": "Pune", "crop": "Rice", "crop_weight_kg": 100.0})),
        )
        .await;

        // Free transport makes Mumbai's higher price win outright
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimization_result"]["best_city"], "Mumbai");
    }
}
