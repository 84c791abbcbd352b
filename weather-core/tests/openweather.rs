//! OpenWeather client and aggregation against a mock upstream.

use std::{sync::Arc, time::Duration};

use serde_json::{Value, json};
use weather_core::{
    Aggregator, LookupError, OpenWeatherProvider, ProviderError, WeatherProvider,
    error::CITY_NOT_FOUND,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn current_body(city: &str) -> Value {
    json!({
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": {
            "temp": 21.3,
            "feels_like": 20.8,
            "temp_min": 19.0,
            "temp_max": 23.4,
            "pressure": 1018,
            "humidity": 40
        },
        "visibility": 10000,
        "wind": { "speed": 3.1, "deg": 90 },
        "sys": { "country": "ES" },
        "name": city,
        "cod": 200
    })
}

fn forecast_body(count: usize) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "dt": 1_760_868_000 + (i as i64) * 10_800,
                "main": { "temp": 18.0, "temp_min": 16.0, "temp_max": 20.0 },
                "weather": [{ "main": "Clouds", "description": "few clouds", "icon": "02d" }]
            })
        })
        .collect();
    json!({ "cod": "200", "cnt": count, "list": list, "city": { "name": "Madrid" } })
}

async fn mount_current(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new(format!("{}/data/2.5", server.uri()))
}

fn aggregator(server: &MockServer) -> Aggregator {
    Aggregator::new(Arc::new(provider(server)), Some("test-key".into()))
}

#[tokio::test]
async fn current_request_carries_city_key_and_metric_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ok_json(current_body("São Paulo")))
        .expect(1)
        .mount(&server)
        .await;

    let current = provider(&server)
        .current("São Paulo", "test-key")
        .await
        .unwrap();

    assert_eq!(current.name, "São Paulo");
    assert_eq!(current.sys.country.as_deref(), Some("ES"));
    assert_eq!(current.visibility, Some(10_000));
    assert_eq!(current.main.humidity, 40);
    assert_eq!(current.extra["cod"], 200);
}

#[tokio::test]
async fn current_without_visibility_or_country_still_decodes() {
    let server = MockServer::start().await;
    let mut body = current_body("Tórshavn");
    body.as_object_mut().unwrap().remove("visibility");
    body["sys"] = json!({ "sunrise": 1_760_854_000 });
    mount_current(&server, ok_json(body)).await;
    mount_forecast(&server, ok_json(forecast_body(8))).await;

    let weather = aggregator(&server).lookup(Some("Tórshavn")).await.unwrap();

    assert_eq!(weather.current.visibility, None);
    assert_eq!(weather.current.sys.country, None);
    assert_eq!(weather.forecast.map(|f| f.len()), Some(8));
}

#[tokio::test]
async fn current_404_is_not_found() {
    let server = MockServer::start().await;
    let body = json!({ "cod": "404", "message": "city not found" });
    mount_current(&server, ResponseTemplate::new(404).set_body_json(body)).await;

    let err = provider(&server)
        .current("Nowhere", "test-key")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound));
}

#[tokio::test]
async fn current_401_is_status_error() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(401)).await;

    let err = provider(&server)
        .current("Madrid", "bad-key")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Status(401)));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    let template = ResponseTemplate::new(200).set_body_string("<html>oops</html>");
    mount_current(&server, template).await;

    let err = provider(&server)
        .current("Madrid", "test-key")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn forecast_returns_list_only() {
    let server = MockServer::start().await;
    mount_forecast(&server, ok_json(forecast_body(40))).await;

    let list = provider(&server)
        .forecast("Madrid", "test-key")
        .await
        .unwrap();
    assert_eq!(list.len(), 40);
    assert_eq!(list[1].dt - list[0].dt, 10_800);
}

#[tokio::test]
async fn lookup_combines_both_calls() {
    let server = MockServer::start().await;
    mount_current(&server, ok_json(current_body("Madrid"))).await;
    mount_forecast(&server, ok_json(forecast_body(40))).await;

    let weather = aggregator(&server).lookup(Some("Madrid")).await.unwrap();

    assert_eq!(weather.current.name, "Madrid");
    assert_eq!(weather.forecast.map(|f| f.len()), Some(40));
}

#[tokio::test]
async fn lookup_survives_forecast_outage() {
    let server = MockServer::start().await;
    mount_current(&server, ok_json(current_body("Madrid"))).await;
    mount_forecast(&server, ResponseTemplate::new(503)).await;

    let weather = aggregator(&server).lookup(Some("Madrid")).await.unwrap();

    assert_eq!(weather.current.name, "Madrid");
    assert!(weather.forecast.is_none());

    let json = serde_json::to_value(&weather).unwrap();
    assert!(json["forecast"].is_null());
}

#[tokio::test]
async fn lookup_survives_forecast_timeout() {
    let server = MockServer::start().await;
    mount_current(&server, ok_json(current_body("Madrid"))).await;
    let slow = ok_json(forecast_body(40)).set_delay(Duration::from_secs(2));
    mount_forecast(&server, slow).await;

    let provider = OpenWeatherProvider::with_timeout(
        format!("{}/data/2.5", server.uri()),
        Duration::from_millis(500),
    )
    .unwrap();
    let agg = Aggregator::new(Arc::new(provider), Some("test-key".into()));

    let weather = agg.lookup(Some("Madrid")).await.unwrap();

    assert_eq!(weather.current.name, "Madrid");
    assert!(weather.forecast.is_none());
}

#[tokio::test]
async fn lookup_with_undecodable_forecast_is_internal_error() {
    let server = MockServer::start().await;
    mount_current(&server, ok_json(current_body("Madrid"))).await;
    let template = ResponseTemplate::new(200).set_body_string("<html>maintenance</html>");
    mount_forecast(&server, template).await;

    let err = aggregator(&server)
        .lookup(Some("Madrid"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Internal(ProviderError::Decode(_))));
    assert_eq!(
        err.user_message(),
        "Failed to fetch weather data. Please try again later."
    );
}

#[tokio::test]
async fn lookup_unknown_city_is_not_found() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(404)).await;
    mount_forecast(&server, ResponseTemplate::new(404)).await;

    let err = aggregator(&server)
        .lookup(Some("NoSuchCityXYZ123"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::NotFound));
    assert_eq!(err.user_message(), CITY_NOT_FOUND);
}

#[tokio::test]
async fn lookup_unreachable_upstream_is_internal_error() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let agg = Aggregator::new(
        Arc::new(OpenWeatherProvider::new(format!(
            "http://127.0.0.1:{port}/data/2.5"
        ))),
        Some("test-key".into()),
    );
    let err = agg.lookup(Some("Madrid")).await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Internal(ProviderError::Transport(_))
    ));
    assert_eq!(
        err.user_message(),
        "Failed to fetch weather data. Please try again later."
    );
}

#[tokio::test]
async fn lookup_without_key_never_calls_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let agg = Aggregator::new(Arc::new(provider(&server)), None);
    let err = agg.lookup(Some("Madrid")).await.unwrap_err();

    assert!(matches!(err, LookupError::ServerMisconfigured));
}
