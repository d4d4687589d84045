//! ApiClient tests against a mock upstream.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use salonledger_client::ApiClient;
use salonledger_core::period::Period;
use salonledger_core::records::CommissionQuery;
use salonledger_core::report::{FetchError, RecordFetcher};
use salonledger_shared::config::UpstreamConfig;
use salonledger_shared::types::SalonId;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SALON: &str = "0192f5a4-2222-7000-8000-000000000001";

fn client(server: &MockServer, max_pages: u32) -> ApiClient {
    ApiClient::new(&UpstreamConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        page_size: 2,
        max_pages,
    })
    .unwrap()
}

fn sale(id: u8, amount: &str) -> serde_json::Value {
    json!({
        "id": format!("0192f5a4-1111-7000-8000-0000000000{id:02}"),
        "salonId": SALON,
        "totalAmount": amount,
        "paymentMethod": "cash",
        "createdAt": "2026-10-14T09:00:00Z"
    })
}

fn period() -> Period {
    Period::custom(
        NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_sales_are_paged_and_filtered_by_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .and(query_param("salonId", SALON))
        .and(query_param("startDate", "2026-10-10"))
        .and(query_param("endDate", "2026-10-16"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "data": [sale(1, "1,000"), sale(2, "500")],
                "meta": {"page": 1, "limit": 2, "total": 3, "totalPages": 2}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "data": [sale(3, "250.50")],
                "meta": {"page": 2, "limit": 2, "total": 3, "totalPages": 2}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sales = client(&server, 10)
        .fetch_sales(SALON.parse::<SalonId>().unwrap(), &period())
        .await
        .unwrap();

    assert_eq!(sales.len(), 3);
    let total: rust_decimal::Decimal = sales.iter().map(|s| s.total_amount).sum();
    assert_eq!(total, dec!(1750.50));
}

#[tokio::test]
async fn test_paging_stops_at_max_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [sale(1, "100"), sale(2, "100")],
            "meta": {"page": 1, "limit": 2, "total": 100, "totalPages": 50}
        })))
        .expect(3)
        .mount(&server)
        .await;

    let sales = client(&server, 3)
        .fetch_sales(SalonId::new(), &period())
        .await
        .unwrap();

    assert_eq!(sales.len(), 6);
}

#[tokio::test]
async fn test_undecodable_records_are_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sale(1, "100"),
            {"id": "not-a-uuid", "totalAmount": 5},
            {"totalAmount": 5}
        ])))
        .mount(&server)
        .await;

    let sales = client(&server, 10)
        .fetch_sales(SalonId::new(), &period())
        .await
        .unwrap();

    assert_eq!(sales.len(), 1);
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/salons"))
        .and(header("authorization", "Bearer caller-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "salons": [{"id": SALON, "name": "Salon Kigali"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let salons = client(&server, 10)
        .with_bearer("caller-token")
        .fetch_salons()
        .await
        .unwrap();

    assert_eq!(salons.len(), 1);
    assert_eq!(salons[0].name, "Salon Kigali");
}

#[tokio::test]
async fn test_commission_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commissions"))
        .and(query_param("salonId", SALON))
        .and(query_param("paid", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "0192f5a4-4444-7000-8000-000000000001",
                "salonEmployee": {
                    "id": "0192f5a4-5555-7000-8000-000000000001",
                    "user": {"fullName": "Jean Bosco"}
                },
                "amount": "300.00",
                "createdAt": "2026-10-15T10:00:00Z",
                "metadata": {"source": "sale"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = CommissionQuery {
        salon_id: Some(SALON.parse().unwrap()),
        paid: Some(false),
        ..CommissionQuery::default()
    };
    let commissions = client(&server, 10)
        .fetch_commissions(&query)
        .await
        .unwrap();

    assert_eq!(commissions.len(), 1);
    assert_eq!(commissions[0].amount, dec!(300));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = client(&server, 10).fetch_appointments(SalonId::new()).await;

    assert_eq!(
        result.unwrap_err(),
        FetchError::Status {
            status: 503,
            body: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let result = client(&server, 10).fetch_appointments(SalonId::new()).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    let client = ApiClient::new(&UpstreamConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        page_size: 10,
        max_pages: 1,
    })
    .unwrap();

    let result = client.fetch_salons().await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}
