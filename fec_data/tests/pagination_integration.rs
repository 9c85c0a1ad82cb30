use fec_data::fec_api::Error as ApiError;
use fec_data::types::{CommitteeType, TwoYearPeriod};
use fec_data::{
    Client, ContributionQuery, DataFetcher, FecDataError, FetchOptions, Query, SearchForm,
    StartingUrl,
};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCHEDULE_A: &str = "/v1/schedules/schedule_a/";

fn fetcher_for(server: &MockServer) -> DataFetcher {
    DataFetcher::new(Client::with_base_url(&format!("{}/v1", server.uri())).unwrap())
}

fn house_2020() -> ContributionQuery {
    ContributionQuery::default()
        .with_api_key("test-key")
        .with_cycle(TwoYearPeriod::new(2020).unwrap())
        .with_committee_type(CommitteeType::House)
}

async fn mount_page(server: &MockServer, page: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn sub_ids(results: &[serde_json::Value]) -> Vec<&str> {
    results
        .iter()
        .map(|r| r["sub_id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn total_pages_read_from_staged_response() {
    let mock_server = MockServer::start().await;
    let fixture = include_str!("fixtures/2020_house.json");
    mount_page(&mock_server, "1", fixture, 1).await;

    let fetcher = fetcher_for(&mock_server);
    let starting_url = fetcher.starting_url(&house_2020()).unwrap();
    let pages = fetcher.total_pages_for_call(&starting_url).await.unwrap();

    assert_eq!(pages, 40743);
}

#[tokio::test]
async fn total_pages_accepts_any_wrapped_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anything"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"pagination": {"pages": 12}}"#),
        )
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    let url = Url::parse(&format!("{}/anything", mock_server.uri())).unwrap();
    let pages = fetcher
        .total_pages_for_call(&StartingUrl::new(url))
        .await
        .unwrap();

    assert_eq!(pages, 12);
}

#[tokio::test]
async fn total_pages_missing_key_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", r#"{"results": []}"#, 1).await;

    let fetcher = fetcher_for(&mock_server);
    let starting_url = fetcher.starting_url(&house_2020()).unwrap();
    let result = fetcher.total_pages_for_call(&starting_url).await;

    assert!(matches!(
        result,
        Err(FecDataError::Api(ApiError::ParseFailed(_)))
    ));
}

#[tokio::test]
async fn total_pages_malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", "<html>maintenance</html>", 1).await;

    let fetcher = fetcher_for(&mock_server);
    let starting_url = fetcher.starting_url(&house_2020()).unwrap();
    let result = fetcher.total_pages_for_call(&starting_url).await;

    assert!(matches!(
        result,
        Err(FecDataError::Api(ApiError::ParseFailed(_)))
    ));
}

#[tokio::test]
async fn fetch_all_pages_concatenates_in_page_order() {
    let mock_server = MockServer::start().await;
    // Page 1 serves both the page-count request and the first page.
    mount_page(&mock_server, "1", include_str!("fixtures/two_pages_p1.json"), 2).await;
    mount_page(&mock_server, "2", include_str!("fixtures/two_pages_p2.json"), 1).await;

    let fetcher = fetcher_for(&mock_server);
    let query = house_2020();
    let starting_url = fetcher.starting_url(&query).unwrap();
    let results = fetcher.fetch_all_pages(&starting_url, &query).await.unwrap();

    assert_eq!(results.len(), 3 + 2);
    assert_eq!(sub_ids(&results), vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn fetch_all_forwards_every_dimension() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .and(query_param("api_key", "test-key"))
        .and(query_param("two_year_transaction_period", "2014"))
        .and(query_param("recipient_committee_type", "S"))
        .and(query_param("contributor_city", "San Antonio"))
        .and(query_param("contributor_state", "TX"))
        .and(query_param("contributor_zip", "78205"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"pagination": {"pages": 1}, "results": [{"sub_id": "9"}]}"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    let form = SearchForm {
        location: String::new(),
        locality: "San Antonio".to_string(),
        administrative_area_level_1: "TX".to_string(),
        postal_code: "78205".to_string(),
        country: String::new(),
        cycle: Some("2013".to_string()),
        committee_type: Some("senate".to_string()),
    };
    let (query, warnings) = form.into_query("test-key");
    assert!(warnings.is_empty());

    let results = fetcher_for(&mock_server).fetch_all(&query).await.unwrap();
    assert_eq!(sub_ids(&results), vec!["9"]);
}

#[tokio::test]
async fn zero_pages_yields_empty_result() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "1",
        r#"{"pagination": {"pages": 0, "count": 0}, "results": []}"#,
        1,
    )
    .await;

    let results = fetcher_for(&mock_server)
        .fetch_all(&house_2020())
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn failed_page_aborts_aggregation() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", include_str!("fixtures/two_pages_p1.json"), 2).await;

    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch_all(&house_2020()).await;
    assert!(matches!(
        result,
        Err(FecDataError::Api(ApiError::HttpStatus { status: 502, .. }))
    ));
}

#[tokio::test]
async fn rate_limit_on_page_count_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch_all(&house_2020()).await;
    assert!(matches!(
        result,
        Err(FecDataError::Api(ApiError::RateLimited))
    ));
}

#[tokio::test]
async fn max_pages_caps_the_walk() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", include_str!("fixtures/2020_house.json"), 2).await;

    let client = Client::with_base_url(&format!("{}/v1", mock_server.uri())).unwrap();
    let fetcher = DataFetcher::with_options(
        client,
        FetchOptions {
            max_pages: Some(1),
            ..FetchOptions::default()
        },
    );
    let results = fetcher.fetch_all(&house_2020()).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["contributor_name"], "DOE, JANE");
}

#[tokio::test]
async fn per_page_is_sent_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .and(query_param("per_page", "3"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/two_pages_p1.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SCHEDULE_A))
        .and(query_param("per_page", "3"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/two_pages_p2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = house_2020().with_per_page(3);
    let results = fetcher_for(&mock_server).fetch_all(&query).await.unwrap();
    assert_eq!(results.len(), 5);
}
