use std::io::Write;

use tracing::info;
use xrate::credentials::{PropertiesFile, StaticKey};
use xrate::{RateClient, RateError};

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(date: &str, key: &str, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/api/{date}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .and(query_param("access_key", key))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_rate_queries_with_properties_credentials() {
    let body = r#"{"success": true, "base": "EUR", "rates": {"USD": 1.2, "EUR": 1.0, "GBP": 0.8}}"#;
    let mock_server = test_utils::create_mock_server("2010-06-25", "secret", body).await;

    let mut keys_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(keys_file, "# keep this file out of version control").unwrap();
    writeln!(keys_file, "fixer_io=secret").unwrap();
    keys_file.flush().unwrap();

    let base_url = format!("{}/api/", mock_server.uri());
    let client = RateClient::new(&base_url, &PropertiesFile::new(keys_file.path())).unwrap();

    let usd = client.rate_against_base("USD", 2010, 6, 25).await.unwrap();
    info!(?usd, "Fetched USD rate against the base currency");
    assert_eq!(usd, 1.2);

    let usd_in_gbp = client.rate_between("USD", "GBP", 2010, 6, 25).await.unwrap();
    info!(?usd_in_gbp, "Fetched USD/GBP cross rate");
    assert!((usd_in_gbp - 1.5).abs() < 1e-9);
}

#[test_log::test(tokio::test)]
async fn test_missing_credentials_abort_construction() {
    let source = PropertiesFile::new("/nonexistent/etc/access_keys.properties");
    match RateClient::new("http://api.example.com/api/", &source) {
        Err(RateError::Configuration { .. }) => {}
        Err(e) => panic!("expected a configuration error, got: {e}"),
        Ok(_) => panic!("client must not be constructed without an access key"),
    }
}

#[test_log::test(tokio::test)]
async fn test_malformed_base_url_is_a_network_error() {
    let client = RateClient::new("not-a-url/", &StaticKey("k1".to_string())).unwrap();

    let err = client
        .rate_against_base("USD", 2010, 6, 25)
        .await
        .unwrap_err();
    assert!(matches!(err, RateError::Network(_)));
}
