use http::request::Parts;
use pretty_assertions::assert_eq;
use sastoken_azure_storage::{SasQueryParameters, SasQueryParametersBuilder};
use sastoken_core::{ErrorKind, Result};

use crate::{init_logger, utc};

fn test_params() -> SasQueryParameters {
    SasQueryParametersBuilder::new("2019-12-12", "KEllk4N8f7rJfLjQCmikL2fRVt++l73UBkbgH/K3VGE=")
        .with_resource("b")
        .with_permissions("r")
        .with_expires_on(utc(2022, 1, 1, 11, 0, 14))
        .build()
}

fn parts(uri: &str) -> Parts {
    http::Request::get(uri)
        .header("x-ms-version", "2019-12-12")
        .header("x-ms-client-request-id", "test-123")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

#[test]
fn test_apply_to_request() -> Result<()> {
    init_logger();

    let mut req = parts("https://test.blob.core.windows.net/testbucket/testblob");
    test_params().apply(&mut req)?;

    assert_eq!(
        req.uri.to_string(),
        "https://test.blob.core.windows.net/testbucket/testblob\
         ?sv=2019-12-12&se=2022-01-01T11%3A00%3A14Z&sr=b&sp=r\
         &sig=KEllk4N8f7rJfLjQCmikL2fRVt%2B%2Bl73UBkbgH%2FK3VGE%3D"
    );
    assert!(!req.headers.contains_key("authorization"));
    Ok(())
}

#[test]
fn test_apply_keeps_existing_query() -> Result<()> {
    init_logger();

    let mut req = parts("https://test.blob.core.windows.net/testbucket?restype=container&comp=list");
    test_params().apply(&mut req)?;

    let query = req.uri.query().expect("query must exist");
    assert!(query.starts_with("restype=container&comp=list&sv=2019-12-12&"));
    assert!(query.ends_with("&sig=KEllk4N8f7rJfLjQCmikL2fRVt%2B%2Bl73UBkbgH%2FK3VGE%3D"));
    Ok(())
}

#[test]
fn test_apply_preserves_request() -> Result<()> {
    init_logger();

    let mut req = parts("https://test.blob.core.windows.net/testbucket/testblob");
    test_params().apply(&mut req)?;

    assert_eq!(req.method, http::Method::GET);
    assert_eq!(req.uri.host(), Some("test.blob.core.windows.net"));
    assert_eq!(req.uri.path(), "/testbucket/testblob");
    assert_eq!(req.headers.get("x-ms-version").unwrap(), "2019-12-12");
    assert_eq!(req.headers.get("x-ms-client-request-id").unwrap(), "test-123");
    Ok(())
}

#[test]
fn test_apply_to_relative_uri() -> Result<()> {
    let mut req = parts("/testbucket/testblob");
    test_params().apply(&mut req)?;

    assert_eq!(req.uri.path(), "/testbucket/testblob");
    assert!(req.uri.query().unwrap().starts_with("sv=2019-12-12&"));
    Ok(())
}

#[test]
fn test_apply_rejects_authority_form_uri() {
    init_logger();

    let mut req = parts("test.blob.core.windows.net:443");
    let err = test_params().apply(&mut req).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(req.uri.to_string(), "test.blob.core.windows.net:443");
}

#[test]
fn test_query_pairs_round_trip_through_uri() -> Result<()> {
    let params = test_params();
    let uri = params.append_to_uri(&"https://test.blob.core.windows.net/a".parse()?)?;

    let decoded: Vec<(String, String)> =
        decode_query(uri.query().expect("query must exist"));
    let expected: Vec<(String, String)> = params
        .query_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(decoded, expected);
    Ok(())
}

fn decode_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .map(|(k, v)| {
            (
                percent_encoding::percent_decode_str(k)
                    .decode_utf8_lossy()
                    .into_owned(),
                percent_encoding::percent_decode_str(v)
                    .decode_utf8_lossy()
                    .into_owned(),
            )
        })
        .collect()
}
