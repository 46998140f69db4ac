use pretty_assertions::assert_eq;
use sastoken_azure_storage::SasQueryParameters;

use crate::{init_logger, token_keys, utc};

#[test]
fn test_service_sas_with_headers() {
    init_logger();

    let params = SasQueryParameters::builder("2019-12-12", "c2lnbmF0dXJl")
        .with_resource("b")
        .with_permissions("r")
        .with_cache_control("no-cache")
        .build();

    let token = params.to_string();
    assert!(
        token.contains("sr=b&sp=r&sig=c2lnbmF0dXJl&rscc=no-cache"),
        "unexpected token: {token}"
    );
}

#[test]
fn test_service_sas_with_all_headers() {
    init_logger();

    let params = SasQueryParameters::builder("2019-12-12", "sig")
        .with_content_type("application/json; charset=utf-8")
        .with_content_language("en-US")
        .with_content_encoding("gzip")
        .with_content_disposition("attachment; filename=\"data file.json\"")
        .with_cache_control("max-age=3600")
        .with_resource("b")
        .with_permissions("r")
        .with_expires_on(utc(2020, 6, 1, 12, 0, 0))
        .build();

    assert_eq!(
        params.to_string(),
        "sv=2019-12-12&se=2020-06-01T12%3A00%3A00Z&sr=b&sp=r&sig=sig\
         &rscc=max-age%3D3600\
         &rscd=attachment%3B%20filename%3D%22data%20file.json%22\
         &rsce=gzip&rscl=en-US\
         &rsct=application%2Fjson%3B%20charset%3Dutf-8"
    );
}

#[test]
fn test_service_sas_with_stored_access_policy() {
    init_logger();

    // Permissions and expiry come from the stored access policy.
    let params = SasQueryParameters::builder("2019-12-12", "sig")
        .with_identifier("read-policy")
        .with_resource("c")
        .build();

    assert_eq!(
        token_keys(&params.to_string()),
        vec!["sv", "si", "sr", "sig"]
    );
    assert_eq!(params.identifier(), Some("read-policy"));
    assert_eq!(params.expires_on(), None);
}
