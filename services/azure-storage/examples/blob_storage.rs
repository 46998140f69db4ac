use sastoken_azure_storage::{
    AccountSasPermissions, AccountSasResourceTypes, AccountSasServices, Config, SasIpRange,
    SasQueryParameters, UserDelegationKey,
};
use sastoken_core::time::now;
use sastoken_core::{Error, Result};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // AZURE_STORAGE_SAS_VERSION and AZURE_STORAGE_SAS_PROTOCOL are honored here.
    let config = Config::default().from_env();
    let account_name = "mystorageaccount";
    let expires_on = now()
        + chrono::TimeDelta::try_hours(1)
            .ok_or_else(|| Error::unexpected("expiry offset out of range"))?;

    // Example 1: account SAS for listing containers
    println!("Example 1: Account SAS");
    let permissions: AccountSasPermissions = "rl".parse()?;
    let services: AccountSasServices = "b".parse()?;
    let resource_types: AccountSasResourceTypes = "sc".parse()?;

    let params = config
        .query_parameters("<signature computed with the account key>")
        .with_permissions(permissions.to_string())
        .with_services(services.to_string())
        .with_resource_types(resource_types.to_string())
        .with_ip_range(SasIpRange::new("168.1.5.60").with_end("168.1.5.70"))
        .with_expires_on(expires_on)
        .build();

    let url = format!("https://{account_name}.blob.core.windows.net/?comp=list");
    let mut parts = http::Request::get(&url)
        .body(())?
        .into_parts()
        .0;
    params.apply(&mut parts)?;
    println!("Signed uri: {}", parts.uri);

    // Example 2: service SAS for reading a blob with a content type override
    println!("\nExample 2: Service SAS");
    let params = config
        .query_parameters("<signature computed with the account key>")
        .with_resource("b")
        .with_permissions("r")
        .with_content_type("text/plain")
        .with_expires_on(expires_on)
        .build();
    println!("Token: {params}");

    // Example 3: user delegation SAS from a Get User Delegation Key response
    println!("\nExample 3: User delegation SAS");
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<UserDelegationKey>
    <SignedOid>00000000-0000-0000-0000-000000000001</SignedOid>
    <SignedTid>00000000-0000-0000-0000-000000000002</SignedTid>
    <SignedStart>2024-01-01T00:00:00Z</SignedStart>
    <SignedExpiry>2024-01-08T00:00:00Z</SignedExpiry>
    <SignedService>b</SignedService>
    <SignedVersion>2019-12-12</SignedVersion>
    <Value>ZGVtby1rZXk=</Value>
</UserDelegationKey>"#;
    let key = UserDelegationKey::from_xml(body)?;
    println!("Delegation key: {key:?}");

    let params = SasQueryParameters::builder(config.version(), "<signature computed with the key>")
        .with_user_delegation_key(&key)
        .with_resource("c")
        .with_permissions("rl")
        .with_expires_on(expires_on)
        .build();

    let url = format!("https://{account_name}.blob.core.windows.net/mycontainer");
    let uri = params.append_to_uri(&url.parse()?)?;
    println!("Signed uri: {uri}");

    Ok(())
}
