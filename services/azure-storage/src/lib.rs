//! Azure Storage SAS query parameters
//!
//! This crate models the query parameters of an Azure Storage Shared Access
//! Signature and serializes them into the exact query string the service
//! verifies:
//!
//! - Account SAS (`ss`, `srt`)
//! - Service SAS (`sr`, `si`, response header overrides)
//! - User delegation SAS (`skoid`, `sktid`, `skt`, `ske`, `sks`, `skv`)
//!
//! Computing the signature is out of scope: the signer hands the signature
//! over together with the values it signed.
//!
//! # Example
//!
//! ```rust,no_run
//! use sastoken_azure_storage::{AccountSasResourceTypes, AccountSasServices, Config};
//! use sastoken_core::time::now;
//! use sastoken_core::Result;
//!
//! fn main() -> Result<()> {
//!     let config = Config::default().from_env();
//!
//!     let services: AccountSasServices = "b".parse()?;
//!     let resource_types: AccountSasResourceTypes = "co".parse()?;
//!
//!     // The signature comes from whoever holds the account key.
//!     let params = config
//!         .query_parameters("<signature>")
//!         .with_services(services.to_string())
//!         .with_resource_types(resource_types.to_string())
//!         .with_expires_on(now() + chrono::TimeDelta::try_hours(1).unwrap())
//!         .build();
//!
//!     let mut parts = http::Request::get("https://account.blob.core.windows.net/container/blob")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!     params.apply(&mut parts)?;
//!
//!     println!("signed uri: {}", parts.uri);
//!     Ok(())
//! }
//! ```

mod constants;

mod account;
pub use account::{AccountSasPermissions, AccountSasResourceTypes, AccountSasServices};

mod config;
pub use config::Config;

mod ip_range;
pub use ip_range::SasIpRange;

mod protocol;
pub use protocol::SasProtocol;

mod query_parameters;
pub use query_parameters::{SasQueryParameters, SasQueryParametersBuilder};

mod user_delegation_key;
pub use user_delegation_key::UserDelegationKey;
