use std::collections::HashMap;
use std::env;

use log::warn;

use crate::constants::*;
use crate::{SasProtocol, SasQueryParameters, SasQueryParametersBuilder};

/// Config carries the defaults used when building SAS query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_STORAGE_SAS_VERSION`
    /// - default value: `2019-12-12`
    ///
    /// It must be the version the signature was computed against.
    pub version: Option<String>,
    /// `protocol` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_STORAGE_SAS_PROTOCOL`, either `https` or `https,http`
    pub protocol: Option<SasProtocol>,
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept. Empty env values are ignored.
    pub fn from_env(mut self) -> Self {
        let envs = env::vars()
            .filter(|(_, v)| !v.is_empty())
            .collect::<HashMap<_, _>>();

        if self.version.is_none() {
            if let Some(v) = envs.get(AZURE_STORAGE_SAS_VERSION) {
                self.version = Some(v.to_string());
            }
        }

        if self.protocol.is_none() {
            if let Some(v) = envs.get(AZURE_STORAGE_SAS_PROTOCOL) {
                match v.parse::<SasProtocol>() {
                    Ok(protocol) => self.protocol = Some(protocol),
                    Err(err) => warn!("ignore invalid {AZURE_STORAGE_SAS_PROTOCOL}: {err}"),
                }
            }
        }

        self
    }

    /// Set the storage version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the allowed protocol.
    pub fn with_protocol(mut self, protocol: SasProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// The storage version to sign with.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_SAS_VERSION)
    }

    /// Start building query parameters for `signature`, pre-filled with
    /// the configured version and protocol.
    pub fn query_parameters(&self, signature: impl Into<String>) -> SasQueryParametersBuilder {
        let builder = SasQueryParameters::builder(self.version(), signature);
        match self.protocol {
            Some(protocol) => builder.with_protocol(protocol),
            None => builder,
        }
    }
}
