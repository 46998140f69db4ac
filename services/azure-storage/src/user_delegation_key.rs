// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use quick_xml::de;
use sastoken_core::time::{parse_rfc3339, DateTime};
use sastoken_core::utils::Redact;
use sastoken_core::{Error, Result};
use serde::Deserialize;

/// Key issued by the storage service to sign user delegation SAS.
///
/// - [Get User Delegation Key](https://learn.microsoft.com/en-us/rest/api/storageservices/get-user-delegation-key)
#[derive(Clone)]
pub struct UserDelegationKey {
    /// The Azure Active Directory object ID in GUID format.
    pub signed_object_id: String,
    /// The Azure Active Directory tenant ID in GUID format.
    pub signed_tenant_id: String,
    /// The date-time the key is active.
    pub signed_starts_on: DateTime,
    /// The date-time the key expires.
    pub signed_expires_on: DateTime,
    /// Abbreviation of the storage service that accepts the key.
    pub signed_service: String,
    /// The service version that created the key.
    pub signed_version: String,
    /// The base64 encoded key used to sign.
    pub value: String,
}

impl Debug for UserDelegationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDelegationKey")
            .field("signed_object_id", &self.signed_object_id)
            .field("signed_tenant_id", &self.signed_tenant_id)
            .field("signed_starts_on", &self.signed_starts_on)
            .field("signed_expires_on", &self.signed_expires_on)
            .field("signed_service", &self.signed_service)
            .field("signed_version", &self.signed_version)
            .field("value", &Redact::from(&self.value))
            .finish()
    }
}

impl UserDelegationKey {
    /// Parse the body returned by `Get User Delegation Key`.
    pub fn from_xml(body: &str) -> Result<Self> {
        let resp: UserDelegationKeyResponse = de::from_str(body).map_err(|e| {
            Error::credential_invalid("failed to parse user delegation key response")
                .with_source(e)
                .with_context(format!("response_length: {}", body.len()))
        })?;

        let parse_time = |field: &str, value: &str| {
            parse_rfc3339(value.trim()).map_err(|e| {
                Error::credential_invalid("failed to parse user delegation key time")
                    .with_source(e)
                    .with_context(format!("field: {field}"))
                    .with_context(format!("value: {value}"))
            })
        };

        // The key properties are copied into the token as a group, so every
        // one of them must be present.
        for (field, value) in [
            ("SignedOid", &resp.signed_oid),
            ("SignedTid", &resp.signed_tid),
            ("SignedService", &resp.signed_service),
            ("SignedVersion", &resp.signed_version),
            ("Value", &resp.value),
        ] {
            if value.trim().is_empty() {
                return Err(Error::credential_invalid(
                    "user delegation key response is missing a field",
                )
                .with_context(format!("field: {field}")));
            }
        }

        Ok(Self {
            signed_starts_on: parse_time("SignedStart", &resp.signed_start)?,
            signed_expires_on: parse_time("SignedExpiry", &resp.signed_expiry)?,
            signed_object_id: resp.signed_oid,
            signed_tenant_id: resp.signed_tid,
            signed_service: resp.signed_service,
            signed_version: resp.signed_version,
            value: resp.value,
        })
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct UserDelegationKeyResponse {
    signed_oid: String,
    signed_tid: String,
    signed_start: String,
    signed_expiry: String,
    signed_service: String,
    signed_version: String,
    value: String,
}
