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

use pretty_assertions::assert_eq;
use sastoken_azure_storage::{
    AccountSasPermissions, AccountSasResourceTypes, AccountSasServices, SasIpRange, SasProtocol,
    SasQueryParameters,
};
use sastoken_core::Result;

use crate::{init_logger, utc};

#[test]
fn test_account_sas() {
    init_logger();

    let params = SasQueryParameters::builder("2019-12-12", "abc")
        .with_services("b")
        .with_resource_types("co")
        .with_protocol(SasProtocol::Https)
        .with_expires_on(utc(2020, 1, 1, 0, 0, 0))
        .build();

    assert_eq!(
        params.to_string(),
        "sv=2019-12-12&ss=b&srt=co&spr=https&se=2020-01-01T00%3A00%3A00Z&sig=abc"
    );
}

#[test]
fn test_account_sas_with_typed_scopes() -> Result<()> {
    init_logger();

    let permissions: AccountSasPermissions = "lrw".parse()?;
    let services = AccountSasServices {
        blob: true,
        queue: true,
        ..Default::default()
    };
    let resource_types: AccountSasResourceTypes = "os".parse()?;

    let signature = "jgK9nDUT0ntH/p28LPs0jzwxsk91W6hePLPlfrElv4k=";

    let params = SasQueryParameters::builder("2019-12-12", signature)
        .with_permissions(permissions.to_string())
        .with_services(services.to_string())
        .with_resource_types(resource_types.to_string())
        .with_starts_on(utc(2022, 3, 1, 8, 12, 34))
        .with_expires_on(utc(2022, 3, 1, 8, 17, 34))
        .with_ip_range(SasIpRange::new("168.1.5.60").with_end("168.1.5.70"))
        .with_protocol(SasProtocol::HttpsAndHttp)
        .build();

    assert_eq!(
        params.to_string(),
        "sv=2019-12-12&ss=bq&srt=so&spr=https%2Chttp\
         &st=2022-03-01T08%3A12%3A34Z&se=2022-03-01T08%3A17%3A34Z\
         &sip=168.1.5.60-168.1.5.70&sp=rwl\
         &sig=jgK9nDUT0ntH%2Fp28LPs0jzwxsk91W6hePLPlfrElv4k%3D"
    );
    Ok(())
}

#[test]
fn test_account_sas_rejects_unknown_scope() {
    assert!("bx".parse::<AccountSasServices>().is_err());
    assert!("scx".parse::<AccountSasResourceTypes>().is_err());
    assert!("rwx".parse::<AccountSasPermissions>().is_err());
}
