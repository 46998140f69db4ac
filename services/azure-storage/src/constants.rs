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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Query keys of a SAS token.
pub const SAS_VERSION: &str = "sv";
pub const SAS_SERVICES: &str = "ss";
pub const SAS_RESOURCE_TYPES: &str = "srt";
pub const SAS_PROTOCOL: &str = "spr";
pub const SAS_STARTS_ON: &str = "st";
pub const SAS_EXPIRES_ON: &str = "se";
pub const SAS_IP_RANGE: &str = "sip";
pub const SAS_IDENTIFIER: &str = "si";
pub const SAS_SIGNED_OID: &str = "skoid";
pub const SAS_SIGNED_TID: &str = "sktid";
pub const SAS_SIGNED_KEY_START: &str = "skt";
pub const SAS_SIGNED_KEY_EXPIRY: &str = "ske";
pub const SAS_SIGNED_KEY_SERVICE: &str = "sks";
pub const SAS_SIGNED_KEY_VERSION: &str = "skv";
pub const SAS_RESOURCE: &str = "sr";
pub const SAS_PERMISSIONS: &str = "sp";
pub const SAS_SIGNATURE: &str = "sig";
pub const SAS_CACHE_CONTROL: &str = "rscc";
pub const SAS_CONTENT_DISPOSITION: &str = "rscd";
pub const SAS_CONTENT_ENCODING: &str = "rsce";
pub const SAS_CONTENT_LANGUAGE: &str = "rscl";
pub const SAS_CONTENT_TYPE: &str = "rsct";

// Env values used to configure SAS generation.
pub const AZURE_STORAGE_SAS_VERSION: &str = "AZURE_STORAGE_SAS_VERSION";
pub const AZURE_STORAGE_SAS_PROTOCOL: &str = "AZURE_STORAGE_SAS_PROTOCOL";

/// Storage API version used when none is configured.
pub const DEFAULT_SAS_VERSION: &str = "2019-12-12";

/// AsciiSet matching URI component encoding.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets percent encoded.
pub static URI_COMPONENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
