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

//! Time related utils.

use crate::Error;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into a truncated ISO 8601 string.
///
/// - without milliseconds: `2020-05-01T07:06:43Z`
/// - with milliseconds: `2020-05-01T07:06:43.1230000Z`
///
/// Sub-second precision is truncated, never rounded.
pub fn format_truncated_iso8601(t: DateTime, with_milliseconds: bool) -> String {
    if with_milliseconds {
        format!("{}0000Z", t.format("%Y-%m-%dT%H:%M:%S%.3f"))
    } else {
        t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Parse time from RFC3339.
///
/// All offsets will be converted into UTC.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| {
            Error::unexpected("failed to parse rfc3339 time")
                .with_source(e)
                .with_context(format!("value: {s}"))
        })?
        .with_timezone(&Utc))
}
