use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter, Write};

use http::request::Parts;
use http::uri::PathAndQuery;
use http::Uri;
use log::debug;
use percent_encoding::utf8_percent_encode;
use sastoken_core::time::{format_truncated_iso8601, DateTime};
use sastoken_core::utils::Redact;
use sastoken_core::Result;

use crate::constants::*;
use crate::{SasIpRange, SasProtocol, UserDelegationKey};

/// The components that make up an Azure Storage SAS' query parameters.
///
/// Instances are built by a signer after it has computed the signature, and
/// are immutable afterwards. Use [`Display`] (or `to_string()`) to encode
/// them into a string that can be appended to a URL directly.
///
/// ```
/// use chrono::TimeZone;
/// use sastoken_azure_storage::{SasProtocol, SasQueryParameters};
///
/// let params = SasQueryParameters::builder("2019-12-12", "abc")
///     .with_services("b")
///     .with_resource_types("co")
///     .with_protocol(SasProtocol::Https)
///     .with_expires_on(chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
///     .build();
///
/// assert_eq!(
///     params.to_string(),
///     "sv=2019-12-12&ss=b&srt=co&spr=https&se=2020-01-01T00%3A00%3A00Z&sig=abc"
/// );
/// ```
#[derive(Clone)]
pub struct SasQueryParameters {
    version: String,
    signature: String,
    permissions: Option<String>,
    services: Option<String>,
    resource_types: Option<String>,
    protocol: Option<SasProtocol>,
    starts_on: Option<DateTime>,
    expires_on: Option<DateTime>,
    ip_range: Option<SasIpRange>,
    identifier: Option<String>,
    resource: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    signed_key: Option<SignedKey>,
}

/// Properties copied from a [`UserDelegationKey`], always set together.
#[derive(Clone, Debug)]
struct SignedKey {
    object_id: String,
    tenant_id: String,
    starts_on: DateTime,
    expires_on: DateTime,
    service: String,
    version: String,
}

impl From<&UserDelegationKey> for SignedKey {
    fn from(key: &UserDelegationKey) -> Self {
        Self {
            object_id: key.signed_object_id.clone(),
            tenant_id: key.signed_tenant_id.clone(),
            starts_on: key.signed_starts_on,
            expires_on: key.signed_expires_on,
            service: key.signed_service.clone(),
            version: key.signed_version.clone(),
        }
    }
}

impl SasQueryParameters {
    /// Start building SAS query parameters with the mandatory storage
    /// version and signature.
    pub fn builder(
        version: impl Into<String>,
        signature: impl Into<String>,
    ) -> SasQueryParametersBuilder {
        SasQueryParametersBuilder::new(version, signature)
    }

    /// The storage API version the signature was computed against.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The signature for the SAS token.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The storage permissions.
    ///
    /// Optional only when identifier is provided.
    pub fn permissions(&self) -> Option<&str> {
        self.permissions.as_deref()
    }

    /// The storage services being accessed (only for Account SAS).
    pub fn services(&self) -> Option<&str> {
        self.services.as_deref()
    }

    /// The storage resource types being accessed (only for Account SAS).
    pub fn resource_types(&self) -> Option<&str> {
        self.resource_types.as_deref()
    }

    /// The allowed HTTP protocol(s).
    pub fn protocol(&self) -> Option<SasProtocol> {
        self.protocol
    }

    /// The start time for this SAS token.
    pub fn starts_on(&self) -> Option<DateTime> {
        self.starts_on
    }

    /// The expiry time for this SAS token.
    ///
    /// Optional only when identifier is provided.
    pub fn expires_on(&self) -> Option<DateTime> {
        self.expires_on
    }

    /// IP range allowed for this SAS.
    ///
    /// Returns an owned copy; the stored range can't be changed through it.
    pub fn ip_range(&self) -> Option<SasIpRange> {
        self.ip_range.clone()
    }

    /// The signed identifier of a stored access policy (only for Service SAS).
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// The storage resource kind, e.g. `b` for blob or `c` for container
    /// (only for Service SAS).
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Value for the cache-control response header.
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    /// Value for the content-disposition response header.
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    /// Value for the content-encoding response header.
    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    /// Value for the content-language response header.
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    /// Value for the content-type response header.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Every SAS query key in wire order, paired with its raw value.
    ///
    /// This order is part of the wire format and must not change.
    fn entries(&self) -> [(&'static str, Option<Cow<'_, str>>); 22] {
        let key = self.signed_key.as_ref();

        [
            (SAS_VERSION, Some(Cow::Borrowed(self.version.as_str()))),
            (SAS_SERVICES, borrowed(&self.services)),
            (SAS_RESOURCE_TYPES, borrowed(&self.resource_types)),
            (SAS_PROTOCOL, self.protocol.map(|v| Cow::Borrowed(v.as_str()))),
            (SAS_STARTS_ON, self.starts_on.map(truncated)),
            (SAS_EXPIRES_ON, self.expires_on.map(truncated)),
            (
                SAS_IP_RANGE,
                self.ip_range.as_ref().map(|v| Cow::Owned(v.to_string())),
            ),
            (SAS_IDENTIFIER, borrowed(&self.identifier)),
            (SAS_SIGNED_OID, key.map(|k| Cow::Borrowed(k.object_id.as_str()))),
            (SAS_SIGNED_TID, key.map(|k| Cow::Borrowed(k.tenant_id.as_str()))),
            (SAS_SIGNED_KEY_START, key.map(|k| truncated(k.starts_on))),
            (SAS_SIGNED_KEY_EXPIRY, key.map(|k| truncated(k.expires_on))),
            (
                SAS_SIGNED_KEY_SERVICE,
                key.map(|k| Cow::Borrowed(k.service.as_str())),
            ),
            (
                SAS_SIGNED_KEY_VERSION,
                key.map(|k| Cow::Borrowed(k.version.as_str())),
            ),
            (SAS_RESOURCE, borrowed(&self.resource)),
            (SAS_PERMISSIONS, borrowed(&self.permissions)),
            (SAS_SIGNATURE, Some(Cow::Borrowed(self.signature.as_str()))),
            (SAS_CACHE_CONTROL, borrowed(&self.cache_control)),
            (SAS_CONTENT_DISPOSITION, borrowed(&self.content_disposition)),
            (SAS_CONTENT_ENCODING, borrowed(&self.content_encoding)),
            (SAS_CONTENT_LANGUAGE, borrowed(&self.content_language)),
            (SAS_CONTENT_TYPE, borrowed(&self.content_type)),
        ]
    }

    /// Entries that will be serialized: absent and empty values are skipped.
    fn present_entries(&self) -> impl Iterator<Item = (&'static str, Cow<'_, str>)> {
        self.entries()
            .into_iter()
            .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k, v)))
    }

    /// The serialized query as unencoded `(key, value)` pairs, in wire order.
    ///
    /// Useful for callers that push query parameters one by one and take
    /// care of encoding themselves.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.present_entries()
            .map(|(k, v)| (k, v.into_owned()))
            .collect()
    }

    /// Append the token to the query of `uri`.
    ///
    /// Existing query parameters are kept in front of the token.
    pub fn append_to_uri(&self, uri: &Uri) -> Result<Uri> {
        let token = self.to_string();
        if token.is_empty() {
            return Ok(uri.clone());
        }

        let mut parts = uri.clone().into_parts();
        let paq = match parts.path_and_query.as_ref() {
            Some(paq) => {
                let query = paq
                    .query()
                    .map(|q| q.trim_end_matches('&'))
                    .filter(|q| !q.is_empty());
                match query {
                    Some(query) => format!("{}?{}&{}", paq.path(), query, token),
                    None => format!("{}?{}", paq.path(), token),
                }
            }
            None => format!("/?{token}"),
        };
        parts.path_and_query = Some(paq.parse::<PathAndQuery>()?);

        Ok(Uri::from_parts(parts)?)
    }

    /// Append the token to the uri of the request.
    pub fn apply(&self, req: &mut Parts) -> Result<()> {
        req.uri = self.append_to_uri(&req.uri)?;

        debug!(
            "applied sas token with {} query parameters to {}",
            self.present_entries().count(),
            req.uri.path()
        );
        Ok(())
    }
}

fn borrowed(v: &Option<String>) -> Option<Cow<'_, str>> {
    v.as_deref().map(Cow::Borrowed)
}

fn truncated(t: DateTime) -> Cow<'static, str> {
    Cow::Owned(format_truncated_iso8601(t, false))
}

/// Encodes all SAS query parameters into a string that can be appended to
/// a URL, without the leading `?` or `&`.
impl Display for SasQueryParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, (k, v)) in self.present_entries().enumerate() {
            if idx > 0 {
                f.write_char('&')?;
            }
            write!(
                f,
                "{}={}",
                utf8_percent_encode(k, &URI_COMPONENT_ENCODE_SET),
                utf8_percent_encode(&v, &URI_COMPONENT_ENCODE_SET)
            )?;
        }
        Ok(())
    }
}

impl Debug for SasQueryParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SasQueryParameters")
            .field("version", &self.version)
            .field("signature", &Redact::from(&self.signature))
            .field("permissions", &self.permissions)
            .field("services", &self.services)
            .field("resource_types", &self.resource_types)
            .field("protocol", &self.protocol)
            .field("starts_on", &self.starts_on)
            .field("expires_on", &self.expires_on)
            .field("ip_range", &self.ip_range)
            .field("identifier", &self.identifier)
            .field("resource", &self.resource)
            .field("cache_control", &self.cache_control)
            .field("content_disposition", &self.content_disposition)
            .field("content_encoding", &self.content_encoding)
            .field("content_language", &self.content_language)
            .field("content_type", &self.content_type)
            .field("signed_key", &self.signed_key)
            .finish()
    }
}

/// Builder for [`SasQueryParameters`].
///
/// Every optional field is independent; unset and empty fields are left out
/// of the serialized token.
#[derive(Debug, Clone)]
pub struct SasQueryParametersBuilder {
    inner: SasQueryParameters,
}

impl SasQueryParametersBuilder {
    /// Create a builder with the mandatory storage version and signature.
    pub fn new(version: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            inner: SasQueryParameters {
                version: version.into(),
                signature: signature.into(),
                permissions: None,
                services: None,
                resource_types: None,
                protocol: None,
                starts_on: None,
                expires_on: None,
                ip_range: None,
                identifier: None,
                resource: None,
                cache_control: None,
                content_disposition: None,
                content_encoding: None,
                content_language: None,
                content_type: None,
                signed_key: None,
            },
        }
    }

    /// Set the storage permissions (`sp`).
    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.inner.permissions = Some(permissions.into());
        self
    }

    /// Set the services of an account SAS (`ss`).
    pub fn with_services(mut self, services: impl Into<String>) -> Self {
        self.inner.services = Some(services.into());
        self
    }

    /// Set the resource types of an account SAS (`srt`).
    pub fn with_resource_types(mut self, resource_types: impl Into<String>) -> Self {
        self.inner.resource_types = Some(resource_types.into());
        self
    }

    /// Set the allowed protocol (`spr`).
    pub fn with_protocol(mut self, protocol: SasProtocol) -> Self {
        self.inner.protocol = Some(protocol);
        self
    }

    /// Set the start time (`st`).
    pub fn with_starts_on(mut self, starts_on: DateTime) -> Self {
        self.inner.starts_on = Some(starts_on);
        self
    }

    /// Set the expiry time (`se`).
    pub fn with_expires_on(mut self, expires_on: DateTime) -> Self {
        self.inner.expires_on = Some(expires_on);
        self
    }

    /// Set the allowed IP range (`sip`).
    pub fn with_ip_range(mut self, ip_range: SasIpRange) -> Self {
        self.inner.ip_range = Some(ip_range);
        self
    }

    /// Set the stored access policy identifier (`si`).
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.inner.identifier = Some(identifier.into());
        self
    }

    /// Set the signed resource (`sr`).
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.inner.resource = Some(resource.into());
        self
    }

    /// Override the cache-control response header (`rscc`).
    pub fn with_cache_control(mut self, v: impl Into<String>) -> Self {
        self.inner.cache_control = Some(v.into());
        self
    }

    /// Override the content-disposition response header (`rscd`).
    pub fn with_content_disposition(mut self, v: impl Into<String>) -> Self {
        self.inner.content_disposition = Some(v.into());
        self
    }

    /// Override the content-encoding response header (`rsce`).
    pub fn with_content_encoding(mut self, v: impl Into<String>) -> Self {
        self.inner.content_encoding = Some(v.into());
        self
    }

    /// Override the content-language response header (`rscl`).
    pub fn with_content_language(mut self, v: impl Into<String>) -> Self {
        self.inner.content_language = Some(v.into());
        self
    }

    /// Override the content-type response header (`rsct`).
    pub fn with_content_type(mut self, v: impl Into<String>) -> Self {
        self.inner.content_type = Some(v.into());
        self
    }

    /// Copy the properties of a user delegation key (`skoid`, `sktid`,
    /// `skt`, `ske`, `sks`, `skv`).
    ///
    /// The key value itself is never stored.
    pub fn with_user_delegation_key(mut self, key: &UserDelegationKey) -> Self {
        self.inner.signed_key = Some(SignedKey::from(key));
        self
    }

    /// Build the immutable [`SasQueryParameters`].
    pub fn build(self) -> SasQueryParameters {
        self.inner
    }
}
