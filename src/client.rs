//! The Mockaroo API client.

use crate::error::Error;
use crate::transport::{ApiRequest, HttpTransport, Transport};
use mockaroo_schema::{describe_fields, RecordSchema};
use serde::de::DeserializeOwned;

/// Generation endpoint, parameterized by API key and record count.
const MOCKAROO_API_URL: &str = "https://api.mockaroo.com/api/generate.json";

/// A client for the Mockaroo API. Read more at <https://www.mockaroo.com/docs>.
///
/// The client holds no mutable state; one instance can serve concurrent
/// calls, each of which builds its own request and transport session.
pub struct MockarooClient {
    api_key: String,
    endpoint: String,
    transport: Box<dyn Transport>,
}

impl MockarooClient {
    /// Create a client that talks to the Mockaroo API over HTTP.
    ///
    /// Fails with [`Error::Configuration`] if `api_key` is empty. The
    /// check happens here, before any network activity.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_transport(api_key, HttpTransport)
    }

    /// Create a client with a custom [`Transport`] implementation.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: impl Transport + 'static,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::Configuration(
                "no API key was supplied at construction".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            endpoint: MOCKAROO_API_URL.to_string(),
            transport: Box::new(transport),
        })
    }

    /// Override the generation endpoint, e.g. for a self-hosted service.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch `count` generated records of shape `T`.
    ///
    /// Derives the field descriptors from `T`'s [`RecordSchema`], posts
    /// them to the generation endpoint, and decodes the response into an
    /// ordered `Vec<T>`. The call either fully succeeds with the complete
    /// sequence or fails; there are no retries and no partial results.
    ///
    /// `count` must be positive; the service is authoritative for any
    /// upper bound and rejects counts beyond the account's plan.
    pub async fn get_data<T>(&self, count: u32) -> Result<Vec<T>, Error>
    where
        T: RecordSchema + DeserializeOwned,
    {
        let request = self.build_request::<T>(count)?;

        tracing::debug!("requesting {count} generated records");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            // The service puts a human-readable message in the body.
            // Preserve it verbatim rather than parsing it.
            return Err(Error::RemoteGeneration(response.body));
        }

        let records: Vec<T> = serde_json::from_str(&response.body)?;

        tracing::debug!("decoded {} generated records", records.len());

        Ok(records)
    }

    fn build_request<T: RecordSchema>(&self, count: u32) -> Result<ApiRequest, Error> {
        let descriptors = describe_fields::<T>();
        let body = serde_json::to_string(&descriptors)?;
        let url = format!(
            "{}?key={}&count={}",
            self.endpoint, self.api_key, count
        );

        Ok(ApiRequest { url, body })
    }
}
