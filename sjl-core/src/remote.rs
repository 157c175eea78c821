//! Remote sensor store collaborator.
//!
//! The dashboard reads live IoT readings from a real-time key-value
//! database laid out as `/springshediotdata/{device_id}`. The store is built
//! once by the host from a [`RemoteConfig`] and handed to whoever needs it;
//! nothing here keeps a process-wide client.

use crate::error::{Result, SpringshedError};
use crate::sensor::SensorReading;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Database the dashboard reads from when no configuration is supplied.
pub const DEFAULT_DATABASE_URL: &str = "https://springjal-66c38-default-rtdb.firebaseio.com/";

/// Root node holding one child per device.
pub const SENSOR_ROOT: &str = "springshediotdata";

/// Message shown when a device has nothing stored.
pub const NO_DATA_MESSAGE: &str = "No data found for the selected device ID.";

/// Characters the real-time database does not allow in keys.
const FORBIDDEN_KEY_CHARS: [char; 6] = ['.', '#', '$', '[', ']', '/'];

/// Connection settings for the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(rename = "databaseURL", alias = "databaseUrl")]
    pub database_url: String,
    /// Optional database secret or ID token, sent as the `auth` query
    /// parameter.
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            auth_token: None,
        }
    }
}

impl RemoteConfig {
    /// Parse a JSON config such as `{"databaseURL": "https://..."}`.
    pub fn from_json_str(json: &str) -> Result<RemoteConfig> {
        let config: RemoteConfig =
            serde_json::from_str(json).map_err(|e| SpringshedError::Config(e.to_string()))?;
        if config.database_url.trim().is_empty() {
            return Err(SpringshedError::Config("databaseURL is empty".to_string()));
        }
        if !config.database_url.starts_with("http://") && !config.database_url.starts_with("https://") {
            return Err(SpringshedError::Config(format!(
                "databaseURL must be http(s): {}",
                config.database_url
            )));
        }
        Ok(config)
    }

    /// REST url for one device's node, without the auth token.
    pub fn sensor_url(&self, device_id: &str) -> Result<String> {
        let device_id = device_id.trim();
        if device_id.is_empty() || device_id.contains(FORBIDDEN_KEY_CHARS) {
            return Err(SpringshedError::InvalidDeviceId(device_id.to_string()));
        }
        let base = self.database_url.trim().trim_end_matches('/');
        Ok(format!("{}/{}/{}.json", base, SENSOR_ROOT, device_id))
    }
}

/// A point-lookup store of sensor readings keyed by device id.
pub trait SensorStore {
    /// Fetch the readings for a device; `Ok(None)` when nothing is stored.
    fn fetch(&self, device_id: &str) -> impl Future<Output = Result<Option<SensorReading>>>;
}

/// What a single sensor lookup produced, from the viewer's side.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(SensorReading),
    NoData { device_id: String },
}

impl FetchOutcome {
    /// Informational text for an empty lookup.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FetchOutcome::Found(_) => None,
            FetchOutcome::NoData { .. } => Some(NO_DATA_MESSAGE),
        }
    }

    /// Treat an empty lookup as an error, for callers that require data.
    pub fn into_result(self) -> Result<SensorReading> {
        match self {
            FetchOutcome::Found(reading) => Ok(reading),
            FetchOutcome::NoData { device_id } => Err(SpringshedError::MissingRemoteData { device_id }),
        }
    }
}

/// Look up a device and turn an absent value into [`FetchOutcome::NoData`].
///
/// Only transport or parse failures come back as `Err`.
pub async fn fetch_outcome<S: SensorStore>(store: &S, device_id: &str) -> Result<FetchOutcome> {
    match store.fetch(device_id).await? {
        Some(reading) => {
            log::info!("Fetched {} fields for {}", reading.fields.len(), device_id);
            Ok(FetchOutcome::Found(reading))
        }
        None => {
            log::info!("No sensor data stored for {}", device_id);
            Ok(FetchOutcome::NoData {
                device_id: device_id.to_string(),
            })
        }
    }
}

/// Firebase Realtime Database store read over its REST interface.
#[cfg(feature = "api")]
#[derive(Clone)]
pub struct FirebaseStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

#[cfg(feature = "api")]
impl FirebaseStore {
    pub fn new(config: RemoteConfig) -> Self {
        FirebaseStore {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// GET request for one device's node. The token goes through the query
    /// serializer so it is percent-encoded.
    pub fn request(&self, device_id: &str) -> Result<reqwest::Request> {
        let url = self.config.sensor_url(device_id)?;
        let mut builder = self.client.get(&url);
        if let Some(token) = &self.config.auth_token {
            builder = builder.query(&[("auth", token.as_str())]);
        }
        builder
            .build()
            .map_err(|e| SpringshedError::Remote(e.to_string()))
    }
}

#[cfg(feature = "api")]
impl SensorStore for FirebaseStore {
    async fn fetch(&self, device_id: &str) -> Result<Option<SensorReading>> {
        let request = self.request(device_id)?;
        log::info!("Fetching sensor data for {}", device_id);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SpringshedError::Remote(e.to_string()))?;
        if !response.status().is_success() {
            return Err(SpringshedError::Remote(format!(
                "bad response for {}: {}",
                device_id,
                response.status()
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| SpringshedError::Remote(e.to_string()))?;
        SensorReading::from_json(device_id, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory store keyed by device id, holding raw JSON bodies.
    struct MapStore(HashMap<String, String>);

    impl SensorStore for MapStore {
        async fn fetch(&self, device_id: &str) -> Result<Option<SensorReading>> {
            match self.0.get(device_id) {
                Some(body) => SensorReading::from_json(device_id, body),
                None => Ok(None),
            }
        }
    }

    fn store() -> MapStore {
        MapStore(HashMap::from([
            ("spr8561714".to_string(), r#"{"temperature": 19.0, "tds": 120}"#.to_string()),
            ("spr-broken".to_string(), "not json".to_string()),
        ]))
    }

    #[test]
    fn test_config_from_json() {
        let config = RemoteConfig::from_json_str(r#"{"databaseURL": "https://example.firebaseio.com/"}"#).unwrap();
        assert_eq!(config.database_url, "https://example.firebaseio.com/");
        assert_eq!(config.auth_token, None);

        let aliased = RemoteConfig::from_json_str(r#"{"databaseUrl": "http://localhost:9000", "authToken": "s3cret"}"#)
            .unwrap();
        assert_eq!(aliased.auth_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_config_rejects_missing_or_bad_url() {
        assert!(matches!(
            RemoteConfig::from_json_str("{}"),
            Err(SpringshedError::Config(_))
        ));
        assert!(matches!(
            RemoteConfig::from_json_str(r#"{"databaseURL": "  "}"#),
            Err(SpringshedError::Config(_))
        ));
        assert!(matches!(
            RemoteConfig::from_json_str(r#"{"databaseURL": "ftp://example"}"#),
            Err(SpringshedError::Config(_))
        ));
    }

    #[test]
    fn test_sensor_url() {
        let config = RemoteConfig::default();
        assert_eq!(
            config.sensor_url("spr8561714").unwrap(),
            "https://springjal-66c38-default-rtdb.firebaseio.com/springshediotdata/spr8561714.json"
        );

        let with_token = RemoteConfig {
            database_url: "http://localhost:9000".to_string(),
            auth_token: Some("abc".to_string()),
        };
        assert_eq!(
            with_token.sensor_url("spr1").unwrap(),
            "http://localhost:9000/springshediotdata/spr1.json"
        );
    }

    #[test]
    fn test_sensor_url_rejects_bad_keys() {
        let config = RemoteConfig::default();
        for bad in ["", "a/b", "a.b", "x#1", "$root", "[0]"] {
            assert!(matches!(
                config.sensor_url(bad),
                Err(SpringshedError::InvalidDeviceId(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_unknown_device_is_no_data() {
        let outcome = fetch_outcome(&store(), "unknown-device").await.unwrap();
        assert_eq!(
            outcome,
            FetchOutcome::NoData {
                device_id: "unknown-device".to_string()
            }
        );
        assert_eq!(outcome.message(), Some(NO_DATA_MESSAGE));
        assert_eq!(
            outcome.into_result(),
            Err(SpringshedError::MissingRemoteData {
                device_id: "unknown-device".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_known_device_is_found() {
        let outcome = fetch_outcome(&store(), "spr8561714").await.unwrap();
        assert_eq!(outcome.message(), None);
        let reading = outcome.into_result().unwrap();
        assert_eq!(reading.numeric_fields().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_propagates() {
        let err = fetch_outcome(&store(), "spr-broken").await.unwrap_err();
        assert!(matches!(err, SpringshedError::Remote(_)));
    }

    #[cfg(feature = "api")]
    #[test]
    fn test_request_encodes_auth_token() {
        let store = FirebaseStore::new(RemoteConfig {
            database_url: "https://example.firebaseio.com/".to_string(),
            auth_token: Some("a&b#c+d".to_string()),
        });
        let request = store.request("spr8561714").unwrap();
        assert_eq!(*request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/springshediotdata/spr8561714.json");
        assert_eq!(request.url().query(), Some("auth=a%26b%23c%2Bd"));
        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("auth".to_string(), "a&b#c+d".to_string())]);
    }

    #[cfg(feature = "api")]
    #[test]
    fn test_request_without_token_has_no_query() {
        let store = FirebaseStore::new(RemoteConfig::default());
        assert_eq!(store.request("spr1").unwrap().url().query(), None);
        assert!(matches!(
            store.request("a/b"),
            Err(SpringshedError::InvalidDeviceId(_))
        ));
    }
}
