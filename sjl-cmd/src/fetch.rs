//! Remote sensor lookup subcommand.

use log::info;
use sjl_core::remote::{fetch_outcome, FetchOutcome, FirebaseStore, RemoteConfig, SensorStore};
use std::io::Write;

/// Load the remote config from `path`, or the default database when absent.
pub fn load_config(path: Option<&str>) -> anyhow::Result<RemoteConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read remote config {}: {}", path, e))?;
            Ok(RemoteConfig::from_json_str(&json)?)
        }
        None => {
            info!("No remote config given; using the default database");
            Ok(RemoteConfig::default())
        }
    }
}

/// Look up `device_id` in `store` and print a `field,value` table to `out`.
///
/// A device with no data prints the informational message, or fails when
/// `require_data` is set.
pub async fn report<S: SensorStore, W: Write>(
    store: &S,
    device_id: &str,
    require_data: bool,
    mut out: W,
) -> anyhow::Result<()> {
    let outcome = fetch_outcome(store, device_id).await?;
    let reading = match outcome {
        FetchOutcome::Found(reading) => reading,
        no_data if require_data => {
            no_data.into_result()?;
            return Ok(());
        }
        no_data => {
            if let Some(message) = no_data.message() {
                writeln!(out, "{}", message)?;
            }
            return Ok(());
        }
    };

    let mut wtr = csv::Writer::from_writer(&mut out);
    wtr.write_record(["field", "value"])?;
    for (field, value) in reading.display_rows() {
        wtr.write_record([field.as_str(), value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_fetch(
    device_id: &str,
    config_path: Option<&str>,
    require_data: bool,
) -> anyhow::Result<()> {
    let store = FirebaseStore::new(load_config(config_path)?);
    info!("Reading {} from {}", device_id, store.config().database_url);
    report(&store, device_id, require_data, std::io::stdout().lock()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sjl_core::remote::NO_DATA_MESSAGE;
    use sjl_core::sensor::SensorReading;
    use sjl_core::SpringshedError;

    /// Store that answers every lookup with the same body.
    struct FixedStore(&'static str);

    impl SensorStore for FixedStore {
        async fn fetch(&self, device_id: &str) -> sjl_core::Result<Option<SensorReading>> {
            SensorReading::from_json(device_id, self.0)
        }
    }

    #[tokio::test]
    async fn test_report_prints_fields() {
        let store = FixedStore(r#"{"flow": 12.5, "status": "ok"}"#);
        let mut buf = Vec::new();
        report(&store, "spr8561714", false, &mut buf).await.unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "field,value\nflow,12.5\nstatus,ok\n"
        );
    }

    #[tokio::test]
    async fn test_report_no_data_message() {
        let store = FixedStore("null");
        let mut buf = Vec::new();
        report(&store, "spr0", false, &mut buf).await.unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", NO_DATA_MESSAGE));
    }

    #[tokio::test]
    async fn test_report_requires_data() {
        let store = FixedStore("{}");
        let mut buf = Vec::new();
        let err = report(&store, "spr0", true, &mut buf).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SpringshedError>(),
            Some(&SpringshedError::MissingRemoteData {
                device_id: "spr0".to_string()
            })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), RemoteConfig::default());
    }

    #[test]
    fn test_load_config_reads_file() {
        let path = std::env::temp_dir().join(format!("sjl-cmd-remote-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"databaseURL": "http://localhost:9000"}"#).unwrap();
        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.database_url, "http://localhost:9000");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_token_from_config_is_encoded() {
        let path = std::env::temp_dir().join(format!("sjl-cmd-token-config-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"databaseURL": "http://localhost:9000", "authToken": "x&y=z"}"#,
        )
        .unwrap();
        let store = FirebaseStore::new(load_config(path.to_str()).unwrap());
        std::fs::remove_file(&path).unwrap();

        let request = store.request("spr8561714").unwrap();
        assert_eq!(request.url().query(), Some("auth=x%26y%3Dz"));
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        assert!(load_config(Some("/nonexistent/remote.json")).is_err());
    }
}
