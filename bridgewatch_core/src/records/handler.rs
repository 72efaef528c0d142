use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::records::dto::NetworkRecord;

/// The only fatal error in the system: the record list itself could not be
/// read or written.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Record store I/O error: {}", err),
            StoreError::Parse(err) => write!(f, "Record store parse error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> StoreResult<Vec<NetworkRecord>> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Wholesale rewrite: pretty-printed JSON array with a trailing newline.
    pub fn save(&self, records: &[NetworkRecord]) -> StoreResult<()> {
        let mut out = serde_json::to_string_pretty(records)?;
        out.push('\n');
        fs::write(&self.path, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(tag: &str) -> RecordStore {
        let path = env::temp_dir().join(format!("bridgewatch-{}-{}.json", tag, std::process::id()));
        RecordStore::new(path)
    }

    #[test]
    fn test_round_trip_preserves_unknown_keys() {
        let raw = r##"[
            {
                "name": "Ethereum",
                "url": "https://ethereum.org",
                "image": "/img/eth.svg",
                "category": "network",
                "contractAddress": "0xdead",
                "tokenBalance": 1.5,
                "color": "#627eea"
            }
        ]"##;

        let records: Vec<NetworkRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records[0].contract_address.as_deref(), Some("0xdead"));
        assert_eq!(records[0].token_balance, Some(1.5));
        assert_eq!(records[0].extra["color"], "#627eea");

        let store = temp_store("round-trip");
        store.save(&records).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn test_save_is_pretty_printed_with_trailing_newline() {
        let records: Vec<NetworkRecord> = serde_json::from_str(
            r#"[{"name": "Solana", "url": "https://solana.com", "image": "/img/sol.svg", "category": "network"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].token_balance, None);

        let store = temp_store("pretty");
        store.save(&records).unwrap();

        let raw = std::fs::read_to_string(
            env::temp_dir().join(format!("bridgewatch-pretty-{}.json", std::process::id())),
        )
        .unwrap();
        assert!(raw.ends_with("]\n"));
        assert!(raw.contains("\n  {"));
        // Unset balances stay absent instead of serializing as null.
        assert!(!raw.contains("tokenBalance"));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let store = RecordStore::new(PathBuf::from("/nonexistent/bridgewatch.json"));
        match store.load() {
            Err(StoreError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_load_garbage_is_a_parse_error() {
        let store = temp_store("garbage");
        std::fs::write(
            env::temp_dir().join(format!("bridgewatch-garbage-{}.json", std::process::id())),
            "not json",
        )
        .unwrap();
        match store.load() {
            Err(StoreError::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other.map(|r| r.len())),
        }
    }
}
