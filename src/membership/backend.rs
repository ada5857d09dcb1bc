//! Shipped membership persistence backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::common::error::{StoreError, StoreResult};
use crate::common::types::ParticipantId;
use crate::membership::store::MembershipBackend;

/// One persisted membership record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MembershipRecord {
    channel: String,
}

/// In-memory backend for tests and hosts without persistent storage.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<BTreeMap<String, MembershipRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MembershipBackend for MemoryBackend {
    fn channel_of(&self, id: &ParticipantId) -> StoreResult<Option<String>> {
        Ok(self
            .records
            .lock()
            .get(id.as_str())
            .map(|record| record.channel.clone()))
    }

    fn assign(&self, id: &ParticipantId, channel: &str) -> StoreResult<()> {
        self.records.lock().insert(
            id.as_str().to_string(),
            MembershipRecord {
                channel: channel.to_string(),
            },
        );
        Ok(())
    }

    fn identities(&self) -> StoreResult<Vec<ParticipantId>> {
        Ok(self
            .records
            .lock()
            .keys()
            .map(|key| ParticipantId::from(key.as_str()))
            .collect())
    }
}

/// File-backed backend persisting a single JSON document of
/// `{identity: {"channel": name}}` records.
///
/// Writes go to a temp file in the same directory, are synced, then renamed
/// over the document, so `assign` only returns once the record is durable.
/// The record map stays under one lock, which also serializes concurrent
/// writes to the same key.
pub struct JsonFileBackend {
    path: PathBuf,
    records: Mutex<BTreeMap<String, MembershipRecord>>,
}

impl JsonFileBackend {
    /// Open (or create) the membership document at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let records = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn persist(&self, records: &BTreeMap<String, MembershipRecord>, key: &str) -> StoreResult<()> {
        let write_failed = |source: std::io::Error| StoreError::WriteFailed {
            key: key.to_string(),
            source,
        };

        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| write_failed(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

        let tmp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp).map_err(write_failed)?;
        file.write_all(&json).map_err(write_failed)?;
        file.sync_all().map_err(write_failed)?;
        fs::rename(&tmp, &self.path).map_err(write_failed)?;
        Ok(())
    }
}

impl MembershipBackend for JsonFileBackend {
    fn channel_of(&self, id: &ParticipantId) -> StoreResult<Option<String>> {
        Ok(self
            .records
            .lock()
            .get(id.as_str())
            .map(|record| record.channel.clone()))
    }

    fn assign(&self, id: &ParticipantId, channel: &str) -> StoreResult<()> {
        let mut records = self.records.lock();
        let previous = records.insert(
            id.as_str().to_string(),
            MembershipRecord {
                channel: channel.to_string(),
            },
        );

        if let Err(e) = self.persist(&records, id.as_str()) {
            // The write did not land; keep memory consistent with disk.
            match previous {
                Some(record) => records.insert(id.as_str().to_string(), record),
                None => records.remove(id.as_str()),
            };
            return Err(e);
        }
        Ok(())
    }

    fn identities(&self) -> StoreResult<Vec<ParticipantId>> {
        Ok(self
            .records
            .lock()
            .keys()
            .map(|key| ParticipantId::from(key.as_str()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        let steve = ParticipantId::from("steve");

        assert_eq!(backend.channel_of(&steve).unwrap(), None);
        backend.assign(&steve, "general").unwrap();
        assert_eq!(
            backend.channel_of(&steve).unwrap().as_deref(),
            Some("general")
        );
    }

    #[test]
    fn test_json_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("membership.json");

        {
            let backend = JsonFileBackend::open(&path).unwrap();
            backend.assign(&ParticipantId::from("steve"), "general").unwrap();
            backend.assign(&ParticipantId::from("alex"), "staff").unwrap();
        }

        let reopened = JsonFileBackend::open(&path).unwrap();
        assert_eq!(
            reopened
                .channel_of(&ParticipantId::from("steve"))
                .unwrap()
                .as_deref(),
            Some("general")
        );
        assert_eq!(
            reopened.identities().unwrap(),
            vec![ParticipantId::from("alex"), ParticipantId::from("steve")]
        );
    }

    #[test]
    fn test_json_backend_reassignment_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("membership.json");

        let backend = JsonFileBackend::open(&path).unwrap();
        let steve = ParticipantId::from("steve");
        backend.assign(&steve, "general").unwrap();
        backend.assign(&steve, "staff").unwrap();

        assert_eq!(backend.channel_of(&steve).unwrap().as_deref(), Some("staff"));
        assert_eq!(backend.identities().unwrap().len(), 1);
    }

    #[test]
    fn test_json_backend_rejects_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("membership.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileBackend::open(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_json_backend_failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("membership.json");

        let backend = JsonFileBackend::open(&path).unwrap();
        let steve = ParticipantId::from("steve");
        backend.assign(&steve, "general").unwrap();

        // Drop the containing directory so the temp-file write fails.
        drop(dir);

        assert!(matches!(
            backend.assign(&steve, "staff"),
            Err(StoreError::WriteFailed { .. })
        ));
        assert_eq!(
            backend.channel_of(&steve).unwrap().as_deref(),
            Some("general")
        );
    }
}
