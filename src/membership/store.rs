//! Persisted channel membership.

use std::sync::Arc;

use tracing::debug;

use crate::common::error::StoreResult;
use crate::common::types::ParticipantId;

/// Key-value persistence collaborator behind the membership store.
///
/// Implementations must serialize concurrent writes to the same key and must
/// not report success from [`assign`](Self::assign) before the record is
/// durable.
pub trait MembershipBackend: Send + Sync {
    /// The channel name recorded for an identity, if any.
    fn channel_of(&self, id: &ParticipantId) -> StoreResult<Option<String>>;

    /// Record an assignment. Durable once this returns `Ok`.
    fn assign(&self, id: &ParticipantId, channel: &str) -> StoreResult<()>;

    /// Every identity with a persisted record, online or not.
    fn identities(&self) -> StoreResult<Vec<ParticipantId>>;
}

/// Thin typed interface over the persistence collaborator.
///
/// One active record per participant; records are created on first
/// assignment and kept for the participant's record lifetime. The default
/// channel fallback for absent records lives in the registry, not here.
pub struct MembershipStore {
    backend: Arc<dyn MembershipBackend>,
}

impl MembershipStore {
    pub fn new(backend: Arc<dyn MembershipBackend>) -> Self {
        Self { backend }
    }

    /// The assigned channel name for a participant, if a record exists.
    pub fn get(&self, id: &ParticipantId) -> StoreResult<Option<String>> {
        self.backend.channel_of(id)
    }

    /// Assign a participant to a channel.
    ///
    /// Returns once the write is durable; a failure means the previous
    /// assignment still stands.
    pub fn set(&self, id: &ParticipantId, channel: &str) -> StoreResult<()> {
        self.backend.assign(id, channel)?;
        debug!(participant = %id, channel, "Membership updated");
        Ok(())
    }

    /// Every identity with a persisted record.
    pub fn known_identities(&self) -> StoreResult<Vec<ParticipantId>> {
        self.backend.identities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::backend::MemoryBackend;

    #[test]
    fn test_set_then_get_round_trip() {
        let store = MembershipStore::new(Arc::new(MemoryBackend::new()));
        let steve = ParticipantId::from("steve");

        assert_eq!(store.get(&steve).unwrap(), None);

        store.set(&steve, "general").unwrap();
        assert_eq!(store.get(&steve).unwrap().as_deref(), Some("general"));

        store.set(&steve, "staff").unwrap();
        assert_eq!(store.get(&steve).unwrap().as_deref(), Some("staff"));
    }

    #[test]
    fn test_known_identities_includes_every_record() {
        let store = MembershipStore::new(Arc::new(MemoryBackend::new()));
        store.set(&ParticipantId::from("alex"), "staff").unwrap();
        store.set(&ParticipantId::from("steve"), "general").unwrap();

        let ids = store.known_identities().unwrap();
        assert_eq!(
            ids,
            vec![ParticipantId::from("alex"), ParticipantId::from("steve")]
        );
    }
}
