// ============================
// crates/backend-lib/src/store/capabilities.rs
// ============================
//! Capability registry.
use crate::error::AppError;
use crate::store::users::UserRecord;
use capabilities_common::{CapabilityRecord, Role};
use dashmap::DashMap;
use std::collections::BTreeMap;

/// In-memory registry of capabilities and their practitioner rosters.
///
/// Membership mutation happens under the map's per-entry lock, so the
/// check-then-insert of `register` is atomic; two concurrent registrations of
/// the same (capability, email) pair cannot both succeed.
pub struct CapabilityRegistry {
    capabilities: DashMap<String, CapabilityRecord>,
}

impl CapabilityRegistry {
    /// Build a registry from seeded records
    pub fn from_records(records: BTreeMap<String, CapabilityRecord>) -> Self {
        let capabilities = DashMap::new();
        for (name, record) in records {
            capabilities.insert(name, record);
        }
        Self { capabilities }
    }

    /// Read-only snapshot of the full registry.
    ///
    /// The snapshot is a copy; it does not track mutations made after it was
    /// taken.
    pub fn snapshot(&self) -> BTreeMap<String, CapabilityRecord> {
        self.capabilities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Register `email` as a practitioner of the named capability.
    ///
    /// Consultants may only register themselves; Admins and Approvers may
    /// register anyone. Duplicate registration is rejected, not a no-op, so
    /// callers see the conflict.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        requester: &UserRecord,
    ) -> Result<(), AppError> {
        if requester.role == Role::Consultant && requester.email != email {
            return Err(AppError::Forbidden(
                "Consultants can only register themselves".to_string(),
            ));
        }

        let mut capability = self
            .capabilities
            .get_mut(name)
            .ok_or(AppError::CapabilityNotFound)?;

        if !capability.consultants.insert(email.to_string()) {
            return Err(AppError::AlreadyRegistered);
        }

        Ok(())
    }

    /// Remove `email` from the named capability's roster.
    ///
    /// Role policy (Admin/Approver only) is enforced at the request boundary
    /// before this is called; there is no self-service unregistration path.
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), AppError> {
        let mut capability = self
            .capabilities
            .get_mut(name)
            .ok_or(AppError::CapabilityNotFound)?;

        if !capability.consultants.remove(email) {
            return Err(AppError::NotRegistered);
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
