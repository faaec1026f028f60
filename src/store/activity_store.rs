use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::models::{seed_activities, Activity};

pub type SharedActivityStore = Arc<ActivityStore>;

/// Why a roster mutation was refused. Display strings double as the
/// `detail` messages the API returns to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
}

/// The process-wide activity table.
///
/// Owned and constructor-provided rather than an ambient global, so tests
/// build their own instance instead of save/restoring shared state. Each
/// mutation holds the write lock across its precondition checks, so a
/// failed precondition never leaves a partial update behind and concurrent
/// calls cannot lose appends.
pub struct ActivityStore {
    activities: RwLock<HashMap<String, Activity>>,
}

impl ActivityStore {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Table initialized from the seed catalog.
    pub fn with_seed() -> Self {
        Self::new(seed_activities())
    }

    /// Clone of the full table as of this call.
    pub fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities
            .read()
            .expect("activity table lock poisoned")
            .clone()
    }

    /// Append `email` to the activity's roster.
    ///
    /// Checked in order: the activity must exist, the email must not be
    /// registered yet, and the roster must have free capacity.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut table = self
            .activities
            .write()
            .expect("activity table lock poisoned");
        let activity = table
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if activity.participants.len() >= activity.max_participants {
            return Err(RosterError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's roster, keeping the order of the
    /// remaining participants.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut table = self
            .activities
            .write()
            .expect("activity table lock poisoned");
        let activity = table
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}
