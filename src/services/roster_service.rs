use std::collections::HashMap;

use crate::models::Activity;
use crate::store::{ActivityStore, RosterError};

/// Current state of the whole catalog, name -> activity.
pub fn list_activities(store: &ActivityStore) -> HashMap<String, Activity> {
    store.snapshot()
}

/// Register `email` for the named activity. The confirmation message
/// embeds both, matching what the frontend displays.
pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    store.sign_up(activity_name, email)?;
    tracing::info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from the named activity's roster.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    store.unregister(activity_name, email)?;
    tracing::info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_message_names_email_and_activity() {
        let store = ActivityStore::with_seed();
        let message = sign_up(&store, "Chess Club", "test@mergington.edu")
            .expect("signup should succeed");
        assert!(message.contains("test@mergington.edu"));
        assert!(message.contains("Chess Club"));
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let store = ActivityStore::with_seed();
        let message = unregister(&store, "Soccer Team", "alex@mergington.edu")
            .expect("alex is seeded into Soccer Team");
        assert!(message.contains("alex@mergington.edu"));
        assert!(message.contains("Soccer Team"));
    }

    #[test]
    fn store_errors_pass_through_unchanged() {
        let store = ActivityStore::with_seed();
        assert_eq!(
            sign_up(&store, "NonExistentActivity", "test@mergington.edu"),
            Err(RosterError::ActivityNotFound)
        );
        assert_eq!(
            unregister(&store, "Soccer Team", "ghost@mergington.edu"),
            Err(RosterError::NotRegistered)
        );
    }

    #[test]
    fn list_reflects_mutations() {
        let store = ActivityStore::with_seed();
        sign_up(&store, "Art Club", "painter@mergington.edu").expect("signup");

        let listed = list_activities(&store);
        assert!(listed["Art Club"]
            .participants
            .iter()
            .any(|p| p == "painter@mergington.edu"));
    }
}
