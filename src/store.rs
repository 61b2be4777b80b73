use parking_lot::RwLock;
use shared::models::activity::{Activities, Activity};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
}

/// In-memory activity rosters. Everything is lost on restart.
pub struct ActivityStore {
    activities: RwLock<Activities>,
}

impl ActivityStore {
    pub fn new(activities: Activities) -> Self {
        ActivityStore {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        ActivityStore::new(seed())
    }

    pub fn list(&self) -> Activities {
        self.activities.read().clone()
    }

    pub fn signup(&self, name: &str, email: &str) -> Result<String, StoreError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadySignedUp);
        }

        if activity.is_full() {
            return Err(StoreError::ActivityFull);
        }

        activity.participants.push(email.to_string());

        Ok(format!("Signed up {} for {}", email, name))
    }

    pub fn unregister(&self, name: &str, email: &str) -> Result<String, StoreError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(StoreError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(StoreError::NotRegistered)?;

        activity.participants.remove(position);

        Ok(format!("Unregistered {} from {}", email, name))
    }
}

fn activity(description: &str, schedule: &str, max: i64, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed() -> Activities {
    let mut activities = Activities::new();

    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer Team".to_string(),
        activity(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Team".to_string(),
        activity(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &[],
        ),
    );

    activities
}
