//! In-process stand-in for the activities API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    api::activity::MessageResponse,
    models::activity::{Activities, Activity},
};
use tokio::sync::Notify;

use crate::api::{ActivitiesApi, SignupReply};
use crate::error::ApiError;

pub fn sample_activities() -> Activities {
    let mut activities = Activities::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    activities.insert(
        "Math Club".to_string(),
        Activity {
            description: "Solve challenging problems".to_string(),
            schedule: "Tuesdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 10,
            participants: vec![],
        },
    );
    activities.insert(
        "Overbooked".to_string(),
        Activity {
            description: "More students than seats".to_string(),
            schedule: "Never".to_string(),
            max_participants: 1,
            participants: vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()],
        },
    );

    activities
}

#[derive(Clone)]
enum SignupBehavior {
    Reply(SignupReply),
    Fail,
}

pub struct FakeApi {
    activities: Option<Activities>,
    signup: SignupBehavior,
    gate: Option<Arc<Notify>>,
    activities_calls: AtomicUsize,
    signups: Mutex<Vec<(String, String)>>,
}

impl FakeApi {
    pub fn with_activities(activities: Activities) -> Self {
        FakeApi {
            activities: Some(activities),
            signup: SignupBehavior::Fail,
            gate: None,
            activities_calls: AtomicUsize::new(0),
            signups: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_activities() -> Self {
        FakeApi {
            activities: None,
            ..FakeApi::with_activities(Activities::new())
        }
    }

    pub fn accepting(mut self, message: &str) -> Self {
        self.signup = SignupBehavior::Reply(SignupReply::Accepted(MessageResponse {
            message: message.to_string(),
        }));
        self
    }

    pub fn rejecting(mut self, status: u16, detail: Option<&str>) -> Self {
        self.signup = SignupBehavior::Reply(SignupReply::Rejected {
            status,
            detail: detail.map(str::to_string),
        });
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.signup = SignupBehavior::Fail;
        self
    }

    /// Signups block until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn activities_calls(&self) -> usize {
        self.activities_calls.load(Ordering::SeqCst)
    }

    pub fn signups(&self) -> Vec<(String, String)> {
        self.signups.lock().clone()
    }
}

#[async_trait]
impl ActivitiesApi for FakeApi {
    async fn activities(&self) -> Result<Activities, ApiError> {
        self.activities_calls.fetch_add(1, Ordering::SeqCst);

        self.activities.clone().ok_or(ApiError::Status(500))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply, ApiError> {
        self.signups
            .lock()
            .push((activity.to_string(), email.to_string()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.signup {
            SignupBehavior::Reply(reply) => Ok(reply.clone()),
            SignupBehavior::Fail => Err(ApiError::Status(599)),
        }
    }
}

/// Lets spawned tasks run to their next suspension point.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
