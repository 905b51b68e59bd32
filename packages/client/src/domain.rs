//! Domain model of the activity board.
//!
//! An `ActivityCollection` is built fresh from every `GET /activities`
//! response and replaced wholesale; nothing here is cached or merged.

use activity_board_shared::dto::{ActivitiesResponse, ActivityDetailsDto};

/// A schedulable offering with a capacity and a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Participant emails in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, recomputed on every call.
    ///
    /// Negative when the server reports more participants than capacity.
    /// Saturates at `i64::MIN` instead of overflowing.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

/// Activities keyed by name, in server response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activity names in render order
    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

// ========================================
// DTO → Domain
// ========================================

impl Activity {
    fn from_dto(name: String, dto: ActivityDetailsDto) -> Self {
        Self {
            name,
            description: dto.description,
            schedule: dto.schedule,
            max_participants: dto.max_participants,
            participants: dto.participants,
        }
    }
}

impl From<ActivitiesResponse> for ActivityCollection {
    fn from(response: ActivitiesResponse) -> Self {
        Self::new(
            response
                .entries
                .into_iter()
                .map(|(name, details)| Activity::from_dto(name, details))
                .collect(),
        )
    }
}
