use std::fmt;
use serde::{Serialize, Deserialize};

/// An attendee identifier as it appears in meeting files: either a numeric id or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attendee {
    Id(i64),
    Name(String),
}

impl Attendee {
    /// Parses a raw field, keeping it as a name when it isn't an integer
    pub fn parse(raw: &str) -> Attendee {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => Attendee::Id(id),
            Err(_) => Attendee::Name(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Attendee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attendee::Id(id) => write!(f, "{}", id),
            Attendee::Name(name) => write!(f, "'{}'", name),
        }
    }
}

impl From<i64> for Attendee {
    fn from(id: i64) -> Self {
        Attendee::Id(id)
    }
}

impl From<&str> for Attendee {
    fn from(name: &str) -> Self {
        Attendee::Name(name.to_string())
    }
}

/// A meeting is the ordered list of its attendees
pub type Meeting<A = Attendee> = Vec<A>;

/// Index-level result of the greedy selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyOutcome {
    pub selected: Vec<usize>, // in selection order
    pub excluded: Vec<usize>, // in elimination order
    pub total_weight: usize,
}

/// Selected meetings in selection order plus their total attendee count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSelection<A = Attendee> {
    pub meetings: Vec<Meeting<A>>,
    pub total_attendees: usize,
    pub selected_indices: Vec<usize>,
    pub excluded_indices: Vec<usize>,
}

impl<A> MeetingSelection<A> {
    /// Splits the selection into the `(meetings, total)` pair
    pub fn into_parts(self) -> (Vec<Meeting<A>>, usize) {
        (self.meetings, self.total_attendees)
    }
}
