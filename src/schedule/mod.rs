pub mod types;
pub mod conflict;
pub mod greedy;
pub mod meetings;

pub use types::{Attendee, GreedyOutcome, Meeting, MeetingSelection};
pub use conflict::ConflictGraph;
pub use greedy::select_independent_set;
pub use meetings::find_meeting_subsets;
