//! Conflict-free meeting selection.
//!
//! Meetings that share an attendee conflict. [`find_meeting_subsets`] builds the
//! conflict graph and greedily keeps the largest meetings that don't clash, an
//! approximation of the maximum weight independent set.

pub mod parser;
pub mod schedule;
pub mod samples;
pub mod display;
pub mod web;

pub use schedule::{find_meeting_subsets, Attendee, ConflictGraph, MeetingSelection};
