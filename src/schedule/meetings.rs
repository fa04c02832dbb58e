use std::hash::Hash;
use tracing::debug;
use super::conflict::ConflictGraph;
use super::greedy::select_independent_set;
use super::types::MeetingSelection;

/// Picks a conflict-free subset of meetings that approximately maximizes the total attendee count.
///
/// This is a maximum weight independent set problem: meetings are nodes, shared
/// attendees are edges and a meeting weighs as many attendees as it lists
/// (duplicates included). The exact problem is NP-hard, so the result comes from
/// the greedy selector and is an approximation.
pub fn find_meeting_subsets<A>(meetings: &[Vec<A>]) -> MeetingSelection<A>
where
    A: Eq + Hash + Clone,
{
    let graph = ConflictGraph::build(meetings);
    let weights: Vec<usize> = meetings.iter().map(Vec::len).collect();
    let outcome = select_independent_set(&graph, &weights);

    debug!(
        "Selected {} of {} meetings, {} attendees",
        outcome.selected.len(),
        meetings.len(),
        outcome.total_weight
    );

    MeetingSelection {
        meetings: outcome.selected.iter().map(|&i| meetings[i].clone()).collect(),
        total_attendees: outcome.total_weight,
        selected_indices: outcome.selected,
        excluded_indices: outcome.excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::Attendee;

    #[test]
    fn disjoint_meetings_are_all_kept() {
        let (meetings, total) = find_meeting_subsets(&[vec![1, 2], vec![3, 4]]).into_parts();
        assert_eq!(meetings, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(total, 4);
    }

    #[test]
    fn shared_attendee_keeps_one() {
        let (meetings, total) = find_meeting_subsets(&[vec![1, 2], vec![2, 3]]).into_parts();
        assert_eq!(meetings, vec![vec![1, 2]]);
        assert_eq!(total, 2);
    }

    #[test]
    fn duplicates_count_towards_weight() {
        let selection = find_meeting_subsets(&[vec![1, 1, 1], vec![1, 2]]);
        assert_eq!(selection.meetings, vec![vec![1, 1, 1]]);
        assert_eq!(selection.total_attendees, 3);
        assert_eq!(selection.excluded_indices, vec![1]);
    }

    #[test]
    fn named_attendees_are_compared_by_value() {
        let meetings = vec![
            vec![Attendee::from("ann"), Attendee::from("bob")],
            vec![Attendee::from("bob")],
            vec![Attendee::Id(1)],
            vec![Attendee::from("1")],
        ];
        let selection = find_meeting_subsets(&meetings);
        assert_eq!(selection.selected_indices, vec![0, 2, 3]);
        assert_eq!(selection.total_attendees, 4);
    }
}
