use std::collections::HashSet;

use meeting_mover::samples::random_cases;
use meeting_mover::schedule::{find_meeting_subsets, select_independent_set, Attendee, ConflictGraph};

fn ids(meetings: &[&[i64]]) -> Vec<Vec<Attendee>> {
    meetings
        .iter()
        .map(|m| m.iter().copied().map(Attendee::Id).collect())
        .collect()
}

fn share_attendee(a: &[Attendee], b: &[Attendee]) -> bool {
    let set: HashSet<&Attendee> = a.iter().collect();
    b.iter().any(|x| set.contains(x))
}

#[test]
fn scenario_disjoint_meetings() {
    let (meetings, total) = find_meeting_subsets(&ids(&[&[1, 2], &[3, 4]])).into_parts();
    assert_eq!(meetings, ids(&[&[1, 2], &[3, 4]]));
    assert_eq!(total, 4);
}

#[test]
fn scenario_shared_attendee() {
    let (meetings, total) = find_meeting_subsets(&ids(&[&[1, 2], &[2, 3]])).into_parts();
    assert_eq!(meetings, ids(&[&[1, 2]]));
    assert_eq!(total, 2);
}

#[test]
fn scenario_large_meeting_first() {
    let (meetings, total) = find_meeting_subsets(&ids(&[&[1, 2, 3], &[1], &[2], &[3]])).into_parts();
    assert_eq!(meetings, ids(&[&[1, 2, 3]]));
    assert_eq!(total, 3);
}

#[test]
fn scenario_no_meetings() {
    let (meetings, total) = find_meeting_subsets::<Attendee>(&[]).into_parts();
    assert!(meetings.is_empty());
    assert_eq!(total, 0);
}

#[test]
fn single_meeting_is_always_selected() {
    let selection = find_meeting_subsets(&ids(&[&[4, 5, 6]]));
    assert_eq!(selection.meetings, ids(&[&[4, 5, 6]]));
    assert_eq!(selection.total_attendees, 3);
}

#[test]
fn random_selections_hold_invariants() {
    for (seed, population) in [(1u64, 8i64), (2, 15), (3, 40), (4, 3)] {
        for case in random_cases(20, 15, 5, population, seed) {
            let selection = find_meeting_subsets(&case);

            // No two selected meetings share an attendee
            for (i, a) in selection.meetings.iter().enumerate() {
                for b in selection.meetings.iter().skip(i + 1) {
                    assert!(!share_attendee(a, b), "conflict between {:?} and {:?}", a, b);
                }
            }

            // Total is the sum of selected meeting lengths
            let sum: usize = selection.meetings.iter().map(Vec::len).sum();
            assert_eq!(selection.total_attendees, sum);

            // Every index is either selected or excluded, never both
            let selected: HashSet<usize> = selection.selected_indices.iter().copied().collect();
            let excluded: HashSet<usize> = selection.excluded_indices.iter().copied().collect();
            assert!(selected.is_disjoint(&excluded));
            assert_eq!(selected.len() + excluded.len(), case.len());
            assert_eq!(selection.selected_indices.len(), selected.len());
            assert_eq!(selection.excluded_indices.len(), excluded.len());

            // Selected meetings are the input meetings at the selected indices
            for (meeting, &index) in selection.meetings.iter().zip(&selection.selected_indices) {
                assert_eq!(meeting, &case[index]);
            }

            // Every excluded meeting clashes with something that was selected
            for &index in &selection.excluded_indices {
                assert!(selection.meetings.iter().any(|m| share_attendee(m, &case[index])));
            }
        }
    }
}

#[test]
fn disjoint_input_keeps_everything() {
    let case: Vec<Vec<Attendee>> = (0..10)
        .map(|i| (0..(i % 4)).map(|k| Attendee::Id(i * 100 + k)).collect())
        .collect();
    let selection = find_meeting_subsets(&case);
    assert_eq!(selection.meetings.len(), case.len());
    assert_eq!(selection.total_attendees, case.iter().map(Vec::len).sum::<usize>());
    assert!(selection.excluded_indices.is_empty());
}

#[test]
fn selection_order_is_by_weight_then_index() {
    let case = ids(&[&[1], &[2, 3], &[4], &[5, 6, 7], &[8, 9]]);
    let selection = find_meeting_subsets(&case);
    assert_eq!(selection.selected_indices, vec![3, 1, 4, 0, 2]);
}

#[test]
fn conflict_graph_matches_pairwise_overlap() {
    for case in random_cases(10, 12, 4, 10, 99) {
        let graph = ConflictGraph::build(&case);
        assert_eq!(graph.len(), case.len());
        for i in 0..case.len() {
            assert!(!graph.conflicts(i, i));
            for j in 0..case.len() {
                if i != j {
                    assert_eq!(graph.conflicts(i, j), share_attendee(&case[i], &case[j]));
                    assert_eq!(graph.conflicts(i, j), graph.conflicts(j, i));
                }
            }
        }
    }
}

#[test]
fn selector_accepts_custom_weights() {
    // Weights need not be attendee counts
    let graph = ConflictGraph::build(&ids(&[&[1, 2, 3], &[3, 4]]));
    let outcome = select_independent_set(&graph, &[1, 10]);
    assert_eq!(outcome.selected, vec![1]);
    assert_eq!(outcome.excluded, vec![0]);
    assert_eq!(outcome.total_weight, 10);
}
