use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Undirected conflict graph over meeting indices.
///
/// Node `i` is the meeting at position `i` of the input list; an edge joins two
/// meetings that share at least one attendee. The relation is symmetric and has
/// no self-loops. Each adjacency list is sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ConflictGraph {
    /// Builds the graph by testing every pair `i < j` for a shared attendee
    pub fn build<A>(meetings: &[Vec<A>]) -> ConflictGraph
    where
        A: Eq + Hash,
    {
        let n = meetings.len();

        // Attendee sets are computed once; each meeting takes part in n - 1 checks
        let attendee_sets: Vec<HashSet<&A>> = meetings
            .iter()
            .map(|meeting| meeting.iter().collect())
            .collect();

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if share_attendee(&meetings[i], &attendee_sets[j]) {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }

        let graph = ConflictGraph { adjacency };
        debug!("Built conflict graph: {} meetings, {} conflicts", n, graph.edge_count());
        graph
    }

    /// Number of meetings (nodes)
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Meetings conflicting with `index`, ascending. Empty for out-of-range indices.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// True if meetings `a` and `b` share an attendee
    pub fn conflicts(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

fn share_attendee<A: Eq + Hash>(meeting: &[A], other: &HashSet<&A>) -> bool {
    meeting.iter().any(|attendee| other.contains(attendee))
}
