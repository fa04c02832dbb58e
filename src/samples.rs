use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::parser::TestCase;
use crate::schedule::Attendee;

/// A built-in test case with a short description
#[derive(Debug, Clone, Serialize)]
pub struct SampleCase {
    pub name: &'static str,
    pub meetings: TestCase,
}

fn ids(meetings: &[&[i64]]) -> TestCase {
    meetings
        .iter()
        .map(|meeting| meeting.iter().copied().map(Attendee::Id).collect())
        .collect()
}

fn names(meetings: &[&[&str]]) -> TestCase {
    meetings
        .iter()
        .map(|meeting| meeting.iter().copied().map(Attendee::from).collect())
        .collect()
}

/// The sample cases run when no input file is given
pub fn sample_cases() -> Vec<SampleCase> {
    vec![
        SampleCase { name: "disjoint", meetings: ids(&[&[1, 2], &[3, 4]]) },
        SampleCase { name: "shared attendee", meetings: ids(&[&[1, 2], &[2, 3]]) },
        SampleCase { name: "large meeting first", meetings: ids(&[&[1, 2, 3], &[1], &[2], &[3]]) },
        SampleCase { name: "empty", meetings: Vec::new() },
        SampleCase {
            name: "chain",
            meetings: ids(&[&[1, 2], &[2, 3, 4], &[4, 5], &[5, 6, 7, 8], &[9]]),
        },
        SampleCase {
            name: "team meetings",
            meetings: names(&[
                &["ann", "bob", "cid"],
                &["dee", "eve"],
                &["bob", "dee"],
                &["fay"],
                &[],
            ]),
        },
    ]
}

/// Generates random test cases; the same seed always yields the same cases
///
/// Meetings have 0 to `max_attendees` attendees drawn from ids `1..=population`,
/// so smaller populations produce denser conflicts.
pub fn random_cases(
    count: usize,
    meetings_per_case: usize,
    max_attendees: usize,
    population: i64,
    seed: u64,
) -> Vec<TestCase> {
    let mut rng = StdRng::seed_from_u64(seed);
    let population = population.max(1);

    (0..count)
        .map(|_| {
            (0..meetings_per_case)
                .map(|_| {
                    let size = rng.gen_range(0..=max_attendees);
                    (0..size)
                        .map(|_| Attendee::Id(rng.gen_range(1..=population)))
                        .collect()
                })
                .collect()
        })
        .collect()
}
