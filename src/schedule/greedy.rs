use std::collections::BTreeSet;
use tracing::debug;
use super::conflict::ConflictGraph;
use super::types::GreedyOutcome;

/// Greedy maximum-weight independent set over the conflict graph.
///
/// Repeatedly takes the available meeting with the highest weight, ties going to
/// the lowest index, then drops every still-available neighbor of it. Dropped
/// meetings are never reconsidered. Weights missing from `weights` count as 0.
pub fn select_independent_set(graph: &ConflictGraph, weights: &[usize]) -> GreedyOutcome {
    let weight_of = |index: usize| weights.get(index).copied().unwrap_or(0);

    let mut available: BTreeSet<usize> = (0..graph.len()).collect();
    let mut selected = Vec::new();
    let mut excluded = Vec::new();
    let mut total_weight = 0;

    while let Some(chosen) = pick_heaviest(&available, weight_of) {
        available.remove(&chosen);
        selected.push(chosen);
        total_weight += weight_of(chosen);

        for &neighbor in graph.neighbors(chosen) {
            if available.remove(&neighbor) {
                excluded.push(neighbor);
            }
        }
        debug!("Picked meeting {} (weight {}), {} still available", chosen, weight_of(chosen), available.len());
    }

    GreedyOutcome {
        selected,
        excluded,
        total_weight,
    }
}

/// Highest weight first, lowest index among equals
fn pick_heaviest<F>(available: &BTreeSet<usize>, weight_of: F) -> Option<usize>
where
    F: Fn(usize) -> usize,
{
    let mut best: Option<(usize, usize)> = None; // (index, weight)
    for &index in available {
        let weight = weight_of(index);
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((index, weight)),
        }
    }
    best.map(|(index, _)| index)
}
