//! Greedy nearest-neighbour route planner.
//!
//! Starting from the current position, repeatedly append the closest
//! not-yet-visited candidate to the end of the route. O(n^2) in the number of
//! candidates; no spatial index and no improvement pass afterwards.

use std::collections::HashSet;

use crate::haversine::Haversine;
use crate::traits::{DistanceMetric, Waypoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// First candidate in input order wins an exact distance tie.
    #[default]
    ScanOrder,
    /// Lexicographically smallest id wins an exact distance tie.
    ByName,
}

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub tie_break: TieBreak,
}

/// Why route construction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every distinct candidate was placed.
    Complete,
    /// A full scan found nothing selectable (duplicate ids, NaN distances).
    /// The route holds whatever was placed before that scan.
    NoProgress,
}

#[derive(Debug, Clone)]
pub struct Route<P> {
    pub waypoints: Vec<P>,
    pub termination: Termination,
}

impl<P: Waypoint> Route<P> {
    /// Number of candidates placed after the starting position.
    pub fn placed(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Complete
    }

    pub fn into_waypoints(self) -> Vec<P> {
        self.waypoints
    }

    /// Sum of leg distances along the route.
    pub fn total_distance<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.waypoints
            .windows(2)
            .map(|leg| metric.distance(leg[0].location(), leg[1].location()))
            .sum()
    }
}

/// Shorthand for [`plan_with`] using haversine distances and default options.
pub fn plan<P>(current: &P, candidates: &[P]) -> Vec<P>
where
    P: Waypoint + Clone,
{
    plan_with(current, candidates, &Haversine, &PlanOptions::default()).into_waypoints()
}

/// Sequence `candidates` greedily, starting from `current`.
///
/// `current` is always the first waypoint and its id counts as visited, so a
/// candidate sharing that id is never placed. Each step appends the unvisited
/// candidate closest (under `metric`) to the last waypoint of the route; exact
/// ties are settled by `options.tie_break`. Construction ends with
/// [`Termination::Complete`] once `1 + candidates.len()` ids are visited, or
/// with [`Termination::NoProgress`] when a full scan finds nothing selectable
/// (ids repeated among candidates, NaN or infinite distances). The route never
/// holds more than `1 + candidates.len()` waypoints and never repeats an id.
pub fn plan_with<P, M>(current: &P, candidates: &[P], metric: &M, options: &PlanOptions) -> Route<P>
where
    P: Waypoint + Clone,
    M: DistanceMetric,
{
    let mut visited: HashSet<&P::Id> = HashSet::with_capacity(candidates.len() + 1);
    let mut route: Vec<P> = Vec::with_capacity(candidates.len() + 1);

    visited.insert(current.id());
    route.push(current.clone());
    let target = candidates.len() + 1;

    while visited.len() < target {
        let last = route[route.len() - 1].location();

        match nearest_unvisited(last, candidates, &visited, metric, options.tie_break) {
            Some(index) => {
                let next = &candidates[index];
                visited.insert(next.id());
                route.push(next.clone());
            }
            None => {
                tracing::debug!(
                    placed = route.len() - 1,
                    candidates = candidates.len(),
                    "no selectable candidate left; stopping early"
                );
                return Route {
                    waypoints: route,
                    termination: Termination::NoProgress,
                };
            }
        }
    }

    Route {
        waypoints: route,
        termination: Termination::Complete,
    }
}

/// Index of the unvisited candidate closest to `from`, if any can be chosen.
///
/// Uses strict `<`, so a NaN distance is never selected.
fn nearest_unvisited<P, M>(
    from: (f64, f64),
    candidates: &[P],
    visited: &HashSet<&P::Id>,
    metric: &M,
    tie_break: TieBreak,
) -> Option<usize>
where
    P: Waypoint,
    M: DistanceMetric,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if visited.contains(candidate.id()) {
            continue;
        }

        let distance = metric.distance(from, candidate.location());
        let better = match best {
            None => distance < f64::INFINITY,
            Some((best_index, best_distance)) => {
                distance < best_distance
                    || (tie_break == TieBreak::ByName
                        && distance == best_distance
                        && candidate.id() < candidates[best_index].id())
            }
        };

        if better {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}
