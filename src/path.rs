// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shortest-path queries over a road graph
//!
//! Both searches return `None` when no path exists, including when either
//! endpoint is not in the graph. A query from a city to itself is the
//! single-city route with zero cost.

use crate::graph::RoadGraph;
use crate::types::{Mode, Route, Weight};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// Run the search selected by `mode`
#[must_use]
pub fn shortest_path(graph: &RoadGraph, start: &str, end: &str, mode: Mode) -> Option<Route> {
    let route = match mode {
        Mode::Weighted => dijkstra(graph, start, end),
        Mode::Hops => bfs(graph, start, end),
    };
    tracing::debug!(%mode, start, end, found = route.is_some(), "shortest path query");
    route
}

/// Minimum total weight path (Dijkstra).
///
/// Cities are finished at most once; stale heap entries left behind by a
/// later relaxation are skipped when popped. The search stops as soon as
/// `end` is popped. Ties between equal-cost paths follow heap order.
#[must_use]
pub fn dijkstra(graph: &RoadGraph, start: &str, end: &str) -> Option<Route> {
    if let Some(route) = trivial(graph, start, end) {
        return route;
    }

    let mut dist: HashMap<&str, Weight> = HashMap::new();
    let mut pred: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: BinaryHeap<Reverse<(Weight, &str)>> = BinaryHeap::new();

    dist.insert(start, 0);
    queue.push(Reverse((0, start)));

    while let Some(Reverse((city_dist, city))) = queue.pop() {
        if !visited.insert(city) {
            continue;
        }
        if city == end {
            break;
        }

        for link in graph.neighbors(city).unwrap_or_default() {
            let next = link.city.as_str();
            if visited.contains(next) {
                continue;
            }

            let next_dist = city_dist.saturating_add(link.weight);
            if dist.get(next).map_or(true, |&known| next_dist < known) {
                dist.insert(next, next_dist);
                pred.insert(next, city);
                queue.push(Reverse((next_dist, next)));
            }
        }
    }

    let cost = *dist.get(end)?;
    Some(Route {
        path: walk_back(&pred, start, end),
        cost,
    })
}

/// Fewest-roads path (breadth-first).
///
/// Cities are marked when first enqueued, and the search returns the moment
/// `end` is discovered. The reported cost is the summed weight of the roads
/// on that path, which is not necessarily the lightest route between the
/// two cities. Among parallel roads, the first one listed is taken.
#[must_use]
pub fn bfs(graph: &RoadGraph, start: &str, end: &str) -> Option<Route> {
    if let Some(route) = trivial(graph, start, end) {
        return route;
    }

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut pred: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<(&str, Weight)> = VecDeque::from([(start, 0)]);

    while let Some((city, city_cost)) = queue.pop_front() {
        for link in graph.neighbors(city).unwrap_or_default() {
            let next = link.city.as_str();
            if !visited.insert(next) {
                continue;
            }

            pred.insert(next, city);
            let next_cost = city_cost.saturating_add(link.weight);
            if next == end {
                return Some(Route {
                    path: walk_back(&pred, start, end),
                    cost: next_cost,
                });
            }
            queue.push_back((next, next_cost));
        }
    }

    None
}

/// Resolve the cases both searches answer without searching: a missing
/// endpoint (no path) and `start == end`.
#[allow(clippy::option_option)]
fn trivial(graph: &RoadGraph, start: &str, end: &str) -> Option<Option<Route>> {
    if !graph.contains(start) || !graph.contains(end) {
        return Some(None);
    }
    if start == end {
        return Some(Some(Route {
            path: vec![start.to_owned()],
            cost: 0,
        }));
    }
    None
}

/// Follow predecessor links from `end` back to `start`
fn walk_back(pred: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_owned()];
    let mut city = end;
    while city != start {
        match pred.get(city) {
            Some(&prev) => {
                path.push(prev.to_owned());
                city = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
