// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the road graph
//!
//! These tests verify critical invariants:
//! 1. Symmetry - every adjacency entry has its mirror
//! 2. Cascade - removing a city leaves no entry naming it
//! 3. Query contracts - trivial and unreachable cases
//! 4. Snapshot fidelity - data survives round-trips

use proptest::prelude::*;
use roadgraph::graph::RoadGraph;
use roadgraph::path::{bfs, dijkstra, shortest_path};
use roadgraph::snapshot;
use roadgraph::types::{Link, Mode, Weight};
use std::collections::HashMap;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Count of (from, to, weight) entries, for comparing multisets
fn entry_counts(graph: &RoadGraph) -> HashMap<(String, String, Weight), usize> {
    let mut counts = HashMap::new();
    for (city, links) in graph.adjacency() {
        for link in links {
            *counts
                .entry((city.clone(), link.city.clone(), link.weight))
                .or_insert(0) += 1;
        }
    }
    counts
}

fn assert_symmetric(graph: &RoadGraph) {
    let counts = entry_counts(graph);
    for ((from, to, weight), n) in &counts {
        let mirror = counts
            .get(&(to.clone(), from.clone(), *weight))
            .copied()
            .unwrap_or(0);
        assert_eq!(*n, mirror, "{from} -> {to} ({weight}) has no mirror");
    }
}

fn sample_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_road("A", "B", 4);
    graph.add_road("B", "C", 1);
    graph.add_road("A", "C", 2);
    graph.add_road("C", "D", 5);
    graph
}

#[derive(Debug, Clone)]
enum Op {
    AddCity(String),
    AddRoad(String, String, Weight),
    RemoveCity(String),
    RemoveRoad(String, String),
}

fn city() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "E", "F"]).prop_map(String::from)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => city().prop_map(Op::AddCity),
        4 => (city(), city(), 0u64..20).prop_map(|(a, b, w)| Op::AddRoad(a, b, w)),
        1 => city().prop_map(Op::RemoveCity),
        1 => (city(), city()).prop_map(|(a, b)| Op::RemoveRoad(a, b)),
    ]
}

fn build(ops: &[Op]) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for op in ops {
        match op {
            Op::AddCity(c) => {
                graph.add_city(c);
            }
            Op::AddRoad(a, b, w) => graph.add_road(a, b, *w),
            Op::RemoveCity(c) => {
                graph.remove_city(c);
            }
            Op::RemoveRoad(a, b) => {
                let _ = graph.remove_road(a, b);
            }
        }
    }
    graph
}

// =============================================================================
// Store Invariants
// =============================================================================

#[test]
fn test_add_road_stores_both_directions() {
    let mut graph = RoadGraph::new();
    graph.add_road("Porto", "Braga", 6);

    assert!(graph.neighbors("Porto").unwrap().contains(&Link::new("Braga", 6)));
    assert!(graph.neighbors("Braga").unwrap().contains(&Link::new("Porto", 6)));
}

#[test]
fn test_remove_road_clears_every_parallel_road() {
    let mut graph = RoadGraph::new();
    graph.add_road("Porto", "Braga", 6);
    graph.add_road("Braga", "Porto", 2);
    graph.add_road("Porto", "Braga", 6);

    assert_eq!(graph.remove_road("Porto", "Braga").unwrap(), 3);

    assert!(graph.neighbors("Porto").unwrap().is_empty());
    assert!(graph.neighbors("Braga").unwrap().is_empty());
}

#[test]
fn test_remove_city_leaves_no_references() {
    let mut graph = sample_graph();
    graph.add_road("C", "C", 3);

    graph.remove_city("C");

    assert!(!graph.cities().any(|c| c == "C"));
    for links in graph.adjacency().values() {
        assert!(links.iter().all(|l| l.city != "C"));
    }
    assert_symmetric(&graph);
}

// =============================================================================
// Query Contracts
// =============================================================================

#[test]
fn test_weighted_example() {
    let route = shortest_path(&sample_graph(), "A", "D", Mode::Weighted).unwrap();

    assert_eq!(route.path, vec!["A", "C", "D"]);
    assert_eq!(route.cost, 7);
}

#[test]
fn test_hop_example() {
    let route = shortest_path(&sample_graph(), "A", "D", Mode::Hops).unwrap();

    assert_eq!(route.path, vec!["A", "C", "D"]);
    assert_eq!(route.cost, 7);
    assert_eq!(route.hops(), 2);
}

#[test]
fn test_hops_prefer_fewer_roads_over_weight() {
    // Heavy direct road against a light three-road detour
    let mut graph = RoadGraph::new();
    graph.add_road("A", "B", 1);
    graph.add_road("B", "C", 1);
    graph.add_road("C", "D", 1);
    graph.add_road("A", "D", 100);

    let hops = shortest_path(&graph, "A", "D", Mode::Hops).unwrap();
    let weighted = shortest_path(&graph, "A", "D", Mode::Weighted).unwrap();

    assert_eq!(hops.path, vec!["A", "D"]);
    assert_eq!(hops.cost, 100);
    assert_eq!(weighted.path, vec!["A", "B", "C", "D"]);
    assert_eq!(weighted.cost, 3);
}

#[test]
fn test_isolated_city_has_no_path() {
    let mut graph = sample_graph();
    graph.add_city("E");

    assert_eq!(shortest_path(&graph, "A", "E", Mode::Weighted), None);
    assert_eq!(shortest_path(&graph, "A", "E", Mode::Hops), None);
}

#[test]
fn test_path_after_road_removed() {
    let mut graph = sample_graph();
    graph.remove_road("C", "D").unwrap();

    assert_eq!(dijkstra(&graph, "A", "D"), None);
    assert_eq!(bfs(&graph, "A", "D"), None);
}

// =============================================================================
// Snapshot Fidelity
// =============================================================================

#[test]
fn test_snapshot_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.json");

    let mut graph = sample_graph();
    graph.add_road("A", "B", 4);
    graph.add_city("Lonely");

    snapshot::save(&graph, &path).unwrap();
    let loaded = snapshot::load(&path).unwrap();

    assert_eq!(loaded, graph);
    assert_eq!(loaded.road_count(), 5);
    assert!(loaded.contains("Lonely"));
}

#[test]
fn test_empty_graph_round_trip() {
    let graph = RoadGraph::new();
    let blob = graph.snapshot().unwrap();

    assert_eq!(blob.trim(), "{}");
    assert!(snapshot::decode(&blob).unwrap().is_empty());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_mutations_keep_symmetry(ops in prop::collection::vec(op(), 0..40)) {
        assert_symmetric(&build(&ops));
    }

    #[test]
    fn prop_snapshot_round_trip(ops in prop::collection::vec(op(), 0..40)) {
        let graph = build(&ops);
        let restored = snapshot::decode(&snapshot::encode(&graph).unwrap()).unwrap();
        prop_assert_eq!(restored, graph);
    }

    #[test]
    fn prop_weighted_never_worse_than_hops(
        ops in prop::collection::vec(op(), 0..40),
        start in city(),
        end in city(),
    ) {
        let graph = build(&ops);
        let weighted = dijkstra(&graph, &start, &end);
        let hops = bfs(&graph, &start, &end);

        prop_assert_eq!(weighted.is_some(), hops.is_some());
        if let (Some(w), Some(h)) = (weighted, hops) {
            prop_assert!(w.cost <= h.cost);
            prop_assert!(h.hops() <= w.hops());
            prop_assert_eq!(w.path.first(), Some(&start));
            prop_assert_eq!(w.path.last(), Some(&end));
        }
    }
}
