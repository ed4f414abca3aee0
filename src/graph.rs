// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Road graph store - cities, roads and their adjacency lists

use crate::error::GraphError;
use crate::types::{Link, Road, Weight};
use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Undirected, weighted graph of cities.
///
/// Every road is stored as two adjacency entries, one per endpoint. The
/// mutation methods are the only way entries are added or removed, and they
/// always touch both sides together. Parallel roads are kept as separate
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadGraph {
    /// City to its ordered adjacency entries
    adjacency: BTreeMap<String, Vec<Link>>,
}

impl RoadGraph {
    /// Create a new empty road graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an adjacency map as-is, without checking symmetry
    pub(crate) fn from_adjacency(adjacency: BTreeMap<String, Vec<Link>>) -> Self {
        Self { adjacency }
    }

    /// The raw adjacency map
    #[must_use]
    pub fn adjacency(&self) -> &BTreeMap<String, Vec<Link>> {
        &self.adjacency
    }

    /// Add a city with no roads. Returns `false` if it already existed.
    pub fn add_city(&mut self, name: &str) -> bool {
        if self.adjacency.contains_key(name) {
            return false;
        }
        self.adjacency.insert(name.to_owned(), Vec::new());
        true
    }

    /// Add a road, creating either endpoint if it is not known yet.
    ///
    /// A loop (`from == to`) produces two entries in the same list.
    pub fn add_road(&mut self, from: &str, to: &str, weight: Weight) {
        self.add_city(from);
        self.add_city(to);
        self.link(from, to, weight);
        self.link(to, from, weight);
    }

    /// Remove a city and every road touching it.
    ///
    /// Returns whether the city existed. Entries naming the city are purged
    /// from every list either way.
    pub fn remove_city(&mut self, name: &str) -> bool {
        let existed = self.adjacency.remove(name).is_some();
        for links in self.adjacency.values_mut() {
            links.retain(|link| link.city != name);
        }
        existed
    }

    /// Remove every road between `from` and `to`, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CityNotFound`] if either endpoint is missing.
    pub fn remove_road(&mut self, from: &str, to: &str) -> Result<usize, GraphError> {
        for city in [from, to] {
            if !self.contains(city) {
                return Err(GraphError::CityNotFound(city.to_owned()));
            }
        }

        let removed = self.unlink(from, to);
        if from == to {
            // Each loop occupies two entries of the same list
            return Ok(removed / 2);
        }
        self.unlink(to, from);
        Ok(removed)
    }

    /// Drop every city and road
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Check whether a city exists
    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Adjacency entries of a city, in insertion order
    #[must_use]
    pub fn neighbors(&self, city: &str) -> Option<&[Link]> {
        self.adjacency.get(city).map(Vec::as_slice)
    }

    /// All city names, sorted
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Get city count
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get road count, parallel roads counted individually
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads().len()
    }

    /// Check if the graph has no cities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Every road exactly once, reported from its smaller endpoint
    #[must_use]
    pub fn roads(&self) -> Vec<Road> {
        let mut roads = Vec::new();
        for (city, links) in &self.adjacency {
            let mut half_loop = false;
            for link in links {
                let road = || Road {
                    from: city.clone(),
                    to: link.city.clone(),
                    weight: link.weight,
                };
                match link.city.as_str().cmp(city.as_str()) {
                    Ordering::Greater => roads.push(road()),
                    Ordering::Equal => {
                        if half_loop {
                            roads.push(road());
                        }
                        half_loop = !half_loop;
                    }
                    Ordering::Less => {}
                }
            }
        }
        roads
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut graph: UnGraph<&str, Weight> = UnGraph::new_undirected();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for city in self.cities() {
            indices.insert(city, graph.add_node(city));
        }

        for road in self.roads() {
            if let (Some(&from_idx), Some(&to_idx)) = (
                indices.get(road.from.as_str()),
                indices.get(road.to.as_str()),
            ) {
                graph.add_edge(from_idx, to_idx, road.weight);
            }
        }

        format!("{}", Dot::new(&graph))
    }

    /// Append the directed half of a road. `from` must already exist.
    fn link(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(links) = self.adjacency.get_mut(from) {
            links.push(Link::new(to, weight));
        }
    }

    /// Drop every entry for `to` from `from`'s list
    fn unlink(&mut self, from: &str, to: &str) -> usize {
        let Some(links) = self.adjacency.get_mut(from) else {
            return 0;
        };
        let before = links.len();
        links.retain(|link| link.city != to);
        before - links.len()
    }
}
