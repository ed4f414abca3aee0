// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use roadgraph::path::{bfs, dijkstra};
use roadgraph::snapshot;

fuzz_target!(|data: &[u8]| {
    let Ok(blob) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(graph) = snapshot::decode(blob) else {
        return;
    };

    // Decoded graphs may be asymmetric or dangle; queries must still finish
    let cities: Vec<&str> = graph.cities().take(2).collect();
    if let [start, end] = cities[..] {
        for route in [dijkstra(&graph, start, end), bfs(&graph, start, end)]
            .into_iter()
            .flatten()
        {
            assert_eq!(route.path.first().map(String::as_str), Some(start));
            assert_eq!(route.path.last().map(String::as_str), Some(end));
        }
    }

    let reencoded = snapshot::encode(&graph).expect("decoded graph must encode");
    let again = snapshot::decode(&reencoded).expect("encoded graph must decode");
    assert_eq!(again, graph);
});
