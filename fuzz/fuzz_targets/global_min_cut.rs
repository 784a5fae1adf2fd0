#![no_main]

use libfuzzer_sys::fuzz_target;

use flowcut::{algo::GlobalMinCut, infra::arbitrary::GraphInput};

fuzz_target!(|input: GraphInput| {
    let graph = input.edge_weighted_graph();

    if graph.vertex_count() < 2 || graph.vertex_count() > 16 {
        return;
    }

    let min_cut = GlobalMinCut::on(&graph).run().unwrap();

    min_cut
        .certify(&graph)
        .map_err(|error| error.to_string())
        .unwrap();
});
