#![no_main]

use libfuzzer_sys::fuzz_target;

use flowcut::{
    algo::MaxFlow,
    core::{IdType, VertexId},
    infra::{
        arbitrary::{GraphInput, Index},
        testing::check_consistency,
    },
};

fuzz_target!(|input: (GraphInput, Index, Index)| {
    let (graph, source, sink) = input;
    let mut network = graph.flow_network();
    let n = network.vertex_count();

    let (Some(source), Some(sink)) = (source.get(n), sink.get(n)) else {
        return;
    };

    if source == sink {
        return;
    }

    let (source, sink) = (VertexId::from_usize(source), VertexId::from_usize(sink));

    let max_flow = MaxFlow::on(&mut network).run(source, sink).unwrap();

    check_consistency(&network)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    max_flow
        .certify(&network)
        .map_err(|error| error.to_string())
        .unwrap();

    let rerun = MaxFlow::on(&mut network).run(source, sink).unwrap();
    assert_eq!(rerun.value(), max_flow.value());
    assert_eq!(rerun.augmentations(), 0);
});
