use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::{
    core::capacity::Capacity,
    storage::{EdgeWeightedGraph, FlowEdge, FlowNetwork, WeightedEdge},
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Export to the [DOT](https://graphviz.org/doc/info/lang.html) language.
pub struct Dot<E> {
    name: String,
    get_edge_label: Box<dyn Fn(&E) -> String>,
}

impl<E> Dot<E> {
    pub fn new<FE>(name: Option<String>, get_edge_label: FE) -> Self
    where
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        Self: Export<G>,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }

    fn write_header<W: Write>(&self, keyword: &str, vertex_count: usize, out: &mut W) -> io::Result<()> {
        writeln!(out, "{keyword} {} {{", self.name)?;

        for v in 0..vertex_count {
            writeln!(out, "    v{v} [label=\"{v}\"];")?;
        }

        Ok(())
    }
}

impl<C: Capacity + Display> Dot<FlowEdge<C>> {
    /// Labels edges with `flow/capacity`.
    pub fn with_flow(name: Option<String>) -> Self {
        Self::new(name, |edge: &FlowEdge<C>| {
            format!("{}/{}", edge.flow(), edge.capacity())
        })
    }
}

impl<C: Copy + Display> Dot<WeightedEdge<C>> {
    /// Labels edges with their weight.
    pub fn with_weight(name: Option<String>) -> Self {
        Self::new(name, |edge: &WeightedEdge<C>| format!("{}", edge.weight()))
    }
}

impl<C: Capacity> Export<FlowNetwork<C>> for Dot<FlowEdge<C>> {
    fn export<W: Write>(&self, network: &FlowNetwork<C>, out: &mut W) -> io::Result<()> {
        self.write_header("digraph", network.vertex_count(), out)?;

        for (_, edge) in network.edges() {
            writeln!(
                out,
                "    v{} -> v{} [label={:?}];",
                edge.from(),
                edge.to(),
                (self.get_edge_label)(edge)
            )?;
        }

        out.write_all(b"}\n")
    }
}

impl<C: Copy> Export<EdgeWeightedGraph<C>> for Dot<WeightedEdge<C>> {
    fn export<W: Write>(&self, graph: &EdgeWeightedGraph<C>, out: &mut W) -> io::Result<()> {
        self.write_header("graph", graph.vertex_count(), out)?;

        for (_, edge) in graph.edges() {
            let (v, w) = edge.endpoints();
            writeln!(
                out,
                "    v{v} -- v{w} [label={:?}];",
                (self.get_edge_label)(edge)
            )?;
        }

        out.write_all(b"}\n")
    }
}
