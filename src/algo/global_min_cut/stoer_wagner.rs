use bitvec::vec::BitVec;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    common::IndexMaxPq,
    core::{
        capacity::Capacity,
        id::{IdType, VertexId},
    },
    storage::EdgeWeightedGraph,
    union_find::{UnionFind, WeightedQuickUnion},
};

use super::{Error, GlobalMinCut};

// The last two vertices added by a maximum adjacency search together with the
// weight of the cut separating the last one from the rest.
#[derive(Debug, Clone, Copy)]
struct CutPhase<C> {
    weight: C,
    s: usize,
    t: usize,
}

pub fn stoer_wagner<C>(graph: &EdgeWeightedGraph<C>, start: VertexId) -> Result<GlobalMinCut<C>, Error>
where
    C: Capacity,
{
    let n = graph.vertex_count();

    if n < 2 {
        return Err(Error::TooFewVertices);
    }

    if !graph.contains_vertex(start) {
        return Err(Error::StartAbsent);
    }

    // Contracted graph: summed weights between distinct live vertices.
    let mut adj = vec![FxHashMap::<usize, C>::default(); n];

    for (id, edge) in graph.edges() {
        if !edge.weight().is_nonnegative() {
            return Err(Error::NegativeWeight(id));
        }

        let (v, w) = edge.endpoints();
        let (v, w) = (v.as_usize(), w.as_usize());

        if v == w {
            continue;
        }

        add_weight(&mut adj[v], w, edge.weight());
        add_weight(&mut adj[w], v, edge.weight());
    }

    let mut merged = BitVec::<usize>::repeat(false, n);
    let mut uf = WeightedQuickUnion::new(n);
    let mut cut = BitVec::<usize>::repeat(false, n);
    let mut best: Option<C> = None;

    let mut phase = CutPhase {
        weight: C::zero(),
        s: start.as_usize(),
        t: start.as_usize(),
    };

    for remaining in (2..=n).rev() {
        phase = min_cut_phase(&adj, &merged, phase.s)?;

        trace!(
            remaining,
            s = phase.s,
            t = phase.t,
            weight = ?phase.weight,
            "cut of the phase"
        );

        if best.map_or(true, |best| phase.weight < best) {
            best = Some(phase.weight);

            // Everything merged into `t` so far is on one side.
            let t_root = uf.root(phase.t)?;
            for v in 0..n {
                cut.set(v, uf.root(v)? == t_root);
            }

            debug!(weight = ?phase.weight, s = phase.s, t = phase.t, "improved minimum cut");
        }

        contract(&mut adj, phase.s, phase.t);
        merged.set(phase.t, true);
        uf.union(phase.s, phase.t)?;
    }

    Ok(GlobalMinCut {
        weight: best.unwrap_or_else(C::zero),
        cut,
    })
}

// Maximum adjacency search over the live vertices, starting from `start`.
fn min_cut_phase<C: Capacity>(
    adj: &[FxHashMap<usize, C>],
    merged: &BitVec,
    start: usize,
) -> Result<CutPhase<C>, Error> {
    let mut pq = IndexMaxPq::new(adj.len());

    for v in merged.iter_zeros() {
        if v != start {
            pq.insert(v, C::zero())?;
        }
    }
    pq.insert(start, C::inf())?;

    let mut phase = CutPhase {
        weight: C::zero(),
        s: start,
        t: start,
    };

    while let Some((v, _)) = pq.delete_max() {
        phase.s = phase.t;
        phase.t = v;

        for (&w, &weight) in adj[v].iter() {
            if !pq.contains(w) {
                continue;
            }

            // Zero weights and weights absorbed by a large float key leave the
            // key unchanged.
            let current = *pq.key_of(w)?;
            let key = current + weight;
            if key > current {
                pq.increase_key(w, key)?;
            }
        }
    }

    phase.weight = adj[phase.t]
        .values()
        .fold(C::zero(), |total, &weight| total + weight);

    Ok(phase)
}

// Merges `t` into `s`, summing the weights of edges that become parallel and
// dropping the ones that become loops.
fn contract<C: Capacity>(adj: &mut [FxHashMap<usize, C>], s: usize, t: usize) {
    let edges = std::mem::take(&mut adj[t]);

    for (w, weight) in edges {
        adj[w].remove(&t);

        if w != s {
            add_weight(&mut adj[s], w, weight);
            add_weight(&mut adj[w], s, weight);
        }
    }
}

fn add_weight<C: Capacity>(neighbors: &mut FxHashMap<usize, C>, w: usize, weight: C) {
    neighbors
        .entry(w)
        .and_modify(|total| *total = *total + weight)
        .or_insert(weight);
}
