//! Graph algorithms built on [`UnionFind`].

use crate::error::UnionFindError;
use crate::union_find::{Result, UnionFind};
use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
/// {from} -- {to} (weight {weight})
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

/// Connected components of an undirected graph, labelled densely in order of their smallest
/// vertex.
#[derive(Debug)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn component_of(&self, vertex: usize) -> Result<usize> {
        self.labels
            .get(vertex)
            .copied()
            .ok_or_else(|| UnionFindError::out_of_range(vertex, self.labels.len()))
    }

    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (vertex, &label) in self.labels.iter().enumerate() {
            groups[label].push(vertex);
        }
        groups
    }
}

pub fn connected_components(
    vertex_count: usize,
    edges: &[(usize, usize)],
) -> Result<Components> {
    let mut uf = UnionFind::new(vertex_count);
    for &(from, to) in edges {
        uf.unify(from, to)?;
    }

    let mut labels = vec![0; vertex_count];
    for (label, group) in uf.sets().into_iter().enumerate() {
        for vertex in group {
            labels[vertex] = label;
        }
    }

    log::debug!(
        "{vertex_count} vertices and {} edges form {} components",
        edges.len(),
        uf.set_count()
    );
    Ok(Components {
        labels,
        count: uf.set_count(),
    })
}

#[derive(Debug)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    tree_count: usize,
}

impl SpanningForest {
    /// Chosen edges, in order of non-decreasing weight.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Widened so that no combination of `i64` weights can overflow.
    pub fn total_weight(&self) -> i128 {
        self.edges.iter().map(|edge| i128::from(edge.weight)).sum()
    }

    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    /// Whether the graph was connected, i.e. the forest is a single tree. An empty graph has no
    /// spanning tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }
}

/// Kruskal's algorithm. Ties between equal weights are broken by input order.
///
/// Every endpoint is validated before any edge is taken, including edges that would be skipped
/// once a single tree remains.
pub fn minimum_spanning_forest(vertex_count: usize, edges: &[Edge]) -> Result<SpanningForest> {
    let mut uf = UnionFind::new(vertex_count);
    for edge in edges {
        uf.check(edge.from)?;
        uf.check(edge.to)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut chosen = Vec::with_capacity(vertex_count.saturating_sub(1));
    for edge in sorted {
        if uf.set_count() <= 1 {
            break;
        }
        let from = uf.find(edge.from)?;
        let to = uf.find(edge.to)?;
        if from == to {
            continue;
        }
        uf.unify(from, to)?;
        log::trace!("taking edge {edge}");
        chosen.push(edge);
    }

    log::debug!(
        "spanning forest of {} edges across {} trees",
        chosen.len(),
        uf.set_count()
    );
    Ok(SpanningForest {
        edges: chosen,
        tree_count: uf.set_count(),
    })
}
