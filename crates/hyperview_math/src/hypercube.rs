//! Tesseract (4D hypercube) wireframe geometry
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w). Vertex
//! `i` takes +1 on axis `d` when bit `d` of `i` is set. Two vertices share an
//! edge when they differ in exactly one sign, which gives every vertex
//! degree 4 and 32 edges in total.
//!
//! The 16 indices are also split by parity into an "outer" (even) and an
//! "inner" (odd) subset. The split is purely visual: it lets the renderer
//! draw the wireframe as two nested cubes joined by connecting edges.

use std::sync::OnceLock;
use crate::Vec4;

/// Number of tesseract vertices
pub const VERTEX_COUNT: usize = 16;
/// Number of tesseract edges
pub const EDGE_COUNT: usize = 32;
/// Number of edges touching each vertex
pub const VERTEX_DEGREE: usize = 4;

const DIMENSIONS: usize = 4;

/// Whether a vertex index belongs to the outer (even) subset
#[inline]
pub fn is_outer_vertex(index: usize) -> bool {
    index % 2 == 0
}

/// Styling class of an edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// Both endpoints in the outer subset
    Outer,
    /// At least one endpoint in the inner subset
    Inner,
}

/// Unordered pair of vertex indices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge, normalizing the index order
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Topological class; independent of the current rotation
    pub fn class(&self) -> EdgeClass {
        if is_outer_vertex(self.a) && is_outer_vertex(self.b) {
            EdgeClass::Outer
        } else {
            EdgeClass::Inner
        }
    }

    #[inline]
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

/// The static vertex and edge set of the tesseract
#[derive(Clone, Debug)]
pub struct Hypercube {
    vertices: [Vec4; VERTEX_COUNT],
    edges: Vec<Edge>,
}

static SHARED: OnceLock<Hypercube> = OnceLock::new();

impl Hypercube {
    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Hypercube {
        SHARED.get_or_init(build_hypercube)
    }

    /// Vertices in index order
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// Edges in lexicographic `(a, b)` order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges touching a vertex
    pub fn degree(&self, index: usize) -> usize {
        self.edges.iter().filter(|e| e.touches(index)).count()
    }

    /// Whether `{a, b}` is an edge
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.binary_search(&Edge::new(a, b)).is_ok()
    }
}

/// Build the tesseract vertex and edge set
///
/// Pure and deterministic. Prefer [`Hypercube::shared`] outside of tests.
pub fn build_hypercube() -> Hypercube {
    let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let mut coords = [0.0; DIMENSIONS];
        for (d, c) in coords.iter_mut().enumerate() {
            *c = if (i >> d) & 1 == 1 { 1.0 } else { -1.0 };
        }
        *vertex = Vec4::from_array(coords);
    }

    // Adjacent corners differ in one sign, a per-axis distance of exactly 2
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            if vertices[i].manhattan_distance(vertices[j]) == 2.0 {
                edges.push(Edge::new(i, j));
            }
        }
    }

    Hypercube { vertices, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count_and_components() {
        let h = build_hypercube();
        assert_eq!(h.vertex_count(), VERTEX_COUNT);
        for v in h.vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0, "Component {} out of set", c);
            }
        }
    }

    #[test]
    fn test_vertices_are_distinct() {
        let h = build_hypercube();
        let unique: HashSet<[i8; 4]> = h
            .vertices()
            .iter()
            .map(|v| v.to_array().map(|c| c as i8))
            .collect();
        assert_eq!(unique.len(), VERTEX_COUNT);
    }

    #[test]
    fn test_vertex_bit_layout() {
        let h = build_hypercube();
        assert_eq!(h.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(h.vertices()[1], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(h.vertices()[3], Vec4::new(1.0, 1.0, -1.0, -1.0));
        assert_eq!(h.vertices()[8], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(h.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_edge_count_and_degree() {
        let h = build_hypercube();
        assert_eq!(h.edge_count(), EDGE_COUNT);
        for i in 0..VERTEX_COUNT {
            assert_eq!(h.degree(i), VERTEX_DEGREE, "Vertex {} has wrong degree", i);
        }
    }

    #[test]
    fn test_no_self_loops_or_duplicates() {
        let h = build_hypercube();
        let mut seen = HashSet::new();
        for e in h.edges() {
            assert!(e.a < e.b, "Edge {:?} is not normalized", e);
            assert!(seen.insert(*e), "Duplicate edge {:?}", e);
        }
    }

    #[test]
    fn test_adjacency_matches_single_sign_flip() {
        let h = build_hypercube();
        for i in 0..VERTEX_COUNT {
            for j in (i + 1)..VERTEX_COUNT {
                let one_flip = (i ^ j).count_ones() == 1;
                assert_eq!(h.has_edge(i, j), one_flip, "Adjacency wrong for ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_concrete_adjacency() {
        let h = build_hypercube();
        // 0 and 1 differ only on axis 0
        assert!(h.has_edge(0, 1));
        assert!(h.has_edge(1, 0));
        // 0 and 3 differ on axes 0 and 1
        assert!(!h.has_edge(0, 3));
    }

    #[test]
    fn test_edges_sorted() {
        let h = build_hypercube();
        assert!(h.edges().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(h.edges()[0], Edge::new(0, 1));
    }

    #[test]
    fn test_edge_classification() {
        assert_eq!(Edge::new(0, 2).class(), EdgeClass::Outer);
        assert_eq!(Edge::new(0, 1).class(), EdgeClass::Inner);
        assert_eq!(Edge::new(1, 3).class(), EdgeClass::Inner);
        assert_eq!(Edge::new(2, 0), Edge::new(0, 2));
    }

    #[test]
    fn test_outer_and_inner_edge_split() {
        let h = build_hypercube();
        let outer = h.edges().iter().filter(|e| e.class() == EdgeClass::Outer).count();
        // The even indices share bit 0 = 0 and form a cube: 12 edges.
        // The odd indices form another 12; the 8 bit-0 edges join them.
        assert_eq!(outer, 12);
        assert_eq!(h.edge_count() - outer, 20);
    }

    #[test]
    fn test_shared_is_memoized() {
        let a = Hypercube::shared();
        let b = Hypercube::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.edge_count(), EDGE_COUNT);
    }
}
