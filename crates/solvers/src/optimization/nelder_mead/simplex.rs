use tincan_core::Snapshot;

use super::{Config, Error, Point, Solution, Status};

/// Reflection coefficient.
pub(super) const RHO: f64 = 1.0;

/// Expansion coefficient.
pub(super) const CHI: f64 = 2.0;

/// Contraction coefficient.
pub(super) const PSI: f64 = 0.5;

/// Shrink coefficient.
pub(super) const SIGMA: f64 = 0.5;

/// Relative perturbation applied to non-zero coordinates of `x0`.
const NONZERO_DELTA: f64 = 0.05;

/// Coordinate used in place of a zero coordinate of `x0`.
const ZERO_DELTA: f64 = 0.000_25;

/// Returns the `N + 1` vertex locations of the initial simplex around `x0`.
pub(super) fn initial_vertices<const N: usize>(x0: [f64; N]) -> Vec<[f64; N]> {
    let mut vertices = Vec::with_capacity(N + 1);
    vertices.push(x0);
    for i in 0..N {
        let mut x = x0;
        x[i] = if x[i] == 0.0 {
            ZERO_DELTA
        } else {
            (1.0 + NONZERO_DELTA) * x[i]
        };
        vertices.push(x);
    }
    vertices
}

/// Returns `(1 + t) * centroid - t * worst`.
///
/// `t = RHO` reflects, `t = RHO * CHI` expands, `t = PSI * RHO` contracts
/// outside, and `t = -PSI` contracts inside.
pub(super) fn affine<const N: usize>(centroid: &[f64; N], worst: &[f64; N], t: f64) -> [f64; N] {
    std::array::from_fn(|i| (1.0 + t) * centroid[i] - t * worst[i])
}

/// A simplex vertex and the snapshot that produced it.
///
/// Vertices assumed worse by an observer have no snapshot.
pub(super) struct Vertex<I, O, const N: usize> {
    pub(super) point: Point<N>,
    pub(super) snapshot: Option<Snapshot<I, O>>,
}

/// The working simplex, kept sorted from best to worst objective.
pub(super) struct Simplex<I, O, const N: usize> {
    vertices: Vec<Vertex<I, O, N>>,
}

impl<I, O, const N: usize> Simplex<I, O, N> {
    /// Creates a simplex from vertices in any order.
    pub(super) fn new(vertices: Vec<Vertex<I, O, N>>) -> Self {
        let mut simplex = Self { vertices };
        simplex.sort();
        simplex
    }

    fn sort(&mut self) {
        self.vertices
            .sort_by(|a, b| a.point.objective.total_cmp(&b.point.objective));
    }

    pub(super) fn best(&self) -> Point<N> {
        self.vertices[0].point
    }

    pub(super) fn worst(&self) -> Point<N> {
        self.vertices[N].point
    }

    /// Returns the second-worst vertex, which is the best one when `N = 1`.
    pub(super) fn second_worst(&self) -> Point<N> {
        self.vertices[N - 1].point
    }

    /// Centroid of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        let mut centroid = [0.0; N];
        for vertex in &self.vertices[..N] {
            for (c, x) in centroid.iter_mut().zip(vertex.point.x) {
                *c += x;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let n = N as f64;
        centroid.map(|c| c / n)
    }

    /// Replaces the worst vertex and restores ordering.
    pub(super) fn replace_worst(&mut self, vertex: Vertex<I, O, N>) {
        self.vertices[N] = vertex;
        self.sort();
    }

    /// Locations that vertices `1..=N` move to when shrinking toward the best.
    pub(super) fn shrink_targets(&self) -> Vec<[f64; N]> {
        let best = self.best().x;
        self.vertices[1..]
            .iter()
            .map(|v| std::array::from_fn(|i| best[i] + SIGMA * (v.point.x[i] - best[i])))
            .collect()
    }

    /// Replaces vertex `index` without reordering.
    ///
    /// Call [`finish_shrink`](Self::finish_shrink) once all shrunk vertices
    /// are in place.
    pub(super) fn replace(&mut self, index: usize, vertex: Vertex<I, O, N>) {
        self.vertices[index] = vertex;
    }

    pub(super) fn finish_shrink(&mut self) {
        self.sort();
    }

    /// Checks vertex spread against the configured tolerances.
    ///
    /// Comparisons involving infinite objectives yield `inf` or NaN, so a
    /// simplex touching an infeasible region never reports convergence.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let best = self.best();
        let others = &self.vertices[1..];

        let x_converged = others.iter().all(|v| {
            v.point
                .x
                .iter()
                .zip(best.x)
                .all(|(x, b)| (x - b).abs() <= config.x_abs_tol())
        });
        let f_converged = others
            .iter()
            .all(|v| (v.point.objective - best.objective).abs() <= config.f_abs_tol());

        x_converged && f_converged
    }

    /// Builds a solution from the best vertex with a real evaluation.
    pub(super) fn into_solution(
        self,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Result<Solution<I, O, N>, Error> {
        let (point, snapshot) = self
            .vertices
            .into_iter()
            .find_map(|v| v.snapshot.map(|snap| (v.point, snap)))
            .ok_or(Error::NoSuccessfulEvaluation)?;

        Ok(Solution {
            status,
            x: point.x,
            objective: point.objective,
            snapshot,
            iters,
            evals,
        })
    }
}
