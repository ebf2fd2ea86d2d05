//! Bowyer-Watson incremental Delaunay triangulation
//!
//! Points are inserted one at a time into a triangulation seeded with a
//! synthetic super-triangle. Each insertion removes every triangle whose
//! circumcircle contains the new point and fans the boundary of the resulting
//! cavity to it. Triangles still attached to the super-triangle are dropped at
//! the end.
//!
//! There is no point-location structure: every insertion scans the full
//! triangle list, so a run is quadratic in the number of points.

use std::collections::HashSet;
use std::time::Instant;

use glam::DVec2;

use crate::config::{DuplicatePolicy, TriangulatorConfig};
use crate::error::{DelaunayError, Result};
use crate::geometry::{point_key, power_of_two_scale, Bounds, Edge, Point, Triangle};

/// Reusable Delaunay triangulator
///
/// Holds the result of the most recent [`triangulate`](Delaunay::triangulate)
/// call. Every call starts from scratch and overwrites the previous result; a
/// failed call leaves the triangle and edge lists empty.
///
/// # Example
///
/// ```
/// use rust_planar_delaunay::*;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
///
/// let mut delaunay = Delaunay::new();
/// let triangles = delaunay.triangulate(&points).unwrap();
/// assert_eq!(triangles.len(), 2);
///
/// // Three edges per triangle, the shared diagonal listed twice
/// assert_eq!(delaunay.edges().len(), 6);
/// assert_eq!(delaunay.unique_edges().len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Delaunay {
    config: TriangulatorConfig,

    /// Input of the last call, as given
    vertices: Vec<Point>,

    /// Final triangles of the last call
    triangles: Vec<Triangle>,

    /// Flattened `e1, e2, e3` of every final triangle
    edges: Vec<Edge>,

    /// Enclosing triangle used to seed the last call
    super_triangle: Option<Triangle>,
}

impl Delaunay {
    /// Create a triangulator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a triangulator with a custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_planar_delaunay::*;
    /// let config = TriangulatorConfigBuilder::new()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut delaunay = Delaunay::with_config(config);
    /// let p = Point::new(0.0, 0.0);
    /// assert!(delaunay.triangulate(&[p, Point::new(1.0, 0.0), p]).is_err());
    /// ```
    pub fn with_config(config: TriangulatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    /// Compute the Delaunay triangulation of `points`
    ///
    /// Points are inserted in input order. The returned triangles are also
    /// available afterwards through [`triangles`](Self::triangles), and their
    /// flattened edges through [`edges`](Self::edges).
    ///
    /// Coordinates may have any magnitude as long as the super-triangle stays
    /// representable: twice the bounding box side times `super_triangle_margin` must
    /// be finite, so with the default margin extents up to about `4e306` work.
    ///
    /// Hull triangles whose circumcircle contains a super-triangle vertex are
    /// lost along with the super vertices. This happens on thin or sliver
    /// shaped hulls, for example `(0, 0), (10, 0), (5, 0.01), (2, -0.001),
    /// (8, -0.001)` with the default margin of 20. A larger
    /// [`super_triangle_margin`](TriangulatorConfig::super_triangle_margin)
    /// recovers them.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration fails
    ///   [`TriangulatorConfig::validate`]
    /// - `InvalidInput` for an empty slice, non-finite coordinates, fewer than
    ///   three distinct points, duplicates under [`DuplicatePolicy::Reject`],
    ///   or coordinates too large for the super-triangle
    /// - `DegenerateTriangle` if all distinct points are collinear, or if a
    ///   collinear triangle is produced during insertion
    pub fn triangulate(&mut self, points: &[Point]) -> Result<&[Triangle]> {
        let start = Instant::now();

        self.vertices = points.to_vec();
        self.triangles.clear();
        self.edges.clear();
        self.super_triangle = None;

        self.config.validate()?;
        let insertion_order = self.validate_input(points)?;
        let super_triangle = self.build_super_triangle(&insertion_order)?;
        self.super_triangle = Some(super_triangle);

        let mut triangles = vec![super_triangle];
        for &point in &insertion_order {
            insert_point(&mut triangles, point)?;
        }

        let [s1, s2, s3] = super_triangle.vertices();
        triangles.retain(|t| !t.contains_vertex(s1) && !t.contains_vertex(s2) && !t.contains_vertex(s3));

        self.edges = triangles.iter().flat_map(|t| t.edges()).collect();
        self.triangles = triangles;

        tracing::debug!(
            points = points.len(),
            inserted = insertion_order.len(),
            triangles = self.triangles.len(),
            edges = self.edges.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "triangulation complete"
        );

        Ok(&self.triangles)
    }

    /// Input points of the last call, including any skipped duplicates
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Triangles of the last successful call
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Edges of the last successful call
    ///
    /// Three per triangle in triangle order. An edge shared by two triangles
    /// appears twice.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges of the last successful call with shared edges listed once
    ///
    /// Order is by first occurrence in [`edges`](Self::edges).
    pub fn unique_edges(&self) -> Vec<Edge> {
        let mut unique: Vec<Edge> = Vec::with_capacity(self.edges.len() / 2 + 3);
        for edge in &self.edges {
            if !unique.contains(edge) {
                unique.push(*edge);
            }
        }
        unique
    }

    /// Enclosing triangle used by the last call, if it got that far
    #[inline]
    pub fn super_triangle(&self) -> Option<&Triangle> {
        self.super_triangle.as_ref()
    }

    /// Check the input and return the points to insert, in order
    fn validate_input(&self, points: &[Point]) -> Result<Vec<Point>> {
        if points.is_empty() {
            return Err(DelaunayError::InvalidInput(
                "cannot triangulate an empty point set".into(),
            ));
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(DelaunayError::InvalidInput(format!(
                "point {} at index {} has a non-finite coordinate",
                p, index
            )));
        }

        let mut seen = HashSet::with_capacity(points.len());
        let mut unique = Vec::with_capacity(points.len());
        for (index, &p) in points.iter().enumerate() {
            if seen.insert(point_key(p)) {
                unique.push(p);
                continue;
            }
            match self.config.duplicate_policy {
                DuplicatePolicy::Skip => {
                    tracing::warn!(index, point = %p, "skipping duplicate input point");
                }
                DuplicatePolicy::Reject => {
                    return Err(DelaunayError::InvalidInput(format!(
                        "duplicate point {} at index {}",
                        p, index
                    )));
                }
            }
        }

        if unique.len() < 3 {
            return Err(DelaunayError::InvalidInput(format!(
                "need at least 3 distinct points (got {})",
                unique.len()
            )));
        }

        let origin = unique[0].as_dvec2();
        let direction = unit_scaled(unique[1].as_dvec2() - origin);
        let spans_plane = unique[2..]
            .iter()
            .any(|p| direction.perp_dot(unit_scaled(p.as_dvec2() - origin)) != 0.0);
        if !spans_plane {
            return Err(DelaunayError::DegenerateTriangle {
                a: unique[0],
                b: unique[1],
                c: unique[2],
            });
        }

        Ok(unique)
    }

    /// Triangle enclosing every point with `margin` times the larger box side to spare
    fn build_super_triangle(&self, points: &[Point]) -> Result<Triangle> {
        let bounds = Bounds::from_points(points).ok_or_else(|| {
            DelaunayError::InvalidInput("cannot bound an empty point set".into())
        })?;

        let delta_max = bounds.width().max(bounds.height());
        let mid = bounds.center();
        let margin = self.config.super_triangle_margin;

        let p1 = Point::new(mid.x - margin * delta_max, mid.y - delta_max);
        let p2 = Point::new(mid.x, mid.y + margin * delta_max);
        let p3 = Point::new(mid.x + margin * delta_max, mid.y - delta_max);

        // Insertion subtracts vertices from each other, so the full span must fit too
        let span = 2.0 * margin * delta_max;
        if ![p1, p2, p3].iter().all(|p| p.is_finite()) || !span.is_finite() {
            return Err(DelaunayError::InvalidInput(format!(
                "coordinates span {} which is too large for a super-triangle with margin {}",
                delta_max, margin
            )));
        }

        Triangle::new(p1, p2, p3)
    }
}

/// Compute the Delaunay triangulation of `points` with the default configuration
///
/// # Example
///
/// ```
/// use rust_planar_delaunay::{triangulate, Point, Triangle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 0.0);
/// let c = Point::new(0.0, 4.0);
///
/// let triangles = triangulate(&[a, b, c]).unwrap();
/// assert_eq!(triangles, vec![Triangle::new(a, b, c).unwrap()]);
/// ```
pub fn triangulate(points: &[Point]) -> Result<Vec<Triangle>> {
    let mut delaunay = Delaunay::new();
    delaunay.triangulate(points)?;
    Ok(std::mem::take(&mut delaunay.triangles))
}

/// Insert one point, replacing the cavity of triangles whose circumcircle contains it
fn insert_point(triangles: &mut Vec<Triangle>, point: Point) -> Result<()> {
    let mut bad = Vec::new();
    let mut polygon = Vec::new();
    for triangle in triangles.iter() {
        if triangle.circumcircle_contains(point) {
            bad.push(*triangle);
            polygon.extend(triangle.edges());
        }
    }

    triangles.retain(|t| !bad.contains(t));

    // Edges shared by two bad triangles are inside the cavity
    let boundary: Vec<Edge> = polygon
        .iter()
        .filter(|&&edge| polygon.iter().filter(|&&other| other == edge).count() == 1)
        .copied()
        .collect();

    for edge in &boundary {
        triangles.push(Triangle::new(edge.p1, edge.p2, point)?);
    }

    tracing::trace!(
        %point,
        bad = bad.len(),
        boundary = boundary.len(),
        triangles = triangles.len(),
        "inserted point"
    );

    Ok(())
}

/// Rescale by a power of two so the largest component is in `[1, 2)`
fn unit_scaled(v: DVec2) -> DVec2 {
    power_of_two_scale(v.abs().max_element()).map_or(v, |scale| v / scale)
}
