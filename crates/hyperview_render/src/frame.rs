//! Wireframe frame renderer
//!
//! Each frame rotates and projects the 16 tesseract vertices, clears the
//! surface, strokes all edges and then fills a point per vertex so points
//! sit on top of lines. There is no depth sorting or culling; edges and
//! points are drawn in index order.

use hyperview_math::{
    is_outer_vertex, EdgeClass, Hypercube, Projector, RotationAngles, Vec2, VERTEX_COUNT,
};

use crate::canvas::{Canvas2D, FillStyle, Rgba, StrokeStyle};

/// Colors and sizes for the white-on-black wireframe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireframeStyle {
    /// Surface background
    pub background: Rgba,
    /// Edges between two outer vertices
    pub outer_edge: StrokeStyle,
    /// All other edges
    pub inner_edge: StrokeStyle,
    /// Points on even vertices
    pub outer_vertex: FillStyle,
    /// Points on odd vertices
    pub inner_vertex: FillStyle,
    /// Point radius in pixels
    pub vertex_radius: f64,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            outer_edge: StrokeStyle {
                color: Rgba::WHITE.with_alpha(0.96),
                width: 2.1,
            },
            inner_edge: StrokeStyle {
                color: Rgba::gray(238.0 / 255.0).with_alpha(0.96),
                width: 1.2,
            },
            outer_vertex: FillStyle {
                color: Rgba::WHITE.with_alpha(0.84),
            },
            inner_vertex: FillStyle {
                color: Rgba::WHITE.with_alpha(0.55),
            },
            vertex_radius: 4.0,
        }
    }
}

impl WireframeStyle {
    /// Stroke for an edge class
    #[inline]
    pub fn edge_stroke(&self, class: EdgeClass) -> &StrokeStyle {
        match class {
            EdgeClass::Outer => &self.outer_edge,
            EdgeClass::Inner => &self.inner_edge,
        }
    }

    /// Fill for a vertex index
    #[inline]
    pub fn vertex_fill(&self, index: usize) -> &FillStyle {
        if is_outer_vertex(index) {
            &self.outer_vertex
        } else {
            &self.inner_vertex
        }
    }
}

/// Rotate and project every vertex, in index order
pub fn project_vertices(
    hypercube: &Hypercube,
    angles: &RotationAngles,
    projector: &Projector,
) -> [Vec2; VERTEX_COUNT] {
    let mut points = [Vec2::ZERO; VERTEX_COUNT];
    for (point, vertex) in points.iter_mut().zip(hypercube.vertices()) {
        *point = projector.project(angles.rotate(*vertex));
    }
    points
}

/// Draws the tesseract wireframe onto a [`Canvas2D`]
#[derive(Clone, Debug, Default)]
pub struct FrameRenderer {
    style: WireframeStyle,
}

impl FrameRenderer {
    pub fn new(style: WireframeStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &WireframeStyle {
        &self.style
    }

    /// Render one frame and return the projected vertex positions
    pub fn render_frame<C: Canvas2D + ?Sized>(
        &self,
        hypercube: &Hypercube,
        angles: &RotationAngles,
        projector: &Projector,
        canvas: &mut C,
    ) -> [Vec2; VERTEX_COUNT] {
        let points = project_vertices(hypercube, angles, projector);

        canvas.clear();

        for edge in hypercube.edges() {
            let stroke = self.style.edge_stroke(edge.class());
            canvas.stroke_line(points[edge.a], points[edge.b], stroke);
        }

        for (index, point) in points.iter().enumerate() {
            canvas.fill_circle(*point, self.style.vertex_radius, self.style.vertex_fill(index));
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use hyperview_math::{build_hypercube, ProjectionConfig, EDGE_COUNT};

    fn setup() -> (Hypercube, Projector, DrawList) {
        (
            build_hypercube(),
            Projector::new(ProjectionConfig::default(), 540.0, 540.0),
            DrawList::new(540.0, 540.0),
        )
    }

    #[test]
    fn test_command_order() {
        let (cube, projector, mut list) = setup();
        FrameRenderer::default().render_frame(&cube, &RotationAngles::ZERO, &projector, &mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 1 + EDGE_COUNT + VERTEX_COUNT);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(commands[1..=EDGE_COUNT]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(commands[EDGE_COUNT + 1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    #[test]
    fn test_edge_styles_follow_class() {
        let (cube, projector, mut list) = setup();
        let renderer = FrameRenderer::default();
        renderer.render_frame(&cube, &RotationAngles::new(0.3, 0.2, 0.1), &projector, &mut list);

        for (edge, cmd) in cube.edges().iter().zip(list.lines()) {
            let DrawCommand::Line { width, color, .. } = *cmd else {
                panic!("Expected line, got {:?}", cmd);
            };
            let expected = renderer.style().edge_stroke(edge.class());
            assert_eq!(width, expected.width, "Edge {:?}", edge);
            assert_eq!(color, expected.color, "Edge {:?}", edge);
        }
    }

    #[test]
    fn test_outer_edges_are_wider_and_brighter() {
        let style = WireframeStyle::default();
        assert!(style.outer_edge.width > style.inner_edge.width);
        assert!(style.outer_edge.color.r > style.inner_edge.color.r);
        assert!(style.outer_edge.color.a > 0.9 && style.inner_edge.color.a > 0.9);
    }

    #[test]
    fn test_vertex_opacity_by_subset() {
        let (cube, projector, mut list) = setup();
        FrameRenderer::default().render_frame(&cube, &RotationAngles::ZERO, &projector, &mut list);

        for (index, cmd) in list.circles().enumerate() {
            let DrawCommand::Circle { color, radius, .. } = *cmd else {
                panic!("Expected circle, got {:?}", cmd);
            };
            assert_eq!(radius, 4.0);
            let expected = if index % 2 == 0 { 0.84 } else { 0.55 };
            assert_eq!(color.a, expected, "Vertex {}", index);
        }
    }

    #[test]
    fn test_lines_connect_projected_endpoints() {
        let (cube, projector, mut list) = setup();
        let angles = RotationAngles::new(1.0, -0.5, 2.0);
        let points = FrameRenderer::default().render_frame(&cube, &angles, &projector, &mut list);

        for (edge, cmd) in cube.edges().iter().zip(list.lines()) {
            let DrawCommand::Line { from, to, .. } = *cmd else {
                panic!("Expected line, got {:?}", cmd);
            };
            assert_eq!(from, points[edge.a]);
            assert_eq!(to, points[edge.b]);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let (cube, projector, mut list) = setup();
        let renderer = FrameRenderer::default();
        let angles = RotationAngles::new(0.7, 0.1, -0.2);

        renderer.render_frame(&cube, &angles, &projector, &mut list);
        let first = list.clone();
        renderer.render_frame(&cube, &angles, &projector, &mut list);

        assert_eq!(first, list);
    }

    #[test]
    fn test_points_stay_on_surface_at_any_angle() {
        let (cube, projector, _) = setup();
        let r = WireframeStyle::default().vertex_radius;

        let mut sweep = Vec::new();
        for i in 0..12 {
            for j in 0..12 {
                for k in 0..12 {
                    let step = std::f64::consts::TAU / 12.0;
                    sweep.push(RotationAngles::new(i as f64 * step, j as f64 * step, k as f64 * step));
                }
            }
        }
        // Angles the default animation passes through
        let speeds = RotationAngles::new(0.008, 0.006, 0.007);
        sweep.extend((0..5000).map(|n| {
            let n = n as f64 * 4.0;
            RotationAngles::new(n * speeds.xw, n * speeds.yw, n * speeds.zw)
        }));

        for angles in &sweep {
            for p in project_vertices(&cube, angles, &projector) {
                assert!(
                    p.x >= r && p.x <= 540.0 - r && p.y >= r && p.y <= 540.0 - r,
                    "Off surface at {:?}: {:?}",
                    angles,
                    p
                );
            }
        }
    }
}
