//! CPU tessellation of a [`DrawList`] into triangles
//!
//! Lines become quads of the stroke width, circles become triangle fans.
//! Only the commands after the last full-surface clear are visible; that
//! clear becomes the render pass clear color. Partial clears are painted
//! with the background color.

use hyperview_math::Vec2;

use super::types::Vertex2D;
use crate::canvas::{Canvas2D, Rgba};
use crate::draw_list::{DrawCommand, DrawList};

/// Segments per circle fan
pub const CIRCLE_SEGMENTS: usize = 24;

/// Vertices emitted per line
pub const LINE_VERTEX_COUNT: usize = 6;

/// Vertices emitted per circle
pub const CIRCLE_VERTEX_COUNT: usize = CIRCLE_SEGMENTS * 3;

/// Triangles for the visible part of a draw list
pub fn tessellate(list: &DrawList, background: Rgba, out: &mut Vec<Vertex2D>) {
    out.clear();

    let commands = list.commands();
    let surface = list.size();
    let start = commands
        .iter()
        .rposition(|c| is_full_clear(c, surface))
        .map_or(0, |i| i + 1);

    for command in &commands[start..] {
        match *command {
            DrawCommand::Clear { origin, size } => push_rect(out, origin, size, background),
            DrawCommand::Line { from, to, color, width } => push_line(out, from, to, width, color),
            DrawCommand::Circle { center, radius, color } => push_circle(out, center, radius, color),
        }
    }
}

fn is_full_clear(command: &DrawCommand, surface: Vec2) -> bool {
    matches!(*command, DrawCommand::Clear { origin, size }
        if origin == Vec2::ZERO && size.x >= surface.x && size.y >= surface.y)
}

#[inline]
fn vertex(p: Vec2, color: Rgba) -> Vertex2D {
    Vertex2D {
        position: [p.x as f32, p.y as f32],
        color: color.to_array(),
    }
}

fn push_quad(out: &mut Vec<Vertex2D>, corners: [Vec2; 4], color: Rgba) {
    let [a, b, c, d] = corners.map(|p| vertex(p, color));
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

fn push_rect(out: &mut Vec<Vertex2D>, origin: Vec2, size: Vec2, color: Rgba) {
    let corners = [
        origin,
        Vec2::new(origin.x + size.x, origin.y),
        origin + size,
        Vec2::new(origin.x, origin.y + size.y),
    ];
    push_quad(out, corners, color);
}

fn push_line(out: &mut Vec<Vertex2D>, from: Vec2, to: Vec2, width: f64, color: Rgba) {
    let dir = to - from;
    let len = dir.distance(Vec2::ZERO);
    if len < f64::EPSILON {
        return;
    }

    let half = width * 0.5;
    let normal = Vec2::new(-dir.y / len, dir.x / len) * half;
    let corners = [from + normal, to + normal, to - normal, from - normal];
    push_quad(out, corners, color);
}

fn push_circle(out: &mut Vec<Vertex2D>, center: Vec2, radius: f64, color: Rgba) {
    let step = std::f64::consts::TAU / CIRCLE_SEGMENTS as f64;
    let rim = |i: usize| {
        let (sin, cos) = (step * i as f64).sin_cos();
        Vec2::new(center.x + radius * cos, center.y + radius * sin)
    };

    let c = vertex(center, color);
    for i in 0..CIRCLE_SEGMENTS {
        out.push(c);
        out.push(vertex(rim(i), color));
        out.push(vertex(rim(i + 1), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{FillStyle, StrokeStyle};

    fn stroke(width: f64) -> StrokeStyle {
        StrokeStyle { color: Rgba::WHITE, width }
    }

    #[test]
    fn test_vertex_counts() {
        let mut list = DrawList::new(100.0, 100.0);
        list.clear();
        list.stroke_line(Vec2::new(10.0, 10.0), Vec2::new(90.0, 10.0), &stroke(2.0));
        list.fill_circle(Vec2::new(50.0, 50.0), 4.0, &FillStyle { color: Rgba::WHITE });

        let mut out = Vec::new();
        tessellate(&list, Rgba::BLACK, &mut out);
        assert_eq!(out.len(), LINE_VERTEX_COUNT + CIRCLE_VERTEX_COUNT);
    }

    #[test]
    fn test_line_quad_has_stroke_width() {
        let mut list = DrawList::new(100.0, 100.0);
        list.stroke_line(Vec2::new(10.0, 50.0), Vec2::new(90.0, 50.0), &stroke(4.0));

        let mut out = Vec::new();
        tessellate(&list, Rgba::BLACK, &mut out);

        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::MAX, f32::min);
        let max = ys.iter().cloned().fold(f32::MIN, f32::max);
        assert!((max - min - 4.0).abs() < 1e-4, "Quad height {}", max - min);
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut list = DrawList::new(100.0, 100.0);
        list.stroke_line(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), &stroke(2.0));

        let mut out = Vec::new();
        tessellate(&list, Rgba::BLACK, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_circle_rim_at_radius() {
        let mut list = DrawList::new(100.0, 100.0);
        list.fill_circle(Vec2::new(50.0, 50.0), 4.0, &FillStyle { color: Rgba::WHITE });

        let mut out = Vec::new();
        tessellate(&list, Rgba::BLACK, &mut out);
        for tri in out.chunks(3) {
            assert_eq!(tri[0].position, [50.0, 50.0]);
            for rim in &tri[1..] {
                let dx = rim.position[0] - 50.0;
                let dy = rim.position[1] - 50.0;
                assert!(((dx * dx + dy * dy).sqrt() - 4.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_partial_clear_painted_with_background() {
        let mut list = DrawList::new(100.0, 100.0);
        list.stroke_line(Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0), &stroke(1.0));
        list.clear_rect(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));

        let mut out = Vec::new();
        tessellate(&list, Rgba::BLACK, &mut out);
        assert_eq!(out.len(), 12);
        assert_eq!(out[6].color, Rgba::BLACK.to_array());
    }
}
