use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Vec2, vec2};

pub(super) const GRID_LEVELS: [f32; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];
pub(super) const LABEL_OFFSET: f32 = 25.0;
pub(super) const HIT_RADIUS: f32 = 15.0;
pub(super) const MARKER_RADIUS: f32 = 6.0;
pub(super) const MARKER_HOVER_RADIUS: f32 = 8.0;

const POLYGON_FADE_SECS: f64 = 1.0;
const MARKER_GROW_SECS: f64 = 0.5;
const MARKER_STAGGER_SECS: f64 = 0.1;

// Angle of axis `index` out of `count`; axis 0 points straight up.
pub fn axis_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    TAU * index as f32 / count as f32 - FRAC_PI_2
}

pub fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        return 0.0;
    }
    level.clamp(0.0, 100.0)
}

fn polar(angle: f32, radius: f32) -> Vec2 {
    vec2(angle.cos() * radius, angle.sin() * radius)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarLayout {
    pub radius: f32,
    pub rings: Vec<f32>,
    pub spokes: Vec<Vec2>,
    pub vertices: Vec<Vec2>,
    pub labels: Vec<Vec2>,
}

impl RadarLayout {
    pub fn compute(levels: &[f32], side: f32, margin: f32) -> Self {
        let radius = (side / 2.0 - margin).max(0.0);
        let count = levels.len();

        let rings = GRID_LEVELS
            .iter()
            .map(|level| radius * level / 100.0)
            .collect();

        let mut spokes = Vec::with_capacity(count);
        let mut vertices = Vec::with_capacity(count);
        let mut labels = Vec::with_capacity(count);
        for (index, level) in levels.iter().enumerate() {
            let angle = axis_angle(index, count);
            spokes.push(polar(angle, radius));
            vertices.push(polar(angle, radius * clamp_level(*level) / 100.0));
            labels.push(polar(angle, radius + LABEL_OFFSET));
        }

        Self {
            radius,
            rings,
            spokes,
            vertices,
            labels,
        }
    }

    pub fn has_polygon(&self) -> bool {
        !self.vertices.is_empty()
    }

    pub fn has_fill(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn regions_containing(&self, pointer: Vec2) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, vertex)| (pointer - **vertex).length() <= HIT_RADIUS)
            .map(|(index, _)| index)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Entered(usize),
    Cleared,
    Unchanged,
}

// Tracks which vertex hit region the pointer is in. When regions overlap
// the most recently entered one wins.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: Vec<usize>,
    current: Option<usize>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn reset(&mut self) {
        self.inside.clear();
        self.current = None;
    }

    pub fn update(&mut self, layout: &RadarLayout, pointer: Option<Vec2>) -> HoverChange {
        let inside = pointer
            .map(|pointer| layout.regions_containing(pointer))
            .unwrap_or_default();

        let entered = inside
            .iter()
            .rev()
            .find(|index| !self.inside.contains(index))
            .copied();
        let previous = self.current;
        self.current = match (entered, previous) {
            (Some(index), _) => Some(index),
            (None, Some(current)) if inside.contains(&current) => Some(current),
            _ => None,
        };
        self.inside = inside;

        match (previous, self.current) {
            (before, after) if before == after => HoverChange::Unchanged,
            (_, Some(index)) => HoverChange::Entered(index),
            (_, None) => HoverChange::Cleared,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub elapsed_secs: f64,
}

impl Reveal {
    pub const DONE: Self = Self {
        elapsed_secs: f64::INFINITY,
    };

    pub fn polygon_opacity(self) -> f32 {
        (self.elapsed_secs / POLYGON_FADE_SECS).clamp(0.0, 1.0) as f32
    }

    pub fn marker_radius(self, index: usize) -> f32 {
        let delay = index as f64 * MARKER_STAGGER_SECS;
        let t = ((self.elapsed_secs - delay) / MARKER_GROW_SECS).clamp(0.0, 1.0);
        MARKER_RADIUS * t as f32
    }

    pub fn is_done(self, count: usize) -> bool {
        let last_delay = count.saturating_sub(1) as f64 * MARKER_STAGGER_SECS;
        self.elapsed_secs >= POLYGON_FADE_SECS.max(last_delay + MARKER_GROW_SECS)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    const SIX: [f32; 6] = [95.0, 90.0, 88.0, 92.0, 85.0, 80.0];

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn axis_zero_points_up() {
        assert!((axis_angle(0, 6) + PI / 2.0).abs() < 1e-6);
        assert!((axis_angle(3, 6) - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn vertex_positions_follow_levels() {
        let layout = RadarLayout::compute(&[100.0, 50.0, 0.0], 400.0, 60.0);
        assert_eq!(layout.radius, 140.0);
        assert!(close(layout.vertices[0], vec2(0.0, -140.0)));
        assert!((layout.vertices[1].length() - 70.0).abs() < 1e-3);
        assert_eq!(layout.vertices[2], Vec2::ZERO);
        assert!(close(layout.labels[0], vec2(0.0, -165.0)));
    }

    #[test]
    fn six_skill_scenario() {
        let layout = RadarLayout::compute(&SIX, 400.0, 60.0);
        assert!(close(layout.vertices[3], vec2(0.0, 128.8)));
        assert_eq!(layout.spokes.len(), 6);
        assert!(layout.has_polygon());
        assert!(layout.has_fill());
        assert_eq!(layout.rings, vec![28.0, 56.0, 84.0, 112.0, 140.0]);
    }

    #[test]
    fn empty_chart_has_rings_only() {
        let layout = RadarLayout::compute(&[], 400.0, 60.0);
        assert_eq!(layout.rings.len(), 5);
        assert!(layout.spokes.is_empty());
        assert!(layout.vertices.is_empty());
        assert!(!layout.has_polygon());
        assert!(!layout.has_fill());
    }

    #[test]
    fn two_skills_are_outlined_but_not_filled() {
        let layout = RadarLayout::compute(&[80.0, 60.0], 400.0, 60.0);
        assert!(layout.has_polygon());
        assert!(!layout.has_fill());
        assert!(close(layout.vertices[0], vec2(0.0, -112.0)));
        assert!(close(layout.vertices[1], vec2(0.0, 84.0)));

        let single = RadarLayout::compute(&[50.0], 400.0, 60.0);
        assert!(single.has_polygon());
        assert!(!single.has_fill());
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        let layout = RadarLayout::compute(&[140.0, -20.0, f32::NAN], 400.0, 60.0);
        assert!((layout.vertices[0].length() - 140.0).abs() < 1e-3);
        assert_eq!(layout.vertices[1], Vec2::ZERO);
        assert_eq!(layout.vertices[2], Vec2::ZERO);
    }

    #[test]
    fn tiny_area_collapses_radius_to_zero() {
        let layout = RadarLayout::compute(&SIX, 80.0, 60.0);
        assert_eq!(layout.radius, 0.0);
    }

    #[test]
    fn hover_enters_and_clears() {
        let layout = RadarLayout::compute(&SIX, 400.0, 60.0);
        let mut tracker = HoverTracker::default();
        let vertex = layout.vertices[2];

        assert_eq!(tracker.update(&layout, Some(vertex + vec2(10.0, 0.0))), HoverChange::Entered(2));
        assert_eq!(tracker.update(&layout, Some(vertex + vec2(0.0, 14.0))), HoverChange::Unchanged);
        assert_eq!(tracker.current(), Some(2));
        assert_eq!(tracker.update(&layout, Some(vertex + vec2(16.0, 0.0))), HoverChange::Cleared);
        assert_eq!(tracker.update(&layout, None), HoverChange::Unchanged);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn overlapping_regions_prefer_last_entered() {
        let layout = RadarLayout::compute(&[0.0, 0.0, 50.0], 400.0, 60.0);
        let mut tracker = HoverTracker::default();

        assert_eq!(tracker.update(&layout, Some(Vec2::ZERO)), HoverChange::Entered(1));
        tracker.reset();
        assert_eq!(tracker.current(), None);

        let third = layout.vertices[2];
        assert_eq!(tracker.update(&layout, Some(third)), HoverChange::Entered(2));
        assert_eq!(tracker.update(&layout, Some(vec2(0.0, 5.0))), HoverChange::Entered(1));
    }

    #[test]
    fn reveal_staggers_markers() {
        let start = Reveal { elapsed_secs: 0.0 };
        assert_eq!(start.polygon_opacity(), 0.0);
        assert_eq!(start.marker_radius(0), 0.0);

        let mid = Reveal { elapsed_secs: 0.35 };
        assert!((mid.marker_radius(1) - MARKER_RADIUS * 0.5).abs() < 1e-4);
        assert_eq!(mid.marker_radius(5), 0.0);
        assert!(!mid.is_done(6));

        assert_eq!(Reveal::DONE.polygon_opacity(), 1.0);
        assert_eq!(Reveal::DONE.marker_radius(5), MARKER_RADIUS);
        assert!(Reveal { elapsed_secs: 1.0 }.is_done(6));
    }
}
