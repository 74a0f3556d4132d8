mod layout;

use eframe::egui::{
    self, Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, Ui, Vec2, WidgetInfo,
    WidgetType, vec2,
};

use crate::content::Skill;

use super::render_utils::{
    ACCENT_EMERALD, ACCENT_EMERALD_DEEP, GRID_LINE, PAGE_BACKGROUND, TEXT_MUTED, blend_color,
    with_opacity,
};
pub use layout::{HoverChange, HoverTracker, RadarLayout, Reveal};
use layout::{MARKER_HOVER_RADIUS, MARKER_RADIUS};

pub(super) const RADAR_MAX_SIDE: f32 = 500.0;
pub(super) const RADAR_MARGIN: f32 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillTooltip {
    pub skill: Skill,
    pub pointer: Pos2,
}

#[derive(Clone, Debug, PartialEq)]
struct LayoutKey {
    side: f32,
    levels: Vec<i32>,
}

struct LayoutCache {
    key: LayoutKey,
    layout: RadarLayout,
}

#[derive(Default)]
pub struct SkillRadar {
    layout_cache: Option<LayoutCache>,
    hover: HoverTracker,
    revealed_at: Option<f64>,
    relayouts: u64,
}

pub fn accessible_summary(skills: &[Skill]) -> String {
    let parts = skills
        .iter()
        .map(|skill| format!("{} at {} percent", skill.name, skill.level))
        .collect::<Vec<_>>();
    format!(
        "Technical skills radar chart showing proficiency levels: {}",
        parts.join(", ")
    )
}

impl SkillRadar {
    fn layout_for(&mut self, skills: &[Skill], side: f32) -> RadarLayout {
        let key = LayoutKey {
            side,
            levels: skills.iter().map(|skill| skill.level).collect(),
        };

        if let Some(cache) = &self.layout_cache
            && cache.key == key
        {
            return cache.layout.clone();
        }

        let levels = skills
            .iter()
            .map(|skill| skill.level as f32)
            .collect::<Vec<_>>();
        let layout = RadarLayout::compute(&levels, side, RADAR_MARGIN);
        self.relayouts += 1;
        self.hover.reset();
        log::debug!(
            "radar relayout #{}: side {side:.0}, radius {:.1}, {} axes",
            self.relayouts,
            layout.radius,
            skills.len()
        );
        self.layout_cache = Some(LayoutCache {
            key,
            layout: layout.clone(),
        });
        layout
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        skills: &[Skill],
        reduced_motion: bool,
    ) -> Option<SkillTooltip> {
        let side = ui.available_width().min(RADAR_MAX_SIDE).max(0.0);
        let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::hover());
        let summary = accessible_summary(skills);
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, &summary));

        if !ui.is_rect_visible(rect) {
            return None;
        }

        let now = ui.input(|input| input.time);
        let reveal = if reduced_motion {
            Reveal::DONE
        } else {
            let started = *self.revealed_at.get_or_insert(now);
            Reveal {
                elapsed_secs: now - started,
            }
        };
        if !reveal.is_done(skills.len()) {
            ui.ctx().request_repaint();
        }

        let center = rect.center();
        let pointer = response.hover_pos();
        let painter = ui.painter_at(rect.expand(RADAR_MARGIN));

        let layout = self.layout_for(skills, side);
        let change = self
            .hover
            .update(&layout, pointer.map(|pointer| pointer - center));
        match change {
            HoverChange::Entered(index) => log::trace!("radar hover entered axis {index}"),
            HoverChange::Cleared => log::trace!("radar hover cleared"),
            HoverChange::Unchanged => {}
        }

        paint_grid(&painter, center, &layout);
        if layout.has_polygon() {
            paint_polygon(&painter, center, &layout, reveal.polygon_opacity());
        }

        let hovered = self.hover.current();
        for (index, vertex) in layout.vertices.iter().enumerate() {
            let radius = if hovered == Some(index) {
                MARKER_HOVER_RADIUS
            } else {
                reveal.marker_radius(index)
            };
            if radius <= 0.0 {
                continue;
            }
            painter.circle(
                center + *vertex,
                radius,
                ACCENT_EMERALD,
                Stroke::new(2.0, PAGE_BACKGROUND),
            );
        }

        for (skill, anchor) in skills.iter().zip(&layout.labels) {
            painter.text(
                center + *anchor,
                Align2::CENTER_CENTER,
                &skill.name,
                FontId::monospace(11.0),
                TEXT_MUTED,
            );
        }

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        match (hovered, pointer) {
            (Some(index), Some(pointer)) => skills.get(index).map(|skill| SkillTooltip {
                skill: skill.clone(),
                pointer,
            }),
            _ => None,
        }
    }
}

fn paint_grid(painter: &egui::Painter, center: Pos2, layout: &RadarLayout) {
    let grid_stroke = Stroke::new(1.0, with_opacity(GRID_LINE, 0.1));
    for ring in &layout.rings {
        painter.circle_stroke(center, *ring, grid_stroke);
    }
    for spoke in &layout.spokes {
        painter.line_segment([center, center + *spoke], grid_stroke);
    }
}

fn paint_polygon(painter: &egui::Painter, center: Pos2, layout: &RadarLayout, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }

    if layout.has_fill() {
        paint_fill(painter, center, layout, opacity);
    }

    let outline = layout
        .vertices
        .iter()
        .map(|vertex| center + *vertex)
        .collect::<Vec<_>>();
    painter.add(Shape::closed_line(
        outline,
        Stroke::new(2.0, with_opacity(ACCENT_EMERALD, opacity)),
    ));
}

// Radar polygons are star-shaped around the centre, so a fan from the
// centre covers them exactly even when they are not convex.
fn paint_fill(painter: &egui::Painter, center: Pos2, layout: &RadarLayout, opacity: f32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, with_opacity(ACCENT_EMERALD, 0.8 * opacity));
    for vertex in &layout.vertices {
        mesh.colored_vertex(center + *vertex, rim_color(*vertex, layout.radius, opacity));
    }

    let count = layout.vertices.len() as u32;
    for index in 0..count {
        mesh.add_triangle(0, index + 1, ((index + 1) % count) + 1);
    }
    painter.add(Shape::mesh(mesh));
}

fn rim_color(vertex: Vec2, radius: f32, opacity: f32) -> Color32 {
    let t = if radius > 0.0 {
        (vertex.length() / radius).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = blend_color(ACCENT_EMERALD, ACCENT_EMERALD_DEEP, t);
    with_opacity(color, (0.8 - 0.5 * t) * opacity)
}
