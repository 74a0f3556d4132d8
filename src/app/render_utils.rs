use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::content::Accent;

pub(super) const PAGE_BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
pub(super) const CARD_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(8, 12, 24, 200);
pub(super) const CARD_BORDER: Color32 = Color32::from_rgb(30, 41, 59);
pub(super) const TEXT_STRONG: Color32 = Color32::from_rgb(241, 245, 249);
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
pub(super) const TEXT_FAINT: Color32 = Color32::from_rgb(100, 116, 139);
pub(super) const ACCENT_EMERALD: Color32 = Color32::from_rgb(52, 211, 153);
pub(super) const ACCENT_EMERALD_DEEP: Color32 = Color32::from_rgb(16, 185, 129);
pub(super) const ACCENT_BLUE: Color32 = Color32::from_rgb(96, 165, 250);
pub(super) const ACCENT_PURPLE: Color32 = Color32::from_rgb(167, 139, 250);
pub(super) const GRID_LINE: Color32 = Color32::from_rgb(148, 163, 184);

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn accent_color(accent: Accent) -> Color32 {
    match accent {
        Accent::Emerald => ACCENT_EMERALD,
        Accent::Blue => ACCENT_BLUE,
        Accent::Purple => ACCENT_PURPLE,
    }
}

pub(super) fn draw_progress_bar(painter: &Painter, rect: Rect, progress: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(15, 23, 42));

    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.0 {
        return;
    }

    let filled = Rect::from_min_max(
        rect.min,
        Pos2::new(rect.left() + rect.width() * progress, rect.bottom()),
    );
    painter.rect_filled(
        filled,
        0.0,
        blend_color(ACCENT_EMERALD, ACCENT_BLUE, progress),
    );
    painter.line_segment(
        [filled.right_top(), filled.right_bottom()],
        Stroke::new(1.0, ACCENT_BLUE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_maps_onto_alpha() {
        let half = with_opacity(ACCENT_EMERALD, 0.5);
        assert_eq!(half.a(), 128);
        assert_eq!(with_opacity(ACCENT_EMERALD, 2.0).a(), 255);
        assert_eq!(with_opacity(ACCENT_EMERALD, -1.0).a(), 0);
    }

    #[test]
    fn blend_endpoints_return_inputs() {
        assert_eq!(blend_color(ACCENT_EMERALD, ACCENT_BLUE, 0.0), ACCENT_EMERALD);
        assert_eq!(blend_color(ACCENT_EMERALD, ACCENT_BLUE, 1.0), ACCENT_BLUE);
    }
}
