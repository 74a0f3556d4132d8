use std::time::Duration;

use eframe::egui::{self, Align2, Context, Id, Order, RichText, vec2};

use crate::content::Skill;

use super::super::PageModel;
use super::super::render_utils::{ACCENT_EMERALD, TEXT_FAINT, TEXT_STRONG};

const TOOLTIP_OFFSET: egui::Vec2 = vec2(10.0, -40.0);

// The record's own level, even when the chart had to clamp it.
fn level_text(skill: &Skill) -> String {
    format!("{}%", skill.level)
}

impl PageModel {
    pub(in crate::app) fn draw_tooltip(&self, ctx: &Context) {
        let Some(tooltip) = &self.tooltip else {
            return;
        };

        egui::Area::new(Id::new("skill_tooltip"))
            .order(Order::Tooltip)
            .fixed_pos(tooltip.pointer + TOOLTIP_OFFSET)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&tooltip.skill.name).strong().color(TEXT_STRONG));
                    ui.label(
                        RichText::new(level_text(&tooltip.skill))
                            .monospace()
                            .color(ACCENT_EMERALD),
                    );
                    ui.label(
                        RichText::new(&tooltip.skill.category)
                            .small()
                            .color(TEXT_FAINT),
                    );
                });
            });
    }

    pub(in crate::app) fn draw_toast(&mut self, ctx: &Context) {
        let now = ctx.input(|input| input.time);
        let Some(toast) = &self.toast else {
            return;
        };

        if now >= toast.expires_at {
            self.toast = None;
            return;
        }

        egui::Area::new(Id::new("toast"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -24.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(TEXT_STRONG));
                });
            });
        ctx.request_repaint_after(Duration::from_secs_f64(toast.expires_at - now));
    }
}
