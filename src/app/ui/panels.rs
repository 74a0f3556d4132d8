use eframe::egui::{self, Align, Context, Layout, Pos2, Rect, RichText, ScrollArea, Sense, vec2};

use super::super::host::{HostSnapshot, MotionPreference, SurfaceSize};
use super::super::render_utils::{ACCENT_EMERALD, PAGE_BACKGROUND, TEXT_STRONG, draw_progress_bar};
use super::super::PageModel;

const PROGRESS_BAR_HEIGHT: f32 = 2.0;

pub(in crate::app) fn scroll_progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

impl PageModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("header")
            .resizable(false)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(PAGE_BACKGROUND))
            .show(ctx, |ui| self.draw_header(ui));

        self.tooltip = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(PAGE_BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.sync_host(ctx, rect);
                self.sync_background();

                if let Some(renderer) = self.background.as_mut() {
                    renderer.on_frame(ctx).paint(ui.painter(), rect.min);
                }

                let output = ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.draw_sections(ui));
                self.scroll_progress = if self.reduced_motion {
                    1.0
                } else {
                    scroll_progress(
                        output.state.offset.y,
                        output.content_size.y,
                        output.inner_rect.height(),
                    )
                };
            });

        self.draw_tooltip(ctx);
        self.draw_toast(ctx);
    }

    fn sync_host(&mut self, ctx: &Context, rect: Rect) {
        let pointer = ctx
            .input(|input| input.pointer.hover_pos())
            .map(|pointer| Pos2::ZERO + (pointer - rect.min));
        self.bus.observe(HostSnapshot {
            surface: SurfaceSize::new(rect.size(), ctx.pixels_per_point()),
            pointer,
            motion: MotionPreference::from_reduced(self.reduced_motion),
        });
    }

    fn draw_header(&mut self, ui: &mut egui::Ui) {
        let (bar_rect, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), PROGRESS_BAR_HEIGHT),
            Sense::hover(),
        );
        draw_progress_bar(ui.painter(), bar_rect, self.scroll_progress);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&self.content.owner.name)
                    .strong()
                    .size(16.0)
                    .color(TEXT_STRONG),
            );
            ui.label(RichText::new("portfolio").monospace().color(ACCENT_EMERALD));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.checkbox(&mut self.reduced_motion, "Reduce motion");
                ui.checkbox(&mut self.background_enabled, "Particles");
                if let Some(renderer) = &self.background {
                    let [width, height] = renderer.surface().physical();
                    ui.label(
                        RichText::new(format!(
                            "{} particles · {width}x{height} px",
                            renderer.field().particles().len()
                        ))
                        .small()
                        .weak(),
                    );
                }
            });
        });
    }
}
