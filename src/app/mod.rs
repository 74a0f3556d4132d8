use std::path::PathBuf;

use eframe::egui::{self, Context};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::content::{PortfolioContent, load_content};

mod frame_loop;
mod host;
mod particles;
mod radar;
mod render_utils;
mod ui;

use host::{HostBus, MotionPreference};
use particles::ParticleRenderer;
use radar::{SkillRadar, SkillTooltip};

#[derive(Clone, Debug)]
pub struct Settings {
    pub content_path: Option<PathBuf>,
    pub reduced_motion: bool,
    pub particles: bool,
    pub seed: Option<u64>,
}

pub struct PortfolioApp {
    settings: Settings,
    state: AppState,
}

enum AppState {
    Ready(Box<PageModel>),
    Error(String),
}

struct PageModel {
    content: PortfolioContent,
    bus: HostBus,
    background: Option<ParticleRenderer>,
    background_enabled: bool,
    reduced_motion: bool,
    seed: Option<u64>,
    mounts: u64,
    radar: SkillRadar,
    tooltip: Option<SkillTooltip>,
    scroll_progress: f32,
    toast: Option<Toast>,
}

struct Toast {
    message: String,
    expires_at: f64,
}

impl PortfolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let state = Self::load(&settings);
        Self { settings, state }
    }

    fn load(settings: &Settings) -> AppState {
        match load_content(settings.content_path.as_deref()) {
            Ok(content) => AppState::Ready(Box::new(PageModel::new(content, settings))),
            Err(error) => {
                log::error!("failed to load portfolio content: {error:#}");
                AppState::Error(format!("{error:#}"))
            }
        }
    }
}

impl PageModel {
    fn new(content: PortfolioContent, settings: &Settings) -> Self {
        let motion = MotionPreference::from_reduced(settings.reduced_motion);
        Self {
            content,
            bus: HostBus::new(motion),
            background: None,
            background_enabled: settings.particles,
            reduced_motion: settings.reduced_motion,
            seed: settings.seed,
            mounts: 0,
            radar: SkillRadar::default(),
            tooltip: None,
            scroll_progress: 0.0,
            toast: None,
        }
    }

    // `mounts` only counts successful mounts, so a seeded layout does not
    // depend on how many frames had no drawable surface.
    fn mount_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.mounts)),
            None => StdRng::from_os_rng(),
        }
    }

    fn sync_background(&mut self) {
        match (self.background_enabled, self.background.is_some()) {
            (true, false) => {
                let rng = self.mount_rng();
                self.background = ParticleRenderer::mount(&mut self.bus, rng);
                if self.background.is_some() {
                    self.mounts += 1;
                }
            }
            (false, true) => {
                if let Some(mut renderer) = self.background.take() {
                    renderer.teardown(&mut self.bus);
                }
            }
            _ => {}
        }
    }
}

impl Drop for PageModel {
    fn drop(&mut self) {
        if let Some(mut renderer) = self.background.take() {
            renderer.teardown(&mut self.bus);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load portfolio content");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::load(&self.settings));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
