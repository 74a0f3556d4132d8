mod field;
mod links;
mod quadtree;

use eframe::egui::{Painter, Pos2, Stroke};
use rand::rngs::StdRng;

use super::frame_loop::{FrameLoop, RepaintHost};
use super::host::{HostBus, HostEvent, MotionPreference, Subscription, SurfaceSize};
use super::render_utils::{ACCENT_EMERALD, with_opacity};
pub use field::{Particle, ParticleField};
pub use links::Link;

const DOT_OPACITY: f32 = 0.2;
const STATIC_DOT_OPACITY: f32 = 0.15;
const LINK_WIDTH: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Pos2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FieldScene {
    pub dots: Vec<Dot>,
    pub links: Vec<Link>,
}

impl FieldScene {
    fn rebuild(&mut self, particles: &[Particle], opacity: f32, with_links: bool) {
        self.dots.clear();
        self.dots.extend(particles.iter().map(|particle| Dot {
            center: particle.position,
            radius: particle.radius,
            opacity,
        }));

        if with_links {
            let positions = particles
                .iter()
                .map(|particle| particle.position)
                .collect::<Vec<_>>();
            links::links(&positions, &mut self.links);
        } else {
            self.links.clear();
        }
    }

    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for link in &self.links {
            let (Some(from), Some(to)) = (self.dots.get(link.from), self.dots.get(link.to)) else {
                continue;
            };
            painter.line_segment(
                [from.center + offset, to.center + offset],
                Stroke::new(LINK_WIDTH, with_opacity(ACCENT_EMERALD, link.opacity)),
            );
        }

        for dot in &self.dots {
            painter.circle_filled(
                dot.center + offset,
                dot.radius,
                with_opacity(ACCENT_EMERALD, dot.opacity),
            );
        }
    }
}

pub struct ParticleRenderer {
    field: ParticleField,
    surface: SurfaceSize,
    pointer: Pos2,
    motion: MotionPreference,
    frame_loop: FrameLoop,
    subscription: Option<Subscription>,
    scene: FieldScene,
    scene_current: bool,
    scene_builds: u64,
    running: bool,
    rng: StdRng,
}

impl ParticleRenderer {
    pub fn mount(bus: &mut HostBus, mut rng: StdRng) -> Option<Self> {
        let latest = bus.latest();
        if !latest.surface.is_drawable() {
            log::debug!("particle field not mounted: surface is not drawable");
            return None;
        }

        let field = ParticleField::seeded(latest.surface.logical, &mut rng);
        log::info!(
            "particle field mounted with {} particles ({:?} motion)",
            field.particles().len(),
            latest.motion
        );

        Some(Self {
            field,
            surface: latest.surface,
            pointer: bus.pointer(),
            motion: latest.motion,
            frame_loop: FrameLoop::default(),
            subscription: Some(bus.subscribe()),
            scene: FieldScene::default(),
            scene_current: false,
            scene_builds: 0,
            running: false,
            rng,
        })
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub fn scene(&self) -> &FieldScene {
        &self.scene
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.frame_loop.is_scheduled()
    }

    #[cfg(test)]
    pub fn scene_builds(&self) -> u64 {
        self.scene_builds
    }

    pub fn on_frame(&mut self, host: &impl RepaintHost) -> &FieldScene {
        let events = match &self.subscription {
            Some(subscription) => subscription.drain(),
            None => return &self.scene,
        };

        for event in events {
            match event {
                HostEvent::Resized(surface) => {
                    self.surface = surface;
                    self.field.reseed(surface.logical, &mut self.rng);
                    self.scene_current = false;
                    log::debug!(
                        "reseeded particle field with {} particles (generation {})",
                        self.field.particles().len(),
                        self.field.generation()
                    );
                }
                HostEvent::PointerMoved(pointer) => self.pointer = pointer,
                HostEvent::MotionChanged(motion) => {
                    if motion != self.motion {
                        self.motion = motion;
                        if motion.is_reduced() {
                            self.frame_loop.cancel();
                            self.running = false;
                            self.scene_current = false;
                        }
                    }
                }
            }
        }

        if self.motion.is_reduced() {
            if !self.scene_current {
                self.scene
                    .rebuild(self.field.particles(), STATIC_DOT_OPACITY, false);
                self.scene_current = true;
                self.scene_builds += 1;
            }
            return &self.scene;
        }

        let due = self.frame_loop.take_due().is_some();
        if due || !self.running {
            self.field.step(Some(self.pointer));
            self.scene.rebuild(self.field.particles(), DOT_OPACITY, true);
            self.scene_current = true;
            self.scene_builds += 1;
            log::trace!(
                "scene #{} with {} links",
                self.scene_builds,
                self.scene.links.len()
            );
        }
        self.running = true;
        self.frame_loop.schedule(host);

        &self.scene
    }

    pub fn teardown(&mut self, bus: &mut HostBus) {
        self.frame_loop.cancel();
        self.running = false;
        if let Some(subscription) = self.subscription.take() {
            bus.unsubscribe(subscription);
            log::info!("particle field torn down");
        }
    }
}

impl Drop for ParticleRenderer {
    fn drop(&mut self) {
        if self.subscription.is_some() {
            log::warn!("particle field dropped without teardown");
        }
    }
}
