use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use eframe::egui::{Pos2, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub logical: Vec2,
    pub pixels_per_point: f32,
}

impl SurfaceSize {
    pub const EMPTY: Self = Self {
        logical: Vec2::ZERO,
        pixels_per_point: 1.0,
    };

    pub fn new(logical: Vec2, pixels_per_point: f32) -> Self {
        let pixels_per_point = if pixels_per_point.is_finite() && pixels_per_point > 0.0 {
            pixels_per_point
        } else {
            1.0
        };
        Self {
            logical,
            pixels_per_point,
        }
    }

    pub fn physical(self) -> [u32; 2] {
        let scale = |value: f32| (value.max(0.0) * self.pixels_per_point).round() as u32;
        [scale(self.logical.x), scale(self.logical.y)]
    }

    pub fn is_drawable(self) -> bool {
        self.logical.x.is_finite()
            && self.logical.y.is_finite()
            && self.logical.x > 0.0
            && self.logical.y > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostSnapshot {
    pub surface: SurfaceSize,
    pub pointer: Option<Pos2>,
    pub motion: MotionPreference,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resized(SurfaceSize),
    PointerMoved(Pos2),
    MotionChanged(MotionPreference),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub struct Subscription {
    id: SubscriptionId,
    rx: Receiver<HostEvent>,
}

impl Subscription {
    pub fn drain(&self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

struct Listener {
    id: SubscriptionId,
    tx: Sender<HostEvent>,
}

pub struct HostBus {
    latest: HostSnapshot,
    pointer: Pos2,
    listeners: Vec<Listener>,
    next_id: u64,
}

impl HostBus {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            latest: HostSnapshot {
                surface: SurfaceSize::EMPTY,
                pointer: None,
                motion,
            },
            pointer: Pos2::ZERO,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn latest(&self) -> HostSnapshot {
        self.latest
    }

    // Last known pointer position. Starts at the surface origin and is kept
    // when the pointer leaves the surface.
    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (tx, rx) = mpsc::channel();
        self.listeners.push(Listener { id, tx });
        log::debug!(
            "host listener {id:?} subscribed ({} active)",
            self.listener_count()
        );
        Subscription { id, rx }
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        let before = self.listeners.len();
        self.listeners
            .retain(|listener| listener.id != subscription.id);
        if self.listeners.len() == before {
            log::warn!("host listener {:?} was not registered", subscription.id);
        } else {
            log::debug!("host listener {:?} unsubscribed", subscription.id);
        }
    }

    pub fn observe(&mut self, snapshot: HostSnapshot) {
        let previous = self.latest;

        if snapshot.surface != previous.surface {
            let [width, height] = snapshot.surface.physical();
            log::debug!(
                "surface resized to {:.0}x{:.0} points ({width}x{height} px)",
                snapshot.surface.logical.x,
                snapshot.surface.logical.y
            );
            self.publish(HostEvent::Resized(snapshot.surface));
        }

        if let Some(pointer) = snapshot.pointer
            && pointer != self.pointer
        {
            self.pointer = pointer;
            self.publish(HostEvent::PointerMoved(pointer));
        }

        if snapshot.motion != previous.motion {
            log::info!("motion preference changed to {:?}", snapshot.motion);
            self.publish(HostEvent::MotionChanged(snapshot.motion));
        }

        self.latest = HostSnapshot {
            pointer: snapshot.pointer.or(previous.pointer),
            ..snapshot
        };
    }

    fn publish(&mut self, event: HostEvent) {
        self.listeners
            .retain(|listener| listener.tx.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    fn snapshot(width: f32, height: f32, pointer: Option<Pos2>, reduced: bool) -> HostSnapshot {
        HostSnapshot {
            surface: SurfaceSize::new(vec2(width, height), 2.0),
            pointer,
            motion: MotionPreference::from_reduced(reduced),
        }
    }

    #[test]
    fn publishes_only_changes() {
        let mut bus = HostBus::new(MotionPreference::Full);
        let subscription = bus.subscribe();

        bus.observe(snapshot(800.0, 600.0, None, false));
        bus.observe(snapshot(800.0, 600.0, None, false));
        bus.observe(snapshot(800.0, 600.0, Some(pos2(10.0, 20.0)), false));
        bus.observe(snapshot(800.0, 600.0, None, true));

        let events = subscription.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], HostEvent::Resized(size) if size.physical() == [1600, 1200]));
        assert_eq!(events[1], HostEvent::PointerMoved(pos2(10.0, 20.0)));
        assert_eq!(
            events[2],
            HostEvent::MotionChanged(MotionPreference::Reduced)
        );
        assert_eq!(bus.pointer(), pos2(10.0, 20.0));
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn unsubscribe_removes_listener_immediately() {
        let mut bus = HostBus::new(MotionPreference::Full);
        let first = bus.subscribe();
        let second = bus.subscribe();
        assert_eq!(bus.listener_count(), 2);

        bus.unsubscribe(first);
        assert_eq!(bus.listener_count(), 1);

        bus.observe(snapshot(100.0, 100.0, None, false));
        assert_eq!(second.drain().len(), 1);
    }

    #[test]
    fn dropped_receivers_are_pruned_on_publish() {
        let mut bus = HostBus::new(MotionPreference::Full);
        drop(bus.subscribe());
        assert_eq!(bus.listener_count(), 1);

        bus.observe(snapshot(100.0, 100.0, None, false));
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn degenerate_surfaces_are_not_drawable() {
        assert!(!SurfaceSize::EMPTY.is_drawable());
        assert!(!SurfaceSize::new(vec2(f32::NAN, 10.0), 1.0).is_drawable());
        assert!(SurfaceSize::new(vec2(1.0, 1.0), 0.0).is_drawable());
        assert_eq!(SurfaceSize::new(vec2(1.0, 1.0), 0.0).pixels_per_point, 1.0);
    }
}
