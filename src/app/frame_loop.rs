use eframe::egui::Context;

pub trait RepaintHost {
    fn request_frame(&self);
}

impl RepaintHost for Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket(u64);

#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameTicket>,
    issued: u64,
}

impl FrameLoop {
    pub fn schedule(&mut self, host: &impl RepaintHost) -> Option<FrameTicket> {
        if self.pending.is_some() {
            return None;
        }

        self.issued += 1;
        let ticket = FrameTicket(self.issued);
        self.pending = Some(ticket);
        host.request_frame();
        Some(ticket)
    }

    pub fn take_due(&mut self) -> Option<FrameTicket> {
        self.pending.take()
    }

    pub fn cancel(&mut self) -> Option<FrameTicket> {
        let cancelled = self.pending.take();
        if let Some(ticket) = cancelled {
            log::trace!("cancelled pending frame {ticket:?}");
        }
        cancelled
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
pub(in crate::app) mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    pub(in crate::app) struct CountingHost {
        pub(in crate::app) requests: Cell<usize>,
    }

    impl RepaintHost for CountingHost {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    #[test]
    fn only_one_ticket_is_outstanding() {
        let host = CountingHost::default();
        let mut frame_loop = FrameLoop::default();

        let first = frame_loop.schedule(&host);
        assert!(first.is_some());
        assert!(frame_loop.schedule(&host).is_none());
        assert_eq!(host.requests.get(), 1);

        assert_eq!(frame_loop.take_due(), first);
        assert!(!frame_loop.is_scheduled());

        let second = frame_loop.schedule(&host);
        assert_ne!(first, second);
        assert_eq!(host.requests.get(), 2);
    }

    #[test]
    fn cancelled_frame_is_not_due() {
        let host = CountingHost::default();
        let mut frame_loop = FrameLoop::default();

        frame_loop.schedule(&host);
        assert!(frame_loop.cancel().is_some());
        assert!(frame_loop.take_due().is_none());
        assert!(frame_loop.cancel().is_none());
    }
}
