//! App: the animation state a host loop drives.
//!
//! Holds the simulation, the view, and the random source. The host calls
//! [`App::on_tick`] at 60 Hz, forwards keys and resizes, and pulls
//! [`App::render`] (or [`App::render_into`]) whenever it paints.

use log::debug;
use rand::Rng;

use crate::core::{Frame, Simulation};
use crate::input::HostEvent;
use crate::term::{FireworksView, FrameBuffer};
use crate::types::{Control, KeyAction};

pub struct App<R: Rng> {
    sim: Simulation,
    view: FireworksView,
    rng: R,
}

impl<R: Rng> App<R> {
    /// Start with one burst inside a `width` x `height` frame.
    pub fn new(width: u16, height: u16, mut rng: R) -> Self {
        let sim = Simulation::new(Frame::new(width, height), &mut rng);
        debug!("initial burst in {}x{} frame", width, height);
        Self {
            sim,
            view: FireworksView::default(),
            rng,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Advance one fixed 1/60 s step.
    pub fn on_tick(&mut self) {
        self.sim.advance();
    }

    /// Handle a key press. Anything but quit replaces the burst.
    pub fn on_key(&mut self, action: KeyAction) -> Control {
        if action == KeyAction::Respawn {
            self.sim.respawn(&mut self.rng);
            let frame = self.sim.frame();
            debug!("respawned burst in {}x{} frame", frame.width, frame.height);
        }
        action.control()
    }

    /// Record a new terminal size; the next render uses it.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        debug!("resize to {}x{}", width, height);
        self.sim.resize(width, height);
    }

    pub fn on_event(&mut self, event: HostEvent) -> Control {
        match event {
            HostEvent::Key(action) => self.on_key(action),
            HostEvent::Resize(width, height) => {
                self.on_resize(width, height);
                Control::Continue
            }
        }
    }

    /// Current frame as a printable string.
    pub fn render(&self) -> String {
        self.view.render_string(&self.sim)
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.sim, fb);
    }
}
