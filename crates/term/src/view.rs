//! FireworksView: maps a `core::Simulation` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Particle, Simulation};
use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Rasterizes particles onto a grid the size of the simulation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireworksView {
    background: Cell,
}

impl Default for FireworksView {
    fn default() -> Self {
        Self {
            background: Cell::default(),
        }
    }
}

impl FireworksView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the simulation into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, sim: &Simulation, fb: &mut FrameBuffer) {
        let frame = sim.frame();
        fb.resize(frame.width, frame.height);
        fb.clear(self.background);

        // Later particles overwrite earlier ones sharing a cell.
        for p in sim.particles() {
            self.draw_particle(fb, p);
        }
    }

    /// Convenience wrapper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation) -> FrameBuffer {
        let frame = sim.frame();
        let mut fb = FrameBuffer::new(frame.width, frame.height);
        self.render_into(sim, &mut fb);
        fb
    }

    /// Printable frame: rows joined by `\n`, particles colored.
    pub fn render_string(&self, sim: &Simulation) -> String {
        self.render(sim).to_ansi_string()
    }

    fn draw_particle(&self, fb: &mut FrameBuffer, p: &Particle) {
        if let Some((x, y)) = p.cell(fb.width(), fb.height()) {
            fb.put_char(x, y, p.glyph, CellStyle::fg(p.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Frame, Point, Projectile, Vector};
    use crate::types::{Rgb, PALETTE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, glyph: char, color: Rgb) -> Particle {
        Particle::new(
            Projectile::new(Point::new(x, y), Vector::default(), Vector::default()),
            glyph,
            color,
        )
    }

    fn sim_with(width: u16, height: u16, particles: &[Particle]) -> Simulation {
        let mut sim = Simulation::new(Frame::new(width, height), &mut StdRng::seed_from_u64(1));
        sim.replace_particles(particles.iter().copied().collect());
        sim
    }

    #[test]
    fn draws_particle_at_floored_cell() {
        let sim = sim_with(4, 2, &[particle(2.7, 1.3, '*', PALETTE[0])]);
        let fb = FireworksView::default().render(&sim);

        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.ch, '*');
        assert_eq!(cell.style.fg, Some(PALETTE[0]));
        assert_eq!(fb.to_plain_string(), "    \n  * ");
    }

    #[test]
    fn skips_out_of_range_particles() {
        let sim = sim_with(
            3,
            2,
            &[
                particle(-1000.0, 99999.0, '+', PALETTE[0]),
                particle(3.0, 0.0, '+', PALETTE[0]),
                particle(0.0, -0.1, '+', PALETTE[0]),
                particle(f64::NAN, 0.0, '+', PALETTE[0]),
            ],
        );
        let fb = FireworksView::default().render(&sim);
        assert_eq!(fb.to_plain_string(), "   \n   ");
    }

    #[test]
    fn last_particle_wins_shared_cell() {
        let sim = sim_with(
            2,
            1,
            &[
                particle(0.2, 0.2, '+', PALETTE[0]),
                particle(0.8, 0.9, '•', PALETTE[1]),
            ],
        );
        let fb = FireworksView::default().render(&sim);
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, '•');
        assert_eq!(cell.style.fg, Some(PALETTE[1]));
    }

    #[test]
    fn render_into_clears_previous_frame() {
        let view = FireworksView::default();
        let mut sim = sim_with(3, 1, &[particle(0.0, 0.0, '*', PALETTE[0])]);
        let mut fb = FrameBuffer::new(3, 1);
        view.render_into(&sim, &mut fb);
        assert_eq!(fb.to_plain_string(), "*  ");

        sim.replace_particles(std::iter::once(particle(2.0, 0.0, '*', PALETTE[0])).collect());
        view.render_into(&sim, &mut fb);
        assert_eq!(fb.to_plain_string(), "  *");
    }

    #[test]
    fn render_into_follows_frame_size() {
        let view = FireworksView::default();
        let mut sim = sim_with(3, 1, &[]);
        let mut fb = FrameBuffer::new(80, 24);
        view.render_into(&sim, &mut fb);
        assert_eq!((fb.width(), fb.height()), (3, 1));

        sim.resize(5, 2);
        view.render_into(&sim, &mut fb);
        assert_eq!((fb.width(), fb.height()), (5, 2));
    }

    #[test]
    fn zero_frame_renders_empty_string() {
        let sim = Simulation::new(Frame::new(0, 0), &mut StdRng::seed_from_u64(9));
        assert_eq!(FireworksView::default().render_string(&sim), "");
    }
}
