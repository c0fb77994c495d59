use nalgebra::Vector2;

use super::body::Body;
use crate::error::{SimError, SimResult};

/// Something that can tell how hard a body is being pulled.
///
/// Implementations only read state, so the caller is free to apply the
/// result whenever it likes. A model where the orbiting bodies pull on each
/// other would compute every force before applying any of them.
pub trait ForceModel {
    /// Net force on `body`, in newtons
    fn force_on(&self, body: &Body) -> SimResult<Vector2<f64>>;
}

/// Newtonian gravity from a single source that never moves.
pub struct CentralGravity<'a> {
    source: &'a Body,
    newton_g: f64,
}

impl<'a> CentralGravity<'a> {
    pub fn new(source: &'a Body, newton_g: f64) -> Self {
        CentralGravity { source, newton_g }
    }
}

impl ForceModel for CentralGravity<'_> {
    fn force_on(&self, body: &Body) -> SimResult<Vector2<f64>> {
        let d = self.source.position() - body.position();
        let r = d.norm();

        let degenerate = || SimError::DegenerateGeometry {
            name: body.name().to_owned(),
            distance: r,
        };

        if !(r.is_finite() && r > 0.0) {
            return Err(degenerate());
        }

        // F = G M m / r^2, pointed along d
        let force = self.newton_g * self.source.mass() * body.mass() / r.powi(2);
        let components = Vector2::new(force * (d.x / r), force * (d.y / r));

        if components.iter().all(|f| f.is_finite()) {
            Ok(components)
        } else {
            Err(degenerate())
        }
    }
}
