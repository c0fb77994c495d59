use crate::config::SimConfig;
use crate::error::SimResult;

mod body;
mod force;
mod trail;

pub use body::{Body, BodyInfo};
pub use force::{CentralGravity, ForceModel};
pub use trail::Trail;

/// One fixed central body, and everything orbiting it.
///
/// Orbiting bodies are kept in construction order, which is also the order
/// they get stepped and drawn in.
#[derive(Debug, Clone)]
pub struct Orrery {
    central: Body,
    orbiting: Vec<Body>,
}

impl Orrery {
    pub fn new(central: Body) -> Self {
        Orrery {
            central,
            orbiting: vec![],
        }
    }

    pub fn add_body(&mut self, body: Body) {
        self.orbiting.push(body);
    }

    pub fn central(&self) -> &Body {
        &self.central
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.orbiting.iter()
    }

    pub fn get_body(&self, name: &str) -> Option<&Body> {
        self.orbiting
            .iter()
            .find(|body| body.name().eq_ignore_ascii_case(name))
    }

    pub fn num_bodies(&self) -> usize {
        self.orbiting.len()
    }

    /// Splits the borrow so orbiting bodies can be stepped against the
    /// central one.
    pub fn split_mut(&mut self) -> (&Body, std::slice::IterMut<'_, Body>) {
        (&self.central, self.orbiting.iter_mut())
    }

    /// Steps every orbiting body once. Bodies that fail are left untouched,
    /// and the first failure is returned after all the others have moved.
    pub fn advance(&mut self, config: &SimConfig) -> SimResult<()> {
        let mut first_error = None;
        let (central, bodies) = self.split_mut();
        for body in bodies {
            if let Err(e) = body.integrate(central, config) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
