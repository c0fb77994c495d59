//! Everything between the orrery and the pixels: projecting world
//! coordinates, drawing each frame, and deciding when to stop.

mod headless;
mod pacing;
mod projection;
mod simulation;
mod surface;
mod window;

pub use headless::{DrawOp, HeadlessSurface};
pub use pacing::FrameLimiter;
pub use projection::Projection;
pub use simulation::{LoopState, Simulation};
pub use surface::Surface;
pub use window::WindowSurface;
