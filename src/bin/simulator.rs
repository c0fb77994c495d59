use solar_sim::file::load_solar_system;
use solar_sim::gui::{Simulation, WindowSurface};
use solar_sim::SimConfig;

/// The Sun and the eight planets, all starting on the positive x-axis and
/// moving counterclockwise (on screen, clockwise, since y points down).
/// Each frame is 30 days. Close the window to quit.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    config.validate()?;
    let orrery = load_solar_system(&config)?;

    let window = WindowSurface::open(&config);
    Simulation::new(&config, orrery, window).run()?;
    Ok(())
}
