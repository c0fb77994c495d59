use solar_sim::file::load_solar_system;
use solar_sim::gui::{HeadlessSurface, Simulation};
use solar_sim::SimConfig;

use clap::Parser;

/// Runs the solar system without a window and prints where everything ended up.
#[derive(Debug, Parser)]
struct Args {
    /// Number of frames to simulate
    #[arg(
        short,
        long,
        default_value_t = 365,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    frames: u64,
    /// Only report this body
    #[arg(short, long)]
    body: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SimConfig::default().unpaced();
    config.validate()?;
    let orrery = load_solar_system(&config)?;

    if let Some(name) = &args.body {
        if orrery.get_body(name).is_none() {
            return Err(format!("no orbiting body named {:?}", name).into());
        }
    }

    let surface = HeadlessSurface::quit_after(args.frames);
    let mut simulation = Simulation::new(&config, orrery, surface);
    simulation.run()?;

    let days = simulation.frames() as f64 * config.timestep / 86400.0;
    println!(
        "After {} frames ({} days of simulated time):",
        simulation.frames(),
        days
    );

    let orrery = simulation.orrery();
    let central = orrery.central();
    for body in orrery.bodies() {
        if let Some(name) = &args.body {
            if !body.name().eq_ignore_ascii_case(name) {
                continue;
            }
        }

        let position = body.position();
        let velocity = body.velocity();
        println!("{}", body.name());
        println!("- Position: ({:e}, {:e}) m", position.x, position.y);
        println!("- Velocity: ({:e}, {:e}) m/s", velocity.x, velocity.y);
        println!(
            "- Distance from {}: {:e} m",
            central.name(),
            (central.position() - position).norm()
        );
        println!("- Speed: {:e} m/s", velocity.norm());
        println!(
            "- Trail: {} of {} points",
            body.trail().len(),
            body.trail().capacity()
        );
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count() {
        let args = Args::try_parse_from(["orbit_report"]).unwrap();
        assert_eq!(args.frames, 365);
        assert_eq!(args.body, None);

        let args = Args::try_parse_from(["orbit_report", "-f", "1", "-b", "earth"]).unwrap();
        assert_eq!(args.frames, 1);
        assert_eq!(args.body.as_deref(), Some("earth"));

        assert!(Args::try_parse_from(["orbit_report", "--frames", "0"]).is_err());
        assert!(Args::try_parse_from(["orbit_report", "--frames", "-3"]).is_err());
    }
}
