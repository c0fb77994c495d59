use nalgebra::{Point3, Vector2};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::orrery::{Body, BodyInfo, Orrery};

/// The Sun and the eight planets, starting lined up along the x-axis.
pub const SOLAR_SYSTEM: &str = include_str!("solar_system.txt");

pub fn load_solar_system(config: &SimConfig) -> SimResult<Orrery> {
    read_bodies(SOLAR_SYSTEM, config)
}

/// Builds an orrery from a whitespace-separated table. The first line is a
/// header, the first body is the central one, and every body after it orbits.
///
/// Columns: name, mass (kg), radius (px), color (RRGGBB), x, y (m), vx, vy (m/s)
pub fn read_bodies(table: &str, config: &SimConfig) -> SimResult<Orrery> {
    let mut central = None;
    let mut orbiting = vec![];

    // Skip the header; line numbers are 1-based
    for (idx, line) in table.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fail = |reason: String| SimError::BodyTable {
            line: line_no,
            reason,
        };
        let mut fields = line.split_ascii_whitespace();

        macro_rules! next_string {
            ($what:expr) => {
                fields
                    .next()
                    .ok_or_else(|| fail(format!("missing {}", $what)))?
            };
        }

        macro_rules! next_f64 {
            ($what:expr) => {{
                let field = next_string!($what);
                field
                    .parse::<f64>()
                    .map_err(|e| fail(format!("bad {} {:?}: {}", $what, field, e)))?
            }};
        }

        let name = next_string!("name");
        let mass = next_f64!("mass");
        let radius = next_f64!("radius") as f32;
        let color = parse_color(next_string!("color")).map_err(fail)?;
        let position = Vector2::new(next_f64!("x"), next_f64!("y"));
        let velocity = Vector2::new(next_f64!("vx"), next_f64!("vy"));

        if let Some(extra) = fields.next() {
            return Err(fail(format!("unexpected trailing field {:?}", extra)));
        }

        let info = BodyInfo {
            name: name.to_owned(),
            radius,
            color,
        };
        let body = Body::new(info, position, velocity, mass, config.trail_capacity)?;

        if central.is_none() {
            central = Some(body);
        } else {
            orbiting.push(body);
        }
    }

    let mut orrery = Orrery::new(central.ok_or(SimError::BodyTable {
        line: 1,
        reason: "no bodies".to_owned(),
    })?);
    for body in orbiting {
        orrery.add_body(body);
    }
    Ok(orrery)
}

fn parse_color(s: &str) -> Result<Point3<f32>, String> {
    if s.len() != 6 || !s.is_ascii() {
        return Err(format!("color {:?} is not of the form RRGGBB", s));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|e| format!("bad color {:?}: {}", s, e))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}
