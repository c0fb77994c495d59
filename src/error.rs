/// Everything that can go wrong while setting up or stepping the simulation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("body {name} has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },
    #[error("body {name} has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f32 },
    #[error("body {name} is at distance {distance} from its gravity source")]
    DegenerateGeometry { name: String, distance: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("body table, line {line}: {reason}")]
    BodyTable { line: usize, reason: String },
}

pub type SimResult<T> = Result<T, SimError>;
