//! 2-D vector: Cartesian components `x`, `y`, magnitude `mag`, direction `dr` in degrees.

use super::{acos_deg, asin_deg, div, number, sqrt, Candidate, Equations, Inputs};
use crate::error::FormulaError;
use crate::value::Resolved;

type Solved = Result<Resolved, FormulaError>;

fn x_from_y_mag(i: &Inputs<'_>) -> Solved {
    let (y, mag) = (i.scalar("y")?, i.scalar("mag")?);
    number(sqrt(mag * mag - y * y)?)
}

fn x_from_y_dr(i: &Inputs<'_>) -> Solved {
    let (y, dr) = (i.scalar("y")?, i.scalar("dr")?);
    number(div(y, dr.to_radians().tan())?)
}

fn x_from_mag_dr(i: &Inputs<'_>) -> Solved {
    let (mag, dr) = (i.scalar("mag")?, i.scalar("dr")?);
    number(mag * dr.to_radians().cos())
}

fn y_from_x_mag(i: &Inputs<'_>) -> Solved {
    let (x, mag) = (i.scalar("x")?, i.scalar("mag")?);
    number(sqrt(mag * mag - x * x)?)
}

fn y_from_x_dr(i: &Inputs<'_>) -> Solved {
    let (x, dr) = (i.scalar("x")?, i.scalar("dr")?);
    number(x * dr.to_radians().tan())
}

fn y_from_mag_dr(i: &Inputs<'_>) -> Solved {
    let (mag, dr) = (i.scalar("mag")?, i.scalar("dr")?);
    number(mag * dr.to_radians().sin())
}

fn mag_from_x_y(i: &Inputs<'_>) -> Solved {
    let (x, y) = (i.scalar("x")?, i.scalar("y")?);
    number(x.hypot(y))
}

fn mag_from_x_dr(i: &Inputs<'_>) -> Solved {
    let (x, dr) = (i.scalar("x")?, i.scalar("dr")?);
    number(div(x, dr.to_radians().cos())?)
}

fn mag_from_y_dr(i: &Inputs<'_>) -> Solved {
    let (y, dr) = (i.scalar("y")?, i.scalar("dr")?);
    number(div(y, dr.to_radians().sin())?)
}

fn dr_from_x_y(i: &Inputs<'_>) -> Solved {
    let (x, y) = (i.scalar("x")?, i.scalar("y")?);
    number(y.atan2(x).to_degrees())
}

fn dr_from_x_mag(i: &Inputs<'_>) -> Solved {
    let (x, mag) = (i.scalar("x")?, i.scalar("mag")?);
    number(acos_deg(div(x, mag)?)?)
}

fn dr_from_y_mag(i: &Inputs<'_>) -> Solved {
    let (y, mag) = (i.scalar("y")?, i.scalar("mag")?);
    number(asin_deg(div(y, mag)?)?)
}

pub const VECTOR_EQUATIONS: &[Equations] = &[
    Equations {
        target: "x",
        candidates: &[
            Candidate { requires: &["y", "mag"], formula: x_from_y_mag },
            Candidate { requires: &["y", "dr"], formula: x_from_y_dr },
            Candidate { requires: &["mag", "dr"], formula: x_from_mag_dr },
        ],
    },
    Equations {
        target: "y",
        candidates: &[
            Candidate { requires: &["x", "mag"], formula: y_from_x_mag },
            Candidate { requires: &["x", "dr"], formula: y_from_x_dr },
            Candidate { requires: &["mag", "dr"], formula: y_from_mag_dr },
        ],
    },
    Equations {
        target: "mag",
        candidates: &[
            Candidate { requires: &["x", "y"], formula: mag_from_x_y },
            Candidate { requires: &["x", "dr"], formula: mag_from_x_dr },
            Candidate { requires: &["y", "dr"], formula: mag_from_y_dr },
        ],
    },
    Equations {
        target: "dr",
        candidates: &[
            Candidate { requires: &["x", "y"], formula: dr_from_x_y },
            Candidate { requires: &["x", "mag"], formula: dr_from_x_mag },
            Candidate { requires: &["y", "mag"], formula: dr_from_y_mag },
        ],
    },
];
