//! Constant acceleration: initial velocity `u`, final velocity `v`, acceleration `a`,
//! time `t`, displacement `s`.
//!
//! Solving `t` from a displacement is quadratic; those candidates return both roots
//! as a [Resolved::Pair] and leave the choice to the caller.

use super::{div, number, pair, sqrt, Candidate, Equations, Inputs};
use crate::error::FormulaError;
use crate::value::Resolved;

type Solved = Result<Resolved, FormulaError>;

fn v_from_u_a_t(i: &Inputs<'_>) -> Solved {
    let (u, a, t) = (i.scalar("u")?, i.scalar("a")?, i.scalar("t")?);
    number(u + a * t)
}

fn v_from_u_a_s(i: &Inputs<'_>) -> Solved {
    let (u, a, s) = (i.scalar("u")?, i.scalar("a")?, i.scalar("s")?);
    number(sqrt(u * u + 2.0 * a * s)?)
}

fn v_from_u_t_s(i: &Inputs<'_>) -> Solved {
    let (u, t, s) = (i.scalar("u")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * s, t)? - u)
}

fn v_from_a_t_s(i: &Inputs<'_>) -> Solved {
    let (a, t, s) = (i.scalar("a")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * s + a * t * t, 2.0 * t)?)
}

fn u_from_v_a_t(i: &Inputs<'_>) -> Solved {
    let (v, a, t) = (i.scalar("v")?, i.scalar("a")?, i.scalar("t")?);
    number(v - a * t)
}

fn u_from_v_a_s(i: &Inputs<'_>) -> Solved {
    let (v, a, s) = (i.scalar("v")?, i.scalar("a")?, i.scalar("s")?);
    number(sqrt(v * v - 2.0 * a * s)?)
}

fn u_from_v_t_s(i: &Inputs<'_>) -> Solved {
    let (v, t, s) = (i.scalar("v")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * s, t)? - v)
}

fn u_from_a_t_s(i: &Inputs<'_>) -> Solved {
    let (a, t, s) = (i.scalar("a")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * s - a * t * t, 2.0 * t)?)
}

fn a_from_v_u_t(i: &Inputs<'_>) -> Solved {
    let (v, u, t) = (i.scalar("v")?, i.scalar("u")?, i.scalar("t")?);
    number(div(v - u, t)?)
}

fn a_from_v_u_s(i: &Inputs<'_>) -> Solved {
    let (v, u, s) = (i.scalar("v")?, i.scalar("u")?, i.scalar("s")?);
    number(div(v * v - u * u, 2.0 * s)?)
}

fn a_from_v_t_s(i: &Inputs<'_>) -> Solved {
    let (v, t, s) = (i.scalar("v")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * (v * t - s), t * t)?)
}

fn a_from_u_t_s(i: &Inputs<'_>) -> Solved {
    let (u, t, s) = (i.scalar("u")?, i.scalar("t")?, i.scalar("s")?);
    number(div(2.0 * (s - u * t), t * t)?)
}

fn t_from_v_u_a(i: &Inputs<'_>) -> Solved {
    let (v, u, a) = (i.scalar("v")?, i.scalar("u")?, i.scalar("a")?);
    number(div(v - u, a)?)
}

fn t_from_v_u_s(i: &Inputs<'_>) -> Solved {
    let (v, u, s) = (i.scalar("v")?, i.scalar("u")?, i.scalar("s")?);
    number(div(2.0 * s, u + v)?)
}

// s = vt - at²/2
fn t_from_v_a_s(i: &Inputs<'_>) -> Solved {
    let (v, a, s) = (i.scalar("v")?, i.scalar("a")?, i.scalar("s")?);
    let root = sqrt(v * v - 2.0 * a * s)?;
    pair(div(v + root, a)?, div(v - root, a)?)
}

// s = ut + at²/2
fn t_from_u_a_s(i: &Inputs<'_>) -> Solved {
    let (u, a, s) = (i.scalar("u")?, i.scalar("a")?, i.scalar("s")?);
    let root = sqrt(u * u + 2.0 * a * s)?;
    pair(div(-u + root, a)?, div(-u - root, a)?)
}

fn s_from_v_u_t(i: &Inputs<'_>) -> Solved {
    let (v, u, t) = (i.scalar("v")?, i.scalar("u")?, i.scalar("t")?);
    number((u + v) * t / 2.0)
}

fn s_from_v_u_a(i: &Inputs<'_>) -> Solved {
    let (v, u, a) = (i.scalar("v")?, i.scalar("u")?, i.scalar("a")?);
    number(div(v * v - u * u, 2.0 * a)?)
}

fn s_from_v_t_a(i: &Inputs<'_>) -> Solved {
    let (v, t, a) = (i.scalar("v")?, i.scalar("t")?, i.scalar("a")?);
    number(v * t - 0.5 * a * t * t)
}

fn s_from_u_t_a(i: &Inputs<'_>) -> Solved {
    let (u, t, a) = (i.scalar("u")?, i.scalar("t")?, i.scalar("a")?);
    number(u * t + 0.5 * a * t * t)
}

pub const SINGLE_ACC_EQUATIONS: &[Equations] = &[
    Equations {
        target: "v",
        candidates: &[
            Candidate { requires: &["u", "a", "t"], formula: v_from_u_a_t },
            Candidate { requires: &["u", "a", "s"], formula: v_from_u_a_s },
            Candidate { requires: &["u", "t", "s"], formula: v_from_u_t_s },
            Candidate { requires: &["a", "t", "s"], formula: v_from_a_t_s },
        ],
    },
    Equations {
        target: "u",
        candidates: &[
            Candidate { requires: &["v", "a", "t"], formula: u_from_v_a_t },
            Candidate { requires: &["v", "a", "s"], formula: u_from_v_a_s },
            Candidate { requires: &["v", "t", "s"], formula: u_from_v_t_s },
            Candidate { requires: &["a", "t", "s"], formula: u_from_a_t_s },
        ],
    },
    Equations {
        target: "a",
        candidates: &[
            Candidate { requires: &["v", "u", "t"], formula: a_from_v_u_t },
            Candidate { requires: &["v", "u", "s"], formula: a_from_v_u_s },
            Candidate { requires: &["v", "t", "s"], formula: a_from_v_t_s },
            Candidate { requires: &["u", "t", "s"], formula: a_from_u_t_s },
        ],
    },
    Equations {
        target: "t",
        candidates: &[
            Candidate { requires: &["v", "u", "a"], formula: t_from_v_u_a },
            Candidate { requires: &["v", "u", "s"], formula: t_from_v_u_s },
            Candidate { requires: &["v", "a", "s"], formula: t_from_v_a_s },
            Candidate { requires: &["u", "a", "s"], formula: t_from_u_a_s },
        ],
    },
    Equations {
        target: "s",
        candidates: &[
            Candidate { requires: &["v", "u", "t"], formula: s_from_v_u_t },
            Candidate { requires: &["v", "u", "a"], formula: s_from_v_u_a },
            Candidate { requires: &["v", "t", "a"], formula: s_from_v_t_a },
            Candidate { requires: &["u", "t", "a"], formula: s_from_u_t_a },
        ],
    },
];
