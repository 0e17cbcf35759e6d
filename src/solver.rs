use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::model::{GridInfo, ModelInfo, SimulationConfig};

/// Everything the immersed boundary solver receives for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverInput {
    pub structure: PathBuf,
    pub mu: f64,
    pub rho: f64,
    pub grid_info: GridInfo,
    pub dt: f64,
    pub t_final: f64,
    pub model_info: ModelInfo,
}

impl SolverInput {
    pub fn new(structure: PathBuf, config: SimulationConfig) -> Self {
        Self {
            structure,
            mu: config.fluid.viscosity,
            rho: config.fluid.density,
            grid_info: config.grid,
            dt: config.temporal.dt,
            t_final: config.temporal.t_final,
            model_info: config.model,
        }
    }
}

/// A fluid–structure solver that accepts one fully built run.
pub trait Solver {
    fn solve(&mut self, input: SolverInput) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Hand-off report
// ---------------------------------------------------------------------------

/// Writes the solver input instead of solving it.
///
/// Used by the CLI so a run can be inspected or piped into an external
/// solver process.
pub struct Report<W> {
    out: W,
    json: bool,
}

impl<W: Write> Report<W> {
    pub fn text(out: W) -> Self {
        Self { out, json: false }
    }

    pub fn json(out: W) -> Self {
        Self { out, json: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Solver for Report<W> {
    fn solve(&mut self, input: SolverInput) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut self.out, &input)?;
            writeln!(self.out)?;
            return Ok(());
        }

        let g = &input.grid_info;
        let m = &input.model_info;
        let active = m.active();

        writeln!(self.out, "{} {}", "Structure".bold(), input.structure.display())?;
        writeln!(self.out, "  Fluid      : mu = {}  rho = {}", input.mu, input.rho)?;
        writeln!(self.out, "  Time       : dt = {}  T_final = {}", input.dt, input.t_final)?;
        writeln!(
            self.out,
            "  Grid       : {} x {}  over {} x {}  (dx = {}, dy = {}, supp = {})",
            g.nx.to_string().cyan(),
            g.ny.to_string().cyan(),
            g.lx,
            g.ly,
            g.dx,
            g.dy,
            g.supp
        )?;
        if m.gravity.is_on() {
            writeln!(self.out, "  Gravity    : ({}, {})", m.x_gravity, m.y_gravity)?;
        }
        writeln!(
            self.out,
            "  Models     : {}",
            if active.is_empty() {
                "none".dimmed().to_string()
            } else {
                active.join(", ").green().to_string()
            }
        )?;
        writeln!(self.out, "  Dump every : {} step(s)", g.p_dump)?;
        Ok(())
    }
}
