//! Front end for IB2d, a 2D immersed boundary fluid–structure solver.
//!
//! An `input2d` file lists the run's numeric parameters as `name = value`
//! lines in a fixed order, plus one `string_name = <file>` line naming the
//! Lagrangian structure.  [`load`] turns such a file into a
//! [`SimulationConfig`] and the resolved structure path; [`Run::handoff`]
//! packages both for a [`Solver`].

pub mod error;
pub mod input;
pub mod model;
pub mod schema;
pub mod solver;

use std::path::{Path, PathBuf};

use tracing::info;

pub use error::Input2dError;
pub use input::models::ParameterFile;
pub use model::SimulationConfig;
pub use solver::{Solver, SolverInput};

/// A parsed input file together with the configuration built from it.
#[derive(Debug, Clone)]
pub struct Run {
    pub file: ParameterFile,
    pub config: SimulationConfig,
}

impl Run {
    pub fn structure(&self) -> &Path {
        &self.file.structure
    }

    pub fn handoff(self) -> SolverInput {
        SolverInput::new(self.file.structure, self.config)
    }
}

/// Parse `path` and build its configuration.  Either both succeed or the
/// first failure is returned.
pub fn load(path: &Path) -> Result<Run, Input2dError> {
    let file = input::parse_file(path)?;
    let config = SimulationConfig::from_parameters(&file.values())?;
    info!(
        input = %path.display(),
        structure = %file.structure.display(),
        parameters = file.parameters.len(),
        "loaded run configuration"
    );
    Ok(Run { file, config })
}

/// Load `path` and hand the result to `solver` exactly once.
pub fn run_with(path: &Path, solver: &mut dyn Solver) -> anyhow::Result<PathBuf> {
    let run = load(path)?;
    let structure = run.file.structure.clone();
    solver.solve(run.handoff())?;
    Ok(structure)
}
