//! The fixed positional layout of an input2d file.
//!
//! Position in the file decides which field a value feeds; names only serve
//! as a cross-check.  The order here must never change, existing input files
//! depend on it.

use std::fmt::Write as _;
use std::ops::Range;

use crate::input::lines::{COMMENT_MARKER, REFERENCE_KEY};
use crate::input::models::ParameterFile;
use crate::model::SimulationConfig;

/// Number of numeric slots every input2d file must supply.
pub const SCHEMA_LEN: usize = 35;

pub const MU: usize = 0;
pub const RHO: usize = 1;
pub const T_FINAL: usize = 2;
pub const DT: usize = 3;
pub const NX: usize = 4;
pub const NY: usize = 5;
pub const LX: usize = 6;
pub const LY: usize = 7;
pub const SUPP: usize = 8;
pub const SPRINGS: usize = 9;
pub const UPDATE_SPRINGS: usize = 10;
pub const TARGET_PTS: usize = 11;
pub const UPDATE_TARGET_PTS: usize = 12;
pub const BEAMS: usize = 13;
pub const UPDATE_BEAMS: usize = 14;
pub const MUSCLES: usize = 15;
pub const HILL_3_MUSCLES: usize = 16;
pub const ARB_EXT_FORCE: usize = 17;
pub const TRACERS: usize = 18;
pub const MASS: usize = 19;
pub const GRAVITY: usize = 20;
pub const X_GRAVITY: usize = 21;
pub const Y_GRAVITY: usize = 22;
pub const POROUS: usize = 23;
pub const CONCENTRATION: usize = 24;
pub const ELECTROPHYSIOLOGY: usize = 25;
pub const DAMPED_SPRINGS: usize = 26;
pub const UPDATE_DAMPED_SPRINGS: usize = 27;
pub const PRINT_DUMP: usize = 28;
pub const PLOT_MATPLOTLIB: usize = 29;
pub const PLOT_LAG_PTS: usize = 30;
pub const PLOT_VELOCITY: usize = 31;
pub const PLOT_VORTICITY: usize = 32;
pub const PLOT_MAG_VEL: usize = 33;
pub const PLOT_PRESSURE: usize = 34;

/// One slot of the layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical identifier written by [`render_input2d`].
    pub name: &'static str,
    /// Other identifiers seen in the wild for the same slot.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl FieldSpec {
    /// Loose name match: case and underscores are ignored.
    pub fn accepts(&self, name: &str) -> bool {
        let wanted = normalise(name);
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .any(|n| normalise(n) == wanted)
    }
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

const fn field(
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        aliases,
        description,
    }
}

pub const FIELDS: [FieldSpec; SCHEMA_LEN] = [
    field("mu", &[], "Dynamic viscosity"),
    field("rho", &[], "Density"),
    field("T_final", &["Tfinal"], "Final simulation time"),
    field("dt", &[], "Time-step"),
    field("Nx", &[], "Eulerian points in x"),
    field("Ny", &[], "Eulerian points in y"),
    field("Lx", &[], "Domain length in x"),
    field("Ly", &[], "Domain length in y"),
    field("supp", &[], "Delta-function support points"),
    field("springs", &[], "Springs (0=no, 1=yes)"),
    field("update_springs", &[], "Update springs (0=no, 1=yes)"),
    field("target_pts", &[], "Target points (0=no, 1=yes)"),
    field("update_target_pts", &[], "Update target points (0=no, 1=yes)"),
    field("beams", &[], "Beams (0=no, 1=yes)"),
    field("update_beams", &[], "Update beams (0=no, 1=yes)"),
    field("muscles", &[], "Length/tension Hill muscles (0=no, 1=yes)"),
    field("hill_3_muscles", &[], "3-element Hill muscles (0=no, 1=yes)"),
    field("arb_ext_force", &[], "External force on fluid grid (0=no, 1=yes)"),
    field("tracers", &[], "Tracer particles (0=no, 1=yes)"),
    field("mass", &["mass_pts"], "Mass points (0=no, 1=yes)"),
    field("gravity", &[], "Gravity (0=no, 1=yes)"),
    field("xG", &[], "Gravity vector x-component"),
    field("yG", &[], "Gravity vector y-component"),
    field("porous", &[], "Porous media (0=no, 1=yes)"),
    field("concentration", &[], "Background concentration gradient (0=no, 1=yes)"),
    field("electro_phys", &["electrophysiology"], "Electrophysiology (0=no, 1=yes)"),
    field("damped_springs", &["d_springs"], "Damped springs (0=no, 1=yes)"),
    field("update_D_Springs", &["update_damped_springs"], "Update damped springs (0=no, 1=yes)"),
    field("print_dump", &["pDump"], "Time-steps between dumps"),
    field("plot_Matplotlib", &["plot_Matlab", "pMatplotlib"], "Plot in matplotlib (0=no, 1=yes)"),
    field("plot_LagPts", &["lagPlot"], "Plot Lagrangian points only"),
    field("plot_Velocity", &["velPlot"], "Plot Lagrangian points + velocity field"),
    field("plot_Vorticity", &["vortPlot"], "Plot Lagrangian points + vorticity"),
    field("plot_MagVel", &["uMagPlot"], "Plot Lagrangian points + speed"),
    field("plot_Pressure", &["pressPlot"], "Plot Lagrangian points + pressure"),
];

/// Section headings written by [`render_input2d`].
const SECTIONS: &[(&str, Range<usize>)] = &[
    ("FLUID PARAMETER VALUES", MU..T_FINAL),
    ("TEMPORAL INFORMATION", T_FINAL..NX),
    ("GRID INFO", NX..SPRINGS),
    ("MODEL STRUCTURE DATA", SPRINGS..PRINT_DUMP),
    ("PRINTING / PLOTTING INFO", PRINT_DUMP..SCHEMA_LEN),
];

// ---------------------------------------------------------------------------
// Cross-checks
// ---------------------------------------------------------------------------

/// Something about an input file that is accepted but looks wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaWarning {
    /// The identifier at a slot is not the one the slot expects.
    NameMismatch {
        index: usize,
        line: usize,
        expected: &'static str,
        found: String,
    },
    /// Values past the last slot are ignored.
    TrailingParameters { count: usize },
    /// A value that must be positive for a usable run is not.
    NotPositive { field: &'static str, value: f64 },
}

impl std::fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameMismatch {
                index,
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: parameter #{index} is named '{found}', expected '{expected}'"
            ),
            Self::TrailingParameters { count } => {
                write!(f, "{count} parameter(s) past slot #{} are ignored", SCHEMA_LEN - 1)
            }
            Self::NotPositive { field, value } => {
                write!(f, "'{field}' should be positive, got {value}")
            }
        }
    }
}

/// Compare a parsed file against the layout without rejecting anything.
pub fn check(file: &ParameterFile) -> Vec<SchemaWarning> {
    let mut warnings: Vec<SchemaWarning> = file
        .parameters
        .iter()
        .zip(FIELDS.iter())
        .enumerate()
        .filter(|(_, (p, spec))| !spec.accepts(&p.name))
        .map(|(index, (p, spec))| SchemaWarning::NameMismatch {
            index,
            line: p.line,
            expected: spec.name,
            found: p.name.clone(),
        })
        .collect();

    if file.parameters.len() > SCHEMA_LEN {
        warnings.push(SchemaWarning::TrailingParameters {
            count: file.parameters.len() - SCHEMA_LEN,
        });
    }

    for index in [T_FINAL, DT, NX, NY, LX, LY] {
        if let Some(p) = file.parameters.get(index)
            && !(p.value > 0.0)
        {
            warnings.push(SchemaWarning::NotPositive {
                field: FIELDS[index].name,
                value: p.value,
            });
        }
    }

    warnings
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Write `config` back out as an input2d file with canonical names.
///
/// Parsing the result yields the same parameter vector as
/// [`SimulationConfig::to_parameters`].
pub fn render_input2d(config: &SimulationConfig, structure_token: &str) -> String {
    let values = config.to_parameters();
    let width = FIELDS.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (title, range) in SECTIONS {
        let _ = writeln!(out, "{COMMENT_MARKER}{COMMENT_MARKER} {title} {COMMENT_MARKER}{COMMENT_MARKER}");
        for i in range.clone() {
            let spec = &FIELDS[i];
            let _ = writeln!(
                out,
                "{:<width$} = {}    {COMMENT_MARKER} {}",
                spec.name, values[i], spec.description
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{COMMENT_MARKER}{COMMENT_MARKER} LAGRANGIAN STRUCTURE NAME {COMMENT_MARKER}{COMMENT_MARKER}");
    let _ = writeln!(out, "{REFERENCE_KEY} = {structure_token}");
    out
}
