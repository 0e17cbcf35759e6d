use std::fs;
use std::path::{Path, PathBuf};

use ib2d::schema::{self, SCHEMA_LEN};
use ib2d::{Input2dError, Solver, SolverInput};
use tempfile::TempDir;

const RUBBERBAND: &str = "\
%-------------------------------------------------------------------------------------------------------------------%
%
% IB2d input file: rubberband
%
%-------------------------------------------------------------------------------------------------------------------%

% FLUID PARAMETER VALUES %
mu = 1.0                % Dynamic Viscosity (N*s/m^2)
rho = 1.0               % Density (kg/m^2)

% TEMPORAL INFORMATION %
Tfinal = 0.015          % Final time of simulation
dt = 1e-4               % Time-step

% GRID INFO %
Nx = 64                 % # of Eulerian Grid Pts. in x-Direction
Ny = 64                 % # of Eulerian Grid Pts. in y-Direction
Lx = 1.0                % Length of Eulerian Grid in x-Direction
Ly = 1.0                % Length of Eulerian Grid in y-Direction
supp = 4                % Choose dirac-delta support

% Immersed Structure Geometric / Dynamic Parameters %
springs = 1             % Springs: (0=no, 1=yes)
update_springs = 0      % Update_Springs: (0=no, 1=yes)
target_pts = 0          % Target_Pts: (0=no, 1=yes)
update_target_pts = 0   % Update_Target_Pts: (0=no, 1=yes)
beams = 0               % Beams: (0=no, 1=yes)
update_beams = 0        % Update_Beams: (0=no, 1=yes)
muscles = 0             % FV-LT Muscles: (0=no, 1=yes)
hill_3_muscles = 0      % Hill 3-Element Muscle: (0=no, 1=yes)
arb_ext_force = 0       % Arbitrary External Force: (0=no, 1=yes)
tracers = 0             % Tracer Particles: (0=no, 1=yes)
mass_pts = 0            % Mass Points: (0=no, 1=yes)
gravity = 0             % Gravity: (0=no, 1=yes)
xG = 0                  % x-Component of Gravity Vector
yG = 0                  % y-Component of Gravity Vector
porous = 0              % Porous Media: (0=no, 1=yes)
concentration = 0       % Background Concentration Gradient: (0=no, 1=yes)
electro_phys = 0        % Electrophysiology (FitzHugh-Nagumo): (0=no, 1=yes)
d_springs = 0           % Damped Springs: (0=no, 1=yes)
update_D_Springs = 0    % Update Damped Springs: (0=no, 1=yes)

% PRINTING INFO %
print_dump = 50         % Print Dump (How often to plot)
plot_Matlab = 0         % Plot in Matlab? (1=YES,0=NO)
plot_LagPts = 1         % Plot LAGRANGIAN PTs ONLY in Matlab
plot_Velocity = 1       % Plot LAGRANGIAN PTs + VELOCITY FIELD in Matlab
plot_Vorticity = 0      % Plot LAGRANGIAN PTs + VORTICITY colormap in Matlab
plot_MagVel = 0         % Plot LAGRANGIAN PTs + MAGNITUDE OF VELOCITY colormap in Matlab
plot_Pressure = 0       % Plot LAGRANGIAN PTs + PRESSURE colormap in Matlab

% LAGRANGIAN STRUCTURE NAME %
string_name = rubberband    % Name of structure
";

fn write_input(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("input2d");
    fs::write(&path, text).unwrap();
    path
}

/// Counts hand-offs and keeps the last one.
#[derive(Default)]
struct Recorder {
    calls: usize,
    last: Option<SolverInput>,
}

impl Solver for Recorder {
    fn solve(&mut self, input: SolverInput) -> anyhow::Result<()> {
        self.calls += 1;
        self.last = Some(input);
        Ok(())
    }
}

#[test]
fn rubberband_file_builds_full_configuration() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, RUBBERBAND);

    let run = ib2d::load(&path).unwrap();
    let cfg = &run.config;

    assert_eq!(run.file.parameters.len(), SCHEMA_LEN);
    assert_eq!(run.structure(), dir.path().join("rubberband"));
    assert_eq!(cfg.fluid.viscosity, 1.0);
    assert_eq!(cfg.temporal.t_final, 0.015);
    assert_eq!(cfg.temporal.dt, 1e-4);
    assert_eq!(cfg.grid.nx, 64);
    assert_eq!(cfg.grid.dx, 1.0 / 64.0);
    assert_eq!(cfg.grid.p_dump, 50.0);
    assert!(cfg.grid.lag_plot.is_on());
    assert!(cfg.grid.vel_plot.is_on());
    assert!(!cfg.grid.p_matplotlib.is_on());
    assert_eq!(cfg.model.active(), vec!["springs"]);

    // Known aliases do not trigger name warnings.
    assert!(schema::check(&run.file).is_empty());
}

#[test]
fn solver_receives_exactly_one_handoff() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, RUBBERBAND);
    let mut solver = Recorder::default();

    let structure = ib2d::run_with(&path, &mut solver).unwrap();

    assert_eq!(solver.calls, 1);
    let input = solver.last.unwrap();
    assert_eq!(input.structure, structure);
    assert_eq!(input.mu, 1.0);
    assert_eq!(input.rho, 1.0);
    assert_eq!(input.grid_info.ny, 64);
}

#[test]
fn failed_load_never_reaches_the_solver() {
    let dir = TempDir::new().unwrap();
    let text = RUBBERBAND.replace("string_name = rubberband", "% string_name = rubberband");
    let path = write_input(&dir, &text);
    let mut solver = Recorder::default();

    let err = ib2d::run_with(&path, &mut solver).unwrap_err();

    assert_eq!(solver.calls, 0);
    assert!(matches!(
        err.downcast_ref::<Input2dError>(),
        Some(Input2dError::StructureReferenceMissing { .. })
    ));
}

#[test]
fn too_few_parameters_is_index_out_of_range() {
    let dir = TempDir::new().unwrap();
    let mut text: String = (0..10).map(|i| format!("p{i} = {i}\n")).collect();
    text.push_str("string_name = s.vertex\n");
    let path = write_input(&dir, &text);

    match ib2d::load(&path).unwrap_err() {
        Input2dError::IndexOutOfRange { expected, found } => {
            assert_eq!(expected, SCHEMA_LEN);
            assert_eq!(found, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn canonical_rendering_reparses_to_same_vector() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, RUBBERBAND);
    let run = ib2d::load(&path).unwrap();

    let rendered = schema::render_input2d(&run.config, &run.file.structure_token);
    let again = ib2d::input::parse_str(&rendered, Path::new("/sims/run1/input2d")).unwrap();

    assert_eq!(again.values(), run.file.values());
    assert_eq!(again.structure, PathBuf::from("/sims/run1/rubberband"));
    assert!(schema::check(&again).is_empty());
}

#[test]
fn bad_value_names_line() {
    let dir = TempDir::new().unwrap();
    let text = RUBBERBAND.replace("Nx = 64 ", "Nx = sixty-four ");
    let path = write_input(&dir, &text);

    match ib2d::load(&path).unwrap_err() {
        Input2dError::ParameterFormat { line, content } => {
            assert_eq!(line, 16);
            assert!(content.starts_with("Nx = sixty-four"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
