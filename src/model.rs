//! Typed run configuration built from the positional parameter vector.

use serde::Serialize;
use tracing::debug;

use crate::error::Input2dError;
use crate::schema::*;

/// Integer-encoded on/off switch.
///
/// Any nonzero value is "on"; the raw integer is kept so the value can be
/// written back out unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Flag(pub i64);

impl Flag {
    /// Truncates toward zero, like every other integer slot.
    pub fn from_value(value: f64) -> Self {
        Self(value as i64)
    }

    pub fn is_on(self) -> bool {
        self.0 != 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidParams {
    pub viscosity: f64,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalParams {
    pub t_final: f64,
    pub dt: f64,
}

/// Eulerian grid geometry plus output/plotting switches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridInfo {
    pub nx: i64,
    pub ny: i64,
    pub lx: f64,
    pub ly: f64,
    /// `lx / nx`
    pub dx: f64,
    /// `ly / ny`
    pub dy: f64,
    /// Delta-function support width (supp/2 points each direction).
    pub supp: f64,
    pub p_dump: f64,
    pub p_matplotlib: Flag,
    pub lag_plot: Flag,
    pub vel_plot: Flag,
    pub vort_plot: Flag,
    pub u_mag_plot: Flag,
    pub press_plot: Flag,
}

/// Which structural and physical sub-models are active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub springs: Flag,
    pub update_springs: Flag,
    pub target_pts: Flag,
    pub update_target_pts: Flag,
    pub beams: Flag,
    pub update_beams: Flag,
    pub muscles: Flag,
    pub hill_3_muscles: Flag,
    pub arb_ext_force: Flag,
    pub tracers: Flag,
    pub mass: Flag,
    pub gravity: Flag,
    pub x_gravity: f64,
    pub y_gravity: f64,
    pub porous: Flag,
    pub concentration: Flag,
    pub electrophysiology: Flag,
    pub damped_springs: Flag,
    pub update_damped_springs: Flag,
}

impl ModelInfo {
    /// Names of the sub-models switched on, in slot order.
    pub fn active(&self) -> Vec<&'static str> {
        [
            ("springs", self.springs),
            ("update_springs", self.update_springs),
            ("target_pts", self.target_pts),
            ("update_target_pts", self.update_target_pts),
            ("beams", self.beams),
            ("update_beams", self.update_beams),
            ("muscles", self.muscles),
            ("hill_3_muscles", self.hill_3_muscles),
            ("arb_ext_force", self.arb_ext_force),
            ("tracers", self.tracers),
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("porous", self.porous),
            ("concentration", self.concentration),
            ("electrophysiology", self.electrophysiology),
            ("damped_springs", self.damped_springs),
            ("update_damped_springs", self.update_damped_springs),
        ]
        .into_iter()
        .filter(|(_, flag)| flag.is_on())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub fluid: FluidParams,
    pub temporal: TemporalParams,
    pub grid: GridInfo,
    pub model: ModelInfo,
}

impl SimulationConfig {
    /// Map the ordered parameter vector onto named fields.
    ///
    /// Values past the last slot are ignored.  A short vector is fatal.
    pub fn from_parameters(values: &[f64]) -> Result<Self, Input2dError> {
        if values.len() < SCHEMA_LEN {
            return Err(Input2dError::IndexOutOfRange {
                expected: SCHEMA_LEN,
                found: values.len(),
            });
        }
        if values.len() > SCHEMA_LEN {
            debug!(
                extra = values.len() - SCHEMA_LEN,
                "ignoring trailing parameters"
            );
        }

        let v = |i: usize| values[i];
        let flag = |i: usize| Flag::from_value(values[i]);

        Ok(Self {
            fluid: FluidParams {
                viscosity: v(MU),
                density: v(RHO),
            },
            temporal: TemporalParams {
                t_final: v(T_FINAL),
                dt: v(DT),
            },
            grid: GridInfo {
                nx: v(NX) as i64,
                ny: v(NY) as i64,
                lx: v(LX),
                ly: v(LY),
                dx: v(LX) / v(NX),
                dy: v(LY) / v(NY),
                supp: v(SUPP),
                p_dump: v(PRINT_DUMP),
                p_matplotlib: flag(PLOT_MATPLOTLIB),
                lag_plot: flag(PLOT_LAG_PTS),
                vel_plot: flag(PLOT_VELOCITY),
                vort_plot: flag(PLOT_VORTICITY),
                u_mag_plot: flag(PLOT_MAG_VEL),
                press_plot: flag(PLOT_PRESSURE),
            },
            model: ModelInfo {
                springs: flag(SPRINGS),
                update_springs: flag(UPDATE_SPRINGS),
                target_pts: flag(TARGET_PTS),
                update_target_pts: flag(UPDATE_TARGET_PTS),
                beams: flag(BEAMS),
                update_beams: flag(UPDATE_BEAMS),
                muscles: flag(MUSCLES),
                hill_3_muscles: flag(HILL_3_MUSCLES),
                arb_ext_force: flag(ARB_EXT_FORCE),
                tracers: flag(TRACERS),
                mass: flag(MASS),
                gravity: flag(GRAVITY),
                x_gravity: v(X_GRAVITY),
                y_gravity: v(Y_GRAVITY),
                porous: flag(POROUS),
                concentration: flag(CONCENTRATION),
                electrophysiology: flag(ELECTROPHYSIOLOGY),
                damped_springs: flag(DAMPED_SPRINGS),
                update_damped_springs: flag(UPDATE_DAMPED_SPRINGS),
            },
        })
    }

    /// Lay the configuration back out in slot order.  Derived fields are
    /// not part of the vector.
    pub fn to_parameters(&self) -> Vec<f64> {
        let mut out = vec![0.0; SCHEMA_LEN];
        let (f, t, g, m) = (&self.fluid, &self.temporal, &self.grid, &self.model);

        out[MU] = f.viscosity;
        out[RHO] = f.density;
        out[T_FINAL] = t.t_final;
        out[DT] = t.dt;
        out[NX] = g.nx as f64;
        out[NY] = g.ny as f64;
        out[LX] = g.lx;
        out[LY] = g.ly;
        out[SUPP] = g.supp;
        out[PRINT_DUMP] = g.p_dump;
        out[X_GRAVITY] = m.x_gravity;
        out[Y_GRAVITY] = m.y_gravity;

        let flags = [
            (SPRINGS, m.springs),
            (UPDATE_SPRINGS, m.update_springs),
            (TARGET_PTS, m.target_pts),
            (UPDATE_TARGET_PTS, m.update_target_pts),
            (BEAMS, m.beams),
            (UPDATE_BEAMS, m.update_beams),
            (MUSCLES, m.muscles),
            (HILL_3_MUSCLES, m.hill_3_muscles),
            (ARB_EXT_FORCE, m.arb_ext_force),
            (TRACERS, m.tracers),
            (MASS, m.mass),
            (GRAVITY, m.gravity),
            (POROUS, m.porous),
            (CONCENTRATION, m.concentration),
            (ELECTROPHYSIOLOGY, m.electrophysiology),
            (DAMPED_SPRINGS, m.damped_springs),
            (UPDATE_DAMPED_SPRINGS, m.update_damped_springs),
            (PLOT_MATPLOTLIB, g.p_matplotlib),
            (PLOT_LAG_PTS, g.lag_plot),
            (PLOT_VELOCITY, g.vel_plot),
            (PLOT_VORTICITY, g.vort_plot),
            (PLOT_MAG_VEL, g.u_mag_plot),
            (PLOT_PRESSURE, g.press_plot),
        ];
        for (index, flag) in flags {
            out[index] = flag.0 as f64;
        }
        out
    }
}
