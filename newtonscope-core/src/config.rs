//! Newton-iteration parameters and their validation boundary.
//!
//! The two numeric knobs, `iteration_max` and `epsilon`, are the whole
//! externally tunable surface besides the mode flags. Both are validated at
//! the setter: a rejected value leaves the prior one active, so a render can
//! never observe a half-applied configuration.

use crate::error::ConfigError;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Convergence criterion applied after each Newton step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopRule {
    /// Converged when the iterate lies within epsilon of some root.
    Proximity,
    /// Converged when consecutive iterates are within epsilon of each other,
    /// then attributed to a root via the proximity check.
    Step,
}

/// Preset epsilon used when switching to the step rule.
pub const STEP_RULE_EPSILON: f64 = 0.01;

const DEFAULT_ITERATION_MAX: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub stop_rule: StopRule,
    pub high_definition: bool,
    pub convergence_rate_shading: bool,
    iteration_max: u32,
    epsilon: f64,
}

impl RenderConfig {
    /// Configuration with the resolution-dependent default epsilon for the
    /// given viewport and canvas.
    pub fn for_canvas(viewport: &Viewport, pixel_w: u32, pixel_h: u32) -> Self {
        Self {
            epsilon: Self::default_epsilon(viewport, pixel_w, pixel_h),
            ..Self::default()
        }
    }

    pub fn iteration_max(&self) -> u32 {
        self.iteration_max
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_iteration_max(&mut self, iteration_max: u32) -> Result<(), ConfigError> {
        if iteration_max == 0 {
            return Err(ConfigError::ZeroIterationMax);
        }
        self.iteration_max = iteration_max;
        Ok(())
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        self.epsilon = epsilon;
        Ok(())
    }

    /// Epsilon sized to 25 pixels of plane distance, whichever axis is finer.
    pub fn default_epsilon(viewport: &Viewport, pixel_w: u32, pixel_h: u32) -> f64 {
        f64::min(
            25.0 * viewport.xwidth() / pixel_w as f64,
            25.0 * viewport.ywidth() / pixel_h as f64,
        )
    }

    /// After zooming in, shrink epsilon to 30 pixels of plane distance if
    /// that is tighter than the current value. Never loosens.
    pub fn tighten_epsilon_after_zoom(&mut self, viewport: &Viewport, pixel_w: u32, pixel_h: u32) {
        let candidate = f64::min(
            30.0 * viewport.xwidth() / pixel_w as f64,
            30.0 * viewport.ywidth() / pixel_h as f64,
        );
        if candidate < self.epsilon {
            self.epsilon = candidate;
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stop_rule: StopRule::Proximity,
            high_definition: false,
            convergence_rate_shading: false,
            iteration_max: DEFAULT_ITERATION_MAX,
            epsilon: STEP_RULE_EPSILON,
        }
    }
}
