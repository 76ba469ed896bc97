use std::f64::consts::PI;

use crate::Coordinates;

pub const DEFAULT_PATH_STEPS: u32 = 20;

/// Produces illustrative interpolated paths between two coordinates.
///
/// Paths are linear in longitude/latitude space with an optional sinusoidal offset
/// `curvature * sin(t * PI)` added to the latitude, which gives mock tracks a visible bend.
/// Output depends on the inputs only, identical arguments always yield identical paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathGenerator {
    steps: u32,
    curvature: f64,
}

impl Default for PathGenerator {
    fn default() -> Self {
        PathGenerator {
            steps: DEFAULT_PATH_STEPS,
            curvature: 0.0,
        }
    }
}

impl PathGenerator {
    pub fn new(steps: u32) -> PathGenerator {
        PathGenerator {
            steps,
            curvature: 0.0,
        }
    }

    pub fn with_curvature(mut self, curvature: f64) -> PathGenerator {
        self.curvature = curvature;
        self
    }

    /// Returns `steps + 1` points from `start` to `end`, both inclusive.
    pub fn generate(&self, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
        (0..=self.steps)
            .map(|i| self.point_at(&start, &end, i))
            .collect()
    }

    /// Returns the first `floor(steps * progress) + 1` points of [Self::generate].
    /// `progress` is clamped to `[0, 1]`, NaN is treated as zero.
    pub fn generate_partial(
        &self,
        start: Coordinates,
        end: Coordinates,
        progress: f64,
    ) -> Vec<Coordinates> {
        let len = self.partial_len(progress);
        (0..len as u32)
            .map(|i| self.point_at(&start, &end, i))
            .collect()
    }

    pub fn partial_len(&self, progress: f64) -> usize {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        (self.steps as f64 * progress).floor() as usize + 1
    }

    fn point_at(&self, start: &Coordinates, end: &Coordinates, i: u32) -> Coordinates {
        let t = if self.steps == 0 {
            0.0
        } else {
            i as f64 / self.steps as f64
        };

        let mut point = start.lerp(end, t);
        point.latitude += self.curvature * (t * PI).sin();
        point
    }
}
