use std::ops::ControlFlow;

use crate::core::actions::draw_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Outcome of iterating one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Magnitude exceeded the threshold after the iteration with this 0-based index.
    Escaped(u32),
    InSet,
}

/// Iterates `z ← z² + c` from `z0` and reports the first iteration whose
/// result lies further than `threshold` from the origin.
#[must_use]
pub fn escape_iteration(z0: Complex, c: Complex, max_iterations: u32, threshold: f64) -> Escape {
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;
        if next.magnitude() > threshold {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => Escape::Escaped(iteration),
        ControlFlow::Continue(_) => Escape::InSet,
    }
}

/// Per-frame snapshot of everything needed to colour-classify a world sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKinds,
    julia_parameter: Complex,
    max_iterations: u32,
    threshold: f64,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn from_view(view: &ViewState, settings: &ViewerSettings) -> Self {
        let kind = FractalKinds::from_flags(view.view_flags);
        let julia_parameter = match kind {
            FractalKinds::RotatingJulia => {
                view.julia_constant * Complex::from_angle(view.julia_angle)
            }
            FractalKinds::Julia | FractalKinds::Mandelbrot => view.julia_constant,
        };

        Self {
            kind,
            julia_parameter,
            max_iterations: view.iteration_limit,
            threshold: settings.escape_threshold,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Starting value and parameter for a world sample.
    ///
    /// Mandelbrot mode starts from the sample itself rather than from zero.
    #[must_use]
    pub fn seed(&self, sample: Complex) -> (Complex, Complex) {
        match self.kind {
            FractalKinds::Mandelbrot => (sample, sample),
            FractalKinds::Julia | FractalKinds::RotatingJulia => (sample, self.julia_parameter),
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = Escape;

    fn compute(&self, sample: Complex) -> Escape {
        let (z0, c) = self.seed(sample);
        escape_iteration(z0, c, self.max_iterations, self.threshold)
    }
}
