use crate::core::data::complex::Complex;

pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, sample: Complex) -> Self::Success;
}
