/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the first-order scheme advance a state via
/// `state + derivative * delta`, where the derivative is with respect to
/// `Delta`. In this workspace `Delta` is the simulation time step in seconds.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
