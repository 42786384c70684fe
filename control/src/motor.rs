//! Capability of the velocity-controlled actuator.

/// The stepper actuator as seen by the control package.
///
/// Implementations must tolerate repeated `enable` and `disable` calls.
/// There is no return channel, command delivery is the implementation's
/// concern and is never retried here.
pub trait Motor {
    fn enable(&mut self);

    fn disable(&mut self);

    /// Command a signed velocity. Only called while the motor is enabled.
    fn set_velocity(&mut self, velocity: i32);
}
