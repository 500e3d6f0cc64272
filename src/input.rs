/// Rotation axes addressable by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Discrete user actions reported by the windowing frontend. The scene only
/// ever sees these; it never inspects raw window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Bump one fixed axis by `AXIS_BUMP_DEGREES`.
    BumpAxis(Axis),
    /// Pick the axis that `BumpActive` adjusts.
    SelectAxis(Axis),
    /// Adjust the active axis by the given amount in degrees.
    BumpActive(f32),
    /// Terminate the scene.
    Quit,
}

/// Increment applied by the three bump buttons.
pub const AXIS_BUMP_DEGREES: f32 = 10.5;

/// Increment applied to the active axis by the fine-adjust actions.
pub const ACTIVE_BUMP_DEGREES: f32 = 5.0;

/// Autonomous Z spin applied once per idle tick.
pub const IDLE_SPIN_DEGREES: f32 = 0.07;
