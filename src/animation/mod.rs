/// Degree-offset clock with linear and pulse modes.
pub(crate) mod clock;
/// Pulse easing curves.
pub(crate) mod ease;
