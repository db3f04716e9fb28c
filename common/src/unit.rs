//! Marker types.

/// Marker type describing an arrival (check-in).
#[derive(Clone, Copy, Debug)]
pub struct Arrival;

/// Marker type describing a departure (check-out).
#[derive(Clone, Copy, Debug)]
pub struct Departure;

/// Marker type describing a range start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a range end.
#[derive(Clone, Copy, Debug)]
pub struct End;
