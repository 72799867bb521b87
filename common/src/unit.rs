//! Marker types.

/// Marker type describing the moment a booking is requested.
#[derive(Clone, Copy, Debug)]
pub struct Booking;
