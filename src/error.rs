//! Error types for the prayer times library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while setting up a prayer time calculation.
///
/// Astronomical impossibilities (a twilight angle the sun never reaches at the
/// given latitude and date) are not errors; they surface as NaN in
/// [`PrayerTimes`](crate::PrayerTimes) and render as [`INVALID_TIME`](crate::format::INVALID_TIME).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite).
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
    /// Invalid UTC offset (must be finite and strictly between -24 and +24 hours).
    InvalidUtcOffset {
        /// The invalid offset value provided, in hours.
        value: f64,
    },
    /// Invalid iteration count for the time solver (must be at least 1).
    InvalidIterations {
        /// The invalid iteration count provided.
        value: u32,
    },
    /// Numeric identifier that does not name any variant of a configuration enum.
    UnknownIdentifier {
        /// Name of the enum the identifier was meant for.
        kind: &'static str,
        /// The unknown identifier.
        value: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be finite)")
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value} h (must be between -24 h and +24 h)"
                )
            }
            Self::InvalidIterations { value } => {
                write!(f, "invalid iteration count {value} (must be at least 1)")
            }
            Self::UnknownIdentifier { kind, value } => {
                write!(f, "unknown {kind} identifier {value}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid iteration count error.
    #[must_use]
    pub const fn invalid_iterations(value: u32) -> Self {
        Self::InvalidIterations { value }
    }

    /// Creates an unknown identifier error.
    #[must_use]
    pub const fn unknown_identifier(kind: &'static str, value: u8) -> Self {
        Self::UnknownIdentifier { kind, value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the observer elevation is a finite number of meters.
///
/// # Errors
/// Returns `InvalidElevation` for NaN or infinite elevations.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates a UTC offset in hours.
///
/// # Errors
/// Returns `InvalidUtcOffset` unless the offset is finite and within (-24, 24).
pub fn check_utc_offset(utc_offset: f64) -> Result<()> {
    if !utc_offset.is_finite() || utc_offset.abs() >= 24.0 {
        return Err(Error::invalid_utc_offset(utc_offset));
    }
    Ok(())
}

/// Validates the solver iteration count.
///
/// # Errors
/// Returns `InvalidIterations` for zero.
pub const fn check_iterations(iterations: u32) -> Result<()> {
    if iterations == 0 {
        return Err(Error::invalid_iterations(iterations));
    }
    Ok(())
}
