//! Calculation settings.
//!
//! [`Config`] is a plain `Copy` value. Every setter consumes the value and
//! returns the updated one, so a configuration can be shared freely between
//! threads and calculations never observe each other's changes.
//!
//! ```
//! use prayer_times::{AsrMethod, CalculationMethod, Config, HighLatitudeRule};
//!
//! let config = Config::new(CalculationMethod::Isna)
//!     .with_asr_method(AsrMethod::Hanafi)
//!     .with_high_latitude_rule(HighLatitudeRule::AngleBased)
//!     .with_isha_angle(17.0);
//!
//! // Overriding one parameter switches to Custom and keeps the rest of ISNA
//! assert_eq!(config.method(), CalculationMethod::Custom);
//! assert_eq!(config.params().fajr_angle, 15.0);
//! ```

use crate::method::{CalculationMethod, MethodParams, Twilight};
use crate::types::{AsrMethod, HighLatitudeRule, Prayer, TimeFormat};

/// How Imsak is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Imsak {
    /// Fixed number of minutes before Fajr
    Minutes(f64),
    /// Sun depression angle in degrees
    Angle(f64),
}

impl Imsak {
    /// The configured number, minutes or degrees.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Minutes(value) | Self::Angle(value) => value,
        }
    }
}

impl Default for Imsak {
    fn default() -> Self {
        Self::Minutes(10.0)
    }
}

/// Settings for a prayer time calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    method: CalculationMethod,
    custom: MethodParams,
    asr_method: AsrMethod,
    dhuhr_minutes: i32,
    imsak: Imsak,
    high_latitude_rule: HighLatitudeRule,
    time_format: TimeFormat,
    iterations: u32,
    offsets: [i32; 9],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: CalculationMethod::Mwl,
            custom: CalculationMethod::Custom.preset(),
            asr_method: AsrMethod::Shafii,
            dhuhr_minutes: 0,
            imsak: Imsak::default(),
            high_latitude_rule: HighLatitudeRule::MidNight,
            time_format: TimeFormat::Time24,
            iterations: 1,
            offsets: [0; 9],
        }
    }
}

impl Config {
    /// Default settings with the given calculation method.
    #[must_use]
    pub fn new(method: CalculationMethod) -> Self {
        Self::default().with_method(method)
    }

    /// Selects the calculation method.
    ///
    /// Selecting `Custom` activates whatever custom parameters were last set.
    #[must_use]
    pub const fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Selects the juristic method for Asr.
    #[must_use]
    pub const fn with_asr_method(mut self, asr_method: AsrMethod) -> Self {
        self.asr_method = asr_method;
        self
    }

    /// Selects the Asr method by numeric identifier (0 Shafii, 1 Hanafi).
    ///
    /// Unknown identifiers leave the configuration unchanged.
    #[must_use]
    pub fn with_asr_method_id(self, id: u8) -> Self {
        match AsrMethod::try_from(id) {
            Ok(asr_method) => self.with_asr_method(asr_method),
            Err(_) => self,
        }
    }

    /// Replaces all custom parameters and switches to `Custom`.
    #[must_use]
    pub const fn with_custom_params(mut self, params: MethodParams) -> Self {
        self.custom = params;
        self.method = CalculationMethod::Custom;
        self
    }

    /// Sets the Fajr angle, keeping the other parameters of the current method.
    #[must_use]
    pub fn with_fajr_angle(self, angle: f64) -> Self {
        let params = MethodParams {
            fajr_angle: angle,
            ..self.params()
        };
        self.with_custom_params(params)
    }

    /// Derives Maghrib from a depression angle, keeping the other parameters.
    #[must_use]
    pub fn with_maghrib_angle(self, angle: f64) -> Self {
        let params = MethodParams {
            maghrib: Twilight::Angle(angle),
            ..self.params()
        };
        self.with_custom_params(params)
    }

    /// Derives Maghrib as minutes after sunset, keeping the other parameters.
    #[must_use]
    pub fn with_maghrib_minutes(self, minutes: f64) -> Self {
        let params = MethodParams {
            maghrib: Twilight::Minutes(minutes),
            ..self.params()
        };
        self.with_custom_params(params)
    }

    /// Derives Isha from a depression angle, keeping the other parameters.
    #[must_use]
    pub fn with_isha_angle(self, angle: f64) -> Self {
        let params = MethodParams {
            isha: Twilight::Angle(angle),
            ..self.params()
        };
        self.with_custom_params(params)
    }

    /// Derives Isha as minutes after Maghrib, keeping the other parameters.
    #[must_use]
    pub fn with_isha_minutes(self, minutes: f64) -> Self {
        let params = MethodParams {
            isha: Twilight::Minutes(minutes),
            ..self.params()
        };
        self.with_custom_params(params)
    }

    /// Places Imsak a fixed number of minutes before Fajr.
    #[must_use]
    pub const fn with_imsak_minutes(mut self, minutes: f64) -> Self {
        self.imsak = Imsak::Minutes(minutes);
        self
    }

    /// Derives Imsak from a depression angle.
    #[must_use]
    pub const fn with_imsak_angle(mut self, angle: f64) -> Self {
        self.imsak = Imsak::Angle(angle);
        self
    }

    /// Delays Dhuhr by a number of minutes after solar noon.
    #[must_use]
    pub const fn with_dhuhr_minutes(mut self, minutes: i32) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    /// Sets the tuning offsets in minutes, in [`Prayer::ALL`] order.
    #[must_use]
    pub const fn with_offsets(mut self, offsets: [i32; 9]) -> Self {
        self.offsets = offsets;
        self
    }

    /// Sets the tuning offset of one slot in minutes.
    #[must_use]
    pub const fn with_offset(mut self, prayer: Prayer, minutes: i32) -> Self {
        self.offsets[prayer.index()] = minutes;
        self
    }

    /// Selects the high-latitude rule.
    #[must_use]
    pub const fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Selects the output time format.
    #[must_use]
    pub const fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Sets the number of solver passes. One pass suffices for daily times;
    /// zero is rejected when calculating.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Gets the active calculation method.
    #[must_use]
    pub const fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Parameters in effect: the active preset, or the custom set for `Custom`.
    #[must_use]
    pub const fn params(&self) -> MethodParams {
        match self.method {
            CalculationMethod::Custom => self.custom,
            method => method.preset(),
        }
    }

    /// Gets the Asr juristic method.
    #[must_use]
    pub const fn asr_method(&self) -> AsrMethod {
        self.asr_method
    }

    /// Gets the Dhuhr delay in minutes.
    #[must_use]
    pub const fn dhuhr_minutes(&self) -> i32 {
        self.dhuhr_minutes
    }

    /// Gets the Imsak rule.
    #[must_use]
    pub const fn imsak(&self) -> Imsak {
        self.imsak
    }

    /// Gets the high-latitude rule.
    #[must_use]
    pub const fn high_latitude_rule(&self) -> HighLatitudeRule {
        self.high_latitude_rule
    }

    /// Gets the output time format.
    #[must_use]
    pub const fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// Gets the number of solver passes.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Gets the tuning offsets in minutes.
    #[must_use]
    pub const fn offsets(&self) -> [i32; 9] {
        self.offsets
    }
}
