//! Filter type enumeration and name parsing.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The response shape a biquad is designed for.
///
/// Names parse case-insensitively with `-` and `_` ignored, so `"low-pass"`,
/// `"Low_Pass"` and `"LOWPASS"` all yield [`FilterType::LowPass`].
///
/// # Examples
///
/// ```
/// use quadfilter::FilterType;
///
/// let kind: FilterType = "high_shelf".parse().unwrap();
/// assert_eq!(kind, FilterType::HighShelf);
/// assert_eq!(kind.to_string(), "highshelf");
/// assert!("bandstop".parse::<FilterType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum FilterType {
    /// Low-pass filter - attenuates frequencies above the cutoff
    LowPass,
    /// High-pass filter - attenuates frequencies below the cutoff
    HighPass,
    /// Band-pass filter - constant skirt gain, peak gain = Q
    BandPass,
    /// All-pass filter - passes all frequencies but shifts phase
    AllPass,
    /// Notch/band-reject filter - attenuates frequencies near the center
    Notch,
    /// Peaking EQ - boosts or cuts a band around the center by `gain_db`
    Peaking,
    /// Low shelf - boosts or cuts everything below the cutoff by `gain_db`
    LowShelf,
    /// High shelf - boosts or cuts everything above the cutoff by `gain_db`
    HighShelf,
}

impl FilterType {
    /// Every filter type, in cookbook order.
    pub const ALL: [FilterType; 8] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::AllPass,
        FilterType::Notch,
        FilterType::Peaking,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    /// Canonical lowercase name, the form every accepted spelling normalizes to.
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::LowPass => "lowpass",
            FilterType::HighPass => "highpass",
            FilterType::BandPass => "bandpass",
            FilterType::AllPass => "allpass",
            FilterType::Notch => "notch",
            FilterType::Peaking => "peaking",
            FilterType::LowShelf => "lowshelf",
            FilterType::HighShelf => "highshelf",
        }
    }

    /// Whether `gain_db` affects the coefficients of this type.
    pub fn uses_gain(&self) -> bool {
        matches!(
            self,
            FilterType::Peaking | FilterType::LowShelf | FilterType::HighShelf
        )
    }
}

/// Lowercases and strips `-` / `_`.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for FilterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        FilterType::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::InvalidFilterType(s.to_string()))
    }
}

impl TryFrom<String> for FilterType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterType> for String {
    fn from(kind: FilterType) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
