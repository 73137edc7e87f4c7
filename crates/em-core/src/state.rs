//! Appliance power states as a closed enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power state of the appliance at a point in time.
///
/// `AutoOff` marks a shutoff triggered by the energy-saving device, as
/// opposed to a manual switch-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    On,
    Off,
    AutoOff,
}

impl State {
    /// String tag used in serialized profiles.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::AutoOff => "auto-off",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "auto-off" => Ok(Self::AutoOff),
            _ => Err(UnknownState(s.to_string())),
        }
    }
}

impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown state tags.
#[derive(Debug, Clone)]
pub struct UnknownState(String);

impl fmt::Display for UnknownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown appliance state: {}", self.0)
    }
}

impl std::error::Error for UnknownState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        for variant in [State::On, State::Off, State::AutoOff] {
            let s = variant.to_string();
            let parsed: State = s.parse().expect("should parse");
            assert_eq!(parsed, variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn unknown_tag_errors() {
        let result: Result<State, _> = "standby".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"unknown appliance state: standby");
    }

    #[test]
    fn serde_matches_as_str() {
        for variant in [State::On, State::Off, State::AutoOff] {
            let value = serde_json::to_value(variant).unwrap();
            assert_eq!(
                value.as_str().unwrap(),
                variant.as_str(),
                "serde serialization of {variant:?} should match as_str()"
            );
        }
    }

    #[test]
    fn serde_rejects_unknown_tag() {
        let result: Result<State, _> = serde_json::from_str("\"half-on\"");
        assert!(result.is_err());
    }

    #[test]
    fn auto_off_uses_hyphenated_tag() {
        let parsed: State = serde_json::from_str("\"auto-off\"").unwrap();
        assert_eq!(parsed, State::AutoOff);
    }
}
