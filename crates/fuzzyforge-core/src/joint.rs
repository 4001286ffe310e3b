//! Joint constraint types.
//!
//! A joint constraint type selects how the satisfaction degrees of several
//! constraints combine into one joint satisfaction degree.

use std::fmt;
use std::str::FromStr;

use crate::error::FuzzyForgeError;

/// Combinator for individual satisfaction degrees.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::JointConstraintType;
///
/// let degrees = [0.5, 0.8];
/// assert_eq!(JointConstraintType::Productive.combine(degrees), 0.4);
/// assert_eq!(JointConstraintType::Min.combine(degrees), 0.5);
/// assert_eq!(JointConstraintType::Average.combine(degrees), 0.65);
///
/// // No constraints means no evidence of satisfaction.
/// assert_eq!(JointConstraintType::Min.combine([]), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JointConstraintType {
    /// Product of all degrees. A single zero collapses the result to zero.
    #[default]
    Productive,

    /// Arithmetic mean of all degrees.
    Average,

    /// Minimum degree (Gödel t-norm).
    Min,
}

impl JointConstraintType {
    /// All joint constraint types, in declaration order.
    pub const ALL: [JointConstraintType; 3] = [
        JointConstraintType::Productive,
        JointConstraintType::Average,
        JointConstraintType::Min,
    ];

    /// Returns the configuration name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            JointConstraintType::Productive => "productive",
            JointConstraintType::Average => "average",
            JointConstraintType::Min => "min",
        }
    }

    /// Combines individual satisfaction degrees into a joint degree.
    ///
    /// Returns 0.0 for an empty sequence regardless of the type.
    pub fn combine<I>(&self, degrees: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let mut degrees = degrees.into_iter();
        let Some(first) = degrees.next() else {
            return 0.0;
        };

        match self {
            JointConstraintType::Productive => degrees.fold(first, |acc, d| acc * d),
            JointConstraintType::Average => {
                let (sum, count) = degrees.fold((first, 1usize), |(sum, count), d| {
                    (sum + d, count + 1)
                });
                sum / count as f64
            }
            JointConstraintType::Min => degrees.fold(first, f64::min),
        }
    }
}

impl fmt::Display for JointConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointConstraintType {
    type Err = FuzzyForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productive" => Ok(JointConstraintType::Productive),
            "average" => Ok(JointConstraintType::Average),
            "min" => Ok(JointConstraintType::Min),
            other => Err(FuzzyForgeError::Config(format!(
                "unknown joint constraint type '{}', expected one of productive, average, min",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_productive() {
        assert_eq!(JointConstraintType::default(), JointConstraintType::Productive);
    }

    #[test]
    fn test_productive_collapses_on_zero() {
        let joint = JointConstraintType::Productive.combine([0.9, 0.0, 1.0]);
        assert_eq!(joint, 0.0);
    }

    #[test]
    fn test_productive_all_ones() {
        assert_eq!(JointConstraintType::Productive.combine([1.0, 1.0, 1.0]), 1.0);
    }

    #[test]
    fn test_average() {
        let joint = JointConstraintType::Average.combine([0.2, 0.4, 0.9]);
        assert!((joint - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_min() {
        assert_eq!(JointConstraintType::Min.combine([0.7, 0.3, 0.9]), 0.3);
    }

    #[test]
    fn test_empty_is_zero_for_every_type() {
        for joint_type in JointConstraintType::ALL {
            assert_eq!(joint_type.combine(std::iter::empty()), 0.0);
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for joint_type in JointConstraintType::ALL {
            let parsed: JointConstraintType = joint_type.as_str().parse().unwrap();
            assert_eq!(parsed, joint_type);
            assert_eq!(joint_type.to_string(), joint_type.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_is_config_error() {
        let err = "maximum".parse::<JointConstraintType>().unwrap_err();
        assert!(matches!(err, FuzzyForgeError::Config(_)));
        assert!(err.to_string().contains("maximum"));
    }
}
