use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {parameter}; expected one of: {expected}")]
    InvalidValue {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// What to do with an interaction whose type has no allow-list rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Treat the interaction type as unconstrained.
    #[default]
    Accept,
    /// Fail validation on the first interaction of an unlisted type.
    Reject,
}

impl FromStr for UnknownTypePolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accept" | "permissive" => Ok(Self::Accept),
            "reject" | "strict" => Ok(Self::Reject),
            _ => Err(ConfigError::InvalidValue {
                parameter: "unknown-types",
                value: s.to_string(),
                expected: "accept, reject",
            }),
        }
    }
}

impl fmt::Display for UnknownTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Accept => "accept",
                Self::Reject => "reject",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckConfig {
    pub unknown_type_policy: UnknownTypePolicy,
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    unknown_type_policy: Option<UnknownTypePolicy>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_type_policy(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_type_policy = Some(policy);
        self
    }

    pub fn build(self) -> CheckConfig {
        CheckConfig {
            unknown_type_policy: self.unknown_type_policy.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_accepting_unknown_types() {
        let config = CheckConfigBuilder::new().build();
        assert_eq!(config.unknown_type_policy, UnknownTypePolicy::Accept);
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn builder_sets_policy() {
        let config = CheckConfigBuilder::new()
            .unknown_type_policy(UnknownTypePolicy::Reject)
            .build();
        assert_eq!(config.unknown_type_policy, UnknownTypePolicy::Reject);
    }

    #[test]
    fn policy_from_str_accepts_aliases() {
        assert_eq!("accept".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Accept));
        assert_eq!("Permissive".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Accept));
        assert_eq!("reject".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Reject));
        assert_eq!(" strict ".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Reject));
    }

    #[test]
    fn policy_from_str_rejects_unknown_values() {
        let err = "sometimes".parse::<UnknownTypePolicy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'sometimes' for unknown-types; expected one of: accept, reject"
        );
    }

    #[test]
    fn policy_display_round_trips_through_from_str() {
        for policy in [UnknownTypePolicy::Accept, UnknownTypePolicy::Reject] {
            assert_eq!(policy.to_string().parse::<UnknownTypePolicy>(), Ok(policy));
        }
    }
}
