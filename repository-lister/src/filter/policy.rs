//! Visibility and fork policies.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An input value that names no known policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {input} value '{value}'")]
pub struct UnknownPolicy {
    /// Input the value was given for.
    pub input: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Which repositories to keep by visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityPolicy {
    /// Keep everything.
    #[default]
    All,
    /// Keep repositories that are not private.
    Public,
    /// Keep private repositories.
    Private,
    /// Keep repositories GitHub reports as internal.
    Internal,
}

impl FromStr for VisibilityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "internal" => Ok(Self::Internal),
            other => Err(UnknownPolicy {
                input: "visibility",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for VisibilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
        })
    }
}

/// How forks are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForkPolicy {
    /// Keep forks alongside other repositories (`true`).
    #[default]
    Include,
    /// Drop forks (`false`).
    Exclude,
    /// Keep nothing but forks (`only`).
    Only,
}

impl FromStr for ForkPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::Include),
            "false" => Ok(Self::Exclude),
            "only" => Ok(Self::Only),
            other => Err(UnknownPolicy {
                input: "include-forks",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ForkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Include => "true",
            Self::Exclude => "false",
            Self::Only => "only",
        })
    }
}
