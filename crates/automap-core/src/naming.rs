//! Property naming conventions
//!
//! A naming convention splits a property name into lowercase tokens and
//! formats tokens back into a name. Two conventions compose into a
//! translation from one naming style to another.
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokenizes and formats property names
pub trait NamingConvention: Send + Sync + fmt::Debug {
    /// Identifier of the convention. Conventions with equal names are
    /// treated as the same convention by [`translate`].
    fn name(&self) -> &str;

    /// Split a name into tokens
    fn to_tokens(&self, name: &str) -> Vec<String>;

    /// Format tokens as a name in this convention
    fn from_tokens(&self, tokens: &[String]) -> String;

    /// Whether names in this convention are never rewritten
    fn is_identity(&self) -> bool {
        false
    }
}

/// Translate `name` from the `source` naming convention into `destination`
///
/// The name is returned unchanged when both conventions are the same, or
/// when either side is an identity convention. Identity has no token
/// boundaries, so translating through it could not be inverted.
pub fn translate(
    name: &str,
    source: &dyn NamingConvention,
    destination: &dyn NamingConvention,
) -> String {
    if source.name() == destination.name() || source.is_identity() || destination.is_identity() {
        return name.to_string();
    }
    destination.from_tokens(&source.to_tokens(name))
}

/// Built-in naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseConvention {
    /// Leaves names untouched: the whole name is a single token
    #[default]
    Identity,
    /// `firstName`
    CamelCase,
    /// `FirstName`
    PascalCase,
    /// `first_name`
    SnakeCase,
    /// `first-name`
    KebabCase,
    /// `FIRST_NAME`
    ScreamingSnakeCase,
}

impl NamingConvention for CaseConvention {
    fn name(&self) -> &str {
        match self {
            CaseConvention::Identity => "identity",
            CaseConvention::CamelCase => "camel_case",
            CaseConvention::PascalCase => "pascal_case",
            CaseConvention::SnakeCase => "snake_case",
            CaseConvention::KebabCase => "kebab_case",
            CaseConvention::ScreamingSnakeCase => "screaming_snake_case",
        }
    }

    fn to_tokens(&self, name: &str) -> Vec<String> {
        match self {
            CaseConvention::Identity => vec![name.to_string()],
            _ => name
                .to_snake_case()
                .split('_')
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    fn from_tokens(&self, tokens: &[String]) -> String {
        let snake = tokens.join("_");
        match self {
            CaseConvention::Identity => tokens.concat(),
            CaseConvention::CamelCase => snake.to_lower_camel_case(),
            CaseConvention::PascalCase => snake.to_upper_camel_case(),
            CaseConvention::SnakeCase => snake.to_snake_case(),
            CaseConvention::KebabCase => snake.to_kebab_case(),
            CaseConvention::ScreamingSnakeCase => snake.to_shouty_snake_case(),
        }
    }

    fn is_identity(&self) -> bool {
        matches!(self, CaseConvention::Identity)
    }
}

impl fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
