// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/config/profiles.rs
//!
//! Mask profile file parser
//!
//! A profile file names reusable masks and the custom placeholder
//! definitions they rely on:
//!
//! ```text
//! # Comment line
//! $hex = [0-9a-fA-F]
//! define H = $hex
//! define ? = [a-z] optional
//! mask phone = (000) 000-0000
//! mask padded = "  00  "
//! ```
//!
//! # Architecture
//! Parsing uses nom combinators and runs in two passes:
//! 1. First pass: Collect `$variable` definitions
//! 2. Second pass: Parse `define` and `mask` lines with variable substitution
//!
//! `define` values are one of the keywords `digit`, `letter`,
//! `alphanumeric`, or a regex. A trailing `optional` marks the placeholder
//! optional. Mask patterns may be wrapped in double quotes to keep leading or
//! trailing spaces.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, char, space0, space1},
    combinator::rest,
    IResult, Parser,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

use crate::config::error::ConfigError;
use crate::core::{DefinitionError, DefinitionTable, Mask, MaskDefinition, MaskOptions, Predicate};

/// A named mask pattern from a profile file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MaskProfile {
    /// Name used to select the profile (e.g. "phone")
    pub name: String,

    /// Mask pattern, e.g. "(000) 000-0000"
    pub pattern: String,

    /// Line the profile was declared on
    pub line: usize,
}

/// Everything declared in a profile file
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSet {
    definitions: DefinitionTable,
    profiles: Vec<MaskProfile>,
}

impl ProfileSet {
    /// Parse profile file content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let variables = collect_variables(content);

        let mut definitions = DefinitionTable::empty();
        let mut profiles: Vec<MaskProfile> = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line_num = line_num + 1;

            let line_trimmed = line.trim();
            if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
                continue;
            }

            if let Some(definition) = line_trimmed.strip_prefix('$') {
                if variable_name(definition).is_none() {
                    return Err(ConfigError::InvalidSyntax {
                        line: line_num,
                        message: format!("expected '$name = value', found '{}'", line_trimmed),
                    });
                }
                continue;
            }

            let substituted = substitute_variables(line_trimmed, &variables);

            if substituted.starts_with("define") {
                let (key, definition) = parse_definition(&substituted, line_num)?;
                definitions.insert(key, definition);
            } else if substituted.starts_with("mask") {
                let profile = parse_profile(&substituted, line_num)?;
                if profiles.iter().any(|p| p.name == profile.name) {
                    return Err(ConfigError::DuplicateProfile {
                        name: profile.name,
                        line: line_num,
                    });
                }
                profiles.push(profile);
            } else {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("expected 'define' or 'mask', found '{}'", line_trimmed),
                });
            }
        }

        Ok(Self {
            definitions,
            profiles,
        })
    }

    /// Read and parse a profile file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Custom definitions declared by the file (built-ins not included)
    pub fn definitions(&self) -> &DefinitionTable {
        &self.definitions
    }

    pub fn profiles(&self) -> &[MaskProfile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&MaskProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Build a mask for the named profile
    pub fn mask(&self, name: &str) -> Result<Mask, ConfigError> {
        self.mask_with(name, MaskOptions::new())
    }

    /// Build a mask for the named profile with extra options
    ///
    /// Definitions layer as built-ins, then the file, then `options`.
    pub fn mask_with(&self, name: &str, mut options: MaskOptions) -> Result<Mask, ConfigError> {
        let profile = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;

        let mut definitions = self.definitions.clone();
        definitions.merge(&options.definitions);
        options.definitions = definitions;

        Ok(Mask::with_options(&profile.pattern, options)?)
    }
}

/// Collect variable definitions
///
/// Format: `$name = value`. Returns a HashMap mapping names to values. Lines
/// with an empty name are ignored; a bare `$` is a placeholder key, never a
/// variable.
pub fn collect_variables(content: &str) -> HashMap<String, String> {
    let mut variables = HashMap::new();

    for line in content.lines() {
        let line_trimmed = line.trim();

        if let Some(definition) = line_trimmed.strip_prefix('$') {
            if let Some(var_name) = variable_name(definition) {
                if let Some((_, var_value)) = definition.split_once('=') {
                    variables.insert(var_name.to_string(), var_value.trim().to_string());
                }
            }
        }
    }

    variables
}

/// Substitute variables in a line
///
/// Longer names are replaced first so `$hexdigit` is not clobbered by `$hex`.
pub fn substitute_variables(line: &str, variables: &HashMap<String, String>) -> String {
    let mut names: Vec<&String> = variables.keys().collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));

    let mut result = line.to_string();
    for name in names {
        let pattern = format!("${}", name);
        result = result.replace(&pattern, &variables[name]);
    }

    result
}

/// Parse `define <char> = <value>`
pub fn parse_define_line(input: &str) -> IResult<&str, (char, &str)> {
    let (input, (_, _, key, _, _, _, value)) = (
        tag("define"),
        space1,
        anychar,
        space0,
        char('='),
        space0,
        rest,
    )
        .parse(input)?;

    Ok((input, (key, value)))
}

/// Parse `mask <name> = <pattern>`
pub fn parse_mask_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (_, _, name, _, _, _, pattern)) = (
        tag("mask"),
        space1,
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        space0,
        char('='),
        space0,
        rest,
    )
        .parse(input)?;

    Ok((input, (name, pattern)))
}

/// Turn a definition value into a predicate
///
/// Recognises the keywords `digit`, `letter` and `alphanumeric`; anything else
/// is compiled as a regex.
pub fn parse_predicate(value: &str) -> Result<Predicate, DefinitionError> {
    match value {
        "digit" => Ok(Predicate::Digit),
        "letter" => Ok(Predicate::Letter),
        "alphanumeric" => Ok(Predicate::Alphanumeric),
        source => Predicate::pattern(source),
    }
}

fn parse_definition(line: &str, line_num: usize) -> Result<(char, MaskDefinition), ConfigError> {
    let (_, (key, value)) = parse_define_line(line).map_err(|e| ConfigError::InvalidSyntax {
        line: line_num,
        message: format!("{:?}", e),
    })?;

    let value = value.trim();

    if let Some(variable) = undefined_variable(value) {
        return Err(ConfigError::UndefinedVariable {
            variable,
            line: line_num,
        });
    }

    let (value, optional) = match value.strip_suffix("optional") {
        Some(head) if head.is_empty() || head.ends_with(char::is_whitespace) => {
            (head.trim_end(), true)
        }
        _ => (value, false),
    };

    if value.is_empty() {
        return Err(ConfigError::InvalidSyntax {
            line: line_num,
            message: format!("definition for '{}' has no value", key),
        });
    }

    let predicate = parse_predicate(value).map_err(|source| ConfigError::InvalidDefinition {
        line: line_num,
        source,
    })?;

    Ok((key, MaskDefinition { predicate, optional }))
}

fn parse_profile(line: &str, line_num: usize) -> Result<MaskProfile, ConfigError> {
    let (_, (name, pattern)) = parse_mask_line(line).map_err(|e| ConfigError::InvalidSyntax {
        line: line_num,
        message: format!("{:?}", e),
    })?;

    let pattern = unquote(pattern.trim());
    if pattern.is_empty() {
        return Err(ConfigError::InvalidSyntax {
            line: line_num,
            message: format!("mask '{}' has an empty pattern", name),
        });
    }

    Ok(MaskProfile {
        name: name.to_string(),
        pattern: pattern.to_string(),
        line: line_num,
    })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Name part of a `name = value` variable line, if it has one
fn variable_name(definition: &str) -> Option<&str> {
    let (name, _) = definition.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

/// A value that is still a `$name` after substitution refers to nothing
fn undefined_variable(value: &str) -> Option<String> {
    let name = value.strip_prefix('$')?;
    let name: String = name
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
