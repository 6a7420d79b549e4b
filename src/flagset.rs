use crate::Error;
use std::collections::HashMap;
use std::fmt;

/// The type a flag's values are coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Bool => write!(f, "bool"),
            FlagKind::Int => write!(f, "int"),
            FlagKind::Float => write!(f, "float"),
            FlagKind::Str => write!(f, "string"),
        }
    }
}

/// A typed flag value. The default given to [`FlagSet::define`] fixes the
/// kind of every value the flag will ever hold.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Float(_) => FlagKind::Float,
            FlagValue::Str(_) => FlagKind::Str,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FlagValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Int(i) => write!(f, "{i}"),
            FlagValue::Float(x) => write!(f, "{x}"),
            FlagValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A blueprint for one flag: name, typed default and help text.
/// Immutable once registered.
#[derive(Debug, Clone)]
pub struct FlagDefinition {
    name: String,
    default: FlagValue,
    help: String,
}

impl FlagDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    pub fn default(&self) -> &FlagValue {
        &self.default
    }

    pub fn help(&self) -> &str {
        &self.help
    }
}

/// A named, typed collection of command line options scoped to one parser or
/// subcommand.
///
/// Definitions are kept in registration order. Parsed values are layered on
/// top; [`FlagSet::get`] falls back to the default for a flag the command
/// line never mentioned.
#[derive(Debug, Default)]
pub struct FlagSet {
    definitions: Vec<FlagDefinition>,
    values: HashMap<String, FlagValue>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag. All definitions must happen before the set is
    /// parsed against a command line.
    pub fn define(&mut self, name: &str, default: FlagValue, help: &str) -> Result<(), Error> {
        if self.definition(name).is_some() {
            return Err(Error::DuplicateFlag(name.to_string()));
        }
        self.definitions.push(FlagDefinition {
            name: name.to_string(),
            default,
            help: help.to_string(),
        });
        Ok(())
    }

    /// Returns a reference to the definition with the given name
    pub fn definition(&self, name: &str) -> Option<&FlagDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Returns the definitions in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &FlagDefinition> {
        self.definitions.iter()
    }

    /// Returns the parsed value for `name`, or its default if the command
    /// line never set it
    pub fn get(&self, name: &str) -> Result<&FlagValue, Error> {
        let def = self
            .definition(name)
            .ok_or_else(|| Error::UnknownFlag(name.to_string()))?;
        Ok(self.values.get(name).unwrap_or(def.default()))
    }

    // Invariant: callers only set names that have a definition
    pub(crate) fn set(&mut self, name: &str, value: FlagValue) {
        debug_assert!(self.definition(name).is_some());
        self.values.insert(name.to_string(), value);
    }

    /// Returns a snapshot of every flag's current (parsed-or-default) value,
    /// in registration order
    pub fn as_mapping(&self) -> Vec<(String, FlagValue)> {
        self.definitions
            .iter()
            .map(|d| {
                let value = self.values.get(&d.name).unwrap_or(&d.default);
                (d.name.clone(), value.clone())
            })
            .collect()
    }
}
