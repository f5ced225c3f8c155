//! Pluggable text sub-formatters keyed by a string modifier and a locale.
//!
//! A sub-formatter renders a single value into text. Formatters are looked
//! up through a [`FormatterRegistry`] by their modifier string together with
//! a locale (a BCP-47 language tag such as `"en-US"`), so a host message
//! formatter can dispatch `{value, modifier}` placeholders to the right
//! rendering strategy. The registry only defines the lookup contract; what a
//! formatter does with the locale is entirely its own business.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};

/// Renders a value into text.
///
/// Implemented for any `Fn(&dyn Display) -> String`, so simple formatters
/// can be plain closures.
pub trait SubFormatter {
    fn format(&self, value: &dyn Display) -> String;
}

impl<F> SubFormatter for F
where
    F: Fn(&dyn Display) -> String,
{
    fn format(&self, value: &dyn Display) -> String {
        self(value)
    }
}

impl fmt::Debug for dyn SubFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubFormatter")
    }
}

/// Creates a [`SubFormatter`] for a given modifier and locale.
///
/// Implemented for any `Fn(&str, &str) -> Box<dyn SubFormatter>`, mirroring
/// the single-method shape of the contract.
pub trait SubFormatterFactory {
    fn create(&self, modifier: &str, locale: &str) -> Box<dyn SubFormatter>;
}

impl<F> SubFormatterFactory for F
where
    F: Fn(&str, &str) -> Box<dyn SubFormatter>,
{
    fn create(&self, modifier: &str, locale: &str) -> Box<dyn SubFormatter> {
        self(modifier, locale)
    }
}

/// A lookup table from modifier strings to [`SubFormatterFactory`] entries.
///
/// # Examples
///
/// ```
/// use extra_collect::text::{FormatterRegistry, SubFormatter};
///
/// let mut registry = FormatterRegistry::new();
/// registry.register("upper", |_modifier: &str, _locale: &str| {
///     Box::new(|value: &dyn std::fmt::Display| value.to_string().to_uppercase())
///         as Box<dyn SubFormatter>
/// });
///
/// let upper = registry.create("upper", "en-US").unwrap();
/// assert_eq!(upper.format(&"quiet"), "QUIET");
///
/// assert!(registry.create("nope", "en-US").is_err());
/// ```
#[derive(Default)]
pub struct FormatterRegistry {
    factories: HashMap<String, Box<dyn SubFormatterFactory>>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `modifier`, replacing any previous entry.
    pub fn register(
        &mut self,
        modifier: impl Into<String>,
        factory: impl SubFormatterFactory + 'static,
    ) {
        self.factories.insert(modifier.into(), Box::new(factory));
    }

    /// Whether a factory is registered for `modifier`.
    pub fn contains(&self, modifier: &str) -> bool {
        self.factories.contains_key(modifier)
    }

    /// Builds the formatter for `(modifier, locale)`, failing when the
    /// modifier is unrecognized.
    pub fn create(
        &self,
        modifier: &str,
        locale: &str,
    ) -> Result<Box<dyn SubFormatter>, UnknownModifierError> {
        match self.factories.get(modifier) {
            Some(factory) => Ok(factory.create(modifier, locale)),
            None => Err(UnknownModifierError {
                modifier: modifier.to_owned(),
            }),
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("modifiers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// No sub-formatter factory is registered for the requested modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModifierError {
    modifier: String,
}

impl UnknownModifierError {
    /// The modifier that had no registered factory.
    pub fn modifier(&self) -> &str {
        &self.modifier
    }
}

impl Display for UnknownModifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown formatter modifier: {:?}", self.modifier)
    }
}

impl Error for UnknownModifierError {}
