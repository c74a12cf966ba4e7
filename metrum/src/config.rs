//! Defaults read from the environment
//!
//! `METRUM_LOCALE` sets the locale used to read and write numbers and
//! `METRUM_STYLE` the symbol style used when listing units. Command line
//! flags take precedence over both.
//!
//! `RUST_LOG` sets the log level for stderr and takes a bare level only
//! (`debug`, `trace`, ...). Per-target directives such as
//! `metrum_units=debug` are not understood and leave the default `warn`.

use std::env;
use metrum_core::{Locale, SymbolFormat};

pub const LOCALE_VAR: &str = "METRUM_LOCALE";
pub const STYLE_VAR: &str = "METRUM_STYLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub locale: Locale,
    pub style: SymbolFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unknown values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(tag) = lookup(LOCALE_VAR) {
            match Locale::from_tag(&tag) {
                Some(locale) => config.locale = locale,
                None => tracing::warn!(var = LOCALE_VAR, value = %tag, "unknown locale, using invariant"),
            }
        }

        if let Some(name) = lookup(STYLE_VAR) {
            match name.parse::<SymbolFormat>() {
                Ok(style) => config.style = style,
                Err(e) => tracing::warn!(var = STYLE_VAR, error = %e, "ignoring symbol style"),
            }
        }

        config
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, locale: Option<Locale>, style: Option<SymbolFormat>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(style) = style {
            self.style = style;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.locale, Locale::INVARIANT);
        assert_eq!(config.style, SymbolFormat::Default);
    }

    #[test]
    fn test_reads_variables() {
        let config = Config::from_lookup(lookup(&[
            (LOCALE_VAR, "sv-SE"),
            (STYLE_VAR, "fraction-superscript"),
        ]));
        assert_eq!(config.locale, Locale::SV_SE);
        assert_eq!(config.style, SymbolFormat::FractionSuperScript);
    }

    #[test]
    fn test_unknown_values_ignored() {
        let config = Config::from_lookup(lookup(&[(LOCALE_VAR, "xx-YY"), (STYLE_VAR, "fancy")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_environment() {
        let config = Config::from_lookup(lookup(&[(LOCALE_VAR, "sv-SE")]))
            .with_overrides(Some(Locale::DE_DE), None);
        assert_eq!(config.locale, Locale::DE_DE);
        assert_eq!(config.style, SymbolFormat::Default);
    }
}
