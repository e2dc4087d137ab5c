// crates/csvflat-core/src/config.rs
//
// Delimiter/quote configuration, fixed before parsing starts.

use crate::error::{FlatError, Result};

pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_QUOTE: u8 = b'"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
        }
    }
}

impl ParserConfig {
    pub fn new(delimiter: u8, quote: u8) -> Self {
        Self { delimiter, quote }
    }

    /// Build a config from command-line strings.
    /// Fails before any input is opened if either argument is unusable.
    pub fn from_args(delimiter: &str, quote: &str) -> Result<Self> {
        let cfg = Self {
            delimiter: single_byte("delimiter", delimiter)?,
            quote: single_byte("quote", quote)?,
        };
        validate_config(&cfg)?;
        Ok(cfg)
    }
}

fn single_byte(name: &str, arg: &str) -> Result<u8> {
    let bytes = arg.as_bytes();
    if bytes.len() != 1 {
        return Err(FlatError::Config(format!(
            "{name} must be exactly one byte, got {arg:?}"
        )));
    }
    Ok(bytes[0])
}

pub fn validate_config(cfg: &ParserConfig) -> Result<()> {
    // Same byte for both roles would make quoted fields unparseable.
    if cfg.delimiter == cfg.quote {
        return Err(FlatError::Config(
            "delimiter and quote must differ".into(),
        ));
    }
    // CR/LF are record terminators; they cannot double as delimiter or quote.
    for b in [cfg.delimiter, cfg.quote] {
        if b == b'\n' || b == b'\r' {
            return Err(FlatError::Config(
                "delimiter and quote must not be newline bytes".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_comma_and_double_quote() {
        let cfg = ParserConfig::default();
        assert_eq!(cfg.delimiter, b',');
        assert_eq!(cfg.quote, b'"');
    }

    #[test]
    fn from_args_accepts_single_bytes() {
        let cfg = ParserConfig::from_args(";", "'").expect("config");
        assert_eq!(cfg.delimiter, b';');
        assert_eq!(cfg.quote, b'\'');
    }

    #[test]
    fn from_args_rejects_multibyte() {
        assert!(ParserConfig::from_args(",,", "\"").is_err());
        assert!(ParserConfig::from_args("", "\"").is_err());
        // One char but two bytes in UTF-8.
        assert!(ParserConfig::from_args("é", "\"").is_err());
    }

    #[test]
    fn from_args_rejects_degenerate_pairs() {
        assert!(ParserConfig::from_args("\"", "\"").is_err());
        assert!(ParserConfig::from_args("\n", "\"").is_err());
        assert!(ParserConfig::from_args(",", "\r").is_err());
    }
}
