// crates/csvflat-cli/src/input.rs

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};

/// Open a named input for reading, with "-" meaning standard input.
pub fn open(name: &str) -> Result<Box<dyn Read>> {
    if name == "-" {
        Ok(Box::new(std::io::stdin()))
    } else {
        let f = File::open(name).with_context(|| format!("open {name}"))?;
        Ok(Box::new(f))
    }
}
