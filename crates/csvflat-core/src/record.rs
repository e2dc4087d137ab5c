// crates/csvflat-core/src/record.rs
//
// Record assembly: sanitize each incoming field, re-encode it, and
// join fields into one delimited output line per record. The line
// buffer is reused across records; it grows by appending and is
// cleared at each record end.

use std::io::Write;

use crate::config::ParserConfig;
use crate::encode;
use crate::error::Result;
use crate::sanitize;
use crate::tokenizer::RecordSink;

pub struct RecordAssembler<W: Write> {
    config: ParserConfig,
    out: W,
    line: Vec<u8>,
    field_count: u32,
    record_count: u64,
    fields_total: u64,
}

impl<W: Write> RecordAssembler<W> {
    pub fn new(config: ParserConfig, out: W) -> Self {
        Self {
            config,
            out,
            line: Vec::new(),
            field_count: 0,
            record_count: 0,
            fields_total: 0,
        }
    }

    /// Records written so far.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Fields appended to the record in progress.
    pub fn field_count(&self) -> u32 {
        self.field_count
    }

    /// Fields written across all records so far.
    pub fn fields_total(&self) -> u64 {
        self.fields_total
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for RecordAssembler<W> {
    fn field(&mut self, raw: &[u8]) -> Result<()> {
        if self.field_count > 0 {
            self.line.push(self.config.delimiter);
        }
        let clean = sanitize::replace_newlines(raw);
        encode::write_quoted(&clean, self.config.quote, &mut self.line);
        self.field_count += 1;
        self.fields_total += 1;
        Ok(())
    }

    fn record(&mut self) -> Result<()> {
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        self.record_count += 1;
        self.field_count = 0;
        self.line.clear();
        Ok(())
    }
}
