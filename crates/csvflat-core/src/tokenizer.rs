// crates/csvflat-core/src/tokenizer.rs
//
// Push-style CSV tokenizer. Feed arbitrary byte chunks; fields and
// records are reported to a RecordSink in arrival order. Chunk
// boundaries may fall anywhere, including inside a quoted field,
// a CRLF pair, or a doubled quote.

use crate::config::ParserConfig;
use crate::error::{FlatError, Result};

/// Receiver for tokenizer events. `field` carries the raw, unescaped
/// content of one field (embedded newlines still present); `record`
/// fires once per record terminator seen outside quotes.
pub trait RecordSink {
    fn field(&mut self, raw: &[u8]) -> Result<()>;
    fn record(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside quotes; also the field/record start state.
    Unquoted,
    /// Inside a quoted field; bytes accumulate verbatim.
    Quoted,
    /// Saw a quote inside a quoted field; next byte disambiguates
    /// escape (doubled quote) from close.
    QuoteInQuoted,
    /// A record just ended on a bare CR; an immediately following LF
    /// belongs to the same terminator and is swallowed.
    RecordEndCr,
}

pub struct Tokenizer {
    config: ParserConfig,
    state: State,
    field: Vec<u8>,
    /// Fields already emitted for the record in progress. Needed at
    /// end-of-input to tell "trailing delimiter" from "clean boundary".
    pending_fields: u32,
}

impl Tokenizer {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            state: State::Unquoted,
            field: Vec::new(),
            pending_fields: 0,
        }
    }

    /// Run the state machine over one chunk. Events for every field and
    /// record completed within the chunk are delivered before returning.
    pub fn feed<S: RecordSink>(&mut self, chunk: &[u8], sink: &mut S) -> Result<()> {
        let delim = self.config.delimiter;
        let quote = self.config.quote;

        let mut i = 0usize;
        while i < chunk.len() {
            let b = chunk[i];
            match self.state {
                State::Unquoted => {
                    if b == quote && self.field.is_empty() {
                        self.state = State::Quoted;
                    } else if b == quote {
                        // Bare quote mid-field: passed through literally.
                        self.field.push(b);
                    } else if b == delim {
                        self.emit_field(sink)?;
                    } else if b == b'\n' {
                        self.emit_field(sink)?;
                        self.emit_record(sink)?;
                    } else if b == b'\r' {
                        self.emit_field(sink)?;
                        self.emit_record(sink)?;
                        self.state = State::RecordEndCr;
                    } else {
                        self.field.push(b);
                    }
                }
                State::Quoted => {
                    if b == quote {
                        self.state = State::QuoteInQuoted;
                    } else {
                        // Delimiters and newlines are data inside quotes.
                        self.field.push(b);
                    }
                }
                State::QuoteInQuoted => {
                    if b == quote {
                        self.field.push(quote);
                        self.state = State::Quoted;
                    } else if b == delim {
                        self.emit_field(sink)?;
                        self.state = State::Unquoted;
                    } else if b == b'\n' {
                        self.emit_field(sink)?;
                        self.emit_record(sink)?;
                        self.state = State::Unquoted;
                    } else if b == b'\r' {
                        self.emit_field(sink)?;
                        self.emit_record(sink)?;
                        self.state = State::RecordEndCr;
                    } else {
                        return Err(FlatError::Parse(format!(
                            "unexpected byte 0x{b:02X} after closing quote"
                        )));
                    }
                }
                State::RecordEndCr => {
                    self.state = State::Unquoted;
                    if b == b'\n' {
                        // Second half of CRLF; already terminated.
                        i += 1;
                    }
                    continue;
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// Signal end of input. Flushes a final field/record if the source
    /// ended mid-record; rejects an unterminated quoted field.
    pub fn finish<S: RecordSink>(&mut self, sink: &mut S) -> Result<()> {
        match self.state {
            State::Quoted => {
                return Err(FlatError::Parse(
                    "unterminated quoted field at end of input".into(),
                ));
            }
            State::QuoteInQuoted => {
                // The quote was a closer; the field is complete.
                self.emit_field(sink)?;
                self.emit_record(sink)?;
            }
            State::Unquoted | State::RecordEndCr => {
                if !self.field.is_empty() || self.pending_fields > 0 {
                    self.emit_field(sink)?;
                    self.emit_record(sink)?;
                }
            }
        }
        self.state = State::Unquoted;
        Ok(())
    }

    fn emit_field<S: RecordSink>(&mut self, sink: &mut S) -> Result<()> {
        sink.field(&self.field)?;
        self.field.clear();
        self.pending_fields += 1;
        Ok(())
    }

    fn emit_record<S: RecordSink>(&mut self, sink: &mut S) -> Result<()> {
        sink.record()?;
        self.pending_fields = 0;
        Ok(())
    }
}
