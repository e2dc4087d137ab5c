// crates/csvflat-core/src/flatten.rs
//
// Top-level pipeline: chunked reads -> tokenizer -> record assembler.
// One call consumes one input source completely.

use std::io::{ErrorKind, Read, Write};

use crate::config::ParserConfig;
use crate::error::Result;
use crate::record::RecordAssembler;
use crate::tokenizer::Tokenizer;

pub const READ_CHUNK: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenStats {
    pub records: u64,
    pub fields: u64,
}

/// Flatten one input source into `output`: every record becomes exactly
/// one line, fields re-quoted, embedded newlines replaced with spaces.
pub fn flatten_stream<R: Read, W: Write>(
    config: ParserConfig,
    mut input: R,
    output: W,
) -> Result<FlattenStats> {
    let mut tokenizer = Tokenizer::new(config);
    let mut assembler = RecordAssembler::new(config, output);

    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        tokenizer.feed(&buf[..n], &mut assembler)?;
    }
    tokenizer.finish(&mut assembler)?;
    assembler.flush()?;

    Ok(FlattenStats {
        records: assembler.record_count(),
        fields: assembler.fields_total(),
    })
}
