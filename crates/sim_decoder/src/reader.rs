use std::io::{ErrorKind, Read};

/// The longest MOV encoding: op code, mod-reg-r/m, 2 displacement and 2 data bytes.
pub const MAX_INSTRUCTION_LEN: usize = 6;

/// Outcome of [ByteCursor::fill].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// All the requested bytes were appended.
    Complete,
    /// The stream ended before any of the requested bytes could be read.
    End,
    /// The stream ended part way through the request.
    Truncated,
}

/// Reads the bytes of one instruction at a time from a forward only stream.
pub struct ByteCursor<R> {
    reader: R,
    bytes: [u8; MAX_INSTRUCTION_LEN],
    len: usize,
    start: u64,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: [0; MAX_INSTRUCTION_LEN],
            len: 0,
            start: 0,
            position: 0,
        }
    }

    /// Forget the bytes of the previous instruction.
    pub fn begin(&mut self) {
        self.len = 0;
        self.start = self.position;
    }

    /// Append `n` more bytes from the stream to the current instruction.
    pub fn fill(&mut self, n: usize) -> std::io::Result<Fill> {
        assert!(
            self.len + n <= MAX_INSTRUCTION_LEN,
            "instruction longer than {} bytes",
            MAX_INSTRUCTION_LEN
        );

        let start = self.len;
        let end = start + n;
        while self.len < end {
            match self.reader.read(&mut self.bytes[self.len..end]) {
                Ok(0) => break,
                Ok(read) => {
                    self.len += read;
                    self.position += read as u64;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }

        Ok(match self.len - start {
            read if read == n => Fill::Complete,
            0 => Fill::End,
            _ => Fill::Truncated,
        })
    }

    /// The bytes of the current instruction read so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Offset in the stream of the first byte of the current instruction.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Offset in the stream of the next byte to be read.
    pub fn position(&self) -> u64 {
        self.position
    }
}
