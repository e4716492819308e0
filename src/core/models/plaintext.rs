use std::io::{Cursor, Read};

/// Decrypted message body handed back by the streaming call shape.
///
/// Single-pass: it can be read once, front to back. It is neither `Seek`
/// nor `Clone`, and the bytes move to whoever consumes it.
#[derive(Debug)]
pub struct PlaintextReader {
    inner: Cursor<Vec<u8>>,
}

impl PlaintextReader {
    pub(crate) fn new(body: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(body),
        }
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        let len = self.inner.get_ref().len() as u64;
        len.saturating_sub(self.inner.position()) as usize
    }
}

impl Read for PlaintextReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}
