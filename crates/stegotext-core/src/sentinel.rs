//! The terminator that marks the end of a hidden message.

/// appended to every payload before hiding, 5 characters = 40 bits
pub const SENTINEL: &str = "*^*^*";

/// appends the sentinel to the payload
pub fn frame(payload: &str) -> String {
    let mut framed = String::with_capacity(payload.len() + SENTINEL.len());
    framed.push_str(payload);
    framed.push_str(SENTINEL);
    framed
}

/// Rebuilds characters byte by byte and watches for the sentinel.
///
/// Every byte is taken as one character (U+0000 to U+00FF). The first occurrence of the
/// sentinel ends the message, so a payload that itself contains `*^*^*` is cut short there.
#[derive(Debug, Default)]
pub struct SentinelScanner {
    accumulator: String,
    consumed: usize,
}

impl SentinelScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message without the sentinel as soon as the sentinel completes.
    pub fn push(&mut self, byte: u8) -> Option<String> {
        self.accumulator.push(char::from(byte));
        self.consumed += 1;

        if self.accumulator.ends_with(SENTINEL) {
            let mut message = std::mem::take(&mut self.accumulator);
            message.truncate(message.len() - SENTINEL.len());
            return Some(message);
        }

        None
    }

    /// number of bytes pushed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}
