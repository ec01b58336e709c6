use randbeans_populate::ByteRandomizer;

/// Replays a fixed sequence of bytes, starting over once exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedBytes {
    bytes: Vec<i8>,
    next: usize,
}

impl ScriptedBytes {
    /// # Panics
    ///
    /// If `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<i8>>) -> Self {
        let bytes = bytes.into();
        assert!(!bytes.is_empty(), "scripted randomizer needs at least one byte");
        Self { bytes, next: 0 }
    }

    /// Always returns `byte`.
    pub fn constant(byte: i8) -> Self {
        Self::new([byte])
    }
}

impl ByteRandomizer for ScriptedBytes {
    fn next_byte(&mut self) -> i8 {
        let byte = self.bytes[self.next % self.bytes.len()];
        self.next += 1;
        byte
    }
}
