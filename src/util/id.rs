//! Room identifiers: short, human-typeable codes.
//!
//! Codes are usability labels, not secrets. The default source is
//! `rand::thread_rng()`, which is fast but must not be relied on for access
//! control. Nothing here checks for collisions; see [`crate::room::manager`]
//! for a registry that does.

use rand::{rngs::ThreadRng, Rng};

/// Symbols a room code is drawn from, letters first.
pub const ROOM_ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a room code.
pub const ROOM_ID_LEN: usize = 6;

/// A source of uniformly distributed indices.
pub trait SymbolSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand` generator into a [`SymbolSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the calling thread's generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> SymbolSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Each index is reduced modulo the requested bound. An empty list always
/// yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self { indices: indices.into(), pos: 0 }
    }
}

impl SymbolSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() || bound == 0 {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos = (self.pos + 1) % self.indices.len();
        idx % bound
    }
}

/// Generate a 6-character room code from the thread-local generator.
pub fn generate_room_id() -> String {
    generate_room_id_with(&mut RngSource::thread())
}

/// Generate a room code drawing each symbol from `source`.
pub fn generate_room_id_with<S: SymbolSource + ?Sized>(source: &mut S) -> String {
    (0..ROOM_ID_LEN)
        .map(|_| char::from(ROOM_ID_ALPHABET[source.next_index(ROOM_ID_ALPHABET.len())]))
        .collect()
}

/// True if `s` has the shape of a room code.
pub fn is_room_id(s: &str) -> bool {
    s.len() == ROOM_ID_LEN && s.bytes().all(|b| ROOM_ID_ALPHABET.contains(&b))
}
