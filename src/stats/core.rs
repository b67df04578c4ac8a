use memchr::memchr_iter;

/// Whitespace lookup table for branchless word boundary detection.
/// C locale `isspace()`: space, tab, newline, CR, form feed, vertical tab.
const fn make_ws_table() -> [u8; 256] {
    let mut t = [0u8; 256];
    t[0x09] = 1; // \t  horizontal tab
    t[0x0A] = 1; // \n  newline
    t[0x0B] = 1; // \v  vertical tab
    t[0x0C] = 1; // \f  form feed
    t[0x0D] = 1; // \r  carriage return
    t[0x20] = 1; //     space
    t
}

/// Precomputed whitespace lookup: `WS_TABLE[byte] == 1` if whitespace, `0` otherwise.
const WS_TABLE: [u8; 256] = make_ws_table();

/// Count newline bytes (`\n`) using SIMD-accelerated memchr.
#[inline]
pub fn count_lines(data: &[u8]) -> u64 {
    memchr_iter(b'\n', data).count() as u64
}

/// Count characters. The original tool counted bytes, so this does too.
#[inline]
pub fn count_chars(data: &[u8]) -> u64 {
    data.len() as u64
}

/// Resumable word counter.
///
/// A word is a maximal run of non-whitespace bytes. The scanner keeps the
/// "previous byte was whitespace" state across calls, so a logical line that
/// arrives split over several bounded reads is counted exactly as if it had
/// been read whole — chunk boundaries never split or invent words.
#[derive(Debug, Clone)]
pub struct WordScanner {
    prev_ws: u8,
}

impl WordScanner {
    /// Start-of-input counts as whitespace.
    pub fn new() -> Self {
        Self { prev_ws: 1 }
    }

    /// Count the words that *start* inside `data`, carrying boundary state.
    ///
    /// Branchless hot loop: a word starts at each whitespace-to-non-whitespace
    /// transition. `curr_ws ^ 1` flips 0↔1, so `prev_ws & (curr_ws ^ 1)` is 1
    /// only at word-start transitions.
    pub fn scan(&mut self, data: &[u8]) -> u64 {
        let mut words = 0u64;
        let mut prev_ws = self.prev_ws;

        for &b in data {
            let curr_ws = WS_TABLE[b as usize];
            words += (prev_ws & (curr_ws ^ 1)) as u64;
            prev_ws = curr_ws;
        }

        self.prev_ws = prev_ws;
        words
    }
}

impl Default for WordScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Count words in a single slice: number of maximal non-whitespace runs.
/// Pure; `count_words(b"")` and `count_words(b" ")` are both 0.
#[inline]
pub fn count_words(data: &[u8]) -> u64 {
    WordScanner::new().scan(data)
}
