//! State machine behind the hero section's typed-skill animation.
//!
//! Driven by a uniform timer tick: each tick either reveals one more
//! character of the current word, burns down the hold period once the word
//! is complete, or clears and advances to the next word (wrapping at the
//! end of the list). Purely cosmetic, runs forever.

/// Milliseconds between ticks.
pub const TICK_MS: u64 = 100;

/// Ticks to keep a fully-typed word on screen before clearing (2s at 100ms).
const HOLD_TICKS: u32 = 20;

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    hold: u32,
}

impl Typewriter {
    /// Panics if `words` is empty; the word list is compile-time data.
    pub fn new(words: &'static [&'static str]) -> Self {
        assert!(!words.is_empty(), "typewriter needs at least one word");
        Self {
            words,
            word: 0,
            shown: 0,
            hold: HOLD_TICKS,
        }
    }

    pub fn tick(&mut self) {
        let len = self.words[self.word].chars().count();
        if self.shown < len {
            self.shown += 1;
        } else if self.hold > 0 {
            self.hold -= 1;
        } else {
            self.shown = 0;
            self.word = (self.word + 1) % self.words.len();
            self.hold = HOLD_TICKS;
        }
    }

    /// The currently visible prefix of the current word.
    pub fn text(&self) -> String {
        self.words[self.word].chars().take(self.shown).collect()
    }

    pub fn word_index(&self) -> usize {
        self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "cde", "f"];

    fn ticks_per_word(word: &str) -> usize {
        // reveal each char, then hold, then one tick to clear and advance
        word.chars().count() + HOLD_TICKS as usize + 1
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new(WORDS);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_holds_full_word_before_clearing() {
        let mut tw = Typewriter::new(WORDS);
        tw.tick();
        tw.tick();
        // word complete: stays visible for the whole hold period
        for _ in 0..HOLD_TICKS {
            assert_eq!(tw.text(), "ab");
            assert_eq!(tw.word_index(), 0);
            tw.tick();
        }
        // next tick clears and advances
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.word_index(), 1);
    }

    #[test]
    fn test_sequence_is_cyclic() {
        let mut tw = Typewriter::new(WORDS);
        for word in WORDS {
            for _ in 0..ticks_per_word(word) {
                tw.tick();
            }
        }
        // after cycling through all N words, the N+1th word is the 1st
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_single_word_wraps_onto_itself() {
        let mut tw = Typewriter::new(&["hi"]);
        for _ in 0..ticks_per_word("hi") {
            tw.tick();
        }
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.text(), "");
    }
}
