/// Finite sequence of ever longer prefixes of a text, one character at a time.
///
/// `restart` rewinds to the beginning so the same effect can be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSequence {
    text: String,
    // Byte offsets of every char boundary after the first char, ending at text.len().
    boundaries: Vec<usize>,
    revealed: usize,
}

impl TypingSequence {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(start, ch)| start + ch.len_utf8())
            .collect();
        Self {
            text,
            boundaries,
            revealed: 0,
        }
    }

    pub fn current(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.boundaries.len()
    }

    pub fn restart(&mut self) {
        self.revealed = 0;
    }

    /// Reveals the next character, returning the prefix to show (if any) and
    /// whether nothing is left to type afterwards.
    pub fn advance(&mut self) -> (Option<String>, bool) {
        let prefix = self.next();
        (prefix, self.is_finished())
    }
}

impl Iterator for TypingSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.revealed += 1;
        Some(self.current().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.boundaries.len() - self.revealed;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_step() {
        let steps: Vec<String> = TypingSequence::new("Hey").collect();
        assert_eq!(steps, vec!["H", "He", "Hey"]);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let steps: Vec<String> = TypingSequence::new("né✓").collect();
        assert_eq!(steps, vec!["n", "né", "né✓"]);
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut seq = TypingSequence::new("");
        assert!(seq.is_finished());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn restart_replays_from_scratch() {
        let mut seq = TypingSequence::new("ab");
        assert_eq!(seq.by_ref().count(), 2);
        assert!(seq.is_finished());

        seq.restart();
        assert_eq!(seq.current(), "");
        assert_eq!(seq.next().as_deref(), Some("a"));
        assert_eq!(seq.size_hint(), (1, Some(1)));
    }

    #[test]
    fn first_step_shows_first_char_without_waiting_a_tick() {
        let mut seq = TypingSequence::new("Hi");
        assert_eq!(seq.advance(), (Some("H".to_string()), false));
        assert_eq!(seq.advance(), (Some("Hi".to_string()), true));
    }

    #[test]
    fn single_char_text_finishes_on_first_step() {
        let mut seq = TypingSequence::new("A");
        assert_eq!(seq.advance(), (Some("A".to_string()), true));

        let mut empty = TypingSequence::new("");
        assert_eq!(empty.advance(), (None, true));
    }
}
