use super::Outcome;

pub const BIT_COUNT: usize = 8;

/// What a byte value stands for in ASCII
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Named(&'static str),
    Control,
    Printable(char),
    NonAscii,
}

impl CharClass {
    pub fn of(value: u8) -> CharClass {
        match value {
            0 => CharClass::Named("NUL (caractère nul)"),
            9 => CharClass::Named("TAB (tabulation)"),
            10 => CharClass::Named("LF (retour à la ligne)"),
            13 => CharClass::Named("CR (retour chariot)"),
            27 => CharClass::Named("ESC (échap)"),
            32 => CharClass::Named("ESPACE"),
            1..=31 => CharClass::Control,
            33..=126 => CharClass::Printable(value as char),
            _ => CharClass::NonAscii,
        }
    }

    pub fn description(self) -> String {
        match self {
            CharClass::Named(label) => label.to_string(),
            CharClass::Control => "Caractère de contrôle".to_string(),
            CharClass::Printable(c) => c.to_string(),
            CharClass::NonAscii => "Caractère non-ASCII".to_string(),
        }
    }
}

/// Sum of bit[i] * 2^(7-i); bit 0 is the most significant
pub fn bits_to_decimal(bits: &[bool; BIT_COUNT]) -> u8 {
    bits.iter()
        .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit))
}

pub struct BitManipulation {
    bits: [bool; BIT_COUNT],
    has_interacted: bool,
    pub show_info: bool,
    pub cursor: usize,
}

impl BitManipulation {
    pub fn new() -> Self {
        BitManipulation {
            bits: [false; BIT_COUNT],
            has_interacted: false,
            show_info: false,
            cursor: 0,
        }
    }

    pub fn bits(&self) -> &[bool; BIT_COUNT] {
        &self.bits
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn toggle_bit(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
            self.has_interacted = true;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle_bit(self.cursor);
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor < BIT_COUNT - 1 {
            self.cursor += 1;
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    pub fn decimal(&self) -> u8 {
        bits_to_decimal(&self.bits)
    }

    pub fn character(&self) -> CharClass {
        CharClass::of(self.decimal())
    }

    /// Continue is only possible after the learner flipped a bit
    pub fn complete(&self) -> Outcome {
        if self.has_interacted {
            Outcome::Complete
        } else {
            Outcome::Stay
        }
    }
}

impl Default for BitManipulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(value: u8) -> [bool; BIT_COUNT] {
        let mut bits = [false; BIT_COUNT];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = value & (1 << (7 - i)) != 0;
        }
        bits
    }

    #[test]
    fn test_decimal_matches_weighted_sum_for_every_byte() {
        for value in 0..=255u8 {
            let bits = bits_of(value);
            let expected: u32 = bits
                .iter()
                .enumerate()
                .map(|(i, b)| if *b { 1 << (7 - i) } else { 0 })
                .sum();
            assert_eq!(bits_to_decimal(&bits) as u32, expected);
        }
    }

    #[test]
    fn test_letter_a() {
        let mut lesson = BitManipulation::new();
        lesson.toggle_bit(1);
        lesson.toggle_bit(7);
        assert_eq!(lesson.bits(), &[false, true, false, false, false, false, false, true]);
        assert_eq!(lesson.decimal(), 65);
        assert_eq!(lesson.character(), CharClass::Printable('A'));
        assert_eq!(lesson.character().description(), "A");
    }

    #[test]
    fn test_character_mapping_is_total() {
        for value in 0..=255u8 {
            let class = CharClass::of(value);
            match value {
                0 | 9 | 10 | 13 | 27 | 32 => assert!(matches!(class, CharClass::Named(_))),
                1..=31 => assert_eq!(class, CharClass::Control),
                33..=126 => assert_eq!(class, CharClass::Printable(value as char)),
                _ => assert_eq!(class, CharClass::NonAscii),
            }
            assert!(!class.description().is_empty());
        }
        assert_eq!(CharClass::of(32).description(), "ESPACE");
        assert_eq!(CharClass::of(127).description(), "Caractère non-ASCII");
    }

    #[test]
    fn test_completion_requires_a_toggle() {
        let mut lesson = BitManipulation::new();
        assert_eq!(lesson.complete(), Outcome::Stay);

        // Out-of-range index is not an interaction
        lesson.toggle_bit(8);
        assert_eq!(lesson.complete(), Outcome::Stay);

        lesson.toggle_bit(0);
        lesson.toggle_bit(0);
        assert_eq!(lesson.decimal(), 0);
        assert_eq!(lesson.complete(), Outcome::Complete);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut lesson = BitManipulation::new();
        lesson.select_prev();
        assert_eq!(lesson.cursor, 0);
        for _ in 0..20 {
            lesson.select_next();
        }
        assert_eq!(lesson.cursor, 7);
        lesson.toggle_selected();
        assert_eq!(lesson.decimal(), 1);
    }
}
