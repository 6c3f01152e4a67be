use super::Outcome;
use crate::units::{Unit, format_number, parse_quantity};

/// Which control of the converter has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterField {
    Value,
    Unit,
}

pub struct ByteConverter {
    value: f64,
    unit: Unit,
    has_interacted: bool,
    pub input: String,
    pub focus: ConverterField,
}

impl ByteConverter {
    pub fn new() -> Self {
        ByteConverter {
            value: 0.0,
            unit: Unit::B,
            has_interacted: false,
            input: "0".to_string(),
            focus: ConverterField::Value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn bytes(&self) -> f64 {
        self.value * self.unit.multiplier()
    }

    pub fn bits(&self) -> f64 {
        self.bytes() * 8.0
    }

    /// Parse raw text; invalid or negative input counts as 0
    pub fn set_value(&mut self, raw: &str) {
        self.value = parse_quantity(raw);
        self.has_interacted = true;
    }

    /// Switch unit while keeping the same number of bytes
    pub fn set_unit(&mut self, unit: Unit) {
        let bytes = self.bytes();
        self.unit = unit;
        self.value = bytes / unit.multiplier();
        self.input = format_number(self.value());
        self.has_interacted = true;
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            if self.input == "0" && c.is_ascii_digit() {
                self.input.clear();
            }
            self.input.push(c);
            let raw = self.input.clone();
            self.set_value(&raw);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        let raw = self.input.clone();
        self.set_value(&raw);
    }

    pub fn next_unit(&mut self) {
        self.set_unit(self.unit.next());
    }

    pub fn prev_unit(&mut self) {
        self.set_unit(self.unit.prev());
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            ConverterField::Value => ConverterField::Unit,
            ConverterField::Unit => ConverterField::Value,
        };
    }

    pub fn complete(&self) -> Outcome {
        if self.has_interacted {
            Outcome::Complete
        } else {
            Outcome::Stay
        }
    }
}

impl Default for ByteConverter {
    fn default() -> Self {
        Self::new()
    }
}
