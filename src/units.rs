use serde::Serialize;

pub const BITS_PER_BYTE: u64 = 8;
pub const THRESHOLD: f64 = 1024.0;

/// Binary storage units (powers of 1024)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::B, Unit::KB, Unit::MB, Unit::GB, Unit::TB];

    pub fn multiplier(self) -> f64 {
        THRESHOLD.powi(self.exponent())
    }

    fn exponent(self) -> i32 {
        match self {
            Unit::B => 0,
            Unit::KB => 1,
            Unit::MB => 2,
            Unit::GB => 3,
            Unit::TB => 4,
        }
    }

    /// Short French symbol shown next to a quantity
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::B => "octets",
            Unit::KB => "Ko",
            Unit::MB => "Mo",
            Unit::GB => "Go",
            Unit::TB => "To",
        }
    }

    /// Name used in the unit selector
    pub fn label(self) -> &'static str {
        match self {
            Unit::B => "Octets",
            Unit::KB => "Ko",
            Unit::MB => "Mo",
            Unit::GB => "Go",
            Unit::TB => "To",
        }
    }

    /// Long name used as a caption for converted values
    pub fn long_name(self) -> &'static str {
        match self {
            Unit::B => "octets",
            Unit::KB => "kilooctets",
            Unit::MB => "mégaoctets",
            Unit::GB => "gigaoctets",
            Unit::TB => "téraoctets",
        }
    }

    pub fn next(self) -> Unit {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Unit {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn bytes_to_bits(bytes: u64) -> u64 {
    bytes.saturating_mul(BITS_PER_BYTE)
}

/// Express a byte quantity in `unit`
pub fn bytes_in_unit(bytes: f64, unit: Unit) -> f64 {
    bytes / unit.multiplier()
}

/// Format a byte quantity in `unit` with two decimals, e.g. "2048.00 Mo"
pub fn format_in_unit(bytes: f64, unit: Unit) -> String {
    format!("{:.2} {}", bytes_in_unit(bytes, unit), unit.symbol())
}

/// Pick the largest unit in which `bytes` is at least 1 (capped at TB)
pub fn best_unit(bytes: u64) -> (f64, Unit) {
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < Unit::ALL.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    (size, Unit::ALL[unit_index])
}

/// Format bytes to human-readable string with appropriate units
pub fn format_size(bytes: u64) -> String {
    let (size, unit) = best_unit(bytes);
    format!("{:.2} {}", size, unit.symbol())
}

/// Parse user input as a non-negative quantity; anything else becomes 0
pub fn parse_quantity(input: &str) -> f64 {
    let input = input.trim().replace(',', ".");
    match input.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

/// Render a number without a trailing ".0" when it is integral
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Group thousands with spaces, e.g. 4294967296 -> "4 294 967 296"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_are_binary() {
        assert_eq!(Unit::B.multiplier(), 1.0);
        assert_eq!(Unit::KB.multiplier(), 1024.0);
        assert_eq!(Unit::MB.multiplier(), 1_048_576.0);
        assert_eq!(Unit::GB.multiplier(), 1_073_741_824.0);
        assert_eq!(Unit::TB.multiplier(), 1_099_511_627_776.0);
    }

    #[test]
    fn test_format_in_unit() {
        let bytes = 2.0 * Unit::GB.multiplier();
        assert_eq!(bytes, 2_147_483_648.0);
        assert_eq!(format_in_unit(bytes, Unit::MB), "2048.00 Mo");
        assert_eq!(format_in_unit(bytes, Unit::GB), "2.00 Go");
        assert_eq!(format_in_unit(bytes, Unit::TB), "0.00 To");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 octets");
        assert_eq!(format_size(512), "512.00 octets");
        assert_eq!(format_size(12_500), "12.21 Ko");
        assert_eq!(format_size(3_145_728), "3.00 Mo");
        assert_eq!(format_size(4_294_967_296), "4.00 Go");
        assert_eq!(format_size(1_099_511_627_776), "1.00 To");
    }

    #[test]
    fn test_best_unit_stays_below_threshold() {
        for bytes in [1u64, 1023, 1024, 1_500_000, 7 << 30, 999 << 40] {
            let (size, unit) = best_unit(bytes);
            if unit != Unit::TB {
                assert!(size < THRESHOLD, "{bytes} gave {size} {:?}", unit);
            }
            if unit != Unit::B {
                assert!(size >= 1.0);
            }
        }
        // TB is the ceiling
        let (size, unit) = best_unit(2048 << 40);
        assert_eq!(unit, Unit::TB);
        assert_eq!(size, 2048.0);
    }

    #[test]
    fn test_conversion_round_trip() {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let value = 3.75;
                let bytes = value * from.multiplier();
                let there = bytes_in_unit(bytes, to);
                let back = there * to.multiplier();
                assert!((back - bytes).abs() <= bytes * 1e-12);
            }
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12.0);
        assert_eq!(parse_quantity(" 1.5 "), 1.5);
        assert_eq!(parse_quantity("1,5"), 1.5);
        assert_eq!(parse_quantity("-4"), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("inf"), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_500), "12 500");
        assert_eq!(group_thousands(4_294_967_296), "4 294 967 296");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_unit_cycling() {
        assert_eq!(Unit::B.next(), Unit::KB);
        assert_eq!(Unit::TB.next(), Unit::B);
        assert_eq!(Unit::B.prev(), Unit::TB);
    }
}
