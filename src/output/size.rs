//! Byte-size and count formatting

/// Auto-scaling moves to the next larger unit once a scaled value exceeds this.
pub const AUTO_SCALE_LIMIT: f64 = 999.4;

/// Unit used to display byte sizes in formatted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeScale {
    /// Smallest of KB, MB, GB, TB that keeps the value at or below 999.4
    #[default]
    Auto,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeScale {
    fn divisor(self) -> f64 {
        const KB: f64 = 1024.0;
        match self {
            SizeScale::Auto | SizeScale::Bytes => 1.0,
            SizeScale::Kilobytes => KB,
            SizeScale::Megabytes => KB * KB,
            SizeScale::Gigabytes => KB * KB * KB,
            SizeScale::Terabytes => KB * KB * KB * KB,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            SizeScale::Auto | SizeScale::Bytes => " bytes",
            SizeScale::Kilobytes => " KB",
            SizeScale::Megabytes => " MB",
            SizeScale::Gigabytes => " GB",
            SizeScale::Terabytes => " TB",
        }
    }

    fn decimals(self) -> usize {
        match self {
            SizeScale::Auto | SizeScale::Bytes => 0,
            SizeScale::Kilobytes | SizeScale::Megabytes => 1,
            SizeScale::Gigabytes | SizeScale::Terabytes => 2,
        }
    }
}

/// Format a byte count in the given scale, e.g. `4.9 KB` or `1,536 bytes`.
pub fn format_bytes(size: u64, scale: SizeScale) -> String {
    let unit = match scale {
        SizeScale::Auto => auto_scale(size),
        // Exact integer path; f64 would lose precision on huge counts
        SizeScale::Bytes => return format!("{}{}", group_digits(size), SizeScale::Bytes.suffix()),
        forced => forced,
    };
    let value = size as f64 / unit.divisor();
    format!("{}{}", format_decimal(value, unit.decimals()), unit.suffix())
}

/// Pick the unit for auto-scaling, cascading KB -> MB -> GB -> TB.
fn auto_scale(size: u64) -> SizeScale {
    let mut unit = SizeScale::Kilobytes;
    let mut value = size as f64 / 1024.0;
    for next in [
        SizeScale::Megabytes,
        SizeScale::Gigabytes,
        SizeScale::Terabytes,
    ] {
        if value > AUTO_SCALE_LIMIT {
            value /= 1024.0;
            unit = next;
        }
    }
    unit
}

/// Format a number with a fixed count of decimals and grouped thousands.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((whole, fraction)) => format!("{}.{}", group_str(whole), fraction),
        None => group_str(&formatted),
    }
}

/// Format a count with `,` between groups of three digits.
pub fn group_digits(n: u64) -> String {
    group_str(&n.to_string())
}

fn group_str(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
