//! Human readable byte sizes with binary prefixes.

const PREFIXES: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];

/// Formats `num` bytes, e.g. `1536.0` as `1.5KiB`.
pub fn format_size(num: f64) -> String {
    format_size_with_suffix(num, "B")
}

/// Formats `num` with binary prefixes followed by `suffix`.
///
/// The sign is kept. Values beyond the zebi range are expressed in `Yi`.
pub fn format_size_with_suffix(mut num: f64, suffix: &str) -> String {
    for prefix in PREFIXES {
        if num.abs() < 1024.0 {
            return format!("{num:3.1}{prefix}{suffix}");
        }
        num /= 1024.0;
    }
    format!("{num:.1}Yi{suffix}")
}
