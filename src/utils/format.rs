//! Formatting utilities for file sizes and icon lookup.

/// Format a byte count for display (e.g., "1.5 KB", "16 MB").
///
/// Base-1024 units, at most two decimal places with trailing zeros
/// trimmed. Zero is special-cased as "0 Bytes".
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    format!("{} {}", trim_decimals(value), UNITS[exponent])
}

/// Render with two decimal places, then strip trailing zeros and a bare
/// decimal point ("1.00" -> "1", "1.50" -> "1.5").
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Icon classes for a file extension (lower-case), with a generic-file
/// fallback for anything unrecognized.
pub fn icon_for(extension: &str) -> &'static str {
    match extension {
        "pdf" => "bi-file-earmark-pdf text-danger",
        "doc" | "docx" => "bi-file-earmark-word text-primary",
        "xls" | "xlsx" => "bi-file-earmark-excel text-success",
        "ppt" | "pptx" => "bi-file-earmark-ppt text-warning",
        "jpg" | "jpeg" | "png" | "gif" => "bi-file-earmark-image text-info",
        "zip" | "rar" => "bi-file-earmark-archive text-secondary",
        "txt" => "bi-file-earmark-text text-muted",
        _ => "bi-file-earmark text-muted",
    }
}

/// Icon classes for a file name.
pub fn icon_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    icon_for(&extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_zero() {
        assert_eq!(human_size(0), "0 Bytes");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(500), "500 Bytes");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(16 * 1024 * 1024), "16 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_human_size_rounds_to_two_decimals() {
        // 1234567 / 1024^2 = 1.17737...
        assert_eq!(human_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for("pdf"), "bi-file-earmark-pdf text-danger");
        assert_eq!(icon_for("docx"), "bi-file-earmark-word text-primary");
        assert_eq!(icon_for("xyz"), "bi-file-earmark text-muted");
    }

    #[test]
    fn test_icon_for_name() {
        assert_eq!(icon_for_name("photo.PNG"), "bi-file-earmark-image text-info");
        assert_eq!(icon_for_name("no-extension"), "bi-file-earmark text-muted");
    }
}
