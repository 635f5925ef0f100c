// src/config/parsing.rs

/// Normalizes an extension for comparison: trimmed, lowercase, no leading dot.
pub(crate) fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').trim().to_lowercase()
}

/// Normalizes a vector of extension strings, dropping entries that end up empty.
pub(super) fn normalize_extensions(exts: Vec<String>) -> Vec<String> {
    exts.iter()
        .map(|s| normalize_extension(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Trims a user-supplied text input, mapping blank values to `None`.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("XLSX"), "xlsx");
        assert_eq!(normalize_extension(".Xlsm "), "xlsm");
        assert_eq!(normalize_extension("xlsx "), "xlsx");
    }

    #[test]
    fn test_normalize_extensions_drops_empty() {
        let exts = vec![".CSV".to_string(), "  ".to_string(), "ods".to_string()];
        assert_eq!(normalize_extensions(exts), vec!["csv", "ods"]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  name ".to_string())), Some("name".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
