use chrono::Local;
use papermill_types::DocumentKind;
use rand::Rng;

/// Generate a unique filename: `{prefix}_{timestamp}_{random8hex}.{ext}`.
///
/// The timestamp gives operators a readable creation ordering; the random
/// suffix keeps two generations within the same second distinct.
pub fn generate_filename(kind: DocumentKind) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let suffix: u32 = rand::rng().random();
    format!(
        "{}_{}_{:08x}.{}",
        kind.file_prefix(),
        timestamp,
        suffix,
        kind.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_shape_matches_contract() {
        let name = generate_filename(DocumentKind::Spreadsheet);
        assert!(name.starts_with("spreadsheet_"));
        assert!(name.ends_with(".xlsx"));

        // prefix, date, time, 8-hex suffix
        let stem = name.strip_suffix(".xlsx").unwrap();
        let parts: Vec<&str> = stem.split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        assert_eq!(parts[3].len(), 8);
        assert!(parts[3].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn successive_names_differ() {
        let a = generate_filename(DocumentKind::Presentation);
        let b = generate_filename(DocumentKind::Presentation);
        assert_ne!(a, b);
    }
}
