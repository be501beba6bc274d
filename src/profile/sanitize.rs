/// Reduce a string to a valid profile identifier: strip everything outside
/// `a-z A-Z 0-9 - _ . ( )` and space, then map spaces to underscores.
///
/// Idempotent, so a supplied identifier is valid exactly when it equals its
/// own sanitized form.
pub fn sanitize_identifier(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')' | ' '))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_invalid_characters_and_maps_spaces() {
        assert_eq!(sanitize_identifier("My Printer!"), "My_Printer");
        assert_eq!(sanitize_identifier("kossel (v2).cfg"), "kossel_(v2).cfg");
        assert_eq!(sanitize_identifier("ümläut/δ"), "mlut");
    }

    #[test]
    fn idempotent() {
        for s in ["My Printer!", "a b c", "already_clean-1.0", "", "!!!"] {
            let once = sanitize_identifier(s);
            assert_eq!(sanitize_identifier(&once), once);
        }
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let out = sanitize_identifier("weird \u{1F600} input / with * junk");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')')));
    }
}
