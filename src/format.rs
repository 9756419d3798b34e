//! Presentation helpers for reply text.

/// Human-readable name for a disease identifier: separators become spaces
/// and every alphabetic run is title-cased (`heart_attack` → `Heart Attack`,
/// `h1n1` → `H1N1`).
pub fn display_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut prev_alpha = false;

    for ch in identifier.chars() {
        let ch = if ch == '_' || ch == '-' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(display_name("heart_attack"), "Heart Attack");
        assert_eq!(display_name("kidney-stones"), "Kidney Stones");
    }

    #[test]
    fn title_cases_each_alphabetic_run() {
        assert_eq!(display_name("dengue"), "Dengue");
        assert_eq!(display_name("COVID-19"), "Covid 19");
        assert_eq!(display_name("h1n1"), "H1N1");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(display_name(""), "");
    }
}
