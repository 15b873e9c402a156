use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Scheme;

static RE_SCHEME_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)scholarship|scheme|yojana|fellowship").unwrap());

/// Title lines must be strictly longer than this (in characters)
const MIN_TITLE_CHARS: usize = 20;

/// Title lines must be strictly shorter than this (in characters)
const MAX_TITLE_CHARS: usize = 150;

fn is_title_line(line: &str) -> bool {
    let len = line.chars().count();
    len > MIN_TITLE_CHARS && len < MAX_TITLE_CHARS && RE_SCHEME_TITLE.is_match(line)
}

/// Placeholder record for a title scraped from a portal page
fn placeholder(name: &str, source: &str) -> Scheme {
    Scheme {
        name: name.trim().to_string(),
        category: "scholarship".to_string(),
        amount: "Varies".to_string(),
        deadline: "Check portal".to_string(),
        eligibility: "Check eligibility on portal".to_string(),
        how_to_apply: "Visit the official portal to apply online".to_string(),
        link: source.to_string(),
        source: source.to_string(),
    }
}

/// Extract scheme titles from reader-proxy plain text
///
/// Every line mentioning a scholarship, scheme, yojana or fellowship with a
/// plausible title length becomes one record. Details are not scraped; the
/// record points back at the portal.
pub fn parse_schemes(text: &str, source: &str) -> Vec<Scheme> {
    // split on '\n' only; a trailing '\r' counts toward the length
    text.split('\n')
        .filter(|line| is_title_line(line))
        .map(|line| placeholder(line, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
Title: National Scholarship Portal

Home | About | Contact
## Post Matric Scholarship for Minorities 2026
   Pradhan Mantri Awas Yojana - Gramin
Scheme
Fellowship
This is a very long line that mentions a scholarship but goes on and on about the portal, its history, its many \
features, the ministries involved, the number of applicants served every year and so much more that it cannot be a title.
Prime Minister's Research Fellowship (PMRF)
";

    #[test]
    fn test_parse_titles() {
        let schemes = parse_schemes(PAGE, "https://scholarships.gov.in");
        let names: Vec<&str> = schemes.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Title: National Scholarship Portal",
                "## Post Matric Scholarship for Minorities 2026",
                "Pradhan Mantri Awas Yojana - Gramin",
                "Prime Minister's Research Fellowship (PMRF)",
            ]
        );
    }

    #[test]
    fn test_placeholder_defaults() {
        let schemes = parse_schemes(
            "Dr. Ambedkar Post Matric Scholarship Scheme",
            "https://www.myscheme.gov.in",
        );
        assert_eq!(schemes.len(), 1);

        let scheme = &schemes[0];
        assert_eq!(scheme.category, "scholarship");
        assert_eq!(scheme.amount, "Varies");
        assert_eq!(scheme.deadline, "Check portal");
        assert_eq!(scheme.eligibility, "Check eligibility on portal");
        assert_eq!(scheme.how_to_apply, "Visit the official portal to apply online");
        assert_eq!(scheme.link, "https://www.myscheme.gov.in");
        assert_eq!(scheme.source, "https://www.myscheme.gov.in");
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        // exactly 20 characters
        assert!(!is_title_line("Scholarship 20 chars"));
        assert!(is_title_line("Scholarship 21 chars!"));

        let at_max = format!("Scheme {}", "x".repeat(MAX_TITLE_CHARS - 7));
        assert_eq!(at_max.chars().count(), MAX_TITLE_CHARS);
        assert!(!is_title_line(&at_max));

        // CRLF pages: the carriage return counts toward the length
        let page = "Scholarship 20 chars\r\nShort scheme\r\n";
        let schemes = parse_schemes(page, "https://scholarships.gov.in");
        assert_eq!(schemes.len(), 1);
        assert_eq!(schemes[0].name, "Scholarship 20 chars");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 25 characters, far more bytes
        let line = "योजना yojana ₹₹₹₹₹₹₹₹₹₹₹₹";
        assert_eq!(line.chars().count(), 25);
        assert!(is_title_line(line));
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_schemes("", "https://scholarships.gov.in").is_empty());
    }
}
