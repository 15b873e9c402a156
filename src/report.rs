use chrono::{DateTime, Utc};

use crate::core::{Profile, ScoredScheme};

/// Schemes listed in an exported report
pub const EXPORT_LIMIT: usize = 8;

/// Scheme names longer than this are cut in the report
const NAME_WIDTH: usize = 60;

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let cut: String = name.chars().take(NAME_WIDTH).collect();
    format!("{}...", cut)
}

/// Render the plain-text results report
pub fn render(profile: &Profile, schemes: &[ScoredScheme], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "SchemeFinder India - Results".to_string(),
        format!("Generated for: {}", profile.name),
        format!(
            "Category: {} | Occupation: {}",
            profile.category.to_uppercase(),
            profile.occupation
        ),
        format!("Generated at: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
    ];

    for (i, scored) in schemes.iter().take(EXPORT_LIMIT).enumerate() {
        let scheme = &scored.scheme;
        lines.push(String::new());
        lines.push(format!("{}. {}", i + 1, truncate_name(&scheme.name)));
        lines.push(format!("   Amount: {} | Match: {}%", scheme.amount, scored.match_score));
        lines.push(format!("   Deadline: {}", scheme.deadline));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scheme;
    use chrono::TimeZone;

    #[test]
    fn test_render_header_and_entries() {
        let profile = Profile::new("farmer", "st", "male", "bpl").with_name("Ravi");
        let mut scheme =
            Scheme::new("PM-KISAN Samman Nidhi Yojana", "subsidy").with_amount("₹6,000/year");
        scheme.deadline = "Open throughout year".to_string();
        let generated_at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();

        let report = render(&profile, &[ScoredScheme::new(scheme, 93)], generated_at);

        assert_eq!(
            report,
            "SchemeFinder India - Results\n\
             Generated for: Ravi\n\
             Category: ST | Occupation: farmer\n\
             Generated at: 2026-10-18 09:30 UTC\n\
             \n\
             1. PM-KISAN Samman Nidhi Yojana\n   \
             Amount: ₹6,000/year | Match: 93%\n   \
             Deadline: Open throughout year\n"
        );
    }

    #[test]
    fn test_limit_and_truncation() {
        let long_name = "National Scholarship Portal - Post Matric Scholarship for SC Students";
        let schemes: Vec<ScoredScheme> = (0..12)
            .map(|i| ScoredScheme::new(Scheme::new(long_name, "scholarship"), 90 - i))
            .collect();

        let report = render(&Profile::default(), &schemes, Utc::now());

        assert_eq!(report.matches("Match:").count(), EXPORT_LIMIT);
        assert!(report
            .contains("1. National Scholarship Portal - Post Matric Scholarship for SC..."));
        assert!(!report.contains("9. "));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short"), "Short");
        assert_eq!(truncate_name(&"x".repeat(60)), "x".repeat(60));
        assert_eq!(truncate_name(&"x".repeat(61)), format!("{}...", "x".repeat(60)));
    }

    #[test]
    fn test_render_without_schemes() {
        let profile = Profile::new("student", "obc", "female", "").with_name("Asha");
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 5, 18, 4, 0).unwrap();

        let report = render(&profile, &[], generated_at);

        assert_eq!(
            report,
            "SchemeFinder India - Results\n\
             Generated for: Asha\n\
             Category: OBC | Occupation: student\n\
             Generated at: 2026-01-05 18:04 UTC\n"
        );
    }
}
