use std::borrow::Cow;

use serde::Deserialize;

use super::progress::Progress;
use super::tier::{Rating, Tier};

/// Marker appended to handles that exceed a badge's display length.
pub const ELLIPSIS: &str = "...";

/// Badge shown next to the class level: `+` for silver, `++` for gold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassDecoration {
    Silver,
    Gold,
    #[default]
    #[serde(other)]
    None,
}

impl ClassDecoration {
    pub const fn suffix(self) -> &'static str {
        match self {
            ClassDecoration::None => "",
            ClassDecoration::Silver => "+",
            ClassDecoration::Gold => "++",
        }
    }
}

/// Profile statistics returned by the rating API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub rating: Rating,
    pub solved_count: u64,
    pub class_level: u32,
    pub class_decoration: ClassDecoration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub handle: String,
    pub rating: Rating,
    pub tier: Tier,
    pub progress: Progress,
    pub solved_count: u64,
    pub class_level: u32,
    pub class_decoration: ClassDecoration,
}

impl ResolvedProfile {
    pub fn new(handle: impl Into<String>, stats: UserStats) -> Self {
        let tier = Tier::from_rating(stats.rating);
        Self {
            handle: handle.into(),
            rating: stats.rating,
            tier,
            progress: Progress::compute(stats.rating, tier),
            solved_count: stats.solved_count,
            class_level: stats.class_level,
            class_decoration: stats.class_decoration,
        }
    }

    /// Class level with its decoration, e.g. `"7++"`.
    pub fn class_text(&self) -> String {
        format!("{}{}", self.class_level, self.class_decoration.suffix())
    }
}

/// A user's badge data for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Resolved(ResolvedProfile),
    /// The rating API could not be reached or returned unusable data.
    Unresolved,
}

impl Profile {
    pub fn resolved(handle: impl Into<String>, stats: UserStats) -> Self {
        Profile::Resolved(ResolvedProfile::new(handle, stats))
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            Profile::Resolved(p) => Some(p.tier),
            Profile::Unresolved => None,
        }
    }
}

/// Shortens `handle` to `max_len - 2` characters plus [`ELLIPSIS`] when it
/// is longer than `max_len`.
pub fn truncate_handle(handle: &str, max_len: usize) -> Cow<'_, str> {
    if handle.chars().count() <= max_len {
        return Cow::Borrowed(handle);
    }
    let kept: String = handle.chars().take(max_len.saturating_sub(2)).collect();
    Cow::Owned(kept + ELLIPSIS)
}

/// Formats an integer with `,` as the thousands separator.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(rating: u32) -> UserStats {
        UserStats {
            rating: Rating::new(rating),
            solved_count: 1234,
            class_level: 5,
            class_decoration: ClassDecoration::Silver,
        }
    }

    #[test]
    fn test_truncate_handle_over_limit() {
        assert_eq!(truncate_handle("abcdefghijkl", 11), "abcdefghi...");
        assert_eq!(truncate_handle("abcdefghijklmnopq", 15), "abcdefghijklm...");
    }

    #[test]
    fn test_truncate_handle_at_or_under_limit() {
        assert_eq!(truncate_handle("abcdefghijk", 11), "abcdefghijk");
        assert_eq!(truncate_handle("ccoco", 11), "ccoco");
        assert_eq!(truncate_handle("", 11), "");
        assert!(matches!(truncate_handle("ccoco", 11), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_handle_counts_characters() {
        // 12 two-byte characters
        let handle = "가나다라마바사아자차카타";
        assert_eq!(truncate_handle(handle, 11), "가나다라마바사아자...");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12_345), "12,345");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_class_decoration_from_api_strings() {
        let parse = |s: &str| serde_json::from_str::<ClassDecoration>(s).unwrap();
        assert_eq!(parse(r#""none""#), ClassDecoration::None);
        assert_eq!(parse(r#""silver""#), ClassDecoration::Silver);
        assert_eq!(parse(r#""gold""#), ClassDecoration::Gold);
        assert_eq!(parse(r#""platinum""#), ClassDecoration::None);
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Decorated {
        #[serde(default)]
        class_decoration: ClassDecoration,
    }

    #[test]
    fn test_class_decoration_suffix_from_payload() {
        let suffix = |json: &str| {
            serde_json::from_str::<Decorated>(json)
                .unwrap()
                .class_decoration
                .suffix()
        };
        assert_eq!(suffix(r#"{"classDecoration":"gold"}"#), "++");
        assert_eq!(suffix(r#"{"classDecoration":"silver"}"#), "+");
        assert_eq!(suffix(r#"{"classDecoration":"none"}"#), "");
        assert_eq!(suffix("{}"), "");
    }

    #[test]
    fn test_class_text() {
        let mut profile = ResolvedProfile::new("ccoco", stats(1000));
        assert_eq!(profile.class_text(), "5+");
        profile.class_decoration = ClassDecoration::Gold;
        assert_eq!(profile.class_text(), "5++");
        profile.class_decoration = ClassDecoration::None;
        assert_eq!(profile.class_text(), "5");
    }

    #[test]
    fn test_resolved_profile_classifies_rating() {
        let profile = ResolvedProfile::new("ccoco", stats(1400));
        assert_eq!(profile.tier.to_string(), "Gold 1");
        assert_eq!(profile.progress.percentage, 0);
        assert_eq!(profile.progress.next_threshold, 1600);
    }

    #[test]
    fn test_unresolved_has_no_tier() {
        assert_eq!(Profile::Unresolved.tier(), None);
        assert_eq!(Profile::resolved("x", stats(3000)).tier(), Some(Tier::MASTER));
    }
}
