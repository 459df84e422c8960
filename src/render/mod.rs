//! SVG badge rendering
//!
//! Each [`BadgeVariant`] has its own template, palette and handle length,
//! but all of them consume the same [`BadgeView`] derived from a profile.

mod classic;
mod emblem;
mod icon;
mod mini;
pub mod palette;
mod pastel;

use quick_xml::escape::escape;

use crate::domain::profile::{format_thousands, truncate_handle};
use crate::domain::{BarWidth, Division, Profile};

/// Title shown when the profile could not be fetched.
pub const UNKNOWN_TITLE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    /// Division icon with an animated gradient.
    Alternate,
    Mini,
    Pastel,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 4] = [
        BadgeVariant::Default,
        BadgeVariant::Alternate,
        BadgeVariant::Mini,
        BadgeVariant::Pastel,
    ];

    pub const fn route(self) -> &'static str {
        match self {
            BadgeVariant::Default => "/generate_badge",
            BadgeVariant::Alternate => "/generate_badge/v2",
            BadgeVariant::Mini => "/generate_badge/mini",
            BadgeVariant::Pastel => "/generate_badge/pastel",
        }
    }

    /// Longest handle shown before truncation.
    pub const fn max_handle_len(self) -> usize {
        match self {
            BadgeVariant::Alternate => 15,
            _ => 11,
        }
    }

    pub const fn cache_control(self) -> &'static str {
        match self {
            BadgeVariant::Mini => "max-age=86400",
            _ => "max-age=3600",
        }
    }
}

/// Display-ready values substituted into a badge template.
///
/// Text fields are already XML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// `None` when the profile is unresolved.
    pub division: Option<Division>,
    pub tier_title: &'static str,
    pub tier_rank: String,
    pub handle: String,
    pub rating: String,
    pub needed_rating: String,
    pub solved: String,
    pub class_text: String,
    pub percentage: u8,
    pub bar_width: BarWidth,
}

impl BadgeView {
    pub fn new(variant: BadgeVariant, profile: &Profile) -> Self {
        match profile {
            Profile::Resolved(p) => {
                let division = p.tier.division();
                let handle = truncate_handle(&p.handle, variant.max_handle_len());
                Self {
                    division: Some(division),
                    tier_title: division.as_str(),
                    tier_rank: p.tier.sub_rank().map(|r| r.to_string()).unwrap_or_default(),
                    handle: escape(&*handle).into_owned(),
                    rating: format_thousands(u64::from(p.rating.value())),
                    needed_rating: format_thousands(u64::from(p.progress.next_threshold)),
                    solved: format_thousands(p.solved_count),
                    class_text: p.class_text(),
                    percentage: p.progress.percentage,
                    bar_width: p.progress.bar_width,
                }
            }
            Profile::Unresolved => Self {
                division: None,
                tier_title: UNKNOWN_TITLE,
                tier_rank: String::new(),
                handle: UNKNOWN_TITLE.to_string(),
                rating: "0".into(),
                needed_rating: "0".into(),
                solved: "0".into(),
                class_text: "0".into(),
                percentage: 0,
                bar_width: BarWidth::EMPTY,
            },
        }
    }
}

/// Renders profiles into self-contained SVG markup.
#[derive(Debug, Clone, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, variant: BadgeVariant, profile: &Profile) -> String {
        let view = BadgeView::new(variant, profile);
        self.render_view(variant, &view)
    }

    pub fn render_view(&self, variant: BadgeVariant, view: &BadgeView) -> String {
        match variant {
            BadgeVariant::Default => classic::render(view),
            BadgeVariant::Alternate => icon::render(view),
            BadgeVariant::Mini => mini::render(view),
            BadgeVariant::Pastel => pastel::render(view),
        }
    }
}
