//! Icon resolver
//!
//! Every icon the page can show is a variant of [`Icon`], so a content key
//! that has no artwork cannot be expressed. Artwork is the stroke body of a
//! 24x24 outline glyph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Icon {
    // Content icons
    Zap,
    RefreshCw,
    TrendingUp,
    Battery,
    Cpu,
    ArrowUp,
    // Fixed page icons
    Instagram,
    Mail,
    MapPin,
    Users,
    Loader,
    ChevronDown,
    Menu,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown icon key: {0}")]
pub struct UnknownIcon(pub String);

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Zap,
        Icon::RefreshCw,
        Icon::TrendingUp,
        Icon::Battery,
        Icon::Cpu,
        Icon::ArrowUp,
        Icon::Instagram,
        Icon::Mail,
        Icon::MapPin,
        Icon::Users,
        Icon::Loader,
        Icon::ChevronDown,
        Icon::Menu,
    ];

    /// Key used for this icon in content documents
    pub fn key(&self) -> &'static str {
        match self {
            Icon::Zap => "Zap",
            Icon::RefreshCw => "RefreshCw",
            Icon::TrendingUp => "TrendingUp",
            Icon::Battery => "Battery",
            Icon::Cpu => "Cpu",
            Icon::ArrowUp => "ArrowUp",
            Icon::Instagram => "Instagram",
            Icon::Mail => "Mail",
            Icon::MapPin => "MapPin",
            Icon::Users => "Users",
            Icon::Loader => "Loader",
            Icon::ChevronDown => "ChevronDown",
            Icon::Menu => "Menu",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.key() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Renderable artwork for an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub icon: Icon,
    /// SVG child elements drawn on a 24x24 canvas
    pub body: &'static str,
}

impl Glyph {
    /// Complete inline `<svg>` element
    pub fn to_svg(&self, class: &str) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="0 0 24 24" "#,
                r#"fill="none" stroke="currentColor" stroke-width="2" "#,
                r#"stroke-linecap="round" stroke-linejoin="round" data-icon="{}">{}</svg>"#
            ),
            class, self.icon, self.body
        )
    }
}

/// Resolve an icon to its artwork
pub fn resolve(icon: Icon) -> Glyph {
    let body = match icon {
        Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        Icon::RefreshCw => concat!(
            r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/>"#,
            r#"<path d="M21 3v5h-5"/>"#,
            r#"<path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/>"#,
            r#"<path d="M8 16H3v5"/>"#
        ),
        Icon::TrendingUp => concat!(
            r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/>"#,
            r#"<polyline points="16 7 22 7 22 13"/>"#
        ),
        Icon::Battery => concat!(
            r#"<rect width="16" height="10" x="2" y="7" rx="2" ry="2"/>"#,
            r#"<line x1="22" x2="22" y1="11" y2="13"/>"#
        ),
        Icon::Cpu => concat!(
            r#"<rect width="16" height="16" x="4" y="4" rx="2"/>"#,
            r#"<rect width="6" height="6" x="9" y="9" rx="1"/>"#,
            r#"<path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/>"#,
            r#"<path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#
        ),
        Icon::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
        Icon::Instagram => concat!(
            r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
            r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
            r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
        ),
        Icon::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        ),
        Icon::MapPin => concat!(
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
            r#"<circle cx="12" cy="10" r="3"/>"#
        ),
        Icon::Users => concat!(
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="9" cy="7" r="4"/>"#,
            r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
        ),
        Icon::Loader => r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
        Icon::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
        Icon::Menu => concat!(
            r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
            r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
            r#"<line x1="4" x2="20" y1="18" y2="18"/>"#
        ),
    };

    Glyph { icon, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_artwork() {
        for icon in Icon::ALL {
            let glyph = resolve(icon);
            assert_eq!(glyph.icon, icon);
            assert!(!glyph.body.is_empty(), "{icon} has no artwork");
        }
    }

    #[test]
    fn test_key_parsing() {
        for icon in Icon::ALL {
            assert_eq!(icon.key().parse::<Icon>(), Ok(icon));
        }
        assert_eq!(
            "Sparkles".parse::<Icon>(),
            Err(UnknownIcon("Sparkles".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_keys() {
        for icon in Icon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.key()));
        }
        assert!(serde_json::from_str::<Icon>("\"Sparkles\"").is_err());
    }

    #[test]
    fn test_svg_markup() {
        let svg = resolve(Icon::Zap).to_svg("w-5 h-5");
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"class="w-5 h-5""#));
        assert!(svg.contains(r#"data-icon="Zap""#));
        assert!(svg.ends_with("</svg>"));
    }
}
