//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a clipvault.toml, and if present we load
//! settings from there. This provides the storage folder, date/time formats,
//! the default target heading, and entry formatting switches.

use facet::Facet;
use std::fs;

use crate::entry::{FormatOptions, HighlightStyle};
use crate::merge::InsertPolicy;

#[derive(Facet, Clone)]
/// User preferences loaded from clipvault.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Clippings".to_string())]
    /// Folder holding the per-site clip storage files.
    pub storage_folder: String,
    #[facet(default = "%Y-%m-%d".to_string())]
    /// strftime format for `##` date group headings.
    pub date_format: String,
    #[facet(default = "%H:%M".to_string())]
    /// strftime format for `###` time group headings.
    pub time_format: String,
    #[facet(default = String::new())]
    /// Default target heading for topic notes; empty means no heading.
    pub heading: String,
    #[facet(default = 2)]
    /// Level of the target heading.
    pub heading_level: usize,
    #[facet(default = "append".to_string())]
    /// Where entries land relative to existing section content.
    pub position: String,
    #[facet(default = true)]
    /// Render the description block when present.
    pub include_description: bool,
    #[facet(default = true)]
    /// Render the comments block when present.
    pub include_comments: bool,
    #[facet(default = "callout".to_string())]
    /// Highlight wrap style: "callout" or "quote".
    pub highlight_style: String,
}

impl Config {
    #[must_use]
    /// Load configuration from clipvault.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("clipvault.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// The configured insert policy.
    pub fn policy(&self) -> InsertPolicy {
        InsertPolicy::from_name(&self.position)
    }

    #[must_use]
    /// The configured entry formatting switches.
    pub fn format_options(&self) -> FormatOptions {
        let highlight_style = if self.highlight_style.eq_ignore_ascii_case("quote") {
            HighlightStyle::Quote
        } else {
            HighlightStyle::Callout
        };
        FormatOptions {
            include_description: self.include_description,
            include_comments: self.include_comments,
            highlight_style,
        }
    }
}
