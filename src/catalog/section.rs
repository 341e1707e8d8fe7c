//! Section navigation model.

use crate::error::ShowcaseError;
use std::str::FromStr;

/// The mutually exclusive pages selectable from the sidebar.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum Section {
    #[default]
    Widgets,
    Media,
    Charts,
    Layout,
    DataFrames,
    Utilities,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 6] = [
        Section::Widgets,
        Section::Media,
        Section::Charts,
        Section::Layout,
        Section::DataFrames,
        Section::Utilities,
    ];

    /// Label shown in the navigation radio.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Widgets => "Widgets",
            Section::Media => "Media",
            Section::Charts => "Charts",
            Section::Layout => "Layout",
            Section::DataFrames => "DataFrames",
            Section::Utilities => "Utilities",
        }
    }

    /// Heading rendered at the top of the section body.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Widgets => "🔘 Widgets",
            Section::Media => "🎥 Media",
            Section::Charts => "📊 Charts",
            Section::Layout => "📐 Layouts",
            Section::DataFrames => "📋 DataFrames",
            Section::Utilities => "🔧 Utilities",
        }
    }

    /// Position of the section in [`Section::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Section::Widgets => 0,
            Section::Media => 1,
            Section::Charts => 2,
            Section::Layout => 3,
            Section::DataFrames => 4,
            Section::Utilities => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Section {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShowcaseError::UnknownSection(s.to_string()))
    }
}
