use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section in the rendered page.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a mounted section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: Section,
    pub top_offset: f64,
    pub height: f64,
}

impl Region {
    pub fn new(id: Section, top_offset: f64, height: f64) -> Self {
        Self {
            id,
            top_offset,
            height,
        }
    }

    pub fn end(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Half-open: the top edge is inside, the bottom edge is not.
    pub fn contains(&self, y: f64) -> bool {
        self.top_offset <= y && y < self.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
}

impl ScrollState {
    pub fn new(scroll_y: f64) -> Self {
        Self { scroll_y }
    }
}
