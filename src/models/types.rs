//! Common domain type definitions
//!
//! This module contains the closed enum types used across catalog records.
//! The source content stores these as literal strings; here they are proper
//! sum types so an invalid literal cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a downloadable document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Management reports and financial statements
    Financial,
    /// Transparency bulletins
    Transparency,
    /// Epidemiological bulletins
    Epidemiological,
    /// Data protection and privacy notices
    Privacy,
}

impl DocumentType {
    /// The four document categories in their canonical display order
    pub const ALL: [Self; 4] = [
        Self::Financial,
        Self::Transparency,
        Self::Epidemiological,
        Self::Privacy,
    ];

    /// The literal tag used by the source content for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Transparency => "transparency",
            Self::Epidemiological => "epidemiological",
            Self::Privacy => "privacy",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of link a service channel points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Telephone dial link
    Tel,
    /// WhatsApp chat link
    Whatsapp,
    /// External website link
    External,
    /// Channel has no link at all
    None,
}

impl From<&str> for LinkType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "tel" => Self::Tel,
            "whatsapp" => Self::Whatsapp,
            "external" => Self::External,
            _ => Self::None,
        }
    }
}

/// Browsing context a channel link opens in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Open in the same tab (`_self`)
    #[serde(rename = "_self")]
    SameTab,
    /// Open in a new tab (`_blank`)
    #[serde(rename = "_blank")]
    NewTab,
}

/// Rendering style for a policy's content item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Checkmark bullets (the default presentation)
    #[default]
    Checkmarks,
    /// Traditional numbered/plain list
    Traditional,
}
