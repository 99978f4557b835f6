//! The authoring steps of a travel log.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One stage of the travel log authoring wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogStep {
    /// Pick the travel plan and upload images
    Settings,

    /// Write the title and body markup
    Writing,

    /// Review, choose visibility and publish
    Preview,
}

impl LogStep {
    /// The full authoring sequence in display order.
    pub fn sequence() -> Vec<LogStep> {
        vec![LogStep::Settings, LogStep::Writing, LogStep::Preview]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogStep::Settings => "settings",
            LogStep::Writing => "writing",
            LogStep::Preview => "preview",
        }
    }

    /// Short description shown next to the step indicator.
    pub fn description(&self) -> &'static str {
        match self {
            LogStep::Settings => "Select a travel plan and attach images",
            LogStep::Writing => "Write the title and content",
            LogStep::Preview => "Review the log and choose who can see it",
        }
    }
}

impl fmt::Display for LogStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "settings" => Ok(LogStep::Settings),
            "writing" => Ok(LogStep::Writing),
            "preview" => Ok(LogStep::Preview),
            _ => Err(format!("Invalid log step: {s}")),
        }
    }
}
