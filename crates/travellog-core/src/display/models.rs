//! Display implementations for the domain models.
//!
//! Kept apart from the model definitions so the data types stay free of
//! presentation concerns. Each impl writes markdown: a heading, a metadata
//! list, then the body.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::{
    models::{Comment, DraftRecord, LogSummary, TravelLog, TravelPlan, Visibility, Writer},
    wizard::{LogStep, Wizard},
};

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

impl fmt::Display for TravelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}** ({}): {}",
            self.writer.username,
            LocalDate(&self.date),
            self.content
        )
    }
}

impl fmt::Display for TravelLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Writer: {}", self.writer)?;
        writeln!(f, "- Plan: {}", self.plan_id)?;
        writeln!(f, "- Visibility: {}", self.visibility)?;
        writeln!(f, "- Date: {}", LocalDateTime(&self.date))?;
        if self.updated_at != self.created_at {
            writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        }
        writeln!(f, "- Likes: {}", self.liked)?;

        writeln!(f)?;
        writeln!(f, "{}", self.content)?;

        if !self.images.is_empty() {
            writeln!(f, "\n## Images")?;
            writeln!(f)?;
            for image in &self.images {
                writeln!(f, "- {image}")?;
            }
        }

        writeln!(f, "\n## Comments ({})", self.comment_count())?;
        writeln!(f)?;
        if self.comments.is_empty() {
            writeln!(f, "No comments yet.")?;
        } else {
            for comment in &self.comments {
                write!(f, "- {comment}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for LogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **By**: {} on {}",
            self.writer.username,
            LocalDate(&self.date)
        )?;
        writeln!(f, "- **Visibility**: {}", self.visibility)?;
        writeln!(
            f,
            "- **Likes**: {} | **Comments**: {}",
            self.liked, self.comment_count
        )?;
        if let Some(cover) = &self.cover_image {
            writeln!(f, "- **Cover**: {cover}")?;
        }
        if !self.excerpt.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.excerpt)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Draft {}", self.id)?;
        writeln!(f)?;
        match &self.last_saved_at {
            Some(at) => writeln!(f, "- **Saved**: {}", LocalDateTime(at))?,
            None => writeln!(f, "- **Saved**: never")?,
        }
        for (name, value) in &self.fields {
            writeln!(f, "- **{name}**: {value}")?;
        }
        writeln!(f)
    }
}

/// Renders the wizard progress, e.g. `settings > **writing** > preview (2/3)`.
pub struct StepIndicator<'a>(pub &'a Wizard<LogStep>);

impl fmt::Display for StepIndicator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.0.current_index();
        for (index, step) in self.0.steps().iter().enumerate() {
            if index > 0 {
                f.write_str(" > ")?;
            }
            if index == current {
                write!(f, "**{step}**")?;
            } else {
                write!(f, "{step}")?;
            }
        }
        write!(f, " ({}/{})", current + 1, self.0.len())
    }
}
