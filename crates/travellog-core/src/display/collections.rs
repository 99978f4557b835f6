//! Newtype wrappers for displaying lists with empty handling.

use std::{fmt, ops::Index};

use crate::models::{DraftRecord, LogSummary, TravelPlan};

macro_rules! display_collection {
    ($name:ident, $item:ty, $empty:literal) => {
        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

/// Log cards, as shown on the list, liked and friends screens.
///
/// ```rust
/// use travellog_core::display::LogSummaries;
///
/// assert_eq!(LogSummaries(vec![]).to_string(), "No logs found.\n");
/// ```
pub struct LogSummaries(pub Vec<LogSummary>);

/// Travel plans available for attaching logs.
pub struct Plans(pub Vec<TravelPlan>);

/// Stored autosave drafts.
pub struct Drafts(pub Vec<DraftRecord>);

display_collection!(LogSummaries, LogSummary, "No logs found.");
display_collection!(Plans, TravelPlan, "No plans found.");
display_collection!(Drafts, DraftRecord, "No drafts found.");

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{DraftId, Visibility, Writer};

    fn create_test_summary(id: u64, title: &str) -> LogSummary {
        LogSummary {
            id,
            title: title.to_string(),
            writer: Writer::new("ana@example.com", "ana"),
            date: Timestamp::from_second(1640995200).unwrap(),
            visibility: Visibility::Public,
            liked: 3,
            comment_count: 1,
            excerpt: "Ferry to Udo".to_string(),
            cover_image: None,
        }
    }

    #[test]
    fn test_log_summaries_display() {
        let summaries = LogSummaries(vec![
            create_test_summary(1, "Day one"),
            create_test_summary(2, "Day two"),
        ]);
        let output = summaries.to_string();

        assert!(output.contains("## Day one (ID: 1)"));
        assert!(output.contains("## Day two (ID: 2)"));
        assert!(!output.starts_with("# "));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].title, "Day two");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(LogSummaries(vec![]).to_string(), "No logs found.\n");
        assert_eq!(Plans(vec![]).to_string(), "No plans found.\n");
        assert_eq!(Drafts(vec![]).to_string(), "No drafts found.\n");
    }

    #[test]
    fn test_drafts_display() {
        let mut draft = DraftRecord::new(DraftId::for_log(4));
        draft
            .fields
            .insert("title".to_string(), "Half written".to_string());
        let output = Drafts(vec![draft]).to_string();

        assert!(output.contains("log-4"));
        assert!(output.contains("Half written"));
    }
}
