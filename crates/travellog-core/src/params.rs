//! Parameter structures for travel log operations.
//!
//! These structures are shared between interfaces without framework-specific
//! derives. The CLI defines clap wrappers that convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Logbook      │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Operations that act on behalf of a user take the acting
//! [`Writer`](crate::models::Writer) as a separate argument rather than as a
//! parameter field.

use serde::{Deserialize, Serialize};

use crate::models::{LogForm, Visibility};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_log, delete_log, toggle_like, get_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a travel plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the trip
    pub title: String,
}

/// Parameters for publishing a new travel log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLog {
    /// Plan the log belongs to
    pub plan_id: u64,
    /// Title of the log
    pub title: String,
    /// Body markup
    pub content: String,
    /// Who can read the log
    #[serde(default)]
    pub visibility: Visibility,
    /// Image names in upload order
    #[serde(default)]
    pub images: Vec<String>,
}

/// Parameters for editing a published log. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLog {
    /// ID of the log to update
    pub id: u64,
    pub plan_id: Option<u64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub visibility: Option<Visibility>,
    /// Replaces the full image list when present
    pub images: Option<Vec<String>>,
}

impl UpdateLog {
    /// Whether any field would change.
    pub fn has_changes(&self) -> bool {
        self.plan_id.is_some()
            || self.title.is_some()
            || self.content.is_some()
            || self.visibility.is_some()
            || self.images.is_some()
    }
}

/// Parameters for commenting on a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddComment {
    /// ID of the log to comment on
    pub log_id: u64,
    /// Plain text body
    pub content: String,
}

/// Parameters for following another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    /// Email of the user to follow
    pub email: String,
}

/// A completed form turns into create parameters once a plan is selected.
impl TryFrom<&LogForm> for CreateLog {
    type Error = crate::error::LogbookError;

    fn try_from(form: &LogForm) -> Result<Self, Self::Error> {
        form.validate_for_submit()?;
        let plan_id = form.plan_id.ok_or_else(|| {
            crate::error::LogbookError::invalid_input("plan_id").with_reason("No plan selected")
        })?;
        Ok(Self {
            plan_id,
            title: form.title.clone(),
            content: form.content.clone(),
            visibility: form.visibility,
            images: form.images.clone(),
        })
    }
}

impl UpdateLog {
    /// Full replacement of an existing log's editable fields from a form.
    pub fn from_form(id: u64, form: &LogForm) -> crate::error::Result<Self> {
        form.validate_for_submit()?;
        Ok(Self {
            id,
            plan_id: form.plan_id,
            title: Some(form.title.clone()),
            content: Some(form.content.clone()),
            visibility: Some(form.visibility),
            images: Some(form.images.clone()),
        })
    }
}
