//! Authoring controller behind the add and edit screens.
//!
//! A [`LogComposer`] walks the three [`LogStep`]s, merging what each step
//! collects into one [`LogForm`]. Title and content edits are handed to the
//! autosave debouncer under the composer's [`DraftId`]; the handle of the
//! latest scheduled save is kept so teardown can cancel it. Drafts are read
//! and written through the debouncer's [`Logbook`], so resumed drafts are the
//! ones autosave stored. Nothing is
//! validated until [`LogComposer::submit`], which is only accepted on the
//! last step.
//!
//! ```rust,no_run
//! use travellog_core::{
//!     autosave::{AutosaveConfig, AutosaveDebouncer},
//!     composer::LogComposer,
//!     LogbookBuilder, Visibility, Writer,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logbook = LogbookBuilder::new().build().await?;
//! let autosave = AutosaveDebouncer::new(logbook, AutosaveConfig::default());
//! let writer = Writer::new("ana@example.com", "ana");
//!
//! let mut composer = LogComposer::new(writer, autosave, Some(1))?;
//! composer.next();
//! composer.set_title("Day one")?;
//! composer.set_content("<p>Ferry to Udo</p>");
//! composer.next();
//! composer.set_visibility(Visibility::Public);
//! let log = composer.submit().await?;
//! println!("{log}");
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;

use crate::{
    autosave::{AutosaveDebouncer, PendingSave},
    error::{LogbookError, Result},
    logbook::Logbook,
    models::{draft::fields, DraftId, ImageUpload, LogForm, TravelLog, Visibility, Writer},
    params::{CreateLog, UpdateLog},
    wizard::{LogStep, StepAction, Wizard},
};


/// Wizard state, form data and autosave wiring of one authoring session.
pub struct LogComposer {
    writer: Writer,
    wizard: Wizard<LogStep>,
    form: LogForm,
    editing: Option<u64>,
    draft_id: DraftId,
    autosave: AutosaveDebouncer<Logbook>,
    pending: Option<PendingSave>,
}

impl LogComposer {
    /// Starts composing a new log, optionally with the plan preselected.
    pub fn new(
        writer: Writer,
        autosave: AutosaveDebouncer<Logbook>,
        plan_id: Option<u64>,
    ) -> Result<Self> {
        let form = LogForm {
            plan_id,
            ..LogForm::default()
        };
        Self::build(writer, autosave, form, None, DraftId::for_new_log(plan_id))
    }

    /// Starts editing a published log, seeded with its current fields.
    pub fn edit(
        writer: Writer,
        autosave: AutosaveDebouncer<Logbook>,
        log: &TravelLog,
    ) -> Result<Self> {
        if log.writer.email != writer.email {
            return Err(LogbookError::invalid_input("id")
                .with_reason(format!("Log {} was written by someone else", log.id)));
        }
        Self::build(
            writer,
            autosave,
            LogForm::from_log(log),
            Some(log.id),
            DraftId::for_log(log.id),
        )
    }

    fn build(
        writer: Writer,
        autosave: AutosaveDebouncer<Logbook>,
        form: LogForm,
        editing: Option<u64>,
        draft_id: DraftId,
    ) -> Result<Self> {
        Ok(Self {
            writer,
            wizard: Wizard::initialize(LogStep::sequence())?,
            form,
            editing,
            draft_id,
            autosave,
            pending: None,
        })
    }

    /// The store autosave writes to.
    fn logbook(&self) -> &Logbook {
        self.autosave.sink()
    }

    pub fn form(&self) -> &LogForm {
        &self.form
    }

    pub fn wizard(&self) -> &Wizard<LogStep> {
        &self.wizard
    }

    pub fn draft_id(&self) -> &DraftId {
        &self.draft_id
    }

    /// ID of the log being edited, `None` when composing a new one.
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// Handle of the most recently scheduled autosave.
    pub fn pending_save(&self) -> Option<&PendingSave> {
        self.pending.as_ref()
    }

    pub fn current_step(&self) -> LogStep {
        *self.wizard.current_step()
    }

    /// What the primary button does on the current step.
    pub fn action(&self) -> StepAction {
        self.wizard.action()
    }

    pub fn next(&mut self) -> LogStep {
        self.wizard.next();
        self.current_step()
    }

    pub fn prev(&mut self) -> LogStep {
        self.wizard.prev();
        self.current_step()
    }

    /// Restores title and content from a stored draft for this composer's
    /// draft ID. Returns whether a draft was found.
    pub async fn resume_draft(&mut self) -> Result<bool> {
        match self.logbook().get_draft(&self.draft_id).await? {
            Some(draft) => {
                self.form.apply_draft(&draft);
                log::debug!("Resumed draft {}", self.draft_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sets the plan. A new log that has not autosaved anything yet also
    /// moves to that plan's draft ID, so new logs without a plan never share
    /// one draft.
    pub fn select_plan(&mut self, plan_id: u64) {
        self.form.plan_id = Some(plan_id);
        if self.editing.is_none() && self.pending.is_none() {
            self.draft_id = DraftId::for_new_log(Some(plan_id));
        }
    }

    /// Validates and attaches an image. A rejected image leaves the form
    /// unchanged.
    pub fn add_image(&mut self, image: &ImageUpload) -> Result<()> {
        self.form.add_image(image)
    }

    /// Detaches the first image with the given name.
    pub fn remove_image(&mut self, name: &str) -> bool {
        match self.form.images.iter().position(|image| image == name) {
            Some(index) => {
                self.form.images.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the title and schedules an autosave.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` for titles over 100 characters;
    /// nothing is scheduled in that case.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.form.set_title(title)?;
        self.schedule_autosave(fields::TITLE);
        Ok(())
    }

    /// Replaces the body markup and schedules an autosave.
    pub fn set_content(&mut self, content: &str) {
        self.form.content = content.to_string();
        self.schedule_autosave(fields::CONTENT);
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.form.visibility = visibility;
    }

    fn schedule_autosave(&mut self, field: &str) {
        let handle =
            self.autosave
                .on_field_change(field, self.draft_id.clone(), self.form.draft_fields());
        self.pending = Some(handle);
    }

    /// Saves the pending snapshot now instead of waiting for the window.
    pub async fn flush_draft(&self) -> Result<bool> {
        self.autosave.flush_now(&self.draft_id).await
    }

    /// Writes the current title and content to the draft store directly,
    /// replacing any pending autosave.
    pub async fn save_draft(&mut self) -> Result<()> {
        self.discard();
        self.logbook()
            .save_draft(&self.draft_id, &self.form.draft_fields(), Timestamp::now())
            .await
    }

    /// Publishes the form, or applies it to the log being edited.
    ///
    /// On success the pending autosave is cancelled and the stored draft is
    /// removed. Failing to remove the draft is only logged, since the log is
    /// already published at that point.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` when called before the last step
    /// or when the plan, title or content is missing (checked in that order).
    pub async fn submit(&mut self) -> Result<TravelLog> {
        if !self.wizard.is_last_step() {
            return Err(LogbookError::invalid_input("step").with_reason(format!(
                "Cannot publish from the {} step",
                self.current_step()
            )));
        }

        let log = match self.editing {
            Some(id) => {
                let update = UpdateLog::from_form(id, &self.form)?;
                self.discard();
                self.logbook().update_log(&update).await?
            }
            None => {
                let create = CreateLog::try_from(&self.form)?;
                self.discard();
                self.logbook().create_log(&self.writer, &create).await?
            }
        };

        match self.logbook().discard_draft(&self.draft_id).await {
            Ok(true) => log::debug!("Removed draft {} after publishing", self.draft_id),
            Ok(false) => {}
            Err(e) => log::warn!(
                "Published log {} but could not remove draft {}: {e}",
                log.id,
                self.draft_id
            ),
        }
        Ok(log)
    }

    /// Cancels any pending autosave. Returns whether one was pending.
    pub fn discard(&mut self) -> bool {
        self.pending = None;
        self.autosave.cancel(&self.draft_id)
    }
}
