//! Command handlers.
//!
//! Each handler calls into the core, formats the result with the core's
//! display types and hands the markdown to the [`TerminalRenderer`].

use anyhow::{Context, Result};
use log::{debug, info};
use travellog_core::{
    display::StepIndicator,
    params::{CreatePlan, Id},
    AutosaveConfig, AutosaveDebouncer, CreateResult, DeleteResult, DraftId, Drafts,
    LogComposer, LogSession, LogSummaries, Logbook, LogbookError, OperationStatus, Plans,
    TravelLog, UpdateResult, Writer,
};

use crate::{
    args::{
        CommentArgs, DraftCommands, EditLogArgs, FollowArgs, IdArgs, LogCommands, NewLogArgs,
        PlanCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    logbook: Logbook,
    renderer: TerminalRenderer,
    identity: Writer,
}

impl Cli {
    pub fn new(logbook: Logbook, renderer: TerminalRenderer, identity: Writer) -> Self {
        Self {
            logbook,
            renderer,
            identity,
        }
    }

    fn session(&self) -> LogSession {
        LogSession::new(self.logbook.clone(), self.identity.clone())
    }

    fn debouncer(&self, window_ms: u64) -> AutosaveDebouncer<Logbook> {
        AutosaveDebouncer::new(self.logbook.clone(), AutosaveConfig::with_window_ms(window_ms))
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .logbook
                    .create_plan(&CreatePlan::from(args))
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string());
            }
            PlanCommands::List => {
                let plans = self.logbook.list_plans().await?;
                self.renderer.render(&Plans(plans).to_string());
            }
        }
        Ok(())
    }

    pub async fn handle_log_command(&self, command: LogCommands) -> Result<()> {
        match command {
            LogCommands::New(args) => self.new_log(args).await,
            LogCommands::Edit(args) => self.edit_log(args).await,
            LogCommands::List => self.list_logs().await,
            LogCommands::Show(args) => self.show_log(args).await,
            LogCommands::Delete(args) => {
                let log = self.session().delete_log(args.id).await?;
                self.renderer.render(&DeleteResult::new(log).to_string());
                Ok(())
            }
        }
    }

    pub async fn list_logs(&self) -> Result<()> {
        let mut session = self.session();
        let logs = session.refresh_logs().await?.to_vec();
        self.renderer.render(&LogSummaries(logs).to_string());
        Ok(())
    }

    async fn show_log(&self, args: IdArgs) -> Result<()> {
        let mut session = self.session();
        let log = session.open_log(args.id).await?;
        self.renderer.render(&log.to_string());
        Ok(())
    }

    async fn new_log(&self, args: NewLogArgs) -> Result<()> {
        let mut composer = LogComposer::new(
            self.identity.clone(),
            self.debouncer(args.autosave_ms),
            args.plan_id,
        )?;
        if args.resume && composer.resume_draft().await? {
            self.renderer
                .note(&format!("Resumed draft {}", composer.draft_id()));
        }

        // Settings
        self.show_step(&composer);
        if let Some(plan_id) = args.plan_id {
            composer.select_plan(plan_id);
        }
        for image in &args.images {
            composer
                .add_image(image)
                .with_context(|| format!("Rejected image {}", image.name))?;
        }

        // Writing
        composer.next();
        self.show_step(&composer);
        if let Some(title) = &args.title {
            composer.set_title(title)?;
        }
        if let Some(content) = &args.content {
            composer.set_content(content);
        }

        // Preview
        composer.next();
        self.show_step(&composer);
        composer.set_visibility(args.visibility.into());

        let log = self.submit(&mut composer).await?;
        self.renderer.render(&CreateResult::new(log).to_string());
        Ok(())
    }

    async fn edit_log(&self, args: EditLogArgs) -> Result<()> {
        let log = self
            .logbook
            .fetch_visible_log(&Id { id: args.id }, &self.identity.email)
            .await?;
        let mut composer = LogComposer::edit(
            self.identity.clone(),
            self.debouncer(args.autosave_ms),
            &log,
        )?;
        if args.resume && composer.resume_draft().await? {
            self.renderer
                .note(&format!("Resumed draft {}", composer.draft_id()));
        }

        self.show_step(&composer);
        if let Some(plan_id) = args.plan_id {
            composer.select_plan(plan_id);
        }

        composer.next();
        self.show_step(&composer);
        if let Some(title) = &args.title {
            composer.set_title(title)?;
        }
        if let Some(content) = &args.content {
            composer.set_content(content);
        }

        composer.next();
        self.show_step(&composer);
        if let Some(visibility) = args.visibility {
            composer.set_visibility(visibility.into());
        }

        let changes = args.changes();
        let updated = self.submit(&mut composer).await?;
        self.renderer
            .render(&UpdateResult::with_changes(updated, changes).to_string());
        Ok(())
    }

    fn show_step(&self, composer: &LogComposer) {
        debug!(
            "{} - {}",
            StepIndicator(composer.wizard()),
            composer.current_step().description()
        );
    }

    /// Submits the composer. On failure any written title or content is kept
    /// as a draft so the command can be rerun with `--resume`.
    async fn submit(&self, composer: &mut LogComposer) -> Result<TravelLog> {
        let err = match composer.submit().await {
            Ok(log) => return Ok(log),
            Err(err) => err,
        };

        let form = composer.form();
        if form.title.is_empty() && form.content.is_empty() {
            composer.discard();
        } else {
            match composer.save_draft().await {
                Ok(()) => self.renderer.note(&format!(
                    "Kept your edits as draft {}, rerun with --resume",
                    composer.draft_id()
                )),
                Err(save_err) => log::warn!("Could not keep draft: {save_err}"),
            }
        }
        Err(err.into())
    }

    pub async fn toggle_like(&self, args: IdArgs) -> Result<()> {
        let status = self.session().toggle_like(args.id).await?;
        let message = if status.liked {
            format!("Liked log {} ({} likes)", status.log_id, status.count)
        } else {
            format!("Removed like from log {} ({} likes)", status.log_id, status.count)
        };
        self.renderer
            .render(&OperationStatus::success(message).to_string());
        Ok(())
    }

    pub async fn list_liked(&self) -> Result<()> {
        let mut session = self.session();
        let logs = session.refresh_liked().await?.to_vec();
        self.renderer.render(&LogSummaries(logs).to_string());
        Ok(())
    }

    pub async fn add_comment(&self, args: CommentArgs) -> Result<()> {
        let comment = self
            .session()
            .add_comment(args.log_id, &args.content)
            .await?;
        self.renderer.render(&CreateResult::new(comment).to_string());
        Ok(())
    }

    pub async fn follow(&self, args: FollowArgs) -> Result<()> {
        let followee = args.email.clone();
        let added = self
            .logbook
            .follow(&self.identity.email, &args.into())
            .await?;
        let message = if added {
            format!("Now following {followee}")
        } else {
            format!("Already following {followee}")
        };
        info!("{message}");
        self.renderer
            .render(&OperationStatus::success(message).to_string());
        Ok(())
    }

    pub async fn list_friend_logs(&self) -> Result<()> {
        let mut session = self.session();
        let logs = session.refresh_friend_logs().await?.to_vec();
        self.renderer.render(&LogSummaries(logs).to_string());
        Ok(())
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::List => {
                let drafts = self.logbook.list_drafts().await?;
                self.renderer.render(&Drafts(drafts).to_string());
            }
            DraftCommands::Show(args) => {
                let id = DraftId::from(args);
                let draft = self
                    .logbook
                    .get_draft(&id)
                    .await?
                    .ok_or(LogbookError::DraftNotFound { id: id.to_string() })?;
                self.renderer.render(&draft.to_string());
            }
            DraftCommands::Delete(args) => {
                let id = DraftId::from(args);
                self.logbook.delete_draft(&id).await?;
                self.renderer.render(&DeleteResult::new(id).to_string());
            }
        }
        Ok(())
    }
}
