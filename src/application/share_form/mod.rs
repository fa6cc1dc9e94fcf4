//! Headless share-content form.
//!
//! [`ShareForm`] owns the draft, the single flash message slot, the tag
//! catalog and the submission state. Input events mutate the draft; a submit
//! runs through [`ShareForm::begin_submit`] (local checks, state moves to
//! `InFlight`) and [`ShareForm::finish_submit`] (outcome, flash, redirect).
//! [`ShareForm::submit`] strings the two together around the API call.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};
use vidz_api_types::CreatePostRequest;

use crate::application::error::ShareError;
use crate::application::ports::{ApiError, Navigator, PostsApi, TagsApi};
use crate::application::tag_catalog::TagCatalog;
use crate::domain::draft::DraftPost;
use crate::domain::routes::Route;
use crate::domain::session::{SessionIdentity, parse_user_id};

/// Pause between a successful submit and the move to the listing.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(1);

pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to create a post.";
pub const SUCCESS_MESSAGE: &str = "Post created successfully!";
pub const FAILURE_MESSAGE: &str = "There was an error creating your post. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Result of running the session guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    RedirectedToLogin,
    /// The user id did not change since the last check.
    Unchanged,
}

/// A request that passed local checks and is ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub token: String,
    pub request: CreatePostRequest,
}

pub struct ShareForm {
    draft: DraftPost,
    flash: Option<Flash>,
    state: SubmissionState,
    catalog: TagCatalog,
    observed_user: Option<Option<String>>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    pending_redirect: Option<JoinHandle<()>>,
}

impl ShareForm {
    pub fn new(navigator: Arc<dyn Navigator>, redirect_delay: Duration) -> Self {
        Self {
            draft: DraftPost::default(),
            flash: None,
            state: SubmissionState::Idle,
            catalog: TagCatalog::Loading,
            observed_user: None,
            navigator,
            redirect_delay,
            pending_redirect: None,
        }
    }

    pub fn draft(&self) -> &DraftPost {
        &self.draft
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Catalog banner, shown independently of the flash message.
    pub fn banner(&self) -> Option<&'static str> {
        self.catalog.banner()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.set_title(value);
    }

    pub fn set_video_url(&mut self, value: impl Into<String>) {
        self.draft.set_video_url(value);
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.set_description(value);
    }

    pub fn set_instructor_name(&mut self, value: impl Into<String>) {
        self.draft.set_instructor_name(value);
    }

    /// Selector callback: `ids` is the complete current selection.
    pub fn select_tags(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.draft.replace_tags(ids);
    }

    pub fn description_helper_text(&self) -> String {
        self.draft.description_helper_text()
    }

    /// Run the session guard for the first time.
    pub fn mount(&mut self, session: &SessionIdentity) -> GuardOutcome {
        self.observed_user = None;
        self.session_changed(session)
    }

    /// Re-run the session guard if the user id differs from the one last
    /// seen. Token changes alone do not trigger a check.
    pub fn session_changed(&mut self, session: &SessionIdentity) -> GuardOutcome {
        let current = session.user_id().map(str::to_owned);
        if self.observed_user.as_ref() == Some(&current) {
            return GuardOutcome::Unchanged;
        }
        self.observed_user = Some(current);

        if session.user_id().is_some() {
            GuardOutcome::Allowed
        } else {
            debug!(route = %Route::Login, "no session user, leaving share form");
            self.navigator.navigate(Route::Login);
            GuardOutcome::RedirectedToLogin
        }
    }

    pub async fn load_catalog(&mut self, api: &dyn TagsApi) {
        self.catalog = TagCatalog::fetch(api).await;
    }

    /// Validate the draft against `session` and mark the form in flight.
    ///
    /// A refusal caused by the form's own state leaves the flash untouched;
    /// every other refusal replaces it with an error.
    pub fn begin_submit(
        &mut self,
        session: &SessionIdentity,
    ) -> Result<PendingSubmission, ShareError> {
        match self.state {
            SubmissionState::InFlight => return Err(ShareError::InFlight),
            SubmissionState::Succeeded => return Err(ShareError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed => {}
        }

        let Some(credentials) = session.credentials() else {
            self.flash = Some(Flash::error(LOGIN_REQUIRED_MESSAGE));
            return Err(ShareError::NotLoggedIn);
        };

        if let Err(err) = self.draft.check_required() {
            self.flash = Some(Flash::error(format!("{err}.")));
            return Err(ShareError::MissingField(err));
        }

        let user_id = match parse_user_id(credentials.user_id) {
            Ok(user_id) => user_id,
            Err(err) => {
                warn!(error = %err, "session user id is not numeric");
                self.flash = Some(Flash::error(FAILURE_MESSAGE));
                return Err(ShareError::InvalidUserId(err));
            }
        };

        self.state = SubmissionState::InFlight;
        Ok(PendingSubmission {
            token: credentials.token.to_owned(),
            request: self.draft.to_request(user_id),
        })
    }

    /// Record how the in-flight request settled.
    ///
    /// On success the redirect to [`Route::WatchVidz`] is scheduled on the
    /// current Tokio runtime; the task outlives the form if it is dropped.
    /// Without a runtime the form navigates immediately.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) -> SubmissionState {
        if self.state != SubmissionState::InFlight {
            debug!(state = ?self.state, "ignoring outcome with no submission in flight");
            return self.state;
        }

        match outcome {
            Ok(()) => {
                info!("post created");
                self.flash = Some(Flash::success(SUCCESS_MESSAGE));
                self.state = SubmissionState::Succeeded;
                self.schedule_redirect();
            }
            Err(err) => {
                error!(error = %err, "error creating post");
                self.flash = Some(Flash::error(FAILURE_MESSAGE));
                self.state = SubmissionState::Failed;
            }
        }
        self.state
    }

    #[instrument(name = "share_form.submit", skip_all)]
    pub async fn submit(
        &mut self,
        session: &SessionIdentity,
        api: &dyn PostsApi,
    ) -> Result<SubmissionState, ShareError> {
        let pending = self.begin_submit(session)?;
        debug!(
            user_id = pending.request.user_id,
            tags = pending.request.tags.len(),
            "sending post"
        );
        let outcome = api.create_post(&pending.token, &pending.request).await;
        Ok(self.finish_submit(outcome))
    }

    /// Wait for a scheduled redirect to run. Returns `false` when none was
    /// scheduled.
    pub async fn wait_for_redirect(&mut self) -> bool {
        let Some(handle) = self.pending_redirect.take() else {
            return false;
        };
        match handle.await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "redirect task did not complete");
                false
            }
        }
    }

    fn schedule_redirect(&mut self) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime for the delayed redirect, navigating now");
            self.navigator.navigate(Route::WatchVidz);
            return;
        };

        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        self.pending_redirect = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(Route::WatchVidz);
        }));
    }
}
