#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use tracing::warn;
use vidz_api_types::TagResponse;
use vidz_share::application::ports::TagsApi;
use vidz_share::application::share_form::{GuardOutcome, ShareForm, SubmissionState};
use vidz_share::application::tag_catalog::TagCatalog;
use vidz_share::config::{FormSettings, ShareArgs};
use vidz_share::domain::routes::Route;
use vidz_share::domain::session::SessionIdentity;
use vidz_share::infra::api::ApiClient;
use vidz_share::infra::navigation::RecordingNavigator;

use crate::error::CliError;
use crate::print::print_json;

pub async fn share(
    api: &ApiClient,
    session: &SessionIdentity,
    settings: &FormSettings,
    args: &ShareArgs,
) -> Result<(), CliError> {
    let navigator = Arc::new(RecordingNavigator::default());
    let mut form = ShareForm::new(navigator.clone(), settings.redirect_delay);

    if form.mount(session) == GuardOutcome::RedirectedToLogin {
        return Err(CliError::Redirected(Route::Login));
    }

    form.load_catalog(api).await;
    if let Some(banner) = form.banner() {
        eprintln!("{banner}");
    }

    form.set_title(args.title.clone().unwrap_or_default());
    form.set_video_url(args.video_url.clone().unwrap_or_default());
    form.set_description(args.description.as_deref().unwrap_or_default());
    form.set_instructor_name(args.instructor_name.clone().unwrap_or_default());
    form.select_tags(args.tags.iter().copied());
    warn_unknown_tags(form.catalog(), &args.tags);

    let outcome = form.submit(session, api).await;
    if let Some(flash) = form.flash() {
        println!("{}", flash.text);
    }

    match outcome? {
        SubmissionState::Succeeded => {
            form.wait_for_redirect().await;
            if let Some(route) = navigator.last() {
                println!("navigated to {route}");
            }
            Ok(())
        }
        SubmissionState::Idle | SubmissionState::InFlight | SubmissionState::Failed => {
            Err(CliError::NotCreated)
        }
    }
}

pub async fn tags(api: &ApiClient) -> Result<(), CliError> {
    let tags: Vec<TagResponse> = api
        .list_tags()
        .await?
        .into_iter()
        .map(|tag| TagResponse {
            id: tag.id,
            name: tag.name,
        })
        .collect();
    print_json(&tags)
}

fn warn_unknown_tags(catalog: &TagCatalog, selected: &[i64]) {
    if !matches!(catalog, TagCatalog::Ready(_)) {
        return;
    }
    for id in selected {
        if catalog.label_for(*id).is_none() {
            warn!(tag_id = id, "selected tag is not in the catalog");
        }
    }
}
