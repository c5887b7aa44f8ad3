//! Application module: roster fetching, mutation dispatch and the page's
//! event handlers.
//!
//! The model is only ever replaced by a successful fetch. Mutations report
//! their outcome through the notifier and, when accepted, trigger a full
//! re-fetch; they never edit the model themselves.

use tokio::sync::RwLock;

use crate::api::{Mutation, RosterApi};
use crate::errors::Result;
use crate::models::{Notice, NoticeKind, Roster};
use crate::notifier::Notifier;
use crate::page::Page;
use crate::render::{render, RemovalTarget};

#[derive(Debug, Default)]
struct ViewState {
    roster: Roster,
    page: Page,
}

/// Client core for one page session.
pub struct RosterApp<A> {
    api: A,
    state: RwLock<ViewState>,
    notifier: Notifier,
}

impl<A: RosterApi> RosterApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(ViewState::default()),
            notifier: Notifier::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full roster and re-render it.
    ///
    /// On any failure the cards and options are cleared and the failure
    /// placeholder is shown. Never returns an error; the next trigger retries.
    pub async fn refresh(&self) {
        match self.api.fetch_activities().await {
            Ok(roster) => {
                let rendered = render(&roster);
                let mut state = self.state.write().await;
                state.page.show_roster(rendered);
                state.roster = roster;
                tracing::info!("Roster refreshed with {} activities", state.roster.len());
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                let mut state = self.state.write().await;
                state.roster = Roster::default();
                state.page.show_load_failure();
            }
        }
    }

    /// Enroll `email` in `activity`.
    ///
    /// `Ok` carries the success text shown to the user; `Err` the failure,
    /// which has already been shown and logged.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        self.dispatch(Mutation::Signup, activity, email).await
    }

    /// Remove `email` from `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        self.dispatch(Mutation::Unregister, activity, email).await
    }

    async fn dispatch(&self, mutation: Mutation, activity: &str, email: &str) -> Result<String> {
        match self.api.mutate(mutation, activity, email).await {
            Ok(ack) => {
                let text = ack
                    .message
                    .unwrap_or_else(|| mutation.success_fallback().to_string());
                tracing::info!("{} accepted for {} in {}", mutation.path_segment(), email, activity);
                self.notifier.show(text.clone(), NoticeKind::Success);
                if mutation == Mutation::Signup {
                    self.state.write().await.page.form.reset();
                }
                self.refresh().await;
                Ok(text)
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(
                    "{} rejected for {} in {}: {}",
                    mutation.path_segment(),
                    email,
                    activity,
                    e
                );
                let text = e.detail().unwrap_or(mutation.rejection_fallback());
                self.notifier.show(text, NoticeKind::Error);
                Err(e)
            }
            Err(e) => {
                tracing::error!("Error during {}: {}", mutation.path_segment(), e);
                self.notifier.show(mutation.transport_message(), NoticeKind::Error);
                Err(e)
            }
        }
    }

    /// Page-ready handler.
    pub async fn on_ready(&self) {
        tracing::info!("Page ready, loading activities");
        self.refresh().await;
    }

    /// Write the signup form fields, as the user typing would.
    pub async fn fill_form(&self, email: impl Into<String>, activity: impl Into<String>) {
        let mut state = self.state.write().await;
        state.page.form.email = email.into();
        state.page.form.activity = activity.into();
    }

    /// Form-submit handler: sign up with the current form fields.
    pub async fn on_submit(&self) -> Result<String> {
        let form = self.state.read().await.page.form.clone();
        self.signup(&form.activity, &form.email).await
    }

    /// Removal-click handler for a participant row.
    pub async fn on_remove(&self, target: &RemovalTarget) -> Result<String> {
        self.unregister(&target.activity, &target.email).await
    }

    /// Snapshot of the page surface.
    pub async fn page(&self) -> Page {
        self.state.read().await.page.clone()
    }

    /// Snapshot of the last successfully fetched roster.
    pub async fn roster(&self) -> Roster {
        self.state.read().await.roster.clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notifier.current()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Full page markup including the message container.
    pub async fn page_html(&self) -> Result<String> {
        let notice = self.notifier.current();
        self.state.read().await.page.to_html(notice.as_ref())
    }
}
