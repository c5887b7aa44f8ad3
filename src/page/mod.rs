//! Headless page surface.
//!
//! Holds what the surrounding page displays: the activity list container,
//! the activity selection control and the signup form fields. The message
//! container is driven by the [`Notifier`](crate::notifier::Notifier).

use askama::Template;

use crate::errors::Result;
use crate::models::Notice;
use crate::render::{ActivityCard, RenderedRoster, SelectOption};

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Content of the activity list container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivityList {
    /// Before the first fetch completes
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    /// Last fetch failed; no cards are shown
    Failed,
}

/// Fields of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub list: ActivityList,
    pub options: Vec<SelectOption>,
    pub form: SignupForm,
}

impl Page {
    /// Replace list and options with a fresh render.
    pub fn show_roster(&mut self, rendered: RenderedRoster) {
        self.list = ActivityList::Cards(rendered.cards);
        self.options = rendered.options;
    }

    /// Drop all cards and options and show the failure placeholder.
    pub fn show_load_failure(&mut self) {
        self.list = ActivityList::Failed;
        self.options.clear();
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ActivityList::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Static text shown in place of cards, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.list {
            ActivityList::Loading => Some(LOADING_MESSAGE),
            ActivityList::Cards(_) => None,
            ActivityList::Failed => Some(LOAD_FAILED_MESSAGE),
        }
    }

    /// Full page markup, including the message container for `notice`.
    pub fn to_html(&self, notice: Option<&Notice>) -> Result<String> {
        Ok(PageTemplate { page: self, notice }.render()?)
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page: &'a Page,
    notice: Option<&'a Notice>,
}
