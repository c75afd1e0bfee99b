//! The view controller: the single writer of all checklist state.
//!
//! The presentation layer is an external collaborator. It reads
//! [`RenderState`] snapshots and invokes the five named operations
//! ([`Controller::toggle`], [`Controller::submit`], [`Controller::reset`],
//! [`Controller::restart`], [`Controller::copy_link`]); each operation
//! returns the DOM-level side effects the embedder must perform as a list
//! of [`Effect`]s. Nothing else mutates answers, score, or status.
//!
//! The two historical variants of the component are configuration
//! profiles of this one controller, not separate code paths: see
//! [`Profile::shareable`] and [`Profile::live_page`].

use serde::Serialize;

use crate::answers::AnswerState;
use crate::catalog::Catalog;
use crate::constants::{STATUS_CLEAR_DELAY, STATUS_COPIED, STATUS_NO_CLIPBOARD};
use crate::scoring::{checked_count, compute_score};
use crate::share::{decode_score, intent_href, share_link, share_text, sms_href};

/// Where a submit/restart scroll request should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    ResultPanel,
}

/// Per-variant behavior switches.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    /// Encode the committed score into the share link and hydrate from a
    /// `score` query parameter on open.
    pub shareable_links: bool,
    /// Scroll destination after a submit.
    pub scroll_target: ScrollTarget,
}

impl Profile {
    /// Variant A: score-parameter share links, result panel scroll.
    pub fn shareable() -> Self {
        Self {
            shareable_links: true,
            scroll_target: ScrollTarget::ResultPanel,
        }
    }

    /// Variant B: verbatim page link (no score parameter), top scroll.
    pub fn live_page() -> Self {
        Self {
            shareable_links: false,
            scroll_target: ScrollTarget::Top,
        }
    }
}

/// Side effect requested by an operation, to be performed by the embedder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Rewrite the visible address without creating a history entry.
    ReplaceUrl { url: String },
    /// Smooth-scroll the page to the top.
    ScrollToTop,
    /// Smooth-scroll the result panel into view.
    ScrollToResult,
    /// Clear the copy status (via [`Controller::clear_copy_status`]) after
    /// the delay. Overlapping clears are harmless: the clear is idempotent
    /// and a pending one is never cancelled by a newer copy.
    ScheduleStatusClear { delay_ms: u64 },
}

/// Minimal clipboard capability. Absence of a clipboard is modeled by
/// passing `None` to [`Controller::copy_link`], not by a failing impl.
pub trait Clipboard {
    /// Write the text, returning whether the write succeeded.
    fn write(&self, text: &str) -> bool;
}

/// Per-question row of the rendering contract.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionRow {
    pub id: u32,
    pub text: String,
    pub checked: bool,
    pub disabled: bool,
}

/// Read-only snapshot of everything the presentation layer may show.
#[derive(Clone, Debug, Serialize)]
pub struct RenderState {
    pub questions: Vec<QuestionRow>,
    pub score: Option<u32>,
    pub shared_view: bool,
    pub checked_count: u32,
    pub enabled_count: u32,
    pub share_link: String,
    pub share_text: String,
    pub sms_href: String,
    pub intent_href: String,
    pub copy_status: Option<String>,
}

/// Owns the checklist state and applies the named transitions.
pub struct Controller {
    catalog: Catalog,
    profile: Profile,
    /// Origin + path of the hosting page, query already stripped.
    base_url: String,
    answers: AnswerState,
    score: Option<u32>,
    shared_view: bool,
    copy_status: Option<String>,
}

impl Controller {
    /// Fresh controller: default-seeded answers, no committed score.
    pub fn new(catalog: Catalog, profile: Profile, base_url: impl Into<String>) -> Self {
        let answers = AnswerState::from_defaults(&catalog);
        Self {
            catalog,
            profile,
            base_url: base_url.into(),
            answers,
            score: None,
            shared_view: false,
            copy_status: None,
        }
    }

    /// Model a page load: reseed defaults, then hydrate a shared score
    /// from the query string (shareable profile only). Answers stay at
    /// their defaults even when a shared score is present — the score does
    /// not imply specific answers. Malformed or out-of-range parameters
    /// are silently ignored.
    pub fn open(&mut self, query: Option<&str>) {
        self.answers = AnswerState::from_defaults(&self.catalog);
        self.score = None;
        self.shared_view = false;
        self.copy_status = None;
        if self.profile.shareable_links {
            if let Some(score) = decode_score(query, self.catalog.enabled_count()) {
                self.score = Some(score);
                self.shared_view = true;
            }
        }
    }

    /// Flip one answer. No-op for locked or unknown ids. Always drops any
    /// committed score back to absent, even in a shared view.
    pub fn toggle(&mut self, id: u32) -> Vec<Effect> {
        match self.catalog.get(id) {
            Some(q) if !q.disabled => {}
            _ => return Vec::new(),
        }
        self.answers.flip(id);
        self.score = None;
        Vec::new()
    }

    /// Commit the score and leave any shared-view semantics behind.
    pub fn submit(&mut self) -> Vec<Effect> {
        self.score = Some(compute_score(&self.catalog, &self.answers));
        self.shared_view = false;
        let mut effects = Vec::new();
        if self.profile.shareable_links {
            effects.push(Effect::ReplaceUrl {
                url: self.base_url.clone(),
            });
        }
        effects.push(match self.profile.scroll_target {
            ScrollTarget::Top => Effect::ScrollToTop,
            ScrollTarget::ResultPanel => Effect::ScrollToResult,
        });
        effects
    }

    /// Restore the default-seeded answers and clear score, status, and
    /// shared view.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.answers = AnswerState::from_defaults(&self.catalog);
        self.score = None;
        self.copy_status = None;
        self.shared_view = false;
        if self.profile.shareable_links {
            vec![Effect::ReplaceUrl {
                url: self.base_url.clone(),
            }]
        } else {
            Vec::new()
        }
    }

    /// `reset()` plus a scroll back to the top of the page.
    pub fn restart(&mut self) -> Vec<Effect> {
        let mut effects = self.reset();
        effects.push(Effect::ScrollToTop);
        effects
    }

    /// Write the current share link to the clipboard, if one is present.
    /// Sets a transient status either way and schedules its clear; never
    /// touches answers, score, or the shared-view flag.
    pub fn copy_link(&mut self, clipboard: Option<&dyn Clipboard>) -> Vec<Effect> {
        let status = match clipboard {
            Some(cb) if cb.write(&self.share_link()) => STATUS_COPIED,
            Some(_) => STATUS_NO_CLIPBOARD,
            None => STATUS_NO_CLIPBOARD,
        };
        self.copy_status = Some(status.to_string());
        vec![Effect::ScheduleStatusClear {
            delay_ms: STATUS_CLEAR_DELAY.as_millis() as u64,
        }]
    }

    /// Idempotent clear invoked by the embedder when a scheduled
    /// status-clear fires.
    pub fn clear_copy_status(&mut self) {
        self.copy_status = None;
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn shared_view(&self) -> bool {
        self.shared_view
    }

    pub fn copy_status(&self) -> Option<&str> {
        self.copy_status.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    /// Current shareable link for the active profile.
    pub fn share_link(&self) -> String {
        share_link(&self.base_url, self.score, self.profile.shareable_links)
    }

    /// Snapshot of the full rendering contract.
    pub fn snapshot(&self) -> RenderState {
        let questions = self
            .catalog
            .iter()
            .map(|q| QuestionRow {
                id: q.id,
                text: q.text.clone(),
                checked: self.answers.is_checked(q.id),
                disabled: q.disabled,
            })
            .collect();
        let enabled_count = self.catalog.enabled_count();
        let link = self.share_link();
        let text = share_text(self.score, enabled_count);
        RenderState {
            questions,
            score: self.score,
            shared_view: self.shared_view,
            checked_count: checked_count(&self.catalog, &self.answers),
            enabled_count,
            sms_href: sms_href(&text, &link),
            intent_href: intent_href(&text, &link),
            share_link: link,
            share_text: text,
            copy_status: self.copy_status.clone(),
        }
    }
}
