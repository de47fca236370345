//! Event dispatch.
//!
//! # Responsibilities
//! - Route each host event kind to exactly one handler
//! - Translate handler effects into directives
//!
//! # Design Decisions
//! - A Runtime can only exist once the registry is built, so no event is
//!   handled against a half-loaded registry
//! - Handlers never fail; problems degrade to "do nothing"

use std::sync::Arc;

use crate::config::ShortcutConfig;
use crate::guard::{GuardOutcome, NavigationGuard, TabId, TabNavigator};
use crate::host::event::{Directive, HostEvent};
use crate::matching::{MatchEngine, MatchResult};
use crate::registry::ShortcutRegistry;
use crate::suggest::SuggestionProvider;
use crate::watcher::PageMessage;

/// Collects directives produced while handling one event.
#[derive(Debug, Default)]
struct DirectiveQueue(Vec<Directive>);

impl TabNavigator for DirectiveQueue {
    fn update_tab(&mut self, tab: Option<TabId>, url: &str) {
        self.0.push(Directive::UpdateTab {
            tab_id: tab,
            url: url.to_string(),
        });
    }
}

/// Owns the engine components and handles host events.
#[derive(Debug)]
pub struct Runtime {
    engine: Arc<MatchEngine>,
    guard: NavigationGuard,
    suggestions: SuggestionProvider,
}

impl Runtime {
    pub fn new(registry: Arc<ShortcutRegistry>, config: &ShortcutConfig) -> Self {
        let engine = Arc::new(MatchEngine::from_config(registry.clone(), &config.matching));
        Self {
            guard: NavigationGuard::new(engine.clone()),
            suggestions: SuggestionProvider::new(registry, config.suggestions.max_results),
            engine,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn suggestions(&self) -> &SuggestionProvider {
        &self.suggestions
    }

    /// Handle one event to completion and return the directives it produced.
    pub fn dispatch(&mut self, event: HostEvent) -> Vec<Directive> {
        tracing::trace!(event = event.kind(), "Dispatching host event");
        let mut out = DirectiveQueue::default();

        match event {
            HostEvent::KeywordInputEntered { text } => {
                self.on_keyword_input_entered(&text, &mut out);
            }
            HostEvent::KeywordInputChanged { text } => self.on_keyword_input_changed(&text, &mut out),
            HostEvent::BeforeNavigate { tab_id, url } => {
                self.guard.on_before_navigate(tab_id, &url, &mut out);
            }
            HostEvent::NavigationCommitted { tab_id, url } => {
                self.guard.on_navigation_committed(tab_id, &url, &mut out);
            }
            HostEvent::TabUrlUpdated { tab_id, url } => {
                self.guard.on_tab_url_updated(tab_id, &url, &mut out);
            }
            HostEvent::TabRemoved { tab_id } => self.guard.on_tab_closed(tab_id),
            HostEvent::BeforeRequest { request_id, url } => self.on_before_request(request_id, &url, &mut out),
            HostEvent::Message { tab_id, message } => self.on_message(tab_id, message, &mut out),
        }

        out.0
    }

    /// Returns whether a redirect was issued.
    fn on_keyword_input_entered(&mut self, text: &str, out: &mut DirectiveQueue) -> bool {
        match self.engine.resolve_typed_text(text) {
            MatchResult::Matched(resolution) => {
                tracing::info!(
                    keyword = %resolution.keyword,
                    destination = %resolution.destination,
                    rule = %resolution.rule,
                    "Opening shortcut"
                );
                out.update_tab(None, &resolution.destination);
                true
            }
            MatchResult::NoMatch => {
                tracing::debug!(text = %text, "No shortcut for typed text");
                false
            }
        }
    }

    /// Answered synchronously from the resolver; no tab state is touched.
    fn on_before_request(&self, request_id: Option<String>, url: &str, out: &mut DirectiveQueue) {
        let url = match self.engine.resolve_navigated_url(url) {
            MatchResult::Matched(resolution) => {
                tracing::info!(
                    url = %url,
                    destination = %resolution.destination,
                    rule = %resolution.rule,
                    "Redirecting request"
                );
                Some(resolution.destination)
            }
            MatchResult::NoMatch => None,
        };
        out.0.push(Directive::Redirect { request_id, url });
    }

    fn on_keyword_input_changed(&self, text: &str, out: &mut DirectiveQueue) {
        let suggestions = self.suggestions.provide_suggestions(text);
        out.0.push(Directive::Suggest { suggestions });
    }

    fn on_message(&mut self, tab_id: Option<TabId>, message: PageMessage, out: &mut DirectiveQueue) {
        let success = match message {
            PageMessage::CheckShortcut { text } => self.on_keyword_input_entered(&text, out),
            PageMessage::CheckUrl { url } => match tab_id {
                Some(tab) => matches!(
                    self.guard.on_page_url_reported(tab, &url, out),
                    GuardOutcome::Redirected { .. }
                ),
                None => match self.engine.resolve_navigated_url(&url) {
                    MatchResult::Matched(resolution) => {
                        out.update_tab(None, &resolution.destination);
                        true
                    }
                    MatchResult::NoMatch => false,
                },
            },
        };
        out.0.push(Directive::Respond { success });
    }
}
