use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::Section;
use crate::legal::LegalDocument;

/// Page-level UI state, owned by the top-level page.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub active_section: Section,
    pub quote_modal_open: bool,
    pub legal_modal: Option<LegalDocument>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            quote_modal_open: false,
            legal_modal: None,
        }
    }
}

impl SessionState {
    pub fn with_legal(legal_modal: Option<LegalDocument>) -> Self {
        Self { legal_modal, ..Self::default() }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}

pub enum SessionAction {
    SectionVisible(Section),
    OpenQuote,
    CloseQuote,
    OpenLegal(LegalDocument),
    CloseLegal,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::SectionVisible(section) => {
                if section != next.active_section {
                    debug!("Active section: {}", section.id());
                }
                next.active_section = section;
            }
            SessionAction::OpenQuote => next.quote_modal_open = true,
            SessionAction::CloseQuote => next.quote_modal_open = false,
            SessionAction::OpenLegal(doc) => next.legal_modal = Some(doc),
            SessionAction::CloseLegal => next.legal_modal = None,
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: SessionState, actions: Vec<SessionAction>) -> Rc<SessionState> {
        actions.into_iter().fold(Rc::new(state), |s, a| s.reduce(a))
    }

    #[test]
    fn starts_on_home_with_modals_closed() {
        let state = SessionState::default();
        assert!(state.is_active(Section::Home));
        assert!(!state.quote_modal_open);
        assert_eq!(state.legal_modal, None);
    }

    #[test]
    fn legal_modal_opens_and_closes() {
        let state = apply(SessionState::default(), vec![SessionAction::OpenLegal(LegalDocument::Terms)]);
        assert_eq!(state.legal_modal, Some(LegalDocument::Terms));
        let state = state.reduce(SessionAction::CloseLegal);
        assert_eq!(state.legal_modal, None);
    }

    #[test]
    fn opening_another_legal_document_replaces_the_first() {
        let state = apply(
            SessionState::default(),
            vec![
                SessionAction::OpenLegal(LegalDocument::Privacy),
                SessionAction::OpenLegal(LegalDocument::Accessibility),
            ],
        );
        assert_eq!(state.legal_modal, Some(LegalDocument::Accessibility));
    }

    #[test]
    fn quote_modal_toggles_independently() {
        let state = apply(
            SessionState::with_legal(Some(LegalDocument::Privacy)),
            vec![SessionAction::OpenQuote, SessionAction::SectionVisible(Section::Reviews)],
        );
        assert!(state.quote_modal_open);
        assert!(state.is_active(Section::Reviews));
        assert_eq!(state.legal_modal, Some(LegalDocument::Privacy));
        assert!(!state.reduce(SessionAction::CloseQuote).quote_modal_open);
    }

    #[test]
    fn unchanged_state_keeps_its_allocation() {
        let state = Rc::new(SessionState::default());
        let next = state.clone().reduce(SessionAction::SectionVisible(Section::Home));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
