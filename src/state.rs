use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config;

/// Scroll targets on the landing page. The id doubles as the DOM anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Services, Section::About, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalModal {
    Privacy,
    Terms,
    About,
}

impl LegalModal {
    pub fn title(self) -> &'static str {
        match self {
            LegalModal::Privacy => "Privacy Policy",
            LegalModal::Terms => "Terms of Service",
            LegalModal::About => "About Us",
        }
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// Everything the page controller owns. Children only ever see copies of
/// these values plus callbacks that dispatch a [`PageAction`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub privacy_open: bool,
    pub terms_open: bool,
    pub about_open: bool,
    pub scrolled: bool,
    pub selected_service: Option<String>,
}

impl PageState {
    pub fn is_modal_open(&self, modal: LegalModal) -> bool {
        match modal {
            LegalModal::Privacy => self.privacy_open,
            LegalModal::Terms => self.terms_open,
            LegalModal::About => self.about_open,
        }
    }

    fn set_modal(&mut self, modal: LegalModal, open: bool) {
        match modal {
            LegalModal::Privacy => self.privacy_open = open,
            LegalModal::Terms => self.terms_open = open,
            LegalModal::About => self.about_open = open,
        }
    }

    pub fn apply(&self, action: PageAction) -> PageState {
        let mut next = self.clone();
        match action {
            PageAction::ToggleMenu => next.menu_open = !self.menu_open,
            // Scrolling to a section always dismisses the mobile menu.
            PageAction::NavigateTo(_) => next.menu_open = false,
            PageAction::Scrolled(offset) => next.scrolled = is_scrolled(offset),
            PageAction::OpenModal(modal) => next.set_modal(modal, true),
            PageAction::CloseModal(modal) => next.set_modal(modal, false),
            PageAction::SelectService(title) => {
                next.selected_service = Some(title);
                next.menu_open = false;
            }
        }
        next
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    NavigateTo(Section),
    Scrolled(f64),
    OpenModal(LegalModal),
    CloseModal(LegalModal),
    SelectService(String),
}

impl PageAction {
    /// Section the page scrolls to alongside this action, if any.
    pub fn scroll_target(&self) -> Option<Section> {
        match self {
            PageAction::NavigateTo(section) => Some(*section),
            PageAction::SelectService(_) => Some(Section::Contact),
            _ => None,
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action.clone());
        if next == *self {
            return self;
        }
        if !matches!(action, PageAction::Scrolled(_)) || next.scrolled != self.scrolled {
            debug!("page state: {:?}", action);
        }
        Rc::new(next)
    }
}

/// Placeholder for the contact form's message box.
pub fn message_placeholder(selected_service: Option<&str>) -> String {
    match selected_service {
        Some(service) if !service.is_empty() => format!(
            "Tell us about your {} project and requirements...",
            service.to_lowercase()
        ),
        _ => "Tell us about your project and goals...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SERVICES;

    #[test]
    fn section_ids_are_the_four_anchors() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "services", "about", "contact"]);
    }

    #[test]
    fn navigating_closes_menu_for_every_section() {
        for section in Section::ALL {
            let open = PageState::default().apply(PageAction::ToggleMenu);
            assert!(open.menu_open);
            let after = open.apply(PageAction::NavigateTo(section));
            assert!(!after.menu_open, "menu still open after navigating to {}", section.id());
        }
    }

    #[test]
    fn navigating_with_closed_menu_is_a_no_op() {
        let state = PageState::default();
        let after = state.apply(PageAction::NavigateTo(Section::Contact));
        assert_eq!(after, state);
        assert_eq!(after.apply(PageAction::NavigateTo(Section::Contact)), state);
    }

    #[test]
    fn scroll_threshold_is_strictly_greater_than_100() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(2400.0));
    }

    #[test]
    fn scroll_flag_follows_offset_both_ways() {
        let mut state = PageState::default();
        let offsets = [0.0, 50.0, 101.0, 300.0, 99.0, 100.0, 150.0, 0.0];
        let expected = [false, false, true, true, false, false, true, false];
        for (offset, want) in offsets.iter().zip(expected) {
            state = state.apply(PageAction::Scrolled(*offset));
            assert_eq!(state.scrolled, want, "offset {}", offset);
        }
    }

    #[test]
    fn selecting_each_service_records_exact_title() {
        for service in SERVICES.iter() {
            let state = PageState::default().apply(PageAction::SelectService(service.title.to_string()));
            assert_eq!(state.selected_service.as_deref(), Some(service.title));
        }
    }

    #[test]
    fn selecting_any_service_heads_to_contact_and_closes_menu() {
        for service in SERVICES.iter() {
            let action = PageAction::SelectService(service.title.to_string());
            assert_eq!(action.scroll_target(), Some(Section::Contact), "{}", service.title);

            let open = PageState::default().apply(PageAction::ToggleMenu);
            let after = open.apply(action);
            assert!(!after.menu_open, "menu still open after selecting {}", service.title);
        }
    }

    #[test]
    fn only_navigation_actions_scroll() {
        for section in Section::ALL {
            assert_eq!(PageAction::NavigateTo(section).scroll_target(), Some(section));
        }
        assert_eq!(PageAction::ToggleMenu.scroll_target(), None);
        assert_eq!(PageAction::Scrolled(500.0).scroll_target(), None);
        assert_eq!(PageAction::OpenModal(LegalModal::Terms).scroll_target(), None);
    }

    #[test]
    fn modals_are_independent() {
        let state = PageState::default()
            .apply(PageAction::OpenModal(LegalModal::Privacy))
            .apply(PageAction::OpenModal(LegalModal::Terms));
        assert!(state.is_modal_open(LegalModal::Privacy));
        assert!(state.is_modal_open(LegalModal::Terms));
        assert!(!state.is_modal_open(LegalModal::About));

        let state = state.apply(PageAction::CloseModal(LegalModal::Privacy));
        assert!(!state.is_modal_open(LegalModal::Privacy));
        assert!(state.is_modal_open(LegalModal::Terms));
    }

    #[test]
    fn other_actions_leave_modals_alone() {
        let open = PageState::default().apply(PageAction::OpenModal(LegalModal::About));
        let after = open
            .apply(PageAction::ToggleMenu)
            .apply(PageAction::NavigateTo(Section::Home))
            .apply(PageAction::Scrolled(500.0))
            .apply(PageAction::SelectService("Web Development".into()));
        assert!(after.is_modal_open(LegalModal::About));
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(PageAction::Scrolled(120.0));
        assert!(next.scrolled);
    }

    #[test]
    fn placeholder_mentions_lowercased_service() {
        assert_eq!(
            message_placeholder(Some("Google Ads & Analytics")),
            "Tell us about your google ads & analytics project and requirements..."
        );
        assert_eq!(message_placeholder(None), "Tell us about your project and goals...");
        assert_eq!(message_placeholder(Some("")), "Tell us about your project and goals...");
    }
}
