use std::rc::Rc;

use yew::prelude::*;

use crate::contact::form::{ContactForm, FormField};
use crate::contact::submit::SubmitError;
use crate::pages::sections::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    ContactPanel,
    Success,
}

pub enum LandingAction {
    ToggleContact,
    CloseContact,
    ToggleMobileMenu,
    /// Contact button inside the mobile menu: toggles the panel, closes the menu.
    ContactFromMenu,
    /// A section link or hero button was followed.
    Navigated,
    EditField(FormField, String),
    SubmitRequested,
    SubmitFinished { ticket: u32, result: Result<(), SubmitError> },
    AutoDismiss { ticket: u32 },
    BackdropClicked(Overlay),
    EscapePressed,
    Scrolled { offset: f64, hit: Option<Section> },
    CarouselPressed,
    CarouselReleased,
}

/// Everything the landing page renders from, reinitialized on every load.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingState {
    pub form: ContactForm,
    pub contact_open: bool,
    pub success_open: bool,
    pub mobile_menu_open: bool,
    /// Shared by both carousels; pressing either one pauses the pair.
    pub animating: bool,
    pub scroll_offset: f64,
    pub active_section: Section,
    /// Ticket of the successful submission whose auto-dismiss is still armed.
    pub pending_dismiss: Option<u32>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            contact_open: false,
            success_open: false,
            mobile_menu_open: false,
            animating: true,
            scroll_offset: 0.0,
            active_section: Section::Home,
            pending_dismiss: None,
        }
    }
}

impl LandingState {
    pub fn scroll_locked(&self) -> bool {
        self.contact_open || self.success_open
    }

    pub fn apply(&mut self, action: LandingAction) {
        match action {
            LandingAction::ToggleContact => self.contact_open = !self.contact_open,
            LandingAction::CloseContact => self.contact_open = false,
            LandingAction::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            LandingAction::ContactFromMenu => {
                self.contact_open = !self.contact_open;
                self.mobile_menu_open = false;
            }
            LandingAction::Navigated => self.mobile_menu_open = false,
            LandingAction::EditField(field, value) => self.form.update_field(field, value),
            LandingAction::SubmitRequested => {
                self.form.begin_submit();
            }
            LandingAction::SubmitFinished { ticket, result } => {
                if self.form.finish_submit(ticket, result) {
                    self.success_open = true;
                    self.pending_dismiss = Some(ticket);
                }
            }
            LandingAction::AutoDismiss { ticket } => {
                if self.pending_dismiss == Some(ticket) {
                    self.success_open = false;
                    self.contact_open = false;
                }
            }
            LandingAction::BackdropClicked(Overlay::Success) => {
                self.success_open = false;
            }
            LandingAction::BackdropClicked(Overlay::ContactPanel) => self.contact_open = false,
            LandingAction::EscapePressed => {
                self.contact_open = false;
                self.success_open = false;
            }
            LandingAction::Scrolled { offset, hit } => {
                self.scroll_offset = offset;
                if let Some(section) = hit {
                    self.active_section = section;
                }
            }
            LandingAction::CarouselPressed => self.animating = false,
            LandingAction::CarouselReleased => self.animating = true,
        }

        // Nothing left for the timer to close once both overlays are shut.
        if !self.scroll_locked() {
            self.pending_dismiss = None;
        }
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            // Same pointer means no re-render.
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> LandingState {
        let mut state = LandingState::default();
        state.apply(LandingAction::EditField(FormField::FullName, "Dana".to_string()));
        state.apply(LandingAction::EditField(FormField::Email, "dana@example.com".to_string()));
        state.apply(LandingAction::EditField(FormField::Subject, "Lease".to_string()));
        state.apply(LandingAction::EditField(FormField::Message, "Call me".to_string()));
        state
    }

    fn submit_successfully(state: &mut LandingState) -> u32 {
        state.apply(LandingAction::SubmitRequested);
        let ticket = state.form.in_flight().expect("submission started");
        state.apply(LandingAction::SubmitFinished { ticket, result: Ok(()) });
        ticket
    }

    #[test]
    fn test_initial_state() {
        let state = LandingState::default();
        assert!(!state.contact_open);
        assert!(!state.success_open);
        assert!(!state.mobile_menu_open);
        assert!(state.animating);
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_escape_closes_contact_panel() {
        let mut state = LandingState::default();
        state.apply(LandingAction::ToggleContact);
        assert!(state.contact_open);
        assert!(state.scroll_locked());

        state.apply(LandingAction::EscapePressed);
        assert!(!state.contact_open);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_escape_closes_both_overlays() {
        let mut state = valid_state();
        state.apply(LandingAction::ToggleContact);
        submit_successfully(&mut state);
        assert!(state.contact_open && state.success_open);

        state.apply(LandingAction::EscapePressed);
        assert!(!state.contact_open);
        assert!(!state.success_open);
        assert_eq!(state.pending_dismiss, None);
    }

    #[test]
    fn test_backdrop_click_closes_only_its_overlay() {
        let mut state = valid_state();
        state.apply(LandingAction::ToggleContact);
        submit_successfully(&mut state);

        state.apply(LandingAction::BackdropClicked(Overlay::Success));
        assert!(!state.success_open);
        assert!(state.contact_open);
        assert!(state.scroll_locked());

        state.apply(LandingAction::BackdropClicked(Overlay::ContactPanel));
        assert!(!state.contact_open);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_submit_then_auto_dismiss() {
        let mut state = valid_state();
        state.apply(LandingAction::ToggleContact);

        state.apply(LandingAction::SubmitRequested);
        let ticket = state.form.in_flight().unwrap();
        assert!(!state.success_open);

        state.apply(LandingAction::SubmitFinished { ticket, result: Ok(()) });
        assert!(state.success_open);
        assert!(state.form.data.is_empty());
        assert!(state.form.errors.is_empty());
        assert_eq!(state.pending_dismiss, Some(ticket));

        state.apply(LandingAction::AutoDismiss { ticket });
        assert!(!state.success_open);
        assert!(!state.contact_open);
        assert_eq!(state.pending_dismiss, None);
    }

    #[test]
    fn test_manual_close_disarms_auto_dismiss() {
        let mut state = valid_state();
        state.apply(LandingAction::ToggleContact);
        let ticket = submit_successfully(&mut state);

        state.apply(LandingAction::BackdropClicked(Overlay::Success));
        state.apply(LandingAction::CloseContact);
        assert_eq!(state.pending_dismiss, None);

        // Panel reopened before the old timer would have fired.
        state.apply(LandingAction::ToggleContact);
        state.apply(LandingAction::AutoDismiss { ticket });
        assert!(state.contact_open);
    }

    #[test]
    fn test_invalid_submit_does_not_start() {
        let mut state = LandingState::default();
        state.apply(LandingAction::EditField(FormField::Email, "x@y.com".to_string()));
        state.apply(LandingAction::EditField(FormField::Subject, "Hi".to_string()));
        state.apply(LandingAction::EditField(FormField::Message, "Hello".to_string()));

        state.apply(LandingAction::SubmitRequested);

        assert_eq!(state.form.in_flight(), None);
        assert!(state.form.errors.get(FormField::FullName).is_some());
        assert_eq!(state.form.errors.fields().count(), 1);
        assert_eq!(state.form.data.email, "x@y.com");
    }

    #[test]
    fn test_failed_submit_keeps_panel_and_data() {
        let mut state = valid_state();
        state.apply(LandingAction::ToggleContact);
        state.apply(LandingAction::SubmitRequested);
        let ticket = state.form.in_flight().unwrap();

        state.apply(LandingAction::SubmitFinished {
            ticket,
            result: Err(SubmitError::Transport("timeout".to_string())),
        });

        assert!(!state.success_open);
        assert!(state.contact_open);
        assert_eq!(state.pending_dismiss, None);
        assert_eq!(state.form.data.full_name, "Dana");
        assert!(state.form.errors.submit_error().is_some());
    }

    #[test]
    fn test_scroll_keeps_previous_section_when_nothing_matches() {
        let mut state = LandingState::default();
        state.apply(LandingAction::Scrolled { offset: 900.0, hit: Some(Section::About) });
        assert_eq!(state.active_section, Section::About);

        state.apply(LandingAction::Scrolled { offset: 950.0, hit: None });
        assert_eq!(state.active_section, Section::About);
        assert_eq!(state.scroll_offset, 950.0);
    }

    #[test]
    fn test_identical_scroll_does_not_rerender() {
        let state = Rc::new(LandingState::default());
        let first = state.reduce(LandingAction::Scrolled { offset: 420.0, hit: Some(Section::Services) });
        let second = first.clone().reduce(LandingAction::Scrolled { offset: 420.0, hit: Some(Section::Services) });
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.active_section, Section::Services);
    }

    #[test]
    fn test_pressing_either_carousel_pauses_both() {
        let mut state = LandingState::default();
        state.apply(LandingAction::CarouselPressed);
        // One flag drives both tracks, so the pause is shared by design.
        assert!(!state.animating);
        state.apply(LandingAction::CarouselReleased);
        assert!(state.animating);
    }

    #[test]
    fn test_mobile_menu_closes_on_navigation() {
        let mut state = LandingState::default();
        state.apply(LandingAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        state.apply(LandingAction::Navigated);
        assert!(!state.mobile_menu_open);

        state.apply(LandingAction::ToggleMobileMenu);
        state.apply(LandingAction::ContactFromMenu);
        assert!(!state.mobile_menu_open);
        assert!(state.contact_open);
    }
}
