//! Cart modal state machine.

/// Whether the cart panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// Hidden
    #[default]
    Closed,
    /// Showing the cart
    Open,
}

/// Clicks that affect the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// The cart icon in the header
    CartIconClicked,
    /// The close button inside the modal
    CloseClicked,
    /// A click on the modal overlay; `inside_content` is true when it landed on the
    /// panel itself rather than the backdrop around it
    BackdropClicked {
        /// Click target was inside the content area
        inside_content: bool,
    },
}

impl ModalState {
    /// State after `event`.
    #[must_use]
    pub const fn on(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::CartIconClicked => Self::Open,
            ModalEvent::CloseClicked
            | ModalEvent::BackdropClicked {
                inside_content: false,
            } => Self::Closed,
            ModalEvent::BackdropClicked {
                inside_content: true,
            } => self,
        }
    }

    /// True when the cart panel is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_opens_and_close_closes() {
        let state = ModalState::Closed.on(ModalEvent::CartIconClicked);
        assert!(state.is_open());
        assert_eq!(state.on(ModalEvent::CloseClicked), ModalState::Closed);
    }

    #[test]
    fn test_backdrop_outside_content_closes() {
        let state = ModalState::Open.on(ModalEvent::BackdropClicked {
            inside_content: false,
        });
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_click_inside_content_keeps_state() {
        let event = ModalEvent::BackdropClicked {
            inside_content: true,
        };
        assert_eq!(ModalState::Open.on(event), ModalState::Open);
        assert_eq!(ModalState::Closed.on(event), ModalState::Closed);
    }

    #[test]
    fn test_reopening_is_idempotent() {
        assert_eq!(
            ModalState::Open.on(ModalEvent::CartIconClicked),
            ModalState::Open
        );
    }
}
