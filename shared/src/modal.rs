use crate::{KvStorage, Registration, RegistrationStore, StoreError, SubmitOutcome};

/// Status shown when the modal is submitted without a name or an email.
pub const MODAL_INCOMPLETE: &str = "Please fill out name and email.";
/// Status shown after the modal stored a registration.
pub const MODAL_REGISTERED: &str = "Registered — thank you!";

/// Visibility of the registration dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Hidden, the initial state.
    #[default]
    Closed,
    /// Displayed for a particular event.
    Open,
}

/// The registration dialog.
///
/// Field values are mirrored from and back to the page by the caller; the controller only decides what they become.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    event: String,
    /// Current content of the name field.
    pub name: String,
    /// Current content of the email field.
    pub email: String,
    /// Current status message, empty when nothing is shown.
    pub message: String,
}

impl ModalController {
    /// Instantiates a closed dialog.
    pub fn new() -> ModalController {
        ModalController::default()
    }

    /// Current visibility.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the dialog is displayed.
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// The event name stamped by the last [`ModalController::open`].
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Displays the dialog for `event`.
    pub fn open(&mut self, event: &str) {
        self.state = ModalState::Open;
        self.event = event.to_string();
    }

    /// Hides the dialog and clears the status message. Field contents are kept.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.message.clear();
    }

    /// Handles a click on the dialog, closing it only when the click landed on the scrim itself.
    ///
    /// Returns whether the dialog was closed.
    pub fn click(&mut self, on_scrim: bool) -> bool {
        if on_scrim {
            self.close();
        }

        on_scrim
    }

    /// Validates the fields and, if both are filled, appends a [`Registration`] for the stamped event.
    ///
    /// On success the name and email are cleared and the dialog stays open. A failing store leaves every field
    /// untouched.
    pub fn submit<S: KvStorage>(
        &mut self,
        store: &RegistrationStore<S>,
    ) -> Result<SubmitOutcome, StoreError> {
        let Some(registration) = Registration::from_fields(&self.name, &self.email, &self.event)
        else {
            self.message = MODAL_INCOMPLETE.to_string();
            return Ok(SubmitOutcome::Incomplete);
        };

        store.append(registration.clone())?;

        self.message = MODAL_REGISTERED.to_string();
        self.name.clear();
        self.email.clear();

        Ok(SubmitOutcome::Registered(registration))
    }
}
