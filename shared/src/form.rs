use crate::{KvStorage, Registration, RegistrationStore, StoreError};

/// Status shown when the inline form is submitted without a name or an email.
pub const FORM_INCOMPLETE: &str = "Please fill required fields";
/// Status shown after the inline form stored a registration.
pub const FORM_SAVED: &str = "Saved — thanks!";
/// Event recorded when the inline event field is left blank.
pub const DEFAULT_EVENT: &str = "General";

/// Result of a form submission that reached the store, or was stopped by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was blank; nothing was stored.
    Incomplete,
    /// The [`Registration`] was appended.
    Registered(Registration),
}

/// The inline sign-up form at the bottom of the page.
#[derive(Debug, Clone, Default)]
pub struct InlineForm {
    /// Current content of the name field.
    pub name: String,
    /// Current content of the email field.
    pub email: String,
    /// Current content of the event field.
    pub event: String,
    /// Current status message.
    pub message: String,
}

impl InlineForm {
    /// Instantiates an empty form.
    pub fn new() -> InlineForm {
        InlineForm::default()
    }

    /// Appends a [`Registration`], recording [`DEFAULT_EVENT`] if the event field is blank.
    ///
    /// Fields are left as typed after a successful submission.
    pub fn submit<S: KvStorage>(
        &mut self,
        store: &RegistrationStore<S>,
    ) -> Result<SubmitOutcome, StoreError> {
        let event = match self.event.trim() {
            "" => DEFAULT_EVENT,
            event => event,
        };

        let Some(registration) = Registration::from_fields(&self.name, &self.email, event) else {
            self.message = FORM_INCOMPLETE.to_string();
            return Ok(SubmitOutcome::Incomplete);
        };

        store.append(registration.clone())?;

        self.message = FORM_SAVED.to_string();

        Ok(SubmitOutcome::Registered(registration))
    }

    /// Blanks the name, the email and the status message. The event field is kept.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Pre-populates the event field from an open-request control the pointer entered.
    pub fn prefill_event(&mut self, event: &str) {
        self.event = event.to_string();
    }
}
