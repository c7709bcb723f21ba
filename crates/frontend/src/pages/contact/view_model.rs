use super::flow::{ContactFlow, Notice};
use super::model::{self, FAILURE_NOTICE_MS};
use contracts::contact::{ContactField, ContactSubmission};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: RwSignal<ContactSubmission>,
    pub flow: RwSignal<ContactFlow>,
}

impl ContactViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactSubmission::default()),
            flow: RwSignal::new(ContactFlow::new()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.flow.with(ContactFlow::is_submitting)
    }

    pub fn is_submitted(&self) -> bool {
        self.flow.with(ContactFlow::is_submitted)
    }

    pub fn error_for(&self, field: ContactField) -> Option<String> {
        self.flow.with(|f| f.error_for(field).map(str::to_string))
    }

    pub fn notice(&self) -> Option<Notice> {
        self.flow.with(|f| f.notice().cloned())
    }

    pub fn field_value(&self, field: ContactField) -> String {
        self.form.with(|f| match field {
            ContactField::Name => f.name.clone(),
            ContactField::Email => f.email.clone(),
            ContactField::Company => f.company.clone(),
            ContactField::Role => f.role.clone().unwrap_or_default(),
            ContactField::Message => f.message.clone(),
            ContactField::Consent => String::new(),
        })
    }

    /// Stores an edited text field and clears its error
    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|f| match field {
            ContactField::Name => f.name = value,
            ContactField::Email => f.email = value,
            ContactField::Company => f.company = value,
            ContactField::Role => f.role = Some(value),
            ContactField::Message => f.message = value,
            ContactField::Consent => {}
        });
        self.flow.update(|f| f.clear_error(field));
    }

    pub fn set_consent(&self, consent: bool) {
        self.form.update(|f| f.consent = consent);
        self.flow.update(|f| f.clear_error(ContactField::Consent));
    }

    /// Validate and send the form
    pub fn submit_command(&self) {
        let form = self.form.get_untracked().normalized();
        let ticket = match self.flow.try_update(|f| f.submit(&form)).flatten() {
            Some(ticket) => ticket,
            None => return,
        };

        let flow = self.flow;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::submit_contact(&form).await;
            match &outcome {
                Ok(receipt) => log::info!("Contact request accepted: {}", receipt.reference),
                Err(e) => log::error!("Contact request failed: {}", e),
            }
            let failed = outcome.is_err();

            // None: страница уже закрыта, результат никому не нужен
            let applied = flow
                .try_update(|f| f.resolve(ticket, outcome))
                .unwrap_or(false);
            if applied && failed {
                TimeoutFuture::new(FAILURE_NOTICE_MS).await;
                flow.try_update(|f| f.dismiss_failure(ticket));
            }
        });
    }

    /// Start over with an empty form
    pub fn reset_command(&self) {
        self.form.set(ContactSubmission::default());
        self.flow.update(ContactFlow::reset);
    }
}

impl Default for ContactViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(vm: &ContactViewModel, field: ContactField) -> bool {
        vm.flow.with_untracked(|f| f.error_for(field).is_some())
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let vm = ContactViewModel::new();
        vm.flow.update(|f| {
            f.submit(&ContactSubmission::default());
        });
        assert!(has_error(&vm, ContactField::Name));

        vm.set_field(ContactField::Name, "Ana".to_string());
        assert_eq!(vm.form.with_untracked(|f| f.name.clone()), "Ana");
        assert!(!has_error(&vm, ContactField::Name));
        assert!(has_error(&vm, ContactField::Email));
    }

    #[test]
    fn test_invalid_submit_does_not_start_request() {
        let vm = ContactViewModel::new();
        vm.set_field(ContactField::Name, "Ana".to_string());
        vm.submit_command();
        assert!(!vm.flow.with_untracked(ContactFlow::is_submitting));
        assert!(has_error(&vm, ContactField::Consent));
    }

    #[test]
    fn test_reset_clears_form() {
        let vm = ContactViewModel::new();
        vm.set_field(ContactField::Company, "Heritage".to_string());
        vm.set_consent(true);
        vm.reset_command();
        assert_eq!(vm.form.get_untracked(), ContactSubmission::default());
        assert_eq!(vm.flow.get_untracked(), ContactFlow::new());
    }
}
