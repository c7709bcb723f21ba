use contracts::contact::{ContactField, ContactReceipt, ContactSubmission, FieldError};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal until `reset`
    Submitted,
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Server refused these fields (HTTP 422)
    Rejected(Vec<FieldError>),
    /// Transport, timeout or server failure
    Failed(String),
}

impl From<String> for SubmitError {
    fn from(message: String) -> Self {
        SubmitError::Failed(message)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Submission rejected: {}", fields.join(", "))
            }
            SubmitError::Failed(message) => f.write_str(message),
        }
    }
}

/// Identity of the one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
    ticket: Ticket,
}

impl Notice {
    fn success(ticket: Ticket) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message sent successfully!",
            description: "We'll get back to you within 24 hours.",
            ticket,
        }
    }

    fn failure(ticket: Ticket) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error sending message",
            description: "Please try again or contact us directly.",
            ticket,
        }
    }
}

/// Contact form submission state.
///
/// `Idle -> Submitting -> Submitted`, or back to `Idle` when the request
/// fails. Results are matched to the request by [`Ticket`], so a result that
/// arrives after `reset` (or for an older request) is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFlow {
    status: SubmissionStatus,
    errors: Vec<FieldError>,
    notice: Option<Notice>,
    receipt: Option<ContactReceipt>,
    current: Option<Ticket>,
    issued: u64,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn receipt(&self) -> Option<&ContactReceipt> {
        self.receipt.as_ref()
    }

    /// Validates `form` and, if it passes, starts a submission.
    ///
    /// Returns the ticket to resolve the request with. `None` when the form
    /// is invalid (errors are recorded) or a submission is already running
    /// or done.
    pub fn submit(&mut self, form: &ContactSubmission) -> Option<Ticket> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }

        if let Err(errors) = form.validate() {
            self.errors = errors;
            return None;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.errors.clear();
        self.notice = None;
        self.current = Some(ticket);
        self.status = SubmissionStatus::Submitting;
        Some(ticket)
    }

    /// Applies the result of the request identified by `ticket`.
    /// Returns false if the ticket is stale and nothing changed.
    /// Fields rejected by the server are shown like local validation errors.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<ContactReceipt, SubmitError>,
    ) -> bool {
        if self.status != SubmissionStatus::Submitting || self.current != Some(ticket) {
            return false;
        }

        self.current = None;
        match outcome {
            Ok(receipt) => {
                self.status = SubmissionStatus::Submitted;
                self.receipt = Some(receipt);
                self.notice = Some(Notice::success(ticket));
            }
            Err(error) => {
                if let SubmitError::Rejected(errors) = error {
                    self.errors = errors;
                }
                self.status = SubmissionStatus::Idle;
                self.notice = Some(Notice::failure(ticket));
            }
        }
        true
    }

    /// Back to a fresh `Idle`; an outstanding ticket can no longer resolve
    pub fn reset(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.errors.clear();
        self.notice = None;
        self.receipt = None;
        self.current = None;
    }

    /// Field was edited
    pub fn clear_error(&mut self, field: ContactField) {
        self.errors.retain(|e| e.field != field);
    }

    /// Removes the failure notice raised by `ticket`, if it is still shown
    pub fn dismiss_failure(&mut self, ticket: Ticket) {
        if matches!(&self.notice, Some(n) if n.kind == NoticeKind::Failure && n.ticket == ticket) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".into(),
            email: "ana@winery.com".into(),
            company: "Coastal Cellars".into(),
            role: Some("Winemaker".into()),
            message: "We want to try forecasting".into(),
            consent: true,
        }
    }

    fn receipt() -> ContactReceipt {
        ContactReceipt {
            reference: "ref-1".into(),
            received_at: "2024-01-15T09:30:00Z".into(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let flow = ContactFlow::new();
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(flow.errors().is_empty());
        assert!(flow.notice().is_none());
    }

    #[test]
    fn test_invalid_form_stays_idle_with_errors() {
        let mut flow = ContactFlow::new();
        let mut form = valid_form();
        form.email = "not-an-email".into();

        assert_eq!(flow.submit(&form), None);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(flow.error_for(ContactField::Email).is_some());
        assert!(flow.error_for(ContactField::Name).is_none());
    }

    #[test]
    fn test_missing_consent_blocks_submission() {
        let mut flow = ContactFlow::new();
        let mut form = valid_form();
        form.consent = false;

        assert_eq!(flow.submit(&form), None);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(flow.error_for(ContactField::Consent).is_some());
    }

    #[test]
    fn test_success_path() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");
        assert!(flow.is_submitting());

        assert!(flow.resolve(ticket, Ok(receipt())));
        assert!(flow.is_submitted());
        assert_eq!(flow.notice().map(|n| n.kind), Some(NoticeKind::Success));
        assert_eq!(flow.receipt(), Some(&receipt()));
    }

    #[test]
    fn test_failure_returns_to_idle_with_distinct_notice() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");

        let timed_out = SubmitError::Failed("Request timed out".into());
        assert!(flow.resolve(ticket, Err(timed_out)));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        let notice = flow.notice().expect("failure notice");
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_ne!(notice.title, Notice::success(ticket).title);

        // can try again
        assert!(flow.submit(&valid_form()).is_some());
    }

    #[test]
    fn test_server_rejection_marks_fields() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");
        let rejected = vec![FieldError {
            field: ContactField::Email,
            message: "Please enter a valid email address".into(),
        }];

        assert!(flow.resolve(ticket, Err(SubmitError::Rejected(rejected))));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(
            flow.error_for(ContactField::Email),
            Some("Please enter a valid email address")
        );
        assert!(flow.error_for(ContactField::Name).is_none());
        assert_eq!(flow.notice().map(|n| n.kind), Some(NoticeKind::Failure));

        flow.clear_error(ContactField::Email);
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn test_submit_error_messages() {
        let rejected = SubmitError::Rejected(vec![
            FieldError {
                field: ContactField::Name,
                message: "a".into(),
            },
            FieldError {
                field: ContactField::Consent,
                message: "b".into(),
            },
        ]);
        assert_eq!(rejected.to_string(), "Submission rejected: name, consent");
        assert_eq!(
            SubmitError::from("Request timed out".to_string()).to_string(),
            "Request timed out"
        );
    }

    #[test]
    fn test_second_submit_while_submitting_is_ignored() {
        let mut flow = ContactFlow::new();
        let first = flow.submit(&valid_form());
        assert!(first.is_some());
        assert_eq!(flow.submit(&valid_form()), None);
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_submit_after_submitted_is_ignored() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");
        flow.resolve(ticket, Ok(receipt()));

        assert_eq!(flow.submit(&valid_form()), None);
        assert!(flow.is_submitted());
    }

    #[test]
    fn test_stale_ticket_after_reset_is_ignored() {
        let mut flow = ContactFlow::new();
        let stale = flow.submit(&valid_form()).expect("valid form");
        flow.reset();

        assert!(!flow.resolve(stale, Ok(receipt())));
        assert_eq!(flow.status(), SubmissionStatus::Idle);

        let fresh = flow.submit(&valid_form()).expect("valid form");
        assert_ne!(stale, fresh);
        assert!(!flow.resolve(stale, Err(SubmitError::Failed("late".into()))));
        assert!(flow.is_submitting());
        assert!(flow.resolve(fresh, Ok(receipt())));
    }

    #[test]
    fn test_resolve_twice_applies_once() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");
        assert!(flow.resolve(ticket, Ok(receipt())));
        assert!(!flow.resolve(ticket, Err(SubmitError::Failed("again".into()))));
        assert!(flow.is_submitted());
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut flow = ContactFlow::new();
        flow.submit(&ContactSubmission::default());
        assert!(flow.error_for(ContactField::Name).is_some());

        flow.clear_error(ContactField::Name);
        assert!(flow.error_for(ContactField::Name).is_none());
        assert!(flow.error_for(ContactField::Email).is_some());
    }

    #[test]
    fn test_failure_notice_dismissal() {
        let mut flow = ContactFlow::new();
        let first = flow.submit(&valid_form()).expect("valid form");
        flow.resolve(first, Err(SubmitError::Failed("boom".into())));

        let second = flow.submit(&valid_form()).expect("valid form");
        flow.resolve(second, Err(SubmitError::Failed("boom".into())));

        // timer of the first failure must not hide the second one
        flow.dismiss_failure(first);
        assert!(flow.notice().is_some());

        flow.dismiss_failure(second);
        assert!(flow.notice().is_none());
    }

    #[test]
    fn test_success_notice_is_not_auto_dismissed() {
        let mut flow = ContactFlow::new();
        let ticket = flow.submit(&valid_form()).expect("valid form");
        flow.resolve(ticket, Ok(receipt()));

        flow.dismiss_failure(ticket);
        assert_eq!(flow.notice().map(|n| n.kind), Some(NoticeKind::Success));
    }
}
