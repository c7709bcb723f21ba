use serde::{Deserialize, Serialize};

/// Payload of `POST /api/contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub message: String,
    pub consent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Role,
    Message,
    Consent,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Role => "role",
            ContactField::Message => "message",
            ContactField::Consent => "consent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    fn new(field: ContactField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Successful submission acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub reference: String,
    /// RFC 3339 timestamp
    pub received_at: String,
}

/// Body of a 422 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRejection {
    pub errors: Vec<FieldError>,
}

pub const MAX_MESSAGE_LEN: usize = 5000;

/// Loose shape check: `local@domain.tld`, no whitespace
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

impl ContactSubmission {
    /// Checks required fields. All problems are reported, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Name, "Please enter your name"));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::new(
                ContactField::Email,
                "Please enter your email",
            ));
        } else if !looks_like_email(&self.email) {
            errors.push(FieldError::new(
                ContactField::Email,
                "Please enter a valid email address",
            ));
        }
        if self.company.trim().is_empty() {
            errors.push(FieldError::new(
                ContactField::Company,
                "Please enter your winery or company",
            ));
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::new(
                ContactField::Message,
                "Please tell us how we can help",
            ));
        } else if self.message.chars().count() > MAX_MESSAGE_LEN {
            errors.push(FieldError::new(ContactField::Message, "Message is too long"));
        }
        if !self.consent {
            errors.push(FieldError::new(
                ContactField::Consent,
                "Please agree to be contacted about your inquiry",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed and a blank role dropped
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            role: self
                .role
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
            consent: self.consent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".into(),
            email: "ana@winery.com".into(),
            company: "Coastal Cellars".into(),
            role: None,
            message: "Tell me about forecasting".into(),
            consent: true,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<ContactField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_role_is_optional() {
        let mut s = valid();
        s.role = Some("   ".into());
        assert!(s.validate().is_ok());
        assert_eq!(s.normalized().role, None);
    }

    #[test]
    fn test_each_required_field_blocks() {
        let cases: Vec<(fn(&mut ContactSubmission), ContactField)> = vec![
            (|s| s.name = " ".into(), ContactField::Name),
            (|s| s.email.clear(), ContactField::Email),
            (|s| s.company.clear(), ContactField::Company),
            (|s| s.message = "\n".into(), ContactField::Message),
            (|s| s.consent = false, ContactField::Consent),
        ];
        for (mutate, field) in cases {
            let mut s = valid();
            mutate(&mut s);
            let errors = s.validate().unwrap_err();
            assert_eq!(fields(&errors), vec![field]);
        }
    }

    #[test]
    fn test_empty_form_reports_all_in_order() {
        let errors = ContactSubmission::default().validate().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Company,
                ContactField::Message,
                ContactField::Consent,
            ]
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email(" a.b@c.d.e "));
        assert!(!looks_like_email("ab.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@bco"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b@c.co"));
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["company"], "Coastal Cellars");
        assert!(json.get("role").is_none());

        let rejection = ContactRejection {
            errors: vec![FieldError::new(ContactField::Email, "bad")],
        };
        let json = serde_json::to_string(&rejection).unwrap();
        assert_eq!(json, r#"{"errors":[{"field":"email","message":"bad"}]}"#);
    }
}
