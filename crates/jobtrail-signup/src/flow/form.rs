/*
[INPUT]:  Raw signup form fields
[OUTPUT]: Validated registration payload and customer contact details
[POS]:    Flow layer - local input validation (never reaches the network)
[UPDATE]: When form fields or validation rules change
*/

use jobtrail_adapter::{CustomerInfo, RegisterRequest};

use super::error::FlowError;

const MIN_PASSWORD_LEN: usize = 6;

/// Step-1 form data. Lives only until submission succeeds; the password
/// confirmation never leaves this struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    /// Validate locally. Required fields, minimum password length, and the
    /// password/confirmation match, in that order.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.name.trim().is_empty() {
            return Err(FlowError::Validation("Full name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(FlowError::Validation("Email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(FlowError::Validation("Password is required".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FlowError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(FlowError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }

    /// The registration body. The confirmation field is deliberately
    /// absent.
    pub(crate) fn registration_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Contact details handed to the payment gateway for prefill
    pub(crate) fn customer(&self) -> CustomerInfo {
        CustomerInfo {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm::new("Asha", "asha@example.com", "hunter22", "hunter22")
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_is_validation_error() {
        let mut form = valid_form();
        form.confirm_password = "hunter23".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            FlowError::Validation("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let form = SignupForm::new("Asha", "asha@example.com", "abc", "abc");
        assert!(matches!(form.validate(), Err(FlowError::Validation(_))));
    }

    #[test]
    fn test_required_fields() {
        for field in ["name", "email", "password"] {
            let mut form = valid_form();
            match field {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                _ => {
                    form.password.clear();
                    form.confirm_password.clear();
                }
            }
            assert!(matches!(form.validate(), Err(FlowError::Validation(_))), "{field}");
        }
    }

    #[test]
    fn test_registration_request_drops_confirmation() {
        let req = valid_form().registration_request();
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("confirmPassword").is_none());
        assert!(json.get("confirm_password").is_none());
        assert_eq!(json["password"], "hunter22");
    }
}
