//! # Form state for the auth and expense screens
//!
//! Each form follows the same two-step submission:
//!
//! 1. `begin_submit` snapshots the request body and marks the form as
//!    processing. It returns `None` when a request is already in flight, so a
//!    page never has two outstanding submissions.
//! 2. `complete` is called with the outcome once the request settles.
//!
//! Password inputs are cleared in `complete` regardless of the outcome. The
//! expense draft is discarded on success and kept on failure so the user can
//! fix the reported fields.

use serde::Serialize;

use crate::expense::{ExpenseDraft, NewExpense};
use crate::validation::FieldErrors;

/// Shared in-flight flag and last reported errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub processing: bool,
    pub errors: FieldErrors,
}

impl FormStatus {
    /// Enter the processing state; `false` if already processing.
    pub fn begin(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        self.errors.clear();
        true
    }

    pub fn finish(&mut self, outcome: Result<(), FieldErrors>) {
        self.processing = false;
        self.errors = outcome.err().unwrap_or_default();
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Render the password input as plain text. Display only.
    pub show_password: bool,
    pub status: FormStatus,
}

impl LoginForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn begin_submit(&mut self) -> Option<LoginCredentials> {
        if !self.status.begin() {
            return None;
        }
        Some(LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn complete(&mut self, outcome: Result<(), FieldErrors>) {
        self.password.clear();
        self.status.finish(outcome);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub show_password: bool,
    pub status: FormStatus,
}

impl RegisterForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn begin_submit(&mut self) -> Option<Registration> {
        if !self.status.begin() {
            return None;
        }
        Some(Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        })
    }

    pub fn complete(&mut self, outcome: Result<(), FieldErrors>) {
        self.password.clear();
        self.password_confirmation.clear();
        self.status.finish(outcome);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub draft: ExpenseDraft,
    pub status: FormStatus,
    /// Set after a successful submission until the user edits again.
    pub saved: bool,
}

impl ExpenseForm {
    /// Apply an edit to the draft.
    pub fn edit(&mut self, change: impl FnOnce(&mut ExpenseDraft)) {
        change(&mut self.draft);
        self.saved = false;
    }

    /// Snapshot the request. An incomplete installment plan is reported on
    /// its field and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<NewExpense> {
        if self.status.processing {
            return None;
        }
        match self.draft.to_request() {
            Ok(request) => {
                self.status.begin();
                self.saved = false;
                Some(request)
            }
            Err(err) => {
                self.status.errors = [(err.field(), err.to_string())].into_iter().collect();
                None
            }
        }
    }

    pub fn complete(&mut self, outcome: Result<(), FieldErrors>) {
        self.saved = outcome.is_ok();
        if self.saved {
            self.draft = ExpenseDraft::default();
        }
        self.status.finish(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{Frequency, RepeatOption};

    #[test]
    fn test_login_password_cleared_on_success() {
        let mut form = LoginForm {
            email: "jean@example.com".to_string(),
            password: "secret".to_string(),
            ..LoginForm::default()
        };
        let credentials = form.begin_submit().unwrap();
        assert_eq!(credentials.password, "secret");
        assert!(form.status.processing);

        form.complete(Ok(()));
        assert!(form.password.is_empty());
        assert_eq!(form.email, "jean@example.com");
        assert!(!form.status.processing);
    }

    #[test]
    fn test_login_password_cleared_on_failure() {
        let mut form = LoginForm {
            email: "jean@example.com".to_string(),
            password: "wrong".to_string(),
            ..LoginForm::default()
        };
        form.begin_submit().unwrap();
        form.complete(Err(FieldErrors::from_iter([(
            "email",
            "These credentials do not match our records.",
        )])));

        assert!(form.password.is_empty());
        assert_eq!(
            form.status.error("email"),
            Some("These credentials do not match our records.")
        );
    }

    #[test]
    fn test_second_submit_ignored_while_processing() {
        let mut form = LoginForm::default();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.complete(Ok(()));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_password_visibility_does_not_change_credentials() {
        let mut form = LoginForm {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            ..LoginForm::default()
        };
        form.toggle_password_visibility();
        assert!(form.show_password);
        let credentials = form.begin_submit().unwrap();
        assert_eq!(
            credentials,
            LoginCredentials {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            }
        );
    }

    #[test]
    fn test_register_clears_both_passwords() {
        let mut form = RegisterForm {
            name: "Jean".to_string(),
            email: "jean@example.com".to_string(),
            password: "hunter22".to_string(),
            password_confirmation: "hunter22".to_string(),
            ..RegisterForm::default()
        };
        let registration = form.begin_submit().unwrap();
        let body = serde_json::to_value(&registration).unwrap();
        assert_eq!(body["password_confirmation"], "hunter22");

        form.complete(Err(FieldErrors::form("offline")));
        assert!(form.password.is_empty());
        assert!(form.password_confirmation.is_empty());
        assert_eq!(form.name, "Jean");
    }

    #[test]
    fn test_expense_draft_discarded_after_success() {
        let mut form = ExpenseForm::default();
        form.edit(|draft| {
            draft.amount = "10".to_string();
            draft.description = "Coffee".to_string();
            draft.expiration_date = "2025-02-01".to_string();
        });
        let request = form.begin_submit().unwrap();
        assert_eq!(request.description, "Coffee");

        form.complete(Ok(()));
        assert_eq!(form.draft, ExpenseDraft::default());
        assert!(form.saved);
    }

    #[test]
    fn test_expense_draft_kept_after_failure() {
        let mut form = ExpenseForm::default();
        form.edit(|draft| draft.amount = "abc".to_string());
        form.begin_submit().unwrap();
        form.complete(Err(FieldErrors::from_iter([(
            "amount",
            "The amount must be a number.",
        )])));

        assert_eq!(form.draft.amount, "abc");
        assert!(!form.saved);
        assert!(form.status.errors.has("amount"));
    }

    #[test]
    fn test_incomplete_plan_reported_locally() {
        let mut form = ExpenseForm::default();
        form.edit(|draft| {
            draft.repeat_option = RepeatOption::Installments;
            draft.frequency = Some(Frequency::Monthly);
        });
        assert!(form.begin_submit().is_none());
        assert!(!form.status.processing);
        assert!(form.status.errors.has("numberOfInstallments"));
    }
}
