//! # Expense draft and repeat policy
//!
//! [`ExpenseDraft`] is exactly what the creation form holds: free-form strings
//! as typed, plus the selected [`RepeatOption`]. It can represent half-filled
//! states (installments picked, no count yet) because the user passes through
//! them while typing.
//!
//! [`NewExpense`] is what gets sent. Its [`RepeatPolicy`] is a tagged variant,
//! so an installment plan without a frequency or with a zero count cannot be
//! built. Converting a draft into a request is the only place the two meet:
//! [`ExpenseDraft::to_request`].
//!
//! Wire shape of a request (camelCase, matching the backend's form fields):
//!
//! ```json
//! { "amount": "120.00", "description": "Rent", "expirationDate": "2025-01-01",
//!   "repeatOption": "installments", "frequency": "monthly", "numberOfInstallments": 12 }
//! ```
//!
//! `frequency` and `numberOfInstallments` only appear for installment plans.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The radio choice on the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepeatOption {
    #[default]
    DoNotRepeat,
    Always,
    Installments,
}

impl RepeatOption {
    pub const ALL: [RepeatOption; 3] = [
        RepeatOption::DoNotRepeat,
        RepeatOption::Always,
        RepeatOption::Installments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RepeatOption::DoNotRepeat => "doNotRepeat",
            RepeatOption::Always => "always",
            RepeatOption::Installments => "installments",
        }
    }

    /// Whether the frequency and installment-count inputs are shown.
    pub fn shows_installment_fields(self) -> bool {
        self == RepeatOption::Installments
    }
}

impl fmt::Display for RepeatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatOption {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepeatOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// How often an installment falls due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Monthly,
    SemiAnnually,
    Annually,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [
        Frequency::Monthly,
        Frequency::SemiAnnually,
        Frequency::Annually,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::SemiAnnually => "semiAnnually",
            Frequency::Annually => "annually",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// Why a draft cannot become a request yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Choose how often the installments are due.")]
    MissingFrequency,
    #[error("Enter a whole number of installments greater than zero.")]
    InvalidInstallmentCount(String),
}

impl DraftError {
    /// Form field the error is displayed under.
    pub fn field(&self) -> &'static str {
        match self {
            DraftError::MissingFrequency => "frequency",
            DraftError::InvalidInstallmentCount(_) => "numberOfInstallments",
        }
    }
}

/// Whether and how an expense recurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "repeatOption")]
pub enum RepeatPolicy {
    #[serde(rename = "doNotRepeat")]
    NoRepeat,
    #[serde(rename = "always")]
    Always,
    #[serde(rename = "installments", rename_all = "camelCase")]
    Installments {
        frequency: Frequency,
        number_of_installments: NonZeroU32,
    },
}

impl RepeatPolicy {
    pub fn option(&self) -> RepeatOption {
        match self {
            RepeatPolicy::NoRepeat => RepeatOption::DoNotRepeat,
            RepeatPolicy::Always => RepeatOption::Always,
            RepeatPolicy::Installments { .. } => RepeatOption::Installments,
        }
    }
}

/// Create-expense request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: String,
    pub description: String,
    pub expiration_date: String,
    #[serde(flatten)]
    pub repeat: RepeatPolicy,
}

/// Expense form contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Decimal string, e.g. `"50.00"`.
    pub amount: String,
    pub description: String,
    /// ISO date from the date input, e.g. `"2025-01-01"`.
    pub expiration_date: String,
    pub repeat_option: RepeatOption,
    pub frequency: Option<Frequency>,
    /// Raw text of the count input.
    pub number_of_installments: String,
}

impl ExpenseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows_installment_fields(&self) -> bool {
        self.repeat_option.shows_installment_fields()
    }

    /// Resolve the repeat choice into a policy. Installment inputs are only
    /// read when installments are selected.
    pub fn repeat_policy(&self) -> Result<RepeatPolicy, DraftError> {
        match self.repeat_option {
            RepeatOption::DoNotRepeat => Ok(RepeatPolicy::NoRepeat),
            RepeatOption::Always => Ok(RepeatPolicy::Always),
            RepeatOption::Installments => {
                let frequency = self.frequency.ok_or(DraftError::MissingFrequency)?;
                let raw = self.number_of_installments.trim();
                let number_of_installments = raw
                    .parse::<NonZeroU32>()
                    .map_err(|_| DraftError::InvalidInstallmentCount(raw.to_string()))?;
                Ok(RepeatPolicy::Installments {
                    frequency,
                    number_of_installments,
                })
            }
        }
    }

    /// Build the outbound request. Amount, description and date are passed
    /// through untouched; the backend owns their validation.
    pub fn to_request(&self) -> Result<NewExpense, DraftError> {
        Ok(NewExpense {
            amount: self.amount.clone(),
            description: self.description.clone(),
            expiration_date: self.expiration_date.clone(),
            repeat: self.repeat_policy()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_draft() -> ExpenseDraft {
        ExpenseDraft {
            amount: "50.00".to_string(),
            description: "Test".to_string(),
            expiration_date: "2025-01-01".to_string(),
            ..ExpenseDraft::default()
        }
    }

    #[test]
    fn test_installment_fields_visible_only_for_installments() {
        let mut draft = ExpenseDraft::new();
        for option in RepeatOption::ALL {
            draft.repeat_option = option;
            assert_eq!(
                draft.shows_installment_fields(),
                option == RepeatOption::Installments
            );
        }
    }

    #[test]
    fn test_no_repeat_payload_has_four_fields() {
        let request = base_draft().to_request().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "amount": "50.00",
                "description": "Test",
                "expirationDate": "2025-01-01",
                "repeatOption": "doNotRepeat",
            })
        );
    }

    #[test]
    fn test_installments_payload_has_six_fields() {
        let draft = ExpenseDraft {
            repeat_option: RepeatOption::Installments,
            frequency: Some(Frequency::Monthly),
            number_of_installments: "12".to_string(),
            ..base_draft()
        };
        let body = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "amount": "50.00",
                "description": "Test",
                "expirationDate": "2025-01-01",
                "repeatOption": "installments",
                "frequency": "monthly",
                "numberOfInstallments": 12,
            })
        );
    }

    #[test]
    fn test_stale_installment_inputs_are_dropped() {
        let draft = ExpenseDraft {
            repeat_option: RepeatOption::Always,
            frequency: Some(Frequency::Annually),
            number_of_installments: "3".to_string(),
            ..base_draft()
        };
        let body = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(body["repeatOption"], "always");
        assert!(body.get("frequency").is_none());
        assert!(body.get("numberOfInstallments").is_none());
    }

    #[test]
    fn test_incomplete_installment_plan_is_rejected() {
        let mut draft = ExpenseDraft {
            repeat_option: RepeatOption::Installments,
            ..base_draft()
        };
        assert_eq!(draft.to_request(), Err(DraftError::MissingFrequency));

        draft.frequency = Some(Frequency::SemiAnnually);
        for raw in ["", "0", "-2", "1.5", "twelve"] {
            draft.number_of_installments = raw.to_string();
            let err = draft.to_request().unwrap_err();
            assert_eq!(err.field(), "numberOfInstallments");
        }

        draft.number_of_installments = " 6 ".to_string();
        assert_eq!(
            draft.repeat_policy(),
            Ok(RepeatPolicy::Installments {
                frequency: Frequency::SemiAnnually,
                number_of_installments: NonZeroU32::new(6).unwrap(),
            })
        );
    }

    #[test]
    fn test_option_strings() {
        for option in RepeatOption::ALL {
            assert_eq!(option.as_str().parse::<RepeatOption>(), Ok(option));
        }
        for frequency in Frequency::ALL {
            assert_eq!(frequency.as_str().parse::<Frequency>(), Ok(frequency));
        }
        assert!("weekly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_policy_reports_its_option() {
        let draft = ExpenseDraft {
            repeat_option: RepeatOption::Installments,
            frequency: Some(Frequency::Annually),
            number_of_installments: "2".to_string(),
            ..base_draft()
        };
        assert_eq!(
            draft.repeat_policy().unwrap().option(),
            RepeatOption::Installments
        );
    }
}
