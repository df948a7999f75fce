//! Component state for the contact form.
//!
//! Holds the raw control values and the per-field messages produced by the
//! latest submit attempt. Fields are `pub` because they are accessed by the
//! `view` and `update` modules.

use common::model::contact::ContactFormInput;
use common::validation::FormErrors;

/// Main state container for the `ContactFormComponent`.
pub struct ContactFormComponent {
    /// Raw control values, exactly as typed. Owned by this instance and
    /// dropped with it; nothing is shared across components.
    pub values: ContactFormInput,

    /// First failing message per field from the latest submit attempt.
    /// Empty until the first attempt, so untouched controls render pristine.
    pub errors: FormErrors,
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self {
            values: ContactFormInput::default(),
            errors: FormErrors::default(),
        }
    }

    /// Live enablement of the submit button, recomputed from the current
    /// `tnc` value on every render. Unchecking the box re-disables the
    /// button immediately; the same constraint is re-checked as a validation
    /// rule on submit.
    pub fn can_submit(&self) -> bool {
        self.values.tnc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pristine_with_defaults() {
        let component = ContactFormComponent::new();
        assert_eq!(component.values, ContactFormInput::default());
        assert!(component.errors.is_empty());
        assert!(!component.values.tnc);
    }

    #[test]
    fn submit_enablement_tracks_tnc() {
        let mut component = ContactFormComponent::new();
        assert!(!component.can_submit());
        component.values.tnc = true;
        assert!(component.can_submit());
        component.values.tnc = false;
        assert!(!component.can_submit());
    }
}
