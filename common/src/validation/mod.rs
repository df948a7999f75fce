//! Submit-time validation for the contact form.
//!
//! The form component keeps raw control values in a
//! [`ContactFormInput`](crate::model::contact::ContactFormInput) and calls
//! [`validate`] synchronously from its submit handler. Every field's rule
//! chain runs on each attempt; the first failing check per field yields that
//! field's message, collected into [`FormErrors`] for the view to render next
//! to the controls. Only a fully clean pass produces a typed
//! [`ContactRequest`](crate::model::contact::ContactRequest).

pub mod rules;

use crate::model::contact::{ContactFormInput, ContactRequest};

/// One message slot per validated control.
///
/// Optional controls (secondary phone, social handles, appointment) have no
/// slot because no rule can fail for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub user_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub age: Option<&'static str>,
    pub date_of_birth: Option<&'static str>,
    pub primary_phone: Option<&'static str>,
    pub message: Option<&'static str>,
    pub tnc: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.date_of_birth.is_none()
            && self.primary_phone.is_none()
            && self.message.is_none()
            && self.tnc.is_none()
    }
}

/// Runs every field rule against the raw input and either coerces the whole
/// record or reports the first failing message per field.
///
/// All rules run even when an early field fails, so a single submit attempt
/// surfaces every broken field at once.
pub fn validate(input: &ContactFormInput) -> Result<ContactRequest, FormErrors> {
    let user_name = rules::user_name(&input.user_name);
    let email = rules::email(&input.email);
    let age = rules::age(&input.age);
    let date_of_birth = rules::date_of_birth(&input.date_of_birth);
    let primary_phone = rules::primary_phone(&input.phone_numbers[0]);
    let message = rules::message(&input.message);
    let tnc = rules::tnc(input.tnc);

    match (user_name, email, age, date_of_birth, primary_phone, message, tnc) {
        (
            Ok(user_name),
            Ok(email),
            Ok(age),
            Ok(date_of_birth),
            Ok(primary_phone),
            Ok(message),
            Ok(tnc),
        ) => Ok(ContactRequest {
            user_name,
            email,
            age,
            date_of_birth,
            phone_numbers: [primary_phone, input.phone_numbers[1].clone()],
            social: input.social.clone(),
            message,
            tnc,
            appointment: input.appointment,
        }),
        (user_name, email, age, date_of_birth, primary_phone, message, tnc) => Err(FormErrors {
            user_name: user_name.err(),
            email: email.err(),
            age: age.err(),
            date_of_birth: date_of_birth.err(),
            primary_phone: primary_phone.err(),
            message: message.err(),
            tnc: tnc.err(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::{Appointment, Social};

    fn filled_input() -> ContactFormInput {
        ContactFormInput {
            user_name: "Johnathan".to_string(),
            email: "john@example.com".to_string(),
            age: "25".to_string(),
            date_of_birth: "1999-01-01".to_string(),
            phone_numbers: ["555-1234".to_string(), String::new()],
            social: Social::default(),
            message: "Hello".to_string(),
            tnc: true,
            appointment: Appointment::No,
        }
    }

    #[test]
    fn valid_input_coerces_into_a_full_record() {
        let record = validate(&filled_input()).expect("input should pass");
        assert_eq!(record.user_name, "Johnathan");
        assert_eq!(record.email, "john@example.com");
        assert_eq!(record.age, 25);
        assert_eq!(record.date_of_birth, "1999-01-01");
        assert_eq!(record.phone_numbers, ["555-1234".to_string(), String::new()]);
        assert_eq!(record.message, "Hello");
        assert!(record.tnc);
        assert_eq!(record.appointment, Appointment::No);
    }

    #[test]
    fn optional_fields_pass_through_untouched() {
        let mut input = filled_input();
        input.phone_numbers[1] = "555-9876".to_string();
        input.social.x = "@johnathan".to_string();
        input.social.linked_in = "https://linkedin.com/in/johnathan".to_string();
        input.appointment = Appointment::Yes;

        let record = validate(&input).expect("optional fields have no rules");
        assert_eq!(record.phone_numbers[1], "555-9876");
        assert_eq!(record.social.x, "@johnathan");
        assert_eq!(record.social.linked_in, "https://linkedin.com/in/johnathan");
        assert_eq!(record.appointment, Appointment::Yes);
    }

    #[test]
    fn untouched_form_reports_every_required_message() {
        let errors = validate(&ContactFormInput::default()).expect_err("defaults are invalid");
        assert_eq!(errors.user_name, Some("First name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.age, Some("Please enter your age"));
        assert_eq!(errors.date_of_birth, Some("Please enter your birth date"));
        assert_eq!(errors.primary_phone, Some("Please provide your Primary phone number"));
        assert_eq!(errors.message, Some("Message is required"));
        assert_eq!(errors.tnc, Some("Please accept terms and conditions"));
    }

    #[test]
    fn all_broken_fields_surface_in_one_attempt() {
        let mut input = filled_input();
        input.user_name = "Jon".to_string();
        input.email = "admin@admin.com".to_string();
        input.age = "17".to_string();

        let errors = validate(&input).expect_err("three fields are broken");
        assert_eq!(errors.user_name, Some("Minimum 4 characters required"));
        assert_eq!(errors.email, Some("Enter a different email address"));
        assert_eq!(errors.age, Some("You should be 18 years or older to contact us"));
        assert_eq!(errors.date_of_birth, None);
        assert_eq!(errors.primary_phone, None);
        assert_eq!(errors.message, None);
        assert_eq!(errors.tnc, None);
    }

    #[test]
    fn unchecked_tnc_blocks_an_otherwise_valid_form() {
        let mut input = filled_input();
        input.tnc = false;

        let errors = validate(&input).expect_err("tnc gate must hold");
        assert_eq!(errors.tnc, Some("Please accept terms and conditions"));
        assert!(errors.user_name.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn age_bounds_match_the_form_contract() {
        for (raw, expected) in [
            ("17", Some("You should be 18 years or older to contact us")),
            ("18", None),
            ("100", None),
            ("101", Some("Please enter valid age")),
        ] {
            let mut input = filled_input();
            input.age = raw.to_string();
            match validate(&input) {
                Ok(record) => {
                    assert_eq!(expected, None, "age {raw} should have been rejected");
                    assert_eq!(record.age.to_string(), raw);
                }
                Err(errors) => assert_eq!(errors.age, expected),
            }
        }
    }

    #[test]
    fn default_record_carries_the_typed_field_defaults() {
        let json = serde_json::to_value(ContactRequest::default()).expect("record serializes");
        assert_eq!(json["userName"], "");
        assert_eq!(json["age"], 0);
        assert_eq!(json["phoneNumbers"], serde_json::json!(["", ""]));
        assert_eq!(json["tnc"], false);
        assert_eq!(json["appointment"], "no");
    }

    #[test]
    fn record_serializes_with_the_form_field_names() {
        let record = validate(&filled_input()).expect("input should pass");
        let json = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(json["userName"], "Johnathan");
        assert_eq!(json["dateOfBirth"], "1999-01-01");
        assert_eq!(json["phoneNumbers"][0], "555-1234");
        assert_eq!(json["social"]["linkedIn"], "");
        assert_eq!(json["appointment"], "no");
        assert_eq!(json["tnc"], true);
    }
}
