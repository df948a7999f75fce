use serde::{Deserialize, Serialize};

/// Answer to the "Want to set up an appointment with us?" radio pair.
///
/// Serialized as the lowercase wire values `"yes"` / `"no"` carried by the
/// radio inputs themselves, so the logged record matches what the user picked.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Appointment {
    Yes,
    #[default]
    No,
}

impl Appointment {
    /// Parses a radio input value. Anything other than `"yes"` maps to `No`,
    /// mirroring the default of the untouched control.
    pub fn from_value(value: &str) -> Self {
        if value == "yes" {
            Appointment::Yes
        } else {
            Appointment::No
        }
    }
}

/// Social handles section of the contact form. Both fields are optional and
/// pass through validation untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Social {
    pub x: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
}

/// The validated contact request handed to the submit callback.
///
/// This is the typed form of the record: `age` has been coerced from the
/// numeric input's text and `date_of_birth` is a checked `YYYY-MM-DD` string.
/// Field names serialize in camelCase so the logged JSON reads the same way
/// the form labels its controls (`userName`, `dateOfBirth`, `phoneNumbers`).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub user_name: String,
    pub email: String,
    pub age: u32,
    pub date_of_birth: String,
    /// Primary phone at index 0 (required), secondary at index 1 (optional).
    pub phone_numbers: [String; 2],
    pub social: Social,
    pub message: String,
    pub tnc: bool,
    pub appointment: Appointment,
}

impl Default for ContactRequest {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            email: String::new(),
            age: 0,
            date_of_birth: String::new(),
            phone_numbers: [String::new(), String::new()],
            social: Social::default(),
            message: String::new(),
            tnc: false,
            appointment: Appointment::No,
        }
    }
}

/// The raw record owned by the rendered form for its lifetime: every text
/// control keeps exactly what the user typed, age and date included, since
/// that is what the DOM hands back. Coercion to [`ContactRequest`] happens
/// only inside [`crate::validation::validate`] on a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormInput {
    pub user_name: String,
    pub email: String,
    /// Raw text of the number input. Empty while untouched; the typed
    /// default of `0` exists only on the validated record.
    pub age: String,
    pub date_of_birth: String,
    pub phone_numbers: [String; 2],
    pub social: Social,
    pub message: String,
    pub tnc: bool,
    pub appointment: Appointment,
}

impl Default for ContactFormInput {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            email: String::new(),
            age: String::new(),
            date_of_birth: String::new(),
            phone_numbers: [String::new(), String::new()],
            social: Social::default(),
            message: String::new(),
            tnc: false,
            appointment: Appointment::No,
        }
    }
}
