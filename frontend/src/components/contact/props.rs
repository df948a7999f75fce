//! Defines the properties for the `ContactFormComponent`.
//!
//! The form is self-contained: everything it needs lives in its own state,
//! so the only property is the callback fired with the validated record.

use common::model::contact::ContactRequest;
use yew::prelude::*;

/// Properties for the `ContactFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    /// Invoked exactly once per successful submit attempt, with the full
    /// validated record (untouched optional fields included).
    ///
    /// Defaults to a no-op so the form can be mounted standalone; the record
    /// is logged to the browser console either way.
    #[prop_or_default]
    pub on_submit: Callback<ContactRequest>,
}
