//! Update function for the contact form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ContactFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Input messages overwrite the raw control value; nothing validates while
//!   the user types.
//! - `Msg::Submit` runs the whole rule set synchronously. Failures land in
//!   `component.errors` for the view to display; a clean pass clears them,
//!   logs the record to the console as JSON, and fires `on_submit` once.

use gloo_console::log;
use yew::prelude::*;

use common::validation;

use super::messages::Msg;
use super::state::ContactFormComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Returns `true` to re-render the view. Every message re-renders: even a
///   plain text edit can flip the submit button or clear-worthy error text
///   on a later render.
pub fn update(
    component: &mut ContactFormComponent,
    ctx: &Context<ContactFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateUserName(value) => {
            component.values.user_name = value;
            true
        }
        Msg::UpdateEmail(value) => {
            component.values.email = value;
            true
        }
        Msg::UpdateAge(value) => {
            component.values.age = value;
            true
        }
        Msg::UpdateDateOfBirth(value) => {
            component.values.date_of_birth = value;
            true
        }
        Msg::UpdatePhoneNumber(index, value) => {
            if let Some(slot) = component.values.phone_numbers.get_mut(index) {
                *slot = value;
            }
            true
        }
        Msg::UpdateSocialX(value) => {
            component.values.social.x = value;
            true
        }
        Msg::UpdateSocialLinkedIn(value) => {
            component.values.social.linked_in = value;
            true
        }
        Msg::UpdateMessage(value) => {
            component.values.message = value;
            true
        }
        Msg::SetTnc(accepted) => {
            // Re-render matters here: the submit button enablement is
            // derived from this value in the view.
            component.values.tnc = accepted;
            true
        }
        Msg::SetAppointment(choice) => {
            component.values.appointment = choice;
            true
        }
        Msg::Submit => {
            match validation::validate(&component.values) {
                Ok(record) => {
                    component.errors = Default::default();
                    log!("form submitted!!");
                    match serde_json::to_string_pretty(&record) {
                        Ok(json) => log!(json),
                        Err(err) => log!(format!("could not serialize record: {err}")),
                    }
                    ctx.props().on_submit.emit(record);
                }
                Err(errors) => {
                    component.errors = errors;
                }
            }
            true
        }
    }
}
