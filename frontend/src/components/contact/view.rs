//! View rendering for the contact form component.
//!
//! One labeled control per field of the record, each followed by the error
//! message slot for that field. Error text appears only after a submit
//! attempt has filled `component.errors`; typing never triggers validation.
//!
//! Notes
//! - The `<form>` carries `novalidate` so the browser's built-in checks
//!   never race the rule set in `common::validation`.
//! - The submit button's `disabled` state is derived from the live `tnc`
//!   value on every render, on top of the `tnc` validation rule.

use common::model::contact::Appointment;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactFormComponent;

/// Main view function for the contact form component.
/// Renders the full control list in the order the record declares its fields.
pub fn view(component: &ContactFormComponent, ctx: &Context<ContactFormComponent>) -> Html {
    let link = ctx.link();
    let values = &component.values;
    let errors = &component.errors;

    html! {
        <div class="contact-form-wrapper">
            <form
                class="contact-form"
                novalidate=true
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <h2 class="contact-form-title">{"Contact Us"}</h2>

                { text_field("userName", "First Name", "text", "Enter your name",
                    &values.user_name, errors.user_name,
                    on_text_input(link, Msg::UpdateUserName)) }

                { text_field("email", "Email", "email", "Enter your email",
                    &values.email, errors.email,
                    on_text_input(link, Msg::UpdateEmail)) }

                { text_field("age", "Enter Age", "number", "Enter your Age",
                    &values.age, errors.age,
                    on_text_input(link, Msg::UpdateAge)) }

                { text_field("dateOfBirth", "Date of Birth", "date", "Enter your Date of birth",
                    &values.date_of_birth, errors.date_of_birth,
                    on_text_input(link, Msg::UpdateDateOfBirth)) }

                { text_field("primary-phone", "Primary Phone number", "text",
                    "Enter your Primary phone number",
                    &values.phone_numbers[0], errors.primary_phone,
                    link.callback(|e: InputEvent| Msg::UpdatePhoneNumber(0, input_value(&e)))) }

                { text_field("secondary-phone", "Secondary Phone number", "text",
                    "Enter your Secondary phone number",
                    &values.phone_numbers[1], None,
                    link.callback(|e: InputEvent| Msg::UpdatePhoneNumber(1, input_value(&e)))) }

                { message_field(component, link) }

                { text_field("xHandle", "X handle", "text", "Enter your X handle",
                    &values.social.x, None,
                    on_text_input(link, Msg::UpdateSocialX)) }

                { text_field("linkedIn", "LinkedIn", "text", "Enter your LinkedIn Profile URL",
                    &values.social.linked_in, None,
                    on_text_input(link, Msg::UpdateSocialLinkedIn)) }

                { appointment_field(component, link) }
                { tnc_field(component, link) }

                <button type="submit" class="submit-btn" disabled={!component.can_submit()}>
                    {"Submit"}
                </button>
            </form>
        </div>
    }
}

/// Builds a labeled single-line input with its error slot.
fn text_field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<&'static str>,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-field">
            <label for={id} class="form-label">{ label }</label>
            <input
                type={input_type}
                id={id}
                name={id}
                class="form-input"
                value={value.to_string()}
                placeholder={placeholder}
                oninput={oninput}
            />
            { error_message(error) }
        </div>
    }
}

/// The multi-line message control. Kept apart from `text_field` because it
/// renders a `<textarea>` and reads its value through the textarea DOM type.
fn message_field(component: &ContactFormComponent, link: &Scope<ContactFormComponent>) -> Html {
    html! {
        <div class="form-field">
            <label for="message" class="form-label">{"Message"}</label>
            <textarea
                id="message"
                name="message"
                class="form-input"
                rows="4"
                value={component.values.message.clone()}
                placeholder="Write your message..."
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            { error_message(component.errors.message) }
        </div>
    }
}

/// The yes/no appointment radio pair. Both inputs share one field; whichever
/// is checked mirrors the current `appointment` value.
fn appointment_field(component: &ContactFormComponent, link: &Scope<ContactFormComponent>) -> Html {
    let current = component.values.appointment;
    html! {
        <div class="form-field">
            <p class="form-label">{"Want to set up an appointment with us?"}</p>
            <div class="radio-row">
                { radio_option(link, "Yes", "yes", current == Appointment::Yes) }
                { radio_option(link, "No", "no", current == Appointment::No) }
            </div>
        </div>
    }
}

fn radio_option(
    link: &Scope<ContactFormComponent>,
    label: &'static str,
    value: &'static str,
    checked: bool,
) -> Html {
    html! {
        <label class="radio-option">
            <input
                type="radio"
                name="appointment"
                value={value}
                checked={checked}
                onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::SetAppointment(Appointment::from_value(&value))
                })}
            />
            <span>{ label }</span>
        </label>
    }
}

/// The terms-and-conditions checkbox. Its error slot renders like any other
/// field's, and its live value also drives the submit button enablement.
fn tnc_field(component: &ContactFormComponent, link: &Scope<ContactFormComponent>) -> Html {
    html! {
        <div class="form-field">
            <label class="tnc-row" for="tnc">
                <input
                    type="checkbox"
                    id="tnc"
                    name="tnc"
                    checked={component.values.tnc}
                    onchange={link.callback(|e: Event| {
                        Msg::SetTnc(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                <span>
                    {"I agree to the "}
                    <a href="#">{"Terms & Conditions"}</a>
                </span>
            </label>
            { error_message(component.errors.tnc) }
        </div>
    }
}

/// Renders the message for a failed rule, or nothing while the field is clean.
fn error_message(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

/// Reads the current text of the input that fired the event.
fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Creates an `oninput` callback that wraps the typed text in `make`.
fn on_text_input(
    link: &Scope<ContactFormComponent>,
    make: fn(String) -> Msg,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| make(input_value(&e)))
}
