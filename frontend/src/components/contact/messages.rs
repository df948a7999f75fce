use common::model::contact::Appointment;

#[derive(Clone)]
pub enum Msg {
    UpdateUserName(String),
    UpdateEmail(String),
    UpdateAge(String),
    UpdateDateOfBirth(String),
    UpdatePhoneNumber(usize, String),
    UpdateSocialX(String),
    UpdateSocialLinkedIn(String),
    UpdateMessage(String),
    SetTnc(bool),
    SetAppointment(Appointment),
    Submit,
}
