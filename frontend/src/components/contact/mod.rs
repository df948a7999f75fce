//! Contact form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ContactFormProps`, `ContactFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//!
//! The component owns its field values for its whole lifetime; there is no
//! first-render load and nothing survives unmounting.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ContactFormProps;
pub use state::ContactFormComponent;

impl Component for ContactFormComponent {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
