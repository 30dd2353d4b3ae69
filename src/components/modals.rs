use yew::prelude::*;

use crate::components::contact_form::{ContactFormView, FormLayout};
use crate::contact::form::{ContactForm, FormField};
use crate::content::SUCCESS_GIF;

// Clicks inside a dialog must not reach the backdrop's close handler.
fn swallow_click() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}

#[derive(Properties, PartialEq)]
pub struct ContactPanelProps {
    pub open: bool,
    pub form: ContactForm,
    pub on_backdrop: Callback<()>,
    pub on_close: Callback<()>,
    pub on_edit: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactPanel)]
pub fn contact_panel(props: &ContactPanelProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop = props.on_backdrop.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            class="overlay overlay-panel"
            role="dialog"
            aria-modal="true"
            aria-labelledby="contact-title"
            onclick={on_backdrop}
        >
            <div class="contact-panel" onclick={swallow_click()}>
                <div class="panel-header">
                    <h3 id="contact-title">{"Contact Me"}</h3>
                    <button class="close-button" onclick={on_close} aria-label="Close contact form">
                        {"✕"}
                    </button>
                </div>
                <ContactFormView
                    form={props.form.clone()}
                    layout={FormLayout::Panel}
                    on_edit={props.on_edit.clone()}
                    on_submit={props.on_submit.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub open: bool,
    pub on_backdrop: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div
            class="overlay overlay-center"
            role="dialog"
            aria-modal="true"
            aria-labelledby="success-title"
            onclick={props.on_backdrop.reform(|_: MouseEvent| ())}
        >
            <div class="success-card" onclick={swallow_click()}>
                <h3 id="success-title" class="sr-only">{"Ticket Created"}</h3>
                <div class="success-icon">{"🎫"}</div>
                <h3>{"Ticket Created!"}</h3>
                <p>{"You'll receive a message within 5-7 days"}</p>
                <img src={SUCCESS_GIF} alt="Success" />
            </div>
        </div>
    }
}
