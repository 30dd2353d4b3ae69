use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::contact::form::{ContactForm, FormField};

/// Where the form is rendered. Both share one `ContactForm`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormLayout {
    /// Contact section on the page, labelled fields.
    Section,
    /// Slide-in panel, placeholders only.
    Panel,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    pub form: ContactForm,
    pub layout: FormLayout,
    pub on_edit: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

fn label(field: FormField) -> &'static str {
    match field {
        FormField::FullName => "Full Name",
        FormField::Email => "Email",
        FormField::Subject => "Subject",
        FormField::Message => "Message",
    }
}

fn placeholder(field: FormField, layout: FormLayout) -> String {
    match layout {
        FormLayout::Panel => format!("{} *", label(field)),
        FormLayout::Section => match field {
            FormField::FullName => "Enter your full name".to_string(),
            FormField::Email => "Enter your email address".to_string(),
            FormField::Subject => "Enter subject".to_string(),
            FormField::Message => "Enter your message".to_string(),
        },
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let field_row = |field: FormField| -> Html {
        let value = props.form.data.get(field).to_string();
        let error = props.form.errors.get(field).map(str::to_string);
        let has_error = error.is_some();
        let on_edit = props.on_edit.clone();

        let input = if field == FormField::Message {
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_edit.emit((field, area.value()));
            });
            let rows = if props.layout == FormLayout::Panel { "4" } else { "5" };
            html! {
                <textarea
                    name={field.name()}
                    {value}
                    {oninput}
                    {rows}
                    placeholder={placeholder(field, props.layout)}
                />
            }
        } else {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_edit.emit((field, input.value()));
            });
            let kind = if field == FormField::Email { "email" } else { "text" };
            html! {
                <input
                    type={kind}
                    name={field.name()}
                    {value}
                    {oninput}
                    placeholder={placeholder(field, props.layout)}
                />
            }
        };

        html! {
            <div class={classes!("form-field", has_error.then(|| "has-error"))}>
                if props.layout == FormLayout::Section {
                    <label>{ format!("{} *", label(field)) }</label>
                }
                { input }
                { error.map(|error| html! { <p class="field-error">{ error }</p> }).unwrap_or_default() }
            </div>
        }
    };

    let submitting = props.form.is_submitting();

    html! {
        <form class={classes!("contact-form", (props.layout == FormLayout::Panel).then(|| "compact"))} {onsubmit} novalidate={true}>
            if props.layout == FormLayout::Section {
                <div class="form-row">
                    { field_row(FormField::FullName) }
                    { field_row(FormField::Email) }
                </div>
            } else {
                { field_row(FormField::FullName) }
                { field_row(FormField::Email) }
            }
            { field_row(FormField::Subject) }
            { field_row(FormField::Message) }
            {
                props.form.errors.submit_error()
                    .map(|error| html! { <p class="field-error submit-error">{ error.to_string() }</p> })
                    .unwrap_or_default()
            }
            <button type="submit" class="send-button" disabled={submitting}>
                {"✉️ "}
                { if submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
