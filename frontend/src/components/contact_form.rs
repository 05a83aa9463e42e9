use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::contact::submit::{submit, SubmitError};
use crate::contact::validation::{validate, ContactForm, Field, FieldError, Service};

#[derive(Clone, PartialEq)]
enum Status {
    Editing,
    Submitting,
    Sent(String),
    Failed(String),
}

fn errors_by_field(errors: Vec<FieldError>) -> HashMap<Field, FieldError> {
    let mut map = HashMap::new();
    for error in errors {
        map.entry(error.field()).or_insert(error);
    }
    map
}

#[function_component]
pub fn ContactFormSection() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(HashMap::<Field, FieldError>::new);
    let status = use_state(|| Status::Editing);
    let analytics = use_analytics();

    let on_change = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Submitting {
                return;
            }
            if let Err(found) = validate(&form) {
                errors.set(errors_by_field(found));
                return;
            }
            errors.set(HashMap::new());
            status.set(Status::Submitting);

            let form = form.clone();
            let errors = errors.clone();
            let status = status.clone();
            let analytics = analytics.clone();
            spawn_local(async move {
                match submit((*form).clone()).await {
                    Ok(receipt) => {
                        track(
                            &analytics,
                            AnalyticsEvent::ContactSubmitted {
                                service: receipt.request.service.slug().to_string(),
                            },
                        );
                        form.set(ContactForm::default());
                        status.set(Status::Sent(receipt.reference));
                    }
                    Err(SubmitError::Invalid(found)) => {
                        errors.set(errors_by_field(found));
                        status.set(Status::Editing);
                    }
                    Err(err) => {
                        log::error!("Contact submission failed: {}", err);
                        status.set(Status::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let error_for = |field: Field| errors.get(&field).map(|e| e.to_string());
    let field_error = |field: Field| match error_for(field) {
        Some(message) => html! {
            <p class="field-error" id={format!("{}-error", field.id())} role="alert">{message}</p>
        },
        None => html! {},
    };
    let invalid = |field: Field| errors.contains_key(&field).to_string();
    let described_by = |field: Field| {
        errors
            .contains_key(&field)
            .then(|| AttrValue::from(format!("{}-error", field.id())))
    };

    let input_handler = |field: Field| {
        let on_change = on_change(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let on_service = {
        let on_change = on_change(Field::Service);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };
    let on_message = {
        let on_change = on_change(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    let submitting = *status == Status::Submitting;

    html! {
        <form class="contact-form" novalidate=true {onsubmit}>
            {
                match &*status {
                    Status::Sent(reference) => html! {
                        <div class="form-success" role="status">
                            <i class="fas fa-circle-check"></i>
                            {format!("Thanks! We'll be in touch within one business day. Your reference is {}.", reference)}
                        </div>
                    },
                    Status::Failed(message) => html! {
                        <div class="form-failure" role="alert">{message}</div>
                    },
                    _ => html! {},
                }
            }
            <div class="form-row">
                <label for={Field::Name.id()}>{"Name"}</label>
                <input
                    id={Field::Name.id()}
                    type="text"
                    autocomplete="name"
                    value={form.name.clone()}
                    aria-invalid={invalid(Field::Name)}
                    aria-describedby={described_by(Field::Name)}
                    oninput={input_handler(Field::Name)}
                />
                {field_error(Field::Name)}
            </div>
            <div class="form-row">
                <label for={Field::Email.id()}>{"Email"}</label>
                <input
                    id={Field::Email.id()}
                    type="email"
                    autocomplete="email"
                    value={form.email.clone()}
                    aria-invalid={invalid(Field::Email)}
                    aria-describedby={described_by(Field::Email)}
                    oninput={input_handler(Field::Email)}
                />
                {field_error(Field::Email)}
            </div>
            <div class="form-row">
                <label for={Field::Phone.id()}>{"Phone (optional)"}</label>
                <input
                    id={Field::Phone.id()}
                    type="tel"
                    autocomplete="tel"
                    value={form.phone.clone()}
                    aria-invalid={invalid(Field::Phone)}
                    aria-describedby={described_by(Field::Phone)}
                    oninput={input_handler(Field::Phone)}
                />
                {field_error(Field::Phone)}
            </div>
            <div class="form-row">
                <label for={Field::Service.id()}>{"Service"}</label>
                <select
                    id={Field::Service.id()}
                    aria-invalid={invalid(Field::Service)}
                    aria-describedby={described_by(Field::Service)}
                    onchange={on_service}
                >
                    <option value="" selected={form.service.is_empty()}>{"Choose a service"}</option>
                    { for Service::ALL.into_iter().map(|service| html! {
                        <option value={service.slug()} selected={form.service == service.slug()}>
                            {service.label()}
                        </option>
                    }) }
                </select>
                {field_error(Field::Service)}
            </div>
            <div class="form-row">
                <label for={Field::Message.id()}>{"How can we help?"}</label>
                <textarea
                    id={Field::Message.id()}
                    rows="5"
                    value={form.message.clone()}
                    aria-invalid={invalid(Field::Message)}
                    aria-describedby={described_by(Field::Message)}
                    oninput={on_message}
                />
                {field_error(Field::Message)}
            </div>
            <button type="submit" class="btn btn-primary" disabled={submitting}>
                { if submitting { "Sending..." } else { "Request My Quote" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_error_per_field_wins() {
        let map = errors_by_field(vec![
            FieldError::MissingName,
            FieldError::NameTooShort,
            FieldError::InvalidEmail,
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Field::Name), Some(&FieldError::MissingName));
        assert_eq!(map.get(&Field::Email), Some(&FieldError::InvalidEmail));
    }
}
