use yew::prelude::*;

use crate::components::contact_form::ContactFormSection;
use crate::components::page::Page;
use crate::config;

#[function_component]
pub fn Contact() -> Html {
    html! {
        <Page path="/contact">
            <section class="contact-section">
                <div class="contact-intro animate-on-scroll">
                    <h1>{"Get a free quote"}</h1>
                    <p>{"Tell us about your space and we'll reply within one business day."}</p>
                    <p>
                        <i class="fas fa-phone"></i>{" "}
                        <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a>
                    </p>
                    <p>
                        <i class="fas fa-envelope"></i>{" "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                </div>
                <div class="contact-form-wrapper animate-on-scroll">
                    <ContactFormSection />
                </div>
            </section>
        </Page>
    }
}
