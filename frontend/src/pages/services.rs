use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::components::lazy_image::LazyImage;
use crate::components::page::Page;
use crate::contact::validation::Service;
use crate::Route;

fn details(service: Service) -> (&'static str, &'static str, &'static str) {
    match service {
        Service::Standard => (
            "fas fa-house",
            "/assets/service-standard.jpg",
            "Dusting, vacuuming, mopping, kitchens and bathrooms. Weekly, bi-weekly or monthly.",
        ),
        Service::Deep => (
            "fas fa-soap",
            "/assets/service-deep.jpg",
            "Top-to-bottom clean including baseboards, inside appliances, grout and light fixtures.",
        ),
        Service::MoveOut => (
            "fas fa-truck-moving",
            "/assets/service-move.jpg",
            "Empty-home cleans built around landlord checklists so you get your deposit back.",
        ),
        Service::Office => (
            "fas fa-building",
            "/assets/service-office.jpg",
            "After-hours cleaning for offices, studios and retail spaces on your schedule.",
        ),
        Service::Carpet => (
            "fas fa-couch",
            "/assets/service-carpet.jpg",
            "Hot-water extraction for carpets, rugs and upholstery. Dry in a few hours.",
        ),
    }
}

#[function_component]
pub fn Services() -> Html {
    let analytics = use_analytics();

    html! {
        <Page path="/services">
            <section class="services-header">
                <h1 class="animate-on-scroll">{"Our services"}</h1>
                <p class="animate-on-scroll">{"Every clean is backed by our re-clean guarantee."}</p>
            </section>
            <section class="services-grid">
                { for Service::ALL.into_iter().map(|service| {
                    let (icon, image, blurb) = details(service);
                    let onclick = {
                        let analytics = analytics.clone();
                        Callback::from(move |_: MouseEvent| {
                            track(&analytics, AnalyticsEvent::cta(service.label(), "services"))
                        })
                    };
                    html! {
                        <article class="service-card animate-on-scroll">
                            <LazyImage src={image} alt={service.label()} />
                            <h2><i class={icon}></i>{service.label()}</h2>
                            <p>{blurb}</p>
                            <span {onclick}>
                                <Link<Route> to={Route::Contact} classes="btn btn-secondary">{"Request a quote"}</Link<Route>>
                            </span>
                        </article>
                    }
                }) }
            </section>
        </Page>
    }
}
