use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::components::before_after::BeforeAfter;
use crate::components::lazy_image::LazyImage;
use crate::components::page::Page;
use crate::config;
use crate::Route;

struct Showcase {
    label: &'static str,
    before: &'static str,
    after: &'static str,
}

const SHOWCASES: [Showcase; 3] = [
    Showcase {
        label: "Kitchen deep clean",
        before: "/assets/kitchen-before.jpg",
        after: "/assets/kitchen-after.jpg",
    },
    Showcase {
        label: "Bathroom grout restoration",
        before: "/assets/bathroom-before.jpg",
        after: "/assets/bathroom-after.jpg",
    },
    Showcase {
        label: "Living room carpet",
        before: "/assets/carpet-before.jpg",
        after: "/assets/carpet-after.jpg",
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("They got stains out of our oven that we had given up on. The kitchen looks brand new.", "Priya, homeowner"),
    ("Reliable every single week. I come home on Fridays to a spotless apartment.", "Marcus, weekly client"),
    ("Our landlord returned the full deposit after their move-out clean. Worth every cent.", "Elena, renter"),
];

#[function_component]
pub fn Home() -> Html {
    let analytics = use_analytics();

    let cta = |label: &'static str, location: &'static str| {
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| track(&analytics, AnalyticsEvent::cta(label, location)))
    };

    html! {
        <Page path="/">
            <section class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title animate-on-scroll">{"A spotless home, without lifting a finger"}</h1>
                    <p class="hero-subtitle animate-on-scroll">
                        {"Professional home and office cleaning. Flexible scheduling, eco-friendly products, and a 100% satisfaction guarantee."}
                    </p>
                    <div class="hero-cta-group animate-on-scroll">
                        <span onclick={cta("Get a Free Quote", "hero")}>
                            <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Get a Free Quote"}</Link<Route>>
                        </span>
                        <a class="btn btn-secondary" href={format!("tel:{}", config::CONTACT_PHONE)} onclick={cta("Call Us", "hero")}>
                            <i class="fas fa-phone"></i>{" "}{config::CONTACT_PHONE}
                        </a>
                    </div>
                </div>
            </section>

            <section class="trust-bar animate-on-scroll">
                <div><strong>{"500+"}</strong><span>{"homes cleaned"}</span></div>
                <div><strong>{"4.9★"}</strong><span>{"average rating"}</span></div>
                <div><strong>{"Insured"}</strong><span>{"& bonded team"}</span></div>
            </section>

            <section class="results-section">
                <h2 class="animate-on-scroll">{"See the difference"}</h2>
                <p class="section-intro animate-on-scroll">{"Drag the handle, or focus a photo and use the arrow keys."}</p>
                <div class="results-grid">
                    { for SHOWCASES.iter().map(|s| html! {
                        <div class="animate-on-scroll">
                            <BeforeAfter label={s.label} before_src={s.before} after_src={s.after} />
                        </div>
                    }) }
                </div>
            </section>

            <section class="why-section">
                <div class="why-image animate-on-scroll">
                    <LazyImage src="/assets/team.jpg" alt="Our cleaning team" />
                </div>
                <div class="why-text animate-on-scroll">
                    <h2>{"Why neighbors choose us"}</h2>
                    <ul>
                        <li><i class="fas fa-leaf"></i>{"Eco-friendly, pet-safe products"}</li>
                        <li><i class="fas fa-user-shield"></i>{"Background-checked, trained staff"}</li>
                        <li><i class="fas fa-calendar-check"></i>{"Online booking and easy rescheduling"}</li>
                        <li><i class="fas fa-rotate-left"></i>{"Not happy? We re-clean for free within 24 hours"}</li>
                    </ul>
                </div>
            </section>

            <section class="testimonials-section">
                <h2 class="animate-on-scroll">{"What our clients say"}</h2>
                { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                    <div class="testimonial animate-on-scroll">
                        <blockquote>{*quote}</blockquote>
                        <p class="testimonial-author">{format!("- {}", author)}</p>
                    </div>
                }) }
            </section>

            <section class="cta-section animate-on-scroll">
                <h2>{"Ready for a cleaner space?"}</h2>
                <span onclick={cta("Book Your Clean", "footer_cta")}>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Book Your Clean"}</Link<Route>>
                </span>
            </section>
        </Page>
    }
}
