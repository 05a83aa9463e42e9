use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{config::BUSINESS_NAME}</h3>
                    <p>{"Insured, background-checked cleaners. Satisfaction guaranteed or we come back free."}</p>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Get in touch"}</h4>
                    <p><a href={format!("tel:{}", config::CONTACT_PHONE)}><i class="fas fa-phone"></i>{config::CONTACT_PHONE}</a></p>
                    <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}><i class="fas fa-envelope"></i>{config::CONTACT_EMAIL}</a></p>
                </div>
            </div>
            <p class="footer-legal">
                {"© "}{config::BUSINESS_NAME}{" · "}
                <a href={config::get_site_url()}>{config::get_site_url()}</a>
            </p>
        </footer>
    }
}
