use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::Page;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <Page path="/404">
            <section class="not-found">
                <h1>{"404"}</h1>
                <p>{"We couldn't find that page. It may have been swept away."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
            </section>
        </Page>
    }
}
