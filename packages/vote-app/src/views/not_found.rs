use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <section class="view" data-route="not-found">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Home}>{ "Back to the start" }</Link<Route>>
        </section>
    }
}
