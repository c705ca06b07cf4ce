use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component]
pub fn Home() -> Html {
    html! {
        <section class="view" data-route="home">
            <h1>{ "Welcome" }</h1>
            <p>{ "Have your say on this round's question." }</p>
            <Link<Route> to={Route::Vote} classes="button">{ "Cast your vote" }</Link<Route>>
        </section>
    }
}
