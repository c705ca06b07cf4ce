use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, ROUTES};

#[function_component]
pub fn Nav() -> Html {
    let current = use_route::<Route>();

    let links = ROUTES.iter().map(|entry| {
        let classes = classes!(
            "nav-link",
            (current == Some(entry.route)).then_some("is-active")
        );
        html! {
            <li key={entry.name}>
                <Link<Route> to={entry.route} {classes}>{ entry.name }</Link<Route>>
            </li>
        }
    });

    html! {
        <nav>
            <ul>{ for links }</ul>
        </nav>
    }
}
