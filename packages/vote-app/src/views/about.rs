use yew::prelude::*;

#[function_component]
pub fn About() -> Html {
    html! {
        <section class="view" data-route="about">
            <h1>{ "About" }</h1>
            <p>{ "A small poll: one question, a handful of answers, one vote per visit." }</p>
        </section>
    }
}
