use yew::prelude::*;

const CHOICES: [&str; 3] = ["Tabs", "Spaces", "Whatever the formatter says"];

#[function_component]
pub fn Vote() -> Html {
    let selected = use_state(|| None::<usize>);

    let choices = CHOICES.iter().enumerate().map(|(idx, label)| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(idx)))
        };
        let classes = classes!("choice", (*selected == Some(idx)).then_some("is-selected"));
        html! {
            <li key={idx}>
                <button class={classes} {onclick}>{ *label }</button>
            </li>
        }
    });

    html! {
        <section class="view" data-route="vote">
            <h1>{ "Cast your vote" }</h1>
            <ul class="choices">{ for choices }</ul>
            if let Some(idx) = *selected {
                <p class="confirmation">{ format!("You picked: {}", CHOICES[idx]) }</p>
            }
        </section>
    }
}
