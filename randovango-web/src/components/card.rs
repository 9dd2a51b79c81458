use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectableCardProps {
    pub id: AttrValue,
    pub selected: bool,
    pub on_select: Callback<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A clickable card of a single-choice group.
#[function_component(SelectableCard)]
pub fn selectable_card(props: &SelectableCardProps) -> Html {
    let on_click = {
        let on_select = props.on_select.clone();
        let id = props.id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };
    let class = classes!("selectable-card", props.selected.then_some("selected"));

    html! {
        <div role="radio"
            {class}
            data-id={props.id.clone()}
            aria-checked={props.selected.to_string()}
            tabindex={if props.selected { "0" } else { "-1" }}
            onclick={on_click}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NoneOptionProps {
    /// Extra class naming the option, e.g. `no-hiking-option`.
    pub class: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub selected: bool,
    pub on_select: Callback<()>,
}

/// The "none of these" choice shown after a card group.
#[function_component(NoneOption)]
pub fn none_option(props: &NoneOptionProps) -> Html {
    let on_click = {
        let cb = props.on_select.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let class = classes!(
        "none-option",
        props.class.to_string(),
        props.selected.then_some("selected")
    );

    html! {
        <div role="radio" {class} aria-checked={props.selected.to_string()} tabindex="0" onclick={on_click}>
            <h3>{ props.title.clone() }</h3>
            <p class="muted">{ props.description.clone() }</p>
        </div>
    }
}
