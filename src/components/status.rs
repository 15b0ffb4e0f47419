use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Extra class controlling the placeholder height.
    #[prop_or_default]
    pub class: Classes,
}

/// Pulsing placeholder shown until a widget's first fetch settles.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div class={classes!("card", "skeleton", props.class.clone())}>
            <div class="skeleton-title"></div>
            <div class="skeleton-body"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub title: AttrValue,
    pub message: AttrValue,
}

/// Card-sized error, scoped to the widget whose fetch failed.
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    html! {
        <div class="card">
            <h2>{&props.title}</h2>
            <p class="status error">{"Error: "}{&props.message}</p>
        </div>
    }
}
