use yew::prelude::*;

use crate::consent::IconKind;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(14)]
    pub size: u32,
    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,
}

// Outline icons drawn on a 24x24 grid, stroked with the given color.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let paths = match props.kind {
        IconKind::ShieldCheck => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        IconKind::Lock => html! {
            <>
                <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
                <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            </>
        },
    };

    html! {
        <svg
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={props.color.clone()}
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths }
        </svg>
    }
}

#[function_component(Tick)]
pub fn tick() -> Html {
    html! {
        <svg width="10" height="8" viewBox="0 0 10 8" fill="none" aria-hidden="true">
            <path
                d="M1 4L3.5 6.5L9 1"
                stroke="white"
                stroke-width="1.8"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
