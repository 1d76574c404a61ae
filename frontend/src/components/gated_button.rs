use log::{info, warn};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::consent::{gate_button_style, Gate, DEFAULT_ACCENT, DEFAULT_ACCENT_TEXT};

#[derive(Properties, PartialEq)]
pub struct ConsentGatedButtonProps {
    pub consented: bool,
    #[prop_or_default]
    pub on_submit: Option<Callback<()>>,
    pub children: Children,
    #[prop_or_else(|| DEFAULT_ACCENT.to_string())]
    pub accent_color: String,
    #[prop_or_else(|| DEFAULT_ACCENT_TEXT.to_string())]
    pub accent_text_color: String,
}

// type="button" so a surrounding form cannot submit around the gate.
#[function_component(ConsentGatedButton)]
pub fn consent_gated_button(props: &ConsentGatedButtonProps) -> Html {
    let gate = Gate::from(props.consented);

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if gate.fire(on_submit.as_ref()) {
                info!("Consent-gated action triggered");
            } else if !gate.is_open() {
                warn!("Submit attempted without patient consent, ignoring");
            }
        })
    };

    let view = gate.button_view();
    let content = match view.locked_label {
        Some(label) => html! {
            <>
                <Icon kind={view.icon} />
                {label}
            </>
        },
        None => html! {
            <>
                <Icon kind={view.icon} />
                { for props.children.iter() }
            </>
        },
    };

    html! {
        <button
            type="button"
            class={classes!("consent-gated-button", view.disabled.then(|| "locked"))}
            disabled={view.disabled}
            aria-disabled={view.disabled.to_string()}
            onclick={onclick}
            style={gate_button_style(gate, &props.accent_color, &props.accent_text_color)}
        >
            { content }
        </button>
    }
}
