use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, Tick};
use crate::consent::{
    checkbox_style, consent_statement, is_activation_key, is_link_activation_key, marker_style,
    policy_link_style, Consent, ConsentHooks, MarkerEvent, MarkerOutcome, COMPLIANCE_BADGES,
    DEFAULT_ACCENT, DEFAULT_DISPLAY_NAME,
};

#[derive(Properties, PartialEq)]
pub struct PatientConsentMarkerProps {
    #[prop_or_else(|| DEFAULT_ACCENT.to_string())]
    pub accent_color: String,
    #[prop_or_else(|| DEFAULT_DISPLAY_NAME.to_string())]
    pub doctor_name: String,
    #[prop_or_default]
    pub on_privacy_policy: Option<Callback<()>>,
    #[prop_or_default]
    pub on_consent_change: Option<Callback<bool>>,
}

/// Always mounts unticked. The host keeps the value it gates on.
#[function_component(PatientConsentMarker)]
pub fn patient_consent_marker(props: &PatientConsentMarkerProps) -> Html {
    let consent = use_state(Consent::default);

    let dispatch = {
        let consent = consent.clone();
        let hooks = ConsentHooks {
            on_consent_change: props.on_consent_change.clone(),
            on_privacy_policy: props.on_privacy_policy.clone(),
        };
        Callback::from(move |event: MarkerEvent| {
            let (next, outcome) = (*consent).handle(&event, &hooks);
            if let MarkerOutcome::Toggled(consented) = outcome {
                debug!("Patient consent toggled to {}", consented);
            }
            consent.set(next);
        })
    };

    let on_indicator_click = dispatch.reform(|_: MouseEvent| MarkerEvent::IndicatorClick);
    let on_label_click = dispatch.reform(|_: MouseEvent| MarkerEvent::LabelClick);

    let on_indicator_key = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if is_activation_key(&key) {
                e.prevent_default(); // Space would otherwise scroll the page
            }
            dispatch.emit(MarkerEvent::Key { key, repeat: e.repeat() });
        })
    };

    // The link sits inside the label, so its events must not reach the label's toggle.
    let on_policy_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            e.prevent_default();
            dispatch.emit(MarkerEvent::PolicyLinkClick);
        })
    };

    let on_policy_key = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            e.stop_propagation();
            let key = e.key();
            if is_link_activation_key(&key) {
                e.prevent_default();
            }
            dispatch.emit(MarkerEvent::PolicyLinkKey(key));
        })
    };

    let consented = (*consent).consented();
    let accent = props.accent_color.as_str();
    let statement = consent_statement(&props.doctor_name);
    let accessible_name = statement.plain_text();

    html! {
        <div class="consent-marker" style={marker_style(consented, accent)}>
            <div style="display: flex; align-items: flex-start; gap: 12px;">
                <div
                    role="checkbox"
                    aria-checked={consented.to_string()}
                    aria-label={accessible_name}
                    tabindex="0"
                    onclick={on_indicator_click}
                    onkeydown={on_indicator_key}
                    style={checkbox_style(consented, accent)}
                >
                    {
                        if consented {
                            html! { <Tick /> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <label
                    onclick={on_label_click}
                    style="font-family: inherit; font-size: 0.82rem; line-height: 1.7; color: #555; cursor: pointer; user-select: none;"
                >
                    <strong style="color: #222; font-weight: 600;">{statement.lead}</strong>
                    {statement.purpose}
                    <strong style="color: #222;">{statement.law}</strong>
                    {statement.withdrawal}
                    <span
                        role="link"
                        tabindex="0"
                        onclick={on_policy_click}
                        onkeydown={on_policy_key}
                        style={policy_link_style(accent)}
                    >
                        {statement.link_text}
                    </span>
                    {"."}
                </label>
            </div>

            <div style="margin-top: 12px; padding-top: 10px; border-top: 1px solid rgba(0,0,0,0.07); display: flex; align-items: center; gap: 14px; flex-wrap: wrap;">
                {
                    COMPLIANCE_BADGES.iter().map(|badge| {
                        html! {
                            <div key={badge.label} style="display: flex; align-items: center; gap: 5px;">
                                <Icon kind={badge.icon} size={11} color={accent.to_string()} />
                                <span style="font-family: inherit; font-size: 0.62rem; letter-spacing: 0.14em; text-transform: uppercase; color: #999; font-weight: 500;">
                                    {badge.label}
                                </span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
