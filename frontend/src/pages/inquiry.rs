use yew::prelude::*;
use yew_hooks::prelude::use_title;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_timers::callback::Timeout;
use chrono::Utc;
use log::{error, info, warn};
use crate::config;
use crate::components::consent_marker::PatientConsentMarker;
use crate::components::gated_button::ConsentGatedButton;
use crate::inquiry::{FormAction, InquiryError, InquiryForm};
use crate::pages::legal::{LegalDocument, LegalOverlay, PRIVACY_POLICY, TERMS};

fn open_mail_client(url: &str) -> Result<(), InquiryError> {
    let window = web_sys::window().ok_or_else(|| {
        error!("No window available to open mail client");
        InquiryError::MailClientUnavailable
    })?;
    window.location().set_href(url).map_err(|e| {
        error!("Failed to open mail client: {:?}", e);
        InquiryError::MailClientUnavailable
    })
}

#[function_component(InquiryPage)]
pub fn inquiry_page() -> Html {
    use_title(format!("Secure an Inquiry | {}", config::PRACTITIONER_NAME));

    let form = use_reducer(InquiryForm::default);
    // Replacing the handle drops and cancels the previous timer.
    let confirmation_timer = use_mut_ref(|| None::<Timeout>);

    let on_consent_change = {
        let form = form.clone();
        Callback::from(move |value: bool| form.dispatch(FormAction::SetConsent(value)))
    };

    let on_privacy_policy = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            info!("Opening privacy policy from consent marker");
            form.dispatch(FormAction::OpenDocument(&PRIVACY_POLICY));
        })
    };

    let close_document = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::CloseDocument))
    };

    let on_submit = {
        let form = form.clone();
        let confirmation_timer = confirmation_timer.clone();

        Callback::from(move |_: ()| {
            let sent = form
                .draft
                .submit(form.consented, Utc::now())
                .and_then(|inquiry| {
                    let url = inquiry.mailto_url(config::CLINIC_EMAIL)?;
                    info!("Inquiry prepared at {}, handing off to mail client", inquiry.submitted_at());
                    open_mail_client(&url)
                });

            if let Err(e) = sent {
                warn!("Inquiry not sent: {:?}", e);
                form.dispatch(FormAction::Rejected(e));
                return;
            }

            let shown = form.submissions + 1;
            form.dispatch(FormAction::Sent);

            let form = form.clone();
            *confirmation_timer.borrow_mut() = Some(Timeout::new(config::CONFIRMATION_TIMEOUT_MS, move || {
                form.dispatch(FormAction::HideConfirmation(shown));
            }));
        })
    };

    let open_legal = |doc: &'static LegalDocument| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::OpenDocument(doc)))
    };

    let onsubmit = Callback::from(|e: SubmitEvent| {
        // Only the gated button may send; implicit form submission does nothing.
        e.prevent_default();
    });

    html! {
        <div class="inquiry-page">
            <style>
                {r#"
                .inquiry-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #0d0505 0%, #1a0808 50%, #040814 100%);
                    color: #f0f4ff;
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 80px;
                    padding: 120px 56px;
                    align-items: start;
                }

                .inquiry-tag {
                    font-size: 0.65rem;
                    letter-spacing: 0.24em;
                    text-transform: uppercase;
                    color: #dc2626;
                    font-weight: 600;
                    margin-bottom: 20px;
                }

                .inquiry-tagline {
                    font-size: clamp(2.4rem, 4.5vw, 4rem);
                    font-weight: 800;
                    line-height: 1.05;
                    letter-spacing: -0.03em;
                }

                .inquiry-tagline span {
                    color: #dc2626;
                }

                .inquiry-sub {
                    font-size: 1rem;
                    color: rgba(240, 244, 255, 0.5);
                    margin: 20px 0 40px;
                    line-height: 1.7;
                }

                .contact-item {
                    padding: 16px 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.07);
                }

                .contact-label {
                    font-size: 0.65rem;
                    letter-spacing: 0.16em;
                    text-transform: uppercase;
                    color: rgba(240, 244, 255, 0.35);
                }

                .contact-value {
                    font-size: 0.92rem;
                    margin-top: 3px;
                }

                .inquiry-form {
                    background: #f7f5f1;
                    color: #222;
                    padding: 40px;
                }

                .inquiry-form input,
                .inquiry-form textarea {
                    width: 100%;
                    padding: 12px 14px;
                    margin-bottom: 14px;
                    border: 1px solid #d0ccc4;
                    background: #fff;
                    font-family: inherit;
                    font-size: 0.9rem;
                    box-sizing: border-box;
                }

                .inquiry-form textarea {
                    min-height: 120px;
                    resize: vertical;
                }

                .inquiry-error {
                    color: #b91c1c;
                    font-size: 0.85rem;
                    margin-bottom: 12px;
                }

                .inquiry-confirmation {
                    color: #166534;
                    font-size: 0.85rem;
                    margin-bottom: 12px;
                }

                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.72rem;
                }

                .legal-links button {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    cursor: pointer;
                    color: rgba(240, 244, 255, 0.35);
                    text-decoration: underline;
                    text-underline-offset: 3px;
                }

                .legal-links button:hover {
                    color: #dc2626;
                }

                @media (max-width: 960px) {
                    .inquiry-page {
                        grid-template-columns: 1fr;
                        gap: 40px;
                        padding: 80px 24px;
                    }
                }
                "#}
            </style>

            <div>
                <div class="inquiry-tag">{"Get In Touch"}</div>
                <div class="inquiry-tagline">
                    {"Begin your"}<br />
                    <span>{"recovery"}</span><br />
                    {"journey."}
                </div>
                <p class="inquiry-sub">
                    {"Every second counts when it comes to cardiac health. Don't wait, speak with a specialist today."}
                </p>
                <div class="contact-item">
                    <div class="contact-label">{"Phone"}</div>
                    <div class="contact-value">{config::CLINIC_PHONE}</div>
                </div>
                <div class="contact-item">
                    <div class="contact-label">{"Email"}</div>
                    <div class="contact-value">{config::CLINIC_EMAIL}</div>
                </div>
                <div class="contact-item">
                    <div class="contact-label">{"Location"}</div>
                    <div class="contact-value">{config::CLINIC_LOCATION}</div>
                </div>
            </div>

            <div>
                <form class="inquiry-form" onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Full name"
                        value={form.draft.name.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(FormAction::SetName(input.value()));
                        }}
                    />
                    <input
                        type="text"
                        placeholder="Phone or email"
                        value={form.draft.contact.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(FormAction::SetContact(input.value()));
                        }}
                    />
                    <textarea
                        placeholder="How can we help?"
                        value={form.draft.message.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            form.dispatch(FormAction::SetMessage(input.value()));
                        }}
                    />

                    <PatientConsentMarker
                        key={form.submissions.to_string()}
                        accent_color={config::ACCENT_COLOR.to_string()}
                        doctor_name={config::PRACTITIONER_NAME.to_string()}
                        on_privacy_policy={Some(on_privacy_policy)}
                        on_consent_change={Some(on_consent_change)}
                    />

                    {
                        if let Some(error) = form.error.as_ref() {
                            html! { <div class="inquiry-error" role="alert">{error.clone()}</div> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if form.confirmation.is_some() {
                            html! {
                                <div class="inquiry-confirmation" role="status">
                                    {"Your inquiry is ready in your mail app. The clinic will reply within one working day."}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <ConsentGatedButton
                        consented={form.consented}
                        on_submit={Some(on_submit)}
                        accent_color={config::ACCENT_COLOR.to_string()}
                        accent_text_color={config::ACCENT_TEXT_COLOR.to_string()}
                    >
                        {"Secure an Inquiry"}
                    </ConsentGatedButton>
                </form>

                <div class="legal-links">
                    <button type="button" onclick={open_legal(&PRIVACY_POLICY)}>{"Privacy Policy"}</button>
                    {" | "}
                    <button type="button" onclick={open_legal(&TERMS)}>{"Terms & Conditions"}</button>
                </div>
            </div>

            {
                match form.open_document {
                    Some(doc) => html! { <LegalOverlay doc={doc} on_close={close_document} /> },
                    None => html! {},
                }
            }
        </div>
    }
}
