use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::warn;
use crate::Route;
use crate::config;

#[derive(Debug, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    last_updated: "January 2026",
    sections: &[
        LegalSection {
            heading: "Information We Collect",
            body: "We collect personal information that you voluntarily provide when scheduling consultations, submitting enquiries, or communicating with our clinic. This may include your name, contact details, and relevant medical history shared for the purpose of clinical assessment.",
        },
        LegalSection {
            heading: "How We Use Your Information",
            body: "Your information is used solely for the provision of medical care, appointment scheduling, and clinical correspondence. We do not sell, rent, or share your personal data with third parties except where required by law or with your explicit consent.",
        },
        LegalSection {
            heading: "Data Security",
            body: "All personal and medical data is stored securely in compliance with the Personal Data Protection Act 2010 (PDPA) of Malaysia. Access is restricted to authorised clinical and administrative personnel only.",
        },
        LegalSection {
            heading: "Retention of Data",
            body: "Medical records are retained in accordance with Malaysian Ministry of Health guidelines. You may request access to, correction of, or deletion of your personal data by contacting our clinic directly.",
        },
        LegalSection {
            heading: "Cookies & Website Analytics",
            body: "Our website may use anonymised analytics cookies to understand visitor behaviour and improve user experience. No personally identifiable information is collected through cookies without your consent.",
        },
        LegalSection {
            heading: "Contact Us",
            body: "For any privacy-related enquiries, please contact our clinic at clinic@dr[name].com.my or by calling +603 XXXX XXXX.",
        },
    ],
};

pub static TERMS: LegalDocument = LegalDocument {
    title: "Terms & Conditions",
    last_updated: "January 2026",
    sections: &[
        LegalSection {
            heading: "Medical Disclaimer",
            body: "The information provided on this website is for general informational purposes only and does not constitute medical advice. It is not a substitute for professional medical consultation, diagnosis, or treatment. Always seek the advice of a qualified physician for any medical condition.",
        },
        LegalSection {
            heading: "Appointment & Consultation Policy",
            body: "All consultations are subject to availability. Appointments must be confirmed at least 24 hours in advance. Cancellations without prior notice may result in a cancellation fee. Dr. [Name] reserves the right to decline or terminate a consultation at clinical discretion.",
        },
        LegalSection {
            heading: "Accuracy of Information",
            body: "We endeavour to keep all information on this website accurate and up to date. However, we make no warranties regarding the completeness or accuracy of any content. Clinical practices and guidelines may change, and information should not be relied upon as current medical guidance.",
        },
        LegalSection {
            heading: "Intellectual Property",
            body: "All content on this website, including text, images, and design, is the intellectual property of Dr. [Name] and may not be reproduced, distributed, or used without express written permission.",
        },
        LegalSection {
            heading: "Limitation of Liability",
            body: "To the extent permitted by law, Dr. [Name] and associated clinical staff shall not be liable for any direct, indirect, or consequential loss arising from reliance on information provided on this website.",
        },
        LegalSection {
            heading: "Governing Law",
            body: "These terms are governed by the laws of Malaysia. Any disputes shall be subject to the exclusive jurisdiction of the Malaysian courts.",
        },
    ],
};

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub doc: &'static LegalDocument,
}

#[derive(Properties, PartialEq)]
pub struct LegalSectionsProps {
    pub doc: &'static LegalDocument,
}

#[function_component(LegalSections)]
pub fn legal_sections(props: &LegalSectionsProps) -> Html {
    let doc = props.doc;
    html! {
        <>
            <div class="legal-tag">{"Legal"}</div>
            <h1>{doc.title}</h1>
            <div class="legal-updated">{format!("Last updated: {}", doc.last_updated)}</div>
            {
                doc.sections.iter().map(|section| html! {
                    <section key={section.heading}>
                        <h3>{section.heading}</h3>
                        <p>{section.body}</p>
                    </section>
                }).collect::<Html>()
            }
        </>
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    match body {
        Some(body) => {
            if let Err(e) = body.style().set_property("overflow", value) {
                warn!("Failed to set page scrolling: {:?}", e);
            }
        }
        None => warn!("No document body to lock scrolling on"),
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalOverlayProps {
    pub doc: &'static LegalDocument,
    pub on_close: Callback<()>,
}

/// Shows a legal document over the current page without leaving it.
#[function_component(LegalOverlay)]
pub fn legal_overlay(props: &LegalOverlayProps) -> Html {
    use_effect_with_deps(|_| {
        set_body_overflow("hidden");
        || set_body_overflow("")
    }, ());

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="legal-overlay" onclick={close.clone()}>
            <style>
                {r#"
                .legal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(4, 8, 20, 0.8);
                    backdrop-filter: blur(8px);
                    display: flex;
                    align-items: flex-end;
                    justify-content: center;
                }

                .legal-overlay .legal-content {
                    position: relative;
                    background: #0d1526;
                    border-top: 1px solid rgba(220, 38, 38, 0.4);
                    color: #f0f4ff;
                    width: 100%;
                    max-width: 820px;
                    max-height: 88vh;
                    overflow-y: auto;
                    padding: 52px 60px 60px;
                    box-sizing: border-box;
                }

                .legal-close-icon {
                    position: absolute;
                    top: 22px;
                    right: 26px;
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: rgba(255, 255, 255, 0.5);
                    padding: 4px 10px;
                    cursor: pointer;
                    font-size: 1rem;
                }

                .legal-close {
                    margin-top: 44px;
                    font-size: 0.78rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    padding: 13px 30px;
                    background: #dc2626;
                    color: #fff;
                    border: none;
                    cursor: pointer;
                    font-weight: 600;
                }

                .legal-tag {
                    font-size: 0.65rem;
                    letter-spacing: 0.22em;
                    text-transform: uppercase;
                    color: #dc2626;
                    font-weight: 600;
                    margin-bottom: 14px;
                }

                .legal-overlay h1 {
                    font-size: 2.2rem;
                    margin: 0 0 6px;
                }

                .legal-updated {
                    font-size: 0.78rem;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 36px;
                }

                .legal-content section {
                    margin-bottom: 32px;
                }

                .legal-content h3 {
                    color: #e2e8f8;
                    font-size: 1rem;
                    margin-bottom: 10px;
                }

                .legal-content p {
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.8;
                    font-size: 0.9rem;
                }

                @media (max-width: 640px) {
                    .legal-overlay .legal-content {
                        padding: 44px 24px 40px;
                    }
                }
                "#}
            </style>
            <div
                class="legal-content"
                role="dialog"
                aria-modal="true"
                aria-label={props.doc.title}
                onclick={keep_open}
            >
                <button type="button" class="legal-close-icon" aria-label="Close" onclick={close.clone()}>
                    {"\u{00d7}"}
                </button>
                <LegalSections doc={props.doc} />
                <button type="button" class="legal-close" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let doc = props.doc;
    use_title(format!("{} | {}", doc.title, config::PRACTITIONER_NAME));

    html! {
        <div class="legal-content">
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #040814;
                    padding: 4rem 2rem;
                    color: #f0f4ff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    background: #0d1526;
                    border-top: 1px solid rgba(220, 38, 38, 0.4);
                    padding: 3rem;
                    max-width: 820px;
                    width: 100%;
                }

                .legal-tag {
                    font-size: 0.65rem;
                    letter-spacing: 0.22em;
                    text-transform: uppercase;
                    color: #dc2626;
                    font-weight: 600;
                    margin-bottom: 14px;
                }

                .legal-content h1 {
                    font-size: 2.2rem;
                    margin-bottom: 6px;
                }

                .legal-updated {
                    font-size: 0.78rem;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 36px;
                }

                .legal-content section {
                    margin-bottom: 32px;
                }

                .legal-content h3 {
                    color: #e2e8f8;
                    font-size: 1rem;
                    margin-bottom: 10px;
                }

                .legal-content p {
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.8;
                    font-size: 0.9rem;
                }

                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }

                .legal-links a {
                    color: #dc2626;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .legal-links a:hover {
                    color: #f0f4ff;
                }
                "#}
            </style>
            <div>
                <LegalSections doc={doc} />
                <div class="legal-links">
                    <Link<Route> to={Route::Inquiry}>{"Back to inquiry"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_policy_names_the_data_protection_act() {
        assert!(PRIVACY_POLICY
            .sections
            .iter()
            .any(|s| s.body.contains("Personal Data Protection Act 2010")));
    }

    #[test]
    fn documents_share_revision_date() {
        assert_eq!(PRIVACY_POLICY.last_updated, TERMS.last_updated);
        assert_eq!(PRIVACY_POLICY.sections.len(), 6);
        assert_eq!(TERMS.sections.len(), 6);
    }
}
