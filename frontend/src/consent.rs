use yew::Callback;

pub const DEFAULT_ACCENT: &str = "#1a1a1a";
pub const DEFAULT_ACCENT_TEXT: &str = "#fff";
pub const DEFAULT_DISPLAY_NAME: &str = "Dr. [Name]";

const NEUTRAL_BORDER: &str = "#d0ccc4";
const NEUTRAL_CHECKBOX: &str = "#aaa";
const LOCKED_BACKGROUND: &str = "#e0ddd8";
const LOCKED_TEXT: &str = "#aaa";

pub const LOCKED_LABEL: &str = "Consent Required to Submit";
pub const GOVERNING_LAW: &str = "Personal Data Protection Act 2010 (PDPA Malaysia)";
pub const PRIVACY_POLICY_LINK_TEXT: &str = "Privacy Policy";

// Older browsers report "Spacebar".
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar")
}

pub fn is_link_activation_key(key: &str) -> bool {
    key == "Enter"
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Consent {
    consented: bool,
}

impl Consent {
    pub fn consented(self) -> bool {
        self.consented
    }

    pub fn toggled(self) -> Self {
        Self { consented: !self.consented }
    }

    /// Policy link events never change the returned state.
    pub fn handle(self, event: &MarkerEvent, hooks: &ConsentHooks) -> (Self, MarkerOutcome) {
        match event {
            MarkerEvent::IndicatorClick | MarkerEvent::LabelClick => self.toggle_and_notify(hooks),
            MarkerEvent::Key { key, repeat: false } if is_activation_key(key) => {
                self.toggle_and_notify(hooks)
            }
            MarkerEvent::PolicyLinkClick => self.open_policy(hooks),
            MarkerEvent::PolicyLinkKey(key) if is_link_activation_key(key) => self.open_policy(hooks),
            MarkerEvent::Key { .. } | MarkerEvent::PolicyLinkKey(_) => (self, MarkerOutcome::Ignored),
        }
    }

    fn toggle_and_notify(self, hooks: &ConsentHooks) -> (Self, MarkerOutcome) {
        let next = self.toggled();
        if let Some(on_change) = &hooks.on_consent_change {
            on_change.emit(next.consented);
        }
        (next, MarkerOutcome::Toggled(next.consented))
    }

    fn open_policy(self, hooks: &ConsentHooks) -> (Self, MarkerOutcome) {
        if let Some(on_policy) = &hooks.on_privacy_policy {
            on_policy.emit(());
        }
        (self, MarkerOutcome::PolicyOpened)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerEvent {
    IndicatorClick,
    LabelClick,
    // A held key auto-repeats keydown; only the first press counts.
    Key { key: String, repeat: bool },
    PolicyLinkClick,
    PolicyLinkKey(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerOutcome {
    Toggled(bool),
    PolicyOpened,
    Ignored,
}

#[derive(Clone, Default, PartialEq)]
pub struct ConsentHooks {
    pub on_consent_change: Option<Callback<bool>>,
    pub on_privacy_policy: Option<Callback<()>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Open,
    Locked,
}

impl From<bool> for Gate {
    fn from(consented: bool) -> Self {
        if consented {
            Gate::Open
        } else {
            Gate::Locked
        }
    }
}

impl Gate {
    pub fn is_open(self) -> bool {
        self == Gate::Open
    }

    /// Runs `action` once if the gate is open. Returns whether it ran.
    pub fn fire(self, action: Option<&Callback<()>>) -> bool {
        match (self, action) {
            (Gate::Open, Some(action)) => {
                action.emit(());
                true
            }
            _ => false,
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Gate::Open => IconKind::ShieldCheck,
            Gate::Locked => IconKind::Lock,
        }
    }

    pub fn button_view(self) -> GateButtonView {
        match self {
            Gate::Open => GateButtonView {
                disabled: false,
                icon: self.icon(),
                locked_label: None,
            },
            Gate::Locked => GateButtonView {
                disabled: true,
                icon: self.icon(),
                locked_label: Some(LOCKED_LABEL),
            },
        }
    }
}

/// What the gated button renders. `locked_label` replaces the caller's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateButtonView {
    pub disabled: bool,
    pub icon: IconKind,
    pub locked_label: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ShieldCheck,
    Lock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplianceBadge {
    pub icon: IconKind,
    pub label: &'static str,
}

pub const COMPLIANCE_BADGES: [ComplianceBadge; 3] = [
    ComplianceBadge { icon: IconKind::ShieldCheck, label: "PDPA 2010 Compliant" },
    ComplianceBadge { icon: IconKind::Lock, label: "Data Encrypted in Transit" },
    ComplianceBadge { icon: IconKind::ShieldCheck, label: "APC-Safe Architecture" },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentStatement {
    pub lead: &'static str,
    pub purpose: String,
    pub law: &'static str,
    pub withdrawal: &'static str,
    pub link_text: &'static str,
}

pub fn consent_statement(display_name: &str) -> ConsentStatement {
    ConsentStatement {
        lead: "I give my express consent",
        purpose: format!(
            " for {display_name}'s clinic to collect, process, and store the personal data \
             submitted in this form for the purposes of this medical inquiry, in accordance with the "
        ),
        law: GOVERNING_LAW,
        withdrawal: " and its 2024 amendments. I understand I may withdraw consent at any time \
                     by contacting the clinic directly. I have read and agree to the ",
        link_text: PRIVACY_POLICY_LINK_TEXT,
    }
}

impl ConsentStatement {
    pub fn plain_text(&self) -> String {
        format!(
            "{}{}{}{}{}.",
            self.lead, self.purpose, self.law, self.withdrawal, self.link_text
        )
    }
}

pub fn marker_style(consented: bool, accent: &str) -> String {
    let (background, border) = if consented {
        ("rgba(0,0,0,0.03)", accent)
    } else {
        ("transparent", NEUTRAL_BORDER)
    };
    format!(
        "background: {background}; border: 1px solid {border}; border-radius: 2px; \
         padding: 16px 18px; margin: 20px 0; transition: all 0.25s ease;"
    )
}

pub fn checkbox_style(consented: bool, accent: &str) -> String {
    let (border, background) = if consented {
        (accent, accent)
    } else {
        (NEUTRAL_CHECKBOX, "transparent")
    };
    format!(
        "width: 18px; height: 18px; flex-shrink: 0; margin-top: 2px; \
         border: 2px solid {border}; background: {background}; cursor: pointer; \
         display: flex; align-items: center; justify-content: center; \
         transition: all 0.2s; border-radius: 1px;"
    )
}

pub fn policy_link_style(accent: &str) -> String {
    format!(
        "color: {accent}; text-decoration: underline; text-underline-offset: 3px; \
         cursor: pointer; font-weight: 500;"
    )
}

pub fn gate_button_style(gate: Gate, accent: &str, accent_text: &str) -> String {
    let (background, color, cursor) = match gate {
        Gate::Open => (accent, accent_text, "pointer"),
        Gate::Locked => (LOCKED_BACKGROUND, LOCKED_TEXT, "not-allowed"),
    };
    format!(
        "width: 100%; padding: 15px 24px; background: {background}; color: {color}; \
         border: none; cursor: {cursor}; font-family: inherit; font-size: 0.8rem; \
         letter-spacing: 0.1em; text-transform: uppercase; font-weight: 600; \
         transition: all 0.3s ease; display: flex; align-items: center; \
         justify-content: center; gap: 10px;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn recording_hooks() -> (ConsentHooks, Rc<RefCell<Vec<bool>>>, Rc<Cell<u32>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let policy_opens = Rc::new(Cell::new(0));
        let hooks = ConsentHooks {
            on_consent_change: Some({
                let changes = changes.clone();
                Callback::from(move |v: bool| changes.borrow_mut().push(v))
            }),
            on_privacy_policy: Some({
                let policy_opens = policy_opens.clone();
                Callback::from(move |_: ()| policy_opens.set(policy_opens.get() + 1))
            }),
        };
        (hooks, changes, policy_opens)
    }

    fn press(key: &str) -> MarkerEvent {
        MarkerEvent::Key { key: key.to_string(), repeat: false }
    }

    fn counting_action() -> (Callback<()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let action = {
            let calls = calls.clone();
            Callback::from(move |_: ()| calls.set(calls.get() + 1))
        };
        (action, calls)
    }

    #[test]
    fn fresh_consent_is_not_given() {
        assert!(!Consent::default().consented());
    }

    #[test]
    fn toggling_reports_each_new_value() {
        let (hooks, changes, _) = recording_hooks();
        let consent = Consent::default();

        let (consent, outcome) = consent.handle(&MarkerEvent::IndicatorClick, &hooks);
        assert_eq!(outcome, MarkerOutcome::Toggled(true));
        assert!(consent.consented());

        let (consent, outcome) = consent.handle(&MarkerEvent::IndicatorClick, &hooks);
        assert_eq!(outcome, MarkerOutcome::Toggled(false));
        assert!(!consent.consented());

        assert_eq!(*changes.borrow(), vec![true, false]);
    }

    #[test]
    fn final_state_follows_parity_of_activations() {
        let events = [
            MarkerEvent::IndicatorClick,
            MarkerEvent::LabelClick,
            press(" "),
        ];
        for n in 0..40 {
            let (hooks, changes, _) = recording_hooks();
            let mut consent = Consent::default();
            for i in 0..n {
                consent = consent.handle(&events[i % events.len()], &hooks).0;
            }
            assert_eq!(consent.consented(), n % 2 == 1, "after {n} activations");

            let changes = changes.borrow();
            assert_eq!(changes.len(), n);
            for (i, value) in changes.iter().enumerate() {
                assert_eq!(*value, i % 2 == 0);
            }
        }
    }

    #[test]
    fn space_activates_but_other_keys_do_not() {
        let (hooks, changes, _) = recording_hooks();
        let consent = Consent::default();

        let (consent, outcome) = consent.handle(&press("Enter"), &hooks);
        assert_eq!(outcome, MarkerOutcome::Ignored);
        let (consent, outcome) = consent.handle(&press("a"), &hooks);
        assert_eq!(outcome, MarkerOutcome::Ignored);
        assert!(!consent.consented());
        assert!(changes.borrow().is_empty());

        let (consent, _) = consent.handle(&press("Spacebar"), &hooks);
        assert!(consent.consented());
        assert_eq!(*changes.borrow(), vec![true]);
    }

    #[test]
    fn held_space_toggles_once() {
        let (hooks, changes, _) = recording_hooks();
        let mut consent = Consent::default();

        consent = consent.handle(&press(" "), &hooks).0;
        for _ in 0..10 {
            let held = MarkerEvent::Key { key: " ".to_string(), repeat: true };
            let (next, outcome) = consent.handle(&held, &hooks);
            assert_eq!(outcome, MarkerOutcome::Ignored);
            consent = next;
        }

        assert!(consent.consented());
        assert_eq!(*changes.borrow(), vec![true]);
    }

    #[test]
    fn policy_link_does_not_touch_consent() {
        let (hooks, changes, policy_opens) = recording_hooks();
        let consent = Consent::default();

        let (consent, outcome) = consent.handle(&MarkerEvent::PolicyLinkClick, &hooks);
        assert_eq!(outcome, MarkerOutcome::PolicyOpened);
        assert!(!consent.consented());
        assert_eq!(policy_opens.get(), 1);
        assert!(changes.borrow().is_empty());

        let ticked = Consent::default().toggled();
        let (after, _) = ticked.handle(&MarkerEvent::PolicyLinkKey("Enter".to_string()), &hooks);
        assert!(after.consented());
        assert_eq!(policy_opens.get(), 2);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn space_on_policy_link_is_ignored() {
        let (hooks, changes, policy_opens) = recording_hooks();
        let (consent, outcome) =
            Consent::default().handle(&MarkerEvent::PolicyLinkKey(" ".to_string()), &hooks);
        assert_eq!(outcome, MarkerOutcome::Ignored);
        assert!(!consent.consented());
        assert_eq!(policy_opens.get(), 0);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn toggle_without_listener_still_updates_state() {
        let hooks = ConsentHooks::default();
        let (consent, outcome) = Consent::default().handle(&MarkerEvent::LabelClick, &hooks);
        assert!(consent.consented());
        assert_eq!(outcome, MarkerOutcome::Toggled(true));

        let (consent, outcome) = consent.handle(&MarkerEvent::PolicyLinkClick, &hooks);
        assert!(consent.consented());
        assert_eq!(outcome, MarkerOutcome::PolicyOpened);
    }

    #[test]
    fn gate_fires_only_when_consented() {
        for consented in [false, true] {
            let (action, calls) = counting_action();
            let fired = Gate::from(consented).fire(Some(&action));
            assert_eq!(fired, consented);
            assert_eq!(calls.get(), u32::from(consented));
        }
    }

    #[test]
    fn locked_gate_never_fires_however_often_activated() {
        let (action, calls) = counting_action();
        let gate = Gate::from(false);
        for _ in 0..100 {
            assert!(!gate.fire(Some(&action)));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn gate_follows_rerender_with_new_consent() {
        let (action, calls) = counting_action();

        Gate::from(false).fire(Some(&action));
        assert_eq!(calls.get(), 0);

        Gate::from(true).fire(Some(&action));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn open_gate_without_action_is_a_no_op() {
        assert!(!Gate::Open.fire(None));
    }

    #[test]
    fn locked_gate_shows_lock_icon() {
        assert_eq!(Gate::Locked.icon(), IconKind::Lock);
        assert_eq!(Gate::Open.icon(), IconKind::ShieldCheck);
        assert!(!Gate::Locked.is_open());
    }

    #[test]
    fn locked_button_is_disabled_and_shows_fixed_label() {
        let locked = Gate::from(false).button_view();
        assert!(locked.disabled);
        assert_eq!(locked.icon, IconKind::Lock);
        assert_eq!(locked.locked_label, Some("Consent Required to Submit"));

        let open = Gate::from(true).button_view();
        assert!(!open.disabled);
        assert_eq!(open.icon, IconKind::ShieldCheck);
        assert_eq!(open.locked_label, None);
    }

    #[test]
    fn gate_style_is_derived_from_consent_only() {
        let open = gate_button_style(Gate::Open, "#dc2626", "#fff");
        assert!(open.contains("background: #dc2626"));
        assert!(open.contains("cursor: pointer"));

        let locked = gate_button_style(Gate::Locked, "#dc2626", "#fff");
        assert!(locked.contains("background: #e0ddd8"));
        assert!(locked.contains("cursor: not-allowed"));
        assert!(!locked.contains("#dc2626"));

        assert_eq!(locked, gate_button_style(Gate::Locked, "#123456", "#000"));
    }

    #[test]
    fn marker_styles_use_accent_only_when_ticked() {
        assert!(marker_style(true, "#dc2626").contains("1px solid #dc2626"));
        assert!(marker_style(false, "#dc2626").contains("1px solid #d0ccc4"));
        assert!(checkbox_style(true, "#dc2626").contains("background: #dc2626"));
        assert!(checkbox_style(false, "#dc2626").contains("background: transparent"));
    }

    #[test]
    fn statement_names_law_withdrawal_and_practitioner() {
        let text = consent_statement("Dr. Tan").plain_text();
        assert!(text.starts_with("I give my express consent for Dr. Tan's clinic"));
        assert!(text.contains(GOVERNING_LAW));
        assert!(text.contains("withdraw consent at any time by contacting the clinic directly"));
        assert!(text.ends_with("agree to the Privacy Policy."));
    }

    #[test]
    fn badges_include_encryption_notice() {
        let labels: Vec<_> = COMPLIANCE_BADGES.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            ["PDPA 2010 Compliant", "Data Encrypted in Transit", "APC-Safe Architecture"]
        );
    }
}
