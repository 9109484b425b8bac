//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::theme::{Palette, Theme};
use wardstake_chain::StakingSnapshot;
use wardstake_core::{StakeRequest, parse_stake_amount};

/// Modal currently shown over the main view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    /// Stake amount entry and validator details.
    Stake(StakeForm),
    /// Static panel pointing the user at their signing tool.
    SignTransaction,
}

/// Input state owned by one stake modal instance.
///
/// Recreated from `Default` every time the modal opens; nothing survives
/// a close, and no other component can reach it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StakeForm {
    /// Raw amount text as typed.
    pub amount_input: String,
    /// Whether the extended details section is expanded.
    pub all_details: bool,
}

/// Status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

/// Application state.
pub struct App {
    /// Current theme.
    pub theme: Theme,
    /// Color palette for rendering.
    pub palette: Palette,
    /// Latest staking data; `None` until the first refresh lands.
    pub snapshot: Option<StakingSnapshot>,
    /// Decimal places of the gateway's scaled APR rate.
    pub rate_decimals: u32,
    /// Active modal.
    pub modal: Modal,
    /// A submission is in flight; the stake trigger stays disabled until
    /// the outcome action arrives.
    pub stake_in_flight: bool,
    /// Status line content.
    pub status: Option<StatusLine>,
    /// Whether the first snapshot is still loading.
    pub loading: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Tick counter for the loading spinner.
    spinner_tick: usize,
}

impl App {
    /// Create a new application instance.
    pub fn new(theme: Theme, rate_decimals: u32) -> Self {
        let palette = theme.palette();
        Self {
            theme,
            palette,
            snapshot: None,
            rate_decimals,
            modal: Modal::None,
            stake_in_flight: false,
            status: None,
            loading: true,
            should_quit: false,
            spinner_tick: 0,
        }
    }

    /// Handle tick events for animations.
    pub fn tick(&mut self) {
        if self.loading || self.stake_in_flight {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Get the current spinner character for loading animation.
    pub fn spinner_char(&self) -> char {
        const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        SPINNER_CHARS[self.spinner_tick % SPINNER_CHARS.len()]
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match &self.modal {
            Modal::None => self.handle_main_key(key),
            Modal::Stake(_) => self.handle_stake_key(key),
            Modal::SignTransaction => {
                // Dismissing the panel abandons interaction only; the
                // in-flight submission keeps running in the chain task.
                if key.code == KeyCode::Esc {
                    self.modal = Modal::None;
                }
                None
            }
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('s') => {
                self.open_stake_modal();
                None
            }
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        }
    }

    /// Open the stake modal with a fresh form.
    pub fn open_stake_modal(&mut self) {
        if self.snapshot.is_none() {
            self.status = Some(StatusLine::Error("Still loading validator data".into()));
            return;
        }
        self.modal = Modal::Stake(StakeForm::default());
    }

    fn handle_stake_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            self.modal = Modal::None;
            return None;
        }

        // An inactive validator disables the whole form; only Esc works.
        if !self.validator_is_active() {
            return None;
        }

        match key.code {
            KeyCode::Enter => self.submit_stake(),
            KeyCode::Tab => {
                if let Modal::Stake(form) = &mut self.modal {
                    form.all_details = !form.all_details;
                }
                None
            }
            KeyCode::Backspace => {
                if let Modal::Stake(form) = &mut self.modal {
                    form.amount_input.pop();
                }
                None
            }
            KeyCode::Char(c) if !c.is_control() => {
                if let Modal::Stake(form) = &mut self.modal {
                    form.amount_input.push(c);
                }
                None
            }
            _ => None,
        }
    }

    fn validator_is_active(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.validator.status.is_bonded())
    }

    /// Run the submission flow for the current form input.
    ///
    /// Declines silently (no status message, no side effect) when the
    /// input does not parse, the validator is not bonded, or a previous
    /// submission has not settled yet. On success the request goes to
    /// the chain task and the sign-transaction panel replaces the form.
    fn submit_stake(&mut self) -> Option<Action> {
        if self.stake_in_flight {
            return None;
        }
        let snapshot = self.snapshot.as_ref()?;
        if !snapshot.validator.status.is_bonded() {
            return None;
        }
        let Modal::Stake(form) = &self.modal else {
            return None;
        };
        let amount_uward = parse_stake_amount(&form.amount_input)?;

        let request = StakeRequest {
            amount_uward,
            validator_address: snapshot.validator.operator_address.clone(),
        };
        self.stake_in_flight = true;
        self.modal = Modal::SignTransaction;
        Some(Action::SubmitStake(request))
    }

    /// Apply a state-update action from the chain task.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetSnapshot(snapshot) => {
                self.snapshot = Some(*snapshot);
                self.loading = false;
            }
            Action::SnapshotFailed(msg) => {
                self.loading = false;
                self.status = Some(StatusLine::Error(msg));
            }
            Action::StakeAccepted(result) => {
                self.stake_in_flight = false;
                if self.modal == Modal::SignTransaction {
                    self.modal = Modal::None;
                }
                self.status = Some(if result.is_accepted() {
                    StatusLine::Info(format!("Transaction broadcast: {}", result.tx_hash))
                } else {
                    StatusLine::Error(format!(
                        "Transaction rejected (code {}): {}",
                        result.code,
                        result.raw_log.unwrap_or_default()
                    ))
                });
            }
            Action::StakeFailed(msg) => {
                self.stake_in_flight = false;
                if self.modal == Modal::SignTransaction {
                    self.modal = Modal::None;
                }
                self.status = Some(StatusLine::Error(format!("Stake submission failed: {msg}")));
            }
            // Routed to the chain task by the main loop.
            Action::Refresh | Action::SubmitStake(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use wardstake_chain::TxResult;
    use wardstake_core::{BondStatus, StakeDetails, ValidatorSummary};

    const OPERATOR: &str = "wardenvaloper1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";

    fn snapshot(status: BondStatus) -> StakingSnapshot {
        StakingSnapshot {
            validator: ValidatorSummary {
                operator_address: OPERATOR.into(),
                moniker: Some("Chorus One".into()),
                status,
                tokens: 100,
                commission_rate: 0.05,
            },
            bonded_tokens: Some(1000),
            apr: Some(13 * 10u128.pow(16)),
        }
    }

    fn app_with(status: BondStatus) -> App {
        let mut app = App::new(Theme::Dark, 18);
        app.apply(Action::SetSnapshot(Box::new(snapshot(status))));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_amount(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(app.handle_key(key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_submit_valid_amount_active_validator() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");

        let action = app.handle_key(key(KeyCode::Enter));
        match action {
            Some(Action::SubmitStake(request)) => {
                assert_eq!(request.amount_uward, 10_000_000);
                assert_eq!(request.validator_address, OPERATOR);
            }
            other => panic!("expected SubmitStake, got {other:?}"),
        }
        assert!(app.stake_in_flight);
        assert_eq!(app.modal, Modal::SignTransaction);
    }

    #[test]
    fn test_details_panel_shows_voting_power() {
        let app = app_with(BondStatus::Bonded);
        let s = app.snapshot.as_ref().unwrap();
        let details = StakeDetails::new(&s.validator, s.bonded_tokens, s.apr, app.rate_decimals);
        assert_eq!(details.voting_power, "10.00%");
        assert_eq!(details.expected_apr, "13.00%");
    }

    #[test]
    fn test_invalid_amount_is_silent_noop() {
        let mut app = app_with(BondStatus::Bonded);
        for input in ["abc", "", "0", "-5"] {
            app.open_stake_modal();
            type_amount(&mut app, input);
            assert_eq!(app.handle_key(key(KeyCode::Enter)), None, "input {input:?}");
            assert!(!app.stake_in_flight);
            assert!(matches!(app.modal, Modal::Stake(_)));
            assert_eq!(app.status, None);
            app.modal = Modal::None;
        }
    }

    #[test]
    fn test_inactive_validator_suppresses_submission() {
        for status in [
            BondStatus::Unbonded,
            BondStatus::Unbonding,
            BondStatus::Unspecified,
        ] {
            let mut app = app_with(status);
            app.open_stake_modal();
            // The disabled form ignores typing; force an amount in to
            // prove submission is still suppressed.
            if let Modal::Stake(form) = &mut app.modal {
                form.amount_input = "5".into();
            }
            assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
            assert!(!app.stake_in_flight);
        }
    }

    #[test]
    fn test_inactive_validator_form_ignores_typing() {
        let mut app = app_with(BondStatus::Unbonding);
        app.open_stake_modal();
        type_amount(&mut app, "5");
        let Modal::Stake(form) = &app.modal else {
            panic!("stake modal expected");
        };
        assert_eq!(form.amount_input, "");
    }

    #[test]
    fn test_in_flight_lock_blocks_second_submission() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");
        assert!(app.handle_key(key(KeyCode::Enter)).is_some());

        // A second stake attempt while the first is pending goes nowhere.
        app.open_stake_modal();
        type_amount(&mut app, "10");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);

        // The outcome action releases the lock.
        app.apply(Action::StakeAccepted(TxResult {
            tx_hash: "CAFE".into(),
            code: 0,
            raw_log: None,
        }));
        assert!(!app.stake_in_flight);
        type_amount(&mut app, "1");
        assert!(app.handle_key(key(KeyCode::Enter)).is_some());
    }

    #[test]
    fn test_modal_state_resets_on_reopen() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "42");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(
            app.modal,
            Modal::Stake(StakeForm {
                amount_input: "42".into(),
                all_details: true,
            })
        );

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.modal, Modal::None);

        app.open_stake_modal();
        assert_eq!(app.modal, Modal::Stake(StakeForm::default()));
    }

    #[test]
    fn test_backspace_edits_amount() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "12.5");
        app.handle_key(key(KeyCode::Backspace));
        let Modal::Stake(form) = &app.modal else {
            panic!("stake modal expected");
        };
        assert_eq!(form.amount_input, "12.");
    }

    #[test]
    fn test_accepted_outcome_closes_sign_panel() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");
        app.handle_key(key(KeyCode::Enter));

        app.apply(Action::StakeAccepted(TxResult {
            tx_hash: "2AF601".into(),
            code: 0,
            raw_log: None,
        }));
        assert_eq!(app.modal, Modal::None);
        assert_eq!(
            app.status,
            Some(StatusLine::Info("Transaction broadcast: 2AF601".into()))
        );
    }

    #[test]
    fn test_rejected_outcome_reports_error() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");
        app.handle_key(key(KeyCode::Enter));

        app.apply(Action::StakeAccepted(TxResult {
            tx_hash: "2AF601".into(),
            code: 5,
            raw_log: Some("insufficient funds".into()),
        }));
        assert!(!app.stake_in_flight);
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn test_failed_submission_releases_lock() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");
        app.handle_key(key(KeyCode::Enter));

        app.apply(Action::StakeFailed("connection refused".into()));
        assert!(!app.stake_in_flight);
        assert_eq!(app.modal, Modal::None);
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn test_dismissing_sign_panel_keeps_submission_running() {
        let mut app = app_with(BondStatus::Bonded);
        app.open_stake_modal();
        type_amount(&mut app, "10");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.modal, Modal::SignTransaction);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.modal, Modal::None);
        assert!(app.stake_in_flight);
    }

    #[test]
    fn test_open_modal_without_snapshot() {
        let mut app = App::new(Theme::Dark, 18);
        app.open_stake_modal();
        assert_eq!(app.modal, Modal::None);
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app_with(BondStatus::Bonded);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_refresh_key() {
        let mut app = app_with(BondStatus::Bonded);
        assert!(matches!(
            app.handle_key(key(KeyCode::Char('r'))),
            Some(Action::Refresh)
        ));
    }
}
