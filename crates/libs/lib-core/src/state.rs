//! # Page State
//!
//! The whole page is one [`AppState`] value moved through [`update`]. The view
//! only reads the state and dispatches [`Msg`]s; anything that talks to the
//! wallet or blocks the user comes back out of [`update`] as an [`Effect`] for
//! the view layer to run.
//!
//! ## Transitions
//!
//! ```text
//! ConnectClicked --> connecting --Connected(session)--> session replaced
//!                              \--ConnectFailed------> session untouched (+ Alert)
//!
//! Connected, idle --SendClicked--> sending(ticket) --SendFinished(ticket)--> idle + outcome
//! ```
//!
//! ## Tickets
//!
//! Every send gets a fresh [`Ticket`]. While one is in flight further
//! `SendClicked` messages are refused, and a `SendFinished` whose ticket is not
//! the in-flight one (say, after a disconnect) is dropped as stale.

use crate::config::Config;
use crate::error::{TransferError, WalletError};
use crate::session::WalletSession;
use crate::transfer::{TransferRequest, NOT_CONNECTED};
use alloy_primitives::TxHash;
use tracing::{debug, info, warn};

/// Identifies one send attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

/// Latest send result. Overwritten by the next attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Success { tx_hash: TxHash },
    Failure { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// Present only after a successful connect
    pub session: Option<WalletSession>,
    /// A connect attempt is awaiting the wallet
    pub connecting: bool,
    pub form: TransferForm,
    pub in_flight: Option<Ticket>,
    pub outcome: Option<TransferOutcome>,
    next_ticket: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    /// Fresh page: disconnected, amount pre-filled.
    pub fn new(config: &Config) -> Self {
        Self {
            session: None,
            connecting: false,
            form: TransferForm {
                recipient: String::new(),
                amount: config.default_amount.clone(),
            },
            in_flight: None,
            outcome: None,
            next_ticket: 1,
        }
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn success_hash(&self) -> Option<TxHash> {
        match self.outcome {
            Some(TransferOutcome::Success { tx_hash }) => Some(tx_hash),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.outcome {
            Some(TransferOutcome::Failure { message }) => Some(message),
            _ => None,
        }
    }

    fn request(&self) -> TransferRequest {
        TransferRequest::new(self.form.recipient.clone(), self.form.amount.clone())
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

/// Everything that can happen to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    ConnectClicked,
    Connected(WalletSession),
    ConnectFailed(WalletError),
    Disconnect,
    RecipientChanged(String),
    AmountChanged(String),
    SendClicked,
    SendFinished {
        ticket: Ticket,
        result: Result<TxHash, TransferError>,
    },
}

/// Work for the view layer to carry out after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run the connector.
    Connect,
    /// Run the submitter and answer with `Msg::SendFinished { ticket, .. }`.
    Send {
        ticket: Ticket,
        session: WalletSession,
        request: TransferRequest,
    },
    /// Show a blocking alert.
    Alert(String),
}

/// The single transition function.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Option<Effect>) {
    let effect = match msg {
        Msg::ConnectClicked => {
            if state.is_connecting() {
                debug!("Connect already in progress");
                None
            } else {
                state.connecting = true;
                Some(Effect::Connect)
            }
        }

        Msg::Connected(session) => {
            info!(address = %session.display_address(), "Session established");
            state.connecting = false;
            state.session = Some(session);
            None
        }

        Msg::ConnectFailed(err) => {
            warn!("Wallet connection failed: {}", err);
            state.connecting = false;
            Some(Effect::Alert(err.to_string()))
        }

        Msg::Disconnect => {
            if let Some(ticket) = state.in_flight.take() {
                debug!(ticket = ticket.id(), "Abandoning in-flight transfer");
            }
            state.session = None;
            state.connecting = false;
            state.outcome = None;
            None
        }

        Msg::RecipientChanged(recipient) => {
            state.form.recipient = recipient;
            None
        }

        Msg::AmountChanged(amount) => {
            state.form.amount = amount;
            None
        }

        Msg::SendClicked => begin_send(&mut state),

        Msg::SendFinished { ticket, result } => finish_send(&mut state, ticket, result),
    };

    (state, effect)
}

fn begin_send(state: &mut AppState) -> Option<Effect> {
    if let Some(ticket) = state.in_flight {
        debug!(ticket = ticket.id(), "Send refused, transfer already in flight");
        return None;
    }

    let request = state.request();
    if let Err(err) = request.ensure_present() {
        return Some(Effect::Alert(err.to_string()));
    }

    let Some(session) = state.session().cloned() else {
        return Some(Effect::Alert(TransferError::MissingInput(NOT_CONNECTED).to_string()));
    };

    if let Err(err) = request.validate() {
        return Some(Effect::Alert(err.to_string()));
    }

    let ticket = state.issue_ticket();
    state.in_flight = Some(ticket);
    state.outcome = None;
    debug!(ticket = ticket.id(), "Send started");

    Some(Effect::Send {
        ticket,
        session,
        request,
    })
}

fn finish_send(
    state: &mut AppState,
    ticket: Ticket,
    result: Result<TxHash, TransferError>,
) -> Option<Effect> {
    if state.in_flight != Some(ticket) {
        debug!(ticket = ticket.id(), "Dropping stale transfer result");
        return None;
    }
    state.in_flight = None;

    match result {
        Ok(tx_hash) => {
            state.form.recipient.clear();
            state.outcome = Some(TransferOutcome::Success { tx_hash });
            None
        }
        Err(err) if err.is_preflight() => Some(Effect::Alert(err.to_string())),
        Err(err) => {
            state.outcome = Some(TransferOutcome::Failure {
                message: err.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::testing::MockProvider;
    use alloy_primitives::Address;
    use std::str::FromStr;

    fn session() -> WalletSession {
        WalletSession::new(Address::from_str(MockProvider::ACCOUNT).unwrap(), 10218)
    }

    fn tx_hash() -> TxHash {
        TxHash::from_str(MockProvider::TX_HASH).unwrap()
    }

    fn connected() -> AppState {
        let (state, _) = update(AppState::default(), Msg::ConnectClicked);
        let (state, _) = update(state, Msg::Connected(session()));
        let (state, _) = update(state, Msg::RecipientChanged(MockProvider::RECIPIENT.to_string()));
        state
    }

    fn sending() -> (AppState, Ticket) {
        match update(connected(), Msg::SendClicked) {
            (state, Some(Effect::Send { ticket, .. })) => (state, ticket),
            other => panic!("expected a send effect, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(!state.is_connected());
        assert_eq!(state.form.amount, "0.001");
        assert!(state.form.recipient.is_empty());
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_connect_flow() {
        let (state, effect) = update(AppState::default(), Msg::ConnectClicked);
        assert_eq!(effect, Some(Effect::Connect));
        assert!(state.is_connecting());

        let (state, effect) = update(state, Msg::ConnectClicked);
        assert_eq!(effect, None);

        let (state, _) = update(state, Msg::Connected(session()));
        assert_eq!(state.session(), Some(&session()));
    }

    #[test]
    fn test_connect_failure_alerts_and_leaves_session_absent() {
        let (state, _) = update(AppState::default(), Msg::ConnectClicked);
        let (state, effect) = update(state, Msg::ConnectFailed(WalletError::ProviderMissing));

        assert!(state.session.is_none());
        assert!(!state.is_connecting());
        assert_eq!(effect, Some(Effect::Alert(WalletError::ProviderMissing.to_string())));
    }

    #[test]
    fn test_failed_reconnect_keeps_existing_session() {
        let (state, _) = update(connected(), Msg::ConnectClicked);
        assert_eq!(state.session(), Some(&session()));

        let (state, _) = update(
            state,
            Msg::ConnectFailed(WalletError::UserRejected("User rejected the request.".into())),
        );
        assert_eq!(state.session(), Some(&session()));
        assert!(!state.is_connecting());
    }

    #[test]
    fn test_reconnect_same_account_keeps_single_session() {
        let (state, _) = update(connected(), Msg::ConnectClicked);
        let (state, _) = update(state, Msg::Connected(session()));
        assert_eq!(state.session(), Some(&session()));
        assert_eq!(state.form.recipient, MockProvider::RECIPIENT);
    }

    #[test]
    fn test_send_requires_inputs() {
        let (state, _) = update(connected(), Msg::RecipientChanged(String::new()));
        let (state, effect) = update(state, Msg::SendClicked);
        assert!(matches!(effect, Some(Effect::Alert(ref msg)) if msg == crate::transfer::MISSING_FIELDS));
        assert!(!state.is_sending());

        let (state, _) = update(connected(), Msg::AmountChanged(String::new()));
        let (_, effect) = update(state, Msg::SendClicked);
        assert!(matches!(effect, Some(Effect::Alert(_))));
    }

    #[test]
    fn test_send_requires_session() {
        let (state, _) = update(
            AppState::default(),
            Msg::RecipientChanged(MockProvider::RECIPIENT.to_string()),
        );
        let (state, effect) = update(state, Msg::SendClicked);
        assert_eq!(effect, Some(Effect::Alert(NOT_CONNECTED.to_string())));
        assert!(!state.is_sending());
    }

    #[test]
    fn test_send_rejects_bad_amount_before_wallet() {
        let (state, _) = update(connected(), Msg::AmountChanged("-5".to_string()));
        let (state, effect) = update(state, Msg::SendClicked);
        assert!(matches!(effect, Some(Effect::Alert(ref msg)) if msg.starts_with("Invalid amount")));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_send_success_clears_recipient_keeps_amount() {
        let (state, ticket) = sending();
        assert!(state.is_sending());

        let (state, effect) = update(state, Msg::SendFinished { ticket, result: Ok(tx_hash()) });

        assert_eq!(effect, None);
        assert!(!state.is_sending());
        assert_eq!(state.success_hash(), Some(tx_hash()));
        assert!(state.form.recipient.is_empty());
        assert_eq!(state.form.amount, "0.001");
    }

    #[test]
    fn test_send_failure_keeps_session_and_reports_message() {
        let (state, ticket) = sending();
        let err = TransferError::Provider(ProviderError::new(4001, "User denied transaction signature."));

        let (state, _) = update(state, Msg::SendFinished { ticket, result: Err(err) });

        assert_eq!(state.session(), Some(&session()));
        assert_eq!(state.failure_message(), Some("User denied transaction signature."));
        assert!(!state.is_sending());
        assert_eq!(state.form.recipient, MockProvider::RECIPIENT);
    }

    #[test]
    fn test_preflight_result_becomes_alert() {
        let (state, ticket) = sending();
        let err = TransferError::InvalidAddress("checksum mismatch".to_string());

        let (state, effect) = update(state, Msg::SendFinished { ticket, result: Err(err.clone()) });

        assert_eq!(effect, Some(Effect::Alert(err.to_string())));
        assert!(state.outcome.is_none());
        assert!(!state.is_sending());
    }

    #[test]
    fn test_second_send_refused_while_in_flight() {
        let (state, ticket) = sending();
        let (state, effect) = update(state, Msg::SendClicked);
        assert_eq!(effect, None);
        assert_eq!(state.in_flight, Some(ticket));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let (state, first) = sending();
        let (state, _) = update(state, Msg::Disconnect);
        let (state, _) = update(state, Msg::Connected(session()));
        let (state, _) = update(state, Msg::RecipientChanged(MockProvider::RECIPIENT.to_string()));
        let (state, effect) = update(state, Msg::SendClicked);
        let second = match effect {
            Some(Effect::Send { ticket, .. }) => ticket,
            other => panic!("expected a send effect, got {:?}", other),
        };
        assert_ne!(first, second);

        let (state, _) = update(
            state,
            Msg::SendFinished {
                ticket: first,
                result: Err(TransferError::ProviderUnavailable),
            },
        );
        assert_eq!(state.in_flight, Some(second));
        assert!(state.outcome.is_none());

        let (state, _) = update(state, Msg::SendFinished { ticket: second, result: Ok(tx_hash()) });
        assert_eq!(state.success_hash(), Some(tx_hash()));
    }

    #[test]
    fn test_new_send_clears_previous_outcome() {
        let (state, ticket) = sending();
        let (state, _) = update(
            state,
            Msg::SendFinished {
                ticket,
                result: Err(TransferError::ProviderUnavailable),
            },
        );
        assert!(state.failure_message().is_some());

        let (state, _) = update(state, Msg::SendClicked);
        assert!(state.outcome.is_none());
        assert!(state.is_sending());
    }
}
