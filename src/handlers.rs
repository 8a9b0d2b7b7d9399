//! Interaction handlers: the discount flows plus the static content pages.
//!
//! Handlers never talk to Telegram. They read and update the ledger and the
//! session tracker, and return what should be shown.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::content;
use crate::discount::DiscountRecord;
use crate::errors::LedgerError;
use crate::event::{Dispatch, MenuReference, RenderInstruction, UserId};
use crate::ledger::DiscountLedger;
use crate::router::{ButtonRoute, Command};
use crate::session::{is_email_shaped, FlowTag, SessionTracker};

/// Produces a fresh discount record when a user has none yet
pub type Issuer = Arc<dyn Fn() -> DiscountRecord + Send + Sync>;

/// Shared state the handlers operate on
pub struct Handlers {
    ledger: Arc<DiscountLedger>,
    sessions: Arc<SessionTracker>,
    issuer: Issuer,
}

impl Handlers {
    pub fn new(ledger: Arc<DiscountLedger>, sessions: Arc<SessionTracker>) -> Self {
        Self::with_issuer(ledger, sessions, Arc::new(DiscountRecord::issue))
    }

    /// Use a custom issuer, e.g. a fixed clock in tests
    pub fn with_issuer(
        ledger: Arc<DiscountLedger>,
        sessions: Arc<SessionTracker>,
        issuer: Issuer,
    ) -> Self {
        Self {
            ledger,
            sessions,
            issuer,
        }
    }

    pub fn sessions(&self) -> &SessionTracker {
        &self.sessions
    }

    pub async fn handle_command(&self, user_id: &UserId, command: Command) -> RenderInstruction {
        match command {
            Command::Start => RenderInstruction::rich(content::WELCOME, MenuReference::Main),
            Command::Code => self.show_code(user_id).await,
            Command::Faq => RenderInstruction::rich(content::FAQ_MENU, MenuReference::Faq),
        }
    }

    pub async fn handle_button(&self, user_id: &UserId, route: ButtonRoute) -> RenderInstruction {
        match route {
            ButtonRoute::Discount => self.request_email(user_id).await,
            ButtonRoute::DiscountDirect => self.issue_directly(user_id).await,
            other => content::page(other).unwrap_or_else(|| {
                RenderInstruction::rich(content::MAIN_MENU, MenuReference::Main)
            }),
        }
    }

    /// Free text: only consumed while the user is in a flow
    pub async fn handle_text(&self, user_id: &UserId, body: &str) -> Dispatch {
        match self.sessions.current_flow(user_id).await {
            Some(FlowTag::AwaitingEmail) => Dispatch::Render(self.receive_email(user_id, body).await),
            None => {
                debug!(user_id = %user_id, "Text received outside of any flow, ignoring");
                Dispatch::Ignored
            }
        }
    }

    /// Flow A: issue (or return) the user's code straight away
    async fn issue_directly(&self, user_id: &UserId) -> RenderInstruction {
        match self.get_or_issue(user_id).await {
            Ok(record) => RenderInstruction::rich(
                content::discount_issued(&record),
                MenuReference::BackToMain,
            ),
            Err(e) => storage_failure(user_id, &e),
        }
    }

    /// Flow B, first step: ask for an email address
    async fn request_email(&self, user_id: &UserId) -> RenderInstruction {
        self.sessions.begin_flow(user_id, FlowTag::AwaitingEmail).await;
        info!(user_id = %user_id, "Waiting for email before issuing discount code");
        RenderInstruction::rich(content::EMAIL_PROMPT, MenuReference::None)
    }

    /// Flow B, second step: validate the email and issue the code
    ///
    /// On an invalid address the flow stays active so the user can retry
    /// without pressing the button again.
    async fn receive_email(&self, user_id: &UserId, body: &str) -> RenderInstruction {
        if !is_email_shaped(body) {
            info!(user_id = %user_id, "Rejected malformed email address");
            return RenderInstruction::plain(content::EMAIL_INVALID, MenuReference::None);
        }

        self.sessions.end_flow(user_id).await;
        match self.get_or_issue(user_id).await {
            Ok(record) => RenderInstruction::rich(
                content::discount_after_email(&record),
                MenuReference::Main,
            ),
            Err(e) => storage_failure(user_id, &e),
        }
    }

    /// Flow C: read-only lookup of the user's code
    async fn show_code(&self, user_id: &UserId) -> RenderInstruction {
        match self.ledger.lookup(user_id).await {
            Ok(Some(record)) => {
                RenderInstruction::rich(content::discount_lookup(&record), MenuReference::None)
            }
            Ok(None) => RenderInstruction::rich(content::NO_CODE_YET, MenuReference::DiscountOptions),
            Err(e) => storage_failure(user_id, &e),
        }
    }

    async fn get_or_issue(&self, user_id: &UserId) -> Result<DiscountRecord, LedgerError> {
        let issuer = Arc::clone(&self.issuer);
        self.ledger.get_or_issue(user_id, move || issuer()).await
    }
}

fn storage_failure(user_id: &UserId, e: &LedgerError) -> RenderInstruction {
    error!(user_id = %user_id, error = %e, "Discount ledger operation failed");
    RenderInstruction::plain(content::STORAGE_FAILURE, MenuReference::BackToMain)
}
