#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;

use seshat::event::{Dispatch, InboundEvent, RenderInstruction, UserId};
use seshat::discount::DiscountRecord;
use seshat::handlers::{Handlers, Issuer};
use seshat::ledger::{DiscountLedger, JsonFileStore};
use seshat::router::Router;
use seshat::session::SessionTracker;

/// Router backed by a JSON ledger in a temporary directory
pub struct TestBot {
    pub router: Router,
    pub store: Arc<JsonFileStore>,
    _dir: TempDir,
}

impl TestBot {
    pub fn new() -> Self {
        Self::with_issuer(Arc::new(DiscountRecord::issue))
    }

    /// Router whose fresh codes come from `issuer`
    pub fn with_issuer(issuer: Issuer) -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("remises.json")));
        let ledger = Arc::new(DiscountLedger::new(store.clone()));
        let sessions = Arc::new(SessionTracker::new());
        let router = Router::new(Arc::new(Handlers::with_issuer(ledger, sessions, issuer)));
        Self {
            router,
            store,
            _dir: dir,
        }
    }

    pub async fn press(&self, user: &str, key: &str) -> Dispatch {
        self.router
            .dispatch(InboundEvent::ButtonPress {
                routing_key: key.to_string(),
                user_id: UserId::from(user),
            })
            .await
    }

    pub async fn command(&self, user: &str, name: &str) -> Dispatch {
        self.router
            .dispatch(InboundEvent::Command {
                name: name.to_string(),
                user_id: UserId::from(user),
            })
            .await
    }

    pub async fn say(&self, user: &str, body: &str) -> Dispatch {
        self.router
            .dispatch(InboundEvent::TextMessage {
                body: body.to_string(),
                user_id: UserId::from(user),
            })
            .await
    }
}

/// Unwrap a rendered dispatch
pub fn rendered(dispatch: Dispatch) -> RenderInstruction {
    match dispatch {
        Dispatch::Render(render) => render,
        Dispatch::Ignored => panic!("expected a rendered response"),
    }
}

/// Extract the code shown between `<code>` tags
pub fn shown_code(render: &RenderInstruction) -> String {
    let start = render.text.find("<code>").expect("code tag") + "<code>".len();
    let end = render.text[start..].find("</code>").expect("closing code tag") + start;
    render.text[start..end].to_string()
}
