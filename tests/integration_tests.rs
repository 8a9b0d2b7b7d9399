//! # Integration Tests
//!
//! End-to-end routing tests for the Seshat Assistant bot: discount issuance,
//! code lookup and the static menus.

mod common;

use anyhow::Result;
use common::{rendered, shown_code, TestBot};
use strum::IntoEnumIterator;

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use seshat::discount::{DiscountRecord, Expiry};
use seshat::event::{Dispatch, MenuReference, UserId};
use seshat::ledger::LedgerStore;
use seshat::router::ButtonRoute;

/// Walk through the direct issuance and lookup of two users
#[tokio::test]
async fn test_discount_scenario() -> Result<()> {
    let bot = TestBot::new();

    let first = rendered(bot.press("42", "fr_Remise_direct").await);
    let code_42 = shown_code(&first);
    assert_eq!(first.navigation, MenuReference::BackToMain);
    assert!(first.text.contains("-15%"));

    // Pressing again returns the exact same record
    let again = rendered(bot.press("42", "fr_Remise_direct").await);
    assert_eq!(again, first);

    // /code shows the same code
    let lookup = rendered(bot.command("42", "code").await);
    assert_eq!(shown_code(&lookup), code_42);

    // Another user gets an independent record
    bot.press("7", "fr_Remise_direct").await;
    let ledger = bot.store.load().await?;
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[&UserId::from("42")].code, code_42);
    assert!(ledger.contains_key(&UserId::from("7")));
    Ok(())
}

/// /code never issues a code
#[tokio::test]
async fn test_code_lookup_without_record() -> Result<()> {
    let bot = TestBot::new();

    let lookup = rendered(bot.command("42", "code").await);
    assert_eq!(lookup.navigation, MenuReference::DiscountOptions);
    assert!(!lookup.text.contains("<code>"));
    assert!(bot.store.load().await?.is_empty());
    Ok(())
}

/// Stale or unknown routing keys are ignored without touching any state
#[tokio::test]
async fn test_unroutable_events_are_ignored() -> Result<()> {
    let bot = TestBot::new();

    assert_eq!(bot.press("42", "fr_Ancien_Bouton").await, Dispatch::Ignored);
    assert_eq!(bot.press("42", "").await, Dispatch::Ignored);
    assert_eq!(bot.command("42", "help").await, Dispatch::Ignored);
    assert!(bot.store.load().await?.is_empty());
    Ok(())
}

/// Every informational button renders without reading or writing state
#[tokio::test]
async fn test_static_pages_are_stateless() -> Result<()> {
    let bot = TestBot::new();

    for route in ButtonRoute::iter()
        .filter(|r| !matches!(r, ButtonRoute::Discount | ButtonRoute::DiscountDirect))
    {
        let page = rendered(bot.press("42", route.key()).await);
        assert!(!page.text.is_empty(), "{route:?} rendered nothing");
    }

    assert!(bot.store.load().await?.is_empty());
    assert_eq!(
        bot.router
            .handlers()
            .sessions()
            .current_flow(&UserId::from("42"))
            .await,
        None
    );
    Ok(())
}

#[tokio::test]
async fn test_start_and_faq_commands() -> Result<()> {
    let bot = TestBot::new();

    let welcome = rendered(bot.command("42", "start").await);
    assert!(welcome.text.contains("Bienvenue"));
    assert_eq!(welcome.navigation, MenuReference::Main);

    let faq = rendered(bot.command("42", "faq").await);
    assert_eq!(faq.navigation, MenuReference::Faq);
    assert_eq!(faq, rendered(bot.press("42", "fr_FAQ").await));
    Ok(())
}

/// The shown and stored expiry is exactly 30 days after issuance
#[tokio::test]
async fn test_direct_issuance_uses_issuance_clock() -> Result<()> {
    let issued_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let bot = TestBot::with_issuer(Arc::new(move || DiscountRecord::issue_at(issued_at)));

    let page = rendered(bot.press("42", "fr_Remise_direct").await);
    assert!(page.text.contains("15 November 2026"), "{}", page.text);

    let ledger = bot.store.load().await?;
    assert_eq!(
        ledger[&UserId::from("42")].expiration,
        Expiry::At(issued_at + Duration::days(30))
    );
    Ok(())
}

/// A ledger that cannot be written yields a failure message, not a crash
#[tokio::test]
async fn test_storage_failure_is_rendered() -> Result<()> {
    use seshat::handlers::Handlers;
    use seshat::ledger::{DiscountLedger, JsonFileStore};
    use seshat::router::Router;
    use seshat::session::SessionTracker;

    let dir = tempfile::TempDir::new()?;
    let store = JsonFileStore::new(dir.path().join("absent").join("remises.json"));
    let router = Router::new(Arc::new(Handlers::new(
        Arc::new(DiscountLedger::new(Arc::new(store))),
        Arc::new(SessionTracker::new()),
    )));

    let failure = rendered(
        router
            .dispatch(seshat::event::InboundEvent::ButtonPress {
                routing_key: "fr_Remise_direct".to_string(),
                user_id: UserId::from("42"),
            })
            .await,
    );
    assert!(failure.text.contains("erreur"));
    assert_eq!(failure.navigation, MenuReference::BackToMain);
    Ok(())
}
