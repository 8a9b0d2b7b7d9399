//! # Callback Router Module
//!
//! Maps routing keys carried by inbound interactions to typed routes and
//! dispatches each event to its handler. Routing keys are matched literally;
//! unknown keys (for example buttons left over from an older deployment) are
//! logged and ignored.

use std::str::FromStr;
use std::sync::Arc;
use strum::{EnumIter, EnumString, IntoStaticStr};
use teloxide::utils::command::BotCommands;
use tracing::{debug, warn};

use crate::errors::RouteError;
use crate::event::{Dispatch, InboundEvent};
use crate::handlers::Handlers;

/// Callback data of every inline keyboard button the bot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum ButtonRoute {
    #[strum(serialize = "start_menu")]
    MainMenu,
    #[strum(serialize = "fr_Livres")]
    Books,
    #[strum(serialize = "fr_Cours")]
    Courses,
    #[strum(serialize = "fr_Videos")]
    Videos,
    #[strum(serialize = "fr_Seminaires")]
    Seminars,
    #[strum(serialize = "fr_FAQ")]
    Faq,
    /// Email-gated discount issuance
    #[strum(serialize = "fr_Remise")]
    Discount,
    /// Discount issuance without email
    #[strum(serialize = "fr_Remise_direct")]
    DiscountDirect,
    #[strum(serialize = "fr_Agent")]
    Agent,
    #[strum(serialize = "fr_ressources")]
    Resources,
    #[strum(serialize = "fr_coaching")]
    Coaching,
    #[strum(serialize = "fr_reseaux")]
    SocialNetworks,
    #[strum(serialize = "fr_donation")]
    Donation,
    #[strum(serialize = "ressources_audios")]
    ResourceAudios,
    #[strum(serialize = "ressources_articles")]
    ResourceArticles,
    #[strum(serialize = "ressources_bio")]
    ResourceBiography,
    #[strum(serialize = "ressources_livres")]
    ResourceBooks,
    #[strum(serialize = "ressources_videos")]
    ResourceVideos,
    #[strum(serialize = "ressources_references")]
    ResourceReferrals,
    #[strum(serialize = "coaching_standard")]
    CoachingStandard,
    #[strum(serialize = "coaching_intermediaire")]
    CoachingIntermediate,
    #[strum(serialize = "coaching_avance")]
    CoachingAdvanced,
    #[strum(serialize = "faq_acces")]
    FaqAccess,
    #[strum(serialize = "faq_paiement")]
    FaqPayment,
    #[strum(serialize = "faq_plateformes")]
    FaqPlatforms,
    #[strum(serialize = "faq_dates")]
    FaqDates,
    #[strum(serialize = "faq_accompagnement")]
    FaqSupport,
    #[strum(serialize = "faq_international")]
    FaqInternational,
    #[strum(serialize = "faq_contact")]
    FaqContact,
    #[strum(serialize = "faq_livraison")]
    FaqDelivery,
    #[strum(serialize = "faq_inscription")]
    FaqRegistration,
    #[strum(serialize = "faq_videos")]
    FaqReplays,
}

impl ButtonRoute {
    /// Callback data sent by Telegram when the button is pressed
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Slash commands understood by the bot
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[command(rename_rule = "lowercase", description = "Commandes disponibles :")]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    #[command(description = "afficher le menu principal")]
    Start,
    #[command(description = "afficher votre code de réduction")]
    Code,
    #[command(description = "questions fréquentes")]
    Faq,
}

impl Command {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A resolved routing key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Button(ButtonRoute),
    Command(Command),
}

impl Route {
    /// Resolve the callback data of a button press
    pub fn from_button(key: &str) -> Result<Self, RouteError> {
        ButtonRoute::from_str(key)
            .map(Route::Button)
            .map_err(|_| RouteError::Unroutable(key.to_string()))
    }

    /// Resolve a command name given without its leading `/`
    pub fn from_command(name: &str) -> Result<Self, RouteError> {
        Command::from_str(name)
            .map(Route::Command)
            .map_err(|_| RouteError::Unroutable(format!("/{name}")))
    }
}

/// Entry point of the routing core
///
/// Commands and button presses are resolved to a [`Route`]; free text goes to
/// the single text handler, which decides from the session state whether the
/// message belongs to a flow.
pub struct Router {
    handlers: Arc<Handlers>,
}

impl Router {
    pub fn new(handlers: Arc<Handlers>) -> Self {
        Self { handlers }
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Resolve the routing key carried by `event`
    ///
    /// Text messages carry no routing key and are reported as unroutable.
    pub fn resolve(event: &InboundEvent) -> Result<Route, RouteError> {
        match event {
            InboundEvent::Command { name, .. } => Route::from_command(name),
            InboundEvent::ButtonPress { routing_key, .. } => Route::from_button(routing_key),
            InboundEvent::TextMessage { .. } => Err(RouteError::Unroutable("<text>".to_string())),
        }
    }

    /// Handle one inbound event
    pub async fn dispatch(&self, event: InboundEvent) -> Dispatch {
        if let InboundEvent::TextMessage { body, user_id } = &event {
            return self.handlers.handle_text(user_id, body).await;
        }

        let route = match Self::resolve(&event) {
            Ok(route) => route,
            Err(e) => {
                warn!(user_id = %event.user_id(), error = %e, "Ignoring unroutable event");
                return Dispatch::Ignored;
            }
        };
        debug!(user_id = %event.user_id(), route = ?route, "Dispatching event");

        let user_id = event.user_id();
        let render = match route {
            Route::Button(button) => self.handlers.handle_button(user_id, button).await,
            Route::Command(command) => self.handlers.handle_command(user_id, command).await,
        };
        Dispatch::Render(render)
    }
}
