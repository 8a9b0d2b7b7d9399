//! UI Builder module for creating keyboards from menu references

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};
use url::Url;

use crate::event::{Formatting, MenuReference};
use crate::router::ButtonRoute;

const COACHING_INFO_URL: &str =
    "https://www.notion.so/ERT-COACHING-1eb63fe03d3780cfbff2c4806d43b6a5?pvs=4";
const PAYMENT_METHODS_URL: &str =
    "https://www.notion.so/M-THODES-DE-PAIEMENT-1eb63fe03d3780baa43dcfcb8c0fa3f4?pvs=4";

fn button(label: &str, route: ButtonRoute) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, route.key())
}

// Link buttons are dropped if the constant ever stops parsing
fn link(label: &str, url: &str) -> Option<InlineKeyboardButton> {
    Url::parse(url)
        .ok()
        .map(|url| InlineKeyboardButton::url(label, url))
}

fn back_to_main() -> InlineKeyboardButton {
    button("🏠 Retour au menu principal", ButtonRoute::MainMenu)
}

/// Parse mode matching the formatting of a render instruction
pub fn parse_mode(formatting: Formatting) -> Option<ParseMode> {
    match formatting {
        Formatting::Rich => Some(ParseMode::Html),
        Formatting::Plain => None,
    }
}

/// Inline keyboard for a menu reference, `None` when no keyboard is shown
pub fn keyboard(menu: MenuReference) -> Option<InlineKeyboardMarkup> {
    use ButtonRoute as R;

    let rows: Vec<Vec<InlineKeyboardButton>> = match menu {
        MenuReference::None => return None,
        MenuReference::Main => vec![
            vec![button("📘 Livres", R::Books), button("🧘 Cours", R::Courses)],
            vec![
                button("🌐 Réseaux Sociaux", R::SocialNetworks),
                button("🎤 Séminaires", R::Seminars),
            ],
            vec![button("❓ FAQ", R::Faq), button("🎁 Rabais", R::Discount)],
            vec![
                button("📚 Ressources", R::Resources),
                button("👤 ETR Coaching", R::Coaching),
            ],
            vec![button("🙏 Faire un don", R::Donation)],
            vec![button("💬 Parler à un humain", R::Agent)],
        ],
        MenuReference::BackToMain => vec![vec![back_to_main()]],
        MenuReference::Resources => vec![
            vec![button("🎧 Audios", R::ResourceAudios)],
            vec![button("📰 Articles", R::ResourceArticles)],
            vec![button("📖 Biographie de Sabatha", R::ResourceBiography)],
            vec![button("📘 Livres", R::ResourceBooks)],
            vec![button("🎥 Vidéos", R::ResourceVideos)],
            vec![button("📌 Références", R::ResourceReferrals)],
            vec![button("🔙 Retour", R::MainMenu)],
        ],
        MenuReference::Coaching => {
            let mut rows: Vec<Vec<InlineKeyboardButton>> =
                link("🔗 En savoir plus", COACHING_INFO_URL).map(|b| vec![b]).into_iter().collect();
            rows.extend([
                vec![button("⚪ Standard", R::CoachingStandard)],
                vec![button("🟡 Intermédiaire", R::CoachingIntermediate)],
                vec![button("🔴 Avancé", R::CoachingAdvanced)],
                vec![button("🔙 Retour", R::MainMenu)],
            ]);
            rows
        }
        MenuReference::CoachingDetail => {
            let mut rows: Vec<Vec<InlineKeyboardButton>> =
                link("🔗 En savoir plus", COACHING_INFO_URL).map(|b| vec![b]).into_iter().collect();
            rows.push(vec![button("🔙 Retour", R::Coaching)]);
            rows
        }
        MenuReference::Faq => vec![
            vec![button("📦 Accès aux cours", R::FaqAccess)],
            vec![button("💳 Moyens de paiement", R::FaqPayment)],
            vec![button("📚 Plateformes utilisées", R::FaqPlatforms)],
            vec![button("📅 Dates de début", R::FaqDates)],
            vec![button("🧑‍🏫 Accompagnement", R::FaqSupport)],
            vec![button("🌍 Élèves à l'étranger", R::FaqInternational)],
            vec![button("📞 Question personnelle", R::FaqContact)],
            vec![button("📦 Livraison des livres", R::FaqDelivery)],
            vec![button("📝 Inscription aux cours", R::FaqRegistration)],
            vec![button("🎥 Replays vidéos", R::FaqReplays)],
            vec![back_to_main()],
        ],
        MenuReference::BackToFaq => vec![vec![button("🔙 Retour au FAQ", R::Faq)]],
        MenuReference::Payment => {
            let mut rows: Vec<Vec<InlineKeyboardButton>> =
                link("💳 Voir les méthodes de paiement", PAYMENT_METHODS_URL)
                    .map(|b| vec![b])
                    .into_iter()
                    .collect();
            rows.push(vec![back_to_main()]);
            rows
        }
        MenuReference::DiscountOptions => vec![
            vec![button("🎁 Rabais (par email)", R::Discount)],
            vec![button("🎟️ Obtenir mon code maintenant", R::DiscountDirect)],
            vec![back_to_main()],
        ],
    };

    Some(InlineKeyboardMarkup::new(rows))
}
