//! Static French copy shown by the informational routes, plus the templated
//! messages of the discount flows. All rich texts use Telegram HTML markup.

use crate::discount::DiscountRecord;
use crate::event::{MenuReference, RenderInstruction};
use crate::router::ButtonRoute;

pub const WELCOME: &str = "👋 <b>Bienvenue chez Seshat Assistant !</b>\n\n\
Veuillez choisir une option ci-dessous pour commencer :";

pub const MAIN_MENU: &str = "🏠 <b>Menu Principal :</b>\n\nChoisissez une option ci-dessous :";

pub const FAQ_MENU: &str = "❓ <b>FAQ — Choisissez une question :</b>";

pub const EMAIL_PROMPT: &str =
    "🎁 Pour recevoir votre code de réduction, veuillez entrer votre adresse email :";

pub const EMAIL_INVALID: &str = "❌ L'adresse email semble invalide. Veuillez réessayer.";

pub const NO_CODE_YET: &str = "⚠️ <b>Vous n’avez pas encore généré de code promo.</b>\n\n\
Cliquez sur « 🎁 Rabais » dans le menu principal pour en recevoir un.";

pub const STORAGE_FAILURE: &str =
    "⚠️ Une erreur est survenue lors de l’enregistrement de votre code. Veuillez réessayer plus tard.";

/// Flow A: code shown after pressing the direct discount button
pub fn discount_issued(record: &DiscountRecord) -> String {
    format!(
        "🎁 <b>Voici votre code de réduction :</b>\n\n\
         💸 <code>{}</code>\n\n\
         Utilisez ce code lors de votre paiement pour obtenir <b>-15%</b> sur votre prochaine inscription.\n\n\
         📅 <i>Valable jusqu’au : {}</i>",
        record.code,
        record.display_expiration()
    )
}

/// Flow B: code shown after a valid email was received
pub fn discount_after_email(record: &DiscountRecord) -> String {
    format!(
        "✅ Merci ! Voici votre code de réduction :\n<code>{}</code>\n\n\
         🎓 Ce code vous donne <b>-15%</b> sur <b>tout cours préenregistré</b> de l’Académie Sapience Universelle.\n\
         📅 <i>Valable jusqu’au : {}</i>",
        record.code,
        record.display_expiration()
    )
}

/// Flow C: existing code shown by `/code`
pub fn discount_lookup(record: &DiscountRecord) -> String {
    format!(
        "🔑 <b>Voici votre code de réduction :</b>\n\n\
         💸 <code>{}</code>\n\n\
         📅 <i>Valable jusqu’au : {}</i>",
        record.code,
        record.display_expiration()
    )
}

/// Static page of an informational route
///
/// Returns `None` for the discount routes, whose output depends on the user.
pub fn page(route: ButtonRoute) -> Option<RenderInstruction> {
    use ButtonRoute::*;
    use MenuReference as Nav;

    let (text, navigation) = match route {
        Discount | DiscountDirect => return None,
        MainMenu => (MAIN_MENU, Nav::Main),
        Books => (BOOKS, Nav::BackToMain),
        Courses => (COURSES, Nav::Payment),
        Videos => (VIDEOS, Nav::BackToMain),
        Seminars => (SEMINARS, Nav::Payment),
        Faq => (FAQ_MENU, Nav::Faq),
        Agent => (AGENT, Nav::BackToMain),
        Resources => ("📚 <b>Ressources disponibles :</b>", Nav::Resources),
        Coaching => ("👤 <b>Coaching ETR : choisissez un niveau</b>", Nav::Coaching),
        SocialNetworks => (SOCIAL_NETWORKS, Nav::BackToMain),
        Donation => (DONATION, Nav::BackToMain),
        ResourceAudios => (RESOURCE_AUDIOS, Nav::BackToMain),
        ResourceArticles => (RESOURCE_ARTICLES, Nav::BackToMain),
        ResourceBiography => (RESOURCE_BIOGRAPHY, Nav::BackToMain),
        ResourceBooks => (RESOURCE_BOOKS, Nav::BackToMain),
        ResourceVideos => (RESOURCE_VIDEOS, Nav::BackToMain),
        ResourceReferrals => (RESOURCE_REFERRALS, Nav::BackToMain),
        CoachingStandard => (COACHING_STANDARD, Nav::CoachingDetail),
        CoachingIntermediate => (COACHING_INTERMEDIATE, Nav::CoachingDetail),
        CoachingAdvanced => (COACHING_ADVANCED, Nav::CoachingDetail),
        FaqAccess => (FAQ_ACCESS, Nav::BackToFaq),
        FaqPayment => (FAQ_PAYMENT, Nav::BackToFaq),
        FaqPlatforms => (FAQ_PLATFORMS, Nav::BackToFaq),
        FaqDates => (FAQ_DATES, Nav::BackToFaq),
        FaqSupport => (FAQ_SUPPORT, Nav::BackToFaq),
        FaqInternational => (FAQ_INTERNATIONAL, Nav::BackToFaq),
        FaqContact => (FAQ_CONTACT, Nav::BackToFaq),
        FaqDelivery => (FAQ_DELIVERY, Nav::BackToFaq),
        FaqRegistration => (FAQ_REGISTRATION, Nav::BackToFaq),
        FaqReplays => (FAQ_REPLAYS, Nav::BackToFaq),
    };
    Some(RenderInstruction::rich(text, navigation))
}

const BOOKS: &str = "📚 <b>Nos Livres :</b>\n\n\
📘 <b>La loi des cycles</b>\n\
<i>Exploration des lois universelles qui gouvernent les cycles de la vie.</i>\n\
🔗 <a href='https://a.co/d/a607uVz'>Voir sur Amazon</a>\n\n\
🌹 <b>Marie-Madeleine</b>\n\
<i>Relecture initiatique de la figure de Marie-Madeleine.</i>\n\
🔗 <a href='https://a.co/d/cIvOQfA'>Voir sur Amazon</a>\n\n\
🌒 <b>Vivre au-dessus du bien et du mal</b>\n\
<i>Invitation à dépasser la dualité morale pour accéder à une conscience supérieure et intégrative.</i>\n\
🔗 <a href='https://a.co/d/1aOQTEq'>Voir sur Amazon</a>\n\n\
🌀 <b>La domination des égrégores</b>\n\
<i>Étude sur la nature des égrégores, leur influence sur la psyché collective et la libération par le sacrifice du créateur déchu.</i>\n\
🔗 <a href='https://a.co/d/4l03hWg'>Voir sur Amazon</a>\n\n\
👁️ <b>La maladie des sens</b>\n\
<i>Parcours initiatique à travers la perception, l’illusion sensorielle et la quête de l’éveil spirituel.</i>\n\
🔗 <a href='https://a.co/d/1pMjZqB'>Voir sur Amazon</a>\n\n\
🔑 <b>Les secrets du Maître</b>\n\
<i>Méditation sur la mort, la victoire sur l’illusion de l’enfer et la transcendance spirituelle.</i>\n\
🔗 <a href='https://a.co/d/9B25dhz'>Voir sur Amazon</a>\n\n\
💫 <b>Du vodou colonial au vodou transcendantal</b>\n\
<i>Transformation spirituelle du vodou haïtien vers une pratique axée sur la sagesse, l’amour et la liberté.</i>\n\
🔗 <a href='https://a.co/d/eZQOeyR'>Voir sur Amazon</a>\n";

const COURSES: &str = "🧘 <b>COURS ÉSOTÉRIQUES PRÉENREGISTRÉS</b>\n\n\
📌 <b>ÉTAPES D’INSCRIPTION :</b>\n\n\
📝 <b>1.</b> Remplissez le formulaire unique d’inscription ci-dessous\n\
💳 <b>2.</b> Effectuez le paiement par carte, Zelle, Intuit ou autre méthode acceptée\n\
📞 <b>3.</b> Contactez le Comte de Sabatha via WhatsApp : <b>+1 954 663 8783</b>\n\n\
✅ Vous recevrez vos accès dans les 24h via Google Classroom\n\n\
🔗 <a href='https://form.jotform.com/243633811855157'>Formulaire d’inscription (toutes les classes)</a>\n\n\
🕯️ <b>Classe Maçonnique Alchimique et Théurgique</b>\n\
<i>Une voie rituelle et intérieure réservée aux véritables Maîtres — du Temple de pierre au Temple vivant.</i>\n\n\
🪽 <b>Classe de Magie Énochienne</b>\n\
<i>Un parcours guidé à travers la magie céleste et la communication avec les intelligences angéliques.</i>\n\n\
💎 <b>Classe L’Alchimie Sexuelle</b>\n\
<i>Formation sacrée pour libérer, activer et harmoniser l’énergie sexuelle — entre tantrisme et éveil intérieur.</i>\n\n\
🌌 <b>Classe Astro Tarot</b>\n\
<i>Décodage des messages de l’âme à travers les astres et la magie symbolique du Tarot.</i>";

const VIDEOS: &str = "🎬 <b>Vidéos disponibles :</b>\n\n\
Accédez à notre bibliothèque de vidéos : cours enregistrés, replays de séminaires et formations spirituelles.";

const SEMINARS: &str = "🎤 <b>SÉMINAIRES ÉSOTÉRIQUES PRÉENREGISTRÉS</b>\n\n\
📌 <b>ÉTAPES D’INSCRIPTION :</b>\n\n\
📝 <b>1.</b> Remplissez le formulaire de préinscription ci-dessous\n\
💳 <b>2.</b> Effectuez le paiement par carte, Zelle, Intuit ou autre méthode acceptée\n\
📞 <b>3.</b> Contactez la direction pour confirmer votre accès\n\n\
✅ Vous recevrez vos accès dans les 24h via email\n\n\
🌀 <b>Séminaire : Création & Programmation des Égrégores</b>\n\
<i>Créez, entretenez et programmez des égrégores vivants selon les lois vibratoires de l'invisible.</i>\n\
📩 <b>RÉSERVATION :</b> Remplissez ce formulaire :\n\
🔗 <a href='https://form.jotform.com/251465347130149'>Formulaire d’inscription</a>\n\
💰 <b>Tarif :</b> 130 USD (ou 200 USD pour la série complète)\n\n\
🌫️ <b>Séminaire : Le Pouvoir Caché de l’Âme-Désincarnée</b>\n\
<i>Transformez une âme en esprit utile grâce à une guidance astrologique, ésotérique et vibratoire.</i>\n\
📩 <b>RÉSERVATION :</b> Remplissez ce formulaire :\n\
🔗 <a href='https://form.jotform.com/251465347130149'>Formulaire d’inscription</a>\n\
💰 <b>Tarif :</b> 120 USD\n\n\
📞 <b>Contact WhatsApp :</b> +1 954 663 8783\n\
📧 <b>Email :</b> info@academiesapienceuniverselle.org";

const AGENT: &str = "💬 <b>Contacter un conseiller humain – ASU</b>\n\n\
Besoin d’un accompagnement personnalisé ? D’une réponse rapide ?\n\n\
📞 <b>Appelez ou envoyez un message WhatsApp :</b>\n\
+1 954 663 8783\n\n\
📧 <b>Email :</b> gpsabatha@gmail.com\n\n\
⏰ Réponse sous 24h – du lundi au samedi\n\
🙏 Merci pour votre confiance dans l’Académie Sapience Universelle.";

const SOCIAL_NETWORKS: &str = "🌐 <b>Suivez-nous sur les réseaux sociaux :</b>\n\n\
🎵 TikTok : <a href='https://www.tiktok.com/@meta_huamain?_t=ZM-8wiGAdMgsuW&amp;_r=1'>@meta_huamain</a>\n\
📸 Instagram : <a href='https://www.instagram.com/academie.sapience?igsh=bTZsYTBlZmJyZjZh'>@academie.sapience</a>\n\
📘 Facebook : <a href='https://www.facebook.com/profile.php?id=61575811124252'>Notre page Facebook</a>\n\
📢 Telegram : <a href='https://t.me/+owe0TtDXsyE0M2Qx'>Canal officiel</a>\n\
💬 WhatsApp : <a href='https://chat.whatsapp.com/JDHq6TS89cU0Sd5sjd248T'>Groupe WhatsApp</a>";

const DONATION: &str = "🙏 <b>Soutenir notre mission :</b>\n\n\
T-MEC et l’Académie Sapience Universelle accompagnent des milliers d’âmes vers la lumière, la connaissance, et la transformation intérieure.\n\n\
✨ Si notre travail vous inspire, vous pouvez contribuer à son rayonnement.\n\
🧡 Chaque don compte, quelle que soit la somme.\n\n\
🔗 <a href='https://www.notion.so/M-THODES-DE-PAIEMENT-1eb63fe03d3780baa43dcfcb8c0fa3f4?pvs=4'>Cliquez ici pour faire un don</a>";

const RESOURCE_AUDIOS: &str = "🎧 <b>Audios - Podcasts Mystiques</b>\n\n\
Écoutez les podcasts du Comte de Sabatha sur des sujets profonds tels que :\n\
• Le Vodou initiatique\n\
• La Franc-maçonnerie ésotérique\n\
• La Kabbale mystique\n\
• La théurgie et l’âme solaire\n\n\
🌐 <a href='https://t.me/+AhhmqZtBhQswNmJh'>Accéder aux podcasts sur Telegram</a>";

const RESOURCE_ARTICLES: &str = "📰 <b>Articles Ésotériques</b>\n\n\
Découvrez une variété d’articles profonds et inspirants rédigés par le Comte de Sabatha. \
Ces textes explorent des thèmes comme l’alchimie spirituelle, la magie opérative, la franc-maçonnerie, \
le symbolisme et bien d'autres mystères sacrés.\n\n\
📚 <a href='https://sabatha.org/category/blog-2/'>Lire les articles sur sabatha.org</a>";

const RESOURCE_BIOGRAPHY: &str = "📖 <b>Biographie du Comte de Sabatha :</b>\n\n\
Initié dans plusieurs traditions ésotériques, le Comte de Sabatha est Maître en théurgie, adepte du rite de Memphis-Misraïm, \
et héritier d’une lignée opérative oubliée. Architecte symbolique et enseignant mystique, il transmet l’art sacré de la \
transmutation intérieure et la voie de l’âme solaire.\n\n\
🔗 <a href='https://orcid.org/0009-0008-4649-8808'>Voir la biographie complète sur ORCID</a>";

const RESOURCE_BOOKS: &str = "📘 <b>Livre disponible :</b>\n\n\
🔹 <b>ASTRO-TAROLOGIE</b>\n\
<i>Symbolismes, méthodes et applications d’une discipline divinatoire contemporaine.</i>\n\n\
L'ouvrage <b>Astro-Tarologie</b> explore la fusion entre astrologie et tarot. Rédigé par les étudiants de l’Académie Sapience Universelle, \
il propose des bases théoriques solides, des méthodologies pratiques, et une réflexion sur les dimensions psychologiques et spirituelles \
de cette discipline.\n\n\
🔗 <a href='https://www.scribd.com/document/824409798/ASTRO-TAROLOGIE-Symbolisme-methodes-et-applications-d-une-discipline-divinatoire-contemporaine'>Lire le livre sur Scribd</a>";

const RESOURCE_VIDEOS: &str = "🎥 <b>Vidéo : Comment baptiser et nommer un nouveau-né</b>\n\n\
# <i>Et si le prénom de ton enfant était sa première prophétie ?</i>\n\n\
Un séminaire sacré pour choisir un prénom qui vibre avec l’âme de ton enfant.\n\
Une invitation à écouter, ressentir, nommer avec conscience.\n\n\
🕊️ <b>« Donner un nom, c'est appeler une âme à entrer dans une forme. C'est invoquer un destin. »</b>\n\
— Hazrat Inayat Khan, maître soufi et musicien mystique\n\n\
🔗 <a href='https://us02web.zoom.us/rec/share/xwra5bzoL2M5_N5hkOMDXMrWIhWkVfXUa2As932C9Qb7pjOZCQkY-UFIPhjhx1Xk.oQk2UTZCMVK7QuVf'>Voir la vidéo complète</a>";

const RESOURCE_REFERRALS: &str = "📌 <b>Programme de Références — ASU</b>\n\n\
💡 Partagez la lumière, recevez une bénédiction.\n\n\
Si vous recommandez l’Académie Sapience Universelle à une personne, et que celle-ci s’inscrit à une activité (cours, séminaire, classe…), \
vous recevrez un <b>code de réduction de 15%</b> valable sur toute activité de l’ASU.\n\n\
🌱 Une façon de remercier ceux qui font rayonner notre mission.\n\n\
📞 <b>Contactez la direction :</b>\n\
WhatsApp ou SMS au <b>+1 954 663 8783</b>\n\n\
📝 Merci d’envoyer :\n\
• Le <b>nom complet</b> de la personne que vous avez référée\n\
• L’<b>activité</b> (cours, séminaire, etc.) choisie\n\
• Votre <b>nom ou numéro</b> pour que l’on puisse vous identifier comme parrain\n\n\
✅ Une fois vérifié, vous recevrez votre <b>code promo personnel</b> par message.";

const COACHING_STANDARD: &str = "⚪ <b>ETR Coaching – Niveau Standard</b>\n\n\
Un accompagnement spirituel personnalisé sur 3 semaines, pour explorer tes blocages, t’aligner avec ton chemin intérieur, \
et amorcer ta transformation.\n\n\
🌀 <b>Ce que tu reçois :</b>\n\
• Une semaine de préparation personnalisée\n\
• Analyse mystique + eso-psychologie\n\
• Identification de tes obstacles\n\
• Recommandations pratiques + ajustements comportementaux\n\n\
📲 Contacte la direction de l’ASU pour t’inscrire : +1 954 663 8783";

const COACHING_INTERMEDIATE: &str = "🟡 <b>ETR Coaching – Niveau Intermédiaire</b>\n\n\
Un accompagnement de 6 semaines pour aller plus loin dans ta guérison intérieure, ton équilibre énergétique et ton recentrage spirituel.\n\n\
🔍 <b>Inclus :</b>\n\
• Bilan énergétique + lecture vibratoire\n\
• Outils d’alignement personnalisé (visualisations, purification, rituels simples)\n\
• Suivi hebdomadaire avec ajustements\n\n\
💠 Convient à ceux qui souhaitent transformer durablement leur hygiène émotionnelle et spirituelle.\n\n\
📲 Pour plus d'infos ou inscription : +1 954 663 8783";

const COACHING_ADVANCED: &str = "🔴 <b>ETR Coaching – Niveau Avancé</b>\n\n\
Un parcours de 9 semaines conçu pour éveiller ta mémoire solaire, activer ton potentiel initiatique et intégrer ta mission sacrée.\n\n\
🜂 <b>Ce programme inclut :</b>\n\
• Travail de libération karmique\n\
• Activation des 3 corps (émotionnel, vibratoire, solaire)\n\
• Rituels alchimiques hebdomadaires\n\
• Guidance initiatique et transmissions mystiques\n\n\
🌞 Réservé aux chercheurs prêts à transcender leurs limites et à incarner leur feu intérieur.\n\n\
📲 Infos & inscriptions auprès de la direction : +1 954 663 8783";

const FAQ_ACCESS: &str = "📦 <b>Comment vais-je accéder à mes cours ou séminaires ?</b>\n\n\
<i>Via Google Classroom et en vidéos préenregistrées. Un lien d'accès vous sera envoyé après inscription.</i>";

const FAQ_PAYMENT: &str = "💳 <b>Quels moyens de paiement acceptez-vous ?</b>\n\n\
<i>Zelle, Intuit (carte), CashApp, BUH Haïti, MoneyGram et Western Union. Les instructions vous seront envoyées après inscription.</i>";

const FAQ_PLATFORMS: &str = "📚 <b>Quelles plateformes utilisez-vous ?</b>\n\n\
<i>Google Classroom pour les cours, Telegram pour l’accompagnement personnalisé.</i>";

const FAQ_DATES: &str = "📆 <b>Quand commencent les cours ?</b>\n\n\
<i>Merci de contacter l’équipe pédagogique :\n📞 +1 954 663 8783\n📧 gpsabatha@gmail.com</i>";

const FAQ_SUPPORT: &str = "👨‍🏫 <b>Y a-t-il un accompagnement ?</b>\n\n\
<i>Oui, via groupes Telegram privés et contact direct avec l’enseignant si besoin.</i>";

const FAQ_INTERNATIONAL: &str = "🌍 <b>Puis-je suivre les cours depuis l’étranger ?</b>\n\n\
<i>Oui, tous nos contenus sont 100 % en ligne et accessibles dans le monde entier.</i>";

const FAQ_CONTACT: &str = "📞 <b>Comment poser une question personnelle ?</b>\n\n\
<i>Contactez-nous directement via WhatsApp :</i>\n\
<a href='https://wa.me/19546638783'>https://wa.me/19546638783</a>";

const FAQ_DELIVERY: &str = "📦 <b>Comment se passe la livraison des livres ?</b>\n\n\
<i>Nos livres sont disponibles sur Amazon avec livraison mondiale.</i>";

const FAQ_REGISTRATION: &str = "📝 <b>Comment m’inscrire à un cours ?</b>\n\n\
<i>Inscrivez-vous directement via l’assistant SESHAT en suivant les liens dans chaque section de cours.</i>";

const FAQ_REPLAYS: &str = "🎥 <b>Combien de temps ai-je accès aux vidéos ?</b>\n\n\
<i>Les replays sont disponibles jusqu’à la fin officielle du programme ou formation concernée.</i>";
