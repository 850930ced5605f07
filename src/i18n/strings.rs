//! Message keys and the built-in per-language catalogs.
//!
//! Each catalog is a flat `(MessageKey, &str)` list. A catalog may omit keys;
//! `TranslationTable::t` falls back to Spanish and then to the key itself.
//!
//! ## Adding a new key
//!
//! 1. Add a variant to [`MessageKey`] and to `MessageKey::ALL`
//! 2. Give it a dotted identifier in `MessageKey::as_str`
//! 3. Add the Spanish entry to `ES`, then the other catalogs
//!
//! Validation messages may carry `{min}` / `{max}` placeholders.

use crate::i18n::Language;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    NavHome,
    NavAbout,
    NavServices,
    NavTestimonials,
    NavContact,
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    ContactTitle,
    ContactName,
    ContactEmail,
    ContactPhone,
    ContactMessage,
    ContactSubmit,
    ContactSending,
    ContactSuccess,
    ContactError,
    ValidationNameMin,
    ValidationEmailInvalid,
    ValidationPhoneMin,
    ValidationMessageMin,
    ValidationMessageMax,
    CookiesDescription,
    CookiesAccept,
    CookiesEssential,
    CookiesPrivacy,
    CookiesPolicy,
    TestimonialsTitle,
    TestimonialsMargaretName,
    TestimonialsMargaretRole,
    TestimonialsMargaretContent,
    TestimonialsJohnName,
    TestimonialsJohnRole,
    TestimonialsJohnContent,
    TestimonialsDavidName,
    TestimonialsDavidRole,
    TestimonialsDavidContent,
    TestimonialsEmilyName,
    TestimonialsEmilyRole,
    TestimonialsEmilyContent,
    FooterRights,
}

impl MessageKey {
    pub const ALL: [MessageKey; 41] = [
        MessageKey::NavHome,
        MessageKey::NavAbout,
        MessageKey::NavServices,
        MessageKey::NavTestimonials,
        MessageKey::NavContact,
        MessageKey::HeroTitle,
        MessageKey::HeroSubtitle,
        MessageKey::HeroCta,
        MessageKey::ContactTitle,
        MessageKey::ContactName,
        MessageKey::ContactEmail,
        MessageKey::ContactPhone,
        MessageKey::ContactMessage,
        MessageKey::ContactSubmit,
        MessageKey::ContactSending,
        MessageKey::ContactSuccess,
        MessageKey::ContactError,
        MessageKey::ValidationNameMin,
        MessageKey::ValidationEmailInvalid,
        MessageKey::ValidationPhoneMin,
        MessageKey::ValidationMessageMin,
        MessageKey::ValidationMessageMax,
        MessageKey::CookiesDescription,
        MessageKey::CookiesAccept,
        MessageKey::CookiesEssential,
        MessageKey::CookiesPrivacy,
        MessageKey::CookiesPolicy,
        MessageKey::TestimonialsTitle,
        MessageKey::TestimonialsMargaretName,
        MessageKey::TestimonialsMargaretRole,
        MessageKey::TestimonialsMargaretContent,
        MessageKey::TestimonialsJohnName,
        MessageKey::TestimonialsJohnRole,
        MessageKey::TestimonialsJohnContent,
        MessageKey::TestimonialsDavidName,
        MessageKey::TestimonialsDavidRole,
        MessageKey::TestimonialsDavidContent,
        MessageKey::TestimonialsEmilyName,
        MessageKey::TestimonialsEmilyRole,
        MessageKey::TestimonialsEmilyContent,
        MessageKey::FooterRights,
    ];

    /// Dotted identifier, as used in page markup (`data-i18n="contact.name"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::NavHome => "nav.home",
            MessageKey::NavAbout => "nav.about",
            MessageKey::NavServices => "nav.services",
            MessageKey::NavTestimonials => "nav.testimonials",
            MessageKey::NavContact => "nav.contact",
            MessageKey::HeroTitle => "hero.title",
            MessageKey::HeroSubtitle => "hero.subtitle",
            MessageKey::HeroCta => "hero.cta",
            MessageKey::ContactTitle => "contact.title",
            MessageKey::ContactName => "contact.name",
            MessageKey::ContactEmail => "contact.email",
            MessageKey::ContactPhone => "contact.phone",
            MessageKey::ContactMessage => "contact.message",
            MessageKey::ContactSubmit => "contact.submit",
            MessageKey::ContactSending => "contact.sending",
            MessageKey::ContactSuccess => "contact.success",
            MessageKey::ContactError => "contact.error",
            MessageKey::ValidationNameMin => "validation.name_min",
            MessageKey::ValidationEmailInvalid => "validation.email_invalid",
            MessageKey::ValidationPhoneMin => "validation.phone_min",
            MessageKey::ValidationMessageMin => "validation.message_min",
            MessageKey::ValidationMessageMax => "validation.message_max",
            MessageKey::CookiesDescription => "cookies.description",
            MessageKey::CookiesAccept => "cookies.accept",
            MessageKey::CookiesEssential => "cookies.essential",
            MessageKey::CookiesPrivacy => "cookies.privacy",
            MessageKey::CookiesPolicy => "cookies.policy",
            MessageKey::TestimonialsTitle => "testimonials.title",
            MessageKey::TestimonialsMargaretName => "testimonials.margaret.name",
            MessageKey::TestimonialsMargaretRole => "testimonials.margaret.role",
            MessageKey::TestimonialsMargaretContent => "testimonials.margaret.content",
            MessageKey::TestimonialsJohnName => "testimonials.john.name",
            MessageKey::TestimonialsJohnRole => "testimonials.john.role",
            MessageKey::TestimonialsJohnContent => "testimonials.john.content",
            MessageKey::TestimonialsDavidName => "testimonials.david.name",
            MessageKey::TestimonialsDavidRole => "testimonials.david.role",
            MessageKey::TestimonialsDavidContent => "testimonials.david.content",
            MessageKey::TestimonialsEmilyName => "testimonials.emily.name",
            MessageKey::TestimonialsEmilyRole => "testimonials.emily.role",
            MessageKey::TestimonialsEmilyContent => "testimonials.emily.content",
            MessageKey::FooterRights => "footer.rights",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown message key: {}", s))
    }
}

/// Built-in catalog for a language.
pub(crate) fn catalog_for(language: Language) -> &'static [(MessageKey, &'static str)] {
    match language {
        Language::Spanish => ES,
        Language::English => EN,
        Language::Portuguese => PT,
        Language::French => FR,
        Language::Italian => IT,
    }
}

// ==================== Spanish (fallback) ====================

const ES: &[(MessageKey, &str)] = &[
    (MessageKey::NavHome, "Inicio"),
    (MessageKey::NavAbout, "Nosotros"),
    (MessageKey::NavServices, "Servicios"),
    (MessageKey::NavTestimonials, "Testimonios"),
    (MessageKey::NavContact, "Contacto"),
    (MessageKey::HeroTitle, "Un hogar para vivir la nueva edad"),
    (MessageKey::HeroSubtitle, "Atención cercana y profesional para nuestros mayores, las 24 horas del día."),
    (MessageKey::HeroCta, "Solicitar información"),
    (MessageKey::ContactTitle, "Contacta con nosotros"),
    (MessageKey::ContactName, "Nombre"),
    (MessageKey::ContactEmail, "Correo electrónico"),
    (MessageKey::ContactPhone, "Teléfono"),
    (MessageKey::ContactMessage, "Mensaje"),
    (MessageKey::ContactSubmit, "Enviar mensaje"),
    (MessageKey::ContactSending, "Enviando..."),
    (MessageKey::ContactSuccess, "¡Mensaje enviado! Nos pondremos en contacto pronto."),
    (MessageKey::ContactError, "No se pudo enviar el mensaje. Inténtalo de nuevo."),
    (MessageKey::ValidationNameMin, "El nombre debe tener al menos {min} caracteres"),
    (MessageKey::ValidationEmailInvalid, "Correo electrónico no válido"),
    (MessageKey::ValidationPhoneMin, "El teléfono debe tener al menos {min} dígitos"),
    (MessageKey::ValidationMessageMin, "El mensaje debe tener al menos {min} caracteres"),
    (MessageKey::ValidationMessageMax, "El mensaje no puede superar los {max} caracteres"),
    (MessageKey::CookiesDescription, "Usamos cookies propias y de terceros para analizar el uso de la web. Puedes aceptarlas todas o solo las esenciales."),
    (MessageKey::CookiesAccept, "Aceptar todas"),
    (MessageKey::CookiesEssential, "Solo esenciales"),
    (MessageKey::CookiesPrivacy, "Política de privacidad"),
    (MessageKey::CookiesPolicy, "Política de cookies"),
    (MessageKey::TestimonialsTitle, "Lo que dicen las familias"),
    (MessageKey::TestimonialsMargaretName, "Margarita Torres"),
    (MessageKey::TestimonialsMargaretRole, "Hija de residente"),
    (MessageKey::TestimonialsMargaretContent, "Mi madre se siente en casa. El equipo es atento y siempre nos mantiene informados."),
    (MessageKey::TestimonialsJohnName, "Juan Martínez"),
    (MessageKey::TestimonialsJohnRole, "Residente"),
    (MessageKey::TestimonialsJohnContent, "Las actividades y la comida son estupendas. He hecho buenos amigos aquí."),
    (MessageKey::TestimonialsDavidName, "David Ruiz"),
    (MessageKey::TestimonialsDavidRole, "Hijo de residente"),
    (MessageKey::TestimonialsDavidContent, "Profesionales de verdad. La tranquilidad de saber que mi padre está bien cuidado no tiene precio."),
    (MessageKey::TestimonialsEmilyName, "Emilia Navarro"),
    (MessageKey::TestimonialsEmilyRole, "Nieta de residente"),
    (MessageKey::TestimonialsEmilyContent, "Visitamos a mi abuela cada semana y siempre la encontramos contenta y acompañada."),
    (MessageKey::FooterRights, "Todos los derechos reservados."),
];

// ==================== English ====================

const EN: &[(MessageKey, &str)] = &[
    (MessageKey::NavHome, "Home"),
    (MessageKey::NavAbout, "About us"),
    (MessageKey::NavServices, "Services"),
    (MessageKey::NavTestimonials, "Testimonials"),
    (MessageKey::NavContact, "Contact"),
    (MessageKey::HeroTitle, "A home for living the new age"),
    (MessageKey::HeroSubtitle, "Close, professional care for our elders, 24 hours a day."),
    (MessageKey::HeroCta, "Request information"),
    (MessageKey::ContactTitle, "Get in touch"),
    (MessageKey::ContactName, "Name"),
    (MessageKey::ContactEmail, "Email"),
    (MessageKey::ContactPhone, "Phone"),
    (MessageKey::ContactMessage, "Message"),
    (MessageKey::ContactSubmit, "Send message"),
    (MessageKey::ContactSending, "Sending..."),
    (MessageKey::ContactSuccess, "Message sent! We will get back to you soon."),
    (MessageKey::ContactError, "The message could not be sent. Please try again."),
    (MessageKey::ValidationNameMin, "Name must be at least {min} characters"),
    (MessageKey::ValidationEmailInvalid, "Invalid email address"),
    (MessageKey::ValidationPhoneMin, "Phone must be at least {min} digits"),
    (MessageKey::ValidationMessageMin, "Message must be at least {min} characters"),
    (MessageKey::ValidationMessageMax, "Message must be at most {max} characters"),
    (MessageKey::CookiesDescription, "We use our own and third-party cookies to analyse how the site is used. You can accept all of them or only the essential ones."),
    (MessageKey::CookiesAccept, "Accept all"),
    (MessageKey::CookiesEssential, "Essential only"),
    (MessageKey::CookiesPrivacy, "Privacy policy"),
    (MessageKey::CookiesPolicy, "Cookie policy"),
    (MessageKey::TestimonialsTitle, "What families say"),
    (MessageKey::TestimonialsMargaretName, "Margaret Thompson"),
    (MessageKey::TestimonialsMargaretRole, "Resident's daughter"),
    (MessageKey::TestimonialsMargaretContent, "My mother feels at home. The staff are attentive and always keep us informed."),
    (MessageKey::TestimonialsJohnName, "John Miller"),
    (MessageKey::TestimonialsJohnRole, "Resident"),
    (MessageKey::TestimonialsJohnContent, "The activities and the food are wonderful. I have made good friends here."),
    (MessageKey::TestimonialsDavidName, "David Wilson"),
    (MessageKey::TestimonialsDavidRole, "Resident's son"),
    (MessageKey::TestimonialsDavidContent, "True professionals. Knowing my father is well cared for is priceless."),
    (MessageKey::TestimonialsEmilyName, "Emily Clarke"),
    (MessageKey::TestimonialsEmilyRole, "Resident's granddaughter"),
    (MessageKey::TestimonialsEmilyContent, "We visit my grandmother every week and always find her happy and in good company."),
    (MessageKey::FooterRights, "All rights reserved."),
];

// ==================== Portuguese ====================

const PT: &[(MessageKey, &str)] = &[
    (MessageKey::NavHome, "Início"),
    (MessageKey::NavAbout, "Sobre nós"),
    (MessageKey::NavServices, "Serviços"),
    (MessageKey::NavTestimonials, "Testemunhos"),
    (MessageKey::NavContact, "Contacto"),
    (MessageKey::HeroTitle, "Um lar para viver a nova idade"),
    (MessageKey::HeroSubtitle, "Cuidados próximos e profissionais para os nossos idosos, 24 horas por dia."),
    (MessageKey::HeroCta, "Pedir informações"),
    (MessageKey::ContactTitle, "Fale connosco"),
    (MessageKey::ContactName, "Nome"),
    (MessageKey::ContactEmail, "Correio eletrónico"),
    (MessageKey::ContactPhone, "Telefone"),
    (MessageKey::ContactMessage, "Mensagem"),
    (MessageKey::ContactSubmit, "Enviar mensagem"),
    (MessageKey::ContactSending, "A enviar..."),
    (MessageKey::ContactSuccess, "Mensagem enviada! Entraremos em contacto em breve."),
    (MessageKey::ContactError, "Não foi possível enviar a mensagem. Tente novamente."),
    (MessageKey::ValidationNameMin, "O nome deve ter pelo menos {min} caracteres"),
    (MessageKey::ValidationEmailInvalid, "Endereço de correio eletrónico inválido"),
    (MessageKey::ValidationPhoneMin, "O telefone deve ter pelo menos {min} dígitos"),
    (MessageKey::ValidationMessageMin, "A mensagem deve ter pelo menos {min} caracteres"),
    (MessageKey::ValidationMessageMax, "A mensagem não pode ter mais de {max} caracteres"),
    (MessageKey::CookiesDescription, "Utilizamos cookies próprios e de terceiros para analisar a utilização do site. Pode aceitar todos ou apenas os essenciais."),
    (MessageKey::CookiesAccept, "Aceitar todos"),
    (MessageKey::CookiesEssential, "Apenas essenciais"),
    (MessageKey::CookiesPrivacy, "Política de privacidade"),
    (MessageKey::CookiesPolicy, "Política de cookies"),
    (MessageKey::TestimonialsTitle, "O que dizem as famílias"),
    (MessageKey::TestimonialsMargaretName, "Margarida Sousa"),
    (MessageKey::TestimonialsMargaretRole, "Filha de residente"),
    (MessageKey::TestimonialsMargaretContent, "A minha mãe sente-se em casa. A equipa é atenciosa e mantém-nos sempre informados."),
    (MessageKey::TestimonialsJohnName, "João Pereira"),
    (MessageKey::TestimonialsJohnRole, "Residente"),
    (MessageKey::TestimonialsJohnContent, "As atividades e a comida são ótimas. Fiz bons amigos aqui."),
    (MessageKey::TestimonialsDavidName, "David Costa"),
    (MessageKey::TestimonialsDavidRole, "Filho de residente"),
    (MessageKey::TestimonialsDavidContent, "Verdadeiros profissionais. Saber que o meu pai está bem cuidado não tem preço."),
    (MessageKey::TestimonialsEmilyName, "Emília Santos"),
    (MessageKey::TestimonialsEmilyRole, "Neta de residente"),
    (MessageKey::TestimonialsEmilyContent, "Visitamos a minha avó todas as semanas e encontramo-la sempre feliz e acompanhada."),
    (MessageKey::FooterRights, "Todos os direitos reservados."),
];

// ==================== French ====================

const FR: &[(MessageKey, &str)] = &[
    (MessageKey::NavHome, "Accueil"),
    (MessageKey::NavAbout, "À propos"),
    (MessageKey::NavServices, "Services"),
    (MessageKey::NavTestimonials, "Témoignages"),
    (MessageKey::NavContact, "Contact"),
    (MessageKey::HeroTitle, "Une maison pour vivre le nouvel âge"),
    (MessageKey::HeroSubtitle, "Un accompagnement proche et professionnel pour nos aînés, 24 heures sur 24."),
    (MessageKey::HeroCta, "Demander des informations"),
    (MessageKey::ContactTitle, "Contactez-nous"),
    (MessageKey::ContactName, "Nom"),
    (MessageKey::ContactEmail, "E-mail"),
    (MessageKey::ContactPhone, "Téléphone"),
    (MessageKey::ContactMessage, "Message"),
    (MessageKey::ContactSubmit, "Envoyer le message"),
    (MessageKey::ContactSending, "Envoi en cours..."),
    (MessageKey::ContactSuccess, "Message envoyé ! Nous vous répondrons rapidement."),
    (MessageKey::ContactError, "Le message n'a pas pu être envoyé. Veuillez réessayer."),
    (MessageKey::ValidationNameMin, "Le nom doit contenir au moins {min} caractères"),
    (MessageKey::ValidationEmailInvalid, "Adresse e-mail invalide"),
    (MessageKey::ValidationPhoneMin, "Le téléphone doit contenir au moins {min} chiffres"),
    (MessageKey::ValidationMessageMin, "Le message doit contenir au moins {min} caractères"),
    (MessageKey::ValidationMessageMax, "Le message ne peut pas dépasser {max} caractères"),
    (MessageKey::CookiesDescription, "Nous utilisons des cookies propres et tiers pour analyser l'utilisation du site. Vous pouvez tous les accepter ou seulement les essentiels."),
    (MessageKey::CookiesAccept, "Tout accepter"),
    (MessageKey::CookiesEssential, "Essentiels uniquement"),
    (MessageKey::CookiesPrivacy, "Politique de confidentialité"),
    (MessageKey::CookiesPolicy, "Politique de cookies"),
    (MessageKey::TestimonialsTitle, "Ce que disent les familles"),
    (MessageKey::TestimonialsMargaretName, "Marguerite Dubois"),
    (MessageKey::TestimonialsMargaretRole, "Fille de résidente"),
    (MessageKey::TestimonialsMargaretContent, "Ma mère se sent chez elle. L'équipe est attentionnée et nous tient toujours informés."),
    (MessageKey::TestimonialsJohnName, "Jean Martin"),
    (MessageKey::TestimonialsJohnRole, "Résident"),
    (MessageKey::TestimonialsJohnContent, "Les activités et les repas sont excellents. Je me suis fait de bons amis ici."),
    (MessageKey::TestimonialsDavidName, "David Bernard"),
    (MessageKey::TestimonialsDavidRole, "Fils de résident"),
    (MessageKey::TestimonialsDavidContent, "De vrais professionnels. Savoir que mon père est bien soigné n'a pas de prix."),
    (MessageKey::TestimonialsEmilyName, "Émilie Laurent"),
    (MessageKey::TestimonialsEmilyRole, "Petite-fille de résidente"),
    (MessageKey::TestimonialsEmilyContent, "Nous rendons visite à ma grand-mère chaque semaine et la trouvons toujours heureuse et entourée."),
    (MessageKey::FooterRights, "Tous droits réservés."),
];

// ==================== Italian ====================

const IT: &[(MessageKey, &str)] = &[
    (MessageKey::NavHome, "Home"),
    (MessageKey::NavAbout, "Chi siamo"),
    (MessageKey::NavServices, "Servizi"),
    (MessageKey::NavTestimonials, "Testimonianze"),
    (MessageKey::NavContact, "Contatti"),
    (MessageKey::HeroTitle, "Una casa per vivere la nuova età"),
    (MessageKey::HeroSubtitle, "Assistenza vicina e professionale per i nostri anziani, 24 ore su 24."),
    (MessageKey::HeroCta, "Richiedi informazioni"),
    (MessageKey::ContactTitle, "Contattaci"),
    (MessageKey::ContactName, "Nome"),
    (MessageKey::ContactEmail, "Email"),
    (MessageKey::ContactPhone, "Telefono"),
    (MessageKey::ContactMessage, "Messaggio"),
    (MessageKey::ContactSubmit, "Invia messaggio"),
    (MessageKey::ContactSending, "Invio in corso..."),
    (MessageKey::ContactSuccess, "Messaggio inviato! Ti risponderemo al più presto."),
    (MessageKey::ContactError, "Impossibile inviare il messaggio. Riprova."),
    (MessageKey::ValidationNameMin, "Il nome deve contenere almeno {min} caratteri"),
    (MessageKey::ValidationEmailInvalid, "Indirizzo email non valido"),
    (MessageKey::ValidationPhoneMin, "Il telefono deve contenere almeno {min} cifre"),
    (MessageKey::ValidationMessageMin, "Il messaggio deve contenere almeno {min} caratteri"),
    (MessageKey::ValidationMessageMax, "Il messaggio non può superare {max} caratteri"),
    (MessageKey::CookiesDescription, "Utilizziamo cookie propri e di terze parti per analizzare l'uso del sito. Puoi accettarli tutti o solo quelli essenziali."),
    (MessageKey::CookiesAccept, "Accetta tutti"),
    (MessageKey::CookiesEssential, "Solo essenziali"),
    (MessageKey::CookiesPrivacy, "Informativa sulla privacy"),
    (MessageKey::CookiesPolicy, "Informativa sui cookie"),
    (MessageKey::TestimonialsTitle, "Cosa dicono le famiglie"),
    (MessageKey::TestimonialsMargaretName, "Margherita Rossi"),
    (MessageKey::TestimonialsMargaretRole, "Figlia di una residente"),
    (MessageKey::TestimonialsMargaretContent, "Mia madre si sente a casa. Il personale è attento e ci tiene sempre informati."),
    (MessageKey::TestimonialsJohnName, "Giovanni Bianchi"),
    (MessageKey::TestimonialsJohnRole, "Residente"),
    (MessageKey::TestimonialsJohnContent, "Le attività e il cibo sono ottimi. Qui ho trovato buoni amici."),
    (MessageKey::TestimonialsDavidName, "Davide Romano"),
    (MessageKey::TestimonialsDavidRole, "Figlio di un residente"),
    (MessageKey::TestimonialsDavidContent, "Veri professionisti. Sapere che mio padre è ben assistito non ha prezzo."),
    (MessageKey::TestimonialsEmilyName, "Emilia Ricci"),
    (MessageKey::TestimonialsEmilyRole, "Nipote di una residente"),
    (MessageKey::TestimonialsEmilyContent, "Andiamo a trovare mia nonna ogni settimana e la troviamo sempre serena e in compagnia."),
    (MessageKey::FooterRights, "Tutti i diritti riservati."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_keys_are_unique() {
        let keys: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_key_from_str_roundtrip() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("nav.blog".parse::<MessageKey>().is_err());
    }

    #[test]
    fn test_spanish_catalog_is_complete() {
        for key in MessageKey::ALL {
            assert!(
                ES.iter().any(|(k, _)| *k == key),
                "Spanish catalog is missing {}",
                key
            );
        }
    }

    #[test]
    fn test_all_catalogs_same_key_count_as_spanish() {
        for language in Language::ALL {
            assert_eq!(
                catalog_for(language).len(),
                ES.len(),
                "catalog for {} has a different key count",
                language
            );
        }
    }

    #[test]
    fn test_validation_messages_have_placeholders() {
        for language in Language::ALL {
            let catalog = catalog_for(language);
            let get = |key: MessageKey| {
                catalog
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
                    .unwrap_or_default()
            };
            assert!(get(MessageKey::ValidationNameMin).contains("{min}"));
            assert!(get(MessageKey::ValidationPhoneMin).contains("{min}"));
            assert!(get(MessageKey::ValidationMessageMin).contains("{min}"));
            assert!(get(MessageKey::ValidationMessageMax).contains("{max}"));
        }
    }
}
