use crate::contact::ValidContact;
use crate::html;
use serde::Serialize;

/// An email ready for the dispatch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl OutgoingEmail {
    /// Operator notification for a contact form message.
    ///
    /// Replies go straight to the visitor.
    pub fn contact_notification(contact: &ValidContact, from: &str, recipients: &[String]) -> Self {
        let html = format!(
            "<h1>Nuevo mensaje de la web</h1>\n\
             <p><strong>Nombre:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Teléfono:</strong> {}</p>\n\
             <p><strong>Mensaje:</strong></p>\n\
             <p>{}</p>\n",
            html::escape(&contact.name),
            html::escape(&contact.email),
            html::escape(&contact.phone),
            html::escape(&contact.message).replace('\n', "<br>")
        );

        Self {
            from: from.to_string(),
            to: recipients.to_vec(),
            subject: format!("Nuevo mensaje de contacto: {}", contact.name),
            html,
            reply_to: Some(contact.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ValidContact {
        ValidContact {
            name: "Maria Lopez".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+34600111222".to_string(),
            message: "Quisiera información\nsobre plazas.".to_string(),
        }
    }

    #[test]
    fn test_notification_fields() {
        let recipients = vec!["info@residencia.test".to_string()];
        let email = OutgoingEmail::contact_notification(&contact(), "Web <web@residencia.test>", &recipients);

        assert_eq!(email.from, "Web <web@residencia.test>");
        assert_eq!(email.to, recipients);
        assert_eq!(email.subject, "Nuevo mensaje de contacto: Maria Lopez");
        assert_eq!(email.reply_to.as_deref(), Some("maria@example.com"));
    }

    #[test]
    fn test_notification_body_contains_all_fields() {
        let email = OutgoingEmail::contact_notification(&contact(), "web@residencia.test", &[]);
        assert!(email.html.contains("Maria Lopez"));
        assert!(email.html.contains("maria@example.com"));
        assert!(email.html.contains("+34600111222"));
        assert!(email.html.contains("Quisiera información<br>sobre plazas."));
    }

    #[test]
    fn test_notification_body_is_escaped() {
        let mut contact = contact();
        contact.message = "<script>alert(1)</script> hola".to_string();
        let email = OutgoingEmail::contact_notification(&contact, "web@residencia.test", &[]);
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_serialization_shape() {
        let email = OutgoingEmail::contact_notification(&contact(), "web@residencia.test", &["a@b.es".to_string()]);
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["to"][0], "a@b.es");
        assert_eq!(json["reply_to"], "maria@example.com");
        assert!(json["html"].as_str().unwrap().contains("Teléfono"));
    }
}
