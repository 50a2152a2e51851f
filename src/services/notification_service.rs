//! Servicio de notificaciones
//!
//! Emails hacia el staff (nueva solicitud, mensaje de contacto) y hacia
//! el cliente (presupuesto enviado) vía la API HTTP del proveedor.
//! Las notificaciones son fire-and-forget: nunca bloquean ni hacen
//! fallar la operación que las dispara; los errores solo se loguean.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::EnvironmentConfig;
use crate::dto::contact_dto::ContactMessageRequest;
use crate::models::quote::Quote;

#[derive(Clone)]
pub struct NotificationService {
    client: Client,
    config: EnvironmentConfig,
}

impl NotificationService {
    pub fn new(client: Client, config: EnvironmentConfig) -> Self {
        Self { client, config }
    }

    /// POST al proveedor de email. Si no hay API key configurada, la
    /// notificación se omite en silencio (entornos de desarrollo).
    async fn send_email(&self, to: &str, subject: &str, html: &str) {
        let api_key = match &self.config.notify_api_key {
            Some(key) => key.clone(),
            None => {
                debug!("📭 NOTIFY_API_KEY no configurada, notificación omitida");
                return;
            }
        };

        let body = json!({
            "from": self.config.notify_from,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let result = self
            .client
            .post(&self.config.notify_api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("📧 Notificación enviada: {}", subject);
            }
            Ok(response) => {
                warn!(
                    "⚠️ El proveedor de email respondió {}: {}",
                    response.status(),
                    subject
                );
            }
            Err(e) => {
                warn!("⚠️ Error enviando notificación '{}': {}", subject, e);
            }
        }
    }

    /// Aviso al staff de una nueva solicitud de presupuesto
    pub fn spawn_quote_notification(&self, quote: &Quote) {
        let service = self.clone();
        let to = self.config.notify_to.clone();
        let subject = format!("New quote request from {}", quote.name);
        let html = format!(
            "<p><strong>{}</strong> ({}, {}) requested a quote for \
             <strong>{}</strong> on {}.</p><p>Guests: {} · Duration: {} h</p>",
            quote.name,
            quote.email,
            quote.phone,
            quote.event_type,
            quote.event_date,
            quote
                .guest_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            quote
                .duration_hours
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );

        tokio::spawn(async move {
            service.send_email(&to, &subject, &html).await;
        });
    }

    /// Aviso al staff de un mensaje del formulario de contacto
    pub fn spawn_contact_notification(&self, message: &ContactMessageRequest) {
        let service = self.clone();
        let to = self.config.notify_to.clone();
        let subject = format!("New contact message from {}", message.name);
        let html = format!(
            "<p><strong>{}</strong> ({}{}) wrote:</p><p>{}</p>",
            message.name,
            message.email,
            message
                .phone
                .as_deref()
                .map(|p| format!(", {}", p))
                .unwrap_or_default(),
            message.message,
        );

        tokio::spawn(async move {
            service.send_email(&to, &subject, &html).await;
        });
    }

    /// Email al cliente cuando el staff envía el presupuesto
    pub fn spawn_quote_sent_email(&self, quote: &Quote) {
        let service = self.clone();
        let to = quote.email.clone();
        let subject = "Your American Royalty quote is ready".to_string();
        let amount = quote
            .quoted_amount
            .map(|a| format!("${}", a))
            .unwrap_or_else(|| "upon request".to_string());
        let html = format!(
            "<p>Hi {},</p><p>Your quote for <strong>{}</strong> on {} is ready: \
             <strong>{}</strong>.</p><p>Reply to this email to confirm your reservation.</p>",
            quote.name, quote.event_type, quote.event_date, amount,
        );

        tokio::spawn(async move {
            service.send_email(&to, &subject, &html).await;
        });
    }
}
