use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::EmailMessage;

/// Fixed sender for all notification emails.
pub const SENDER: &str = "ShiftManager <onboarding@resend.dev>";

/// Deep link a driver follows to fill in their availability for a period.
pub fn driver_link(app_base_url: &str, period_id: Uuid, driver_id: Uuid) -> String {
    format!(
        "{}/driver/{}/{}",
        app_base_url.trim_end_matches('/'),
        period_id,
        driver_id
    )
}

/// Builds the notification email for one driver when a new period opens.
///
/// The audience is French-speaking, so the subject, the body, and the
/// deadline format (dd/mm/yyyy) follow French conventions.
pub fn period_notification(
    app_base_url: &str,
    first_name: &str,
    email: &str,
    period_id: Uuid,
    driver_id: Uuid,
    period_name: &str,
    deadline: DateTime<Utc>,
) -> EmailMessage {
    let link = driver_link(app_base_url, period_id, driver_id);
    let deadline = deadline.format("%d/%m/%Y");

    let html = format!(
        r#"
          <h2>Bonjour {first_name} !</h2>
          <p>Une nouvelle période de planning est disponible : <strong>{period_name}</strong></p>
          <p>Merci de remplir vos disponibilités avant le <strong>{deadline}</strong>.</p>
          <p><a href="{link}" style="background: #0066CC; color: white; padding: 12px 24px; text-decoration: none; border-radius: 8px; display: inline-block;">📝 Remplir mes disponibilités</a></p>
          <p>À bientôt,<br>L'équipe ShiftManager</p>
        "#
    );

    EmailMessage {
        from: SENDER.to_string(),
        to: email.to_string(),
        subject: format!("📅 Nouvelles disponibilités à remplir - {period_name}"),
        html,
    }
}
