//! The two emails sent for every contact submission.
//!
//! All user-supplied text is HTML-escaped before it is placed in an HTML body.

use super::EmailMessage;
use crate::config::ContactSettings;
use crate::models::{ContactRequest, RESPONSE_WINDOW};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Alert to the site owner containing the full request.
///
/// `reply_to` is the requester so the owner can answer directly.
pub fn internal_notification(
    request: &ContactRequest,
    settings: &ContactSettings,
    submitted_at: DateTime<Utc>,
) -> EmailMessage {
    let subject = format!(
        "New {} inquiry from {}",
        request.service_type().label(),
        request.full_name()
    );

    let mut rows: Vec<(&str, String)> = vec![
        ("Name", request.full_name()),
        ("Email", request.email().to_string()),
    ];
    if let Some(phone) = request.phone() {
        rows.push(("Phone", phone.to_string()));
    }
    if let Some(company) = request.company() {
        rows.push(("Company", company.to_string()));
    }
    rows.push(("Service", request.service_type().label().to_string()));
    if let Some(title) = request.project_title() {
        rows.push(("Project", title.to_string()));
    }
    if let Some(timeline) = request.timeline() {
        rows.push(("Timeline", timeline.label().to_string()));
    }
    rows.push((
        "Submitted",
        submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    ));

    let mut text = String::new();
    let mut html = String::from("<h2>New contact form submission</h2>\n<table>\n");
    for (label, value) in &rows {
        let _ = writeln!(text, "{}: {}", label, value);
        let _ = writeln!(
            html,
            "<tr><th align=\"left\">{}</th><td>{}</td></tr>",
            label,
            escape_html(value)
        );
    }
    html.push_str("</table>\n<h3>Message</h3>\n");
    let _ = write!(html, "<p>{}</p>", escape_html(request.message()).replace('\n', "<br>"));
    let _ = write!(text, "\nMessage:\n{}\n", request.message());

    EmailMessage {
        from: settings.from_email.to_string(),
        to: vec![settings.owner_email.to_string()],
        subject,
        html,
        text,
        reply_to: Some(request.email().to_string()),
    }
}

/// Acknowledgment sent to the requester.
pub fn auto_reply(request: &ContactRequest, settings: &ContactSettings) -> EmailMessage {
    let subject = format!("Thanks for contacting {}", settings.site_name);
    let service = request.service_type().label();

    let text = format!(
        "Hi {name},\n\n\
         Thank you for getting in touch about {service}. We've received your message \
         and will get back to you within {window}.\n\n\
         If your inquiry is urgent, reply to this email or write to {fallback}.\n\n\
         Best regards,\n{site}\n",
        name = request.first_name(),
        service = service,
        window = RESPONSE_WINDOW,
        fallback = settings.fallback_email,
        site = settings.site_name,
    );

    let html = format!(
        "<p>Hi {name},</p>\n\
         <p>Thank you for getting in touch about <strong>{service}</strong>. We've received your message \
         and will get back to you within {window}.</p>\n\
         <p>If your inquiry is urgent, reply to this email or write to \
         <a href=\"mailto:{fallback}\">{fallback}</a>.</p>\n\
         <p>Best regards,<br>{site}</p>",
        name = escape_html(request.first_name()),
        service = service,
        window = RESPONSE_WINDOW,
        fallback = settings.fallback_email,
        site = escape_html(&settings.site_name),
    );

    EmailMessage {
        from: settings.from_email.to_string(),
        to: vec![request.email().to_string()],
        subject,
        html,
        text,
        reply_to: Some(settings.owner_email.to_string()),
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ContactSchema, ContactValidator};
    use chrono::TimeZone;
    use serde_json::json;

    fn request() -> ContactRequest {
        ContactSchema::new()
            .parse(&json!({
                "firstName": "Jane",
                "lastName": "<Doe>",
                "email": "jane@example.com",
                "serviceType": "tender-management",
                "timeline": "urgent",
                "message": "Line one\nLine <two>"
            }))
            .unwrap()
    }

    #[test]
    fn test_notification_goes_to_owner_and_escapes_input() {
        let settings = ContactSettings::default();
        let submitted = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let message = internal_notification(&request(), &settings, submitted);

        assert_eq!(message.to, vec![settings.owner_email.to_string()]);
        assert_eq!(message.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(
            message.subject,
            "New Tender Management inquiry from Jane <Doe>"
        );
        assert!(message.html.contains("Jane &lt;Doe&gt;"));
        assert!(message.html.contains("Line one<br>Line &lt;two&gt;"));
        assert!(message.text.contains("Timeline: Urgent (ASAP)"));
        assert!(message.text.contains("2026-03-01 09:30:00 UTC"));
    }

    #[test]
    fn test_auto_reply_goes_to_requester() {
        let settings = ContactSettings::default();
        let message = auto_reply(&request(), &settings);

        assert_eq!(message.to, vec!["jane@example.com".to_string()]);
        assert!(message.subject.contains(&settings.site_name));
        assert!(message.text.contains("24-48 hours"));
        assert!(message.text.contains("Tender Management"));
    }
}
