//! `POST /whatsapp` — Twilio messaging webhook.
//!
//! Reads the form field `Body`, answers with a TwiML document carrying the
//! reply text only (no structured payload).

use std::collections::HashMap;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Form;

use crate::api::types::ApiContext;

const LANG_PREFIX: &str = "lang:";
const EMPTY_REPLY: &str = "Sorry, something went wrong.";

pub async fn reply(
    State(ctx): State<ApiContext>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let body = form.get("Body").map(|b| b.trim()).unwrap_or_default();
    let text = strip_lang_prefix(body);

    let reply = ctx.core.process(text);
    tracing::info!(intent = ?reply.kind, "WhatsApp message answered");

    let answer = if reply.answer.is_empty() {
        EMPTY_REPLY
    } else {
        reply.answer.as_str()
    };

    (
        [(header::CONTENT_TYPE, "application/xml")],
        twiml_message(answer),
    )
}

/// `lang:ml dengue` → `dengue`. The language tag is dropped; a bare tag with
/// no text after it is left as is.
pub fn strip_lang_prefix(body: &str) -> &str {
    let is_tagged = body
        .get(..LANG_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(LANG_PREFIX));
    if !is_tagged {
        return body;
    }
    body.split_once(' ').map_or(body, |(_, rest)| rest)
}

pub fn twiml_message(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_prefix_is_stripped() {
        assert_eq!(strip_lang_prefix("lang:ml dengue symptoms"), "dengue symptoms");
        assert_eq!(strip_lang_prefix("LANG:hi hello"), "hello");
        assert_eq!(strip_lang_prefix("lang:ml"), "lang:ml");
        assert_eq!(strip_lang_prefix("dengue lang:ml"), "dengue lang:ml");
        assert_eq!(strip_lang_prefix(""), "");
    }

    #[test]
    fn twiml_escapes_markup() {
        let xml = twiml_message("fever < 39 & \"rest\"");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>"));
        assert!(xml.contains("fever &lt; 39 &amp; &quot;rest&quot;"));
        assert!(xml.ends_with("</Message></Response>"));
    }
}
