//! Social sharing links for an event page.

use serde::Serialize;
use url::Url;

use crate::datetime::display_date;
use crate::event::EventRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub page: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub email: String,
}

/// Public page URL of an event: `{base_url}/events/{id}`.
pub fn event_page_url(base_url: &Url, id: &str) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["events", id]);
    }
    url
}

pub fn share_links(event: &EventRecord, base_url: &Url) -> ShareLinks {
    let page = event_page_url(base_url, &event.id);
    let text = format!(
        "{} - {} {} at {}",
        event.title,
        display_date(&event.date),
        event.time,
        event.location
    );

    ShareLinks {
        twitter: with_query(
            "https://twitter.com/intent/tweet",
            &[("text", text.as_str()), ("url", page.as_str())],
        ),
        facebook: with_query(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", page.as_str())],
        ),
        linkedin: with_query(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", page.as_str())],
        ),
        email: mailto(&event.title, &format!("{}\n{}", text, page)),
        page: page.to_string(),
    }
}

fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.to_string(),
        Err(_) => base.to_string(),
    }
}

/// `mailto:` links want %20 for spaces, not `+`.
fn mailto(subject: &str, body: &str) -> String {
    let encoded = with_query("mailto:", &[("subject", subject), ("body", body)]);
    encoded.replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> EventRecord {
        EventRecord {
            id: "abc123".to_string(),
            title: "Rock & Roll night".to_string(),
            description: None,
            date: "2024-12-25".to_string(),
            time: "20:00".to_string(),
            location: "Opera".to_string(),
            category: "Music".to_string(),
            priority: "High".to_string(),
            picture: None,
        }
    }

    #[test]
    fn test_page_url_handles_trailing_slash() {
        let with_slash = Url::parse("https://events.example.com/app/").unwrap();
        let without = Url::parse("https://events.example.com/app").unwrap();
        assert_eq!(
            event_page_url(&with_slash, "abc").as_str(),
            "https://events.example.com/app/events/abc"
        );
        assert_eq!(
            event_page_url(&without, "abc").as_str(),
            "https://events.example.com/app/events/abc"
        );
    }

    #[test]
    fn test_links_are_encoded() {
        let base = Url::parse("https://events.example.com").unwrap();
        let links = share_links(&make_event(), &base);

        assert_eq!(links.page, "https://events.example.com/events/abc123");
        assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?text=Rock+%26+Roll+night"));
        assert!(links.twitter.contains("url=https%3A%2F%2Fevents.example.com%2Fevents%2Fabc123"));
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fevents.example.com%2Fevents%2Fabc123"
        );
        assert!(links.linkedin.contains("url=https%3A%2F%2Fevents.example.com"));
    }

    #[test]
    fn test_email_uses_percent_spaces() {
        let base = Url::parse("https://events.example.com").unwrap();
        let links = share_links(&make_event(), &base);

        assert!(links.email.starts_with("mailto:?subject=Rock%20%26%20Roll%20night"));
        assert!(!links.email.contains('+'));
    }
}
