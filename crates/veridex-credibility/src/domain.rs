/// Collapse a URL or hostname to its registrable domain.
///
/// Strips scheme, credentials, port, and path, drops a leading `www.`, and
/// keeps the last two DNS labels, so
/// `https://timesofindia.indiatimes.com/news` becomes `indiatimes.com`.
/// The two-label heuristic is what the credibility dataset is keyed by;
/// multi-label public suffixes (`bbc.co.uk`) collapse to their suffix.
pub fn registrable_domain(url_or_domain: &str) -> String {
    let lowered = url_or_domain.trim().to_lowercase();

    let mut hostname: &str = &lowered;
    if lowered.starts_with("http") {
        hostname = lowered
            .split("//")
            .nth(1)
            .unwrap_or("")
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("");
        if let Some(at) = hostname.rfind('@') {
            hostname = &hostname[at + 1..];
        }
        if let Some(colon) = hostname.find(':') {
            hostname = &hostname[..colon];
        }
    }

    let hostname = hostname.strip_prefix("www.").unwrap_or(hostname);

    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() > 2 {
        parts[parts.len() - 2..].join(".")
    } else {
        hostname.to_string()
    }
}
