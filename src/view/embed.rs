//! Video-platform embed identifiers.
//!
//! Two URL shapes are recognised: the short-link host (`youtu.be/<id>`) and
//! the canonical host with a `v` query parameter (`youtube.com/watch?v=<id>`).

use url::Url;

const SHORT_HOST: &str = "youtu.be";
const CANONICAL_HOST: &str = "youtube.com";
const ID_PARAM: &str = "v";

/// Extract the embed identifier from a video URL.
pub fn embed_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    let candidate = if host_matches(&host, SHORT_HOST) {
        url.path_segments()?.next().map(str::to_string)
    } else if host_matches(&host, CANONICAL_HOST) {
        url.query_pairs()
            .find(|(key, _)| key == ID_PARAM)
            .map(|(_, value)| value.into_owned())
    } else {
        None
    }?;

    is_valid_id(&candidate).then_some(candidate)
}

pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
}

pub fn player_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", id)
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
