//! HTML rendering of the gallery and detail overlay.
//!
//! Feed content is untrusted: every text and attribute value goes through
//! [`escape`] before it is placed in markup.

use std::borrow::Cow;
use std::fmt::Write;

use crate::domain::DateRange;
use crate::presenter::gallery::{Gallery, GalleryState};
use crate::presenter::modal::{DetailMedia, DetailView};
use crate::view::ViewItem;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0b0d17; color: #e8eaf6; }
header { padding: 16px 24px; border-bottom: 1px solid #23263a; }
.fact { color: #9fa8da; font-size: 0.95rem; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; padding: 24px; }
.card { background: #151829; border-radius: 8px; overflow: hidden; }
.card-link { color: inherit; text-decoration: none; display: block; }
.thumb-wrap { position: relative; aspect-ratio: 4 / 3; background: #1f2337; }
.thumb, .thumb-placeholder { width: 100%; height: 100%; object-fit: cover; display: block; }
.badge { position: absolute; top: 8px; left: 8px; background: #3949ab; padding: 2px 8px; border-radius: 4px; font-size: 0.8rem; }
.card-body { padding: 12px; }
.title { font-weight: 600; }
.meta { color: #9fa8da; font-size: 0.85rem; margin-top: 4px; }
.placeholder, .loading { grid-column: 1 / -1; text-align: center; padding: 48px; color: #9fa8da; }
.modal { display: none; position: fixed; inset: 0; z-index: 10; }
.modal:target { display: block; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.75); }
.modal-content { position: relative; max-width: 900px; max-height: 90vh; overflow: auto; margin: 5vh auto; background: #151829; border-radius: 8px; }
.modal-media img, .modal-media iframe { width: 100%; display: block; border: 0; }
.modal-media iframe { aspect-ratio: 16 / 9; }
.modal-body { padding: 16px 24px; }
.modal-close { position: absolute; top: 8px; right: 12px; color: #e8eaf6; font-size: 1.5rem; text-decoration: none; }
.modal-links a { margin-right: 16px; color: #8c9eff; }
"#;

/// Escape `& < > " '` for use in text or quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

pub fn card_html(index: usize, item: &ViewItem) -> String {
    let title = escape(&item.title);
    let date = escape(&item.date_display);
    let thumb = match &item.thumbnail {
        Some(src) => format!(
            r#"<img class="thumb" src="{}" alt="{}" loading="lazy" />"#,
            escape(src),
            title
        ),
        None => r#"<div class="thumb-placeholder" aria-hidden="true"></div>"#.to_string(),
    };

    format!(
        r##"<article class="card" data-index="{index}" aria-label="{title}, {date}">
  <a class="card-link" href="#detail-{index}">
    <div class="thumb-wrap">
      <span class="badge">{badge}</span>
      {thumb}
    </div>
    <div class="card-body">
      <div class="title">{title}</div>
      <div class="meta">{date}</div>
    </div>
  </a>
</article>"##,
        index = index,
        title = title,
        date = date,
        badge = item.media_kind.badge(),
        thumb = thumb,
    )
}

pub fn gallery_html(gallery: &Gallery) -> String {
    match gallery.state() {
        GalleryState::Cards(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| card_html(i, item))
            .collect::<Vec<_>>()
            .join("\n"),
        GalleryState::Loading => format!(
            r#"<div class="loading" role="status" aria-live="polite">{}</div>"#,
            escape(GalleryState::Loading.message().unwrap_or_default())
        ),
        state => format!(
            r#"<div class="placeholder"><p>{}</p></div>"#,
            escape(state.message().unwrap_or_default())
        ),
    }
}

pub fn detail_html(detail: &DetailView) -> String {
    let title = escape(&detail.title);
    let mut html = String::new();

    html.push_str(r#"<div class="modal-media">"#);
    match &detail.media {
        DetailMedia::Image { src: Some(src) } => {
            let _ = write!(html, r#"<img src="{}" alt="{}" />"#, escape(src), title);
        }
        DetailMedia::Image { src: None } => {
            html.push_str(r#"<div class="thumb-placeholder" aria-hidden="true"></div>"#);
        }
        DetailMedia::Player { embed_url, .. } => {
            let _ = write!(
                html,
                r#"<iframe src="{}" title="{}" loading="lazy" referrerpolicy="strict-origin-when-cross-origin" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen></iframe>"#,
                escape(embed_url),
                title
            );
        }
        DetailMedia::Linked { thumbnail, url } => {
            if let Some(thumb) = thumbnail {
                let _ = write!(
                    html,
                    r#"<img src="{}" alt="{} (video thumbnail)" />"#,
                    escape(thumb),
                    title
                );
            }
            if let Some(url) = url {
                let _ = write!(
                    html,
                    r#"<p><a href="{}" target="_blank" rel="noopener noreferrer">Open video</a></p>"#,
                    escape(url)
                );
            }
        }
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="modal-body"><h2>{}</h2><p class="meta">{}</p><p>{}</p>"#,
        title,
        escape(&detail.date_display),
        escape(&detail.explanation)
    );

    if let Some(copyright) = &detail.copyright {
        let _ = write!(html, r#"<p class="meta">&copy; {}</p>"#, escape(copyright));
    }

    let mut links = Vec::new();
    if let Some(hd) = &detail.hd_link {
        links.push(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View HD</a>"#,
            escape(hd)
        ));
    }
    if let Some(source) = &detail.source_link {
        links.push(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View source</a>"#,
            escape(source)
        ));
    }
    if !links.is_empty() {
        let _ = write!(html, r#"<p class="modal-links">{}</p>"#, links.join(""));
    }

    html.push_str("</div>");
    html
}

fn overlay_html(id: &str, close_href: &str, body: &str) -> String {
    format!(
        r#"<section class="modal" id="{id}" role="dialog" aria-modal="true">
  <a class="modal-backdrop" href="{close}" data-close-modal aria-label="Close"></a>
  <div class="modal-content">
    <a class="modal-close" href="{close}" data-close-modal aria-label="Close">&times;</a>
    {body}
  </div>
</section>"#,
        id = escape(id),
        close = escape(close_href),
        body = body,
    )
}

/// Standalone page with the gallery and one `:target` overlay per card.
pub fn page_html(gallery: &Gallery, range: &DateRange, fact: &str) -> String {
    let details: Vec<String> = gallery
        .cards()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let detail = DetailView::from_entry(&item.entry);
            overlay_html(&format!("detail-{}", i), "#", &detail_html(&detail))
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Nebula - Astronomy Picture of the Day</title>
<style>{style}</style>
</head>
<body>
<header>
  <h1>Astronomy Picture of the Day</h1>
  <p class="fact">{fact}</p>
  <p class="meta">{start} to {end}</p>
</header>
<main class="gallery" id="gallery">
{gallery}
</main>
{details}
</body>
</html>
"#,
        style = STYLESHEET,
        fact = escape(fact),
        start = range.start().format("%Y-%m-%d"),
        end = range.end().format("%Y-%m-%d"),
        gallery = gallery_html(gallery),
        details = details.join("\n"),
    )
}
