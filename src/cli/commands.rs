use std::fmt::Write;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::cli::RangeArgs;
use crate::domain::DateRange;
use crate::presenter::facts::random_fact;
use crate::presenter::markup::page_html;
use crate::presenter::Gallery;

async fn load_gallery(ctx: &AppContext, args: &RangeArgs) -> Result<(Gallery, DateRange)> {
    let range = ctx.resolve_range(args.start, args.end, AppContext::today())?;
    let items = ctx.load_view(&range).await?;

    let mut gallery = Gallery::new();
    gallery.render(items);
    Ok((gallery, range))
}

pub async fn list_entries(ctx: &AppContext, args: &RangeArgs) -> Result<()> {
    let (gallery, _) = load_gallery(ctx, args).await?;
    print!("{}", format_listing(&gallery));
    Ok(())
}

pub async fn export_html(ctx: &AppContext, args: &RangeArgs, out: &Path) -> Result<()> {
    let (gallery, range) = load_gallery(ctx, args).await?;
    write_page(&gallery, &range, &random_fact(), out)?;
    println!(
        "Wrote {} entries ({} to {}) to {}",
        gallery.cards().len(),
        range.start(),
        range.end(),
        out.display()
    );
    Ok(())
}

/// Plain-text rendition of the gallery, one card per block.
pub fn format_listing(gallery: &Gallery) -> String {
    if let Some(message) = gallery.state().message() {
        return format!("{}\n", message);
    }

    let mut out = String::new();
    for item in gallery.cards() {
        let _ = writeln!(
            out,
            "[{}] {}  {}",
            item.media_kind.badge(),
            item.date_display,
            item.title
        );
        let _ = writeln!(
            out,
            "        {}",
            item.thumbnail.as_deref().unwrap_or("(no preview)")
        );
    }
    out
}

pub fn write_page(gallery: &Gallery, range: &DateRange, fact: &str, out: &Path) -> Result<()> {
    std::fs::write(out, page_html(gallery, range, fact))?;
    tracing::info!("Exported gallery to {}", out.display());
    Ok(())
}
