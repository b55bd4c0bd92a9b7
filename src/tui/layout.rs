use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::presenter::{DetailMedia, DetailView, GalleryState};
use crate::tui::app::{Focus, TuiApp};
use crate::view::ViewItem;

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Fact banner
            Constraint::Length(3), // Range bar
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_fact(frame, app, chunks[0], colors);
    render_range_bar(frame, app, chunks[1], colors);
    render_gallery(frame, app, chunks[2], colors);
    render_status_bar(frame, app, chunks[3], colors);

    if app.modal.is_open() {
        render_modal(frame, app, colors);
    } else {
        app.areas.modal = None;
        app.areas.close_control = None;
    }
}

fn border_style(focused: bool, colors: &ColorConfig) -> Style {
    if focused {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    }
}

fn render_fact(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let fact = Paragraph::new(app.fact.as_str()).style(Style::default().fg(colors.fact));
    frame.render_widget(fact, area);
}

fn render_range_bar(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    let fields = [
        (" Start ", app.start, Focus::StartDate, chunks[0]),
        (" End ", app.end, Focus::EndDate, chunks[1]),
    ];
    for (title, date, focus, chunk) in fields {
        let field = Paragraph::new(date.format("%Y-%m-%d").to_string())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style(app.focus == focus, colors)),
            );
        frame.render_widget(field, chunk);
    }

    let button_style = if app.focus == Focus::LoadButton {
        Style::default()
            .bg(colors.selection_bg)
            .fg(colors.selection_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let label = if app.pending.is_some() { "Loading" } else { "Load" };
    let button = Paragraph::new(Span::styled(format!(" {} ", label), button_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app.focus == Focus::LoadButton, colors)),
        );
    frame.render_widget(button, chunks[2]);

    app.areas.start_field = chunks[0];
    app.areas.end_field = chunks[1];
    app.areas.load_button = chunks[2];
}

fn render_gallery(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let count = app.gallery.cards().len();
    let block = Block::default()
        .title(format!(" Gallery ({}) ", count))
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Gallery, colors));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.areas.cards.clear();

    if let Some(message) = app.gallery.state().message() {
        let color = if app.gallery.state() == &GalleryState::Failed {
            colors.error
        } else {
            colors.placeholder
        };
        let vertical = inner.height.saturating_sub(1) / 2;
        let centered = Rect::new(inner.x, inner.y + vertical, inner.width, 1.min(inner.height));
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        frame.render_widget(placeholder, centered);
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    app.columns = columns;

    let selected_row = app.selected / columns;
    if selected_row < app.scroll_row {
        app.scroll_row = selected_row;
    } else if selected_row >= app.scroll_row + visible_rows {
        app.scroll_row = selected_row + 1 - visible_rows;
    }

    let card_width = inner.width / columns as u16;
    let first = app.scroll_row * columns;
    let last = (first + visible_rows * columns).min(count);

    for index in first..last {
        let slot = index - first;
        let rect = Rect::new(
            inner.x + (slot % columns) as u16 * card_width,
            inner.y + (slot / columns) as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT.min(inner.height),
        );
        let item = &app.gallery.cards()[index];
        let focused = app.focus == Focus::Gallery && index == app.selected;
        render_card(frame, item, rect, focused, colors);
        app.areas.cards.push((rect, index));
    }
}

fn render_card(
    frame: &mut Frame,
    item: &ViewItem,
    area: Rect,
    focused: bool,
    colors: &ColorConfig,
) {
    let block_style = if focused {
        Style::default()
            .fg(colors.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let badge = Span::styled(
        format!("[{}]", item.media_kind.badge()),
        Style::default().fg(colors.badge(item.media_kind)),
    );
    let thumbnail = match &item.thumbnail {
        Some(src) => Span::styled(src.clone(), Style::default().fg(colors.link)),
        None => Span::styled("░░ no preview ░░", Style::default().fg(colors.placeholder)),
    };

    let lines = vec![
        Line::from(vec![
            badge,
            Span::raw(" "),
            Span::styled(item.date_display.clone(), Style::default().fg(colors.card_date)),
        ]),
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(colors.card_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(thumbnail),
    ];

    let card = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(block_style));
    frame.render_widget(card, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.modal.is_open() {
        "Esc:Close  j/k:Scroll  H:HD  o:Source  p:Play  q:Quit".to_string()
    } else {
        "Tab:Focus  h/l/j/k:Move  Enter/Space:Open  g:Load  f:Fact  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    frame.render_widget(paragraph, area);
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_modal(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let Some(detail) = app.modal.detail() else {
        return;
    };
    let area = popup_area(frame.area(), 80, 80);
    let lines = detail_lines(detail, area.width, colors);

    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);

    let close = Rect::new(area.x + area.width.saturating_sub(6), area.y, 5.min(area.width), 1);
    frame.render_widget(
        Paragraph::new(Span::styled("[x]", Style::default().fg(colors.error))),
        close,
    );

    app.areas.modal = Some(area);
    app.areas.close_control = Some(close);
}

fn detail_lines<'a>(detail: &'a DetailView, width: u16, colors: &ColorConfig) -> Vec<Line<'a>> {
    let link = Style::default().fg(colors.link);
    let mut lines = vec![
        Line::from(Span::styled(
            detail.date_display.as_str(),
            Style::default().fg(colors.card_date),
        )),
        Line::from(""),
    ];

    match &detail.media {
        DetailMedia::Image { src: Some(src) } => {
            lines.push(Line::from(vec![Span::raw("Image: "), Span::styled(src.as_str(), link)]));
        }
        DetailMedia::Image { src: None } => {
            lines.push(Line::from(Span::styled(
                "░░ no image available ░░",
                Style::default().fg(colors.placeholder),
            )));
        }
        DetailMedia::Player { video_id, embed_url } => {
            lines.push(Line::from(format!("▶ Video {} (p to play)", video_id)));
            lines.push(Line::from(Span::styled(embed_url.as_str(), link)));
        }
        DetailMedia::Linked { thumbnail, url } => {
            if let Some(thumb) = thumbnail {
                lines.push(Line::from(vec![
                    Span::raw("Thumbnail: "),
                    Span::styled(thumb.as_str(), link),
                ]));
            }
            if let Some(url) = url {
                lines.push(Line::from(vec![
                    Span::raw("Open video (p): "),
                    Span::styled(url.as_str(), link),
                ]));
            }
        }
    }

    if let Some(hd) = &detail.hd_link {
        lines.push(Line::from(vec![Span::raw("View HD (H): "), Span::styled(hd.as_str(), link)]));
    }
    if let Some(source) = &detail.source_link {
        lines.push(Line::from(vec![
            Span::raw("View source (o): "),
            Span::styled(source.as_str(), link),
        ]));
    }
    if let Some(copyright) = &detail.copyright {
        lines.push(Line::from(format!("© {}", copyright)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(width.saturating_sub(2) as usize)));
    lines.push(Line::from(""));
    for paragraph in detail.explanation.lines() {
        lines.push(Line::from(paragraph));
    }
    lines
}
