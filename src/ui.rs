//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  The layout is a four-row split:
//! the category selector tabs, the article list (or a loading / error /
//! empty-state pane), a one-line pager, and a one-line status bar.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::category::Category;
use crate::source::Article;

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  Delegates to helper functions
/// for each screen region.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [tabs_area, main_area, pager_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_category_tabs(app, frame, tabs_area);
    draw_articles(app, frame, main_area);
    draw_pager(app, frame, pager_area);
    draw_status_bar(app, frame, status_area);
}

/// Render the category selector as a tab row.
fn draw_category_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Category::ALL.iter().map(|c| Line::from(c.label())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Global News Hub ")
                .borders(Borders::ALL),
        )
        .select(app.category.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the main content area: the article list, or one of the loading /
/// error / empty-state panes, mirroring the page's conditional sections.
fn draw_articles(app: &mut App, frame: &mut Frame, area: Rect) {
    if app.loading {
        let pane = Paragraph::new("Loading headlines…")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(pane, area);
        return;
    }

    if let Some(error) = &app.error {
        let pane = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().title(" Error ").borders(Borders::ALL));
        frame.render_widget(pane, area);
        return;
    }

    if app.articles.is_empty() {
        let pane = Paragraph::new("No news articles found for this category.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(pane, area);
        return;
    }

    let items: Vec<ListItem> = app.articles.iter().map(article_list_item).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} · Top Headlines (US) ", app.category))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// One article as a two-line card: headline, then source / date / summary.
fn article_list_item(article: &Article) -> ListItem<'_> {
    let date_str = article
        .published()
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "no date".into());

    let source_name = article.source.name.as_deref().unwrap_or("unknown source");

    let title_line = Line::from(Span::styled(
        article.title_or_untitled(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    let mut meta_spans = vec![
        Span::raw("  "),
        Span::styled(source_name, Style::default().fg(Color::Cyan)),
        Span::styled(format!(" · {date_str}"), Style::default().fg(Color::DarkGray)),
    ];
    if let Some(description) = &article.description {
        meta_spans.push(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::Gray),
        ));
    }

    ListItem::new(vec![title_line, Line::from(meta_spans)])
}

/// Render the pager line: prev hint, "Page X of Y", next hint.  Directions
/// that would be a no-op are dimmed.
fn draw_pager(app: &App, frame: &mut Frame, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let pager = Paragraph::new(Line::from(vec![
        Span::styled(
            "« [p] Previous ",
            if app.can_prev_page() { enabled } else { disabled },
        ),
        Span::styled(
            format!(" Page {} of {} ", app.page, app.total_pages),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " [n] Next »",
            if app.can_next_page() { enabled } else { disabled },
        ),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(pager, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let summary = if app.loading {
        Span::styled("Fetching…", Style::default().fg(Color::Yellow))
    } else if app.error.is_some() {
        Span::styled("Fetch failed", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!(
                "{} of {} articles",
                app.articles.len(),
                app.total_results
            ),
            Style::default().fg(Color::Green),
        )
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        summary,
        Span::raw("  q: quit  ←/→: category  1-7: jump  n/p: page  ↑/↓: scroll  r: refresh"),
    ]));
    frame.render_widget(status, area);
}
