//! Summary line under the list: items left, filter links, clear completed.

use crate::constants::{CLEAR_COMPLETED_LABEL, FOOTER_FILTER_SEPARATOR};
use crate::todo::Filter;
use crate::ui::core::component::hit;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterProps {
    pub active_count: usize,
    pub completed_count: usize,
    pub filter: Filter,
}

/// What a click on the footer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterHit {
    Show(Filter),
    ClearCompleted,
}

#[derive(Debug, Clone, Default)]
pub struct Footer {
    links: Vec<(Filter, Rect)>,
    clear_completed: Option<Rect>,
}

/// "No items left", "1 item left", "3 items left"
pub fn items_left_text(active_count: usize) -> String {
    let word = if active_count == 1 { "item" } else { "items" };
    match active_count {
        0 => format!("No {} left", word),
        n => format!("{} {} left", n, word),
    }
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<FooterHit> {
        if let Some((filter, _)) = self.links.iter().find(|(_, rect)| hit(*rect, column, row)) {
            return Some(FooterHit::Show(*filter));
        }
        self.clear_completed
            .filter(|rect| hit(*rect, column, row))
            .map(|_| FooterHit::ClearCompleted)
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, props: FooterProps) {
        self.links.clear();
        self.clear_completed = None;

        let mut spans = Vec::new();
        let mut x = rect.x;
        let mut push = |spans: &mut Vec<Span<'static>>, span: Span<'static>| -> Rect {
            let width = span.width() as u16;
            let area = Rect::new(x, rect.y, width, 1).intersection(rect);
            x = x.saturating_add(width);
            spans.push(span);
            area
        };

        push(
            &mut spans,
            Span::styled(items_left_text(props.active_count), Style::default().fg(Color::Gray)),
        );
        push(&mut spans, Span::raw("   "));

        for (i, filter) in Filter::ALL.into_iter().enumerate() {
            if i > 0 {
                push(&mut spans, Span::raw(FOOTER_FILTER_SEPARATOR));
            }
            let style = if filter == props.filter {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let area = push(&mut spans, Span::styled(filter.label(), style));
            self.links.push((filter, area));
        }

        if props.completed_count > 0 {
            push(&mut spans, Span::raw("   "));
            let area = push(
                &mut spans,
                Span::styled(CLEAR_COMPLETED_LABEL, Style::default().fg(Color::Red)),
            );
            self.clear_completed = Some(area);
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(props: FooterProps) -> (Footer, String) {
        let mut footer = Footer::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal.draw(|f| footer.render(f, f.area(), props)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (footer, text.trim_end().to_string())
    }

    #[test]
    fn test_items_left_text() {
        assert_eq!(items_left_text(0), "No items left");
        assert_eq!(items_left_text(1), "1 item left");
        assert_eq!(items_left_text(4), "4 items left");
    }

    #[test]
    fn test_clear_completed_hidden_without_completed() {
        let (footer, text) = rendered(FooterProps {
            active_count: 1,
            completed_count: 0,
            filter: Filter::All,
        });
        assert_eq!(text, "1 item left   All  Active  Completed");
        assert_eq!(footer.hit_test(55, 0), None);
    }

    #[test]
    fn test_links_and_clear_completed_are_clickable() {
        let (footer, text) = rendered(FooterProps {
            active_count: 2,
            completed_count: 1,
            filter: Filter::Active,
        });
        assert!(text.ends_with("Clear completed"));

        // "2 items left   All  Active  Completed   Clear completed"
        assert_eq!(footer.hit_test(15, 0), Some(FooterHit::Show(Filter::All)));
        assert_eq!(footer.hit_test(20, 0), Some(FooterHit::Show(Filter::Active)));
        assert_eq!(footer.hit_test(28, 0), Some(FooterHit::Show(Filter::Completed)));
        assert_eq!(footer.hit_test(42, 0), Some(FooterHit::ClearCompleted));
        assert_eq!(footer.hit_test(13, 0), None);
    }
}
