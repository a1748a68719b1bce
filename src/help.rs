use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static KEYS: &[(&str, &str)] = &[
    ("p, <, PAGE UP", "Previous month"),
    ("n, >, PAGE DOWN", "Next month"),
    ("t, 0, HOME", "Jump to today"),
    ("h, LEFT", "Select previous day"),
    ("l, RIGHT", "Select next day"),
    ("k, UP", "Select previous week"),
    ("j, DOWN", "Select next week"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

static FOOTER: &[&str] = &["", "Days marked with * are festivals.", "Press the Any Key to dismiss."];

/// Width of the key column of the help text
const KEY_WIDTH: usize = 18;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text() -> Text<'static> {
        let lines = KEYS
            .iter()
            .map(|&(keys, what)| Line::raw(format!("{keys:KEY_WIDTH$}{what}")))
            .chain(FOOTER.iter().map(|&s| Line::raw(s)))
            .collect::<Vec<_>>();
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Help::text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        }
        .intersection(area);
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
