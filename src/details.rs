use crate::calendar::{centered_column, MonthGrid};
use crate::festival::FestivalIndex;
use crate::theme::{FESTIVAL_NAME_STYLE, MUTED_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::{format_description::FormatItem, macros::format_description, Date};

static LONG_FMT: &[FormatItem<'_>] =
    format_description!("[weekday], [month repr:long] [day padding:none], [year]");

/// Describes the selected day and lists the festivals of the displayed month
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Details<'a> {
    grid: &'a MonthGrid,
    festivals: &'a FestivalIndex,
    selected: Date,
}

impl<'a> Details<'a> {
    pub(crate) fn new(grid: &'a MonthGrid, festivals: &'a FestivalIndex, selected: Date) -> Self {
        Details {
            grid,
            festivals,
            selected,
        }
    }

    fn to_text(self) -> Text<'a> {
        let mut lines = vec![Line::styled(long_date(self.selected), TITLE_STYLE)];
        match self.festivals.find(self.selected) {
            Some(fest) => {
                lines.push(Line::styled(fest.name.as_str(), FESTIVAL_NAME_STYLE));
                if let Some(image) = fest.image.as_deref() {
                    lines.push(Line::from(vec![
                        Span::styled("Image: ", MUTED_STYLE),
                        Span::raw(image),
                    ]));
                }
            }
            None => lines.push(Line::styled("No festival", MUTED_STYLE)),
        }
        lines.push(Line::default());
        let month_festivals = self.festivals.in_month(self.grid);
        if month_festivals.is_empty() {
            lines.push(Line::styled(
                format!("No festivals in {} {}", self.grid.month(), self.grid.year()),
                MUTED_STYLE,
            ));
        } else {
            lines.push(Line::styled(
                format!("Festivals in {} {}", self.grid.month(), self.grid.year()),
                TITLE_STYLE,
            ));
            for fest in month_festivals {
                lines.push(Line::from(vec![
                    Span::raw(format!(" {:2}  ", fest.date.day())),
                    Span::styled(fest.name.as_str(), FESTIVAL_NAME_STYLE),
                ]));
            }
        }
        Text::from(lines)
    }
}

impl Widget for Details<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_column(area);
        Paragraph::new(self.to_text()).render(area, buf);
    }
}

fn long_date(date: Date) -> String {
    date.format(&LONG_FMT)
        .unwrap_or_else(|_| date.to_string())
}
