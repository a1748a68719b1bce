use super::cell::{classify, DayCell};
use super::grid::{MonthGrid, WeekdayExt, DAYS_IN_WEEK};
use crate::festival::FestivalIndex;
use crate::theme::{day_style, TITLE_STYLE, WEEKDAY_STYLE};
use ratatui::{prelude::*, widgets::*};
use time::Date;

static HEADER: &str = " Su     Mo     Tu     We     Th     Fr     Sa  ";

/// Width of the calendar in columns
const MAIN_WIDTH: u16 = 47;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by the rule beneath the last week
const FOOTER_LINES: u16 = 1;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

const ACS_HLINE: char = '─';

const FESTIVAL_MARKER: char = '*';

/// The column of `area` in which the calendar and anything aligned with it
/// are drawn
pub(crate) fn centered_column(area: Rect) -> Rect {
    let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left),
            Constraint::Length(MAIN_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    grid: &'a MonthGrid,
    cells: Vec<DayCell<'a>>,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(
        grid: &'a MonthGrid,
        festivals: &'a FestivalIndex,
        today: Date,
        selected: Date,
    ) -> Calendar<'a> {
        let cells = classify(grid, festivals, today, selected);
        Calendar { grid, cells }
    }

    /// Number of lines needed to draw the whole month
    pub(crate) fn height(&self) -> u16 {
        let weeks = u16::try_from(self.grid.week_count()).unwrap_or(u16::MAX);
        HEADER_LINES
            .saturating_add(weeks)
            .saturating_add(FOOTER_LINES)
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_column(area);
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(self.grid);
        canvas.draw_header();
        let mut week_no = 0;
        for (i, week) in std::iter::zip(0u16.., self.cells.chunks(DAYS_IN_WEEK)) {
            for cell in week {
                canvas.draw_day(i, cell);
            }
            week_no = i + 1;
        }
        canvas.hline(HEADER_LINES + week_no, 0, ACS_HLINE, MAIN_WIDTH);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, grid: &MonthGrid) {
        let title = format!("{} {}", grid.month(), grid.year());
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        let x = MAIN_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, Some(TITLE_STYLE));
    }

    fn draw_header(&mut self) {
        self.mvprint(1, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, cell: &DayCell<'_>) {
        let day = cell.date.day();
        let marker = if cell.is_festival() {
            FESTIVAL_MARKER
        } else {
            ' '
        };
        let s = if cell.is_today {
            format!("[{day:2}]{marker}")
        } else {
            format!(" {day:2} {marker}")
        };
        self.mvprint(
            week_no + HEADER_LINES,
            DAY_WIDTH * cell.date.weekday().index0(),
            s,
            Some(day_style(cell)),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
