use crate::calendar::{DayCell, Highlight};
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TODAY_FESTIVAL_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const FESTIVAL_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen);

pub(crate) const OUT_OF_MONTH_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::DIM);

pub(crate) const SELECTED_MODIFIER: Modifier = Modifier::REVERSED;

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const FESTIVAL_NAME_STYLE: Style = BASE_STYLE
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

pub(crate) const MUTED_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) fn day_style(cell: &DayCell<'_>) -> Style {
    let mut style = match cell.highlight() {
        Highlight::TodayFestival => TODAY_FESTIVAL_STYLE,
        Highlight::Today => TODAY_STYLE,
        Highlight::Festival => FESTIVAL_STYLE,
        Highlight::Plain => BASE_STYLE,
    };
    if !cell.in_month {
        style = style.patch(OUT_OF_MONTH_STYLE);
    }
    if cell.is_selected {
        style = style.add_modifier(SELECTED_MODIFIER);
    }
    style
}
