use crate::calendar::Calendar;
use crate::details::Details;
use crate::festival::FestivalIndex;
use crate::help::Help;
use crate::nav::{Action, Selection};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    festivals: FestivalIndex,
    today: Date,
    selection: Selection,
    state: AppState,
}

impl App {
    pub(crate) fn new(festivals: FestivalIndex, today: Date, selection: Selection) -> App {
        App {
            festivals,
            today,
            selection,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('p' | '<') | KeyCode::PageUp => self.act(Action::PreviousMonth),
                KeyCode::Char('n' | '>') | KeyCode::PageDown => self.act(Action::NextMonth),
                KeyCode::Char('t' | '0') | KeyCode::Home => self.act(Action::GoToToday),
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn act(&mut self, action: Action) -> bool {
        match self.selection.apply(action, self.today) {
            Ok(selection) => {
                let grid = selection.grid();
                log::debug!(
                    "{action:?}: showing {} to {}, selected {}",
                    grid.first(),
                    grid.last(),
                    selection.selected()
                );
                self.selection = selection;
                true
            }
            Err(e) => {
                log::debug!("{action:?} rejected: {e}");
                false
            }
        }
    }

    fn move_selection(&mut self, days: i64) -> bool {
        match self
            .selection
            .selected()
            .checked_add(time::Duration::days(days))
        {
            Some(date) => self.act(Action::SelectDay(date)),
            None => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let grid = self.selection.grid();
        let selected = self.selection.selected();
        let cal = Calendar::new(&grid, &self.festivals, self.today, selected);
        let [cal_area, details_area] =
            Layout::vertical([Constraint::Length(cal.height()), Constraint::Min(0)]).areas(area);
        cal.render(cal_area, buf);
        Details::new(&grid, &self.festivals, selected).render(details_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 16);

    fn app() -> App {
        let festivals = FestivalIndex::from_json(
            r#"[
                {"date": "2026-10-16", "name": "Sharad Purnima"},
                {"date": "2026-10-20", "name": "Dussehra"},
                {"date": "2026-11-08", "name": "Diwali", "image": "images/diwali.png"}
            ]"#,
        )
        .unwrap();
        App::new(festivals, TODAY, Selection::new(TODAY))
    }

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buf.cell((x, y)))
                    .map(ratatui::buffer::Cell::symbol)
                    .collect()
            })
            .collect()
    }

    fn render(app: &App) -> Buffer {
        let area = Rect::new(0, 0, 47, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_render() {
        let buffer = render(&app());
        assert_eq!(
            buffer_lines(&buffer),
            [
                "                 October 2026                  ",
                " Su     Mo     Tu     We     Th     Fr     Sa  ",
                "───────────────────────────────────────────────",
                " 27     28     29     30      1      2      3  ",
                "  4      5      6      7      8      9     10  ",
                " 11     12     13     14     15    [16]*   17  ",
                " 18     19     20 *   21     22     23     24  ",
                " 25     26     27     28     29     30     31  ",
                "───────────────────────────────────────────────",
                "Friday, October 16, 2026                       ",
                "Sharad Purnima                                 ",
                "                                               ",
                "Festivals in October 2026                      ",
                " 16  Sharad Purnima                            ",
                " 20  Dussehra                                  ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
                "                                               ",
            ]
        );
        let today = buffer.cell((36, 5)).unwrap();
        assert_eq!(today.bg, Color::Yellow);
        let plain = buffer.cell((8, 4)).unwrap();
        assert_eq!(plain.bg, Color::Black);
    }

    #[test]
    fn test_month_navigation_keeps_selection() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(app.selection.current_month(), date!(2026 - 11 - 16));
        assert_eq!(app.selection.selected(), TODAY);
        let lines = buffer_lines(&render(&app));
        assert_eq!(lines[0].trim(), "November 2026");
        assert_eq!(lines[9].trim(), "Friday, October 16, 2026");
        assert!(lines.iter().any(|ln| ln.trim() == "8  Diwali"));
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::Char('<')));
        assert_eq!(app.selection.current_month(), date!(2026 - 09 - 16));
    }

    #[test]
    fn test_go_to_today() {
        let mut app = app();
        for _ in 0..3 {
            assert!(app.handle_key(KeyCode::PageDown));
        }
        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.selection.current_month(), date!(2027 - 01 - 16));
        assert_eq!(app.selection.selected(), date!(2026 - 10 - 23));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.selection, Selection::new(TODAY));
    }

    #[test]
    fn test_move_selection() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.selection.selected(), date!(2026 - 10 - 17));
        assert!(app.handle_key(KeyCode::Char('k')));
        assert_eq!(app.selection.selected(), date!(2026 - 10 - 10));
        assert!(app.handle_key(KeyCode::Char('h')));
        assert_eq!(app.selection.selected(), date!(2026 - 10 - 09));
        for _ in 0..3 {
            assert!(app.handle_key(KeyCode::Char('j')));
        }
        // Selecting a day of the next month does not change the display
        assert_eq!(app.selection.selected(), date!(2026 - 10 - 30));
        assert!(app.handle_key(KeyCode::Char('j')));
        assert_eq!(app.selection.selected(), date!(2026 - 11 - 06));
        assert_eq!(app.selection.current_month(), TODAY);
    }

    #[test]
    fn test_invalid_key() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.selection, Selection::new(TODAY));
    }

    #[test]
    fn test_help() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        let lines = buffer_lines(&render(&app));
        assert!(lines.iter().any(|ln| ln.contains(" Commands ")));
        assert!(lines.iter().any(|ln| ln.contains("Jump to today")));
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.selection.current_month(), TODAY);
    }

    #[test]
    fn test_help_in_narrow_terminal() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('?')));
        // Narrower than the help text, so the popup fills the whole width
        let area = Rect::new(0, 0, 30, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        let lines = buffer_lines(&buffer);
        assert!(lines.iter().any(|ln| ln.contains("Commands")));
        assert!(lines.iter().all(|ln| ln.chars().count() == 30));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
    }

    #[test]
    fn test_end_of_time() {
        let mut app = App::new(FestivalIndex::default(), TODAY, Selection::new(Date::MAX));
        assert!(!app.handle_key(KeyCode::Char('n')));
        assert!(!app.handle_key(KeyCode::Right));
        assert_eq!(app.selection, Selection::new(Date::MAX));
    }
}
