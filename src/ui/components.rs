use console::Term;
use std::io::{self, Write};
use crate::core::GameState;
use crate::ui::ThemeManager;

const INDENT: &str = "    ";

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    text_width: usize,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, text_width: usize) -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            theme_manager,
            text_width,
        })
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");
        writeln!(io::stdout(), "{}", styled_title)?;
        self.show_separator()
    }

    pub fn show_kill_ring(&self, game_state: &GameState) -> io::Result<()> {
        writeln!(io::stdout(), "Current kill ring:")?;
        self.show_lines(&game_state.kill_ring_lines(), "ring")
    }

    pub fn show_graveyard(&self, game_state: &GameState) -> io::Result<()> {
        writeln!(io::stdout(), "Current graveyard:")?;
        self.show_lines(&game_state.graveyard_lines(), "graveyard")
    }

    pub fn show_winner(&self, winner: &str) -> io::Result<()> {
        self.show_message(&format!("Game was won by {}", winner), "winner")
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(error, "error")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(message, "success")
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(message, "warning")
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let styled = self.theme_manager.apply_style(&self.separator(), "separator");
        writeln!(io::stdout(), "{}", styled)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }

    fn show_lines(&self, lines: &[String], style: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        for line in self.styled_lines(lines, style) {
            writeln!(stdout, "{}", line)?;
        }
        Ok(())
    }

    // Indentation stays outside the styled span so plain output matches the game's print format.
    fn styled_lines(&self, lines: &[String], style: &str) -> Vec<String> {
        lines
            .iter()
            .map(|line| format!("{}{}", INDENT, self.theme_manager.apply_style(line, style)))
            .collect()
    }

    fn separator(&self) -> String {
        "─".repeat(self.text_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_display() -> Display {
        let mut theme_manager = ThemeManager::new();
        theme_manager.set_theme("plain");
        Display::new(theme_manager, 40).unwrap()
    }

    #[test]
    fn test_display_creation() {
        let theme_manager = ThemeManager::new();
        let display = Display::new(theme_manager, 80);
        assert!(display.is_ok());
    }

    #[test]
    fn test_styled_lines_are_indented() {
        let display = plain_display();
        let mut game_state = GameState::new(["Ann", "Bo", "Cid"]).unwrap();
        game_state.kill("Bo").unwrap();

        assert_eq!(
            display.styled_lines(&game_state.kill_ring_lines(), "ring"),
            vec!["    Ann is stalking Cid", "    Cid is stalking Ann"]
        );
        assert_eq!(
            display.styled_lines(&game_state.graveyard_lines(), "graveyard"),
            vec!["    Bo was killed by Ann"]
        );
    }

    #[test]
    fn test_clear_and_error_output() {
        let display = plain_display();

        assert!(display.clear_screen().is_ok());
        assert!(display.show_error("Could not record that kill").is_ok());
    }

    #[test]
    fn test_separator_width() {
        let display = plain_display();
        assert_eq!(display.separator().chars().count(), 40);
    }

    #[test]
    fn test_available_themes() {
        let mut display = plain_display();
        assert!(display.available_themes().contains(&"dark".to_string()));
        assert!(display.set_theme("dark"));
        assert!(!display.set_theme("missing"));
    }
}
