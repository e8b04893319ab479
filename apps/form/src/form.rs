use crate::key::KeyEvent;
use kernel::kconfig::GameConfig;
use kernel::session::{GameSession, Summary};
use log::{debug, trace};
use system::console::{Console, ConsoleError};
use system::feedback::{self, Feedback};

/// Input field, submit button and result label over one session.
pub struct GuessForm {
    session: GameSession,
    input: String,
    result: Option<Feedback>,
    submit_enabled: bool,
}

impl GuessForm {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input: String::new(),
            result: None,
            submit_enabled: true,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<Feedback> {
        self.result
    }

    pub fn result_label(&self) -> String {
        self.result.map(|f| f.to_string()).unwrap_or_default()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Empties the field, as after a compared guess.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Applies one key. Returns the new result when Enter triggered a submit.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Feedback> {
        trace!("{}", event);
        match event {
            KeyEvent::Char(c) => {
                self.input.push(c);
                None
            }
            KeyEvent::Backspace => {
                self.input.pop();
                None
            }
            KeyEvent::Enter => self.submit(),
        }
    }

    /// Evaluates the field. Does nothing once the button is disabled.
    pub fn submit(&mut self) -> Option<Feedback> {
        if !self.submit_enabled {
            debug!("submit ignored: button disabled");
            return None;
        }

        let feedback = match self.session.submit(&self.input) {
            Ok(feedback) => feedback,
            Err(err) => {
                debug!("submit rejected: {}", err);
                return None;
            }
        };

        if feedback.is_comparison() {
            self.clear_input();
        }
        if self.session.is_over() {
            self.submit_enabled = false;
        }
        self.result = Some(feedback);
        Some(feedback)
    }
}

/// Types each console line into an empty field and presses Enter after it.
pub fn main(config: &GameConfig, console: &mut dyn Console) -> Result<Summary, ConsoleError> {
    let mut form = GuessForm::new(GameSession::new(config));
    console.write_line(&feedback::prompt_text(form.session().range()))?;

    while form.submit_enabled() {
        let Some(line) = console.read_line()? else {
            break;
        };
        form.clear_input();
        for event in line.chars().filter_map(KeyEvent::from_char) {
            form.handle_key(event);
        }
        if form.handle_key(KeyEvent::Enter).is_some() {
            console.write_line(&form.result_label())?;
        }
    }

    Ok(form.session().summary())
}
