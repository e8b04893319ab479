use kernel::kconfig::GameConfig;
use kernel::session::{GameSession, Summary};
use log::warn;
use system::console::{Console, ConsoleError};
use system::feedback;

pub fn main(config: &GameConfig, console: &mut dyn Console) -> Result<Summary, ConsoleError> {
    console.write_line(feedback::WELCOME)?;
    let mut session = GameSession::new(config);
    play(&mut session, console)?;
    Ok(session.summary())
}

/// Prompts until the session is won or the player cancels.
pub fn play(session: &mut GameSession, console: &mut dyn Console) -> Result<(), ConsoleError> {
    let prompt = feedback::prompt_text(session.range());

    while !session.is_over() {
        console.write_line(&prompt)?;

        let line = match console.read_line()? {
            Some(line) if !line.is_empty() => line,
            _ => {
                console.write_line(&session.cancel().to_string())?;
                continue;
            }
        };

        match session.submit(&line) {
            Ok(feedback) => console.write_line(&feedback.to_string())?,
            Err(err) => warn!("entry ignored: {}", err),
        }
    }

    Ok(())
}
