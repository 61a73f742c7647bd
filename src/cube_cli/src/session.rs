use cube_core::{Color, Cube, Move};
use log::{debug, info};

use crate::{
    config::{Config, KeyBindings, UnboundKey},
    render::{Style, render},
};

/// What a line of interactive input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Vec<Move>),
    Reset,
    Quit,
}

/// An interactive cube driven by key presses
pub struct Session {
    cube: Cube,
    bindings: KeyBindings,
}

impl Session {
    #[must_use]
    pub fn new(config: &Config) -> Session {
        Session {
            cube: Cube::with_placement(Color::CANONICAL, config.placement()),
            bindings: config.keys.clone(),
        }
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Handle one line of input. `reset` and `quit` are commands, anything
    /// else is a string of keys which is applied only if every key is bound.
    ///
    /// # Errors
    ///
    /// If a key has no binding, in which case the cube is unchanged
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, UnboundKey> {
        match line.trim() {
            "quit" | "exit" => Ok(Outcome::Quit),
            "reset" => {
                info!("Resetting the cube");
                self.cube.reset();
                Ok(Outcome::Reset)
            }
            keys => {
                let moves = self.bindings.translate(keys)?;

                debug!("Keys {keys:?} map to {} moves", moves.len());
                self.cube.apply_all(moves.iter().copied());

                Ok(Outcome::Applied(moves))
            }
        }
    }

    #[must_use]
    pub fn render(&self, style: Style) -> String {
        render(&self.cube, style)
    }
}
