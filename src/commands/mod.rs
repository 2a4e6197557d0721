//! Dice commands
//!
//! Four commands, one per scoring mode:
//! - `roll` - plain sums
//! - `rollfate` - Fate dice
//! - `rollww` - White Wolf success counting
//! - `rollscion` - Scion success counting

mod registry;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, info};

pub use registry::{Command, CommandHandler, CommandRegistry, CommandTable};

use crate::dice::ScoringMode;
use crate::error::DiceError;
use crate::parser::Roller;
use crate::render::Renderer;

/// The dice commands a host can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollCommand {
    Roll,
    Fate,
    WhiteWolf,
    Scion,
}

impl RollCommand {
    /// Every command, in registration order
    pub const ALL: [RollCommand; 4] = [
        RollCommand::Roll,
        RollCommand::WhiteWolf,
        RollCommand::Scion,
        RollCommand::Fate,
    ];

    /// Name the command is registered under
    pub fn name(self) -> &'static str {
        match self {
            RollCommand::Roll => "roll",
            RollCommand::Fate => "rollfate",
            RollCommand::WhiteWolf => "rollww",
            RollCommand::Scion => "rollscion",
        }
    }

    /// Help text
    pub fn description(self) -> &'static str {
        match self {
            RollCommand::Roll => "Roll some dice",
            RollCommand::Fate => "Roll dice for Fate",
            RollCommand::WhiteWolf => "Roll dice for White Wolf games",
            RollCommand::Scion => "Roll dice for Scion",
        }
    }

    /// Scoring mode the command rolls with
    pub fn mode(self) -> ScoringMode {
        match self {
            RollCommand::Roll => ScoringMode::Sum,
            RollCommand::Fate => ScoringMode::Fate,
            RollCommand::WhiteWolf => ScoringMode::WhiteWolf,
            RollCommand::Scion => ScoringMode::Scion,
        }
    }
}

impl FromStr for RollCommand {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('!').to_lowercase();
        RollCommand::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| DiceError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for RollCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rolls dice for commands and renders the replies
#[derive(Clone)]
pub struct DicePlugin {
    roller: Arc<Roller>,
    renderer: Renderer,
}

impl DicePlugin {
    /// Create a plugin from a roller and a renderer
    pub fn new(roller: Roller, renderer: Renderer) -> Self {
        Self {
            roller: Arc::new(roller),
            renderer,
        }
    }

    /// The roller used for every command
    pub fn roller(&self) -> &Roller {
        &self.roller
    }

    /// Handle one invocation and produce the reply.
    ///
    /// Parse failures are returned to the host unchanged.
    pub async fn handle(&self, command: RollCommand, invocation: &Command) -> Result<String, DiceError> {
        let notation = invocation.notation();
        debug!("{} {:?}", command, notation);

        let result = self.roller.parse(notation, command.mode()).await?;
        Ok(self.renderer.render(&result))
    }

    /// Register all dice commands with the host
    pub fn activate(&self, registry: &mut impl CommandRegistry) {
        for command in RollCommand::ALL {
            let plugin = self.clone();
            let handler: CommandHandler = Arc::new(move |invocation: Command| {
                let plugin = plugin.clone();
                async move { plugin.handle(command, &invocation).await }.boxed()
            });
            registry.register(command.name(), command.description(), handler);
        }
        info!("registered {} dice commands", RollCommand::ALL.len());
    }
}
