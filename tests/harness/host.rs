//! TestHost - a chat host stand-in with predictable dice

use std::sync::Arc;

use logidice::{
    Command, CommandTable, DiceError, DicePlugin, DisplayCapabilities, Renderer, Roller,
    ScriptedDice, TextFormatter,
};

/// Wraps emphasis in single stars so replies are easy to assert on
pub struct Stars;

impl TextFormatter for Stars {
    fn emphasize(&self, text: &str) -> String {
        format!("*{}*", text)
    }

    fn collapsible(&self, detail: &str, summary: &str) -> String {
        format!("{} : {}", summary, detail)
    }
}

/// Host with all dice commands registered
pub struct TestHost {
    table: CommandTable,
    dice: Arc<ScriptedDice>,
}

impl TestHost {
    /// Single-line host whose dice show `faces` in order
    pub fn start(faces: impl IntoIterator<Item = u32>) -> Self {
        Self::with_capabilities(faces, DisplayCapabilities::default())
    }

    /// Host with the given display capabilities
    pub fn with_capabilities(
        faces: impl IntoIterator<Item = u32>,
        capabilities: DisplayCapabilities,
    ) -> Self {
        let dice = Arc::new(ScriptedDice::sequence(faces));
        let formatter: Arc<dyn TextFormatter> = Arc::new(Stars);

        let roller = Roller::new(formatter.clone()).with_source(dice.clone());
        let plugin = DicePlugin::new(roller, Renderer::new(formatter, capabilities));

        let mut table = CommandTable::new();
        plugin.activate(&mut table);

        Self { table, dice }
    }

    /// Invoke `command` with `notation` as its argument
    pub async fn roll(&self, command: &str, notation: &str) -> Result<String, DiceError> {
        self.table.dispatch(command, Command::new(notation)).await
    }

    /// Invoke `command` with no argument at all
    pub async fn roll_bare(&self, command: &str) -> Result<String, DiceError> {
        self.table.dispatch(command, Command::default()).await
    }

    /// Scripted faces not yet drawn
    pub fn remaining(&self) -> usize {
        self.dice.remaining()
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }
}
