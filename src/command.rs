use crate::flagset::FlagSet;
use crate::parser;
use crate::Error;

pub mod help;

/// A named, independently configured sub-parser with its own execution
/// behavior, dispatched by name from the first leftover token.
///
/// Implementors own their [`FlagSet`] exclusively; the parent's parsed flags
/// arrive as a borrow at execution time.
pub trait Subcommand {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn flag_set(&self) -> &FlagSet;

    fn flag_set_mut(&mut self) -> &mut FlagSet;

    /// Runs the subcommand. `parent` holds the root's parsed flags,
    /// `leftover` the tokens remaining after this subcommand's own flags
    /// were parsed.
    fn execute(&mut self, parent: &FlagSet, leftover: &[String]) -> Result<(), Error>;
}

/// Maps subcommand names to handlers. Registration order is preserved for
/// help rendering; lookup is exact-match and case-sensitive.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Subcommand>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subcommand. All registration happens at root-parser
    /// construction; the registry is read-only afterwards.
    pub fn register(&mut self, command: Box<dyn Subcommand>) -> Result<(), Error> {
        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(Error::DuplicateSubcommand(command.name().to_string()));
        }
        self.commands.push(command);
        Ok(())
    }

    /// Returns the subcommand with the given name
    pub fn resolve(&self, name: &str) -> Result<&dyn Subcommand, Error> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
            .ok_or_else(|| Error::UnknownSubcommand(name.to_string()))
    }

    fn resolve_mut(&mut self, name: &str) -> Result<&mut Box<dyn Subcommand>, Error> {
        self.commands
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownSubcommand(name.to_string()))
    }

    /// Returns the subcommands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Subcommand> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolves `leftover[0]` and runs the matching subcommand.
    ///
    /// The subcommand's own [`FlagSet`] parses `leftover[1..]` before
    /// `execute` runs with both the root's and its own values accessible.
    /// An empty `leftover` is a valid root-only invocation and returns
    /// immediately. Unknown names propagate to the caller.
    pub fn dispatch(&mut self, root: &FlagSet, leftover: &[String]) -> Result<(), Error> {
        let Some((name, rest)) = leftover.split_first() else {
            return Ok(());
        };

        let command = self.resolve_mut(name)?;
        let result = parser::parse(command.flag_set_mut(), rest.iter().cloned())?;
        command.execute(root, &result.leftover)
    }
}
