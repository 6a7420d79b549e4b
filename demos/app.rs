use optset::{help, parse, Error, FlagSet, FlagValue, Registry, Subcommand};

/// Prints the root's and its own resolved flag values.
struct OptionsCommand {
    flags: FlagSet,
}

impl OptionsCommand {
    fn new() -> Result<Self, Error> {
        let mut flags = FlagSet::new();
        flags.define("count", FlagValue::Int(1), "How many times to print")?;
        Ok(OptionsCommand { flags })
    }
}

impl Subcommand for OptionsCommand {
    fn name(&self) -> &str {
        "options"
    }

    fn description(&self) -> &str {
        "print the resolved root and subcommand flag values"
    }

    fn flag_set(&self) -> &FlagSet {
        &self.flags
    }

    fn flag_set_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    fn execute(&mut self, parent: &FlagSet, _leftover: &[String]) -> Result<(), Error> {
        for (name, value) in parent.as_mapping() {
            println!("root --{name} = {value}");
        }
        for (name, value) in self.flags.as_mapping() {
            println!("options --{name} = {value}");
        }
        Ok(())
    }
}

/// Counts from one to ten. Its field carries the registered name because the
/// obvious default ("count") is also the name of its sibling's flag.
struct CountCommand {
    name: String,
    flags: FlagSet,
}

impl CountCommand {
    fn new(name: &str) -> Self {
        CountCommand {
            name: name.to_string(),
            flags: FlagSet::new(),
        }
    }
}

impl Subcommand for CountCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "count from one to ten"
    }

    fn flag_set(&self) -> &FlagSet {
        &self.flags
    }

    fn flag_set_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    fn execute(&mut self, parent: &FlagSet, _leftover: &[String]) -> Result<(), Error> {
        let verbose = parent.get("verbose")?.as_bool().unwrap_or(false);
        for i in 1..=10 {
            if verbose {
                println!("counting: {i}");
            } else {
                println!("{i}");
            }
        }
        Ok(())
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut root = FlagSet::new();
    root.define("verbose", FlagValue::Bool(false), "Enable verbose output")?;

    let mut registry = Registry::new();
    registry.register(Box::new(OptionsCommand::new()?))?;
    registry.register(Box::new(CountCommand::new("count")))?;

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", help::render_with_subcommands(&root, &registry));
        return Ok(());
    }

    let result = parse(&mut root, args)?;

    if result.leftover.is_empty() {
        for (name, value) in result.values {
            println!("--{name} = {value}");
        }
        println!("leftover: {:?}", result.leftover);
        return Ok(());
    }

    registry.dispatch(&root, &result.leftover)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
