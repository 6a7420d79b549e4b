use super::Registry;
use crate::flagset::FlagSet;
use std::fmt::Write;

/// Renders the flag documentation for `flag_set`, one line per definition in
/// registration order
pub fn render(flag_set: &FlagSet) -> String {
    let mut out = String::new();

    for def in flag_set.definitions() {
        let _ = writeln!(
            out,
            "--{} ({}, default={}): {}",
            def.name(),
            def.kind(),
            def.default(),
            def.help()
        );
    }

    out
}

/// Renders the flag documentation followed by the registered subcommands
/// with their one-line descriptions, in registration order
pub fn render_with_subcommands(flag_set: &FlagSet, registry: &Registry) -> String {
    let mut out = render(flag_set);

    if registry.is_empty() {
        return out;
    }

    out.push_str("Subcommands:\n");
    for command in registry.iter() {
        let _ = writeln!(out, "  {}: {}", command.name(), command.description());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Subcommand;
    use crate::flagset::FlagValue;
    use crate::Error;

    struct Stub {
        name: &'static str,
        description: &'static str,
        flags: FlagSet,
    }

    impl Stub {
        fn new(name: &'static str, description: &'static str) -> Self {
            Stub {
                name,
                description,
                flags: FlagSet::new(),
            }
        }
    }

    impl Subcommand for Stub {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.description
        }

        fn flag_set(&self) -> &FlagSet {
            &self.flags
        }

        fn flag_set_mut(&mut self) -> &mut FlagSet {
            &mut self.flags
        }

        fn execute(&mut self, _parent: &FlagSet, _leftover: &[String]) -> Result<(), Error> {
            Ok(())
        }
    }

    fn sample_set() -> FlagSet {
        let mut fs = FlagSet::new();
        fs.define("verbose", FlagValue::Bool(false), "Enable verbose output")
            .unwrap();
        fs.define("count", FlagValue::Int(1), "How many times")
            .unwrap();
        fs
    }

    #[test]
    fn flag_listing() {
        let fs = sample_set();
        let text = render(&fs);

        assert_eq!(
            text,
            concat!(
                "--verbose (bool, default=false): Enable verbose output\n",
                "--count (int, default=1): How many times\n",
            )
        );
    }

    #[test]
    fn subcommand_listing_follows_flags_in_registration_order() {
        let fs = sample_set();
        let mut registry = Registry::new();
        registry
            .register(Box::new(Stub::new("options", "print resolved flags")))
            .unwrap();
        registry
            .register(Box::new(Stub::new("count", "count to ten")))
            .unwrap();

        let text = render_with_subcommands(&fs, &registry);
        assert_eq!(
            text,
            concat!(
                "--verbose (bool, default=false): Enable verbose output\n",
                "--count (int, default=1): How many times\n",
                "Subcommands:\n",
                "  options: print resolved flags\n",
                "  count: count to ten\n",
            )
        );
    }

    #[test]
    fn empty_registry_renders_flags_only() {
        let fs = sample_set();
        let registry = Registry::new();
        assert_eq!(render_with_subcommands(&fs, &registry), render(&fs));
    }

    #[test]
    fn rendering_is_pure() {
        let fs = sample_set();
        let mut registry = Registry::new();
        registry
            .register(Box::new(Stub::new("options", "print resolved flags")))
            .unwrap();

        let first = render_with_subcommands(&fs, &registry);
        let second = render_with_subcommands(&fs, &registry);
        assert_eq!(first, second);
    }
}
