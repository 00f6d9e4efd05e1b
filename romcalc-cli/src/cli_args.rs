use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Expressions to evaluate, e.g. "3+4" or "III*II". If omitted,
    /// expressions are read from stdin, one per line.
    pub expressions: Vec<String>,

    /// Keep evaluating after an error when reading from a pipe.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable debug logging (RUST_LOG overrides this).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored error output.
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    pub fn has_expressions(&self) -> bool {
        !self.expressions.is_empty()
    }

    pub fn configure_colors(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::CliArgs;

    #[test]
    fn no_arguments_reads_stdin() {
        let args = CliArgs::parse_from(["romcalc"]);
        assert!(!args.has_expressions());
        assert!(!args.keep_going);
        assert!(!args.verbose);
        assert!(!args.no_color);
    }

    #[test]
    fn positional_expressions_work() {
        let args = CliArgs::parse_from(["romcalc", "3+4", "III*II"]);
        assert!(args.has_expressions());
        assert_eq!(args.expressions, vec!["3+4", "III*II"]);
    }

    #[test]
    fn flags_work() {
        let args = CliArgs::parse_from(["romcalc", "-k", "-v", "--no-color"]);
        assert!(args.keep_going);
        assert!(args.verbose);
        assert!(args.no_color);

        let args = CliArgs::parse_from(["romcalc", "--keep-going", "--verbose"]);
        assert!(args.keep_going);
        assert!(args.verbose);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
