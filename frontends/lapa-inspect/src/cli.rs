use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Default, Debug)]
#[clap(author, about, version)]
pub struct Cli {
    /// What to split the text into.
    #[clap(value_enum, default_value_t = Mode::Graphemes)]
    pub mode: Mode,

    /// File to read, standard input when missing.
    #[clap(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Width of East Asian ambiguous characters, overrides the config.
    #[clap(long, value_name = "1|2", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub ambiguous_width: Option<u8>,

    /// Writes the logs to the given file.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<String>,
}

#[derive(ValueEnum, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Grapheme clusters with their width and the boundaries after them.
    #[default]
    Graphemes,
    Words,
    Sentences,
    /// Line segments, marking mandatory breaks.
    Lines,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_graphemes_on_stdin() {
        let cli = Cli::try_parse_from(["lapa-inspect"]).unwrap();
        assert_eq!(cli.mode, Mode::Graphemes);
        assert_eq!(cli.file, None);
        assert_eq!(cli.ambiguous_width, None);
    }

    #[test]
    fn mode_and_file() {
        let cli = Cli::try_parse_from([
            "lapa-inspect",
            "lines",
            "notes.txt",
            "--ambiguous-width",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.mode, Mode::Lines);
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.ambiguous_width, Some(2));
    }

    #[test]
    fn rejects_other_widths() {
        assert!(Cli::try_parse_from(["lapa-inspect", "--ambiguous-width", "3"]).is_err());
    }
}
