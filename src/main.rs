use std::io::{self, Read};

use clap::{Parser, Subcommand};
use lipyantara::{detect, transliterate, Options, Transliterator};

#[derive(Parser)]
#[command(name = "lipyantara", about = "Transliterate Sanskrit between scripts and Roman encodings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text from one scheme to another.
    Transliterate {
        /// Source scheme name, or omit to auto-detect.
        #[arg(long, default_value = "")]
        from: String,
        /// Target scheme name.
        #[arg(long)]
        to: String,
        /// Suppress the trailing virama on a bare word-final consonant.
        #[arg(long)]
        syncope: bool,
        /// Pass `<...>` spans through unchanged.
        #[arg(long)]
        skip_sgml: bool,
        /// Text to transliterate; reads stdin if omitted.
        text: Option<String>,
    },
    /// Detect the scheme of the given text.
    Detect {
        /// Text to inspect; reads stdin if omitted.
        text: Option<String>,
    },
    /// List every registered scheme name.
    Schemes,
}

fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches('\n').to_string())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Transliterate { from, to, syncope, skip_sgml, text } => {
            let input = read_text(text)?;
            let options = Options { syncope, skip_sgml, ..Default::default() };
            let output = transliterate(&input, &from, &to, &options)?;
            println!("{output}");
        }
        Command::Detect { text } => {
            let input = read_text(text)?;
            println!("{}", detect(&input));
        }
        Command::Schemes => {
            let t = Transliterator::new();
            for name in t.scheme_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
