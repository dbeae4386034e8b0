// Dskey CLI
// Converts text to double-struck letters and digits

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use dskey_core::settings::{default_settings_content, Settings};
use dskey_core::transform::{codepoint_label, Transform};
use dskey_core::{Keyboard, TextBuffer};

/// Double-struck text converter
#[derive(Parser, Debug)]
#[command(name = "dskey")]
#[command(version)]
#[command(about = "Convert ASCII letters and digits to double-struck Unicode", long_about = None)]
struct Args {
    /// Text to convert (reads stdin line by line when omitted)
    text: Vec<String>,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Map by grapheme cluster, leaving accented letters unchanged
    #[arg(short, long)]
    graphemes: bool,

    /// Print one "char<TAB>U+XXXX" line per output character
    #[arg(long)]
    codepoints: bool,

    /// Press on-screen keys instead, e.g. "shift h i space 123 1"
    #[arg(short, long, value_name = "KEYS")]
    keys: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Print a default settings file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

/// Command-line flags override settings
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if args.graphemes {
        settings.set_graphemes(true);
    }
    if args.codepoints {
        settings.set_codepoints(true);
    }
}

fn emit<W: Write>(out: &mut W, text: &str, codepoints: bool) -> io::Result<()> {
    if !codepoints {
        return writeln!(out, "{}", text);
    }
    for ch in text.chars() {
        if ch.is_control() {
            writeln!(out, "{}\t{}", ch.escape_debug(), codepoint_label(ch))?;
        } else {
            writeln!(out, "{}\t{}", ch, codepoint_label(ch))?;
        }
    }
    Ok(())
}

fn run_keys(settings: &Settings, keys: &str) -> Result<String> {
    let mut keyboard = Keyboard::with_transform(settings.keyboard_context(), settings.transform());
    let mut doc = TextBuffer::new();
    keyboard
        .press_all(keys, &mut doc)
        .context("key sequence rejected")?;
    Ok(doc.into_string())
}

fn run(args: Args) -> Result<()> {
    if args.print_default_config {
        print!("{}", default_settings_content());
        return Ok(());
    }

    let mut settings = load_settings(args.config.as_deref())?;
    if args.check_config {
        println!("Configuration is valid");
        return Ok(());
    }
    apply_overrides(&mut settings, &args);
    log::debug!("settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(keys) = args.keys.as_deref() {
        let text = run_keys(&settings, keys)?;
        emit(&mut out, &text, settings.codepoints())?;
        return Ok(());
    }

    let transform = settings.transform();
    if !args.text.is_empty() {
        let text = transform.apply(&args.text.join(" "));
        emit(&mut out, &text, settings.codepoints())?;
        return Ok(());
    }

    log::debug!("reading stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        emit(&mut out, &transform.apply(&line), settings.codepoints())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["dskey", "Hello", "World"]);

        assert_eq!(args.text, vec!["Hello", "World"]);
        assert!(args.config.is_none());
        assert!(!args.graphemes);
        assert!(!args.codepoints);
        assert!(args.keys.is_none());
        assert!(!args.verbose);
        assert!(!args.check_config);
        assert!(!args.print_default_config);
    }

    #[test]
    fn test_args_with_options() {
        let args = Args::parse_from([
            "dskey",
            "--config",
            "/tmp/settings.toml",
            "--verbose",
            "--graphemes",
            "--codepoints",
            "--keys",
            "shift a",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("/tmp/settings.toml")));
        assert!(args.verbose);
        assert!(args.graphemes);
        assert!(args.codepoints);
        assert_eq!(args.keys.as_deref(), Some("shift a"));
        assert!(args.text.is_empty());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["dskey", "-g", "x"]);
        let mut settings = Settings::new();
        apply_overrides(&mut settings, &args);
        assert!(settings.graphemes());
        assert!(!settings.codepoints());
    }

    #[test]
    fn test_emit_plain() {
        let mut out = Vec::new();
        emit(&mut out, "𝔸𝟙", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "𝔸𝟙\n");
    }

    #[test]
    fn test_emit_codepoints() {
        let mut out = Vec::new();
        emit(&mut out, "ℤ\n", true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ℤ\tU+2124\n\\n\tU+000A\n");
    }

    #[test]
    fn test_run_keys() {
        let text = run_keys(&Settings::new(), "shift d s space 123 4 2").unwrap();
        assert_eq!(text, "𝔻𝕤 𝟜𝟚");
    }

    #[test]
    fn test_run_keys_rejects_unknown() {
        assert!(run_keys(&Settings::new(), "a hyper").is_err());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[output]\ncodepoints = true\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert!(settings.codepoints());

        std::fs::write(&path, "[keyboard]\ndouble_tap_ms = 0\n").unwrap();
        assert!(load_settings(Some(&path)).is_err());
    }
}
