use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use vyra_color::{
    DEFAULT_SHADE_COUNT, Gradient, canonical_hex, generate_shade_series, hex_to_rgb, rgb_to_hsl, upper_hex,
};
use vyra_types::{Rgb, RgbF64, ThemeName};
use vyra_util::{
    AddOutcome, JsonSessionStorage, Notifier, PaletteStore, SessionStorage, SystemClipboard, ThemePreference, ToastKind,
    copy_with_notice, open_session_or_ephemeral,
};

mod render;

use render::{TerminalPaletteRenderer, color_line, shade_line, toast_line};

const SERVING_SELECTION_HINT: &str = "Holding the clipboard until another application copies (Ctrl-C to stop)";

#[derive(Debug, Parser)]
#[command(name = "vyra", version, about = "Color picker, shades and gradient toolkit with a session palette")]
struct Cli {
    /// Session file (defaults to $VYRA_SESSION_PATH or the user cache directory)
    #[arg(long, global = true, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Print plain text without truecolor swatches
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a color as HEX, RGB and HSL
    Convert {
        /// `#rrggbb`, `#rgb`, `r,g,b` or `rgb(r, g, b)`
        color: String,
        /// Copy one representation to the clipboard
        #[arg(long, value_enum)]
        copy: Option<CopyFormat>,
    },
    /// Generate a lightness series from black to white
    Shades {
        base: String,
        #[arg(long, default_value_t = DEFAULT_SHADE_COUNT)]
        count: usize,
        /// Add the shade at this 1-based position to the palette
        #[arg(long, value_name = "POSITION")]
        add: Option<usize>,
        /// Emit the series as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a two-color CSS linear gradient
    Gradient {
        start: String,
        end: String,
        #[arg(long, default_value = "to top")]
        direction: String,
        /// Add both endpoint colors to the palette
        #[arg(long)]
        add_both: bool,
        /// Copy the CSS declaration to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Manage the session palette
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Show or change the session theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Inspect or end the current session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Debug, Subcommand)]
enum PaletteAction {
    List,
    Add { hex: String },
    Remove { hex: String },
    Clear,
    /// Copy a color as HEX (default) or RGB
    Copy {
        hex: String,
        #[arg(long)]
        rgb: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
    Set { theme: ThemeName },
}

#[derive(Debug, Subcommand)]
enum SessionAction {
    /// Print the session file location
    Path,
    /// Discard the palette and theme
    End,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CopyFormat {
    Hex,
    Rgb,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let color = !cli.no_color;
    let mut notifier = Notifier::default();

    match cli.command {
        Command::Convert { color: input, copy } => run_convert(&input, copy, color, &mut notifier)?,
        Command::Shades {
            base,
            count,
            add,
            json,
        } => run_shades(&cli.session, &base, count, add, json, color, &mut notifier)?,
        Command::Gradient {
            start,
            end,
            direction,
            add_both,
            copy,
        } => run_gradient(&cli.session, &start, &end, &direction, add_both, copy, color, &mut notifier)?,
        Command::Palette { action } => run_palette(&cli.session, action, color, &mut notifier)?,
        Command::Theme { action } => run_theme(&cli.session, action.unwrap_or(ThemeAction::Show)),
        Command::Session { action } => run_session(cli.session, action)?,
    }

    if let Some(toast) = notifier.visible() {
        println!("{}", toast_line(toast, color));
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_storage(session: &Option<PathBuf>) -> Arc<dyn SessionStorage> {
    open_session_or_ephemeral(session.clone())
}

/// Load the palette first, then attach the renderer so only the mutation is drawn.
fn open_palette(session: &Option<PathBuf>, color: bool) -> PaletteStore {
    let mut store = PaletteStore::new(open_storage(session));
    store.load();
    store.with_renderer(TerminalPaletteRenderer { color })
}

fn add_to_palette(store: &mut PaletteStore, hex: &str, notifier: &mut Notifier) -> Result<AddOutcome> {
    let outcome = store.add(hex).with_context(|| format!("cannot add '{hex}' to the palette"))?;
    let canonical = canonical_hex(hex)?;
    let kind = match outcome {
        AddOutcome::Added => ToastKind::Success,
        AddOutcome::AlreadyPresent => ToastKind::Info,
    };
    notifier.show(outcome.message(&canonical), kind);
    warn_if_memory_only(store, notifier);
    Ok(outcome)
}

fn warn_if_memory_only(store: &PaletteStore, notifier: &mut Notifier) {
    if !store.is_persistent() {
        notifier.show("Session storage unavailable; palette kept in memory only", ToastKind::Failure);
    }
}

fn run_convert(input: &str, copy: Option<CopyFormat>, color: bool, notifier: &mut Notifier) -> Result<()> {
    let rgb = parse_color_input(input)?;
    let hex = upper_hex(rgb);
    println!("{}", color_line(&hex, rgb, color));
    println!("{}", rgb_to_hsl(rgb));

    match copy {
        Some(CopyFormat::Hex) => copy_or_notice(notifier, &hex, &format!("Copied HEX: {hex}")),
        Some(CopyFormat::Rgb) => {
            let rgb_string = rgb.to_string();
            copy_or_notice(notifier, &rgb_string, &format!("Copied RGB: {rgb_string}"));
        }
        None => {}
    }
    Ok(())
}

fn run_shades(
    session: &Option<PathBuf>,
    base: &str,
    count: usize,
    add: Option<usize>,
    json: bool,
    color: bool,
    notifier: &mut Notifier,
) -> Result<()> {
    let shades = generate_shade_series(base, count).context("cannot generate shades")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shades)?);
    } else {
        for shade in &shades {
            println!("{}", shade_line(shade, color));
        }
        notifier.show("Shades generated successfully!", ToastKind::Success);
    }

    if let Some(position) = add {
        let Some(shade) = position.checked_sub(1).and_then(|index| shades.get(index)) else {
            bail!("shade position {position} is out of range 1..={}", shades.len());
        };
        let mut store = open_palette(session, color);
        add_to_palette(&mut store, &shade.hex, notifier)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_gradient(
    session: &Option<PathBuf>,
    start: &str,
    end: &str,
    direction: &str,
    add_both: bool,
    copy: bool,
    color: bool,
    notifier: &mut Notifier,
) -> Result<()> {
    let gradient = Gradient::parse(direction, start, end).context("cannot build gradient")?;
    let declaration = gradient.declaration();
    println!("{declaration}");
    notifier.show("Gradient generated!", ToastKind::Success);

    if add_both {
        let mut store = open_palette(session, color);
        for hex in gradient.endpoints() {
            store.add(hex)?;
        }
        notifier.show(
            format!("Added {} and {} to palette", gradient.start, gradient.end),
            ToastKind::Success,
        );
        warn_if_memory_only(&store, notifier);
    }

    if copy {
        copy_or_notice(notifier, &declaration, &format!("Copied CSS: {declaration}"));
    }
    Ok(())
}

fn run_palette(session: &Option<PathBuf>, action: PaletteAction, color: bool, notifier: &mut Notifier) -> Result<()> {
    match action {
        PaletteAction::List => {
            let mut store = PaletteStore::new(open_storage(session)).with_renderer(TerminalPaletteRenderer { color });
            store.load();
        }
        PaletteAction::Add { hex } => {
            let mut store = open_palette(session, color);
            add_to_palette(&mut store, &hex, notifier)?;
        }
        PaletteAction::Remove { hex } => {
            let canonical = canonical_hex(&hex).with_context(|| format!("cannot remove '{hex}'"))?;
            let mut store = open_palette(session, color);
            if !store.contains(&canonical) {
                notifier.show(format!("{canonical} is not in the palette"), ToastKind::Info);
            }
            store.remove(&canonical);
            warn_if_memory_only(&store, notifier);
        }
        PaletteAction::Clear => {
            let mut store = open_palette(session, color);
            store.clear();
            warn_if_memory_only(&store, notifier);
        }
        PaletteAction::Copy { hex, rgb } => {
            let canonical = canonical_hex(&hex)?;
            if rgb {
                let rgb_string = hex_to_rgb(&canonical)?.to_string();
                copy_or_notice(notifier, &rgb_string, &format!("Copied RGB: {rgb_string}"));
            } else {
                copy_or_notice(notifier, &canonical, &format!("Copied HEX: {canonical}"));
            }
        }
    }
    Ok(())
}

fn run_theme(session: &Option<PathBuf>, action: ThemeAction) {
    let preference = ThemePreference::new(open_storage(session));
    let theme = match action {
        ThemeAction::Show => preference.current(),
        ThemeAction::Toggle => preference.toggle(),
        ThemeAction::Set { theme } => {
            if let Err(error) = preference.set(theme) {
                tracing::warn!(error = %error, "Failed to persist theme");
            }
            theme
        }
    };
    println!("{theme}");
}

fn run_session(session: Option<PathBuf>, action: SessionAction) -> Result<()> {
    let storage = JsonSessionStorage::new(session).context("cannot open session storage")?;
    match action {
        SessionAction::Path => println!("{}", storage.path().display()),
        SessionAction::End => {
            storage.end_session().context("cannot end session")?;
            println!("Session ended");
        }
    }
    Ok(())
}

/// Clipboard failures are reported as a toast, never as a command error.
///
/// Where the process owns the selection this blocks until another
/// application copies, so the hint goes to stderr first.
fn copy_or_notice(notifier: &mut Notifier, text: &str, message: &str) {
    if SystemClipboard::serves_selection() {
        eprintln!("{SERVING_SELECTION_HINT}");
    }
    let _ = copy_with_notice(&mut SystemClipboard, notifier, text, Some(message));
}

/// Parse `#hex`, `r,g,b` or `rgb(r, g, b)` into integer channels.
///
/// Numeric channels are rounded and clamped into `0..=255`.
fn parse_color_input(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let channels = trimmed
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    if !channels.contains(',') {
        return Ok(hex_to_rgb(trimmed)?);
    }

    let values = channels
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid channel '{}' in '{input}'", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    match values.as_slice() {
        [r, g, b] => Ok(RgbF64::new(*r, *g, *b).round()),
        _ => bail!("expected three channels in '{input}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hex_and_channel_inputs() {
        assert_eq!(parse_color_input("#7B61FF").unwrap(), Rgb::new(123, 97, 255));
        assert_eq!(parse_color_input("123, 97,255").unwrap(), Rgb::new(123, 97, 255));
        assert_eq!(parse_color_input("rgb(300, -1, 12.6)").unwrap(), Rgb::new(255, 0, 13));
    }

    #[test]
    fn rejects_malformed_color_input() {
        assert!(parse_color_input("1,2").is_err());
        assert!(parse_color_input("1,2,x").is_err());
        assert!(parse_color_input("#12345").is_err());
    }

    #[test]
    fn theme_subcommand_parses_theme_names() {
        let cli = Cli::try_parse_from(["vyra", "theme", "set", "light"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: Some(ThemeAction::Set { theme: ThemeName::Light })
            }
        ));
    }
}
