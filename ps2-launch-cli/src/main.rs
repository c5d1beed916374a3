//! ps2-launch CLI
//!
//! Command-line frontend for the PS2 disc launcher engine: scan a ROM
//! directory, inspect titles, manage per-game configuration overrides, and
//! wire a gamepad into PCSX2.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ps2_launch_core::{EmuConfig, Region};
use ps2_launch_lib::{
    ConfigResolver, GilrsBackend, KeyboardMap, LauncherSettings, PadBackend, PadEvent, PadMonitor,
    TitleDb, apply_pad_profile, default_ini_path, scan,
};

#[derive(Parser)]
#[command(name = "ps2-launch")]
#[command(about = "Scan PS2 disc images and configure PCSX2", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory for PS2 disc images
    Scan {
        /// Directory to scan (defaults to the configured ROM directory)
        dir: Option<PathBuf>,
    },

    /// Show database metadata and effective configuration for a title
    Info {
        /// Title identifier (e.g. SLUS_210.05, spelling variants accepted)
        id: String,
    },

    /// Manage per-title configuration overrides
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List connected gamepads
    Pads,

    /// Watch for gamepad connect/disconnect events
    Watch {
        /// Stop after this many seconds (default: run until Ctrl+C)
        #[arg(long)]
        seconds: Option<u64>,
    },

    /// Bind a gamepad as DualShock 2 in PCSX2.ini
    ApplyPad {
        /// Path to PCSX2.ini (default: probe standard locations)
        #[arg(long)]
        ini: Option<PathBuf>,

        /// Device index of the pad to bind (default: first connected)
        #[arg(long)]
        pad: Option<usize>,
    },

    /// Manage the keyboard fallback mapping
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },

    /// Show or change launcher settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration for a title
    Show {
        /// Title identifier
        id: String,
    },

    /// Set one configuration field as an override for a title
    Set {
        /// Title identifier (stored exactly as given)
        id: String,
        /// Field name (renderer, resolution, anisotropic, texture-filtering,
        /// vsync, frame-limit, ee-cycle-rate, ee-cycle-skip,
        /// vu-cycle-stealing, mtvu, speedhacks, game-fixes)
        field: String,
        /// New value (game-fixes takes a comma-separated list)
        value: String,
    },

    /// Remove the override for a title
    Reset {
        /// Title identifier
        id: String,
    },
}

#[derive(Subcommand)]
enum KeysAction {
    /// List all keyboard bindings
    Show,

    /// Bind a control to a key
    Set {
        /// Control name (e.g. cross, l1, left_analog_up)
        control: String,
        /// Key name (e.g. K, Space, Return)
        key: String,
    },

    /// Restore the default bindings
    Reset,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show current settings
    Show,

    /// Change settings (only the given flags are touched)
    Set {
        /// Path to the PCSX2 executable
        #[arg(long)]
        pcsx2_path: Option<PathBuf>,

        /// PCSX2 configuration directory
        #[arg(long)]
        pcsx2_config_dir: Option<PathBuf>,

        /// Directory scanned for disc images
        #[arg(long)]
        roms_dir: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { dir } => run_scan(dir),
        Commands::Info { id } => run_info(&id),
        Commands::Config { action } => match action {
            ConfigAction::Show { id } => run_config_show(&id),
            ConfigAction::Set { id, field, value } => run_config_set(&id, &field, &value),
            ConfigAction::Reset { id } => run_config_reset(&id),
        },
        Commands::Pads => run_pads(),
        Commands::Watch { seconds } => run_watch(seconds),
        Commands::ApplyPad { ini, pad } => run_apply_pad(ini, pad),
        Commands::Keys { action } => match action {
            KeysAction::Show => run_keys_show(),
            KeysAction::Set { control, key } => run_keys_set(&control, &key),
            KeysAction::Reset => run_keys_reset(),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => run_settings_show(),
            SettingsAction::Set {
                pcsx2_path,
                pcsx2_config_dir,
                roms_dir,
            } => run_settings_set(pcsx2_path, pcsx2_config_dir, roms_dir),
        },
    }
}

fn warn_glyph() -> &'static str {
    "\u{26A0}"
}

fn run_scan(dir: Option<PathBuf>) {
    let dir = match dir.or_else(|| LauncherSettings::load().roms_dir) {
        Some(d) => d,
        None => {
            eprintln!(
                "{} No directory given and no ROM directory configured (see `ps2-launch settings`)",
                warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
            );
            return;
        }
    };

    println!("Scanning: {}", dir.display());
    println!();

    let entries = scan(&dir);
    if entries.is_empty() {
        println!(
            "{}",
            "No disc images found".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }

    let db = TitleDb::builtin();
    for entry in &entries {
        let name = db.title_name(&entry.id, Some(&entry.name)).to_string();
        let region = Region::from_title_id(&entry.id);
        println!(
            "  {}  {}  {}  [{}]  {}",
            entry.id.if_supports_color(Stdout, |t| t.cyan()),
            name.if_supports_color(Stdout, |t| t.bold()),
            region.code(),
            entry.extension,
            entry
                .size_formatted
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();
    println!("{} images", entries.len());
}

fn run_info(id: &str) {
    let resolver = ConfigResolver::with_default_path(TitleDb::builtin());

    match resolver.db().lookup(id) {
        Some(record) => {
            println!("{}", record.name.if_supports_color(Stdout, |t| t.bold()));
            println!("  Serial:    {}", record.id);
            println!("  Region:    {}", record.region.name());
            println!("  Developer: {}", record.developer);
            println!("  Year:      {}", record.year);
            println!("  Genre:     {}", record.genre);
        }
        None => {
            println!(
                "{} not in the title database",
                id.if_supports_color(Stdout, |t| t.cyan()),
            );
        }
    }

    println!();
    let overridden = resolver.override_for(id).is_some();
    print_config(&resolver.resolve(id), overridden);
}

fn print_config(config: &EmuConfig, overridden: bool) {
    let source = if overridden { " (user override)" } else { "" };
    println!("Configuration{source}:");
    println!("  Renderer:       {}", config.renderer);
    println!("  Resolution:     {}", config.resolution_display());
    println!("  Anisotropic:    {}", config.anisotropic_display());
    println!("  Tex filtering:  {}", config.texture_filtering_display());
    println!("  VSync:          {}", config.vsync);
    println!("  Frame limit:    {} fps", config.frame_limit);
    println!("  EE cycle rate:  {}", config.ee_cycle_rate);
    println!("  EE cycle skip:  {}", config.ee_cycle_skip);
    println!("  VU stealing:    {}", config.vu_cycle_stealing);
    println!("  MTVU:           {}", config.mtvu);
    println!("  Speedhacks:     {}", config.speedhacks);
    if config.game_fixes.is_empty() {
        println!("  Game fixes:     none");
    } else {
        println!("  Game fixes:     {}", config.game_fixes.join(", "));
    }
}

fn run_config_show(id: &str) {
    let resolver = ConfigResolver::with_default_path(TitleDb::builtin());
    print_config(&resolver.resolve(id), resolver.override_for(id).is_some());
}

fn run_config_set(id: &str, field: &str, value: &str) {
    let mut resolver = ConfigResolver::with_default_path(TitleDb::builtin());
    let mut config = resolver.resolve(id);

    if let Err(msg) = apply_field(&mut config, field, value) {
        eprintln!(
            "{} {}",
            warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
            msg,
        );
        return;
    }

    match resolver.save_override(id, config) {
        Ok(()) => println!(
            "{} override saved for {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id.if_supports_color(Stdout, |t| t.cyan()),
        ),
        Err(e) => eprintln!(
            "{} could not save override: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}

/// Apply one `field = value` edit to a configuration. Field names follow
/// the CLI's kebab-case spelling.
fn apply_field(config: &mut EmuConfig, field: &str, value: &str) -> Result<(), String> {
    fn parse<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, String> {
        value
            .parse()
            .map_err(|_| format!("invalid value {value:?} for {field}"))
    }

    match field {
        "renderer" => config.renderer = value.to_string(),
        "resolution" => config.internal_resolution = parse(field, value)?,
        "anisotropic" => config.anisotropic_filtering = parse(field, value)?,
        "texture-filtering" => config.texture_filtering = parse(field, value)?,
        "vsync" => config.vsync = parse(field, value)?,
        "frame-limit" => config.frame_limit = parse(field, value)?,
        "ee-cycle-rate" => config.ee_cycle_rate = parse(field, value)?,
        "ee-cycle-skip" => config.ee_cycle_skip = parse(field, value)?,
        "vu-cycle-stealing" => config.vu_cycle_stealing = parse(field, value)?,
        "mtvu" => config.mtvu = parse(field, value)?,
        "speedhacks" => config.speedhacks = parse(field, value)?,
        "game-fixes" => {
            config.game_fixes = value
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect();
        }
        _ => return Err(format!("unknown field {field:?}")),
    }
    Ok(())
}

fn run_config_reset(id: &str) {
    let mut resolver = ConfigResolver::with_default_path(TitleDb::builtin());
    match resolver.remove_override(id) {
        Ok(true) => println!(
            "{} override removed for {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id.if_supports_color(Stdout, |t| t.cyan()),
        ),
        Ok(false) => println!("no override stored for {id}"),
        Err(e) => eprintln!(
            "{} could not remove override: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}

fn run_pads() {
    let mut backend = match GilrsBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
                e,
            );
            return;
        }
    };

    let pads = backend.rescan();
    if pads.is_empty() {
        println!(
            "{}",
            "No gamepads connected".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }

    for pad in &pads {
        println!(
            "  [{}] {}  {}",
            pad.index,
            pad.name.if_supports_color(Stdout, |t| t.bold()),
            pad.family
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        println!(
            "      {} axes, {} buttons, {} hats  guid {}",
            pad.axes, pad.buttons, pad.hats, pad.guid,
        );
    }
}

fn run_watch(seconds: Option<u64>) {
    match seconds {
        Some(s) => println!("Watching for gamepads for {s}s"),
        None => println!("Watching for gamepads (Ctrl+C to exit)"),
    }

    let (mut monitor, events) = PadMonitor::start(|| match GilrsBackend::new() {
        Ok(backend) => Some(backend),
        Err(e) => {
            log::error!("{e}");
            None
        }
    });

    let deadline = seconds.map(|s| std::time::Instant::now() + std::time::Duration::from_secs(s));
    loop {
        let event = match deadline {
            Some(deadline) => {
                let Some(left) = deadline.checked_duration_since(std::time::Instant::now()) else {
                    break;
                };
                match events.recv_timeout(left) {
                    Ok(event) => event,
                    Err(_) => break,
                }
            }
            None => match events.recv() {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        match event {
            PadEvent::Connected(pad) => println!(
                "{} connected: {} ({})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                pad.name.if_supports_color(Stdout, |t| t.bold()),
                pad.family.display_name(),
            ),
            PadEvent::Disconnected => println!(
                "{} gamepad disconnected",
                warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
    monitor.stop();
}

fn run_apply_pad(ini: Option<PathBuf>, pad_index: Option<usize>) {
    let ini_path = match ini.or_else(ini_from_settings).or_else(default_ini_path) {
        Some(path) => path,
        None => {
            eprintln!(
                "{} PCSX2.ini not found; pass --ini or configure the PCSX2 directory",
                warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
            );
            return;
        }
    };

    let mut backend = match GilrsBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
                e,
            );
            return;
        }
    };

    let pads = backend.rescan();
    let pad = match pad_index {
        Some(index) => match pads.into_iter().find(|p| p.index == index) {
            Some(pad) => pad,
            None => {
                eprintln!(
                    "{} no gamepad with index {index} (see `ps2-launch pads`)",
                    warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
                );
                return;
            }
        },
        None => match pads.into_iter().next() {
            Some(pad) => pad,
            None => {
                eprintln!(
                    "{} no gamepad connected",
                    warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
                );
                return;
            }
        },
    };

    match apply_pad_profile(&pad, &ini_path) {
        Ok(()) => println!(
            "{} {} bound as DualShock 2 in {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            pad.name.if_supports_color(Stdout, |t| t.bold()),
            ini_path.display(),
        ),
        Err(e) => eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}

/// Derive the INI path from the configured PCSX2 directory, if set.
fn ini_from_settings() -> Option<PathBuf> {
    LauncherSettings::load()
        .pcsx2_config_dir
        .map(|dir| dir.join("inis").join("PCSX2.ini"))
}

fn run_keys_show() {
    let map = KeyboardMap::load();
    for (control, key) in map.bindings() {
        println!(
            "  {:<18} {}",
            control,
            key.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}

fn run_keys_set(control: &str, key: &str) {
    let mut map = KeyboardMap::load();
    match map.set_binding(control, key) {
        Ok(true) => println!(
            "{} {} -> {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            control,
            key.if_supports_color(Stdout, |t| t.cyan()),
        ),
        Ok(false) => eprintln!(
            "{} unknown control {control:?} (see `ps2-launch keys show`)",
            warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
        ),
        Err(e) => eprintln!(
            "{} could not save binding: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}

fn run_keys_reset() {
    let mut map = KeyboardMap::load();
    match map.reset_to_default() {
        Ok(()) => println!(
            "{} keyboard bindings reset",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        Err(e) => eprintln!(
            "{} could not reset bindings: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}

fn run_settings_show() {
    let settings = LauncherSettings::load();
    let display = |path: &Option<PathBuf>| match path {
        Some(p) => p.display().to_string(),
        None => "(not set)".to_string(),
    };
    println!("  PCSX2 executable:  {}", display(&settings.pcsx2_path));
    println!("  PCSX2 config dir:  {}", display(&settings.pcsx2_config_dir));
    println!("  ROM directory:     {}", display(&settings.roms_dir));
}

fn run_settings_set(
    pcsx2_path: Option<PathBuf>,
    pcsx2_config_dir: Option<PathBuf>,
    roms_dir: Option<PathBuf>,
) {
    if pcsx2_path.is_none() && pcsx2_config_dir.is_none() && roms_dir.is_none() {
        eprintln!(
            "{} nothing to change (pass --pcsx2-path, --pcsx2-config-dir, or --roms-dir)",
            warn_glyph().if_supports_color(Stdout, |t| t.yellow()),
        );
        return;
    }

    let mut settings = LauncherSettings::load();
    if let Some(path) = pcsx2_path {
        settings.pcsx2_path = Some(path);
    }
    if let Some(dir) = pcsx2_config_dir {
        settings.pcsx2_config_dir = Some(dir);
    }
    if let Some(dir) = roms_dir {
        settings.roms_dir = Some(dir);
    }

    match settings.save() {
        Ok(()) => println!(
            "{} settings saved",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        Err(e) => eprintln!(
            "{} could not save settings: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            e,
        ),
    }
}
