//! # dotcal CLI
//!
//! Serve year progress wallpapers over HTTP, or render one to a file.
//!
//! ## Usage
//!
//! ```bash
//! # Run the server
//! DAYS_SECRET=changeme dotcal serve --fonts ./fonts
//!
//! # Pin the calendar to a time zone
//! dotcal serve --utc-offset-minutes -300
//!
//! # Render the month mosaic to a PNG
//! dotcal render wallpaper --png wallpaper.png -p today=c9a97e
//!
//! # Render the year grid for a specific day
//! dotcal render days --png days.png --date 2024-03-15
//! ```

use chrono::{FixedOffset, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dotcal::{
    Clock, DotcalError,
    params::parse_pairs,
    render::{DaysOptions, FontSet, WallpaperOptions, render_days, render_wallpaper, wallpaper},
    server::{self, ServerConfig},
};

/// dotcal - Year progress dot calendar wallpapers
#[derive(Parser, Debug)]
#[command(name = "dotcal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3000")]
        listen: String,

        /// Directory holding the SF Pro font files (built-in bitmap font if omitted)
        #[arg(long, value_name = "DIR")]
        fonts: Option<PathBuf>,

        /// Directory served under /static
        #[arg(long, default_value = "public")]
        static_dir: PathBuf,

        /// Evaluate "today" at this UTC offset instead of host local time
        #[arg(long, allow_hyphen_values = true)]
        utc_offset_minutes: Option<i32>,

        /// Pretend every request happens on this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Shared key for /days (the endpoint rejects everything when unset)
        #[arg(long, env = "DAYS_SECRET", hide_env_values = true)]
        days_secret: Option<String>,
    },

    /// Render a wallpaper to a PNG file
    Render {
        /// Which wallpaper to render
        #[arg(value_enum)]
        kind: WallpaperKind,

        /// Output file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Query-style parameter, e.g. -p width=828 -p bg=000000
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Directory holding the SF Pro font files (built-in bitmap font if omitted)
        #[arg(long, value_name = "DIR")]
        fonts: Option<PathBuf>,

        /// Render for this date (YYYY-MM-DD) instead of today
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WallpaperKind {
    /// Twelve month mosaic
    Wallpaper,
    /// 15x25 year grid with verse
    Days,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dotcal=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DotcalError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            fonts,
            static_dir,
            utc_offset_minutes,
            date,
            days_secret,
        } => {
            let clock = clock_from_args(utc_offset_minutes, date.as_deref())?;
            let config = ServerConfig {
                listen_addr: listen,
                days_secret,
                fonts_dir: fonts,
                static_dir,
                clock,
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }

        Commands::Render {
            kind,
            png,
            params,
            fonts,
            date,
        } => {
            let clock = clock_from_args(None, date.as_deref())?;
            let today = clock.today();
            let fonts = FontSet::from_option(fonts.as_deref())?;
            let params = parse_pairs(&params).map_err(DotcalError::InvalidArgument)?;

            let surface = match kind {
                WallpaperKind::Wallpaper => {
                    let options = WallpaperOptions::from_params(&params);
                    let background = if options.background_image.is_some() {
                        let runtime = tokio::runtime::Runtime::new()?;
                        let client = reqwest::Client::new();
                        runtime.block_on(wallpaper::load_background(&client, &options))
                    } else {
                        None
                    };
                    render_wallpaper(&options, background.as_ref(), today, &fonts)
                }
                WallpaperKind::Days => {
                    render_days(&DaysOptions::from_params(&params), today, &fonts)
                }
            };

            let bytes = surface.encode_png()?;
            std::fs::write(&png, &bytes)?;
            info!(
                path = %png.display(),
                date = %today,
                width = surface.width(),
                height = surface.height(),
                "saved PNG"
            );
            println!("Saved to {}", png.display());
            Ok(())
        }
    }
}

fn clock_from_args(offset_minutes: Option<i32>, date: Option<&str>) -> Result<Clock, DotcalError> {
    if let Some(date) = date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            DotcalError::InvalidArgument(format!("Invalid date '{}': {}", date, e))
        })?;
        return Ok(Clock::Fixed(date));
    }

    match offset_minutes {
        Some(minutes) => minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Clock::Offset)
            .ok_or_else(|| {
                DotcalError::InvalidArgument(format!("UTC offset out of range: {} minutes", minutes))
            }),
        None => Ok(Clock::Local),
    }
}
