//! CLI Module
//!
//! Command-line interface for the Clipsmith transform engine. The CLI plays
//! the role of the host editor: it decodes input files, drives the core, and
//! writes the resulting bytes to disk.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::dsp::{FadeShape, FilterKind};

/// Clipsmith - offline audio sample transform engine
#[derive(Parser, Debug)]
#[command(name = "clipsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print clip metadata
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },

    /// Render an edited copy of a clip
    #[command(name = "render")]
    Render {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Selection start as a percentage of the clip
        #[arg(long, default_value_t = 0.0)]
        start: f32,

        /// Selection end as a percentage of the clip
        #[arg(long, default_value_t = 100.0)]
        end: f32,

        /// Fade-in length as a percentage of the selection
        #[arg(long, default_value_t = 0.0)]
        fade_in: f32,

        /// Fade-in curve shape
        #[arg(long, value_enum, default_value = "smooth")]
        fade_in_shape: ShapeArg,

        /// Fade-out length as a percentage of the selection
        #[arg(long, default_value_t = 0.0)]
        fade_out: f32,

        /// Fade-out curve shape
        #[arg(long, value_enum, default_value = "smooth")]
        fade_out_shape: ShapeArg,

        /// Linear gain applied during the render
        #[arg(long, default_value_t = 1.0)]
        volume: f32,

        /// Pitch factor (declared-rate varispeed)
        #[arg(long, default_value_t = 1.0)]
        pitch: f32,

        /// Filter kind
        #[arg(long, value_enum, default_value = "none")]
        filter: FilterArg,

        /// Filter strength, 0-100
        #[arg(long, default_value_t = 0.0)]
        filter_amount: f32,

        /// JSON parameter file; replaces the individual edit flags
        #[arg(
            long,
            conflicts_with_all = [
                "start", "end", "fade_in", "fade_in_shape", "fade_out",
                "fade_out_shape", "volume", "pitch", "filter", "filter_amount",
            ]
        )]
        params: Option<PathBuf>,
    },

    /// Peak-normalize a clip
    #[command(name = "normalize")]
    Normalize {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Reverse a clip
    #[command(name = "reverse")]
    Reverse {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Crush a clip to a lower bit depth
    #[command(name = "crush")]
    Crush {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Target bit depth, 1-16
        #[arg(long, default_value_t = 8)]
        bits: u32,
    },
}

/// Fade shape as a CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Convex,
    Smooth,
    Concave,
}

impl From<ShapeArg> for FadeShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Convex => FadeShape::Convex,
            ShapeArg::Smooth => FadeShape::Smooth,
            ShapeArg::Concave => FadeShape::Concave,
        }
    }
}

/// Filter kind as a CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    None,
    LowPass,
    HighPass,
}

impl From<FilterArg> for FilterKind {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::None => FilterKind::None,
            FilterArg::LowPass => FilterKind::LowPass,
            FilterArg::HighPass => FilterKind::HighPass,
        }
    }
}
