use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::domain::{Distance, PointIdStrategy};

pub mod shell;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Check that the Qdrant server answers
    #[command(alias = "test-connection")]
    Check,

    /// Create a collection, replacing any existing one with the same name
    Create {
        name: String,
    },

    /// Delete a collection
    Delete {
        name: String,
    },

    /// Extract, chunk and upsert the text of a PDF into a collection
    Index {
        /// Target collection (must already exist)
        collection: String,

        /// Path to the PDF file
        pdf: PathBuf,

        /// How point ids are assigned
        #[arg(long, value_enum, default_value_t = IdStrategyArg::Sequential)]
        ids: IdStrategyArg,
    },

    /// List collection names
    List,

    /// Show status, size and point count of a collection
    Info {
        name: String,
    },

    /// Interactive session accepting the commands above
    Shell,
}

/// CLI distance option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DistanceArg {
    #[default]
    Cosine,
    Euclid,
    Dot,
    Manhattan,
}

impl From<DistanceArg> for Distance {
    fn from(d: DistanceArg) -> Self {
        match d {
            DistanceArg::Cosine => Distance::Cosine,
            DistanceArg::Euclid => Distance::Euclid,
            DistanceArg::Dot => Distance::Dot,
            DistanceArg::Manhattan => Distance::Manhattan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum IdStrategyArg {
    /// Chunk index; re-indexing overwrites earlier points
    #[default]
    Sequential,
    /// Random UUIDs; re-indexing appends
    Uuid,
}

impl From<IdStrategyArg> for PointIdStrategy {
    fn from(s: IdStrategyArg) -> Self {
        match s {
            IdStrategyArg::Sequential => PointIdStrategy::Sequential,
            IdStrategyArg::Uuid => PointIdStrategy::Uuid,
        }
    }
}
