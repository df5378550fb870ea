//! Command-line arguments.

use std::fmt;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tessera_log::Format;

use crate::config::{LogOverrides, Overrides};

/// Resolve the tessera property tree and print outcomes as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about)]
pub struct Cli {
    /// Log filter directive, e.g. `debug` or `info,tessera_resolver=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_name = "pretty|compact|json")]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve once and print the outcome of each selected node
    Resolve(ResolveArgs),
    /// Subscribe to a node and print its first emissions
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Node to resolve; every node when omitted
    #[arg(long, value_enum)]
    pub node: Option<NodeKind>,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Node to subscribe to
    #[arg(long, value_enum, default_value_t = NodeKind::Root)]
    pub node: NodeKind,

    /// Number of emissions to print before unsubscribing
    #[arg(long, value_name = "N")]
    pub take: Option<usize>,
}

/// A node of the built-in tree, addressed from a single root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    A,
    B,
    C,
    D,
}

impl NodeKind {
    pub const ALL: [Self; 5] = [Self::Root, Self::A, Self::B, Self::C, Self::D];
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Root => "root",
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        })
    }
}

impl Cli {
    /// Flags that take part in configuration layering.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            take: match &self.command {
                Command::Watch(args) => args.take,
                Command::Resolve(_) => None,
            },
            log: LogOverrides {
                level: self.log_level.clone(),
                format: self.log_format,
            },
        }
    }
}
