// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! kenv - Cluster Environment Manager CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_create;
mod cmd_delete;
mod cmd_init;
mod cmd_list;

use cmd_create::CmdCreate;
use cmd_delete::CmdDelete;
use cmd_init::CmdInit;
use cmd_list::CmdList;

#[derive(Parser)]
#[clap(
    name = "kenv",
    about = "Cluster Environment Manager",
    version,
    long_about = "Manage named cluster environments inside an application workspace"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a kenv workspace
    Init(CmdInit),

    /// Create or overwrite an environment
    Create(CmdCreate),

    /// List environments in the workspace
    List(CmdList),

    /// Delete an environment
    Delete(CmdDelete),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::Create(mut cmd) => cmd.run(),
            Command::List(mut cmd) => cmd.run(),
            Command::Delete(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
