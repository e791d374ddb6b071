// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kenv init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

use kenv::{OsFs, Workspace};

/// Initialize a kenv workspace
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to initialize
    #[clap(default_value = ".")]
    path: PathBuf,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let ws = Workspace::init(&OsFs, &self.path)?;

        println!("Initialized kenv workspace at {:?}", ws.root());
        println!();
        println!("Next steps:");
        println!("  1. Create an environment with 'kenv create <name> --uri <server>");
        println!("     --spec file:<swagger.json> --ext-lib <k.libsonnet> --k8s-lib <k8s.libsonnet>'");
        println!("  2. Run 'kenv list' to see the environments in this workspace");

        Ok(0)
    }
}
