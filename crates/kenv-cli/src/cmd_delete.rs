// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kenv delete` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

use kenv::{EnvironmentStore, OsFs, Workspace};

/// Delete an environment
#[derive(Debug, Args)]
pub struct CmdDelete {
    /// Environment name
    name: String,

    /// Start workspace discovery from DIR
    #[clap(short = 'd', long, default_value = ".")]
    dir: PathBuf,
}

impl CmdDelete {
    pub fn run(&mut self) -> Result<i32> {
        let ws = Workspace::discover(&self.dir)?;
        let store = EnvironmentStore::new(OsFs, ws.environments_root());

        store.delete(&self.name)?;

        println!("Deleted environment {:?}", self.name);

        Ok(0)
    }
}
