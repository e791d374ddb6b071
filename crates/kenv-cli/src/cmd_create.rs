// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kenv create` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

use kenv::{parse_cluster_spec, EnvironmentStore, OsFs, Workspace};

/// Create or overwrite an environment
#[derive(Debug, Args)]
pub struct CmdCreate {
    /// Environment name (slash-separated, e.g. us-west/dev)
    name: String,

    /// Target cluster endpoint
    #[clap(long, env = "KENV_URI")]
    uri: String,

    /// Cluster spec source (file:<path> or a path to an OpenAPI document)
    #[clap(long)]
    spec: String,

    /// Pre-generated extensions library (k.libsonnet) to install
    #[clap(long = "ext-lib")]
    ext_lib: PathBuf,

    /// Pre-generated core library (k8s.libsonnet) to install
    #[clap(long = "k8s-lib")]
    k8s_lib: PathBuf,

    /// Start workspace discovery from DIR
    #[clap(short = 'd', long, default_value = ".")]
    dir: PathBuf,
}

impl CmdCreate {
    pub fn run(&mut self) -> Result<i32> {
        let ws = Workspace::discover(&self.dir)?;
        let store = EnvironmentStore::new(OsFs, ws.environments_root());

        let spec = parse_cluster_spec(&self.spec)?;

        // Library generation happens upstream; this command installs the
        // generated text as handed to it.
        let ext_lib = std::fs::read(&self.ext_lib)
            .map_err(|e| miette::miette!("Failed to read {:?}: {}", self.ext_lib, e))?;
        let k8s_lib = std::fs::read(&self.k8s_lib)
            .map_err(|e| miette::miette!("Failed to read {:?}: {}", self.k8s_lib, e))?;

        store.create(&self.name, &self.uri, &spec, &ext_lib, &k8s_lib)?;

        println!("Created environment {:?} targeting {}", self.name, self.uri);

        Ok(0)
    }
}
