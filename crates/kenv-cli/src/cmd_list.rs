// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kenv list` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use kenv::{Environment, EnvironmentStore, OsFs, Workspace};

/// List environments in the workspace
#[derive(Debug, Args)]
pub struct CmdList {
    /// Start workspace discovery from DIR
    #[clap(short = 'd', long, default_value = ".")]
    dir: PathBuf,

    /// Output format: table, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdList {
    pub fn run(&mut self) -> Result<i32> {
        let ws = Workspace::discover(&self.dir)?;
        let store = EnvironmentStore::new(OsFs, ws.environments_root());

        let mut envs = store.list()?;
        // Walk order is unspecified; present a stable view.
        envs.sort_by(|a, b| a.name.cmp(&b.name));

        if self.format == "json" {
            self.show_json(&envs)?;
        } else {
            self.show_table(&envs);
        }

        Ok(0)
    }

    fn show_table(&self, envs: &[Environment]) {
        println!("{}", "Environments:".bold());
        println!();

        if envs.is_empty() {
            println!("  {}", "(none)".dimmed());
        } else {
            for (i, env) in envs.iter().enumerate() {
                println!("  {}. {} -> {}", i + 1, env.name.cyan(), env.uri.green());
            }
        }

        println!();
        println!("Total: {} environment(s)", envs.len());
    }

    fn show_json(&self, envs: &[Environment]) -> Result<()> {
        let entries: Vec<serde_json::Value> = envs
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.name,
                    "path": e.path.display().to_string(),
                    "uri": e.uri,
                })
            })
            .collect();

        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| miette::miette!("Failed to render JSON: {}", e))?;
        println!("{rendered}");

        Ok(())
    }
}
