// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the Eventmi lifecycle verifier.

mod arg;
mod cli;
mod cmd_config;
mod cmd_generate_completion;
mod cmd_list;
mod cmd_run;
mod config;
mod logging;
mod report_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
