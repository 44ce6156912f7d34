// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use scenario_asciidoc::{cli, config, loader, report, ui};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve configuration
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load report models
    let models = match loader::load_report_models(&config.source_dir) {
        Ok(models) => models,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::status(&format!("Loaded {} report files from {}", models.len(), config.source_dir.display()));

    // Write documents
    match report::generate_report(&models, &config) {
        Ok(total) => {
            ui::status(&format!(
                "Wrote {} scenarios ({} successful, {} failed, {} pending) to {}",
                total.num_scenarios,
                total.num_successful_scenarios,
                total.num_failed_scenarios,
                total.num_pending_scenarios,
                config.target_dir.join(report::INDEX_FILE).display()
            ));
        }
        Err(e) => {
            ui::print_error(&format!("Report generation failed: {}", e));
            std::process::exit(1);
        }
    }
}
