// SPDX-License-Identifier: MIT

//! Harness binary entry point.

use clap::Parser;

use glfwtest::cli::Cli;
use glfwtest::config::SuiteConfig;
use glfwtest::driver::Driver;
use glfwtest::output::print_error;

fn main() {
    let cli = Cli::parse();

    let suite = match SuiteConfig::load(&cli.suite) {
        Ok(suite) => suite,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let driver = Driver::from_suite(suite, cli.renderer);
    if let Err(e) = driver.run(cli.test_mode) {
        print_error(e);
        std::process::exit(1);
    }
}
