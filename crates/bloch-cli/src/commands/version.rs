//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - statevector quantum circuit simulator",
        style("Bloch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  bloch-ir   Circuit representation and request validation");
    println!("  bloch-sim  Statevector simulation and sampling");
    println!("  bloch-cli  Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/bloch-sim/bloch").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
