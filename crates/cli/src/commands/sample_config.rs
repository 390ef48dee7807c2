//! Sample-config command implementation.

/// Print a sample tenants file to stdout. Needs no configuration.
pub fn run() {
    println!("{}", esper_config::sample_config());
}
