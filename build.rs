//! Pokémon API build script.

use rustc_version::version_meta;
use rustc_version::Channel::Nightly;

#[doc(hidden)]
fn main() {
    // Migrations are embedded in the `run_migrations` binary, and the welcome page in the server.
    println!("cargo:rerun-if-changed=migrations");
    println!("cargo:rerun-if-changed=static");

    // Errors can only expose their `Backtrace` through `std::error::Error` on Nightly.
    if version_meta().unwrap().channel <= Nightly {
        println!("cargo:rustc-cfg=backtrace_support");
    }
}
