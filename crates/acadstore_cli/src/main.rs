//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `acadstore_core` linkage and
//!   storage bootstrap.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("acadstore_core version={}", acadstore_core::core_version());

    match acadstore_core::db::open_db_in_memory() {
        Ok(_) => println!("acadstore_core storage_probe=ok"),
        Err(err) => {
            eprintln!("acadstore_core storage_probe=error error={err}");
            std::process::exit(1);
        }
    }
}
