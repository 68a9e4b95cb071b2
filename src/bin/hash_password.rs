//! Print an Argon2 hash for `STAFF_PASSWORD_HASH`.
//!
//! Reads the password from the first line of stdin:
//! `echo -n 's3cret' | cargo run --bin hash_password`

use std::io::BufRead;

use anyhow::{bail, Context};

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = pachena_web::auth::hash_password(password)
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))?;
    println!("{hash}");
    Ok(())
}
