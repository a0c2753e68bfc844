//! # media-tidy CLI
//!
//! ## Usage
//! ```bash
//! media-tidy compare ~/Phone/DCIM ~/Photos
//! media-tidy sort ~/Photos --recursive --month
//! ```

mod cli;

use media_tidy::Result;

fn main() -> Result<()> {
    cli::run()
}
