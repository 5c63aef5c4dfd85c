// Lightweight verbosity-gated logging helper used throughout the crate.
macro_rules! vprintln {
	($verbose:expr, $level:expr, $($arg:tt)*) => {
		if $verbose >= $level {
			eprintln!($($arg)*);
		}
	};
}

// Public library re-exports for integration tests and external use.
pub mod actions;
pub mod archives;
pub mod bits;
pub mod catalog;
pub mod checksum;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod gfx;
pub mod progress;
pub mod recipe;
pub mod torrentzip;
pub mod types;
pub mod vc;

// Keep main.rs thin and have it call into the library functions.
