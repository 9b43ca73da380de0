//! Output macros for the dockhand CLI.
//!
//! These macros keep user-facing output consistent across all crates.
//! Errors and hints go to stderr so stdout stays parseable.

#[macro_export]
macro_rules! dock_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dock_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dock_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}
