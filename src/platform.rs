//! Console visibility on Windows.
//!
//! Release builds are linked with the `windows` subsystem, so the process
//! starts without a console. Verbose mode allocates one so the diagnostics
//! have somewhere to go. Cosmetic and best effort on every count; a no-op
//! everywhere else.

#[cfg(windows)]
pub fn show_console_if_verbose(verbose: bool) {
    if verbose {
        // Fails when a console already exists, which is exactly what we want.
        unsafe {
            winapi::um::consoleapi::AllocConsole();
        }
    }
}

#[cfg(not(windows))]
pub fn show_console_if_verbose(_verbose: bool) {}
