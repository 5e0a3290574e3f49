//! Platform-specific shell selection.

/// The shell and flag used to run a command line.
///
/// Check commands are plain POSIX command lines (`cd doc; make html-strict`),
/// so `sh -c` is used rather than the user's login shell.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
