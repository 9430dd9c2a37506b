use std::env;

use tracing::debug;

use crate::Arch;
use crate::ArchError;

/// Set by 64 bit Windows for processes running under WOW64 emulation. Holds
/// the real processor architecture, while `PROCESSOR_ARCHITECTURE` reports
/// the emulated one.
const WOW64_ENV_VAR: &str = "PROCESSOR_ARCHITEW6432";

const ARCH_ENV_VAR: &str = "PROCESSOR_ARCHITECTURE";

/// Returns the architecture of the host operating system, read from the
/// process environment. The WOW64 override takes precedence whenever it is
/// set, even to a value that does not parse.
pub fn host_arch() -> Result<Arch, ArchError> {
    host_arch_from(|name| env::var_os(name).map(|value| value.to_string_lossy().into_owned()))
}

/// Same as [`host_arch`] but over an arbitrary environment lookup, so the
/// detection logic can be exercised without mutating process-global state.
pub fn host_arch_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Arch, ArchError> {
    if let Some(value) = lookup(WOW64_ENV_VAR) {
        debug!("{} is set, honoring the WOW64 override", WOW64_ENV_VAR);
        return value.parse();
    }

    match lookup(ARCH_ENV_VAR) {
        Some(value) => value.parse(),
        None => Err(ArchError::UnknownArch),
    }
}
