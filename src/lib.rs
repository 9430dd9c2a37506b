mod arch;
mod error;
mod host;
mod image;

pub use arch::Arch;

pub use error::ArchError;
pub use error::ImageFormatError;

pub use host::host_arch;
pub use host::host_arch_from;

pub use image::executable_arch;
pub use image::pe_machine;
