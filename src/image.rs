use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use object::pe::ImageDosHeader;
use object::pe::ImageNtHeaders32;
use object::pe::ImageNtHeaders64;
use object::pe::IMAGE_FILE_MACHINE_AMD64;
use object::pe::IMAGE_FILE_MACHINE_I386;
use object::read::pe::ImageNtHeaders;
use object::FileKind;
use object::LittleEndian;

use crate::host::host_arch;
use crate::Arch;
use crate::ArchError;
use crate::ImageFormatError;

/// Returns the architecture a PE executable was built for.
///
/// If `path` does not exist the host architecture is reported instead: no
/// file to inspect means the caller wants to know about the machine it would
/// run on. Every other failure to open or parse the file is an error.
pub fn executable_arch(path: impl AsRef<Path>) -> Result<Arch, ArchError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(
                "{} does not exist, falling back to the host architecture",
                path.display()
            );
            return host_arch();
        }
        Err(e) => {
            return Err(ArchError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    // Safety: mapped files can cause issues if they are modified or truncated
    // while mapped. The mapping only lives for the duration of the header
    // read and is unmapped when this function returns.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ArchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let machine = pe_machine(&mmap).map_err(|e| ArchError::Image {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("{} has machine type {:#06x}", path.display(), machine);

    match machine {
        IMAGE_FILE_MACHINE_I386 => Ok(Arch::X86),
        IMAGE_FILE_MACHINE_AMD64 => Ok(Arch::Amd64),
        _ => Err(ArchError::UnknownArch),
    }
}

/// Reads the machine-type field of the PE file header. Pure over the raw
/// bytes; opening and mapping files is the caller's concern.
pub fn pe_machine(data: &[u8]) -> Result<u16, ImageFormatError> {
    match FileKind::parse(data) {
        Ok(FileKind::Pe32) => machine_of::<ImageNtHeaders32>(data),
        Ok(FileKind::Pe64) => machine_of::<ImageNtHeaders64>(data),
        Ok(other_file_kind) => Err(ImageFormatError::UnsupportedFormat(other_file_kind)),
        Err(e) => Err(ImageFormatError::Malformed(e)),
    }
}

fn machine_of<Pe: ImageNtHeaders>(data: &[u8]) -> Result<u16, ImageFormatError> {
    let dos_header = ImageDosHeader::parse(data)?;
    let mut offset = dos_header.nt_headers_offset().into();
    let (nt_headers, _data_directories) = Pe::parse(data, &mut offset)?;
    Ok(nt_headers.file_header().machine.get(LittleEndian))
}
