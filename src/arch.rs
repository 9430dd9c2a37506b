use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::ArchError;

/// CPU architecture of a host operating system or of an executable.
///
/// The default value is [`Arch::Unknown`], which doubles as the result of
/// parsing anything that is not one of the two recognized architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arch {
    #[default]
    Unknown,
    /// Intel x86, 32 bit.
    X86,
    /// AMD/Intel 64 bit.
    Amd64,
}

impl Arch {
    /// Parses a string leniently: unrecognized input, the empty string
    /// included, becomes [`Arch::Unknown`] rather than an error.
    pub fn parse(s: &str) -> Arch {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Arch {
    type Err = ArchError;

    /// The strict parse. Case-insensitive, anything other than "x86" and
    /// "amd64" is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "X86" => Ok(Arch::X86),
            "AMD64" => Ok(Arch::Amd64),
            _ => Err(ArchError::UnknownArch),
        }
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Arch::X86 => write!(f, "X86"),
            Arch::Amd64 => write!(f, "AMD64"),
            Arch::Unknown => write!(f, "(UNKNOWN)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("x86", Arch::X86)]
    #[case("X86", Arch::X86)]
    #[case("amd64", Arch::Amd64)]
    #[case("AMD64", Arch::Amd64)]
    #[case("Amd64", Arch::Amd64)]
    #[case("aMd64", Arch::Amd64)]
    #[case("amD64", Arch::Amd64)]
    #[case("AMd64", Arch::Amd64)]
    #[case("AmD64", Arch::Amd64)]
    #[case("aMD64", Arch::Amd64)]
    #[case("", Arch::Unknown)]
    #[case("foo", Arch::Unknown)]
    #[case("bar", Arch::Unknown)]
    fn lenient_parse(#[case] input: &str, #[case] expected: Arch) {
        assert_eq!(Arch::parse(input), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("foo")]
    #[case::close_but_wrong("amd65")]
    fn strict_parse_rejects_unrecognized_input(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Arch>(),
            Err(ArchError::UnknownArch)
        ));
    }

    #[rstest]
    #[case(Arch::X86, "X86")]
    #[case(Arch::Amd64, "AMD64")]
    #[case(Arch::Unknown, "(UNKNOWN)")]
    fn display(#[case] arch: Arch, #[case] expected: &str) {
        assert_eq!(arch.to_string(), expected);
    }

    #[rstest]
    #[case(Arch::X86)]
    #[case(Arch::Amd64)]
    fn display_round_trips(#[case] arch: Arch) {
        assert_eq!(Arch::parse(&arch.to_string()), arch);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Arch::default(), Arch::Unknown);
    }
}
