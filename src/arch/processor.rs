use std::fmt;

/// Address width of a processor class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Bitness {
    Bits32,
    Bits64,
    Unknown,
}

impl Bitness {
    pub fn label(self) -> &'static str {
        match self {
            Bitness::Bits32 => "32-bit",
            Bitness::Bits64 => "64-bit",
            Bitness::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Bitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Instruction-set family of a processor class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    X86,
    Ia64,
    PowerPc,
    Unknown,
}

impl Family {
    pub fn label(self) -> &'static str {
        match self {
            Family::X86 => "x86",
            Family::Ia64 => "ia64",
            Family::PowerPc => "ppc",
            Family::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable descriptor of a processor class: address width plus
/// instruction-set family.
///
/// Descriptors are built only by the registry from its fixed table; the
/// bitness and family sets are closed for this domain. Equality and hashing
/// are structural, so every alias of one table group yields an equal
/// descriptor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Processor {
    bitness: Bitness,
    family: Family,
}

impl Processor {
    pub(crate) const fn new(bitness: Bitness, family: Family) -> Self {
        Self { bitness, family }
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn is_32_bit(&self) -> bool {
        matches!(self.bitness, Bitness::Bits32)
    }

    pub fn is_64_bit(&self) -> bool {
        matches!(self.bitness, Bitness::Bits64)
    }

    pub fn is_x86(&self) -> bool {
        matches!(self.family, Family::X86)
    }

    pub fn is_ia64(&self) -> bool {
        matches!(self.family, Family::Ia64)
    }

    pub fn is_ppc(&self) -> bool {
        matches!(self.family, Family::PowerPc)
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.bitness)
    }
}
