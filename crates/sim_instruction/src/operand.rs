use crate::{OperandSize, Register, Segment};

/// Registers used to compute the address of a memory operand, before the displacement is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveAddressBase {
    BxSi,
    BxDi,
    BpSi,
    BpDi,
    Si,
    Di,
    Bp,
    Bx,
    /// Direct address; only the displacement is used.
    None,
}

impl EffectiveAddressBase {
    /// Select a base from the 3-bit `r/m` field of a mod-reg-r/m byte. The remap of `mod=00`,
    /// `r/m=110` to a direct address is up to the caller, because it depends on the mode.
    pub fn from_encoding(encoding: u8) -> Option<Self> {
        use EffectiveAddressBase::*;

        Some(match encoding {
            0b000 => BxSi,
            0b001 => BxDi,
            0b010 => BpSi,
            0b011 => BpDi,
            0b100 => Si,
            0b101 => Di,
            0b110 => Bp,
            0b111 => Bx,
            _ => return Option::None,
        })
    }

    /// The registers making up the base, in the order they are written.
    pub fn registers(&self) -> &'static [Register] {
        use EffectiveAddressBase::*;

        match self {
            BxSi => &[Register::BX, Register::SI],
            BxDi => &[Register::BX, Register::DI],
            BpSi => &[Register::BP, Register::SI],
            BpDi => &[Register::BP, Register::DI],
            Si => &[Register::SI],
            Di => &[Register::DI],
            Bp => &[Register::BP],
            Bx => &[Register::BX],
            None => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Memory {
    pub base: EffectiveAddressBase,
    pub displacement: i16,
}

impl Memory {
    pub fn new(base: EffectiveAddressBase, displacement: i16) -> Self {
        Self { base, displacement }
    }

    /// A memory operand addressed only by a 16-bit offset.
    pub fn direct(address: u16) -> Self {
        Self {
            base: EffectiveAddressBase::None,
            displacement: address as i16,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.base == EffectiveAddressBase::None
    }
}

/// Immediate data. The value is kept at the width it was encoded with and only widened, never
/// sign-extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Immediate {
    Byte(u8),
    Word(u16),
}

impl Immediate {
    pub fn value(&self) -> u16 {
        match self {
            Immediate::Byte(value) => *value as u16,
            Immediate::Word(value) => *value,
        }
    }

    pub fn size(&self) -> OperandSize {
        match self {
            Immediate::Byte(_) => OperandSize::Byte,
            Immediate::Word(_) => OperandSize::Word,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Segment(Segment),
    Memory(Memory),
    Immediate(Immediate),
}

impl From<Register> for Operand {
    fn from(register: Register) -> Self {
        Operand::Register(register)
    }
}

impl From<Segment> for Operand {
    fn from(segment: Segment) -> Self {
        Operand::Segment(segment)
    }
}

impl From<Memory> for Operand {
    fn from(memory: Memory) -> Self {
        Operand::Memory(memory)
    }
}

impl From<Immediate> for Operand {
    fn from(immediate: Immediate) -> Self {
        Operand::Immediate(immediate)
    }
}
