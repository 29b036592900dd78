use crate::Operand;

/// The encodings of the MOV instruction, identified by the bits that must be set in the first
/// byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovOpCode {
    /// `1 0 0 0 1 0 d w | mod reg r/m`
    RegisterMemoryToFromRegister,
    /// `1 1 0 0 0 1 1 w | mod 0 0 0 r/m | data | data if w = 1`
    ImmediateToRegisterMemory,
    /// `1 0 1 1 w reg | data | data if w = 1`
    ImmediateToRegister,
    /// `1 0 1 0 0 0 0 w | addr-lo | addr-hi`
    MemoryToAccumulator,
    /// `1 0 1 0 0 0 1 w | addr-lo | addr-hi`
    AccumulatorToMemory,
    /// `1 0 0 0 1 1 1 0 | mod 0 sr r/m`
    RegisterMemoryToSegment,
    /// `1 0 0 0 1 1 0 0 | mod 0 sr r/m`
    SegmentToRegisterMemory,
}

impl MovOpCode {
    /// Op codes in the order they have to be tested. A byte matches an op code when all the bits
    /// of its mask are set, so a mask that is a bit-superset of another has to come first.
    pub const PRIORITY: [MovOpCode; 7] = [
        MovOpCode::ImmediateToRegisterMemory,
        MovOpCode::ImmediateToRegister,
        MovOpCode::AccumulatorToMemory,
        MovOpCode::MemoryToAccumulator,
        MovOpCode::RegisterMemoryToSegment,
        MovOpCode::SegmentToRegisterMemory,
        MovOpCode::RegisterMemoryToFromRegister,
    ];

    pub const fn mask(self) -> u8 {
        match self {
            MovOpCode::RegisterMemoryToFromRegister => 0x88,
            MovOpCode::ImmediateToRegisterMemory => 0xC6,
            MovOpCode::ImmediateToRegister => 0xB0,
            MovOpCode::MemoryToAccumulator => 0xA0,
            MovOpCode::AccumulatorToMemory => 0xA2,
            MovOpCode::RegisterMemoryToSegment => 0x8E,
            MovOpCode::SegmentToRegisterMemory => 0x8C,
        }
    }

    pub const fn matches(self, byte: u8) -> bool {
        byte & self.mask() == self.mask()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mov {
    /// The encoding this instruction was decoded from. Rendering does not depend on it.
    pub op_code: MovOpCode,
    pub destination: Operand,
    pub source: Operand,
}

impl Mov {
    pub fn new(op_code: MovOpCode, destination: Operand, source: Operand) -> Self {
        Self {
            op_code,
            destination,
            source,
        }
    }
}

/// Representation of a decoded 8086 instruction.
///
/// ```rust
/// use sim_instruction::*;
///
/// // mov ax, [bx + di - 37]
/// let i = Instruction::Mov(Mov::new(
///     MovOpCode::RegisterMemoryToFromRegister,
///     Operand::Register(Register::AX),
///     Operand::Memory(Memory::new(EffectiveAddressBase::BxDi, -37)),
/// ));
/// assert_eq!(i.to_string(), "mov ax, [bx + di - 37]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Mov(Mov),
}
