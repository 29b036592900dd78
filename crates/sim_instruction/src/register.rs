use std::fmt::{Display, Formatter};

/// The width flag (`w`) of an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSize {
    Byte,
    Word,
}

impl OperandSize {
    /// Interpret the lowest bit of `bits` as the width flag.
    pub fn from_width_bit(bits: u8) -> Self {
        if bits & 0b1 == 0 {
            OperandSize::Byte
        } else {
            OperandSize::Word
        }
    }
}

impl Display for OperandSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSize::Byte => write!(f, "byte"),
            OperandSize::Word => write!(f, "word"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,

    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
}

impl Register {
    /// Select a register from a 3-bit `reg` or `r/m` field and the width of the operation. Returns
    /// `None` if `encoding` does not fit in 3 bits.
    pub fn from_encoding(encoding: u8, operand_size: OperandSize) -> Option<Self> {
        use Register::*;

        Some(match (operand_size, encoding) {
            (OperandSize::Byte, 0b000) => AL,
            (OperandSize::Byte, 0b001) => CL,
            (OperandSize::Byte, 0b010) => DL,
            (OperandSize::Byte, 0b011) => BL,
            (OperandSize::Byte, 0b100) => AH,
            (OperandSize::Byte, 0b101) => CH,
            (OperandSize::Byte, 0b110) => DH,
            (OperandSize::Byte, 0b111) => BH,

            (OperandSize::Word, 0b000) => AX,
            (OperandSize::Word, 0b001) => CX,
            (OperandSize::Word, 0b010) => DX,
            (OperandSize::Word, 0b011) => BX,
            (OperandSize::Word, 0b100) => SP,
            (OperandSize::Word, 0b101) => BP,
            (OperandSize::Word, 0b110) => SI,
            (OperandSize::Word, 0b111) => DI,

            _ => return None,
        })
    }

    pub fn encoding(&self) -> u8 {
        use Register::*;

        match self {
            AL | AX => 0b000,
            CL | CX => 0b001,
            DL | DX => 0b010,
            BL | BX => 0b011,
            AH | SP => 0b100,
            CH | BP => 0b101,
            DH | SI => 0b110,
            BH | DI => 0b111,
        }
    }

    pub fn size(&self) -> OperandSize {
        use Register::*;

        match self {
            AL | CL | DL | BL | AH | CH | DH | BH => OperandSize::Byte,
            AX | CX | DX | BX | SP | BP | SI | DI => OperandSize::Word,
        }
    }

    /// The accumulator (`al` or `ax`) for the given width.
    pub fn accumulator(operand_size: OperandSize) -> Self {
        match operand_size {
            OperandSize::Byte => Register::AL,
            OperandSize::Word => Register::AX,
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Register::*;

        match self {
            AL => write!(f, "al"),
            CL => write!(f, "cl"),
            DL => write!(f, "dl"),
            BL => write!(f, "bl"),
            AH => write!(f, "ah"),
            CH => write!(f, "ch"),
            DH => write!(f, "dh"),
            BH => write!(f, "bh"),

            AX => write!(f, "ax"),
            CX => write!(f, "cx"),
            DX => write!(f, "dx"),
            BX => write!(f, "bx"),
            SP => write!(f, "sp"),
            BP => write!(f, "bp"),
            SI => write!(f, "si"),
            DI => write!(f, "di"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    ES,
    CS,
    SS,
    DS,
}

impl Segment {
    /// Select a segment register from a 2-bit `sr` field.
    pub fn from_encoding(encoding: u8) -> Option<Self> {
        match encoding {
            0b00 => Some(Segment::ES),
            0b01 => Some(Segment::CS),
            0b10 => Some(Segment::SS),
            0b11 => Some(Segment::DS),
            _ => None,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Segment::*;

        match self {
            ES => write!(f, "es"),
            CS => write!(f, "cs"),
            SS => write!(f, "ss"),
            DS => write!(f, "ds"),
        }
    }
}
