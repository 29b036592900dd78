use crate::{EffectiveAddressBase, Immediate, Instruction, Memory, Mov, Operand};
use std::fmt::{Display, Formatter};

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Mov(mov) => mov.fmt(f),
        }
    }
}

impl Display for Mov {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "mov {}, ", self.destination)?;

        // Nothing else tells the assembler how wide the store is.
        match (self.destination, self.source) {
            (Operand::Memory(_), Operand::Immediate(immediate)) => {
                write!(f, "{} {}", immediate.size(), immediate)
            }
            (_, source) => source.fmt(f),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(register) => register.fmt(f),
            Operand::Segment(segment) => segment.fmt(f),
            Operand::Memory(memory) => memory.fmt(f),
            Operand::Immediate(immediate) => immediate.fmt(f),
        }
    }
}

impl Display for EffectiveAddressBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, register) in self.registers().iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            register.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_direct() {
            return write!(f, "[{}]", self.displacement as u16);
        }

        write!(f, "[{}", self.base)?;
        match self.displacement {
            0 => {}
            d if d < 0 => write!(f, " - {}", (d as i32).abs())?,
            d => write!(f, " + {}", d)?,
        }
        write!(f, "]")
    }
}

impl Display for Immediate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
