use crate::reader::{ByteCursor, Fill};
use crate::{DecodeError, Result};
use sim_instruction::{Immediate, OperandSize};
use std::io::Read;

pub(crate) trait OpCodeExt {
    /// Width flag in bit 0.
    fn operand_size(self) -> OperandSize;

    /// Direction flag in bit 1; set when the `reg` field is the destination.
    fn reg_is_destination(self) -> bool;
}

impl OpCodeExt for u8 {
    fn operand_size(self) -> OperandSize {
        OperandSize::from_width_bit(self)
    }

    fn reg_is_destination(self) -> bool {
        (self >> 1) & 0b1 == 1
    }
}

pub(crate) trait ReadExt {
    /// Offset in the stream of the instruction being read.
    fn offset(&self) -> u64;

    fn read_u8(&mut self) -> Result<u8>;

    fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes([self.read_u8()?, self.read_u8()?]))
    }

    fn read_immediate(&mut self, operand_size: OperandSize) -> Result<Immediate> {
        Ok(match operand_size {
            OperandSize::Byte => Immediate::Byte(self.read_u8()?),
            OperandSize::Word => Immediate::Word(self.read_u16()?),
        })
    }

    /// Read a displacement and sign-extend it to 16 bits.
    fn read_displacement(&mut self, operand_size: OperandSize) -> Result<i16> {
        Ok(match operand_size {
            OperandSize::Byte => self.read_u8()? as i8 as i16,
            OperandSize::Word => self.read_u16()? as i16,
        })
    }
}

impl<R: Read> ReadExt for ByteCursor<R> {
    fn offset(&self) -> u64 {
        self.start()
    }

    fn read_u8(&mut self) -> Result<u8> {
        match self.fill(1)? {
            Fill::Complete => Ok(self.bytes()[self.bytes().len() - 1]),
            // Only the first byte of an instruction may meet a clean end.
            Fill::End | Fill::Truncated => Err(DecodeError::Truncated {
                offset: self.offset(),
            }),
        }
    }
}
