use crate::traits::ReadExt;
use crate::{DecodeError, Result};
use sim_instruction::{EffectiveAddressBase, Memory, Operand, OperandSize, Register};

const MODE_MEMORY: u8 = 0b00;
const MODE_MEMORY_DISPLACEMENT_BYTE: u8 = 0b01;
const MODE_MEMORY_DISPLACEMENT_WORD: u8 = 0b10;
const MODE_REGISTER: u8 = 0b11;

/// `mod=00` with this `r/m` is a direct address instead of `[bp]`.
const RM_DIRECT_ADDRESS: u8 = 0b110;

/// The fields of a mod-reg-r/m byte.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ModRegRM {
    pub mode: u8,
    pub reg: u8,
    pub rm: u8,
}

impl ModRegRM {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            mode: byte >> 6,
            reg: (byte >> 3) & 0b111,
            rm: byte & 0b111,
        }
    }

    pub fn read(reader: &mut impl ReadExt) -> Result<Self> {
        Ok(Self::from_byte(reader.read_u8()?))
    }

    /// The register selected by the `reg` field.
    pub fn register(&self, operand_size: OperandSize) -> Result<Register> {
        Register::from_encoding(self.reg, operand_size)
            .ok_or(DecodeError::InvalidRegisterEncoding(self.reg))
    }

    /// The operand selected by the `mod` and `r/m` fields. Reads the displacement, if there is one.
    pub fn register_or_memory(
        &self,
        operand_size: OperandSize,
        reader: &mut impl ReadExt,
    ) -> Result<Operand> {
        if self.mode == MODE_REGISTER {
            return Register::from_encoding(self.rm, operand_size)
                .map(Operand::Register)
                .ok_or(DecodeError::InvalidRegisterEncoding(self.rm));
        }

        let memory = if self.mode == MODE_MEMORY && self.rm == RM_DIRECT_ADDRESS {
            Memory::direct(reader.read_u16()?)
        } else {
            let base = EffectiveAddressBase::from_encoding(self.rm)
                .ok_or(DecodeError::InvalidRegisterEncoding(self.rm))?;

            let displacement = match self.mode {
                MODE_MEMORY => 0,
                MODE_MEMORY_DISPLACEMENT_BYTE => reader.read_displacement(OperandSize::Byte)?,
                MODE_MEMORY_DISPLACEMENT_WORD => reader.read_displacement(OperandSize::Word)?,
                mode => return Err(DecodeError::InvalidModEncoding(mode)),
            };

            Memory::new(base, displacement)
        };

        Ok(Operand::Memory(memory))
    }
}
