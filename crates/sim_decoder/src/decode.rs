use crate::mod_reg_rm::ModRegRM;
use crate::op_code::classify;
use crate::reader::{ByteCursor, Fill};
use crate::traits::{OpCodeExt, ReadExt};
use crate::{DecodeError, Result};
use sim_instruction::{
    Instruction, Memory, Mov, MovOpCode, Operand, OperandSize, Register, Segment,
};
use std::io::Read;
use tracing::debug;

// 1 0 0 0 1 0 d w | mod reg r/m
fn register_memory_to_from_register(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let operand_size = op_code.operand_size();
    let mrrm = ModRegRM::read(it)?;

    let reg = Operand::Register(mrrm.register(operand_size)?);
    let reg_mem = mrrm.register_or_memory(operand_size, it)?;

    let (destination, source) = if op_code.reg_is_destination() {
        (reg, reg_mem)
    } else {
        (reg_mem, reg)
    };

    Ok(Mov::new(
        MovOpCode::RegisterMemoryToFromRegister,
        destination,
        source,
    ))
}

// 1 1 0 0 0 1 1 w | mod 0 0 0 r/m | data | data if w = 1
fn immediate_to_register_memory(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let operand_size = op_code.operand_size();
    let mrrm = ModRegRM::read(it)?;

    // The other values of the reg field are not defined for this op code.
    if mrrm.reg != 0b000 {
        return Err(DecodeError::UnsupportedOpCode {
            op_code,
            offset: it.offset(),
        });
    }

    // The displacement comes before the data.
    let destination = mrrm.register_or_memory(operand_size, it)?;
    let source = it.read_immediate(operand_size)?.into();

    Ok(Mov::new(
        MovOpCode::ImmediateToRegisterMemory,
        destination,
        source,
    ))
}

// 1 0 1 1 w reg | data | data if w = 1
fn immediate_to_register(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let operand_size = OperandSize::from_width_bit(op_code >> 3);
    let encoding = op_code & 0b111;
    let register = Register::from_encoding(encoding, operand_size)
        .ok_or(DecodeError::InvalidRegisterEncoding(encoding))?;

    Ok(Mov::new(
        MovOpCode::ImmediateToRegister,
        register.into(),
        it.read_immediate(operand_size)?.into(),
    ))
}

// 1 0 1 0 0 0 0 w | addr-lo | addr-hi
fn memory_to_accumulator(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let accumulator = Register::accumulator(op_code.operand_size());
    let address = it.read_u16()?;

    Ok(Mov::new(
        MovOpCode::MemoryToAccumulator,
        accumulator.into(),
        Memory::direct(address).into(),
    ))
}

// 1 0 1 0 0 0 1 w | addr-lo | addr-hi
fn accumulator_to_memory(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let accumulator = Register::accumulator(op_code.operand_size());
    let address = it.read_u16()?;

    Ok(Mov::new(
        MovOpCode::AccumulatorToMemory,
        Memory::direct(address).into(),
        accumulator.into(),
    ))
}

// x x x x x x 1 x | mod 0 sr r/m
fn register_memory_and_segment(op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    let mrrm = ModRegRM::read(it)?;
    let segment =
        Segment::from_encoding(mrrm.reg).ok_or(DecodeError::InvalidSegmentEncoding(mrrm.reg))?;
    let reg_mem = mrrm.register_or_memory(OperandSize::Word, it)?;

    Ok(if op_code.reg_is_destination() {
        Mov::new(MovOpCode::RegisterMemoryToSegment, segment.into(), reg_mem)
    } else {
        Mov::new(MovOpCode::SegmentToRegisterMemory, reg_mem, segment.into())
    })
}

fn decode_mov(mov_op_code: MovOpCode, op_code: u8, it: &mut impl ReadExt) -> Result<Mov> {
    match mov_op_code {
        MovOpCode::RegisterMemoryToFromRegister => register_memory_to_from_register(op_code, it),
        MovOpCode::ImmediateToRegisterMemory => immediate_to_register_memory(op_code, it),
        MovOpCode::ImmediateToRegister => immediate_to_register(op_code, it),
        MovOpCode::MemoryToAccumulator => memory_to_accumulator(op_code, it),
        MovOpCode::AccumulatorToMemory => accumulator_to_memory(op_code, it),
        MovOpCode::RegisterMemoryToSegment | MovOpCode::SegmentToRegisterMemory => {
            register_memory_and_segment(op_code, it)
        }
    }
}

/// Decodes instructions one at a time from a stream of machine code.
///
/// ```rust
/// use sim_decoder::Decoder;
///
/// let decoder = Decoder::new(&[0x89u8, 0xD9, 0xB1, 0x0C][..]);
/// let lines = decoder
///     .map(|i| i.map(|i| i.to_string()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(lines, ["mov cx, bx", "mov cl, 12"]);
/// ```
pub struct Decoder<R> {
    cursor: ByteCursor<R>,
    finished: bool,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            cursor: ByteCursor::new(reader),
            finished: false,
        }
    }

    /// Decode the next instruction. Returns `Ok(None)` if the stream ended cleanly, i.e. before
    /// the first byte of an instruction.
    pub fn next_instruction(&mut self) -> Result<Option<Instruction>> {
        self.cursor.begin();
        let offset = self.cursor.start();

        match self.cursor.fill(1)? {
            Fill::Complete => {}
            Fill::End => return Ok(None),
            Fill::Truncated => return Err(DecodeError::Truncated { offset }),
        }

        let op_code = self.cursor.bytes()[0];
        let mov_op_code =
            classify(op_code).ok_or(DecodeError::UnsupportedOpCode { op_code, offset })?;

        debug!("{:#06x}: {:#04x} is {:?}", offset, op_code, mov_op_code);

        let instruction = Instruction::Mov(decode_mov(mov_op_code, op_code, &mut self.cursor)?);

        debug!(
            "{:#06x}: {:02X?} => {}",
            offset,
            self.cursor.bytes(),
            instruction
        );

        Ok(Some(instruction))
    }

    /// Raw bytes of the instruction that was decoded last.
    pub fn last_bytes(&self) -> &[u8] {
        self.cursor.bytes()
    }

    /// Offset in the stream of the instruction that was decoded last.
    pub fn last_offset(&self) -> u64 {
        self.cursor.start()
    }

    /// Number of bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = self.next_instruction().transpose();
        self.finished = !matches!(next, Some(Ok(_)));
        next
    }
}

impl<R: Read> std::iter::FusedIterator for Decoder<R> {}

/// Decode a single instruction from the start of `bytes`.
pub fn decode_instruction(bytes: &[u8]) -> Result<Instruction> {
    Decoder::new(bytes)
        .next_instruction()?
        .ok_or(DecodeError::Truncated { offset: 0 })
}
