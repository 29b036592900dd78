//! Decodes a stream of 8086 machine code into [Instruction]s. Only the MOV family of op codes is
//! supported.

mod decode;
mod errors;
mod mod_reg_rm;
mod op_code;
mod reader;
mod traits;

#[cfg(test)]
mod test;

pub use decode::{decode_instruction, Decoder};
pub use errors::{DecodeError, Result};
pub use op_code::classify;
pub use reader::{ByteCursor, Fill, MAX_INSTRUCTION_LEN};
pub use sim_instruction::Instruction;
