//! This crate holds the structs and enums that represent a decoded 8086 instruction, and renders
//! them as NASM style assembly text.

mod display;
mod instruction;
mod operand;
mod register;

pub use instruction::{Instruction, Mov, MovOpCode};
pub use operand::{EffectiveAddressBase, Immediate, Memory, Operand};
pub use register::{OperandSize, Register, Segment};
