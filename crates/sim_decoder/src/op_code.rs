use sim_instruction::MovOpCode;

/// Find the MOV encoding that the first byte of an instruction belongs to.
pub fn classify(byte: u8) -> Option<MovOpCode> {
    MovOpCode::PRIORITY
        .iter()
        .copied()
        .find(|op_code| op_code.matches(byte))
}
