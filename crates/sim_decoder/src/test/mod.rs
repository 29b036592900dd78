use crate::{decode_instruction, DecodeError, Decoder};
use sim_instruction::{
    EffectiveAddressBase, Immediate, Instruction, Memory, Mov, MovOpCode, Operand, Register,
    Segment,
};

fn mov(
    op_code: MovOpCode,
    destination: impl Into<Operand>,
    source: impl Into<Operand>,
) -> Instruction {
    Instruction::Mov(Mov::new(op_code, destination.into(), source.into()))
}

fn disassemble(bytes: &[u8]) -> Vec<String> {
    Decoder::new(bytes)
        .map(|instruction| instruction.unwrap().to_string())
        .collect()
}

#[test]
fn register_to_register() {
    assert_eq!(
        decode_instruction(&[0x89, 0xD9]).unwrap(),
        mov(MovOpCode::RegisterMemoryToFromRegister, Register::CX, Register::BX)
    );
    // Same registers, d = 1.
    assert_eq!(
        decode_instruction(&[0x8B, 0xD9]).unwrap(),
        mov(MovOpCode::RegisterMemoryToFromRegister, Register::BX, Register::CX)
    );
    assert_eq!(
        decode_instruction(&[0x88, 0xC6]).unwrap(),
        mov(MovOpCode::RegisterMemoryToFromRegister, Register::DH, Register::AL)
    );
}

#[test]
fn memory_to_register() {
    assert_eq!(
        decode_instruction(&[0x8B, 0x41, 0xDB]).unwrap(),
        mov(
            MovOpCode::RegisterMemoryToFromRegister,
            Register::AX,
            Memory::new(EffectiveAddressBase::BxDi, -37)
        )
    );
}

#[test]
fn register_to_memory() {
    assert_eq!(
        decode_instruction(&[0x89, 0x8C, 0xD4, 0xFE]).unwrap(),
        mov(
            MovOpCode::RegisterMemoryToFromRegister,
            Memory::new(EffectiveAddressBase::Si, -300),
            Register::CX
        )
    );
}

#[test]
fn direct_address_is_not_bp() {
    assert_eq!(
        decode_instruction(&[0x8B, 0x2E, 0x05, 0x00]).unwrap(),
        mov(
            MovOpCode::RegisterMemoryToFromRegister,
            Register::BP,
            Memory::direct(5)
        )
    );
}

#[test]
fn immediate_to_register() {
    assert_eq!(
        decode_instruction(&[0xB1, 0x0C]).unwrap(),
        mov(MovOpCode::ImmediateToRegister, Register::CL, Immediate::Byte(12))
    );
    assert_eq!(
        decode_instruction(&[0xBA, 0x6C, 0x0F]).unwrap(),
        mov(MovOpCode::ImmediateToRegister, Register::DX, Immediate::Word(3948))
    );
}

#[test]
fn immediate_to_memory() {
    assert_eq!(
        decode_instruction(&[0xC6, 0x03, 0x07]).unwrap(),
        mov(
            MovOpCode::ImmediateToRegisterMemory,
            Memory::new(EffectiveAddressBase::BpDi, 0),
            Immediate::Byte(7)
        )
    );
    assert_eq!(
        decode_instruction(&[0xC7, 0x85, 0x85, 0x03, 0x5B, 0x01]).unwrap(),
        mov(
            MovOpCode::ImmediateToRegisterMemory,
            Memory::new(EffectiveAddressBase::Di, 901),
            Immediate::Word(347)
        )
    );
}

#[test]
fn accumulator() {
    assert_eq!(
        decode_instruction(&[0xA1, 0xFB, 0x09]).unwrap(),
        mov(MovOpCode::MemoryToAccumulator, Register::AX, Memory::direct(2555))
    );
    assert_eq!(
        decode_instruction(&[0xA2, 0x0F, 0x00]).unwrap(),
        mov(MovOpCode::AccumulatorToMemory, Memory::direct(15), Register::AL)
    );
}

#[test]
fn segment() {
    assert_eq!(
        decode_instruction(&[0x8E, 0xC0]).unwrap(),
        mov(MovOpCode::RegisterMemoryToSegment, Segment::ES, Register::AX)
    );
    assert_eq!(
        decode_instruction(&[0x8C, 0xDB]).unwrap(),
        mov(MovOpCode::SegmentToRegisterMemory, Register::BX, Segment::DS)
    );
    assert_eq!(
        decode_instruction(&[0x8E, 0x1F]).unwrap(),
        mov(
            MovOpCode::RegisterMemoryToSegment,
            Segment::DS,
            Memory::new(EffectiveAddressBase::Bx, 0)
        )
    );
}

#[test]
fn register_listing() {
    let bytes = [
        0x89, 0xD9, 0x88, 0xE5, 0x89, 0xDA, 0x89, 0xDE, 0x89, 0xFB, 0x88, 0xC8, 0x88, 0xED, 0x89,
        0xC3, 0x89, 0xF3, 0x89, 0xFC, 0x89, 0xC5,
    ];
    assert_eq!(
        disassemble(&bytes),
        [
            "mov cx, bx",
            "mov ch, ah",
            "mov dx, bx",
            "mov si, bx",
            "mov bx, di",
            "mov al, cl",
            "mov ch, ch",
            "mov bx, ax",
            "mov bx, si",
            "mov sp, di",
            "mov bp, ax",
        ]
    );
}

#[test]
fn more_movs_listing() {
    let bytes = [
        0x89, 0xDE, 0x88, 0xC6, 0xB1, 0x0C, 0xB5, 0xF4, 0xB9, 0x0C, 0x00, 0xB9, 0xF4, 0xFF, 0xBA,
        0x6C, 0x0F, 0xBA, 0x94, 0xF0, 0x8A, 0x00, 0x8B, 0x1B, 0x8B, 0x56, 0x00, 0x8A, 0x60, 0x04,
        0x8A, 0x80, 0x87, 0x13, 0x89, 0x09, 0x88, 0x0A, 0x88, 0x6E, 0x00,
    ];
    assert_eq!(
        disassemble(&bytes),
        [
            "mov si, bx",
            "mov dh, al",
            "mov cl, 12",
            "mov ch, 244",
            "mov cx, 12",
            "mov cx, 65524",
            "mov dx, 3948",
            "mov dx, 61588",
            "mov al, [bx + si]",
            "mov bx, [bp + di]",
            "mov dx, [bp]",
            "mov ah, [bx + si + 4]",
            "mov al, [bx + si + 4999]",
            "mov [bx + di], cx",
            "mov [bp + si], cl",
            "mov [bp], ch",
        ]
    );
}

#[test]
fn challenge_movs_listing() {
    let bytes = [
        0x8B, 0x41, 0xDB, 0x89, 0x8C, 0xD4, 0xFE, 0x8B, 0x57, 0xE0, 0xC6, 0x03, 0x07, 0xC7, 0x85,
        0x85, 0x03, 0x5B, 0x01, 0x8B, 0x2E, 0x05, 0x00, 0x8B, 0x1E, 0x82, 0x0D, 0xA1, 0xFB, 0x09,
        0xA1, 0x10, 0x00, 0xA3, 0xFA, 0x09, 0xA3, 0x0F, 0x00,
    ];
    assert_eq!(
        disassemble(&bytes),
        [
            "mov ax, [bx + di - 37]",
            "mov [si - 300], cx",
            "mov dx, [bx - 32]",
            "mov [bp + di], byte 7",
            "mov [di + 901], word 347",
            "mov bp, [5]",
            "mov bx, [3458]",
            "mov ax, [2555]",
            "mov ax, [16]",
            "mov [2554], ax",
            "mov [15], ax",
        ]
    );
}

#[test]
fn empty_stream() {
    let mut decoder = Decoder::new(&[0u8; 0][..]);
    assert!(decoder.next_instruction().unwrap().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn truncated_last_instruction() {
    // mov cx, bx | mov cx, <missing high byte>
    let mut decoder = Decoder::new(&[0x89u8, 0xD9, 0xB9, 0x0C][..]);

    assert_eq!(decoder.next().unwrap().unwrap().to_string(), "mov cx, bx");
    assert!(matches!(
        decoder.next(),
        Some(Err(DecodeError::Truncated { offset: 2 }))
    ));
    assert!(decoder.next().is_none());
}

#[test]
fn truncated_displacement() {
    assert!(matches!(
        decode_instruction(&[0x8A, 0x80, 0x87]),
        Err(DecodeError::Truncated { offset: 0 })
    ));
    assert!(matches!(
        decode_instruction(&[0x8B]),
        Err(DecodeError::Truncated { offset: 0 })
    ));
}

#[test]
fn unsupported_op_code() {
    // add ax, bx
    let mut decoder = Decoder::new(&[0x89u8, 0xD9, 0x01, 0xD8][..]);
    assert!(decoder.next().unwrap().is_ok());
    match decoder.next() {
        Some(Err(err @ DecodeError::UnsupportedOpCode { op_code: 0x01, offset: 2 })) => {
            assert!(!err.is_internal())
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(decoder.next().is_none());
}

#[test]
fn immediate_to_memory_requires_reg_zero() {
    assert!(matches!(
        decode_instruction(&[0xC6, 0x0B, 0x07]),
        Err(DecodeError::UnsupportedOpCode { op_code: 0xC6, offset: 0 })
    ));
}

#[test]
fn invalid_segment() {
    assert!(matches!(
        decode_instruction(&[0x8E, 0x20]),
        Err(DecodeError::InvalidSegmentEncoding(0b100))
    ));
}

#[test]
fn bytes_and_offsets() {
    let mut decoder = Decoder::new(&[0xB1u8, 0x0C, 0x8B, 0x41, 0xDB][..]);

    decoder.next_instruction().unwrap();
    assert_eq!(decoder.last_offset(), 0);
    assert_eq!(decoder.last_bytes(), &[0xB1, 0x0C]);

    decoder.next_instruction().unwrap();
    assert_eq!(decoder.last_offset(), 2);
    assert_eq!(decoder.last_bytes(), &[0x8B, 0x41, 0xDB]);
    assert_eq!(decoder.position(), 5);
}
