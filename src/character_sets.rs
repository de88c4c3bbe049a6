/// Scheme character classification
/// Returns: 0=not a scheme byte, 1=ASCII letter (may start a scheme), 2=continuation only
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'.' as usize] = 2;
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;

    table
};

/// Check if a byte can start a scheme (ASCII letter)
pub fn is_scheme_start_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] == 1
}

/// Check if a byte can appear after the first scheme byte
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] != 0
}
