// These macros are included at the top of lib.rs and are usable
// throughout the crate

macro_rules! write_hex {
    ($bytes:expr, $output:expr, $len:expr) => {{
        if $output.len() < $len * 2 {
            Err($crate::InnerError::BufferTooSmall($len * 2).into())
        } else {
            const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
            for (i, byte) in $bytes.iter().enumerate() {
                $output[i * 2] = HEX_CHARS[(byte >> 4) as usize];
                $output[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
            }
            Ok(())
        }
    }};
}

macro_rules! read_hex {
    ($input:expr, $output:expr, $len:expr) => {{
        fn nybble(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                _ => None,
            }
        }
        if $input.len() != $len * 2 {
            Err($crate::InnerError::BadHexInput.into())
        } else {
            let mut result: Result<(), $crate::Error> = Ok(());
            for i in 0..$len {
                match (nybble($input[i * 2]), nybble($input[i * 2 + 1])) {
                    (Some(hi), Some(lo)) => $output[i] = (hi << 4) | lo,
                    _ => {
                        result = Err($crate::InnerError::BadHexInput.into());
                        break;
                    }
                }
            }
            result
        }
    }};
}
