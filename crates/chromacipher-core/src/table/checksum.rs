pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn hex16(h: [u8; 16]) -> String {
    let mut s = String::with_capacity(32);
    for b in h {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
