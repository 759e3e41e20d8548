use flate2::write::ZlibEncoder;
use flate2::Compression as ZlibLevel;
use std::io::Write;

/// RECT with nbits=15: xmin=0, xmax=11000, ymin=0, ymax=8000 twips (550x400 px).
pub const STAGE_550X400: [u8; 9] = [0x78, 0x00, 0x05, 0x5f, 0x00, 0x00, 0x0f, 0xa0, 0x00];

/// Record with a short header when the payload allows it.
pub fn record(code: u16, payload: &[u8]) -> Vec<u8> {
    if payload.len() >= 63 {
        return long_record(code, payload);
    }
    let mut buf = ((code << 6) | payload.len() as u16).to_le_bytes().to_vec();
    buf.extend_from_slice(payload);
    buf
}

/// Record that always uses the 32-bit length form.
pub fn long_record(code: u16, payload: &[u8]) -> Vec<u8> {
    let mut buf = ((code << 6) | 0x3f).to_le_bytes().to_vec();
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

pub fn sprite(id: u16, frames: u16, control_tags: &[u8]) -> Vec<u8> {
    let mut payload = id.to_le_bytes().to_vec();
    payload.extend_from_slice(&frames.to_le_bytes());
    payload.extend_from_slice(control_tags);
    record(39, &payload)
}

/// Stage RECT, 12 fps, one frame, then `tags`.
pub fn movie_body(tags: &[u8]) -> Vec<u8> {
    let mut body = STAGE_550X400.to_vec();
    body.extend_from_slice(&[0x00, 0x0c, 0x01, 0x00]);
    body.extend_from_slice(tags);
    body
}

pub fn fws(version: u8, body: &[u8]) -> Vec<u8> {
    let mut file = b"FWS".to_vec();
    file.push(version);
    file.extend_from_slice(&((body.len() + 8) as u32).to_le_bytes());
    file.extend_from_slice(body);
    file
}

pub fn cws(version: u8, body: &[u8]) -> Vec<u8> {
    let mut file = b"CWS".to_vec();
    file.push(version);
    file.extend_from_slice(&((body.len() + 8) as u32).to_le_bytes());
    let mut encoder = ZlibEncoder::new(Vec::new(), ZlibLevel::default());
    encoder.write_all(body).unwrap();
    file.extend_from_slice(&encoder.finish().unwrap());
    file
}

/// Sprite (id 1, one frame: ShowFrame, End), then ShowFrame, End at the root.
pub fn sample_tags() -> Vec<u8> {
    let inner = [record(1, &[]), record(0, &[])].concat();
    [sprite(1, 1, &inner), record(1, &[]), record(0, &[])].concat()
}
