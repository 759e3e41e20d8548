#![allow(dead_code)]

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;

/// xmin=0, xmax=11000, ymin=0, ymax=8000 twips.
pub const STAGE_550X400: [u8; 9] = [0x78, 0x00, 0x05, 0x5f, 0x00, 0x00, 0x0f, 0xa0, 0x00];

pub fn record(code: u16, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() < 63);
    let mut buf = ((code << 6) | payload.len() as u16).to_le_bytes().to_vec();
    buf.extend_from_slice(payload);
    buf
}

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

/// 550x400 stage, 12 fps, one frame, FileAttributes(AS3 + network), one sprite.
pub fn movie_body() -> Vec<u8> {
    let mut body = STAGE_550X400.to_vec();
    body.extend_from_slice(&[0x00, 0x0c, 0x01, 0x00]);
    body.extend_from_slice(&record(69, &0x0000_0009u32.to_le_bytes()));
    let inner = [record(1, &[]), record(0, &[])].concat();
    body.extend_from_slice(&sprite(1, 1, &inner));
    body.extend_from_slice(&record(1, &[]));
    body.extend_from_slice(&record(0, &[]));
    body
}

/// Poorly compressible filler.
pub fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

pub fn container(signature: &[u8; 3], version: u8, declared: u32, payload: &[u8]) -> Vec<u8> {
    let mut file = signature.to_vec();
    file.push(version);
    file.extend_from_slice(&declared.to_le_bytes());
    file.extend_from_slice(payload);
    file
}

pub fn fws(body: &[u8]) -> Vec<u8> {
    container(b"FWS", 10, (body.len() + 8) as u32, body)
}

pub fn cws(body: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(body).unwrap();
    container(b"CWS", 10, (body.len() + 8) as u32, &encoder.finish().unwrap())
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
