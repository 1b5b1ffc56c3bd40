//! Tests for PPM encoding.

use renderer::{create_ppm, ppm_header, write_ppm, RenderError};
use test_utils::scratch_dir;

#[test]
fn test_header_format() {
    assert_eq!(ppm_header(207, 90), "P6\n207 90\n255\n");
}

#[test]
fn test_create_ppm_layout() {
    let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
    let ppm = create_ppm(&pixels, 2, 2).unwrap();

    let header = b"P6\n2 2\n255\n";
    assert_eq!(&ppm[..header.len()], header);
    assert_eq!(&ppm[header.len()..], &pixels);
}

#[test]
fn test_write_ppm_to_sink() {
    let mut sink: Vec<u8> = Vec::new();
    write_ppm(&mut sink, &[1, 2, 3], 1, 1).unwrap();
    assert_eq!(sink, b"P6\n1 1\n255\n\x01\x02\x03");
}

#[test]
fn test_dimension_mismatch() {
    let err = create_ppm(&[0u8; 5], 1, 2).unwrap_err();
    match err {
        RenderError::DimensionMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 6);
            assert_eq!(actual, 5);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_write_to_file() {
    let dir = scratch_dir();
    let path = dir.path().join("out.pnm");
    let mut file = std::fs::File::create(&path).unwrap();
    write_ppm(&mut file, &[7u8; 3 * 4 * 3], 4, 3).unwrap();
    drop(file);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n4 3\n255\n"));
    assert_eq!(bytes.len(), "P6\n4 3\n255\n".len() + 36);
}
