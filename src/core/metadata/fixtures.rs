//! Minimal JPEG files with hand-built EXIF segments for tests.

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_EXIF_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;

fn entry(out: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&value);
}

fn wrap_in_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let length = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&length.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// JPEG whose EXIF IFD carries `DateTimeOriginal = date_time`
pub(crate) fn jpeg_with_capture_time(date_time: &str) -> Vec<u8> {
    let mut value = date_time.as_bytes().to_vec();
    value.push(0);
    // Keep the value out of line
    while value.len() < 5 {
        value.push(0);
    }

    // Header (8) + IFD0 (18) + Exif IFD (18) puts the string at 44
    let exif_ifd_offset: u32 = 26;
    let value_offset: u32 = 44;

    let mut tiff = b"II*\0".to_vec();
    tiff.extend_from_slice(&8u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut tiff, TAG_EXIF_POINTER, TYPE_LONG, 1, exif_ifd_offset.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    entry(
        &mut tiff,
        TAG_DATE_TIME_ORIGINAL,
        TYPE_ASCII,
        value.len() as u32,
        value_offset.to_le_bytes(),
    );
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(&value);
    wrap_in_jpeg(&tiff)
}

/// JPEG with a valid EXIF segment that only records orientation
pub(crate) fn jpeg_without_capture_time() -> Vec<u8> {
    let mut tiff = b"II*\0".to_vec();
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut tiff, TAG_ORIENTATION, TYPE_SHORT, 1, [1, 0, 0, 0]);
    tiff.extend_from_slice(&0u32.to_le_bytes());
    wrap_in_jpeg(&tiff)
}

/// JPEG with no EXIF segment at all
pub(crate) fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
