//! Exporting indexed frames as PPM snapshots

use crate::host::IndexedFrame;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Save a frame to a plain-text PPM file, upscaled by `scale`.
pub fn save_ppm(frame: &IndexedFrame, filename: &str, scale: usize) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut out = BufWriter::new(file);
    write_ppm(frame, &mut out, scale)?;
    out.flush()
}

/// Write a frame as P3 PPM.
pub fn write_ppm<W: Write>(frame: &IndexedFrame, out: &mut W, scale: usize) -> io::Result<()> {
    let (width, height) = frame.size();
    let scale = scale.max(1);
    let img_width = width * scale;
    let img_height = height * scale;

    writeln!(out, "P3")?;
    writeln!(out, "{} {}", img_width, img_height)?;
    writeln!(out, "255")?;

    let rgba = frame.to_rgba();
    for img_y in 0..img_height {
        for img_x in 0..img_width {
            let [r, g, b, _] = rgba[(img_y / scale) * width + img_x / scale];
            write!(out, "{} {} {} ", r, g, b)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_header_and_scale() {
        let mut frame = IndexedFrame::new(2, 1);
        frame.set(0, 0, 1);
        frame.set(1, 0, 2);
        let mut buf = Vec::new();
        write_ppm(&frame, &mut buf, 2).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("4 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(
            lines.next().map(str::trim_end),
            Some("255 255 255 255 255 255 255 33 33 255 33 33")
        );
    }
}
