use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::path::Path;

pub fn save_png(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
    let img = RgbImage::from_raw(buffer.width(), buffer.height(), buffer.buffer().clone())
        .expect("pixel buffer length matches its dimensions");

    img.save_with_format(filepath, ImageFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("fractal_zoomer_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_saved_png_round_trips() {
        let buffer =
            PixelBuffer::from_data(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9])
                .unwrap();
        let path = temp_path("save_png.png");

        save_png(&buffer, &path).unwrap();

        let reopened = image::open(&path).unwrap().into_rgb8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reopened.width(), 2);
        assert_eq!(reopened.height(), 2);
        assert_eq!(reopened.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(reopened.get_pixel(1, 1).0, [9, 9, 9]);
    }
}
