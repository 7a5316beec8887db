use super::classifier::InferenceError;
use image::imageops::FilterType;

/// A decoded image ready for the model: `size`×`size` RGB, values scaled to
/// `[0, 1]`, laid out row-major as NHWC with a batch of one.
#[derive(Debug, Clone)]
pub struct ImageTensor {
    size: u32,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Decode any supported format, drop alpha/convert grayscale to RGB and
    /// resize (bicubic, aspect ratio not preserved).
    pub fn from_bytes(bytes: &[u8], size: u32) -> Result<Self, InferenceError> {
        let decoded = image::load_from_memory(bytes)?;
        let resized = decoded
            .resize_exact(size, size, FilterType::CatmullRom)
            .to_rgb8();

        let data = resized
            .pixels()
            .flat_map(|p| p.0)
            .map(|channel| f32::from(channel) / 255.0)
            .collect();

        Ok(Self { size, data })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// `[batch, height, width, channels]`
    pub fn shape(&self) -> [usize; 4] {
        [1, self.size as usize, self.size as usize, 3]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
