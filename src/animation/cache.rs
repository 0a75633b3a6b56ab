use crate::constants::canvas::{CANVAS_PX, TRACK_PX};
use crate::error::AppError;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage, imageops};
use tracing::info;

/// Fixed-length sequence of precomputed animation frames.
///
/// Each frame composites the scaled brand icon (base layer, centered on an
/// opaque black canvas) with the track icon rotated by `i * (360 / F)`
/// degrees about the canvas center. Frame generation is a pure function of
/// (source images, index, frame count); after construction the sequence is
/// read-only and shared by the render path without copying.
#[derive(Debug, Clone)]
pub struct AnimationCache {
    frames: Vec<RgbaImage>,
}

impl AnimationCache {
    /// Decodes both source images from disk and precomputes all frames.
    ///
    /// # Arguments
    /// * `icon_path` - Brand icon drawn as the base layer
    /// * `track_path` - Track icon rotated on top of the base layer
    /// * `frame_count` - Number of frames in one full rotation
    ///
    /// # Errors
    /// * `AppError::AssetDecode` - Either image cannot be opened or decoded.
    ///   This is a fatal startup condition; the display has no purpose
    ///   without its frames, so callers must not fall back to a degraded
    ///   mode.
    /// * `AppError::Animation` - `frame_count` is zero
    pub fn load(icon_path: &str, track_path: &str, frame_count: usize) -> Result<Self, AppError> {
        let icon = image::open(icon_path).map_err(|e| AppError::asset_decode(icon_path, e))?;
        let track = image::open(track_path).map_err(|e| AppError::asset_decode(track_path, e))?;

        info!(
            "Loaded spinner assets: icon {}x{}, track {}x{}",
            icon.width(),
            icon.height(),
            track.width(),
            track.height()
        );

        Self::from_images(&icon, &track, frame_count)
    }

    /// Precomputes all frames from already-decoded images.
    ///
    /// Kept separate from [`AnimationCache::load`] so tests can drive the
    /// frame pipeline with synthetic images instead of asset files.
    ///
    /// # Errors
    /// * `AppError::Animation` - `frame_count` is zero
    pub fn from_images(
        icon: &DynamicImage,
        track: &DynamicImage,
        frame_count: usize,
    ) -> Result<Self, AppError> {
        if frame_count == 0 {
            return Err(AppError::animation_error("frame count must be at least 1"));
        }

        let base = scale_onto_canvas(icon, CANVAS_PX);
        let track = track
            .resize(TRACK_PX, TRACK_PX, FilterType::Lanczos3)
            .to_rgba8();

        let frames = (0..frame_count)
            .map(|index| compose_frame(&base, &track, index, frame_count))
            .collect();

        Ok(Self { frames })
    }

    /// Number of frames in one full rotation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame at the given playback cursor. Indices wrap modulo the frame
    /// count, so a cursor that has looped keeps resolving to a valid frame.
    pub fn frame(&self, index: usize) -> &RgbaImage {
        &self.frames[index % self.frames.len()]
    }

    /// Canvas dimensions in pixels (width, height).
    pub fn canvas_size(&self) -> (u32, u32) {
        self.frames[0].dimensions()
    }
}

/// Scales the icon to fit the square canvas preserving aspect ratio and
/// centers it on an opaque black background.
fn scale_onto_canvas(icon: &DynamicImage, canvas_px: u32) -> RgbaImage {
    let scaled = icon
        .resize(canvas_px, canvas_px, FilterType::Lanczos3)
        .to_rgba8();
    let mut canvas = RgbaImage::from_pixel(canvas_px, canvas_px, Rgba([0, 0, 0, 255]));
    let x = (canvas_px - scaled.width()) / 2;
    let y = (canvas_px - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    canvas
}

/// Builds frame `index`: base layer plus the track icon rotated by
/// `index * (360 / frame_count)` degrees about the canvas center.
fn compose_frame(
    base: &RgbaImage,
    track: &RgbaImage,
    index: usize,
    frame_count: usize,
) -> RgbaImage {
    let mut frame = base.clone();
    let angle_deg = index as f32 * (360.0 / frame_count as f32);
    let rotated = rotate_about_center(track, angle_deg, base.width(), base.height());
    imageops::overlay(&mut frame, &rotated, 0, 0);
    frame
}

/// Renders `track` rotated by `angle_deg` onto a transparent canvas of the
/// given size, with the rotation pivot at the track's geometric center and
/// the center placed at the canvas center. Samples with bilinear filtering;
/// destination pixels that map outside the track stay transparent.
fn rotate_about_center(track: &RgbaImage, angle_deg: f32, width: u32, height: u32) -> RgbaImage {
    let theta = angle_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    let canvas_cx = width as f32 / 2.0;
    let canvas_cy = height as f32 / 2.0;
    let track_cx = track.width() as f32 / 2.0;
    let track_cy = track.height() as f32 / 2.0;

    let mut out = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            // pixel-center coordinates relative to the rotation pivot
            let dx = x as f32 + 0.5 - canvas_cx;
            let dy = y as f32 + 0.5 - canvas_cy;
            // inverse rotation maps the destination pixel into track space
            let sx = cos * dx + sin * dy + track_cx - 0.5;
            let sy = -sin * dx + cos * dy + track_cy - 0.5;
            let pixel = bilinear_sample(track, sx, sy);
            if pixel[3] > 0 {
                out.put_pixel(x, y, pixel);
            }
        }
    }
    out
}

/// Bilinear sample at fractional coordinates; out-of-bounds neighbors
/// contribute transparency.
fn bilinear_sample(img: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let fetch = |ix: i64, iy: i64| -> [f32; 4] {
        if ix < 0 || iy < 0 || ix >= i64::from(img.width()) || iy >= i64::from(img.height()) {
            [0.0; 4]
        } else {
            let p = img.get_pixel(ix as u32, iy as u32).0;
            [f32::from(p[0]), f32::from(p[1]), f32::from(p[2]), f32::from(p[3])]
        }
    };

    let p00 = fetch(x0 as i64, y0 as i64);
    let p10 = fetch(x0 as i64 + 1, y0 as i64);
    let p01 = fetch(x0 as i64, y0 as i64 + 1);
    let p11 = fetch(x0 as i64 + 1, y0 as i64 + 1);

    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let top = p00[i] * (1.0 - fx) + p10[i] * fx;
        let bottom = p01[i] * (1.0 - fx) + p11[i] * fx;
        *channel = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}
