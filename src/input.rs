use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::{BufRead, Cursor, IsTerminal, Read, Seek};
use std::path::{Path, PathBuf};

use crate::error::ClassifyError;

/// File extensions the upload surface admits
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// An image waiting to be decoded: an uploaded file or a camera snapshot
#[derive(Debug, Clone)]
pub enum ImageInput {
    File(PathBuf),
    Snapshot { name: String, bytes: Vec<u8> },
}

impl ImageInput {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn snapshot(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Snapshot {
            name: name.into(),
            bytes,
        }
    }

    /// Display name used in rendered output
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Snapshot { name, .. } => name.clone(),
        }
    }

    /// Short name suitable for derived file names
    pub fn stem(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string()),
            Self::Snapshot { name, .. } => name.replace(' ', "-"),
        }
    }

    /// Check the format and decode into a bitmap.
    ///
    /// Uploaded files are admitted by extension; the decoder is always
    /// picked from the content, which must be JPEG or PNG.
    pub fn decode(&self) -> Result<DynamicImage, ClassifyError> {
        match self {
            Self::File(path) => {
                if !has_accepted_extension(path) {
                    return Err(ClassifyError::UnsupportedFormat { name: self.name() });
                }

                let reader = ImageReader::open(path).map_err(|e| self.decode_error(e.into()))?;
                self.decode_sniffed(reader)
            }
            Self::Snapshot { bytes, .. } => {
                self.decode_sniffed(ImageReader::new(Cursor::new(bytes.as_slice())))
            }
        }
    }

    fn decode_sniffed<R: BufRead + Seek>(
        &self,
        reader: ImageReader<R>,
    ) -> Result<DynamicImage, ClassifyError> {
        let reader = reader
            .with_guessed_format()
            .map_err(|e| self.decode_error(e.into()))?;

        match reader.format() {
            Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => {}
            _ => return Err(ClassifyError::UnsupportedFormat { name: self.name() }),
        }

        reader.decode().map_err(|e| self.decode_error(e))
    }

    fn decode_error(&self, source: image::ImageError) -> ClassifyError {
        ClassifyError::Decode {
            name: self.name(),
            source,
        }
    }
}

pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Read one camera snapshot from `reader`.
/// Returns `None` when no bytes are available (nothing was captured).
pub fn read_snapshot(mut reader: impl Read, name: &str) -> std::io::Result<Option<ImageInput>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageInput::snapshot(name, bytes)))
}

/// Read a snapshot a camera tool wrote to `path`, whatever its file name.
/// An empty file means nothing was captured.
pub fn read_snapshot_file(path: &Path) -> std::io::Result<Option<ImageInput>> {
    let file = std::fs::File::open(path)?;
    read_snapshot(file, &path.display().to_string())
}

/// Like [`read_snapshot`], but an interactive terminal counts as no capture
/// instead of blocking until EOF
pub fn read_piped_snapshot<R: Read + IsTerminal>(
    reader: R,
    name: &str,
) -> std::io::Result<Option<ImageInput>> {
    if reader.is_terminal() {
        return Ok(None);
    }

    read_snapshot(reader, name)
}
