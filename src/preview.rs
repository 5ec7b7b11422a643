use crate::model::ImageFile;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Encode an image as a `data:` URL
pub fn data_url(image: &ImageFile) -> String {
    format!("data:{};base64,{}", image.mime, STANDARD.encode(&image.bytes))
}

/// State of the image preview element shown next to the file picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: Option<String>,
    pub visible: bool,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to the file picker changing: show the new image, or hide the
    /// preview when the selection was cleared.
    pub fn update(&mut self, image: Option<&ImageFile>) {
        match image {
            Some(image) => {
                self.src = Some(data_url(image));
                self.visible = true;
            }
            None => {
                self.src = None;
                self.visible = false;
            }
        }
    }

    /// Read `path`, show it, and hand the image back for submission
    pub async fn load(&mut self, path: impl AsRef<Path>) -> Result<ImageFile, std::io::Error> {
        let image = ImageFile::from_path(path).await?;
        self.update(Some(&image));
        Ok(image)
    }
}
