//! Illustration loading
//!
//! Story content refers to pictures through [`ImageId`] handles handed out by
//! an [`ImageManifest`]. Once the SDL renderer exists, the manifest is turned
//! into an [`ImageLibrary`] of textures. Any picture that can't be read or
//! decoded stops start-up; nothing is loaded mid-session.

use crate::error::GameError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::path::{Path, PathBuf};

/// Opaque handle to an illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// List of image files the story needs, resolved against an asset root
#[derive(Debug, Clone)]
pub struct ImageManifest {
    root: PathBuf,
    paths: Vec<PathBuf>,
}

impl ImageManifest {
    pub fn new(root: impl AsRef<Path>) -> Self {
        ImageManifest {
            root: root.as_ref().to_path_buf(),
            paths: Vec::new(),
        }
    }

    /// Registers a file relative to the asset root
    ///
    /// Registering the same file twice returns the same handle.
    pub fn register(&mut self, file: impl AsRef<Path>) -> ImageId {
        let path = self.root.join(file);
        if let Some(index) = self.paths.iter().position(|p| *p == path) {
            return ImageId(index);
        }
        self.paths.push(path);
        ImageId(self.paths.len() - 1)
    }

    pub fn path(&self, id: ImageId) -> Option<&Path> {
        self.paths.get(id.0).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImageId, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (ImageId(i), p.as_path()))
    }
}

/// Decoded textures, indexed by [`ImageId`]
pub struct ImageLibrary<'a> {
    textures: Vec<Texture<'a>>,
}

impl<'a> ImageLibrary<'a> {
    /// Loads every image in the manifest
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        manifest: &ImageManifest,
    ) -> Result<Self, GameError> {
        let mut textures = Vec::with_capacity(manifest.len());

        for (_, path) in manifest.iter() {
            let texture = texture_creator
                .load_texture(path)
                .map_err(|reason| GameError::Asset {
                    path: path.to_path_buf(),
                    reason,
                })?;
            log::debug!("Loaded image {}", path.display());
            textures.push(texture);
        }

        Ok(ImageLibrary { textures })
    }

    pub fn texture(&self, id: ImageId) -> Option<&Texture<'a>> {
        self.textures.get(id.0)
    }

    /// Pixel dimensions of an image
    pub fn size(&self, id: ImageId) -> Option<(u32, u32)> {
        self.texture(id).map(|texture| {
            let query = texture.query();
            (query.width, query.height)
        })
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}
