//! Image resource registry

use crate::surface::ImageHandle;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// A drawable image plus its load-completion flag.
///
/// Loading happens outside the engine; sprites holding a not-yet-loaded
/// resource silently skip drawing and retry next frame, so a slow load shows
/// as a briefly invisible entity rather than an error.
#[derive(Debug)]
pub struct ImageResource {
    handle: ImageHandle,
    loaded: Cell<bool>,
}

impl ImageResource {
    /// A resource whose image is still loading
    pub fn pending(handle: ImageHandle) -> Self {
        Self {
            handle,
            loaded: Cell::new(false),
        }
    }

    /// A resource that is immediately usable
    pub fn loaded(handle: ImageHandle) -> Self {
        Self {
            handle,
            loaded: Cell::new(true),
        }
    }

    pub fn handle(&self) -> ImageHandle {
        self.handle
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    /// Flip the load flag once the host finishes decoding
    pub fn mark_loaded(&self) {
        self.loaded.set(true);
    }
}

/// Key-addressed registry of shared image resources
#[derive(Debug, Default)]
pub struct ResourceLibrary {
    images: HashMap<String, Rc<ImageResource>>,
}

impl ResourceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pending resource under `key`, returning the shared handle
    pub fn insert(&mut self, key: impl Into<String>, handle: ImageHandle) -> Rc<ImageResource> {
        let resource = Rc::new(ImageResource::pending(handle));
        self.images.insert(key.into(), Rc::clone(&resource));
        resource
    }

    pub fn get(&self, key: &str) -> Option<Rc<ImageResource>> {
        self.images.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// True once every registered image has finished loading
    pub fn all_loaded(&self) -> bool {
        self.images.values().all(|res| res.is_loaded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_then_loaded() {
        let resource = ImageResource::pending(ImageHandle(7));
        assert!(!resource.is_loaded());
        resource.mark_loaded();
        assert!(resource.is_loaded());
        assert_eq!(resource.handle(), ImageHandle(7));
    }

    #[test]
    fn library_tracks_all_loaded() {
        let mut library = ResourceLibrary::new();
        let hero = library.insert("hero", ImageHandle(1));
        let shadow = library.insert("shadow", ImageHandle(2));
        assert!(!library.all_loaded());

        hero.mark_loaded();
        assert!(!library.all_loaded());

        shadow.mark_loaded();
        assert!(library.all_loaded());
    }

    #[test]
    fn get_shares_the_same_resource() {
        let mut library = ResourceLibrary::new();
        library.insert("rod", ImageHandle(3));

        let held = library.get("rod").unwrap();
        held.mark_loaded();
        assert!(library.get("rod").unwrap().is_loaded());
        assert!(library.get("missing").is_none());
    }
}
