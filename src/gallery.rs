use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference to an image (usually a site-relative URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Gallery needs at least one image")]
    Empty,
}

/// A non-empty, ordered set of images. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ImageRef>", into = "Vec<ImageRef>")]
pub struct ImageSet(Arc<[ImageRef]>);

impl ImageSet {
    pub fn new<I, T>(images: I) -> Result<Self, GalleryError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ImageRef>,
    {
        let images = images.into_iter().map(Into::into).collect::<Arc<[_]>>();
        if images.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self(images))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.0.get(index)
    }

    pub fn first(&self) -> &ImageRef {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }
}

impl TryFrom<Vec<ImageRef>> for ImageSet {
    type Error = GalleryError;

    fn try_from(value: Vec<ImageRef>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageSet> for Vec<ImageRef> {
    fn from(value: ImageSet) -> Self {
        value.0.to_vec()
    }
}

/// Furthest a zoomed image may be dragged from centre on either axis, in CSS
/// pixels.
pub const MAX_PAN: f64 = 800.0;

/// Translation applied to a zoomed image, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

/// Keys the viewer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// What a key press did to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the browser default should run.
    Ignored,
    Handled,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    images: ImageSet,
    index: usize,
    zoomed: bool,
    high_contrast: bool,
    pan: Pan,
}

impl Session {
    fn new(images: ImageSet) -> Self {
        Self {
            images,
            index: 0,
            zoomed: false,
            high_contrast: false,
            pan: Pan::default(),
        }
    }

    // every index change goes through here so zoom never carries over
    fn show(&mut self, index: usize) {
        self.index = index;
        self.zoomed = false;
        self.pan = Pan::default();
    }
}

/// Lightbox state machine.
///
/// A closed gallery holds no session at all, so nothing about the previous
/// session can leak into the next `open`. While open, `current_index` is always
/// a valid index into the image set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    session: Option<Session>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, images: ImageSet) {
        log::debug!("opening gallery with {} images", images.len());
        self.session = Some(Session::new(images));
    }

    pub fn close(&mut self) {
        if self.session.take().is_some() {
            log::debug!("gallery closed");
        }
    }

    pub fn next(&mut self) {
        if let Some(s) = self.session.as_mut() {
            let len = s.images.len();
            if len > 1 {
                s.show((s.index + 1) % len);
            }
        }
    }

    pub fn previous(&mut self) {
        if let Some(s) = self.session.as_mut() {
            let len = s.images.len();
            if len > 1 {
                s.show((s.index + len - 1) % len);
            }
        }
    }

    /// Out-of-range indices are rejected and leave the state untouched.
    pub fn jump_to(&mut self, index: usize) {
        let Some(s) = self.session.as_mut() else {
            return;
        };
        if index >= s.images.len() {
            log::warn!(
                "ignoring gallery jump to {index}, only {} images",
                s.images.len()
            );
            return;
        }
        s.show(index);
    }

    pub fn toggle_zoom(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.zoomed = !s.zoomed;
            if !s.zoomed {
                s.pan = Pan::default();
            }
        }
    }

    pub fn toggle_high_contrast(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.high_contrast = !s.high_contrast;
        }
    }

    /// Drag-to-pan. Only meaningful while zoomed; each axis stays within
    /// [`MAX_PAN`] of centre so the image can't be dragged out of view.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if let Some(s) = self.session.as_mut().filter(|s| s.zoomed) {
            s.pan.x = (s.pan.x + dx).clamp(-MAX_PAN, MAX_PAN);
            s.pan.y = (s.pan.y + dy).clamp(-MAX_PAN, MAX_PAN);
        }
    }

    /// Keyboard contract: Escape closes; arrows navigate unless zoomed, in
    /// which case they are left to the browser so the zoomed image can scroll.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let Some(zoomed) = self.session.as_ref().map(|s| s.zoomed) else {
            return KeyOutcome::Ignored;
        };
        match key {
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::ArrowRight if !zoomed => {
                self.next();
                KeyOutcome::Handled
            }
            Key::ArrowLeft if !zoomed => {
                self.previous();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// 0 while closed.
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.index)
    }

    pub fn is_zoomed(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.zoomed)
    }

    pub fn is_high_contrast(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.high_contrast)
    }

    pub fn pan(&self) -> Pan {
        self.session.as_ref().map(|s| s.pan).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.images.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn images(&self) -> Option<&ImageSet> {
        self.session.as_ref().map(|s| &s.images)
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.session.as_ref().and_then(|s| s.images.get(s.index))
    }

    /// Whether the prev/next controls should be offered at all.
    pub fn can_navigate(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.images.len() > 1 && !s.zoomed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> ImageSet {
        ImageSet::new(names.iter().copied()).expect("test image set should not be empty")
    }

    fn open_gallery(names: &[&str]) -> Gallery {
        let mut gallery = Gallery::new();
        gallery.open(images(names));
        gallery
    }

    #[test]
    fn test_empty_image_set_rejected() {
        let res = ImageSet::new(Vec::<String>::new());
        assert_eq!(res, Err(GalleryError::Empty));
    }

    #[test]
    fn test_open_initial_state() {
        for n in 1..6 {
            let names = (0..n).map(|i| format!("img{i}.jpg")).collect::<Vec<_>>();
            let mut gallery = Gallery::new();
            gallery.open(ImageSet::new(names).unwrap());
            assert!(gallery.is_open());
            assert_eq!(gallery.current_index(), 0);
            assert!(!gallery.is_zoomed());
            assert!(!gallery.is_high_contrast());
            assert_eq!(gallery.len(), n);
        }
    }

    #[test]
    fn test_closed_gallery_defaults() {
        let gallery = Gallery::new();
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.is_zoomed());
        assert!(gallery.current_image().is_none());
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_wrap_forward() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        assert_eq!(gallery.current_image().unwrap().as_str(), "A");
        gallery.next();
        assert_eq!(gallery.current_image().unwrap().as_str(), "B");
        gallery.next();
        assert_eq!(gallery.current_image().unwrap().as_str(), "C");
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current_image().unwrap().as_str(), "A");
    }

    #[test]
    fn test_wrap_backward() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        gallery.previous();
        assert_eq!(gallery.current_index(), 2);
        assert_eq!(gallery.current_image().unwrap().as_str(), "C");
    }

    #[test]
    fn test_next_n_times_round_trips() {
        for n in 1..7usize {
            let names = (0..n).map(|i| format!("{i}")).collect::<Vec<_>>();
            for start in 0..n {
                let mut gallery = Gallery::new();
                gallery.open(ImageSet::new(names.clone()).unwrap());
                gallery.jump_to(start);
                for _ in 0..n {
                    gallery.next();
                }
                assert_eq!(gallery.current_index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn test_next_previous_inverse() {
        let mut gallery = open_gallery(&["A", "B", "C", "D"]);
        for start in 0..4 {
            gallery.jump_to(start);
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.current_index(), start);
            gallery.previous();
            gallery.next();
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn test_single_image_does_not_move() {
        let mut gallery = open_gallery(&["A"]);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
        gallery.previous();
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.can_navigate());
    }

    #[test]
    fn test_navigation_clears_zoom() {
        // scenario from the case-study modal: zoom in, then move on
        let mut gallery = open_gallery(&["A", "B"]);
        gallery.toggle_zoom();
        assert!(gallery.is_zoomed());
        gallery.next();
        assert_eq!(gallery.current_index(), 1);
        assert!(!gallery.is_zoomed());

        gallery.toggle_zoom();
        gallery.previous();
        assert!(!gallery.is_zoomed());

        gallery.toggle_zoom();
        gallery.jump_to(1);
        assert!(!gallery.is_zoomed());
    }

    #[test]
    fn test_toggle_zoom_twice_restores() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        gallery.jump_to(2);
        let before = gallery.is_zoomed();
        gallery.toggle_zoom();
        gallery.toggle_zoom();
        assert_eq!(gallery.is_zoomed(), before);
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        gallery.jump_to(1);
        gallery.toggle_zoom();
        gallery.jump_to(3);
        assert_eq!(gallery.current_index(), 1);
        assert!(gallery.is_zoomed());
    }

    #[test]
    fn test_reopen_starts_fresh() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        gallery.next();
        gallery.next();
        gallery.toggle_zoom();
        gallery.toggle_high_contrast();
        gallery.close();
        assert!(!gallery.is_open());

        gallery.open(images(&["X", "Y"]));
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.is_zoomed());
        assert!(!gallery.is_high_contrast());
        assert_eq!(gallery.current_image().unwrap().as_str(), "X");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gallery = open_gallery(&["A"]);
        gallery.close();
        gallery.close();
        assert_eq!(gallery, Gallery::new());
    }

    #[test]
    fn test_operations_noop_when_closed() {
        let mut gallery = Gallery::new();
        gallery.next();
        gallery.previous();
        gallery.toggle_zoom();
        gallery.toggle_high_contrast();
        gallery.jump_to(0);
        gallery.pan_by(5.0, 5.0);
        assert_eq!(gallery, Gallery::new());
    }

    #[test]
    fn test_high_contrast_persists_across_navigation() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        gallery.toggle_high_contrast();
        gallery.next();
        gallery.previous();
        gallery.jump_to(2);
        assert!(gallery.is_high_contrast());
    }

    #[test]
    fn test_pan_only_while_zoomed() {
        let mut gallery = open_gallery(&["A", "B"]);
        gallery.pan_by(10.0, -4.0);
        assert_eq!(gallery.pan(), Pan::default());

        gallery.toggle_zoom();
        gallery.pan_by(10.0, -4.0);
        gallery.pan_by(2.5, 1.0);
        assert_eq!(gallery.pan(), Pan { x: 12.5, y: -3.0 });

        // leaving zoom recentres
        gallery.toggle_zoom();
        assert_eq!(gallery.pan(), Pan::default());

        gallery.toggle_zoom();
        gallery.pan_by(3.0, 3.0);
        gallery.next();
        assert_eq!(gallery.pan(), Pan::default());
    }

    #[test]
    fn test_every_exit_path_closes() {
        // the viewer unmounts its overlay, and with it the key listener,
        // whenever is_open() turns false
        let mut by_button = open_gallery(&["A", "B"]);
        by_button.toggle_zoom();
        by_button.close();
        assert!(!by_button.is_open());

        let mut by_escape = open_gallery(&["A", "B"]);
        by_escape.toggle_zoom();
        assert_eq!(by_escape.handle_key(Key::Escape), KeyOutcome::Closed);
        assert!(!by_escape.is_open());

        let mut by_owner = open_gallery(&["A", "B"]);
        by_owner.next();
        by_owner = Gallery::new();
        assert!(!by_owner.is_open());
        assert_eq!(by_owner.handle_key(Key::ArrowRight), KeyOutcome::Ignored);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut gallery = open_gallery(&["A"]);
        gallery.toggle_zoom();
        for _ in 0..50 {
            gallery.pan_by(100.0, -100.0);
        }
        assert_eq!(gallery.pan(), Pan { x: MAX_PAN, y: -MAX_PAN });

        gallery.pan_by(-50.0, 25.0);
        assert_eq!(gallery.pan(), Pan { x: MAX_PAN - 50.0, y: -MAX_PAN + 25.0 });
    }

    #[test]
    fn test_keyboard_contract() {
        let mut gallery = open_gallery(&["A", "B", "C"]);
        assert_eq!(gallery.handle_key(Key::ArrowRight), KeyOutcome::Handled);
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(gallery.handle_key(Key::ArrowLeft), KeyOutcome::Handled);
        assert_eq!(gallery.handle_key(Key::ArrowLeft), KeyOutcome::Handled);
        assert_eq!(gallery.current_index(), 2);
        assert_eq!(gallery.handle_key(Key::Other), KeyOutcome::Ignored);

        // arrows are locked while zoomed
        gallery.toggle_zoom();
        assert_eq!(gallery.handle_key(Key::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(gallery.handle_key(Key::ArrowLeft), KeyOutcome::Ignored);
        assert_eq!(gallery.current_index(), 2);
        assert!(gallery.is_zoomed());

        assert_eq!(gallery.handle_key(Key::Escape), KeyOutcome::Closed);
        assert!(!gallery.is_open());
        assert_eq!(gallery.handle_key(Key::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from("Enter"), Key::Other);
    }

    #[test]
    fn test_image_set_serde() {
        let set: ImageSet = serde_json::from_str(r#"["/a.jpg","/b.jpg"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first().as_str(), "/a.jpg");
        assert!(serde_json::from_str::<ImageSet>("[]").is_err());
    }
}
