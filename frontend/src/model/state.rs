use crate::config::BehaviorConfig;
use crate::model::posts::{AdditionalPost, CommentIdSource};
use crate::model::toast::ToastSlot;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    config: BehaviorConfig,
    catalog: Vec<AdditionalPost>,
    // None until the first event decides it; the stylesheet owns the initial look.
    pub(crate) navbar_visible: Option<bool>,
    pub(crate) navbar_solid: Option<bool>,
    pub(crate) menu_open: bool,
    pub(crate) posts_loaded: bool,
    pub(crate) comment_ids: CommentIdSource,
    pub(crate) toasts: ToastSlot,
    pub(crate) progress: f64,
}

impl PageState {
    pub fn new(config: BehaviorConfig, catalog: Vec<AdditionalPost>) -> Self {
        Self {
            config,
            catalog,
            navbar_visible: None,
            navbar_solid: None,
            menu_open: false,
            posts_loaded: false,
            comment_ids: CommentIdSource::new(),
            toasts: ToastSlot::new(),
            progress: 0.0,
        }
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[AdditionalPost] {
        &self.catalog
    }

    pub fn navbar_visible(&self) -> Option<bool> {
        self.navbar_visible
    }

    pub fn navbar_solid(&self) -> Option<bool> {
        self.navbar_solid
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn posts_loaded(&self) -> bool {
        self.posts_loaded
    }

    pub fn toasts(&self) -> &ToastSlot {
        &self.toasts
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(BehaviorConfig::default(), Vec::new())
    }
}
